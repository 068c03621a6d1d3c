//! SPECTRA Common Library
//!
//! CLIとWeb(WASM)で共有されるデータモデル・描画・データソース制御

pub mod types;
pub mod config;
pub mod error;
pub mod status;
pub mod debug_log;
pub mod render;
pub mod transport;
pub mod presenter;
pub mod controller;
pub mod bootstrap;
pub mod demo;

pub use types::{ApiHealth, ApplicationState, Coordinates, DataSource, ImageRecord};
pub use config::{CredentialList, DashboardConfig};
pub use error::{Error, FetchError, Result};
pub use status::{report_health, report_status, Health, HealthDisplay, StatusBanner, StatusKind, StatusStyle};
pub use debug_log::{DebugLog, LogEntry, LogLevel};
pub use render::{render, render_failure, FailureCard, Gallery, ImageCard, RecoveryAction};
pub use transport::{HttpResponse, ImageryTransport};
pub use presenter::{NullPresenter, Presenter};
pub use controller::{Dashboard, DataSourceController, Panel};
pub use bootstrap::clock_text;
