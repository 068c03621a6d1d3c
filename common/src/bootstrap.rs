//! 起動処理
//!
//! 時計・自動接続のタイマーは表示層側で持ち、ここでは起動時に1回だけ実行する処理を定義する。

use crate::config::{DashboardConfig, KNOWN_ENDPOINTS};
use crate::controller::DataSourceController;
use crate::debug_log::LogLevel;
use crate::error::FetchError;
use crate::status::StatusKind;
use crate::transport::ImageryTransport;
use crate::types::DataSource;
use chrono::{DateTime, Local};
use std::time::Duration;

pub const SYSTEM_NAME: &str = "SPECTRA";

/// 時計表示の更新間隔
pub const CLOCK_TICK: Duration = Duration::from_secs(1);

/// 時計表示用の文字列
pub fn clock_text(now: DateTime<Local>) -> String {
    now.format("%Y-%m-%d %H:%M:%S").to_string()
}

pub fn auto_load_delay(config: &DashboardConfig) -> Duration {
    Duration::from_millis(config.auto_load_delay_ms)
}

impl<T: ImageryTransport> DataSourceController<T> {
    /// 起動時診断（結果はデバッグログにのみ出す）
    pub async fn run_initial_diagnostics(&mut self) {
        self.log(format!("{} System Initialization", SYSTEM_NAME), LogLevel::Info);

        let agent = self.transport().user_agent();
        let agent = agent.split(' ').next().unwrap_or_default().to_string();
        self.log(format!("User Agent: {}", agent), LogLevel::Info);
        self.log(format!("Available API endpoints: {}", KNOWN_ENDPOINTS.len()), LogLevel::Info);

        let probe_url = self.config().probe_url.clone();
        let probe = self.transport().get(&probe_url).await;
        match probe {
            Ok(response) if response.is_success() => {
                self.log("Network connectivity: OK", LogLevel::Success);
            }
            Ok(response) => {
                self.log(
                    format!("Network connectivity: probe returned HTTP {}", response.status),
                    LogLevel::Warning,
                );
            }
            Err(err) => {
                tracing::debug!(error = %err, "connectivity probe failed");
                self.log("Network connectivity: Check internet connection", LogLevel::Error);
            }
        }
    }

    /// 起動後の自動接続（失敗時は手動選択を促す）
    pub async fn auto_load(&mut self) -> Result<(), FetchError> {
        self.log("Attempting automatic connection to NASA API...", LogLevel::Info);
        let result = self.select_source(DataSource::Live).await;
        if result.is_err() {
            self.log("Automatic connection failed, ready for manual selection", LogLevel::Warning);
            self.set_status("Select a data source to begin", StatusKind::Warning);
        }
        result
    }
}
