//! 表示層への通知
//!
//! コントローラーは画面に見える変化をすべてこのトレイト経由で通知する。
//! 既定実装は何もしない。

use crate::controller::Panel;
use crate::debug_log::{DebugLog, LogEntry};
use crate::status::{Health, StatusBanner};
use chrono::{DateTime, Local};

pub trait Presenter {
    fn status_changed(&self, _banner: &StatusBanner) {}

    fn health_changed(&self, _health: Health) {}

    fn source_changed(&self, _label: &str, _at: DateTime<Local>) {}

    fn panel_changed(&self, _panel: &Panel) {}

    fn log_appended(&self, _entry: &LogEntry) {}

    fn log_cleared(&self, _log: &DebugLog) {}
}

/// 何も表示しないPresenter（テスト・ヘッドレス用）
#[derive(Debug, Default, Clone, Copy)]
pub struct NullPresenter;

impl Presenter for NullPresenter {}
