//! ターミナル表示
//!
//! コントローラーからの通知をそのまま標準出力へ書き出す。
//! 時計スピナーが動いている間は ProgressBar::println 経由で出力する。

use chrono::{DateTime, Local};
use indicatif::{ProgressBar, ProgressStyle};
use spectra_common::{
    clock_text, report_health, DebugLog, Health, LogEntry, Panel, Presenter, StatusBanner,
};
use std::time::Duration;

/// 時計スピナーを作成する
pub fn clock_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.cyan} 🛰️  SPECTRA  {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(clock_text(Local::now()));
    pb.enable_steady_tick(Duration::from_millis(120));
    pb
}

#[derive(Clone, Default)]
pub struct TerminalPresenter {
    clock: Option<ProgressBar>,
    show_log: bool,
}

impl TerminalPresenter {
    pub fn new(show_log: bool) -> Self {
        Self { clock: None, show_log }
    }

    pub fn with_clock(mut self, clock: ProgressBar) -> Self {
        self.clock = Some(clock);
        self
    }

    fn line(&self, text: impl AsRef<str>) {
        match &self.clock {
            Some(pb) => pb.println(text.as_ref()),
            None => println!("{}", text.as_ref()),
        }
    }
}

impl Presenter for TerminalPresenter {
    fn status_changed(&self, banner: &StatusBanner) {
        self.line(format!("{} {}", banner.style().icon, banner.message));
    }

    fn health_changed(&self, health: Health) {
        if self.show_log {
            self.line(format!("   system: {}", report_health(health).label));
        }
    }

    fn source_changed(&self, label: &str, at: DateTime<Local>) {
        self.line(format!("📡 {} ({})", label, clock_text(at)));
    }

    fn panel_changed(&self, panel: &Panel) {
        if !matches!(panel, Panel::Empty) {
            self.line(format_panel(panel));
        }
    }

    fn log_appended(&self, entry: &LogEntry) {
        if self.show_log {
            self.line(format!("   {}", entry.display_line()));
        }
    }

    fn log_cleared(&self, log: &DebugLog) {
        self.line(format_log(log, log.len()));
    }
}

/// パネル内容をテキスト化
pub fn format_panel(panel: &Panel) -> String {
    let mut out = String::new();
    match panel {
        Panel::Empty => {}
        Panel::Gallery(cards) => {
            for card in cards {
                out.push_str(&format!("\n── {}\n", card.title));
                out.push_str(&format!("   image:   {}\n", card.image_url));
                out.push_str(&format!("   caption: {}\n", card.caption));
                for line in card.metadata_json.lines() {
                    out.push_str(&format!("   │ {}\n", line));
                }
            }
        }
        Panel::Failure(card) => {
            out.push_str(&format!("\n{}\n", card.heading));
            out.push_str(&format!("   {}\n", card.hint));
            for (i, action) in card.actions.iter().enumerate() {
                out.push_str(&format!("   [{}] {} {}\n", i + 1, action.icon(), action.label()));
            }
            out.push_str(&format!("   {}\n", card.error_detail));
            out.push_str(&format!("   Failed connection attempts: {}\n", card.attempts));
        }
        Panel::Embedded { url } => {
            out.push_str(&format!("\n🌐 NASA EPIC website: {}\n", url));
        }
    }
    out
}

/// デバッグログの末尾 `limit` 件をテキスト化
pub fn format_log(log: &DebugLog, limit: usize) -> String {
    log.visible(limit)
        .iter()
        .map(|entry| format!("   {}", entry.display_line()))
        .collect::<Vec<_>>()
        .join("\n")
}
