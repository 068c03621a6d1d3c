//! デバッグログ
//!
//! 呼び出し順に追記するだけのログ。並べ替え・重複排除はしない。
//! 各エントリは tracing のイベントとしても出力される。

use chrono::{DateTime, Local};
use serde::Serialize;

pub const CLEARED_MARKER: &str = "Debug log cleared";
pub const INITIALIZED_MESSAGE: &str = "System monitor initialized";

/// ログレベル
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn icon(&self) -> &'static str {
        match self {
            LogLevel::Info => "🔹",
            LogLevel::Success => "✅",
            LogLevel::Warning => "⚠️",
            LogLevel::Error => "❌",
        }
    }
}

/// ログエントリ
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    /// クリア直後のマーカー行はレベルなし
    pub level: Option<LogLevel>,
    pub message: String,
}

impl LogEntry {
    /// "[HH:MM:SS] 🔹 message" 形式
    pub fn display_line(&self) -> String {
        let time = self.timestamp.format("%H:%M:%S");
        match self.level {
            Some(level) => format!("[{}] {} {}", time, level.icon(), self.message),
            None => format!("[{}] {}", time, self.message),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DebugLog {
    entries: Vec<LogEntry>,
}

impl DebugLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, message: impl Into<String>, level: LogLevel) -> &LogEntry {
        let message = message.into();
        match level {
            LogLevel::Info | LogLevel::Success => tracing::info!(level = ?level, "{}", message),
            LogLevel::Warning => tracing::warn!("{}", message),
            LogLevel::Error => tracing::error!("{}", message),
        }
        self.entries.push(LogEntry {
            timestamp: Local::now(),
            level: Some(level),
            message,
        });
        &self.entries[self.entries.len() - 1]
    }

    /// マーカー行と初期化メッセージだけの状態に戻す
    pub fn clear(&mut self) {
        self.entries.clear();
        self.entries.push(LogEntry {
            timestamp: Local::now(),
            level: None,
            message: CLEARED_MARKER.to_string(),
        });
        self.append(INITIALIZED_MESSAGE, LogLevel::Info);
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    /// 表示領域に収まる末尾 `limit` 件
    pub fn visible(&self, limit: usize) -> &[LogEntry] {
        let start = self.entries.len().saturating_sub(limit);
        &self.entries[start..]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 指定文字列を含むエントリがあるか
    pub fn contains(&self, needle: &str) -> bool {
        self.entries.iter().any(|e| e.message.contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::layer::SubscriberExt;

    #[test]
    fn test_append_keeps_call_order() {
        let mut log = DebugLog::new();
        log.append("first", LogLevel::Info);
        log.append("second", LogLevel::Warning);
        log.append("first", LogLevel::Info);

        let messages: Vec<_> = log.entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["first", "second", "first"]);
        assert_eq!(log.entries()[1].level, Some(LogLevel::Warning));
    }

    #[test]
    fn test_clear_resets_to_marker() {
        let mut log = DebugLog::new();
        log.append("something", LogLevel::Error);
        log.clear();

        assert_eq!(log.len(), 2);
        assert_eq!(log.entries()[0].message, CLEARED_MARKER);
        assert_eq!(log.entries()[0].level, None);
        assert_eq!(log.entries()[1].message, INITIALIZED_MESSAGE);
        assert!(!log.contains("something"));
    }

    #[test]
    fn test_visible_window() {
        let mut log = DebugLog::new();
        for i in 0..10 {
            log.append(format!("entry {}", i), LogLevel::Info);
        }
        let tail = log.visible(3);
        assert_eq!(tail.len(), 3);
        assert_eq!(tail[0].message, "entry 7");
        assert_eq!(log.visible(100).len(), 10);
        assert_eq!(log.len(), 10);
    }

    #[test]
    fn test_display_line_format() {
        let mut log = DebugLog::new();
        let line = log.append("Network connectivity: OK", LogLevel::Success).display_line();
        assert!(line.starts_with('['));
        assert!(line.ends_with("✅ Network connectivity: OK"));
    }

    #[test]
    fn test_icons() {
        assert_eq!(LogLevel::Info.icon(), "🔹");
        assert_eq!(LogLevel::Success.icon(), "✅");
        assert_eq!(LogLevel::Warning.icon(), "⚠️");
        assert_eq!(LogLevel::Error.icon(), "❌");
    }

    /// 追記ごとに発行されたイベント（レベル・メッセージ）を記録する
    #[derive(Clone, Default)]
    struct EventCapture(Arc<Mutex<Vec<(tracing::Level, String)>>>);

    struct MessageVisitor(String);

    impl tracing::field::Visit for MessageVisitor {
        fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
            if field.name() == "message" {
                self.0 = format!("{value:?}");
            }
        }
    }

    impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCapture {
        fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
            let mut visitor = MessageVisitor(String::new());
            event.record(&mut visitor);
            self.0
                .lock()
                .unwrap()
                .push((*event.metadata().level(), visitor.0));
        }
    }

    #[test]
    fn test_append_emits_tracing_event_per_level() {
        let capture = EventCapture::default();
        let subscriber = tracing_subscriber::registry().with(capture.clone());

        tracing::subscriber::with_default(subscriber, || {
            let mut log = DebugLog::new();
            log.append("Testing API connection 1...", LogLevel::Info);
            log.append("Demo data loaded successfully", LogLevel::Success);
            log.append("Rate limit exceeded (429) - Trying next key", LogLevel::Warning);
            log.append("All API attempts failed", LogLevel::Error);
        });

        let events = capture.0.lock().unwrap().clone();
        assert_eq!(
            events,
            vec![
                (tracing::Level::INFO, "Testing API connection 1...".to_string()),
                (tracing::Level::INFO, "Demo data loaded successfully".to_string()),
                (tracing::Level::WARN, "Rate limit exceeded (429) - Trying next key".to_string()),
                (tracing::Level::ERROR, "All API attempts failed".to_string()),
            ]
        );
    }
}
