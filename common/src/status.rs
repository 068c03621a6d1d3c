//! ステータス表示のルックアップテーブル
//!
//! 状態を保持しない。未知の名前はデフォルト（unknown / loading）に落とす。

use serde::{Deserialize, Serialize};

/// システムヘルス表示
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Health {
    Working,
    Warning,
    Error,
    #[default]
    Unknown,
}

impl Health {
    pub fn parse(name: &str) -> Self {
        match name {
            "working" => Health::Working,
            "warning" => Health::Warning,
            "error" => Health::Error,
            _ => Health::Unknown,
        }
    }
}

/// ヘルス表示（色・ラベル）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HealthDisplay {
    pub color: &'static str,
    pub label: &'static str,
}

pub fn report_health(health: Health) -> HealthDisplay {
    let (color, label) = match health {
        Health::Working => ("#4CAF50", "System Operational"),
        Health::Warning => ("#FF9800", "Limited Functionality"),
        Health::Error => ("#F44336", "System Impaired"),
        Health::Unknown => ("#12A7B8", "Initializing"),
    };
    HealthDisplay { color, label }
}

/// ステータスバナーの種別
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StatusKind {
    #[default]
    Loading,
    Success,
    Error,
    Warning,
}

impl StatusKind {
    pub fn parse(name: &str) -> Self {
        match name {
            "success" => StatusKind::Success,
            "error" => StatusKind::Error,
            "warning" => StatusKind::Warning,
            _ => StatusKind::Loading,
        }
    }
}

/// ステータスバナーの表示（アイコン・CSSクラス）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusStyle {
    pub icon: &'static str,
    pub class: &'static str,
}

/// ステータスバナー（メッセージ・種別）
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusBanner {
    pub message: String,
    pub kind: StatusKind,
}

impl StatusBanner {
    pub fn new(message: impl Into<String>, kind: StatusKind) -> Self {
        Self { message: message.into(), kind }
    }

    pub fn style(&self) -> StatusStyle {
        report_status(self.kind)
    }
}

impl Default for StatusBanner {
    fn default() -> Self {
        Self::new("Initializing...", StatusKind::Loading)
    }
}

pub fn report_status(kind: StatusKind) -> StatusStyle {
    let (icon, class) = match kind {
        StatusKind::Loading => ("⏳", "loading"),
        StatusKind::Success => ("✅", "success"),
        StatusKind::Error => ("❌", "error"),
        StatusKind::Warning => ("⚠️", "warning"),
    };
    StatusStyle { icon, class }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_table() {
        assert_eq!(
            report_health(Health::Working),
            HealthDisplay { color: "#4CAF50", label: "System Operational" }
        );
        assert_eq!(report_health(Health::Warning).label, "Limited Functionality");
        assert_eq!(report_health(Health::Error).color, "#F44336");
        assert_eq!(report_health(Health::Unknown).label, "Initializing");
    }

    #[test]
    fn test_status_table() {
        assert_eq!(report_status(StatusKind::Loading), StatusStyle { icon: "⏳", class: "loading" });
        assert_eq!(report_status(StatusKind::Success).class, "success");
        assert_eq!(report_status(StatusKind::Error).icon, "❌");
        assert_eq!(report_status(StatusKind::Warning).class, "warning");
    }

    #[test]
    fn test_unknown_names_degrade_to_defaults() {
        assert_eq!(Health::parse("degraded"), Health::Unknown);
        assert_eq!(StatusKind::parse("pending"), StatusKind::Loading);
        assert_eq!(report_health(Health::parse("")).label, "Initializing");
    }
}
