//! システム状態パネル（ヘルス・データソース・最終更新）

use chrono::{DateTime, Local};
use leptos::prelude::*;
use spectra_common::{report_health, Health};

/// 現在のデータソース表示
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceInfo {
    pub label: String,
    pub updated: String,
}

impl SourceInfo {
    pub fn new(label: &str, at: DateTime<Local>) -> Self {
        Self {
            label: label.to_string(),
            updated: at.format("%H:%M:%S").to_string(),
        }
    }
}

#[component]
pub fn SystemPanel(
    health: ReadSignal<Health>,
    source: ReadSignal<Option<SourceInfo>>,
) -> impl IntoView {
    let display = move || report_health(health.get());

    view! {
        <div class="system-panel">
            <div class="health">
                <span
                    class="health-dot"
                    style=move || format!("background-color: {}", display().color)
                ></span>
                <span class="health-label">{move || display().label}</span>
            </div>
            <div class="source">
                "Data Source: "
                <strong>{move || source.get().map(|s| s.label).unwrap_or_else(|| "None".to_string())}</strong>
            </div>
            <div class="last-update">
                "Last Update: "
                {move || source.get().map(|s| s.updated).unwrap_or_else(|| "--:--:--".to_string())}
            </div>
        </div>
    }
}
