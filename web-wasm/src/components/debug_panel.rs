//! デバッグログパネル

use leptos::prelude::*;
use spectra_common::{LogEntry, LogLevel};

/// 表示する末尾の件数
pub const LOG_WINDOW: usize = 50;

pub fn entry_class(entry: &LogEntry) -> &'static str {
    match entry.level {
        Some(LogLevel::Success) => "log-entry log-success",
        Some(LogLevel::Warning) => "log-entry log-warning",
        Some(LogLevel::Error) => "log-entry log-error",
        Some(LogLevel::Info) | None => "log-entry",
    }
}

#[component]
pub fn DebugPanel<F>(log: ReadSignal<Vec<LogEntry>>, on_clear: F) -> impl IntoView
where
    F: Fn(()) + 'static + Clone + Send + Sync,
{
    view! {
        <section class="debug-panel">
            <div class="debug-header">
                <h2>"🔧 Debug Log"</h2>
                <button class="btn btn-small" on:click=move |_| on_clear(())>"Clear"</button>
            </div>
            <div class="debug-entries">
                {move || {
                    let entries = log.get();
                    let start = entries.len().saturating_sub(LOG_WINDOW);
                    entries[start..]
                        .iter()
                        .map(|entry| view! { <div class=entry_class(entry)>{entry.display_line()}</div> })
                        .collect_view()
                }}
            </div>
        </section>
    }
}
