//! データソース選択ボタン

use crate::app::Command;
use leptos::prelude::*;
use spectra_common::DataSource;

pub fn source_button_label(kind: DataSource) -> &'static str {
    match kind {
        DataSource::Live => "🛰️ NASA Live API",
        DataSource::Demo => "🔸 Demo Data",
        DataSource::Embedded => "🌐 NASA Website",
    }
}

#[component]
pub fn Controls<F>(on_command: F) -> impl IntoView
where
    F: Fn(Command) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="controls">
            {DataSource::ALL
                .into_iter()
                .map(|kind| {
                    let on_command = on_command.clone();
                    view! {
                        <button
                            class=format!("btn btn-source btn-{}", kind.as_str())
                            on:click=move |_| on_command(Command::Select(kind))
                        >
                            {source_button_label(kind)}
                        </button>
                    }
                })
                .collect_view()}

            <button
                class="btn btn-secondary"
                on:click={
                    let on_command = on_command.clone();
                    move |_| on_command(Command::Reload)
                }
            >
                "🔄 Reload"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_source_has_a_button() {
        let labels: Vec<_> = DataSource::ALL.iter().map(|k| source_button_label(*k)).collect();
        assert_eq!(labels.len(), 3);
        assert!(labels.iter().all(|l| !l.is_empty()));
    }
}
