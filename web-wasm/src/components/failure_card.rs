//! ライブAPI失敗時のカード（復旧操作付き）

use crate::app::Command;
use leptos::prelude::*;
use spectra_common::FailureCard;

#[component]
pub fn FailureCardView<F>(card: FailureCard, on_command: F) -> impl IntoView
where
    F: Fn(Command) + 'static + Clone + Send + Sync,
{
    view! {
        <div class="failure-card">
            <h3>{card.heading}</h3>
            <p class="hint">{card.hint}</p>
            <div class="recovery-actions">
                {card
                    .actions
                    .into_iter()
                    .map(|action| {
                        let on_command = on_command.clone();
                        view! {
                            <button class="btn" on:click=move |_| on_command(Command::Recover(action))>
                                {format!("{} {}", action.icon(), action.label())}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <p class="error-detail">{card.error_detail}</p>
            <p class="attempts">{format!("Failed connection attempts: {}", card.attempts)}</p>
        </div>
    }
}
