//! ステータスバナー

use leptos::prelude::*;
use spectra_common::StatusBanner;

#[component]
pub fn StatusCard(status: ReadSignal<StatusBanner>) -> impl IntoView {
    view! {
        <div class=move || format!("status-card {}", status.get().style().class)>
            <span class="status-icon">{move || status.get().style().icon}</span>
            <span class="status-message">{move || status.get().message}</span>
        </div>
    }
}
