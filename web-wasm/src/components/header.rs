//! ヘッダーコンポーネント（タイトル・時計）

use leptos::prelude::*;
use spectra_common::bootstrap::SYSTEM_NAME;

#[component]
pub fn Header(clock: ReadSignal<String>) -> impl IntoView {
    view! {
        <header class="header">
            <h1>"🛰️ " {SYSTEM_NAME} " - Earth Observation Monitor"</h1>
            <span class="clock">{move || clock.get()}</span>
        </header>
    }
}
