//! NASA公式サイトの埋め込み表示

use leptos::prelude::*;

#[component]
pub fn EmbedPanel(url: String) -> impl IntoView {
    view! {
        <div class="embed-panel">
            <iframe class="embed-frame" src=url.clone() title="NASA EPIC"></iframe>
            <a href=url target="_blank" rel="noopener">"Open NASA EPIC website ↗"</a>
        </div>
    }
}
