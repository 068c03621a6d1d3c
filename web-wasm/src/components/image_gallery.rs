//! 画像ギャラリー
//!
//! 画像の読込に失敗したカードはプレースホルダー画像へ差し替える。

use leptos::prelude::*;
use spectra_common::ImageCard;

/// 表示する画像URL
pub fn image_source(card: &ImageCard, failed: bool) -> &str {
    if failed {
        card.fallback_url
    } else {
        &card.image_url
    }
}

#[component]
pub fn ImageGallery(cards: Vec<ImageCard>) -> impl IntoView {
    view! {
        <div class="image-gallery">
            {cards
                .into_iter()
                .map(|card| view! { <ImageCardView card=card /> })
                .collect_view()}
        </div>
    }
}

#[component]
fn ImageCardView(card: ImageCard) -> impl IntoView {
    let (failed, set_failed) = signal(false);
    let badge = if card.is_demo { "badge badge-demo" } else { "badge badge-live" };
    let src = {
        let card = card.clone();
        move || image_source(&card, failed.get()).to_string()
    };

    view! {
        <article class="image-card" data-id=card.identifier>
            <h3 class="card-title">
                <span class=badge></span>
                {card.title}
            </h3>
            <img
                src=src
                alt=card.alt
                loading="lazy"
                on:error=move |_| set_failed.set(true)
            />
            <p class="caption">{card.caption}</p>
            <pre class="metadata">{card.metadata_json}</pre>
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use spectra_common::config::UNAVAILABLE_PLACEHOLDER_URL;

    fn card() -> ImageCard {
        ImageCard {
            index: 1,
            identifier: "20241011011347".to_string(),
            title: "EPIC Image 1 - 10/11/2024 🛰️ LIVE".to_string(),
            image_url: "https://epic.gsfc.nasa.gov/archive/natural/2024/10/11/png/x.png".to_string(),
            fallback_url: UNAVAILABLE_PLACEHOLDER_URL,
            alt: "x".to_string(),
            caption: "c".to_string(),
            metadata_json: "{}".to_string(),
            is_demo: false,
        }
    }

    #[test]
    fn test_image_source_switches_on_failure() {
        let card = card();
        assert_eq!(image_source(&card, false), card.image_url);
        assert_eq!(image_source(&card, true), UNAVAILABLE_PLACEHOLDER_URL);
    }
}
