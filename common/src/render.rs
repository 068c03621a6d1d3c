//! 画像カードの生成
//!
//! ImageRecordの一覧を表示用のカード記述子へ変換する純粋関数。
//! DOMやターミナルへの書き込みは呼び出し側（Presenter）の責務。

use crate::config::{DEMO_PLACEHOLDER_URL, EPIC_ARCHIVE_BASE, UNAVAILABLE_PLACEHOLDER_URL};
use crate::error::FetchError;
use crate::status::{StatusBanner, StatusKind};
use crate::types::{Coordinates, ImageRecord};
use serde::Serialize;

/// 1回の描画で表示する最大枚数
pub const MAX_CARDS: usize = 3;

pub const NO_CAPTION: &str = "No caption available";

/// 画像カード
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ImageCard {
    /// 1始まりの表示番号
    pub index: usize,
    pub identifier: String,
    pub title: String,
    pub image_url: String,
    /// 画像の読込失敗時に差し替えるURL
    pub fallback_url: &'static str,
    pub alt: String,
    pub caption: String,
    /// メタデータのJSON（整形済み）
    pub metadata_json: String,
    pub is_demo: bool,
}

/// 描画結果（カードとサマリーバナー）
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Gallery {
    pub cards: Vec<ImageCard>,
    pub summary: StatusBanner,
}

/// カードに埋め込むメタデータ（キー順を固定するため構造体で持つ）
#[derive(Serialize)]
struct CardMetadata<'a> {
    date: &'a str,
    coordinates: Coordinates,
    data_quality: &'static str,
    resolution: &'static str,
}

/// レコード一覧をカードへ変換（先頭3件まで）
pub fn render(records: &[ImageRecord], is_demo: bool) -> Gallery {
    render_with_archive(records, is_demo, EPIC_ARCHIVE_BASE)
}

pub fn render_with_archive(records: &[ImageRecord], is_demo: bool, archive_base: &str) -> Gallery {
    let cards: Vec<ImageCard> = records
        .iter()
        .take(MAX_CARDS)
        .enumerate()
        .map(|(i, record)| build_card(i + 1, record, is_demo, archive_base))
        .collect();

    let summary = if is_demo {
        StatusBanner::new(format!("Loaded {} EPIC images (Demo Data)", cards.len()), StatusKind::Warning)
    } else {
        StatusBanner::new(format!("Loaded {} EPIC images (Live NASA Data)", cards.len()), StatusKind::Success)
    };

    Gallery { cards, summary }
}

fn build_card(index: usize, record: &ImageRecord, is_demo: bool, archive_base: &str) -> ImageCard {
    let captured = record.captured_at();
    let date_label = captured
        .map(|dt| dt.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|| "Invalid Date".to_string());

    let image_url = if is_demo {
        DEMO_PLACEHOLDER_URL.to_string()
    } else {
        match captured {
            Some(dt) => archive_image_url(archive_base, &dt.format("%Y/%m/%d").to_string(), &record.image),
            // 日付が読めないとアーカイブのパスを組み立てられない
            None => UNAVAILABLE_PLACEHOLDER_URL.to_string(),
        }
    };

    let badge = if is_demo { "🔸 DEMO" } else { "🛰️ LIVE" };

    let metadata = CardMetadata {
        date: &record.date,
        coordinates: record.centroid_coordinates,
        data_quality: if is_demo { "Demonstration data for testing" } else { "Live from NASA EPIC API" },
        resolution: if is_demo { "Simulated" } else { "Actual satellite data" },
    };

    ImageCard {
        index,
        identifier: record.identifier.clone(),
        title: format!("EPIC Image {} - {} {}", index, date_label, badge),
        image_url,
        fallback_url: UNAVAILABLE_PLACEHOLDER_URL,
        alt: format!("EPIC Earth Image from {}", date_label),
        caption: record
            .caption
            .as_deref()
            .filter(|c| !c.is_empty())
            .unwrap_or(NO_CAPTION)
            .to_string(),
        metadata_json: serde_json::to_string_pretty(&metadata).unwrap_or_default(),
        is_demo,
    }
}

/// アーカイブ画像URL: {base}/{yyyy}/{mm}/{dd}/png/{image}.png
pub fn archive_image_url(archive_base: &str, ymd_path: &str, image: &str) -> String {
    format!("{}/{}/png/{}.png", archive_base.trim_end_matches('/'), ymd_path, image)
}

/// 失敗カードから選べる復旧操作
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RecoveryAction {
    UseDemo,
    ShowEmbedded,
    RetryLive,
}

impl RecoveryAction {
    pub const ALL: [RecoveryAction; 3] =
        [RecoveryAction::UseDemo, RecoveryAction::ShowEmbedded, RecoveryAction::RetryLive];

    pub fn label(&self) -> &'static str {
        match self {
            RecoveryAction::UseDemo => "Use Demo Data",
            RecoveryAction::ShowEmbedded => "NASA Website",
            RecoveryAction::RetryLive => "Retry API",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            RecoveryAction::UseDemo => "🔸",
            RecoveryAction::ShowEmbedded => "🌐",
            RecoveryAction::RetryLive => "🔄",
        }
    }
}

/// ライブAPIの全キー失敗時に表示するカード
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureCard {
    pub heading: String,
    pub hint: String,
    pub actions: Vec<RecoveryAction>,
    pub error_detail: String,
    pub attempts: u32,
}

pub fn render_failure(error: &FetchError, attempts: u32) -> FailureCard {
    FailureCard {
        heading: "🌌 NASA EPIC API Currently Unavailable".to_string(),
        hint: "Common issues: Rate limiting, service maintenance, or network connectivity.".to_string(),
        actions: RecoveryAction::ALL.to_vec(),
        error_detail: format!("Error details: {}", error.user_message()),
        attempts,
    }
}
