//! データモデルの型定義
//!
//! - ImageRecord: EPIC APIまたはデモデータの1レコード
//! - DataSource: 表示中のデータソース
//! - ApplicationState: コントローラーが所有するアプリケーション状態

use chrono::{DateTime, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// 画像中心の緯度経度
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

/// DSCOVR衛星のJ2000座標
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct J2000Position {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// EPIC画像レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageRecord {
    pub identifier: String,

    #[serde(default)]
    pub caption: Option<String>,

    /// 拡張子なしのファイル名（例: epic_1b_20241011011347）
    pub image: String,

    /// 撮影日時（例: "2024-10-11 01:13:47"）
    pub date: String,

    pub centroid_coordinates: Coordinates,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dscovr_j2000_position: Option<J2000Position>,
}

impl ImageRecord {
    /// `date` を日時として解釈する
    ///
    /// EPICは "YYYY-MM-DD HH:MM:SS" を返すが、ISO 8601や日付のみも受け付ける。
    pub fn captured_at(&self) -> Option<NaiveDateTime> {
        let raw = self.date.trim();
        for format in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(raw, format) {
                return Some(dt);
            }
        }
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.naive_utc());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
    }
}

/// データソース
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DataSource {
    Live,
    Demo,
    Embedded,
}

impl DataSource {
    pub const ALL: [DataSource; 3] = [DataSource::Live, DataSource::Demo, DataSource::Embedded];

    pub fn as_str(&self) -> &'static str {
        match self {
            DataSource::Live => "live",
            DataSource::Demo => "demo",
            DataSource::Embedded => "embed",
        }
    }

    /// 画面に表示するソース名
    pub fn label(&self) -> &'static str {
        match self {
            DataSource::Live => "NASA LIVE API",
            DataSource::Demo => "DEMO DATA",
            DataSource::Embedded => "NASA EMBED",
        }
    }

    /// 名前からソースを解決（未知の名前はNone）
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "live" | "api" => Some(DataSource::Live),
            "demo" | "mock" => Some(DataSource::Demo),
            "embed" | "embedded" => Some(DataSource::Embedded),
            _ => None,
        }
    }
}

impl std::str::FromStr for DataSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DataSource::from_name(s)
            .ok_or_else(|| format!("Unknown source: {}. Use live, demo, or embed", s))
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// ライブAPIの状態
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ApiHealth {
    #[default]
    Unknown,
    Working,
    Error,
}

/// アプリケーション状態
///
/// `current_source` は取得開始時点で更新される（成功を意味しない）。
/// `consecutive_error_count` は全キー失敗時のみ加算される。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ApplicationState {
    pub current_source: Option<DataSource>,
    pub last_update: Option<DateTime<Local>>,
    pub consecutive_error_count: u32,
    pub api_health: ApiHealth,
}
