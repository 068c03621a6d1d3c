//! 静的設定（エンドポイントURL・APIキー一覧）
//!
//! すべての値はコンパイル時のデフォルトを持つ。CLIのみJSONでの上書きを受け付ける。

use serde::{Deserialize, Serialize};

pub const EPIC_API_URL: &str = "https://api.nasa.gov/EPIC/api/natural/images";
pub const APOD_API_URL: &str = "https://api.nasa.gov/planetary/apod";
pub const EPIC_ARCHIVE_BASE: &str = "https://epic.gsfc.nasa.gov/archive/natural";
pub const EPIC_WEBSITE_URL: &str = "https://epic.gsfc.nasa.gov/";
pub const PROBE_URL: &str = "https://httpbin.org/status/200";
pub const DEMO_DATA_PATH: &str = "./demo-data.json";

pub const DEMO_PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/600x400/1D2833/D4E5DE?text=SPECTRA+DEMO+IMAGE";
pub const UNAVAILABLE_PLACEHOLDER_URL: &str =
    "https://via.placeholder.com/600x400/1D2833/12A7B8?text=IMAGE+UNAVAILABLE";

/// 既知のNASA APIエンドポイント（診断ログ用）
pub const KNOWN_ENDPOINTS: [(&str, &str); 2] = [("EPIC", EPIC_API_URL), ("APOD", APOD_API_URL)];

const DEFAULT_CREDENTIALS: [&str; 2] = ["LQ0BWLsTkObLc1qqahwOR4BenZEQvVsWttCGqMPK", "DEMO_KEY"];

/// APIキー一覧（先頭から順に試行する）
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CredentialList(Vec<String>);

impl CredentialList {
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self(keys.into_iter().map(Into::into).collect())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// ログ表示用に伏せ字にしたキー
    pub fn masked(&self) -> Vec<String> {
        self.0.iter().map(|key| mask_key(key)).collect()
    }
}

impl Default for CredentialList {
    fn default() -> Self {
        Self::new(DEFAULT_CREDENTIALS)
    }
}

impl std::fmt::Debug for CredentialList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.masked()).finish()
    }
}

/// 先頭4文字のみ残して伏せ字にする
pub fn mask_key(key: &str) -> String {
    let visible: String = key.chars().take(4).collect();
    if key.chars().count() <= 4 {
        "*".repeat(key.chars().count())
    } else {
        format!("{}…", visible)
    }
}

/// ダッシュボード設定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub epic_url: String,
    pub archive_base: String,
    pub demo_data: String,
    pub probe_url: String,
    pub embed_url: String,
    pub credentials: CredentialList,
    /// 起動後、自動でライブAPIへ接続するまでの待ち時間
    pub auto_load_delay_ms: u64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            epic_url: EPIC_API_URL.into(),
            archive_base: EPIC_ARCHIVE_BASE.into(),
            demo_data: DEMO_DATA_PATH.into(),
            probe_url: PROBE_URL.into(),
            embed_url: EPIC_WEBSITE_URL.into(),
            credentials: CredentialList::default(),
            auto_load_delay_ms: 2_000,
        }
    }
}

impl DashboardConfig {
    /// ライブAPIのリクエストURL
    pub fn live_url(&self, credential: &str) -> String {
        format!("{}?api_key={}", self.epic_url, credential)
    }
}
