//! エラー型定義

use thiserror::Error;

/// 共通エラー型（設定ファイル読込など）
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, Error>;

/// データ取得エラー
///
/// `AllCredentialsExhausted` 以外はAPIキー1本分の失敗で、ループ内で回復される。
#[derive(Error, Debug, Clone, PartialEq)]
pub enum FetchError {
    #[error("Rate limit exceeded (429)")]
    RateLimited,

    #[error("Service unavailable (503)")]
    ServiceUnavailable,

    #[error("HTTP {status}: {text}")]
    Http { status: u16, text: String },

    #[error("No imagery data available")]
    EmptyPayload,

    #[error("Network error: {0}")]
    Network(String),

    #[error("Invalid response payload: {0}")]
    Parse(String),

    #[error("Resource unavailable: {0}")]
    Resource(String),

    #[error("All API attempts failed. Last error: {}", describe_last(.last_error))]
    AllCredentialsExhausted { last_error: Option<Box<FetchError>> },
}

fn describe_last(last_error: &Option<Box<FetchError>>) -> String {
    match last_error {
        Some(err) => err.to_string(),
        None => "no API keys configured".to_string(),
    }
}

impl FetchError {
    /// HTTPステータスからエラーを分類（成功ステータスはNone）
    pub fn from_status(status: u16, text: &str) -> Option<Self> {
        match status {
            200..=299 => None,
            429 => Some(FetchError::RateLimited),
            503 => Some(FetchError::ServiceUnavailable),
            _ => Some(FetchError::Http {
                status,
                text: text.to_string(),
            }),
        }
    }

    /// ユーザー向けのメッセージ（全キー失敗時は最後のエラーを表示）
    pub fn user_message(&self) -> String {
        match self {
            FetchError::AllCredentialsExhausted { last_error } => describe_last(last_error),
            other => other.to_string(),
        }
    }
}
