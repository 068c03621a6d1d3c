use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpectraError {
    #[error("設定エラー: {0}")]
    Config(String),

    #[error("設定ファイルが見つかりません: {0}")]
    ConfigNotFound(String),

    #[error("HTTPクライアント初期化エラー: {0}")]
    HttpClient(String),

    #[error("ライブAPIに接続できません: {0}")]
    Fetch(#[from] spectra_common::FetchError),

    #[error("入力エラー: {0}")]
    Prompt(String),

    #[error("JSON解析エラー: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

impl From<dialoguer::Error> for SpectraError {
    fn from(err: dialoguer::Error) -> Self {
        SpectraError::Prompt(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SpectraError>;
