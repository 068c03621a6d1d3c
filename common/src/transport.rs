//! 通信の抽象化
//!
//! ブラウザ(fetch)とCLI(reqwest)で実装を差し替える。
//! WASMのFutureはSendではないため `?Send` で定義する。

use crate::error::FetchError;
use async_trait::async_trait;

/// HTTPレスポンス（本文はテキストのまま保持）
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub status_text: String,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, status_text: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            status,
            status_text: status_text.into(),
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

#[async_trait(?Send)]
pub trait ImageryTransport {
    /// GETリクエスト。接続レベルの失敗のみ `FetchError::Network` を返す
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError>;

    /// 同梱リソース（デモデータ）をテキストとして読み込む
    async fn read_resource(&self, location: &str) -> Result<String, FetchError>;

    /// 診断ログ用のクライアント識別子
    fn user_agent(&self) -> String {
        "unknown".to_string()
    }
}
