//! NASA EPIC API通信（fetch API）
//!
//! ステータスコードの解釈は共通ライブラリ側で行うため、
//! ここではレスポンスをそのまま HttpResponse に詰めて返す。

use async_trait::async_trait;
use spectra_common::{FetchError, HttpResponse, ImageryTransport};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

/// window.fetch によるトランスポート
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserTransport;

/// JsValueのエラーを文字列化
pub fn js_error_text(value: &JsValue) -> String {
    value
        .as_string()
        .or_else(|| {
            value
                .dyn_ref::<js_sys::Error>()
                .map(|e| String::from(e.message()))
        })
        .unwrap_or_else(|| format!("{:?}", value))
}

async fn fetch_text(url: &str) -> Result<(u16, String, String), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("GET");
    opts.set_mode(RequestMode::Cors);

    let request = Request::new_with_str_and_init(url, &opts)?;

    let window = web_sys::window().ok_or_else(|| JsValue::from_str("window is not available"))?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    let text = JsFuture::from(resp.text()?).await?;
    let body = text.as_string().unwrap_or_default();

    Ok((resp.status(), resp.status_text(), body))
}

#[async_trait(?Send)]
impl ImageryTransport for BrowserTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        let (status, status_text, body) = fetch_text(url)
            .await
            .map_err(|e| FetchError::Network(js_error_text(&e)))?;
        Ok(HttpResponse::new(status, status_text, body))
    }

    async fn read_resource(&self, location: &str) -> Result<String, FetchError> {
        let (status, status_text, body) = fetch_text(location)
            .await
            .map_err(|e| FetchError::Resource(js_error_text(&e)))?;
        if !(200..300).contains(&status) {
            return Err(FetchError::Resource(format!("HTTP {}: {}", status, status_text)));
        }
        Ok(body)
    }

    fn user_agent(&self) -> String {
        web_sys::window()
            .and_then(|w| w.navigator().user_agent().ok())
            .unwrap_or_else(|| "unknown".to_string())
    }
}
