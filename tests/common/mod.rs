//! テスト用の通信・表示モック

#![allow(dead_code)]

use async_trait::async_trait;
use spectra_common::config::PROBE_URL;
use spectra_common::{
    DashboardConfig, CredentialList, FetchError, HttpResponse, ImageryTransport, LogEntry, Panel,
    Presenter, StatusBanner,
};
use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

/// 登録順に応答を返すモック
#[derive(Default)]
pub struct ScriptedTransport {
    live: RefCell<VecDeque<Result<HttpResponse, FetchError>>>,
    demo: RefCell<Option<String>>,
    probe_ok: bool,
    requests: RefCell<Vec<String>>,
}

impl ScriptedTransport {
    pub fn new() -> Self {
        Self {
            probe_ok: true,
            ..Default::default()
        }
    }

    pub fn respond(self, status: u16, status_text: &str, body: &str) -> Self {
        self.live
            .borrow_mut()
            .push_back(Ok(HttpResponse::new(status, status_text, body)));
        self
    }

    pub fn fail(self, error: FetchError) -> Self {
        self.live.borrow_mut().push_back(Err(error));
        self
    }

    pub fn with_demo(self, body: &str) -> Self {
        self.set_demo(body);
        self
    }

    /// 同梱デモデータの内容を差し替える
    pub fn set_demo(&self, body: &str) {
        *self.demo.borrow_mut() = Some(body.to_string());
    }

    pub fn offline_probe(mut self) -> Self {
        self.probe_ok = false;
        self
    }

    /// 画像APIへのリクエスト（疎通確認を除く）
    pub fn api_requests(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .filter(|url| url.as_str() != PROBE_URL)
            .cloned()
            .collect()
    }
}

#[async_trait(?Send)]
impl ImageryTransport for ScriptedTransport {
    async fn get(&self, url: &str) -> Result<HttpResponse, FetchError> {
        self.requests.borrow_mut().push(url.to_string());
        if url == PROBE_URL {
            return if self.probe_ok {
                Ok(HttpResponse::new(200, "OK", ""))
            } else {
                Err(FetchError::Network("dns error".into()))
            };
        }
        self.live
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Err(FetchError::Network("no scripted response".into())))
    }

    async fn read_resource(&self, location: &str) -> Result<String, FetchError> {
        self.demo
            .borrow()
            .clone()
            .ok_or_else(|| FetchError::Resource(format!("{}: not found", location)))
    }

    fn user_agent(&self) -> String {
        "spectra-test/1.0 (scripted)".to_string()
    }
}

/// 通知内容を記録するPresenter
#[derive(Clone, Default)]
pub struct RecordingPresenter {
    pub statuses: Rc<RefCell<Vec<StatusBanner>>>,
    pub panels: Rc<RefCell<Vec<Panel>>>,
    pub log_lines: Rc<RefCell<Vec<String>>>,
}

impl Presenter for RecordingPresenter {
    fn status_changed(&self, banner: &StatusBanner) {
        self.statuses.borrow_mut().push(banner.clone());
    }

    fn panel_changed(&self, panel: &Panel) {
        self.panels.borrow_mut().push(panel.clone());
    }

    fn log_appended(&self, entry: &LogEntry) {
        self.log_lines.borrow_mut().push(entry.message.clone());
    }
}

pub fn config_with_keys(keys: &[&str]) -> DashboardConfig {
    DashboardConfig {
        credentials: CredentialList::new(keys.iter().copied()),
        auto_load_delay_ms: 0,
        ..DashboardConfig::default()
    }
}

/// EPIC形式のレスポンス本文をn件分作る
pub fn epic_body(n: usize) -> String {
    let records: Vec<String> = (0..n)
        .map(|i| {
            format!(
                r#"{{"identifier":"2024101101{i:04}","caption":"Earth {i}","image":"epic_1b_2024101101{i:04}","date":"2024-10-11 01:{m:02}:00","centroid_coordinates":{{"lat":10.0,"lon":-{i}.5}}}}"#,
                i = i,
                m = i % 60
            )
        })
        .collect();
    format!("[{}]", records.join(","))
}
