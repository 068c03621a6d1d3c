//! データソース制御
//!
//! ライブAPI / デモデータ / 埋め込み表示の切替と、APIキーを順に試す取得処理。
//! アプリケーション状態はコントローラーが単独で所有する。

use crate::config::DashboardConfig;
use crate::debug_log::{DebugLog, LogLevel};
use crate::demo;
use crate::error::FetchError;
use crate::presenter::{NullPresenter, Presenter};
use crate::render::{render_failure, render_with_archive, FailureCard, ImageCard, RecoveryAction};
use crate::status::{Health, StatusBanner, StatusKind};
use crate::transport::ImageryTransport;
use crate::types::{ApiHealth, ApplicationState, DataSource, ImageRecord};
use chrono::{DateTime, Local};
use serde::Serialize;

/// メイン表示領域の内容
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Panel {
    #[default]
    Empty,
    Gallery(Vec<ImageCard>),
    Failure(FailureCard),
    Embedded { url: String },
}

impl Panel {
    /// 表示中の画像カード（ギャラリー以外は空）
    pub fn cards(&self) -> &[ImageCard] {
        match self {
            Panel::Gallery(cards) => cards,
            _ => &[],
        }
    }
}

/// 表示層が描画する画面状態のスナップショット
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dashboard {
    pub status: StatusBanner,
    pub health: Health,
    pub source_label: Option<&'static str>,
    pub source_changed_at: Option<DateTime<Local>>,
    pub panel: Panel,
}

pub struct DataSourceController<T> {
    transport: T,
    config: DashboardConfig,
    state: ApplicationState,
    dashboard: Dashboard,
    debug_log: DebugLog,
    presenter: Box<dyn Presenter>,
}

impl<T: ImageryTransport> DataSourceController<T> {
    pub fn new(transport: T, config: DashboardConfig) -> Self {
        Self {
            transport,
            config,
            state: ApplicationState::default(),
            dashboard: Dashboard::default(),
            debug_log: DebugLog::new(),
            presenter: Box::new(NullPresenter),
        }
    }

    pub fn with_presenter(mut self, presenter: impl Presenter + 'static) -> Self {
        self.presenter = Box::new(presenter);
        self
    }

    pub fn state(&self) -> &ApplicationState {
        &self.state
    }

    pub fn dashboard(&self) -> &Dashboard {
        &self.dashboard
    }

    pub fn debug_log(&self) -> &DebugLog {
        &self.debug_log
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// データソースを切り替えて読み込む
    pub async fn select_source(&mut self, kind: DataSource) -> Result<(), FetchError> {
        self.state.current_source = Some(kind);
        self.set_panel(Panel::Empty);
        self.update_source_info(kind);

        match kind {
            DataSource::Live => self.fetch_live().await.map(|_| ()),
            DataSource::Demo => {
                self.fetch_demo().await;
                Ok(())
            }
            DataSource::Embedded => {
                self.show_embedded_fallback();
                Ok(())
            }
        }
    }

    /// 名前指定のソース切替（未知の名前は警告表示のみ）
    pub async fn select_source_by_name(&mut self, name: &str) -> Result<(), FetchError> {
        match DataSource::from_name(name) {
            Some(kind) => self.select_source(kind).await,
            None => {
                self.state.current_source = None;
                self.set_panel(Panel::Empty);
                self.log(format!("Unknown data source requested: {}", name), LogLevel::Warning);
                self.set_status("Please select a data source", StatusKind::Warning);
                Ok(())
            }
        }
    }

    /// ライブAPIから取得する
    ///
    /// APIキーを先頭から順に1本ずつ試し、最初に有効なレスポンスが得られた時点で終了する。
    /// 全キーが失敗した場合のみ失敗カードを表示し `AllCredentialsExhausted` を返す。
    pub async fn fetch_live(&mut self) -> Result<usize, FetchError> {
        self.set_status("Connecting to NASA EPIC API...", StatusKind::Loading);
        self.state.api_health = ApiHealth::Unknown;
        self.set_health(Health::Unknown);

        let credentials = self.config.credentials.clone();
        let mut last_error = None;

        for (i, credential) in credentials.iter().enumerate() {
            let attempt = i + 1;
            self.log(format!("Testing API connection {}...", attempt), LogLevel::Info);

            let outcome = self.request_imagery(credential).await;
            match outcome {
                Ok(records) => {
                    self.state.last_update = Some(Local::now());
                    self.state.consecutive_error_count = 0;
                    self.state.api_health = ApiHealth::Working;
                    self.set_health(Health::Working);

                    let shown = self.show_gallery(&records, false);
                    self.log(
                        format!("API connection successful. Loaded {} images", records.len()),
                        LogLevel::Success,
                    );
                    return Ok(shown);
                }
                Err(FetchError::RateLimited) => {
                    self.log("Rate limit exceeded (429) - Trying next key", LogLevel::Warning);
                    last_error = Some(FetchError::RateLimited);
                }
                Err(FetchError::ServiceUnavailable) => {
                    self.log("Service unavailable (503)", LogLevel::Warning);
                    last_error = Some(FetchError::ServiceUnavailable);
                }
                Err(err) => {
                    self.log(format!("API attempt {} failed: {}", attempt, err), LogLevel::Error);
                    last_error = Some(err);
                }
            }
        }

        Err(self.handle_exhausted(last_error))
    }

    async fn request_imagery(&self, credential: &str) -> Result<Vec<ImageRecord>, FetchError> {
        let url = self.config.live_url(credential);
        let response = self.transport.get(&url).await?;
        tracing::debug!(status = response.status, "EPIC API responded");

        if let Some(err) = FetchError::from_status(response.status, &response.status_text) {
            return Err(err);
        }

        let records: Vec<ImageRecord> =
            serde_json::from_str(&response.body).map_err(|e| FetchError::Parse(e.to_string()))?;
        if records.is_empty() {
            return Err(FetchError::EmptyPayload);
        }
        Ok(records)
    }

    fn handle_exhausted(&mut self, last_error: Option<FetchError>) -> FetchError {
        self.state.consecutive_error_count += 1;
        self.state.api_health = ApiHealth::Error;
        self.set_health(Health::Error);

        let error = FetchError::AllCredentialsExhausted {
            last_error: last_error.map(Box::new),
        };
        self.set_status(format!("NASA API unavailable: {}", error.user_message()), StatusKind::Error);
        self.log(error.to_string(), LogLevel::Error);
        self.set_panel(Panel::Failure(render_failure(&error, self.state.consecutive_error_count)));
        error
    }

    /// デモデータを表示する（失敗しても埋め込みレコードで必ず描画する）
    pub async fn fetch_demo(&mut self) -> usize {
        self.set_status("Loading demonstration data...", StatusKind::Loading);
        self.set_health(Health::Warning);

        let location = self.config.demo_data.clone();
        let loaded = self
            .transport
            .read_resource(&location)
            .await
            .and_then(|body| demo::parse_dataset(&body));

        match loaded {
            Ok(records) => {
                self.state.last_update = Some(Local::now());
                let shown = self.show_gallery(&records, true);
                self.log("Demo data loaded successfully", LogLevel::Success);
                shown
            }
            Err(err) => {
                self.set_status(format!("Error loading demo data: {}", err), StatusKind::Error);
                self.log(format!("Demo data error: {}", err), LogLevel::Error);

                let shown = self.show_gallery(&demo::fallback_records(), true);
                self.log("Using embedded fallback demo data", LogLevel::Warning);
                shown
            }
        }
    }

    /// NASA公式サイトの埋め込み表示に切り替える
    pub fn show_embedded_fallback(&mut self) {
        self.state.current_source = Some(DataSource::Embedded);
        self.set_panel(Panel::Embedded {
            url: self.config.embed_url.clone(),
        });
        self.set_status("Displaying NASA embedded content", StatusKind::Success);
        self.update_source_info(DataSource::Embedded);
        self.set_health(Health::Working);
        self.log("Switched to NASA embedded content", LogLevel::Info);
    }

    pub fn clear_debug_log(&mut self) {
        self.debug_log.clear();
        self.presenter.log_cleared(&self.debug_log);
    }

    /// 直前のソースを再読込（ライブ/デモ以外は何もしない）
    pub async fn reload(&mut self) -> Result<(), FetchError> {
        match self.state.current_source {
            Some(DataSource::Live) => self.fetch_live().await.map(|_| ()),
            Some(DataSource::Demo) => {
                self.fetch_demo().await;
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// 失敗カードの復旧操作を実行する
    pub async fn recover(&mut self, action: RecoveryAction) -> Result<(), FetchError> {
        match action {
            RecoveryAction::UseDemo => self.select_source(DataSource::Demo).await,
            RecoveryAction::ShowEmbedded => {
                self.show_embedded_fallback();
                Ok(())
            }
            RecoveryAction::RetryLive => self.fetch_live().await.map(|_| ()),
        }
    }

    fn show_gallery(&mut self, records: &[ImageRecord], is_demo: bool) -> usize {
        let gallery = render_with_archive(records, is_demo, &self.config.archive_base);
        let shown = gallery.cards.len();
        self.set_status(gallery.summary.message, gallery.summary.kind);
        self.set_panel(Panel::Gallery(gallery.cards));
        shown
    }

    fn update_source_info(&mut self, kind: DataSource) {
        let now = Local::now();
        self.dashboard.source_label = Some(kind.label());
        self.dashboard.source_changed_at = Some(now);
        self.presenter.source_changed(kind.label(), now);
    }

    pub(crate) fn set_status(&mut self, message: impl Into<String>, kind: StatusKind) {
        self.dashboard.status = StatusBanner::new(message, kind);
        self.presenter.status_changed(&self.dashboard.status);
    }

    fn set_health(&mut self, health: Health) {
        self.dashboard.health = health;
        self.presenter.health_changed(health);
    }

    fn set_panel(&mut self, panel: Panel) {
        self.dashboard.panel = panel;
        self.presenter.panel_changed(&self.dashboard.panel);
    }

    pub(crate) fn log(&mut self, message: impl Into<String>, level: LogLevel) {
        let entry = self.debug_log.append(message, level);
        self.presenter.log_appended(entry);
    }
}
