//! メインアプリケーションコンポーネント
//!
//! コントローラーは非同期Mutexの中に1つだけ持ち、画面操作はすべて
//! `Command` として順番に実行する。表示はWebPresenterが書き込むシグナル経由。

use crate::api::epic::BrowserTransport;
use crate::components::{
    controls::Controls,
    debug_panel::DebugPanel,
    embed_panel::EmbedPanel,
    failure_card::FailureCardView,
    header::Header,
    image_gallery::ImageGallery,
    status_card::StatusCard,
    system_panel::{SourceInfo, SystemPanel},
};
use chrono::{DateTime, Local};
use futures::lock::Mutex;
use gloo::timers::callback::{Interval, Timeout};
use leptos::prelude::*;
use leptos::task::spawn_local;
use spectra_common::bootstrap::{auto_load_delay, CLOCK_TICK};
use spectra_common::{
    clock_text, DashboardConfig, DataSource, DataSourceController, DebugLog, FetchError, Health,
    ImageryTransport, LogEntry, Panel, Presenter, RecoveryAction, StatusBanner,
};
use std::rc::Rc;
use wasm_bindgen::JsValue;

/// 画面からの操作
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Diagnose,
    AutoLoad,
    Select(DataSource),
    Reload,
    Recover(RecoveryAction),
    ClearLog,
}

/// コントローラーの通知をシグナルへ書き込む
#[derive(Clone, Copy)]
struct WebPresenter {
    status: WriteSignal<StatusBanner>,
    health: WriteSignal<Health>,
    source: WriteSignal<Option<SourceInfo>>,
    panel: WriteSignal<Panel>,
    log: WriteSignal<Vec<LogEntry>>,
}

impl Presenter for WebPresenter {
    fn status_changed(&self, banner: &StatusBanner) {
        self.status.set(banner.clone());
    }

    fn health_changed(&self, health: Health) {
        self.health.set(health);
    }

    fn source_changed(&self, label: &str, at: DateTime<Local>) {
        self.source.set(Some(SourceInfo::new(label, at)));
    }

    fn panel_changed(&self, panel: &Panel) {
        self.panel.set(panel.clone());
    }

    fn log_appended(&self, entry: &LogEntry) {
        self.log.update(|entries| entries.push(entry.clone()));
    }

    fn log_cleared(&self, log: &DebugLog) {
        self.log.set(log.entries().to_vec());
    }
}

/// 1つの操作を実行する。失敗時の表示はコントローラー側で済んでいる
pub async fn run_command<T: ImageryTransport>(
    controller: &mut DataSourceController<T>,
    command: Command,
) -> Result<(), FetchError> {
    match command {
        Command::Diagnose => {
            controller.run_initial_diagnostics().await;
            Ok(())
        }
        Command::AutoLoad => controller.auto_load().await,
        Command::Select(kind) => controller.select_source(kind).await,
        Command::Reload => controller.reload().await,
        Command::Recover(action) => controller.recover(action).await,
        Command::ClearLog => {
            controller.clear_debug_log();
            Ok(())
        }
    }
}

/// メインアプリケーションコンポーネント
#[component]
pub fn App() -> impl IntoView {
    let (clock, set_clock) = signal(clock_text(Local::now()));
    let (status, set_status) = signal(StatusBanner::default());
    let (health, set_health) = signal(Health::default());
    let (source, set_source) = signal(None::<SourceInfo>);
    let (panel, set_panel) = signal(Panel::Empty);
    let (log, set_log) = signal(Vec::<LogEntry>::new());

    let presenter = WebPresenter {
        status: set_status,
        health: set_health,
        source: set_source,
        panel: set_panel,
        log: set_log,
    };
    let config = DashboardConfig::default();
    let delay = auto_load_delay(&config);
    let controller = DataSourceController::new(BrowserTransport, config).with_presenter(presenter);
    set_log.set(controller.debug_log().entries().to_vec());

    let controller = StoredValue::new_local(Rc::new(Mutex::new(controller)));

    // 操作はロック順に1つずつ実行される
    let dispatch = move |command: Command| {
        let controller = controller.get_value();
        spawn_local(async move {
            let mut ctrl = controller.lock().await;
            if let Err(err) = run_command(&mut ctrl, command).await {
                web_sys::console::debug_1(&JsValue::from_str(&format!("{:?} failed: {}", command, err)));
            }
        });
    };

    // 起動処理: 時計、診断、自動接続
    Interval::new(CLOCK_TICK.as_millis() as u32, move || {
        set_clock.set(clock_text(Local::now()));
    })
    .forget();
    dispatch(Command::Diagnose);
    Timeout::new(delay.as_millis() as u32, move || dispatch(Command::AutoLoad)).forget();

    view! {
        <div class="container">
            <Header clock=clock />

            <div class="dashboard-top">
                <StatusCard status=status />
                <SystemPanel health=health source=source />
            </div>

            <Controls on_command=dispatch />

            <main class="main-panel">
                {move || match panel.get() {
                    Panel::Empty => view! {
                        <p class="text-muted">"Select a data source to view Earth imagery"</p>
                    }.into_any(),
                    Panel::Gallery(cards) => view! { <ImageGallery cards=cards /> }.into_any(),
                    Panel::Failure(card) => view! {
                        <FailureCardView card=card on_command=dispatch />
                    }.into_any(),
                    Panel::Embedded { url } => view! { <EmbedPanel url=url /> }.into_any(),
                }}
            </main>

            <DebugPanel log=log on_clear=move |_| dispatch(Command::ClearLog) />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use futures::executor::block_on;
    use spectra_common::HttpResponse;

    struct OfflineTransport;

    #[async_trait(?Send)]
    impl ImageryTransport for OfflineTransport {
        async fn get(&self, _url: &str) -> Result<HttpResponse, FetchError> {
            Err(FetchError::Network("offline".to_string()))
        }

        async fn read_resource(&self, location: &str) -> Result<String, FetchError> {
            Err(FetchError::Resource(location.to_string()))
        }
    }

    fn controller() -> DataSourceController<OfflineTransport> {
        DataSourceController::new(OfflineTransport, DashboardConfig::default())
    }

    #[test]
    fn test_demo_command_falls_back_to_embedded_record() {
        let mut ctrl = controller();
        block_on(run_command(&mut ctrl, Command::Select(DataSource::Demo))).unwrap();
        assert_eq!(ctrl.dashboard().panel.cards().len(), 1);
        assert_eq!(ctrl.dashboard().health, Health::Warning);
    }

    #[test]
    fn test_live_command_offline_shows_failure_card() {
        let mut ctrl = controller();
        let result = block_on(run_command(&mut ctrl, Command::Select(DataSource::Live)));
        assert!(matches!(result, Err(FetchError::AllCredentialsExhausted { .. })));
        assert!(matches!(ctrl.dashboard().panel, Panel::Failure(_)));

        block_on(run_command(&mut ctrl, Command::Recover(RecoveryAction::ShowEmbedded))).unwrap();
        assert!(matches!(ctrl.dashboard().panel, Panel::Embedded { .. }));
    }

    #[test]
    fn test_clear_log_command() {
        let mut ctrl = controller();
        block_on(run_command(&mut ctrl, Command::Diagnose)).unwrap();
        block_on(run_command(&mut ctrl, Command::ClearLog)).unwrap();
        let messages: Vec<_> = ctrl.debug_log().entries().iter().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["Debug log cleared", "System monitor initialized"]);
    }
}
