//! 対話型ダッシュボード
//!
//! 起動処理（時計・診断・自動接続）のあと、メニューからデータソースを操作する。

use crate::error::Result;
use crate::terminal::format_log;
use chrono::Local;
use dialoguer::Select;
use indicatif::ProgressBar;
use spectra_common::bootstrap::{auto_load_delay, CLOCK_TICK};
use spectra_common::{clock_text, DataSource, DataSourceController, FetchError, ImageryTransport};
use tokio::task::JoinHandle;

/// デバッグログ表示で出す件数
const LOG_WINDOW: usize = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Live,
    Demo,
    Embedded,
    Reload,
    ShowLog,
    ClearLog,
    Quit,
}

impl MenuItem {
    pub const ALL: [MenuItem; 7] = [
        MenuItem::Live,
        MenuItem::Demo,
        MenuItem::Embedded,
        MenuItem::Reload,
        MenuItem::ShowLog,
        MenuItem::ClearLog,
        MenuItem::Quit,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Live => "🛰️  NASA Live API",
            MenuItem::Demo => "🔸 Demo data",
            MenuItem::Embedded => "🌐 NASA website",
            MenuItem::Reload => "🔄 Reload",
            MenuItem::ShowLog => "📜 Show debug log",
            MenuItem::ClearLog => "🧹 Clear debug log",
            MenuItem::Quit => "Quit",
        }
    }
}

/// 1秒ごとに時計表示を更新するタスク
pub fn spawn_clock(clock: ProgressBar) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(CLOCK_TICK);
        loop {
            interval.tick().await;
            clock.set_message(clock_text(Local::now()));
        }
    })
}

/// メニュー操作を1つ実行する。終了要求ならfalse
pub async fn dispatch<T: ImageryTransport>(
    controller: &mut DataSourceController<T>,
    item: MenuItem,
) -> std::result::Result<bool, FetchError> {
    match item {
        MenuItem::Live => controller.select_source(DataSource::Live).await?,
        MenuItem::Demo => controller.select_source(DataSource::Demo).await?,
        MenuItem::Embedded => controller.select_source(DataSource::Embedded).await?,
        MenuItem::Reload => controller.reload().await?,
        MenuItem::ShowLog => println!("{}", format_log(controller.debug_log(), LOG_WINDOW)),
        MenuItem::ClearLog => controller.clear_debug_log(),
        MenuItem::Quit => return Ok(false),
    }
    Ok(true)
}

fn prompt(clock: &ProgressBar) -> Result<Option<MenuItem>> {
    let labels: Vec<&str> = MenuItem::ALL.iter().map(MenuItem::label).collect();
    let selection = tokio::task::block_in_place(|| {
        clock.suspend(|| {
            Select::new()
                .with_prompt("Select a data source")
                .items(&labels)
                .default(0)
                .interact_opt()
        })
    })?;
    Ok(selection.map(|i| MenuItem::ALL[i]))
}

pub async fn run<T: ImageryTransport>(
    controller: &mut DataSourceController<T>,
    clock: ProgressBar,
    auto_load: bool,
) -> Result<()> {
    let ticker = spawn_clock(clock.clone());

    controller.run_initial_diagnostics().await;

    if auto_load {
        tokio::time::sleep(auto_load_delay(controller.config())).await;
        if let Err(err) = controller.auto_load().await {
            tracing::debug!(error = %err, "automatic connection failed");
        }
    }

    while let Some(item) = prompt(&clock)? {
        match dispatch(controller, item).await {
            Ok(true) => {}
            Ok(false) => break,
            // 失敗カードは表示済み
            Err(err) => tracing::debug!(error = %err, "live fetch failed"),
        }
    }

    ticker.abort();
    clock.finish_and_clear();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_covers_all_commands() {
        assert_eq!(MenuItem::ALL.len(), 7);
        assert_eq!(MenuItem::ALL[MenuItem::ALL.len() - 1], MenuItem::Quit);
        assert!(MenuItem::ALL.iter().all(|item| !item.label().is_empty()));
    }
}
