use clap::Parser;
use spectra::{cli, config, dashboard, error, terminal, transport};
use cli::{Cli, Commands};
use error::Result;
use spectra_common::{DataSourceController, Panel};
use terminal::TerminalPresenter;
use tracing_subscriber::EnvFilter;
use transport::HttpTransport;

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn,spectra_common=off" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let mut config = config::load(cli.config.as_deref())?;
    if let Some(path) = cli.demo_data {
        config.demo_data = path;
    }

    match cli.command.unwrap_or_default() {
        Commands::Watch { no_auto_load } => {
            let clock = terminal::clock_spinner();
            let presenter = TerminalPresenter::new(cli.log).with_clock(clock.clone());
            let mut controller =
                DataSourceController::new(HttpTransport::new()?, config).with_presenter(presenter);

            dashboard::run(&mut controller, clock, !no_auto_load).await?;
        }

        Commands::Fetch { source, json } => {
            // JSON出力時は通知を表示しない
            let mut controller = if json {
                DataSourceController::new(HttpTransport::new()?, config)
            } else {
                DataSourceController::new(HttpTransport::new()?, config)
                    .with_presenter(TerminalPresenter::new(cli.log))
            };

            let result = controller.select_source(source).await;

            if json {
                let panel: &Panel = &controller.dashboard().panel;
                println!("{}", serde_json::to_string_pretty(panel)?);
            }

            result?;
        }

        Commands::Config { show } => {
            if show {
                let path = cli
                    .config
                    .or_else(config::default_path)
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "-".into());
                println!("設定:");
                println!("  設定ファイル: {}", path);
                println!("  EPIC API: {}", config.epic_url);
                println!("  アーカイブ: {}", config.archive_base);
                println!("  デモデータ: {}", config.demo_data);
                println!("  疎通確認URL: {}", config.probe_url);
                println!("  埋め込み表示: {}", config.embed_url);
                println!("  自動接続待ち: {}ms", config.auto_load_delay_ms);
                println!("  APIキー: {}", config.credentials.masked().join(", "));
            } else {
                println!("`spectra config --show` で設定を表示します");
            }
        }
    }

    Ok(())
}
