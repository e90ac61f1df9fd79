use anyhow::Context;
use clap::Parser;
use std::io::Write;
use link_inspector::{load_config, setup_logging, Cli, CliRunner};
use tokio::signal;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Cli::parse();

    setup_logging(args.debug, args.silent).map_err(|e| anyhow::anyhow!("logging setup failed: {e}"))?;

    info!("Starting link-inspector v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = run(args).await {
        error!("{:#}", e);
        std::process::exit(1);
    }

    Ok(())
}

async fn run(args: Cli) -> anyhow::Result<()> {
    let config = load_config(&args).await.context("invalid configuration")?;
    let runner = CliRunner::new(config).await?;

    let (shutdown_tx, mut shutdown_rx) = tokio::sync::broadcast::channel(1);
    let _shutdown_handler = setup_shutdown_handler(shutdown_tx);

    tokio::select! {
        result = runner.run(args.input_source()) => {
            let summary = result?;
            info!(
                "Finished: {} results from {} URLs ({} failed)",
                summary.emitted, summary.launched, summary.failed
            );
        }
        Ok(()) = shutdown_rx.recv() => {
            info!("Received shutdown signal");
            // In-flight tasks are abandoned; whatever reached the file stays there.
            if let Err(e) = runner.sink.finish().await {
                warn!("Failed to flush output: {}", e);
            }
            let _ = std::io::stdout().flush();
            // A pending stdin read sits on a blocking thread the runtime would
            // wait for on drop.
            std::process::exit(0);
        }
    }

    Ok(())
}

fn setup_shutdown_handler(shutdown_tx: tokio::sync::broadcast::Sender<()>) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{signal, SignalKind};

            match (signal(SignalKind::interrupt()), signal(SignalKind::terminate())) {
                (Ok(mut sigint), Ok(mut sigterm)) => {
                    tokio::select! {
                        _ = sigint.recv() => info!("Received SIGINT"),
                        _ = sigterm.recv() => info!("Received SIGTERM"),
                    }
                }
                _ => {
                    warn!("Failed to install signal handlers, falling back to ctrl-c");
                    if signal::ctrl_c().await.is_err() {
                        return;
                    }
                }
            }
        }

        #[cfg(not(unix))]
        {
            if signal::ctrl_c().await.is_err() {
                return;
            }
        }

        let _ = shutdown_tx.send(());
    })
}
