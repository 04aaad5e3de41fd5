//! PW SDR agent CLI and REST API entry point.
//!
//! Binary name: `pwsdr`
//!
//! Parses CLI arguments, loads the deployment (config, FAQ content, leads
//! file), then dispatches to a command handler or starts the HTTP server.

mod cli;
mod http;
mod state;

use clap::Parser;
use clap_complete::generate;

use cli::{Cli, Commands};
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    pwsdr_observe::init_tracing(
        pwsdr_observe::default_filter(cli.verbose, cli.quiet),
        cli.otel,
    )
    .map_err(|e| anyhow::anyhow!(e))?;

    // Shell completions don't need a deployment
    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = <Cli as clap::CommandFactory>::command();
        generate(*shell, &mut cmd, "pwsdr", &mut std::io::stdout());
        return Ok(());
    }

    let state = AppState::init().await?;
    let result = run(cli, state).await;

    pwsdr_observe::shutdown_tracing();
    result
}

async fn run(cli: Cli, state: AppState) -> anyhow::Result<()> {
    match cli.command {
        Commands::Ask { query } => {
            cli::faq::ask(&state, &query.join(" "), cli.json)?;
        }

        Commands::Faq => {
            cli::faq::list_faq(&state, cli.json)?;
        }

        Commands::Leads => {
            cli::lead::list_leads(&state, cli.json).await?;
        }

        Commands::SaveLead {
            name,
            email,
            role,
            interest,
            timeline,
        } => {
            let args = pwsdr_types::tool::SaveLeadArgs {
                name,
                email,
                role,
                interest,
                timeline,
            };
            cli::lead::save_lead(&state, args, cli.json, cli.quiet).await?;
        }

        Commands::Prompt => {
            cli::prompt::show_prompt(&state, cli.json)?;
        }

        Commands::Chat => {
            cli::chat::loop_runner::run_chat_loop(&state).await?;
        }

        Commands::Status => {
            cli::status::status(&state, cli.json).await?;
        }

        Commands::Serve { port, host } => {
            let host = host.unwrap_or_else(|| state.config.server.host.clone());
            let port = port.unwrap_or(state.config.server.port);
            let addr = format!("{host}:{port}");
            let listener = tokio::net::TcpListener::bind(&addr).await?;

            tracing::info!(%addr, "HTTP API listening");
            if !cli.quiet {
                println!(
                    "  {} PW SDR API listening on {}",
                    console::style("⚡").bold(),
                    console::style(format!("http://{addr}")).cyan()
                );
                println!("  {}", console::style("Press Ctrl+C to stop").dim());
            }

            let sweeper = http::sweeper::spawn_session_sweeper(
                state.sessions.clone(),
                std::time::Duration::from_secs(state.config.server.session_ttl_secs),
            );
            let router = http::router::build_router(state);

            let served = axum::serve(listener, router)
                .with_graceful_shutdown(shutdown_signal())
                .await;
            if let Some(sweeper) = sweeper {
                sweeper.abort();
            }
            served?;

            if !cli.quiet {
                println!("\n  Server stopped.");
            }
        }

        Commands::Completions { .. } => {}
    }

    Ok(())
}

/// Wait for Ctrl+C or SIGTERM.
///
/// If a handler cannot be installed that branch never fires; the other one
/// still can.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!(error = %e, "failed to install Ctrl+C handler");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::warn!(error = %e, "failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
