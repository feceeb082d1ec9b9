//! Scribe entry point.

use anyhow::{Context, Result};
use clap::Parser;
use scribe_graphql::{build_schema, shared};
use scribe_server::cli::{Cli, Commands};
use scribe_server::{build_request, build_router, load_query, open_session};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::try_new(&cli.log_level)
        .with_context(|| format!("invalid log filter: {}", cli.log_level))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Serve { host, port, empty } => {
            let schema = build_schema(shared(open_session(empty)?));
            let app = build_router(schema);

            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr)
                .await
                .with_context(|| format!("failed to bind {}", addr))?;
            info!("GraphQL server running at http://{}/graphql", addr);

            axum::serve(listener, app)
                .with_graceful_shutdown(shutdown_signal())
                .await?;
            info!("server stopped");
        }
        Commands::Query {
            query,
            variables,
            pretty,
            empty,
        } => {
            let schema = build_schema(shared(open_session(empty)?));
            let request = build_request(load_query(&query)?, variables.as_deref())?;

            let response = schema.execute(request).await;
            let output = if pretty {
                serde_json::to_string_pretty(&response)?
            } else {
                serde_json::to_string(&response)?
            };
            println!("{}", output);
        }
        Commands::Schema { output } => {
            let sdl = build_schema(shared(open_session(true)?)).sdl();
            if output.as_os_str() == "-" {
                println!("{}", sdl);
            } else {
                std::fs::write(&output, sdl)
                    .with_context(|| format!("failed to write {}", output.display()))?;
                info!("schema written to {}", output.display());
            }
        }
    }

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {}", e);
    }
}
