mod analysis;
mod cli;
mod config;
mod errors;
mod io;
mod llm_client;
mod models;
mod parser;
mod pipeline;
mod report;
mod routes;
mod state;
mod validate;

use std::net::SocketAddr;
use std::path::Path;

use anyhow::Result;
use clap::Parser;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::errors::AppError;
use crate::llm_client::build_generator;
use crate::models::tailoring::TailorRequest;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Command::Tailor {
            job_description,
            resume,
            output,
            format,
            comparison,
            no_score,
            provider,
            model_id,
            json,
        } => {
            if let Some(model_id) = model_id {
                config.model_id = model_id;
            }
            let generator = build_generator(provider.unwrap_or(config.provider), &config).await?;

            let request = TailorRequest {
                job_description,
                resume_path: resume,
                output_format: format,
                output_path: output,
                with_comparison: comparison,
                with_match_score: !no_score,
            };

            let outcome = pipeline::run(generator.as_ref(), &config, &request).await?;
            if json {
                report::print_outcome_json(&outcome);
            } else {
                report::print_outcome(&outcome);
            }
        }

        Command::Analyze {
            job_description,
            provider,
            json,
        } => {
            let generator = build_generator(provider.unwrap_or(config.provider), &config).await?;
            let text = load_job_description_arg(&job_description, &config)?;
            let analysis =
                analysis::analyze_job_description(generator.as_ref(), &text).await?;
            if json {
                report::print_analysis_json(&analysis);
            } else {
                report::print_analysis(&analysis);
            }
        }

        Command::Parse { resume, json } => {
            let text = io::read_document(&resume, config.max_resume_size_mb)?;
            let parsed = parser::parse_resume(&text);
            if json {
                report::print_parsed_json(&parsed);
            } else {
                report::print_parsed(&parsed);
            }
        }

        Command::Config => {
            report::print_config(&config);
        }

        Command::Serve { port } => {
            if let Some(port) = port {
                config.port = port;
            }
            serve(config).await?;
        }
    }

    Ok(())
}

/// The analyze command accepts either inline text or a file path, detected
/// the same way the pipeline does.
fn load_job_description_arg(value: &str, config: &Config) -> Result<String, AppError> {
    let as_path = Path::new(value.trim());
    if as_path.is_file() {
        io::read_document(as_path, config.max_resume_size_mb)
    } else {
        Ok(value.to_string())
    }
}

async fn serve(config: Config) -> Result<()> {
    info!("Starting bespoke API v{}", env!("CARGO_PKG_VERSION"));

    let generator = build_generator(config.provider, &config).await?;
    let state = AppState {
        config: config.clone(),
        generator,
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: tighten CORS in production

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
