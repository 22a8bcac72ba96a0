use std::net::SocketAddr;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tokio::io::AsyncReadExt;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalyst_api::config::Config;
use catalyst_api::errors::AppError;
use catalyst_api::input;
use catalyst_api::llm_client::GeminiClient;
use catalyst_api::models::resume::GenerationRequest;
use catalyst_api::pipeline::{
    evaluate_resume, generate_cover_letter, generate_interview_questions, tailor_resume,
};
use catalyst_api::render::render_latex;
use catalyst_api::routes::build_router;
use catalyst_api::state::AppState;
use catalyst_api::templates::PromptLibrary;

/// Reads its input on stdin, writes the artifact on stdout, diagnostics on
/// stderr. Exit status is 1 on any failure.
#[derive(Parser, Debug)]
#[command(name = "catalyst", version, about = "AI resume tailoring toolkit")]
struct Cli {
    /// Directory whose `<pipeline>/<step>.txt` files override the built-in prompts
    #[arg(long, global = true)]
    prompts_dir: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resume + job description → tailored LaTeX resume
    Tailor,
    /// Resume + job description → ATS evaluation report
    Evaluate,
    /// Resume + job description → cover letter
    CoverLetter,
    /// Job description → JSON array of interview questions
    Interview,
    /// GenerationRequest JSON → LaTeX resume (no model call)
    Render,
    /// Serve the same pipelines over HTTP
    Serve {
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = Config::from_env();

    // stdout carries the artifact, so logs go to stderr. Without RUST_LOG the
    // one-shot commands stay quiet.
    let default_level = match cli.command {
        Command::Serve { .. } => "info",
        _ => "warn",
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "catalyst_api={default_level},catalyst={default_level},tower_http={default_level}"
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match run(cli, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli, config: Config) -> Result<(), AppError> {
    let library = match cli.prompts_dir.or_else(|| config.prompts_dir.clone()) {
        Some(dir) => PromptLibrary::from_dir(dir)?,
        None => PromptLibrary::builtin(),
    };

    match cli.command {
        Command::Tailor | Command::Evaluate | Command::CoverLetter => {
            let llm = gemini_client(&config)?;
            let raw = read_stdin().await?;
            let (resume, job_description) = input::split_pair(&raw)?;

            let output = match cli.command {
                Command::Tailor => {
                    tailor_resume(&llm, &library, &resume, &job_description).await?
                }
                Command::Evaluate => {
                    evaluate_resume(&llm, &library, &resume, &job_description).await?
                }
                _ => generate_cover_letter(&llm, &library, &resume, &job_description).await?,
            };
            println!("{output}");
        }
        Command::Interview => {
            let raw = read_stdin().await?;
            let Some(job_description) = input::single(&raw) else {
                println!("[]");
                return Ok(());
            };
            let llm = gemini_client(&config)?;
            println!(
                "{}",
                generate_interview_questions(&llm, &library, &job_description).await?
            );
        }
        Command::Render => {
            let raw = read_stdin().await?;
            let request: GenerationRequest = serde_json::from_str(&raw)
                .map_err(|e| AppError::InvalidInput(format!("invalid generation request: {e}")))?;
            print!("{}", render_latex(&request)?);
        }
        Command::Serve { port } => {
            let llm = gemini_client(&config)?;
            let port = match port {
                Some(port) => port,
                None => config.port()?,
            };
            serve(llm, library, port).await?;
        }
    }

    Ok(())
}

/// Fails with `MissingCredential` before any network activity.
fn gemini_client(config: &Config) -> Result<GeminiClient, AppError> {
    let api_key = config.api_key()?;
    let client = GeminiClient::new(api_key, &config.api_base, &config.model)?;
    info!("LLM client initialized (model: {})", client.model());
    Ok(client)
}

async fn read_stdin() -> Result<String, AppError> {
    let mut raw = String::new();
    tokio::io::stdin().read_to_string(&mut raw).await?;
    Ok(raw)
}

async fn serve(llm: GeminiClient, library: PromptLibrary, port: u16) -> Result<(), AppError> {
    info!("Starting Catalyst API v{}", env!("CARGO_PKG_VERSION"));
    if let Some(dir) = library.dir() {
        info!("Prompt overrides from {}", dir.display());
    }

    let state = AppState {
        llm: Arc::new(llm),
        prompts: Arc::new(library),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
