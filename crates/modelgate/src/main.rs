use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::info;

use modelgate::config::Config;
use modelgate::llm::{ChatRequest, LLMProvider, LlmEnv, Resolver, build_provider};
use modelgate::server::{AppState, build_app};
use modelgate::settings::SettingsStore;

#[derive(Parser)]
#[command(name = "modelgate", about = "Auth form validation and LLM provider settings")]
#[command(version, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to the YAML config file
    #[arg(short, long, global = true, default_value = "modelgate.yaml")]
    config: PathBuf,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server
    Serve,
    /// Print the model and credential variable the environment resolves to
    Resolve(ModelArgs),
    /// Send a single prompt to the resolved model
    Chat {
        #[command(flatten)]
        model: ModelArgs,
        /// Prompt text
        prompt: String,
    },
}

#[derive(Args)]
struct ModelArgs {
    /// Override LLM_PROVIDER
    #[arg(long)]
    provider: Option<String>,
    /// Override LLM_MODEL
    #[arg(long)]
    model: Option<String>,
}

impl ModelArgs {
    fn resolver(self) -> Resolver {
        let mut env = LlmEnv::from_env();
        if let Some(provider) = self.provider.filter(|p| !p.is_empty()) {
            env.provider = Some(provider);
        }
        if let Some(model) = self.model.filter(|m| !m.is_empty()) {
            env.model = Some(model);
        }
        Resolver::new(env)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::load(&cli.config)
        .await
        .with_context(|| format!("loading {}", cli.config.display()))?;

    match cli.command {
        Commands::Serve => serve(config).await,
        Commands::Resolve(args) => {
            let resolved = args.resolver().resolve()?;
            println!(
                "{} {} {}",
                resolved.provider, resolved.model, resolved.credential_var
            );
            Ok(())
        }
        Commands::Chat { model, prompt } => {
            let resolved = model.resolver().resolve()?;
            let provider = build_provider(reqwest::Client::new(), &resolved, &config.endpoints);
            let response = provider
                .chat(ChatRequest::user(resolved.model.clone(), prompt))
                .await
                .context("chat request failed")?;
            println!("{}", response.content());
            Ok(())
        }
    }
}

async fn serve(config: Config) -> Result<()> {
    let state = AppState {
        settings: SettingsStore::new(config.settings.path.clone()),
        resolver: Arc::new(Resolver::new(LlmEnv::from_env())),
    };
    let app = build_app(state, config.server.request_timeout_seconds);

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    info!(%addr, settings = %config.settings.path.display(), "Server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;
    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
    }
}
