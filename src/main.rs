use clap::{Parser, Subcommand};

use deepsphere::application::errors::{AppError, ConfigError};
use deepsphere::infrastructure::adapters::ConsoleAdapter;
use deepsphere::infrastructure::config::Config;
use deepsphere::infrastructure::http::{AppState, WebServer};

#[derive(Parser)]
#[command(name = "deepsphere")]
#[command(about = "Conversational travel assistant backend", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Port (overrides config)
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Chat in the terminal
    Chat {
        /// Reply language
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Show version
    Version,
    /// Generate default config
    InitConfig,
}

fn main() {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { port } => load_config(&cli.config).and_then(|c| serve(c, port)),
        Commands::Chat { lang } => load_config(&cli.config).and_then(|c| chat(c, lang)),
        Commands::Version => {
            println!("deepsphere v{}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::InitConfig => init_config(),
    };

    if let Err(e) = result {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

fn load_config(config_path: &str) -> Result<Config, AppError> {
    if !std::path::Path::new(config_path).exists() {
        tracing::debug!("No config at {}, using defaults", config_path);
        return Ok(Config::load_env());
    }

    let mut config = Config::load(config_path)?;
    config.apply_env();
    Ok(config)
}

fn serve(mut config: Config, port: Option<u16>) -> Result<(), AppError> {
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!("Starting {} on {}", config.assistant.name, config.server.addr());

    let state = AppState::from_config(&config)?;
    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(WebServer::new(config.server.clone(), state).start())
}

fn chat(config: Config, lang: Option<String>) -> Result<(), AppError> {
    let lang = lang.unwrap_or_else(|| config.assistant.default_lang.clone());
    let state = AppState::from_config(&config)?;
    let console = ConsoleAdapter::new();

    println!("{} is listening. Type 'exit' to quit.", config.assistant.name);

    let rt = tokio::runtime::Runtime::new()?;
    rt.block_on(state.assistant.converse(&console, &lang));
    Ok(())
}

fn init_config() -> Result<(), AppError> {
    let config = Config::default();
    let yaml = serde_yaml::to_string(&config)
        .map_err(|e| ConfigError::Parse(format!("Failed to render config: {}", e)))?;
    println!("{}", yaml);
    println!("\nSave this to config.yaml and adjust as needed.");
    Ok(())
}
