use clap::{Args, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "askgate")]
#[command(author, version, about = "Minimal HTTP gateway to a hosted LLM", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    #[command(flatten)]
    model: ModelArgs,

    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Args, Debug, Clone)]
pub struct ModelArgs {
    /// Gemini API key
    #[arg(long, global = true, env = "GOOGLE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Model identifier
    #[arg(short, long, global = true, env = "GEMINI_MODEL", default_value = "gemini-1.5-flash")]
    pub model: String,

    /// Override the Gemini API base URL
    #[arg(long, global = true, env = "GEMINI_BASE_URL")]
    pub base_url: Option<String>,

    /// Timeout for each model call, in seconds
    #[arg(long, global = true, env = "GEMINI_TIMEOUT_SECS", default_value = "120")]
    pub timeout_secs: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP gateway
    Serve {
        /// Host to bind to
        #[arg(long, default_value = "0.0.0.0")]
        host: String,
        /// Port to bind to
        #[arg(short, long, env = "PORT", default_value = "5000")]
        port: u16,
        /// Allowed CORS origin (repeatable, any origin when omitted)
        #[arg(long = "cors-origin")]
        cors_origins: Vec<String>,
        /// Reject request bodies larger than this many bytes (unlimited when omitted)
        #[arg(long, env = "MAX_BODY_BYTES")]
        max_body_bytes: Option<usize>,
    },
    /// Send a single question to the model and print the answer
    Ask {
        /// The question to send
        question: String,
    },
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(level)),
        )
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = dotenvy::dotenv();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Ok(path) = dotenv {
        tracing::debug!(path = %path.display(), "Loaded environment file");
    }

    let model = commands::init_model(&cli.model);

    match cli.command {
        Commands::Serve {
            host,
            port,
            cors_origins,
            max_body_bytes,
        } => {
            commands::serve::run(model, &host, port, cors_origins, max_body_bytes).await?;
        }
        Commands::Ask { question } => {
            commands::ask::run(model, &question).await?;
        }
    }

    Ok(())
}
