use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use groq_client::GroqClient;
use planner_core::Config;

mod generate;
mod interactive;
mod models_cmd;
mod plan_cmd;
mod quiz_cmd;

#[derive(Parser)]
#[command(name = "lesson-planner")]
#[command(about = "Generate lesson plans and quizzes with Groq-hosted models")]
#[command(version)]
struct Cli {
    /// Enable debug mode
    #[arg(long, short, default_value = "false")]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a lesson plan
    Plan(plan_cmd::PlanArgs),
    /// Generate a quiz from an existing lesson plan
    Quiz(quiz_cmd::QuizArgs),
    /// List models available on the configured API
    Models,
    /// Guided prompts for every input, then generate
    Interactive,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(false)
                .with_line_number(false)
                .with_file(false)
                .with_writer(std::io::stderr),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::new();
    tracing::debug!(api_base = config.api_base(), model = config.model(), "configuration loaded");

    if cli.debug {
        eprintln!("{}", "[DEBUG] Debug mode enabled".dimmed());
        eprintln!(
            "{}",
            format!("[DEBUG] API base: {}", config.api_base()).dimmed()
        );
        eprintln!(
            "{}",
            format!("[DEBUG] Default model: {}", config.model()).dimmed()
        );
    }

    let result = match cli.command {
        Commands::Plan(args) => plan_cmd::run(&config, args, cli.debug).await,
        Commands::Quiz(args) => quiz_cmd::run(&config, args, cli.debug).await,
        Commands::Models => models_cmd::run(&config, cli.debug).await,
        Commands::Interactive => interactive::run(&config, cli.debug).await,
    };

    if let Err(ref error) = result {
        println!("{}", format!("❌ Error: {error:#}").red());
        std::process::exit(1);
    }

    result
}

fn new_client(config: &Config) -> anyhow::Result<GroqClient> {
    Ok(GroqClient::new(config)?)
}
