use colored::Colorize;

use groq_client::TextProvider;
use planner_core::Config;

pub async fn run(config: &Config, debug: bool) -> anyhow::Result<()> {
    let client = crate::new_client(config)?;

    if debug {
        eprintln!(
            "{}",
            format!("[DEBUG] GET {}/models", config.api_base()).dimmed()
        );
    }

    let models = client.list_models().await?;

    if models.is_empty() {
        println!("{}", "no models available".yellow());
        return Ok(());
    }

    println!("{}", format!("📡 {} models available:", models.len()).cyan());
    for model in &models {
        if model == config.model() {
            println!("  • {} {}", model.green(), "(default)".dimmed());
        } else {
            println!("  • {model}");
        }
    }

    Ok(())
}
