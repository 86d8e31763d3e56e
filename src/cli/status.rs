//! Status command implementation

use colored::Colorize;

use crate::cli::args::GlobalOptions;
use zapi::config::{Config, ENV_API_TOKEN, ENV_BASE_URL, ENV_USERNAME};
use zapi::error::Result;

/// Run the status command to display configuration status
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "zapi Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "{} Config file not found: {}",
            "○".dimmed(),
            config_path.display()
        );
    }

    let config = Config::load_at(opts.config_ref())?;
    println!();

    match config.base_url {
        Some(ref url) => println!("{} Base URL: {}{}", "✓".green(), url, env_hint(ENV_BASE_URL)),
        None => println!("{} Base URL not configured", "✗".red()),
    }

    match config.username {
        Some(ref user) => println!("{} Username: {}{}", "✓".green(), user, env_hint(ENV_USERNAME)),
        None => println!("{} Username not configured", "✗".red()),
    }

    match config.masked_token() {
        Some(token) => println!(
            "{} API token: {}{}",
            "✓".green(),
            token,
            env_hint(ENV_API_TOKEN)
        ),
        None => println!("{} API token not configured", "✗".red()),
    }

    println!("{} Timeout: {}s", "○".dimmed(), config.timeout_secs);
    println!(
        "{} Endpoints: {}",
        "○".dimmed(),
        config.endpoints.cycle.dimmed()
    );

    if let Err(err) = config.validate() {
        println!();
        println!("{} {}", "⚠".yellow(), err);
        println!("  → Run {} to configure", "zapi init".cyan());
    }

    println!();
    Ok(())
}

/// Marker for values coming from the environment
fn env_hint(var: &str) -> String {
    match std::env::var(var) {
        Ok(v) if !v.trim().is_empty() => format!(" {}", format!("(from {})", var).dimmed()),
        _ => String::new(),
    }
}
