//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, theme::ColorfulTheme};

use crate::cli::args::GlobalOptions;
use zapi::config::Config;
use zapi::error::Result;

/// Values passed on the command line; anything missing is prompted for
#[derive(Debug, Default)]
pub struct InitArgs {
    pub base_url: Option<String>,
    pub username: Option<String>,
    pub api_token: Option<String>,
}

/// Run the init command
///
/// Existing values in the config file (endpoint templates, timeout) are kept;
/// only the connection settings are replaced.
pub fn run(opts: &GlobalOptions, args: InitArgs) -> Result<()> {
    println!("{}", "Welcome to zapi!".bold().green());
    println!("Let's set up your Jira connection.\n");

    let theme = ColorfulTheme::default();

    let base_url = match args.base_url {
        Some(url) => url,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Jira base URL")
            .interact_text()?,
    };

    let username = match args.username {
        Some(user) => user,
        None => Input::<String>::with_theme(&theme)
            .with_prompt("Jira username")
            .interact_text()?,
    };

    let api_token = match args.api_token {
        Some(token) => token,
        None => Password::with_theme(&theme)
            .with_prompt("Jira API token")
            .interact()?,
    };

    let path = Config::resolve_path(opts.config_ref())?;
    let mut config = Config::load_from(path.clone()).unwrap_or_default();
    config.base_url = Some(base_url.trim().trim_end_matches('/').to_string());
    config.username = Some(username.trim().to_string());
    config.api_token = Some(api_token);
    config.validate()?;

    config.save_to(path.clone())?;

    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "zapi status".cyan());
    println!(
        "  {} - List cycles",
        "zapi cycle list --project <ID>".cyan()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OutputFormat;
    use tempfile::tempdir;

    fn opts_for(path: &std::path::Path) -> GlobalOptions {
        GlobalOptions {
            format: OutputFormat::Table,
            config: Some(path.to_string_lossy().into_owned()),
        }
    }

    #[test]
    fn test_init_with_all_flags_writes_config() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");

        run(
            &opts_for(&path),
            InitArgs {
                base_url: Some("https://jira.example.com/".to_string()),
                username: Some("jdoe".to_string()),
                api_token: Some("secret-token".to_string()),
            },
        )
        .unwrap();

        let config = Config::load_from(path).unwrap();
        assert_eq!(config.base_url.as_deref(), Some("https://jira.example.com"));
        assert_eq!(config.username.as_deref(), Some("jdoe"));
        assert_eq!(config.api_token.as_deref(), Some("secret-token"));
    }

    #[test]
    fn test_init_keeps_existing_endpoints() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("config.yaml");
        std::fs::write(&path, "timeout_secs: 5\nendpoints:\n  cycle: /custom/cycle\n").unwrap();

        run(
            &opts_for(&path),
            InitArgs {
                base_url: Some("https://jira.example.com".to_string()),
                username: Some("jdoe".to_string()),
                api_token: Some("secret-token".to_string()),
            },
        )
        .unwrap();

        let config = Config::load_from(path).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert_eq!(config.endpoints.cycle, "/custom/cycle");
    }
}
