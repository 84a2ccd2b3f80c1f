use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};

/// Handle the `init` command: write a default config file unless one exists.
pub fn handle(cli: &Cli) -> AppResult<()> {
    let path = cli.config.clone().unwrap_or_else(Config::config_file);

    if path.exists() {
        info(format!("Config file already present: {}", path.display()));
        return Ok(());
    }

    Config::default().save_to(&path)?;

    if !cli.test {
        println!("⚙️  Initializing brandboard…");
        println!("📄 Config file : {}", path.display());
    }
    success(format!("Configuration written to {}", path.display()));
    Ok(())
}
