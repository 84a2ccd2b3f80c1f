use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::auth::Session;
use crate::core::sheet;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::formatting::bold;

/// Handle the `brands` drill-down: platforms → brands → details.
pub fn handle(cli: &Cli, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Brands {
        sheet: source,
        platform,
        brand,
    } = &cli.command
    {
        info(format!("Signed in as {}", session.username()));

        let source = source.as_deref().unwrap_or(&cfg.sheet_source);
        let rows = sheet::load(source)?;

        let Some(platform) = platform else {
            header("Platforms");
            for p in sheet::platforms(&rows) {
                println!("  {p}");
            }
            info("Please select a platform to continue.");
            return Ok(());
        };

        let brands = sheet::brands_for_platform(&rows, platform);
        if brands.is_empty() {
            info("No brands found for the selected platform.");
            return Ok(());
        }

        let Some(brand) = brand else {
            header(format!("Brands on {}", platform.trim().to_lowercase()));
            for b in &brands {
                println!("  {b}");
            }
            return Ok(());
        };

        match sheet::brand_details(&rows, platform, brand) {
            Some(row) => {
                println!("{} {}", bold("Brand:"), row.brand);
                println!("{} {}", bold("Tier:"), row.tier);
                println!("{} {}", bold("Category:"), row.category);
                println!("{} {}", bold("Handled by:"), row.manager);
            }
            None => info("No details found for the selected brand."),
        }
    }
    Ok(())
}
