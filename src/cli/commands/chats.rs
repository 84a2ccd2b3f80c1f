use crate::cli::commands::load_chat_files;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::auth::Session;
use crate::errors::AppResult;
use crate::ui::messages::{info, warning};
use crate::utils::shorten;
use crate::utils::table::{Column, Table};

const MESSAGE_WIDTH: usize = 60;

/// Handle the `chats` command: list parsed messages.
pub fn handle(cli: &Cli, cfg: &Config, _session: &Session) -> AppResult<()> {
    if let Commands::Chats { files, brand } = &cli.command {
        let records = load_chat_files(files)?;
        let shown: Vec<_> = records
            .iter()
            .filter(|r| brand.as_ref().is_none_or(|b| &r.source_label == b))
            .collect();

        if shown.is_empty() {
            info("No chat messages found.");
            return Ok(());
        }

        let mut table = Table::new(vec![
            Column::new("TIMESTAMP", 16),
            Column::new("BRAND", 16),
            Column::new("SENDER", 18),
            Column::new("MESSAGE", MESSAGE_WIDTH),
        ])
        .with_separator(cfg.separator());

        for r in &shown {
            table.add_row(vec![
                r.timestamp_str(),
                r.source_label.clone(),
                r.sender.clone(),
                shorten(&r.message, MESSAGE_WIDTH),
            ]);
        }
        print!("{}", table.render());

        let unparsed = shown.iter().filter(|r| r.timestamp.is_none()).count();
        if unparsed > 0 {
            warning(format!(
                "{unparsed} message(s) have a timestamp outside M/D/YY, H:MM and are left out of reports"
            ));
        }

        let ambiguous = shown.iter().filter(|r| r.hour_is_ambiguous()).count();
        if ambiguous > 0 {
            warning(format!(
                "{ambiguous} message(s) have an hour between 1 and 12 with no AM/PM; read as 24-hour"
            ));
        }
    }
    Ok(())
}
