use crate::cli::commands::load_chat_files;
use crate::cli::parser::{Cli, Commands};
use crate::core::auth::Session;
use crate::core::attendance;
use crate::errors::{AppError, AppResult};
use crate::export::ExportLogic;
use crate::utils::date;

/// Handle the `export` command
pub fn handle(cli: &Cli, _session: &Session) -> AppResult<()> {
    if let Commands::Export {
        files,
        brand,
        date: date_arg,
        format,
        out,
        force,
    } = &cli.command
    {
        let target = match date_arg {
            Some(d) => date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.clone()))?,
            None => date::today(),
        };

        let records = load_chat_files(files)?;
        let rows = attendance::report(&records, brand, target);

        ExportLogic::export(&rows, brand, target, format.clone(), out, *force)?;
    }
    Ok(())
}
