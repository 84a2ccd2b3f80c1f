use crate::cli::commands::load_chat_files;
use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::core::auth::Session;
use crate::core::attendance;
use crate::errors::AppResult;
use crate::models::AttendanceRow;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::colorize_presence;
use crate::utils::date;
use crate::utils::table::{Column, Table};

/// Handle the `report` command.
pub fn handle(cli: &Cli, cfg: &Config, _session: &Session) -> AppResult<()> {
    if let Commands::Report {
        files,
        brand,
        date: date_arg,
    } = &cli.command
    {
        let records = load_chat_files(files)?;
        let date_text = date_arg
            .clone()
            .unwrap_or_else(|| date::today().format("%Y-%m-%d").to_string());

        if date::parse_date(&date_text).is_none() {
            warning(format!(
                "Invalid date '{date_text}' (expected YYYY-MM-DD): no messages can match"
            ));
        }

        let known = attendance::labels(&records);
        let brands = match brand {
            Some(b) => {
                if !known.contains(b) {
                    warning(format!("No chat messages for brand '{b}'"));
                }
                vec![b.clone()]
            }
            None => known,
        };

        if brands.is_empty() {
            info("No chat messages found.");
            return Ok(());
        }

        for b in &brands {
            let rows = attendance::report_for_date_str(&records, b, &date_text);
            header(format!("Message Status for {b} on {date_text}"));
            print!("{}", render_rows(&rows, cfg));
        }
    }
    Ok(())
}

/// Render the time-slot table; each row is coloured by presence.
pub(crate) fn render_rows(rows: &[AttendanceRow], cfg: &Config) -> String {
    let mut columns = vec![Column::new("Time Slot", 26), Column::new("Status", 6)];
    if cfg.show_notes {
        columns.push(Column::new("Notes", 40));
    }

    let mut table = Table::new(columns).with_separator(cfg.separator());
    for r in rows {
        let mut cells = vec![r.window_name.clone(), r.status_mark().to_string()];
        if cfg.show_notes {
            cells.push(r.note.to_string());
        }
        table.add_row(cells);
    }

    let rendered = table.render();
    let mut out = String::new();
    for (i, line) in rendered.lines().enumerate() {
        // header and separator lines come first
        match i.checked_sub(2).and_then(|idx| rows.get(idx)) {
            Some(r) => out.push_str(&colorize_presence(line, r.present)),
            None => out.push_str(line),
        }
        out.push('\n');
    }
    out
}
