use crate::errors::AppResult;
use crate::ui::messages::warning;
use ansi_term::Colour;
use chrono::Local;
use regex::Regex;
use rusqlite::Connection;
use rusqlite::params;
use std::sync::OnceLock;

/// Write an internal log line into the `log` table.
pub fn wlog(conn: &Connection, operation: &str, target: &str, message: &str) -> AppResult<()> {
    let now = Local::now().to_rfc3339();

    let mut stmt = conn.prepare_cached(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, ?2, ?3, ?4)",
    )?;

    stmt.execute(params![now, operation, target, message])?;

    Ok(())
}

/// Like [`wlog`], but a failure only prints a warning.
pub fn wlog_quiet(conn: &Connection, operation: &str, target: &str, message: &str) {
    if let Err(e) = wlog(conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}

fn strip_ansi(s: &str) -> String {
    static RE: OnceLock<Regex> = OnceLock::new();
    let re = RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("valid ANSI pattern"));
    re.replace_all(s, "").into_owned()
}

/// ANSI colour per logged operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "reset" => Colour::Red,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

/// Print the whole `log` table, oldest first.
pub fn print_log(conn: &Connection) -> AppResult<()> {
    let mut stmt =
        conn.prepare_cached("SELECT id, date, operation, target, message FROM log ORDER BY id ASC")?;

    let rows = stmt.query_map([], |row| {
        let id: i64 = row.get(0)?;
        let raw_date: String = row.get(1)?;
        let operation: String = row.get(2)?;
        let target: Option<String> = row.get(3)?;
        let message: String = row.get(4)?;
        Ok((id, raw_date, operation, target.unwrap_or_default(), message))
    })?;

    let mut entries = Vec::new();
    for r in rows {
        entries.push(r?);
    }

    if entries.is_empty() {
        println!("📜 Internal log is empty.");
        return Ok(());
    }

    let id_w = entries
        .iter()
        .map(|(id, ..)| id.to_string().len())
        .max()
        .unwrap_or(1);

    println!("📜 Internal log:\n");

    for (id, raw_date, operation, target, message) in entries {
        let date = chrono::DateTime::parse_from_rfc3339(&raw_date)
            .map(|dt| dt.format("%F %T").to_string())
            .unwrap_or(raw_date);

        let mut op_target = color_for_operation(&operation).paint(operation).to_string();
        if !target.is_empty() {
            op_target.push_str(&format!(" ({})", target));
        }

        // pad on the visible width, colour codes excluded
        let padding = " ".repeat(OP_WIDTH.saturating_sub(strip_ansi(&op_target).chars().count()));

        println!(
            "{:>id_w$}: {:<19} | {}{} => {}",
            id,
            date,
            op_target,
            padding,
            message,
            id_w = id_w
        );
    }

    Ok(())
}

const OP_WIDTH: usize = 48;
