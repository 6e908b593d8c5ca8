use colored::Colorize;
use snip_core::Snippet;
use std::fmt::Display;

pub fn info(message: impl Display) {
    println!("{} {}", "SNIP".cyan().bold(), message);
}

pub fn error(message: impl Display) {
    eprintln!("{} {}", "ERROR".red().bold(), message);
}

/// Render snippets as a two-column table with a `KEY`/`VALUE` header row.
/// Columns are padded to the widest cell and even rows (header included) are
/// dimmed for striping.
pub fn render_table(snippets: &[Snippet]) -> String {
    let header = Snippet::new("KEY", "VALUE");
    let rows: Vec<&Snippet> = std::iter::once(&header).chain(snippets.iter()).collect();

    let key_width = rows.iter().map(|s| s.key.len()).max().unwrap_or(0) + 4;
    let value_width = rows.iter().map(|s| s.value.len()).max().unwrap_or(0);

    let mut out = String::new();
    for (i, snippet) in rows.iter().enumerate() {
        let key = format!("{:<key_width$}", snippet.key);
        let value = format!("{:<value_width$}", snippet.value);
        if i % 2 == 0 {
            out.push_str(&format!("{} {}\n", key.bright_black(), value.bright_black()));
        } else {
            out.push_str(&format!("{key} {value}\n"));
        }
    }
    out
}
