use crate::cli::{Commands, Snip};
use crate::output;
use crate::transfer;
use chrono::Local;
use clap::CommandFactory;
use snip_core::{expand, set_clipboard_text, Result, SnipError, Snippet, SnippetStore};
use std::fs;
use std::path::Path;

pub fn handle_command(cli: Snip) -> Result<()> {
    match cli.command {
        Some(command) => handle_subcommand(command),
        None => match cli.input {
            Some(input) => handle_input(&input, &cli.args),
            None => {
                Snip::command().print_help()?;
                Ok(())
            }
        },
    }
}

fn handle_subcommand(command: Commands) -> Result<()> {
    match command {
        Commands::Ls => list_snippets(),
        Commands::Update { entry } => update_snippet(&entry),
        Commands::Delete { key } => delete_snippet(&key),
        Commands::Reset => reset_snippets(),
        Commands::Export { path } => export_snippets(&path),
        Commands::Import { path, url } => import_snippets(path.as_deref(), url.as_deref()),
    }
}

/// The bare `snip <input> [args...]` form: create on `key='value'`, otherwise
/// read, expand and copy to the clipboard.
fn handle_input(input: &str, args: &[String]) -> Result<()> {
    if input.contains('=') {
        let (key, value) = parse_entry(input)?;
        let store = SnippetStore::open_default()?;
        store.create(&key, &value)?;
        output::info(format!(
            "Snippet successfully created, key={key:?} value={value:?}."
        ));
        return Ok(());
    }

    let store = SnippetStore::open_default()?;
    let snippet = store.read(input)?;
    let value = expand(&snippet.value, args);
    set_clipboard_text(&value)?;
    output::info(format!("Copied to clipboard, value={value:?}"));
    Ok(())
}

fn list_snippets() -> Result<()> {
    let store = SnippetStore::open_default()?;
    let snippets = store.read_all()?;
    output::info(format!("Found {} snippets...", snippets.len()));

    if snippets.is_empty() {
        return Ok(());
    }

    print!("{}", output::render_table(&snippets));
    Ok(())
}

fn update_snippet(entry: &str) -> Result<()> {
    let (key, value) = parse_entry(entry)?;
    let store = SnippetStore::open_default()?;
    let snippet = store.read(&key)?;
    store.update(&Snippet {
        value: value.clone(),
        ..snippet
    })?;
    output::info(format!(
        "Snippet successfully updated, key={key:?} value={value:?}."
    ));
    Ok(())
}

fn delete_snippet(key: &str) -> Result<()> {
    let store = SnippetStore::open_default()?;
    store.delete(key)?;
    output::info(format!("Snippet successfully deleted, key={key:?}."));
    Ok(())
}

fn reset_snippets() -> Result<()> {
    let store = SnippetStore::open_default()?;
    store.reset()?;
    output::info("Snippets have been successfully reset");
    Ok(())
}

fn export_snippets(dir: &Path) -> Result<()> {
    let store = SnippetStore::open_default()?;
    let snippets = store.read_all()?;
    output::info(format!("Generating report with {} snippets...", snippets.len()));

    let filename = dir.join(format!("snip-{}.csv", Local::now().format("%Y-%m-%d")));
    fs::write(&filename, transfer::to_csv(&snippets))?;

    output::info(format!("CSV file successfully created at path={filename:?}"));
    Ok(())
}

fn import_snippets(path: Option<&Path>, url: Option<&str>) -> Result<()> {
    let data = match (path, url) {
        (Some(path), _) => fs::read_to_string(path)?,
        (None, Some(url)) => transfer::fetch_csv(url)?,
        (None, None) => {
            return Err(SnipError::MalformedInput(
                "a valid path or url is required".into(),
            ))
        }
    };

    let snippets = transfer::from_csv(&data);
    if snippets.is_empty() {
        return Err(SnipError::MalformedInput(
            "no valid snippets were found".into(),
        ));
    }

    let mut store = SnippetStore::open_default()?;
    store.import_many(&snippets)?;

    let source = match path {
        Some(path) => path.display().to_string(),
        None => url.unwrap_or_default().to_string(),
    };
    output::info(format!("CSV file successfully imported from {source:?}"));
    Ok(())
}

/// Split `key='value'` input into its parts. Surrounding single quotes and
/// whitespace are stripped from the value.
fn parse_entry(input: &str) -> Result<(String, String)> {
    let (key, raw_value) = input
        .split_once('=')
        .ok_or_else(|| SnipError::MalformedInput("use key='value'".into()))?;

    if key.is_empty() {
        return Err(SnipError::MalformedInput("use key='value'".into()));
    }

    let value = raw_value.trim_matches('\'').trim();
    Ok((key.to_string(), value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_entry_splits_on_first_equals() {
        let (key, value) = parse_entry("math=1+1=2").unwrap();
        assert_eq!(key, "math");
        assert_eq!(value, "1+1=2");
    }

    #[test]
    fn parse_entry_trims_quotes_and_whitespace() {
        let (key, value) = parse_entry("greet='hello $1 '").unwrap();
        assert_eq!(key, "greet");
        assert_eq!(value, "hello $1");
    }

    #[test]
    fn parse_entry_rejects_empty_key() {
        assert!(matches!(
            parse_entry("='orphan'").unwrap_err(),
            SnipError::MalformedInput(_)
        ));
    }

    #[test]
    fn parse_entry_allows_empty_value() {
        let (key, value) = parse_entry("blank=''").unwrap();
        assert_eq!(key, "blank");
        assert_eq!(value, "");
    }
}
