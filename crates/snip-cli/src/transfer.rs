use snip_core::{Result, SnipError, Snippet};
use std::time::Duration;

/// Render snippets as a two-column CSV document with a header row. Fields
/// containing a comma, quote, CR or LF are quoted, with embedded quotes
/// doubled.
pub fn to_csv(snippets: &[Snippet]) -> String {
    let mut out = String::from("key,value\n");
    for snippet in snippets {
        out.push_str(&escape_field(&snippet.key));
        out.push(',');
        out.push_str(&escape_field(&snippet.value));
        out.push('\n');
    }
    out
}

/// Parse a two-column CSV document. The first record is always treated as a
/// header and skipped; records with fewer than two fields are dropped.
pub fn from_csv(data: &str) -> Vec<Snippet> {
    parse_records(data)
        .into_iter()
        .skip(1)
        .filter(|record| record.len() >= 2)
        .map(|record| {
            let mut fields = record.into_iter();
            let key = fields.next().unwrap_or_default();
            let value = fields.next().unwrap_or_default();
            Snippet::new(key, value)
        })
        .collect()
}

/// Fetch a remote CSV document. Only a 200 response is accepted.
pub fn fetch_csv(url: &str) -> Result<String> {
    let agent = ureq::AgentBuilder::new()
        .timeout_connect(Duration::from_secs(5))
        .timeout_read(Duration::from_secs(30))
        .build();

    let response = match agent.get(url).call() {
        Ok(response) => response,
        Err(ureq::Error::Status(code, _)) => {
            return Err(SnipError::Http(format!("unexpected status {code} from {url}")))
        }
        Err(ureq::Error::Transport(err)) => return Err(SnipError::Http(err.to_string())),
    };

    if response.status() != 200 {
        return Err(SnipError::Http(format!(
            "unexpected status {} from {url}",
            response.status()
        )));
    }

    response
        .into_string()
        .map_err(|e| SnipError::Http(e.to_string()))
}

fn escape_field(value: &str) -> String {
    let needs_quoting = value.contains(',')
        || value.contains('"')
        || value.contains('\n')
        || value.contains('\r');

    if needs_quoting {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

fn parse_records(input: &str) -> Vec<Vec<String>> {
    let mut records = Vec::new();
    let mut fields: Vec<String> = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if in_quotes {
            if c == '"' {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            } else {
                field.push(c);
            }
            continue;
        }

        match c {
            '"' if field.is_empty() => in_quotes = true,
            ',' => fields.push(std::mem::take(&mut field)),
            '\r' if chars.peek() == Some(&'\n') => {}
            '\n' => {
                fields.push(std::mem::take(&mut field));
                records.push(std::mem::take(&mut fields));
            }
            _ => field.push(c),
        }
    }

    if !field.is_empty() || !fields.is_empty() {
        fields.push(field);
        records.push(fields);
    }

    records
}
