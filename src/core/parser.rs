use crate::domain::model::{Repository, Requirements};
use crate::utils::error::{ManifestError, Result};

/// Whitespace as the byte-oriented trim sees it: ASCII only, so a no-break
/// space stays part of the value.
fn trim_ascii_ws(s: &str) -> &str {
    s.trim_matches(|c| matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0b' | '\x0c'))
}

/// Split one entry on its first `:` and trim both halves.
fn split_entry<'a>(field: &str, entry: &'a str) -> Result<(&'a str, &'a str)> {
    entry
        .split_once(':')
        .map(|(left, right)| (trim_ascii_ws(left), trim_ascii_ws(right)))
        .ok_or_else(|| ManifestError::MalformedEntry {
            field: field.to_string(),
            entry: entry.to_string(),
        })
}

/// Parse `"name: constraint, name: constraint"` into a requirement map.
///
/// An empty input yields `Ok(None)`. Any entry without a `:` fails the whole
/// parse; there is no partial result.
pub fn parse_requirements(field: &str, input: &str) -> Result<Option<Requirements>> {
    if input.is_empty() {
        return Ok(None);
    }

    let mut requirements = Requirements::new();
    for entry in input.split(',') {
        let (name, constraint) = split_entry(field, entry)?;
        tracing::debug!("require {} => {}", name, constraint);
        requirements.insert(name.to_string(), constraint.to_string());
    }
    Ok(Some(requirements))
}

/// Parse `"type:url, type:url"` into repository descriptors, in input order.
///
/// Only the first `:` of an entry splits, so URLs keep their scheme.
pub fn parse_repositories(field: &str, input: &str) -> Result<Option<Vec<Repository>>> {
    if input.is_empty() {
        return Ok(None);
    }

    input
        .split(',')
        .map(|entry| {
            let (kind, url) = split_entry(field, entry)?;
            tracing::debug!("repository {} => {}", kind, url);
            Ok(Repository {
                r#type: kind.to_string(),
                url: url.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()
        .map(Some)
}
