//! Year and talk id extraction from a schedule page URL.

/// Returns `(year, id)`: the first and last non-empty path segments of
/// `reference_url`. Both are empty when the path has no segments.
///
/// Strings that are not absolute URLs are treated as a bare path, with any
/// query or fragment removed.
pub fn path_year_and_id(reference_url: &str) -> (String, String) {
    let parsed = url::Url::parse(reference_url).ok();
    let path = match &parsed {
        Some(u) => u.path(),
        None => bare_path(reference_url),
    };

    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let Some(first) = segments.next() else {
        return (String::new(), String::new());
    };
    let last = segments.last().unwrap_or(first);
    (first.to_string(), last.to_string())
}

fn bare_path(raw: &str) -> &str {
    let end = raw.find(['?', '#']).unwrap_or(raw.len());
    &raw[..end]
}
