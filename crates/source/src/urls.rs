//! URL helpers shared by request builders and parsers.

/// Join a possibly-relative fragment onto the base URL with exactly one `/`.
///
/// Absolute URLs pass through untouched.
pub fn absolutize(base: &str, fragment: &str) -> String {
    if fragment.starts_with("http") {
        return fragment.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        fragment.trim_start_matches('/')
    )
}

/// Value of one query parameter, if present.
pub fn query_param(url: &str, name: &str) -> Option<String> {
    let (_, query) = url.split_once('?')?;
    for pair in query.split('&') {
        let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
        if key == name {
            return Some(value.to_string());
        }
    }
    None
}
