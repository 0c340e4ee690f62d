pub(crate) mod metrics;
pub(crate) mod trace_root;

use once_cell::sync::Lazy;
use regex::Regex;

static NUMERIC_SEGMENT_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\d+(/|$)").expect("Invalid numeric segment regex"));

/// Collapses numeric path segments so metric labels stay low-cardinality.
pub(crate) fn normalize_uri(path: &str) -> String {
    let path = path.split('?').next().unwrap_or(path);
    NUMERIC_SEGMENT_REGEX
        .replace_all(path, "/{id}$1")
        .to_string()
}
