pub(crate) mod measure_metrics;
pub(crate) mod metrics;
pub(crate) mod root_span;

use once_cell::sync::Lazy;
use regex::Regex;

pub(crate) static DATABASE_URL_KEY: &str = "DATABASE_URL";
pub(crate) static APP_NAME: &str = "todo_service";
pub(crate) static APP_VERSION: &str = env!("CARGO_PKG_VERSION");

pub(crate) use root_span::RootSpan;

static URL_CREDENTIALS_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<prefix>[A-Za-z][A-Za-z0-9+.-]*://[^:@/]+):[^@/]*@")
        .expect("Invalid url credentials regex")
});

/// Masks the password part of a connection url, keeping the user name.
pub(crate) fn redact_url(url: &str) -> String {
    URL_CREDENTIALS_REGEX
        .replace(url, "${prefix}:***@")
        .into_owned()
}

#[macro_export]
macro_rules! trace_err {
    ($expr:expr, $($arg:tt)*) => {
        $expr.map_err(|e| {
            ::tracing::error!(%e, $($arg)*);
            e
        })
    };
}
