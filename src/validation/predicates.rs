//! Pure field predicates
//!
//! Each function answers one yes/no question about a value and never carries a
//! message; the step validators pair predicates with messages.

use crate::models::BrochureFile;
use regex::Regex;
use std::sync::LazyLock;
use url::Url;

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Valid regex pattern"));

static USERNAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("Valid regex pattern"));

/// Non-empty after trimming whitespace
pub fn is_required(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Permissive `local@domain.tld` shape check
pub fn is_valid_email(value: &str) -> bool {
    !value.is_empty() && EMAIL_PATTERN.is_match(value)
}

pub fn has_min_length(value: &str, min: usize) -> bool {
    !value.is_empty() && value.chars().count() >= min
}

pub fn has_max_length(value: &str, max: usize) -> bool {
    value.chars().count() <= max
}

pub fn passwords_match(password: &str, confirmation: &str) -> bool {
    password == confirmation
}

/// Letters, digits, `_` and `-` only; empty is not a username
pub fn is_valid_username(value: &str) -> bool {
    !value.is_empty() && USERNAME_PATTERN.is_match(value)
}

/// Whole-number year within `[min, max]`
pub fn is_valid_year(value: &str, min: i32, max: i32) -> bool {
    value
        .trim()
        .parse::<i32>()
        .map(|year| (min..=max).contains(&year))
        .unwrap_or(false)
}

/// Syntactically valid web address; empty is accepted
///
/// A value without an `http://` or `https://` scheme is checked as if it
/// started with `https://`.
pub fn is_valid_url(value: &str) -> bool {
    if value.is_empty() {
        return true;
    }

    let lowered = value.to_ascii_lowercase();
    let candidate = if lowered.starts_with("http://") || lowered.starts_with("https://") {
        value.to_string()
    } else {
        format!("https://{value}")
    };

    match Url::parse(&candidate) {
        Ok(url) => url.host_str().is_some_and(|host| !host.is_empty()),
        Err(_) => false,
    }
}

pub fn is_valid_file_size(file: &BrochureFile, max_bytes: u64) -> bool {
    file.size_bytes <= max_bytes
}

/// Accepted when the declared MIME type is allowed; files with no useful MIME
/// type fall back to their extension
pub fn is_valid_file_type(
    file: &BrochureFile,
    allowed_mime_types: &[String],
    allowed_extensions: &[String],
) -> bool {
    if allowed_mime_types.iter().any(|mime| *mime == file.mime_type) {
        return true;
    }

    let declared_generic =
        file.mime_type.is_empty() || file.mime_type == "application/octet-stream";
    declared_generic
        && file
            .extension()
            .is_some_and(|ext| allowed_extensions.iter().any(|allowed| *allowed == ext))
}
