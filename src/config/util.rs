//! Configuration utility functions.

use std::path::{Path, PathBuf};

/// Schemes that carry an authority and so need a host.
const HOST_SCHEMES: &[&str] = &["http", "https", "ftp", "ws", "wss"];

/// Schemes refused for link targets.
const BLOCKED_SCHEMES: &[&str] = &["javascript", "vbscript"];

/// Check that a link target is an absolute URL or an absolute site path.
///
/// Any scheme the URL parser accepts is fine (`https:`, `ftp:`, `tel:`,
/// `mailto:` ...) except script schemes. Returns a message describing the
/// problem, or `None` when the value is usable as-is.
///
/// # Examples
/// ```ignore
/// check_href("https://docus.dev")  -> None
/// check_href("/getting-started")   -> None
/// check_href("tel:+15551234")      -> None
/// check_href("docus.dev")          -> Some("invalid URL: relative URL without a base")
/// check_href("//cdn.example.com")  -> Some(..)  // protocol-relative
/// ```
pub fn check_href(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("link target is empty".to_string());
    }

    if value.starts_with('/') {
        if value.starts_with("//") {
            return Some("protocol-relative URLs are not supported".to_string());
        }
        return None;
    }

    match url::Url::parse(value) {
        Ok(parsed) => {
            let scheme = parsed.scheme();
            if BLOCKED_SCHEMES.contains(&scheme) {
                return Some(format!("scheme '{scheme}' not allowed"));
            }
            if HOST_SCHEMES.contains(&scheme) && parsed.host_str().is_none_or(str::is_empty) {
                return Some("URL must have a valid host".to_string());
            }
            None
        }
        Err(e) => Some(format!("invalid URL: {}", e)),
    }
}

/// Check that an image source is an http(s) URL or an absolute site path.
pub fn check_image(value: &str) -> Option<String> {
    if let Some(err) = check_href(value) {
        return Some(err);
    }
    let value = value.trim();
    if value.starts_with('/') || is_absolute_url(value) {
        None
    } else {
        Some("image must be an http(s) URL or an absolute path".to_string())
    }
}

/// Whether `value` parses as an absolute http(s) URL.
pub fn is_absolute_url(value: &str) -> bool {
    url::Url::parse(value).is_ok_and(|u| matches!(u.scheme(), "http" | "https"))
}

/// Find config file by searching upward from current directory
///
/// Starts from cwd and walks up parent directories until finding `config_name`
/// Returns the absolute path to the config file if found
///
/// # Example
/// ```text
/// /home/user/docs/content/guide/  ← cwd
/// /home/user/docs/docus.toml      ← found!
/// ```
pub fn find_config_file(config_name: &Path) -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, config_name)
}

/// Same as [`find_config_file`], starting at `start` instead of cwd.
pub fn find_config_file_from(start: &Path, config_name: &Path) -> Option<PathBuf> {
    if config_name.is_absolute() {
        return config_name.exists().then(|| config_name.to_path_buf());
    }

    let mut current = start;
    loop {
        let candidate = current.join(config_name);
        if candidate.is_file() {
            return Some(candidate);
        }

        match current.parent() {
            Some(parent) => current = parent,
            None => return None, // Reached filesystem root
        }
    }
}

// ============================================================================
// tests
// ============================================================================
