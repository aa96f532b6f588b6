//! YAML frontmatter extraction from markdown pages.
//!
//! Workshop pages carry their publishing metadata in a YAML block at the
//! top of the file, delimited by `---`:
//!
//! ```markdown
//! ---
//! title: Cleaning scanned tables
//! order: 2
//! data_files:
//!   - data/*.csv
//! ---
//!
//! ## Getting started
//! ...
//! ```
//!
//! Pages without frontmatter are not published, so extraction is tolerant:
//! missing delimiters, empty blocks, and invalid YAML all yield a result
//! with no frontmatter rather than an error.

use bindery_core::{Error, Result};
use serde::de::DeserializeOwned;
use serde_yaml::Value;

/// Result of frontmatter extraction: the parsed YAML block (if any) and
/// the body content after it.
#[derive(Debug, Clone)]
pub struct Frontmatter<'a> {
    /// Parsed YAML frontmatter, if present and valid.
    value: Option<Value>,
    /// Body content after the closing delimiter.
    body: &'a str,
    /// Whether both delimiters were found (even if the YAML failed to parse).
    had_delimiters: bool,
}

impl<'a> Frontmatter<'a> {
    fn present(value: Value, body: &'a str) -> Self {
        Self {
            value: Some(value),
            body,
            had_delimiters: true,
        }
    }

    fn absent(body: &'a str) -> Self {
        Self {
            value: None,
            body,
            had_delimiters: false,
        }
    }

    fn invalid(body: &'a str) -> Self {
        Self {
            value: None,
            body,
            had_delimiters: true,
        }
    }

    /// Check if valid frontmatter was found and parsed.
    pub fn has_frontmatter(&self) -> bool {
        self.value.is_some()
    }

    /// Check if frontmatter delimiters were present (even if parsing failed).
    pub fn had_delimiters(&self) -> bool {
        self.had_delimiters
    }

    /// Get the raw YAML value, if present.
    pub fn value(&self) -> Option<&Value> {
        self.value.as_ref()
    }

    /// Get the body content (everything after the frontmatter).
    pub fn body(&self) -> &'a str {
        self.body
    }

    /// Get a string field from the frontmatter.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.value.as_ref()?.get(key)?.as_str()
    }

    /// Deserialize the frontmatter into a caller-defined metadata type.
    ///
    /// Returns `None` if no frontmatter was found, `Err` if the YAML does
    /// not match the target type.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<Option<T>> {
        match &self.value {
            Some(value) => {
                let parsed: T = serde_yaml::from_value(value.clone())
                    .map_err(|e| Error::parse(format!("frontmatter does not match schema: {e}")))?;
                Ok(Some(parsed))
            }
            None => Ok(None),
        }
    }
}

/// Extract YAML frontmatter from markdown content.
///
/// # Behavior
///
/// - No opening `---`: the whole content is the body, `has_frontmatter()`
///   is false
/// - Delimiters found but the YAML is invalid: a warning is logged and the
///   body after the closing delimiter is returned
/// - No closing delimiter: a warning is logged and the whole content is
///   treated as body
///
/// # Example
///
/// ```rust
/// use bindery_content::markdown::extract_frontmatter;
///
/// let content = "---\ntitle: Day Two\n---\n\n## Agenda";
/// let result = extract_frontmatter(content).unwrap();
/// assert!(result.has_frontmatter());
/// assert_eq!(result.get_str("title"), Some("Day Two"));
/// assert_eq!(result.body().trim(), "## Agenda");
/// ```
pub fn extract_frontmatter(content: &str) -> Result<Frontmatter<'_>> {
    if !content.starts_with("---") {
        return Ok(Frontmatter::absent(content));
    }

    // Step past the opening delimiter line
    let after_open = match content[3..].find('\n') {
        Some(pos) => &content[3 + pos + 1..],
        None => return Ok(Frontmatter::absent(content)),
    };

    // Locate the closing delimiter; an immediate `---` means an empty block
    let (yaml_block, after_close) = if let Some(rest) = after_open.strip_prefix("---") {
        ("", rest)
    } else if let Some(close) = after_open.find("\n---") {
        (&after_open[..close], &after_open[close + 4..])
    } else {
        log::warn!("frontmatter opened with --- but never closed");
        return Ok(Frontmatter::absent(content));
    };

    let body = after_close.strip_prefix('\n').unwrap_or(after_close);

    match serde_yaml::from_str::<Value>(yaml_block) {
        Ok(value) => Ok(Frontmatter::present(value, body)),
        Err(e) => {
            log::warn!("invalid YAML in frontmatter: {e}");
            Ok(Frontmatter::invalid(body))
        }
    }
}

/// Strip frontmatter from content, returning only the body.
pub fn strip_frontmatter(content: &str) -> &str {
    extract_frontmatter(content)
        .map(|r| r.body())
        .unwrap_or(content)
}

// ============================================================================
// Tests
// ============================================================================
