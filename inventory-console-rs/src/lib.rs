//! # Inventory Console
//!
//! In-memory employee and equipment inventory built on
//! [`inventory_validation`]. Records are seeded from a mock dataset; every
//! write goes through the sanitizer and the shared field rules.

pub mod config;
pub mod error;
pub mod form;
pub mod mock_data;
pub mod query;
pub mod store;

pub use config::ConsoleConfig;
pub use error::{ConsoleError, ConsoleResult};
pub use form::{FormMode, RecordForm};
pub use query::{paginate, Page, Pagination, RecordFilters, SearchQuery, SortDirection};
pub use store::{AuditAction, AuditEntry, DepartmentCount, Inventory, InventoryStats};

use inventory_validation::sanitizers::{sanitize_input, validate_and_sanitize_with_limit};
use inventory_validation::{InputRejection, SanitizeResult};

/// Inventory to start a session from, per configuration
pub fn open_inventory(config: &ConsoleConfig) -> Inventory {
    if config.seed_mock_data {
        Inventory::with_mock_data()
    } else {
        Inventory::new()
    }
}

/// Sanitize free text. In strict mode hostile, empty or oversized text is
/// refused instead of stripped.
pub fn sanitize_text(
    text: &str,
    strict: bool,
    max_length: usize,
) -> Result<SanitizeResult<String>, InputRejection> {
    if strict {
        validate_and_sanitize_with_limit(text, max_length)?;
    }

    Ok(sanitize_input(text))
}

/// Parse `field=value` assignments into a raw record.
///
/// The value may itself contain `=`; only the first one splits.
pub fn parse_assignments<S: AsRef<str>>(
    assignments: &[S],
) -> Result<inventory_validation::RawRecord, String> {
    assignments
        .iter()
        .map(|pair| {
            let pair = pair.as_ref();
            pair.split_once('=')
                .map(|(name, value)| (name.trim().to_string(), value.to_string()))
                .ok_or_else(|| format!("Expected field=value, got '{}'", pair))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_assignments() {
        let raw = parse_assignments(&["fullName=Juan Pérez", "model=A=B"]).unwrap();
        assert_eq!(raw["fullName"], "Juan Pérez");
        assert_eq!(raw["model"], "A=B");

        assert!(parse_assignments(&["fullName"]).is_err());
    }

    #[test]
    fn test_open_inventory() {
        let config = ConsoleConfig {
            seed_mock_data: false,
            ..Default::default()
        };
        assert!(open_inventory(&config).is_empty());
        assert!(!open_inventory(&ConsoleConfig::default()).is_empty());
    }

    #[test]
    fn test_sanitize_text_modes() {
        let lenient = sanitize_text(" <b>Dell</b>", false, 1000).unwrap();
        assert_eq!(lenient.sanitized, "bDell/b");
        assert!(lenient.was_modified);

        let strict = sanitize_text(" <b>Dell</b>", true, 1000).unwrap();
        assert_eq!(strict, lenient);

        assert_eq!(
            sanitize_text("<script>x</script>Dell", true, 1000),
            Err(InputRejection::DisallowedContent)
        );
        assert_eq!(
            sanitize_text("<script>x</script>Dell", false, 1000).unwrap().sanitized,
            "Dell"
        );
        assert_eq!(
            sanitize_text("Latitude", true, 3),
            Err(InputRejection::TooLong { max: 3, actual: 8 })
        );
    }

    #[test]
    fn test_sanitize_text_json_shape() {
        let report = sanitize_text("  Dell ", true, 1000).unwrap();
        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "sanitized": "Dell",
                "was_modified": true,
                "details": ["Trimmed whitespace"],
            })
        );
    }
}
