//! Declared type classification
//!
//! All prefix dispatch on declared type tokens lives here so the renderers
//! only ever see [`FieldKind`].

use crate::models::{DbType, FieldKind};

/// Prefix of a single-valued reference to a custom type
pub const CUSTOM_TYPE_PREFIX: &str = "custom.";

/// Prefix of a multi-valued (list) relation
pub const LIST_PREFIX: &str = "list.";

/// Declared type of a reference to the built-in user type
pub const USER_TYPE: &str = "user";

/// Classify a declared type token.
///
/// Precedence: custom reference, user reference, list relation, scalar.
///
/// # Example
///
/// ```rust
/// use app_schema_sdk::convert::classify::classify;
/// use app_schema_sdk::models::{DbType, FieldKind};
///
/// assert_eq!(classify("number"), FieldKind::Scalar { db_type: DbType::Numeric });
/// assert_eq!(
///     classify("custom.Order"),
///     FieldKind::Reference { target_type: "Order".to_string() }
/// );
/// assert_eq!(classify("list.custom.Order"), FieldKind::Excluded);
/// ```
pub fn classify(declared_type: &str) -> FieldKind {
    if let Some(target) = declared_type.strip_prefix(CUSTOM_TYPE_PREFIX) {
        return FieldKind::Reference {
            target_type: target.to_string(),
        };
    }

    if declared_type == USER_TYPE {
        return FieldKind::Reference {
            target_type: USER_TYPE.to_string(),
        };
    }

    if declared_type.starts_with(LIST_PREFIX) {
        return FieldKind::Excluded;
    }

    let db_type = match declared_type {
        "number" => DbType::Numeric,
        "date" => DbType::Timestamp,
        "boolean" => DbType::Boolean,
        _ => DbType::Text,
    };
    FieldKind::Scalar { db_type }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scalar(db_type: DbType) -> FieldKind {
        FieldKind::Scalar { db_type }
    }

    #[test]
    fn test_scalar_types() {
        assert_eq!(classify("text"), scalar(DbType::Text));
        assert_eq!(classify("number"), scalar(DbType::Numeric));
        assert_eq!(classify("date"), scalar(DbType::Timestamp));
        assert_eq!(classify("boolean"), scalar(DbType::Boolean));
    }

    #[test]
    fn test_unknown_types_are_text() {
        assert_eq!(classify("file"), scalar(DbType::Text));
        assert_eq!(classify("image"), scalar(DbType::Text));
        assert_eq!(classify("geographic_address"), scalar(DbType::Text));
        assert_eq!(classify("option.status"), scalar(DbType::Text));
    }

    #[test]
    fn test_references() {
        assert_eq!(
            classify("custom.User"),
            FieldKind::Reference {
                target_type: "User".to_string()
            }
        );
        assert_eq!(
            classify("user"),
            FieldKind::Reference {
                target_type: "user".to_string()
            }
        );
    }

    #[test]
    fn test_lists_are_excluded() {
        assert_eq!(classify("list.text"), FieldKind::Excluded);
        assert_eq!(classify("list.custom.User"), FieldKind::Excluded);
        assert_eq!(classify("list.user"), FieldKind::Excluded);
    }
}
