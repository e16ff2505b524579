//! Field name normalization
//!
//! Raw field keys carry editor-generated suffixes: a qualifier marking option
//! sets, custom types or geographic values, and a trailing type token such as
//! `_text`. Normalization strips these to recover the name the author chose.

/// Marker preceding an option-set qualifier
pub const OPTION_SET_MARKER: &str = "_option_";

/// Marker preceding a custom-type qualifier
pub const CUSTOM_TYPE_MARKER: &str = "_custom_";

/// Marker preceding a geographic qualifier
pub const GEOGRAPHIC_MARKER: &str = "_geographic";

/// Declared types whose token is appended to generated field keys
const SUFFIXED_TYPES: [&str; 6] = ["text", "number", "date", "boolean", "file", "image"];

/// Reconstruct a clean field name from a raw field key.
///
/// Truncates at the option-set, custom-type and geographic markers (in that
/// order), then strips a trailing `_<type>` when the declared type is one of
/// the suffixed scalar types. If the result would be empty, the raw name is
/// returned unchanged.
///
/// # Example
///
/// ```rust
/// use app_schema_sdk::convert::naming::normalize_field_name;
///
/// assert_eq!(normalize_field_name("due_date_date", "date"), "due_date");
/// assert_eq!(normalize_field_name("owner_custom_user", "custom.User"), "owner");
/// assert_eq!(normalize_field_name("status_option_set_custom_z", "text"), "status");
/// ```
pub fn normalize_field_name(raw_name: &str, declared_type: &str) -> String {
    let mut name = raw_name;

    for marker in [OPTION_SET_MARKER, CUSTOM_TYPE_MARKER, GEOGRAPHIC_MARKER] {
        if let Some(pos) = name.find(marker) {
            name = &name[..pos];
        }
    }

    if SUFFIXED_TYPES.contains(&declared_type) {
        let suffix = format!("_{}", declared_type);
        if let Some(stripped) = name.strip_suffix(suffix.as_str()) {
            name = stripped;
        }
    }

    if name.is_empty() {
        raw_name.to_string()
    } else {
        name.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_type_suffix() {
        assert_eq!(normalize_field_name("title_text", "text"), "title");
        assert_eq!(normalize_field_name("price_number", "number"), "price");
        assert_eq!(normalize_field_name("active_boolean", "boolean"), "active");
        assert_eq!(normalize_field_name("avatar_image", "image"), "avatar");
        assert_eq!(normalize_field_name("contract_file", "file"), "contract");
    }

    #[test]
    fn test_suffix_must_match_declared_type() {
        assert_eq!(normalize_field_name("title_text", "number"), "title_text");
        assert_eq!(normalize_field_name("assignee_user", "user"), "assignee_user");
    }

    #[test]
    fn test_suffix_stripped_once() {
        assert_eq!(normalize_field_name("due_date_date", "date"), "due_date");
    }

    #[test]
    fn test_truncates_at_markers() {
        assert_eq!(normalize_field_name("owner_custom_x", "custom.User"), "owner");
        assert_eq!(
            normalize_field_name("status_option_set_custom_z", "text"),
            "status"
        );
        assert_eq!(
            normalize_field_name("address_geographic_address", "geographic_address"),
            "address"
        );
    }

    #[test]
    fn test_suffix_checked_after_truncation() {
        assert_eq!(
            normalize_field_name("label_text_option_colors", "text"),
            "label"
        );
    }

    #[test]
    fn test_empty_result_keeps_raw_name() {
        assert_eq!(normalize_field_name("_custom_user", "custom.User"), "_custom_user");
        assert_eq!(normalize_field_name("_text", "text"), "_text");
        assert_eq!(normalize_field_name("_option_a_text", "text"), "_option_a_text");
    }

    #[test]
    fn test_plain_names_untouched() {
        assert_eq!(normalize_field_name("title", "text"), "title");
        assert_eq!(normalize_field_name("tags", "list.text"), "tags");
    }

    #[test]
    fn test_idempotent() {
        let cases = [
            ("title_text", "text"),
            ("owner_custom_x", "custom.User"),
            ("status_option_set_custom_z", "text"),
            ("address_geographic_address", "geographic_address"),
            ("_custom_user", "custom.User"),
            ("_text", "text"),
            ("count_number", "number"),
        ];
        for (raw, declared) in cases {
            let once = normalize_field_name(raw, declared);
            assert_eq!(normalize_field_name(&once, declared), once, "{}", raw);
        }
    }
}
