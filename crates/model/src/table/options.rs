use crate::core::{data_type::OnConflict, value::DefaultValue};
use serde::{Deserialize, Serialize};

/// Table-level switches for the `CREATE` prefix.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TableOptions {
    pub if_not_exists: bool,
    pub temporary: bool,
}

impl TableOptions {
    pub fn if_not_exists() -> Self {
        Self {
            if_not_exists: true,
            ..Default::default()
        }
    }

    pub fn temporary() -> Self {
        Self {
            temporary: true,
            ..Default::default()
        }
    }
}

/// Column constraints. Unset flags and `None` fields emit nothing.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ColumnOptions {
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub auto_increment: bool,
    #[serde(default)]
    pub not_null: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub on_conflict: Option<OnConflict>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<DefaultValue>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_flags_default_to_false() {
        let options: TableOptions = serde_json::from_str(r#"{"ifNotExists": true}"#).unwrap();
        assert!(options.if_not_exists);
        assert!(!options.temporary);

        let options: ColumnOptions =
            serde_json::from_str(r#"{"notNull": true, "onConflict": "REPLACE", "default": 3}"#)
                .unwrap();
        assert!(options.not_null);
        assert!(!options.primary_key);
        assert_eq!(options.on_conflict, Some(OnConflict::Replace));
        assert_eq!(options.default, Some(DefaultValue::Integer(3)));
    }
}
