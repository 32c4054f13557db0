//! Wire forms accepted for enumerated fields.

use serde::Deserialize;

/// An enumerated value as a client sends it, either by name or by ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum EnumRepr {
    /// Numeric discriminant.
    Ordinal(i64),
    /// Variant name.
    Name(String),
}

#[cfg(test)]
mod tests {
    use super::EnumRepr;

    #[test]
    fn numbers_and_strings_are_both_accepted() {
        let ordinal: EnumRepr = serde_json::from_str("3").expect("ordinal");
        let name: EnumRepr = serde_json::from_str("\"High\"").expect("name");

        assert_eq!(ordinal, EnumRepr::Ordinal(3));
        assert_eq!(name, EnumRepr::Name("High".to_owned()));
    }
}
