//! Module: name
//! Responsibility: validated object-name newtype shared by every entity.
//! Boundary: all name construction validates; stored names are always valid.

use crate::error::NameError;
use derive_more::{Deref, Display};
use serde::{Deserialize, Serialize};
use std::borrow::Borrow;

/// Maximum object name length in bytes.
pub const MAX_NAME_LEN: usize = 64;

///
/// Name
///
/// Unique key of an entity within its type partition. Non-empty, ASCII,
/// at most [`MAX_NAME_LEN`] bytes.
///

#[derive(
    Clone, Debug, Deref, Display, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct Name(String);

impl Name {
    pub fn try_from_str(s: &str) -> Result<Self, NameError> {
        if s.is_empty() {
            return Err(NameError::Empty);
        }
        if s.len() > MAX_NAME_LEN {
            return Err(NameError::TooLong {
                len: s.len(),
                max: MAX_NAME_LEN,
            });
        }
        if !s.is_ascii() {
            return Err(NameError::NonAscii);
        }

        Ok(Self(s.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Name {
    type Error = NameError;

    fn try_from(s: String) -> Result<Self, NameError> {
        Self::try_from_str(&s)
    }
}

impl From<Name> for String {
    fn from(name: Name) -> Self {
        name.0
    }
}

// Allows `BTreeMap<Name, _>` lookups keyed by `&str`.
impl Borrow<str> for Name {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn roundtrip() {
        let name = Name::try_from_str("V394W02").unwrap();
        assert_eq!(name.as_str(), "V394W02");
        assert_eq!(name.to_string(), "V394W02");
    }

    #[test]
    fn rejects_empty() {
        assert!(matches!(Name::try_from_str(""), Err(NameError::Empty)));
    }

    #[test]
    fn rejects_len_over_max() {
        let s = "a".repeat(MAX_NAME_LEN + 1);
        assert!(matches!(
            Name::try_from_str(&s),
            Err(NameError::TooLong { .. })
        ));
    }

    #[test]
    fn rejects_non_ascii() {
        assert!(matches!(
            Name::try_from_str("caméra"),
            Err(NameError::NonAscii)
        ));
    }

    #[test]
    fn serde_validates_on_decode() {
        let name: Name = serde_json::from_str("\"DET1001\"").unwrap();
        assert_eq!(name.as_str(), "DET1001");
        assert!(serde_json::from_str::<Name>("\"\"").is_err());
    }

    proptest! {
        #[test]
        fn accepts_all_ascii_in_bounds(s in "[ -~]{1,64}") {
            let name = Name::try_from_str(&s).unwrap();
            prop_assert_eq!(name.as_str(), s);
        }
    }
}
