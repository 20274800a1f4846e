use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::hash::Hash;

/// A closed set of categorical values with fixed display labels.
///
/// `ALL` defines the category order charts are rendered in, so every
/// aggregation over a `Categorical` type yields exactly `ALL.len()` entries.
pub trait Categorical: Copy + Eq + Hash + fmt::Debug + 'static {
    const ALL: &'static [Self];

    /// The raw string used for this value in the dataset
    fn label(self) -> &'static str;

    /// Exact, case-sensitive lookup by dataset label
    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|value| value.label() == label)
    }
}

/// Protection level of an institution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProtectionLevel {
    Basic,
    Special,
}

impl Categorical for ProtectionLevel {
    const ALL: &'static [Self] = &[Self::Basic, Self::Special];

    fn label(self) -> &'static str {
        match self {
            Self::Basic => "Proteção Social",
            Self::Special => "Proteção Social Especial",
        }
    }
}

/// Service complexity, ordered from lowest to highest intensity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Complexity {
    Basic,
    Medium,
    High,
}

impl Categorical for Complexity {
    const ALL: &'static [Self] = &[Self::Basic, Self::Medium, Self::High];

    fn label(self) -> &'static str {
        match self {
            Self::Basic => "Básica",
            Self::Medium => "Média",
            Self::High => "Alta",
        }
    }
}

/// Public served by an institution
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TargetPublic {
    Individual,
    Families,
}

impl Categorical for TargetPublic {
    const ALL: &'static [Self] = &[Self::Individual, Self::Families];

    fn label(self) -> &'static str {
        match self {
            Self::Individual => "Indivíduo",
            Self::Families => "Famílias",
        }
    }
}

/// A categorical field as read from the dataset.
///
/// Values outside the enumeration are kept verbatim so that they can be
/// reported, but they never match any fixed bucket.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Category<T: Categorical> {
    Known(T),
    Unrecognized(String),
}

impl<T: Categorical> Category<T> {
    pub fn parse(raw: &str) -> Self {
        match T::from_label(raw) {
            Some(value) => Self::Known(value),
            None => Self::Unrecognized(raw.to_string()),
        }
    }

    pub fn known(&self) -> Option<T> {
        match self {
            Self::Known(value) => Some(*value),
            Self::Unrecognized(_) => None,
        }
    }

    pub fn is(&self, value: T) -> bool {
        self.known() == Some(value)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Known(value) => value.label(),
            Self::Unrecognized(raw) => raw,
        }
    }
}

impl<T: Categorical> From<T> for Category<T> {
    fn from(value: T) -> Self {
        Self::Known(value)
    }
}

impl<T: Categorical> fmt::Display for Category<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl<'de, T: Categorical> Deserialize<'de> for Category<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::parse(&raw))
    }
}

impl<T: Categorical> Serialize for Category<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_category_sets() {
        assert_eq!(ProtectionLevel::ALL.len(), 2);
        assert_eq!(Complexity::ALL.len(), 3);
        assert_eq!(TargetPublic::ALL.len(), 2);
    }

    #[test]
    fn test_labels_are_unique_and_round_trip() {
        fn check<T: Categorical>() {
            let mut labels: Vec<&str> = T::ALL.iter().map(|v| v.label()).collect();
            let original_len = labels.len();
            labels.sort();
            labels.dedup();
            assert_eq!(labels.len(), original_len, "Duplicate labels found");

            for value in T::ALL {
                assert_eq!(T::from_label(value.label()), Some(*value));
            }
        }

        check::<ProtectionLevel>();
        check::<Complexity>();
        check::<TargetPublic>();
    }

    #[test]
    fn test_from_label_is_exact() {
        assert_eq!(
            ProtectionLevel::from_label("Proteção Social Especial"),
            Some(ProtectionLevel::Special)
        );
        assert_eq!(ProtectionLevel::from_label("proteção social especial"), None);
        assert_eq!(ProtectionLevel::from_label("Proteção Social "), None);
        assert_eq!(Complexity::from_label("Media"), None);
    }

    #[test]
    fn test_complexity_is_ordinal() {
        assert!(Complexity::Basic < Complexity::Medium);
        assert!(Complexity::Medium < Complexity::High);
    }

    #[test]
    fn test_category_parse() {
        let special: Category<ProtectionLevel> = Category::parse("Proteção Social Especial");
        assert_eq!(special, Category::Known(ProtectionLevel::Special));
        assert!(special.is(ProtectionLevel::Special));
        assert!(!special.is(ProtectionLevel::Basic));

        let odd: Category<ProtectionLevel> = Category::parse("Proteção Básica");
        assert_eq!(odd, Category::Unrecognized("Proteção Básica".to_string()));
        assert_eq!(odd.known(), None);
        assert!(!odd.is(ProtectionLevel::Basic));
        assert!(!odd.is(ProtectionLevel::Special));
        assert_eq!(odd.as_str(), "Proteção Básica");
    }

    #[test]
    fn test_category_serde_uses_raw_label() {
        let parsed: Category<TargetPublic> = serde_json::from_str("\"Famílias\"").unwrap();
        assert_eq!(parsed, Category::Known(TargetPublic::Families));
        assert_eq!(serde_json::to_string(&parsed).unwrap(), "\"Famílias\"");

        let unknown: Category<TargetPublic> = serde_json::from_str("\"Idosos\"").unwrap();
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "\"Idosos\"");
    }

    #[test]
    fn test_category_rejects_non_string() {
        let result: Result<Category<Complexity>, _> = serde_json::from_str("3");
        assert!(result.is_err());
    }
}
