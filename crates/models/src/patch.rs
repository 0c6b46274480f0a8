use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A field of an update payload.
///
/// Fields missing from the payload deserialize to [`Patch::Unset`] (with
/// `#[serde(default)]` on the field), an explicit JSON `null` to
/// [`Patch::Null`], anything else to [`Patch::Value`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Patch<T> {
    #[default]
    Unset,
    Null,
    Value(T),
}

/// Values the update policy treats as "not supplied" even when present.
pub trait Blank {
    fn is_blank(&self) -> bool;
}

impl Blank for String {
    fn is_blank(&self) -> bool {
        self.is_empty()
    }
}

impl Blank for i32 {
    fn is_blank(&self) -> bool {
        *self == 0
    }
}

impl<T> Patch<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_value(&self) -> Option<&T> {
        match self {
            Self::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T: Blank> Patch<T> {
    /// The value this patch will write, if any; blank values are skipped
    pub fn as_change(&self) -> Option<&T> {
        self.as_value().filter(|value| !value.is_blank())
    }

    /// Resolves the patch to the change it asks for.
    ///
    /// `None` leaves the stored value alone: the field was absent or carried a
    /// blank value (empty string, zero). `Some(None)` clears the field.
    pub fn into_change(self) -> Option<Option<T>> {
        match self {
            Self::Unset => None,
            Self::Null => Some(None),
            Self::Value(value) if value.is_blank() => None,
            Self::Value(value) => Some(Some(value)),
        }
    }

    /// Like [`Patch::into_change`], for columns that cannot be null.
    ///
    /// Callers validate that required fields never carry `null`, so a `Null`
    /// here is skipped.
    pub fn into_required_change(self) -> Option<T> {
        self.into_change().flatten()
    }
}

impl<T> From<Option<T>> for Patch<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Value(value),
            None => Self::Null,
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Patch<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<T>::deserialize(deserializer).map(Into::into)
    }
}

impl<T: Serialize> Serialize for Patch<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Self::Value(value) => value.serialize(serializer),
            Self::Unset | Self::Null => serializer.serialize_none(),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Payload {
        #[serde(default)]
        phone: Patch<String>,
        #[serde(default)]
        group_id: Patch<i32>,
    }

    #[test]
    fn test_missing_null_and_value_are_distinct() {
        let missing: Payload = serde_json::from_str("{}").unwrap();
        assert!(missing.phone.is_unset());

        let null: Payload = serde_json::from_str(r#"{"phone": null}"#).unwrap();
        assert!(null.phone.is_null());

        let value: Payload = serde_json::from_str(r#"{"phone": "555", "group_id": 3}"#).unwrap();
        assert_eq!(value.phone, Patch::Value("555".to_string()));
        assert_eq!(value.group_id, Patch::Value(3));
    }

    #[test]
    fn test_blank_values_are_skipped() {
        assert_eq!(Patch::Value(String::new()).into_change(), None);
        assert_eq!(Patch::Value(0).into_change(), None);
        assert_eq!(Patch::<String>::Unset.into_change(), None);
        assert_eq!(Patch::Value(0).as_change(), None);
        assert_eq!(Patch::Value(4).as_change(), Some(&4));
    }

    #[test]
    fn test_null_clears() {
        assert_eq!(Patch::<String>::Null.into_change(), Some(None));
        assert_eq!(Patch::<String>::Null.into_required_change(), None);
        assert_eq!(
            Patch::Value("Ann".to_string()).into_required_change(),
            Some("Ann".to_string())
        );
    }
}
