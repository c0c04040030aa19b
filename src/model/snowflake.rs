//! Serde helpers for Discord snowflake IDs.
//!
//! Snowflakes exceed the 53-bit integer range JavaScript can represent, so they
//! travel as strings in JSON. Deserialization also accepts plain numbers.

use serde::{Deserialize, Deserializer, Serializer};

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

impl StringOrNumber {
    fn into_u64<E: serde::de::Error>(self) -> Result<u64, E> {
        match self {
            StringOrNumber::String(value) => value.parse::<u64>().map_err(E::custom),
            StringOrNumber::Number(value) => Ok(value),
        }
    }
}

pub fn serialize<S>(value: &u64, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&value.to_string())
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    StringOrNumber::deserialize(deserializer)?.into_u64()
}

/// Same as the parent module for `Option<u64>` fields.
///
/// Use together with `#[serde(default)]` so absent fields become `None`.
pub mod option {
    use super::StringOrNumber;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_some(&value.to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
    where
        D: Deserializer<'de>,
    {
        Option::<StringOrNumber>::deserialize(deserializer)?
            .map(StringOrNumber::into_u64)
            .transpose()
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};

    #[derive(Serialize, Deserialize, Debug, PartialEq)]
    struct Wrapper {
        #[serde(with = "super")]
        id: u64,
        #[serde(default, with = "super::option")]
        channel_id: Option<u64>,
    }

    #[test]
    fn serializes_ids_as_strings() {
        let json = serde_json::to_value(Wrapper {
            id: 1172093829749116928,
            channel_id: Some(42),
        })
        .unwrap();

        assert_eq!(json["id"], "1172093829749116928");
        assert_eq!(json["channel_id"], "42");
    }

    #[test]
    fn accepts_strings_and_numbers() {
        let from_string: Wrapper =
            serde_json::from_str(r#"{"id":"1172093829749116928","channel_id":"7"}"#).unwrap();
        let from_number: Wrapper = serde_json::from_str(r#"{"id":5}"#).unwrap();

        assert_eq!(from_string.id, 1172093829749116928);
        assert_eq!(from_string.channel_id, Some(7));
        assert_eq!(from_number.id, 5);
        assert_eq!(from_number.channel_id, None);
    }

    #[test]
    fn rejects_non_numeric_strings() {
        let result = serde_json::from_str::<Wrapper>(r#"{"id":"general"}"#);

        assert!(result.is_err());
    }
}
