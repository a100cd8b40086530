//! Custom serde helpers for backend wire formats.

/// Deserializes a Unix-millis `u64` into `DateTime<Utc>`.
///
/// The aggregator history API sends `timestamp` as epoch milliseconds,
/// not ISO 8601 strings.
pub mod timestamp_ms {
    use chrono::{DateTime, Utc};
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let millis = u64::deserialize(deserializer)?;
        DateTime::<Utc>::from_timestamp_millis(millis as i64)
            .ok_or_else(|| serde::de::Error::custom(format!("Invalid timestamp: {}", millis)))
    }

    pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_i64(value.timestamp_millis())
    }
}

/// Accepts either a JSON string or a JSON number and yields the string form.
///
/// Raw token amounts arrive as strings from one endpoint and as numbers from
/// another.
pub mod string_or_number {
    use serde::{Deserialize, Deserializer, Serializer};

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Str(String),
        U64(u64),
        F64(f64),
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Raw::deserialize(deserializer)? {
            Raw::Str(s) => s,
            Raw::U64(n) => n.to_string(),
            Raw::F64(n) => n.to_string(),
        })
    }

    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }
}

#[cfg(test)]
mod tests {
    use serde::Deserialize;

    #[derive(Deserialize)]
    struct Amount {
        #[serde(with = "super::string_or_number")]
        value: String,
    }

    #[derive(Deserialize)]
    struct Stamp {
        #[serde(with = "super::timestamp_ms")]
        at: chrono::DateTime<chrono::Utc>,
    }

    #[test]
    fn test_string_or_number() {
        let a: Amount = serde_json::from_str(r#"{"value": "1000"}"#).unwrap();
        assert_eq!(a.value, "1000");
        let b: Amount = serde_json::from_str(r#"{"value": 1000}"#).unwrap();
        assert_eq!(b.value, "1000");
    }

    #[test]
    fn test_timestamp_ms() {
        let s: Stamp = serde_json::from_str(r#"{"at": 1700000000000}"#).unwrap();
        assert_eq!(s.at.timestamp(), 1_700_000_000);
    }
}
