use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::primitives::Uint128;

impl Serialize for Uint128 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Uint128 {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Uint128::from_hex(&s).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use serde::{Deserialize, Serialize};
    use test_strategy::proptest;

    use crate::primitives::{Uint128, mask};

    #[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
    struct Example {
        prefix: Uint128,
    }

    #[test]
    fn serializes_as_big_endian_hex() {
        let value = serde_json::to_value(mask(16)).unwrap();

        assert_eq!(value, serde_json::json!("0000000000000000000000000000ffff"));
    }

    #[test]
    fn rejects_short_hex() {
        let err = serde_json::from_str::<Example>(r#"{"prefix":"ffff"}"#).unwrap_err();

        assert!(err.to_string().contains("invalid buffer length"));
    }

    #[proptest]
    fn values_survive_a_json_round_trip(high: u64, low: u64) {
        let example = Example {
            prefix: Uint128::new(high, low),
        };

        let json = serde_json::to_string(&example).unwrap();
        let again: Example = serde_json::from_str(&json).unwrap();

        assert_eq!(example, again);
    }
}
