//! Support for serdect on [`BigUnsigned`]

use serdect::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::BigUnsigned;

impl<'de> Deserialize<'de> for BigUnsigned {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let bytes = serdect::slice::deserialize_hex_or_bin_vec(deserializer)?;
        Ok(Self::from_le_slice(&bytes))
    }
}

impl Serialize for BigUnsigned {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serdect::slice::serialize_hex_lower_or_bin(&self.to_le_bytes(), serializer)
    }
}

#[cfg(test)]
mod tests {
    use crate::BigUnsigned;

    #[test]
    fn serde() {
        let config = bincode::config::standard();
        let test = BigUnsigned::from(0x7711223344556600_0011223344556677u128);

        let serialized = bincode::serde::encode_to_vec(&test, config).unwrap();
        let (deserialized, _): (BigUnsigned, usize) =
            bincode::serde::decode_from_slice(&serialized, config).unwrap();

        assert_eq!(test, deserialized);
    }

    #[test]
    fn serde_zero() {
        let config = bincode::config::standard();
        let serialized = bincode::serde::encode_to_vec(BigUnsigned::zero(), config).unwrap();
        let (deserialized, _): (BigUnsigned, usize) =
            bincode::serde::decode_from_slice(&serialized, config).unwrap();

        assert!(deserialized.is_zero());
    }
}
