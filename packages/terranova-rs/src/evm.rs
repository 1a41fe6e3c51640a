use std::{fmt, str::FromStr};

use cosmwasm_std::{StdError, StdResult};
use cw_storage_plus::{Key, KeyDeserialize, Prefixer, PrimaryKey};
use schemars::{gen::SchemaGenerator, schema::Schema, JsonSchema};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Decodes an optionally `0x`-prefixed hex string into exactly `N` bytes.
fn decode_fixed<const N: usize>(kind: &str, value: &str) -> StdResult<[u8; N]> {
    let stripped = value
        .strip_prefix("0x")
        .or_else(|| value.strip_prefix("0X"))
        .unwrap_or(value);

    let bytes = hex::decode(stripped)
        .map_err(|e| StdError::generic_err(format!("Invalid {kind} hex '{value}': {e}")))?;

    bytes.as_slice().try_into().map_err(|_| {
        StdError::generic_err(format!(
            "Invalid {kind} length: expected {N} bytes, got {}",
            bytes.len()
        ))
    })
}

macro_rules! fixed_bytes {
    ($name:ident, $len:expr, $kind:expr) => {
        #[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name([u8; $len]);

        impl $name {
            pub const LEN: usize = $len;

            pub const fn new(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }

            pub fn zero() -> Self {
                Self([0u8; $len])
            }

            pub fn from_slice(bytes: &[u8]) -> StdResult<Self> {
                bytes.try_into().map(Self).map_err(|_| {
                    StdError::generic_err(format!(
                        "Invalid {} length: expected {} bytes, got {}",
                        $kind,
                        $len,
                        bytes.len()
                    ))
                })
            }

            pub fn as_slice(&self) -> &[u8] {
                &self.0
            }

            pub fn to_fixed_bytes(self) -> [u8; $len] {
                self.0
            }
        }

        impl From<[u8; $len]> for $name {
            fn from(bytes: [u8; $len]) -> Self {
                Self(bytes)
            }
        }

        impl FromStr for $name {
            type Err = StdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                decode_fixed::<$len>($kind, s).map(Self)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "0x{}", hex::encode(self.0))
            }
        }

        impl fmt::Debug for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self)
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(&self.to_string())
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let value = String::deserialize(deserializer)?;
                value.parse().map_err(de::Error::custom)
            }
        }

        impl JsonSchema for $name {
            fn schema_name() -> String {
                stringify!($name).to_string()
            }

            fn json_schema(gen: &mut SchemaGenerator) -> Schema {
                String::json_schema(gen)
            }
        }

        impl<'a> PrimaryKey<'a> for $name {
            type Prefix = ();
            type SubPrefix = ();
            type Suffix = Self;
            type SuperSuffix = Self;

            fn key(&self) -> Vec<Key> {
                vec![Key::Ref(&self.0)]
            }
        }

        impl<'a> Prefixer<'a> for $name {
            fn prefix(&self) -> Vec<Key> {
                vec![Key::Ref(&self.0)]
            }
        }

        impl KeyDeserialize for $name {
            type Output = Self;
            const KEY_ELEMS: u16 = 1;

            #[inline(always)]
            fn from_vec(value: Vec<u8>) -> StdResult<Self::Output> {
                Self::from_slice(&value)
            }
        }
    };
}

fixed_bytes!(EvmAddress, 20, "EVM address");
fixed_bytes!(TxHash, 32, "transaction hash");
