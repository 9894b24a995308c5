//! `serde` support for [`Expected`].
//!
//! A result is encoded through its [`Payload`], an externally tagged enum:
//! `{"Value": v}`, `{"Error": e}` or `"Empty"`. Decoding goes through the
//! regular constructors, so the hook sees every value and error it admits.

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::hook::Hook;
use crate::types::expected::Expected;
use crate::types::payload::Payload;

impl<T, E, H> Serialize for Expected<T, E, H>
where
    T: Serialize,
    E: Serialize,
    H: Hook<T, E>,
{
    /// Serializing reads the state, so it marks the result as checked.
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.as_payload().serialize(serializer)
    }
}

impl<'de, T, E, H> Deserialize<'de> for Expected<T, E, H>
where
    T: Deserialize<'de>,
    E: Deserialize<'de>,
    H: Hook<T, E>,
{
    /// Rejects `"Empty"` unless the hook enables the default constructor.
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        match Payload::<T, E>::deserialize(deserializer)? {
            Payload::Value(value) => Ok(Self::from_value(value)),
            Payload::Error(error) => Ok(Self::from_error(error)),
            Payload::Empty if H::ENABLE_DEFAULT_CONSTRUCTOR => Ok(Self::from_payload(Payload::Empty)),
            Payload::Empty => Err(D::Error::custom("empty result rejected by this hook")),
        }
    }
}
