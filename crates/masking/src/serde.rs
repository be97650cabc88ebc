//!
//! Serde-related.
//!

use serde::{de, Deserialize, Serialize, Serializer};

use crate::{PeekInterface, Secret, Strategy};

/// Marker trait for secret types which can be [`Serialize`]-d.
///
/// `Secret<T>` only serializes when `T` carries this marker, so a secret cannot end up in a
/// request payload unless its type opts in. Deserialization has no such restriction.
pub trait SerializableSecret: Serialize {}

impl SerializableSecret for String {}

impl<'de, T, I> Deserialize<'de> for Secret<T, I>
where
    T: de::DeserializeOwned,
    I: Strategy<T>,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: de::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}

impl<T, I> Serialize for Secret<T, I>
where
    T: SerializableSecret,
    I: Strategy<T>,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.peek().serialize(serializer)
    }
}
