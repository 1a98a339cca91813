//! `Maybe<T>` goes over the wire exactly like `Option<T>`.

use ::serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::Maybe;

impl<T: Serialize> Serialize for Maybe<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Maybe::Some(value) => serializer.serialize_some(value),
            Maybe::None => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Maybe<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Maybe::from)
    }
}
