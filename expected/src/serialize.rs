//! `serde` support for [`ExpectedValue`].
//!
//! A container serializes as an externally tagged map: `{"value": ...}` or
//! `{"error": "<message>"}`. Only the message of a held error is written, so
//! an error read back is a [`DeserializedError`] rather than the original
//! type.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::{DeserializedError, ErrorCapture, ExpectedValue};

#[derive(Serialize)]
#[serde(rename_all = "snake_case")]
enum Borrowed<'a, T> {
    Value(&'a T),
    Error(String),
}

#[derive(Deserialize)]
#[serde(rename_all = "snake_case")]
enum Owned<T> {
    Value(T),
    Error(String),
}

impl<T: Serialize> Serialize for ExpectedValue<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let repr = match self.as_result() {
            Ok(value) => Borrowed::Value(value),
            Err(error) => Borrowed::Error(error.to_string()),
        };
        repr.serialize(serializer)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for ExpectedValue<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Owned::deserialize(deserializer)? {
            Owned::Value(value) => Self::new(value),
            Owned::Error(message) => {
                Self::from_error(ErrorCapture::new(DeserializedError { message }))
            }
        })
    }
}
