//! Deserialization helpers for the JSON mapping of the schema messages.
//!
//! Serde's derived struct deserializers accept a positional array as well as
//! an object. The JSON mapping names every field, so every message position
//! goes through [`message`], which only accepts objects. A `null` field value
//! means the field's default.

use std::fmt;
use std::marker::PhantomData;

use serde::de::value::MapAccessDeserializer;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;

struct MessageVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for MessageVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a JSON object")
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<T, A::Error> {
        T::deserialize(MapAccessDeserializer::new(map))
    }
}

/// A message that was written as a JSON object.
struct Object<T>(T);

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Object<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        message(deserializer).map(Object)
    }
}

/// Deserialize a message, rejecting anything but an object.
pub fn message<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    deserializer.deserialize_map(MessageVisitor(PhantomData))
}

/// Singular message field. `null` is the absent message.
pub fn optional_message<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Object<T>>::deserialize(deserializer)?.map(|o| o.0))
}

/// Repeated message field. `null` is the empty list.
pub fn repeated_messages<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    let items = Option::<Vec<Object<T>>>::deserialize(deserializer)?;
    Ok(items.unwrap_or_default().into_iter().map(|o| o.0).collect())
}

/// Scalar, string or repeated scalar field. `null` is the default value.
pub fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Payload, Profile, SwPos};

    fn payload(text: &str) -> Result<Payload, serde_json::Error> {
        message(&mut serde_json::Deserializer::from_str(text))
    }

    #[test]
    fn object_accepted() {
        let p = payload(r#"{"profile": {"zeroX": 5}}"#).unwrap();
        assert_eq!(p.profile.unwrap().zero_x, 5);
    }

    #[test]
    fn array_document_rejected() {
        let err = payload(r#"[{"zeroX": 5}]"#).unwrap_err();
        assert!(err.is_data());
        assert!(err.to_string().contains("expected a JSON object"));
    }

    #[test]
    fn positional_nested_messages_rejected() {
        assert!(payload(r#"{"profile": ["a", "b"]}"#).is_err());
        assert!(payload(r#"{"profile": {"switches": [[1, 2, 3, 4, 0]]}}"#).is_err());
        assert!(payload(r#"{"profile": {"coefRows": [[315, 800]]}}"#).is_err());
    }

    #[test]
    fn null_fields_take_defaults() {
        let p = payload(
            r#"{"profile": {"profileName": null, "zeroX": null, "distances": null,
                "switches": null, "twistDir": null, "bcType": null}}"#,
        )
        .unwrap();
        assert_eq!(p.profile.unwrap(), Profile::default());

        let p = payload(r#"{"profile": null}"#).unwrap();
        assert!(p.profile.is_none());

        let sw: SwPos = serde_json::from_str(r#"{"distanceFrom": null, "zoom": null}"#).unwrap();
        assert_eq!(sw, SwPos::default());
    }

    #[test]
    fn null_unknown_field_still_rejected() {
        assert!(payload(r#"{"profile": {"fieldA": null}}"#).is_err());
    }

    #[test]
    fn null_inside_list_rejected() {
        assert!(payload(r#"{"profile": {"distances": [100, null]}}"#).is_err());
        assert!(payload(r#"{"profile": {"switches": [null]}}"#).is_err());
    }
}
