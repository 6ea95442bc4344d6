use a7p_types::{json, SchemaMessage};
use serde_json::error::Category;
use serde_json::Value;

use crate::error::{CodecError, CodecResult};

/// JSON codec for schema messages.
///
/// Output always carries every field, including those at their default
/// value, so a reader sees the full editable surface and diffs stay stable.
/// Input may omit fields (they take schema defaults) but may not name
/// fields the schema does not know.
pub struct TextCodec;

impl TextCodec {
    /// Compact JSON.
    pub fn to_text<M: SchemaMessage>(message: &M) -> CodecResult<String> {
        serde_json::to_string(message).map_err(|e| CodecError::Serialization(e.to_string()))
    }

    /// Indented JSON, for terminals and files meant to be hand-edited.
    pub fn to_text_pretty<M: SchemaMessage>(message: &M) -> CodecResult<String> {
        serde_json::to_string_pretty(message)
            .map_err(|e| CodecError::Serialization(e.to_string()))
    }

    /// Parse a message. The document and every nested message must be a
    /// JSON object; `null` on a field means its default.
    pub fn from_text<M: SchemaMessage>(text: &str) -> CodecResult<M> {
        let mut de = serde_json::Deserializer::from_str(text);
        let message = json::message::<_, M>(&mut de).map_err(classify::<M>)?;
        de.end().map_err(classify::<M>)?;
        Ok(message)
    }

    /// Like [`from_text`](Self::from_text) for an already parsed tree.
    pub fn from_value<M: SchemaMessage>(value: Value) -> CodecResult<M> {
        json::message::<_, M>(value).map_err(classify::<M>)
    }
}

fn classify<M: SchemaMessage>(err: serde_json::Error) -> CodecError {
    tracing::debug!(message = M::NAME, error = %err, "text decode failed");
    match err.classify() {
        Category::Data => CodecError::SchemaViolation {
            message: M::NAME,
            reason: err.to_string(),
        },
        Category::Syntax | Category::Eof | Category::Io => CodecError::MalformedText {
            message: M::NAME,
            reason: err.to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use a7p_types::{GType, Payload, Profile, TwistDir};
    use serde_json::json;

    #[test]
    fn emits_defaults() {
        let payload = Payload::new(Profile { zero_x: 5, ..Default::default() });
        let value: Value = serde_json::from_str(&TextCodec::to_text(&payload).unwrap()).unwrap();
        let profile = value["profile"].as_object().unwrap();
        assert_eq!(profile.len(), 29);
        assert_eq!(profile["zeroX"], 5);
        assert_eq!(profile["zeroY"], 0);
        assert_eq!(profile["userNote"], "");
        assert_eq!(profile["coefRows"], json!([]));
    }

    #[test]
    fn absent_fields_take_defaults() {
        let payload: Payload = TextCodec::from_text(r#"{"profile": {"zeroX": 5}}"#).unwrap();
        let profile = payload.profile.unwrap();
        assert_eq!(profile.zero_x, 5);
        assert_eq!(profile.twist_dir(), TwistDir::Right);
        assert_eq!(profile.bc_type(), GType::G1);
        assert!(profile.switches.is_empty());
    }

    #[test]
    fn empty_object_is_empty_payload() {
        let payload: Payload = TextCodec::from_text("{}").unwrap();
        assert_eq!(payload, Payload::default());
    }

    #[test]
    fn syntax_error_is_malformed() {
        let err = TextCodec::from_text::<Payload>(r#"{"profile": "#).unwrap_err();
        assert!(matches!(err, CodecError::MalformedText { .. }));
        let err = TextCodec::from_text::<Payload>("profile: {}").unwrap_err();
        assert!(matches!(err, CodecError::MalformedText { .. }));
        let err = TextCodec::from_text::<Payload>("").unwrap_err();
        assert!(matches!(err, CodecError::MalformedText { .. }));
    }

    #[test]
    fn unknown_field_is_schema_violation() {
        let err = TextCodec::from_text::<Payload>(r#"{"profile": {"fieldA": 5}}"#).unwrap_err();
        assert!(matches!(err, CodecError::SchemaViolation { .. }));
        let err = TextCodec::from_text::<Payload>(r#"{"extra": 1}"#).unwrap_err();
        assert!(matches!(err, CodecError::SchemaViolation { .. }));
    }

    #[test]
    fn wrong_type_is_schema_violation() {
        let err = TextCodec::from_text::<Payload>(r#"{"profile": {"zeroX": "five"}}"#).unwrap_err();
        assert!(matches!(err, CodecError::SchemaViolation { .. }));
        let err =
            TextCodec::from_text::<Payload>(r#"{"profile": {"zeroX": 3000000000}}"#).unwrap_err();
        assert!(matches!(err, CodecError::SchemaViolation { .. }));
        let err = TextCodec::from_text::<Payload>("[1, 2]").unwrap_err();
        assert!(matches!(err, CodecError::SchemaViolation { .. }));
    }

    #[test]
    fn arrays_in_message_positions_are_schema_violations() {
        for text in [
            r#"[{"zeroX": 5}]"#,
            r#"{"profile": ["a", "b"]}"#,
            r#"{"profile": {"switches": [[1, 2, 3, 4, 0]]}}"#,
        ] {
            let err = TextCodec::from_text::<Payload>(text).unwrap_err();
            assert!(matches!(err, CodecError::SchemaViolation { .. }), "{text}");
        }
        let err = TextCodec::from_value::<Payload>(json!({"profile": ["a", "b"]})).unwrap_err();
        assert!(matches!(err, CodecError::SchemaViolation { .. }));
    }

    #[test]
    fn null_fields_take_defaults() {
        let text = r#"{"profile": {"profileName": null, "twistDir": null}}"#;
        let payload: Payload = TextCodec::from_text(text).unwrap();
        assert_eq!(payload.profile.unwrap(), Profile::default());
    }

    #[test]
    fn trailing_text_is_malformed() {
        let err = TextCodec::from_text::<Payload>(r#"{"profile": {}} {}"#).unwrap_err();
        assert!(matches!(err, CodecError::MalformedText { .. }));
    }

    #[test]
    fn from_value_matches_from_text() {
        let value = json!({"profile": {"profileName": "x", "bcType": "G7"}});
        let a: Payload = TextCodec::from_value(value.clone()).unwrap();
        let b: Payload = TextCodec::from_text(&value.to_string()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.profile.unwrap().bc_type(), GType::G7);
    }

    #[test]
    fn pretty_parses_back() {
        let payload = Payload::new(Profile { caliber: ".338LM".into(), ..Default::default() });
        let text = TextCodec::to_text_pretty(&payload).unwrap();
        assert!(text.contains('\n'));
        assert_eq!(TextCodec::from_text::<Payload>(&text).unwrap(), payload);
    }

    #[test]
    fn text_names_are_camel_case() {
        let text = TextCodec::to_text(&Profile::default()).unwrap();
        let value: Value = serde_json::from_str(&text).unwrap();
        assert!(value.get("cMuzzleVelocity").is_some());
        assert!(value.get("c_muzzle_velocity").is_none());
    }
}
