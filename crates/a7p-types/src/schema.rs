use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::profile::{CoefRow, Payload, Profile, SwPos};

/// A message of the profile schema.
///
/// Codecs are written against this trait instead of the concrete message
/// types, so the schema representation can change without touching them.
/// A message must provide its binary wire mapping (`prost::Message`), its
/// JSON mapping (`Serialize` + `DeserializeOwned`) and schema defaults
/// (`Default`).
pub trait SchemaMessage: prost::Message + Default + Serialize + DeserializeOwned {
    /// Fully qualified schema name, e.g. `profedit.Payload`.
    const NAME: &'static str;
}

impl SchemaMessage for Payload {
    const NAME: &'static str = "profedit.Payload";
}

impl SchemaMessage for Profile {
    const NAME: &'static str = "profedit.Profile";
}

impl SchemaMessage for SwPos {
    const NAME: &'static str = "profedit.SwPos";
}

impl SchemaMessage for CoefRow {
    const NAME: &'static str = "profedit.CoefRow";
}
