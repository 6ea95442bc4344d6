//! Profile schema for A7P ballistic profile files.
//!
//! This crate is the schema contract shared by every other A7P crate. It
//! defines the `profedit` messages exactly as they appear on the wire and
//! their JSON mapping used for human editing.
//!
//! # Key Types
//!
//! - [`Payload`]: top-level document stored in every `.a7p` file
//! - [`Profile`]: rifle, cartridge, bullet and zeroing parameters
//! - [`SwPos`]: one reticle/zoom/distance switch position
//! - [`CoefRow`]: one row of the ballistic coefficient table
//! - [`GType`], [`TwistDir`], [`DType`]: schema enumerations
//! - [`SchemaMessage`]: the narrow interface codecs are written against
//!
//! Field numbers are part of the on-disk format and must never change.

pub mod enums;
pub mod json;
pub mod profile;
pub mod schema;

pub use enums::{DType, GType, TwistDir};
pub use profile::{CoefRow, Payload, Profile, SwPos};
pub use schema::SchemaMessage;

/// File extension of profile files, including the leading dot.
pub const PROFILE_EXTENSION: &str = ".a7p";
