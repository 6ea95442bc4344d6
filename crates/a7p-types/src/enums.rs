use serde::Deserialize;

/// Drag model of the ballistic coefficient table.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum GType {
    G1 = 0,
    G7 = 1,
    Custom = 2,
}

/// Barrel rifling direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum TwistDir {
    Right = 0,
    Left = 1,
}

/// How a switch position interprets its `distance` field.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, prost::Enumeration)]
#[repr(i32)]
pub enum DType {
    Value = 0,
    Index = 1,
}

impl GType {
    /// Symbolic name as written in the schema.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::G1 => "G1",
            Self::G7 => "G7",
            Self::Custom => "CUSTOM",
        }
    }

    pub fn from_str_name(name: &str) -> Option<Self> {
        match name {
            "G1" => Some(Self::G1),
            "G7" => Some(Self::G7),
            "CUSTOM" => Some(Self::Custom),
            _ => None,
        }
    }
}

impl TwistDir {
    /// Symbolic name as written in the schema.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Right => "RIGHT",
            Self::Left => "LEFT",
        }
    }

    pub fn from_str_name(name: &str) -> Option<Self> {
        match name {
            "RIGHT" => Some(Self::Right),
            "LEFT" => Some(Self::Left),
            _ => None,
        }
    }
}

impl DType {
    /// Symbolic name as written in the schema.
    pub fn as_str_name(&self) -> &'static str {
        match self {
            Self::Value => "VALUE",
            Self::Index => "INDEX",
        }
    }

    pub fn from_str_name(name: &str) -> Option<Self> {
        match name {
            "VALUE" => Some(Self::Value),
            "INDEX" => Some(Self::Index),
            _ => None,
        }
    }
}

/// JSON form of an enum field: the symbolic name, or the raw number.
#[derive(Deserialize)]
#[serde(untagged)]
enum EnumRepr {
    Name(String),
    Number(i32),
}

/// Generates a `#[serde(with = ...)]` module for an `i32` field that holds
/// an enumeration value. Known values serialize as their symbolic name,
/// unknown ones as the bare number so nothing is lost. `null` reads as the
/// zero value.
macro_rules! enum_json {
    ($module:ident, $enum:ident) => {
        pub mod $module {
            use serde::{Deserialize, Deserializer, Serializer};

            use super::{$enum, EnumRepr};

            pub fn serialize<S: Serializer>(value: &i32, serializer: S) -> Result<S::Ok, S::Error> {
                match $enum::try_from(*value) {
                    Ok(known) => serializer.serialize_str(known.as_str_name()),
                    Err(_) => serializer.serialize_i32(*value),
                }
            }

            pub fn deserialize<'de, D>(deserializer: D) -> Result<i32, D::Error>
            where
                D: Deserializer<'de>,
            {
                match Option::<EnumRepr>::deserialize(deserializer)? {
                    None => Ok(0),
                    Some(EnumRepr::Name(name)) => $enum::from_str_name(&name)
                        .map(i32::from)
                        .ok_or_else(|| {
                            <D::Error as serde::de::Error>::custom(format!(
                                "unknown {} value: {name:?}",
                                stringify!($enum)
                            ))
                        }),
                    Some(EnumRepr::Number(number)) => Ok(number),
                }
            }
        }
    };
}

enum_json!(gtype_json, GType);
enum_json!(twist_dir_json, TwistDir);
enum_json!(dtype_json, DType);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_roundtrip() {
        for g in [GType::G1, GType::G7, GType::Custom] {
            assert_eq!(GType::from_str_name(g.as_str_name()), Some(g));
        }
        for t in [TwistDir::Right, TwistDir::Left] {
            assert_eq!(TwistDir::from_str_name(t.as_str_name()), Some(t));
        }
        for d in [DType::Value, DType::Index] {
            assert_eq!(DType::from_str_name(d.as_str_name()), Some(d));
        }
    }

    #[test]
    fn unknown_name_rejected() {
        assert_eq!(GType::from_str_name("G2"), None);
        assert_eq!(TwistDir::from_str_name("right"), None);
    }

    #[test]
    fn first_variant_is_default() {
        assert_eq!(GType::default(), GType::G1);
        assert_eq!(TwistDir::default(), TwistDir::Right);
        assert_eq!(DType::default(), DType::Value);
    }

    #[test]
    fn wire_values_fixed() {
        assert_eq!(i32::from(GType::Custom), 2);
        assert_eq!(i32::from(TwistDir::Left), 1);
        assert_eq!(i32::from(DType::Index), 1);
        assert!(GType::try_from(3).is_err());
    }
}
