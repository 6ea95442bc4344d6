use serde::{Deserialize, Serialize};

/// Top-level message of every `.a7p` file.
///
/// JSON names follow the proto3 mapping (lowerCamelCase); the proto field
/// names (snake_case) are accepted on input. Unknown fields are rejected.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Payload {
    #[prost(message, optional, tag = "1")]
    #[serde(deserialize_with = "crate::json::optional_message")]
    pub profile: Option<Profile>,
}

impl Payload {
    pub fn new(profile: Profile) -> Self {
        Self { profile: Some(profile) }
    }
}

/// One row of the drag coefficient table.
///
/// For G1/G7 profiles `bc_cd` is a ballistic coefficient and `mv` the
/// muzzle velocity it applies to; for custom drag tables they hold the drag
/// coefficient and Mach number. Both are fixed-point integers.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CoefRow {
    #[prost(int32, tag = "1")]
    #[serde(alias = "bc_cd", deserialize_with = "crate::json::null_as_default")]
    pub bc_cd: i32,
    #[prost(int32, tag = "2")]
    #[serde(deserialize_with = "crate::json::null_as_default")]
    pub mv: i32,
}

/// A reticle/zoom/distance preset.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct SwPos {
    #[prost(int32, tag = "1")]
    #[serde(alias = "c_idx", deserialize_with = "crate::json::null_as_default")]
    pub c_idx: i32,
    #[prost(int32, tag = "2")]
    #[serde(alias = "reticle_idx", deserialize_with = "crate::json::null_as_default")]
    pub reticle_idx: i32,
    #[prost(int32, tag = "3")]
    #[serde(deserialize_with = "crate::json::null_as_default")]
    pub zoom: i32,
    #[prost(int32, tag = "4")]
    #[serde(deserialize_with = "crate::json::null_as_default")]
    pub distance: i32,
    #[prost(enumeration = "crate::DType", tag = "5")]
    #[serde(with = "crate::enums::dtype_json", alias = "distance_from")]
    pub distance_from: i32,
}

/// Rifle, cartridge and bullet description plus zeroing conditions.
#[derive(Clone, PartialEq, prost::Message, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Profile {
    #[prost(string, tag = "1")]
    #[serde(alias = "profile_name", deserialize_with = "crate::json::null_as_default")]
    pub profile_name: String,
    #[prost(string, tag = "2")]
    #[serde(alias = "cartridge_name", deserialize_with = "crate::json::null_as_default")]
    pub cartridge_name: String,
    #[prost(string, tag = "3")]
    #[serde(alias = "bullet_name", deserialize_with = "crate::json::null_as_default")]
    pub bullet_name: String,
    #[prost(string, tag = "4")]
    #[serde(alias = "short_name_top", deserialize_with = "crate::json::null_as_default")]
    pub short_name_top: String,
    #[prost(string, tag = "5")]
    #[serde(alias = "short_name_bot", deserialize_with = "crate::json::null_as_default")]
    pub short_name_bot: String,
    #[prost(string, tag = "6")]
    #[serde(alias = "user_note", deserialize_with = "crate::json::null_as_default")]
    pub user_note: String,
    #[prost(int32, tag = "7")]
    #[serde(alias = "zero_x", deserialize_with = "crate::json::null_as_default")]
    pub zero_x: i32,
    #[prost(int32, tag = "8")]
    #[serde(alias = "zero_y", deserialize_with = "crate::json::null_as_default")]
    pub zero_y: i32,
    #[prost(int32, tag = "9")]
    #[serde(alias = "sc_height", deserialize_with = "crate::json::null_as_default")]
    pub sc_height: i32,
    #[prost(int32, tag = "10")]
    #[serde(alias = "r_twist", deserialize_with = "crate::json::null_as_default")]
    pub r_twist: i32,
    #[prost(int32, tag = "11")]
    #[serde(alias = "c_muzzle_velocity", deserialize_with = "crate::json::null_as_default")]
    pub c_muzzle_velocity: i32,
    #[prost(int32, tag = "12")]
    #[serde(alias = "c_zero_temperature", deserialize_with = "crate::json::null_as_default")]
    pub c_zero_temperature: i32,
    #[prost(int32, tag = "13")]
    #[serde(alias = "c_t_coeff", deserialize_with = "crate::json::null_as_default")]
    pub c_t_coeff: i32,
    #[prost(int32, tag = "14")]
    #[serde(alias = "c_zero_distance_idx", deserialize_with = "crate::json::null_as_default")]
    pub c_zero_distance_idx: i32,
    #[prost(int32, tag = "15")]
    #[serde(alias = "c_zero_air_temperature", deserialize_with = "crate::json::null_as_default")]
    pub c_zero_air_temperature: i32,
    #[prost(int32, tag = "16")]
    #[serde(alias = "c_zero_air_pressure", deserialize_with = "crate::json::null_as_default")]
    pub c_zero_air_pressure: i32,
    #[prost(int32, tag = "17")]
    #[serde(alias = "c_zero_air_humidity", deserialize_with = "crate::json::null_as_default")]
    pub c_zero_air_humidity: i32,
    #[prost(int32, tag = "18")]
    #[serde(alias = "c_zero_w_pitch", deserialize_with = "crate::json::null_as_default")]
    pub c_zero_w_pitch: i32,
    #[prost(int32, tag = "19")]
    #[serde(alias = "c_zero_p_temperature", deserialize_with = "crate::json::null_as_default")]
    pub c_zero_p_temperature: i32,
    #[prost(int32, tag = "20")]
    #[serde(alias = "b_diameter", deserialize_with = "crate::json::null_as_default")]
    pub b_diameter: i32,
    #[prost(int32, tag = "21")]
    #[serde(alias = "b_weight", deserialize_with = "crate::json::null_as_default")]
    pub b_weight: i32,
    #[prost(int32, tag = "22")]
    #[serde(alias = "b_length", deserialize_with = "crate::json::null_as_default")]
    pub b_length: i32,
    #[prost(enumeration = "crate::TwistDir", tag = "23")]
    #[serde(with = "crate::enums::twist_dir_json", alias = "twist_dir")]
    pub twist_dir: i32,
    #[prost(enumeration = "crate::GType", tag = "24")]
    #[serde(with = "crate::enums::gtype_json", alias = "bc_type")]
    pub bc_type: i32,
    #[prost(message, repeated, tag = "25")]
    #[serde(deserialize_with = "crate::json::repeated_messages")]
    pub switches: Vec<SwPos>,
    #[prost(int32, repeated, tag = "26")]
    #[serde(deserialize_with = "crate::json::null_as_default")]
    pub distances: Vec<i32>,
    #[prost(message, repeated, tag = "27")]
    #[serde(alias = "coef_rows", deserialize_with = "crate::json::repeated_messages")]
    pub coef_rows: Vec<CoefRow>,
    #[prost(string, tag = "28")]
    #[serde(deserialize_with = "crate::json::null_as_default")]
    pub caliber: String,
    #[prost(string, tag = "29")]
    #[serde(alias = "device_uuid", deserialize_with = "crate::json::null_as_default")]
    pub device_uuid: String,
}
