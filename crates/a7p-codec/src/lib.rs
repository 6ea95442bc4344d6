//! Codecs for A7P profiles.
//!
//! A profile has two representations:
//!
//! - **binary** ([`BinaryCodec`]): protobuf wire format, as stored on disk
//!   after the checksum prefix
//! - **text** ([`TextCodec`]): JSON following the proto3 mapping, used for
//!   viewing and editing
//!
//! Both are driven by the same [`SchemaMessage`](a7p_types::SchemaMessage)
//! definitions, so for any document `p` read from text,
//! `from_text(to_text(p)) == p` and `decode(encode(p)) == p`.

pub mod binary;
pub mod error;
pub mod text;

pub use binary::BinaryCodec;
pub use error::{CodecError, CodecResult};
pub use text::TextCodec;

#[cfg(test)]
mod tests {
    use super::*;
    use a7p_types::{CoefRow, Payload, Profile, SwPos};
    use proptest::prelude::*;

    prop_compose! {
        fn arb_sw_pos()(
            c_idx in any::<i32>(),
            reticle_idx in any::<i32>(),
            zoom in any::<i32>(),
            distance in any::<i32>(),
            distance_from in 0..2i32,
        ) -> SwPos {
            SwPos { c_idx, reticle_idx, zoom, distance, distance_from }
        }
    }

    prop_compose! {
        fn arb_profile()(
            names in proptest::collection::vec(".{0,12}", 8),
            ints in proptest::collection::vec(any::<i32>(), 16),
            twist_dir in 0..2i32,
            bc_type in any::<i32>(),
            switches in proptest::collection::vec(arb_sw_pos(), 0..4),
            distances in proptest::collection::vec(any::<i32>(), 0..8),
            coef_rows in proptest::collection::vec((any::<i32>(), any::<i32>()), 0..4),
        ) -> Profile {
            Profile {
                profile_name: names[0].clone(),
                cartridge_name: names[1].clone(),
                bullet_name: names[2].clone(),
                short_name_top: names[3].clone(),
                short_name_bot: names[4].clone(),
                user_note: names[5].clone(),
                zero_x: ints[0],
                zero_y: ints[1],
                sc_height: ints[2],
                r_twist: ints[3],
                c_muzzle_velocity: ints[4],
                c_zero_temperature: ints[5],
                c_t_coeff: ints[6],
                c_zero_distance_idx: ints[7],
                c_zero_air_temperature: ints[8],
                c_zero_air_pressure: ints[9],
                c_zero_air_humidity: ints[10],
                c_zero_w_pitch: ints[11],
                c_zero_p_temperature: ints[12],
                b_diameter: ints[13],
                b_weight: ints[14],
                b_length: ints[15],
                twist_dir,
                bc_type,
                switches,
                distances,
                coef_rows: coef_rows
                    .into_iter()
                    .map(|(bc_cd, mv)| CoefRow { bc_cd, mv })
                    .collect(),
                caliber: names[6].clone(),
                device_uuid: names[7].clone(),
            }
        }
    }

    proptest! {
        #[test]
        fn binary_roundtrip(profile in arb_profile()) {
            let payload = Payload::new(profile);
            let bytes = BinaryCodec::encode(&payload);
            prop_assert_eq!(BinaryCodec::decode::<Payload>(&bytes).unwrap(), payload);
        }

        #[test]
        fn text_roundtrip(profile in arb_profile()) {
            let payload = Payload::new(profile);
            let text = TextCodec::to_text(&payload).unwrap();
            prop_assert_eq!(TextCodec::from_text::<Payload>(&text).unwrap(), payload);
        }

        #[test]
        fn text_then_binary_is_stable(profile in arb_profile()) {
            let payload = Payload::new(profile);
            let text = TextCodec::to_text(&payload).unwrap();
            let bytes = BinaryCodec::encode(&TextCodec::from_text::<Payload>(&text).unwrap());
            let decoded = BinaryCodec::decode::<Payload>(&bytes).unwrap();
            let back = TextCodec::to_text(&decoded).unwrap();
            prop_assert_eq!(back, text);
        }
    }
}
