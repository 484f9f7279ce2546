//! Wire codecs for change-sets.

pub mod json;

pub use json::{
    decode_change, decode_change_set, encode_change, encode_change_set, CodecError,
};
