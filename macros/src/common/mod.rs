// Common utilities shared between the derive macros
//
// This module contains:
// - parse_utils: option parsing, key inference and key hashing

mod parse_utils;

pub use parse_utils::*;
