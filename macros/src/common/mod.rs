// Common utilities shared by the user-facing macros
//
// This module contains:
// - parse_utils: `#[dispatch(...)]` target parsing

mod parse_utils;

pub use parse_utils::*;
