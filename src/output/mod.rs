//! Output formatting module
//!
//! Handles different output formats: table, CSV, JSON

mod common;
pub mod duration;
mod spaces;

pub use self::common::{escape_csv, print_json};
pub use self::spaces::{output_spaces, SpaceRow, SPACE_HEADER};
