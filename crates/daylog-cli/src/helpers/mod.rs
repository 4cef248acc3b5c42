//! Helper functions for the Daylog CLI.

mod parsing;

pub use parsing::{parse_datetime, parse_day_id, parse_rating};
