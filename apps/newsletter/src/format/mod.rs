// Formatting engine: total, stateless normalisation of raw record fields.
// None of these functions fail; unrecognised input passes through unchanged.

pub mod date;
pub mod text;
pub mod time;

pub use date::format_date;
pub use text::format_text;
pub use time::format_time;
