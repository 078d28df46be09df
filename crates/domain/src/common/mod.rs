//! Pure helpers shared by the domain and the wire layer.
//!
//! No side effects and no I/O; the clock is always passed in.

pub mod datetime;
pub mod string;

pub use datetime::{age_in_years, parse_date, years_before};
pub use string::{char_len, none_if_blank};
