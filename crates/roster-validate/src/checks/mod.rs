//! Individual check groups.

pub mod contact;
pub mod dates;
pub mod presence;

pub use contact::{MIN_PHONE_DIGITS, phone_digits};
pub use dates::{MIN_AGE_YEARS, age_in_years};
