//! Word list and win-word validation.
//!
//! - [`Dictionary`]: static table of candidate win words by starting letter
//! - [`WordValidator`]: decides continue / won / misspelled for a name

mod dictionary;
mod validator;

pub use dictionary::{stock_words, Dictionary};
pub use validator::{Verdict, WordValidator};
