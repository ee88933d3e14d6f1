//! quickkit money helpers
//!
//! Fen/yuan conversion, 万 abbreviation for compact display, Chinese numeral
//! transcription of amounts, and decimal-safe summation over loosely typed
//! inputs.

mod chinese;
mod convert;
mod error;
mod sum;

pub use chinese::{number_to_chinese, DigitCase, MAX_CHINESE_AMOUNT};
pub use convert::{auto_to_wan, to_fen, to_wan, to_yuan, to_yuan_string, MoneyUnit};
pub use error::MoneyError;
pub use sum::sum;
