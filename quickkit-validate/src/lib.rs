//! quickkit validators
//!
//! Deterministic, stateless input checks: mainland-ID checksum validation,
//! mobile-number format, generic emptiness predicates over JSON values, and
//! decimal-precision checks. Every function returns a plain `bool`; nothing
//! here can fail.

mod decimal;
mod empty;
mod id_card;
mod mobile;

pub use decimal::{normal_money_valid, number_to_fixed_valid};
pub use empty::{has_own, is_empty, is_object, is_set, IsEmptyOptions};
pub use id_card::{id_card_valid, region_name};
pub use mobile::mobile_valid;
