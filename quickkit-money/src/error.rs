use thiserror::Error;

/// Errors from money transcription
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MoneyError {
    #[error("amount {amount} is outside the transcribable range 0..=999999999999.99")]
    AmountOutOfRange { amount: f64 },
}
