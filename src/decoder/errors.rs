use thiserror::Error;

/// Errors raised while parsing or expanding a compacted result page.
///
/// Every variant is a data-contract violation: retrying the same request
/// would reproduce the same malformed body, so none of these are retried.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("page body is missing required field `{0}`")]
    MissingField(String),

    #[error("dictionary D{dictionary} has no entry {index} (referenced from slot {slot})")]
    DictIndexOutOfRange {
        slot: usize,
        dictionary: usize,
        index: u64,
    },

    #[error("slot {slot} is bound to dictionary D{dictionary}, which the page does not carry")]
    MissingDictionary { slot: usize, dictionary: usize },

    #[error("delta bitmask {mask:#b} is wider than the {width}-slot layout")]
    MaskTooWide { mask: u64, width: usize },

    #[error("delta row carries {supplied} changed values but its bitmask marks {expected}")]
    DeltaWidthMismatch { expected: usize, supplied: usize },

    #[error("row carries {supplied} cells but the layout has {expected} slots")]
    RowWidth { expected: usize, supplied: usize },

    #[error("first row of a page must be a full row")]
    DeltaBeforeSeed,

    #[error("row cell list `C` is not an array")]
    MalformedCells,

    #[error("delta bitmask `R` is not an unsigned integer")]
    MalformedMask,

    #[error("resolved date field is not a string: {0}")]
    NonTextDate(serde_json::Value),
}
