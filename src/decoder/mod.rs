pub mod cache;
pub mod cell;
pub mod dictionary;
pub mod errors;
pub mod page;
pub mod page_decoder;
pub mod raw_row;
pub mod record;

pub use cache::DecoderCache;
pub use cell::Cell;
pub use dictionary::{ColumnDictionary, ColumnLayout, TRANSACTION_SALE_LAYOUT};
pub use errors::DecodeError;
pub use page::{PageBody, RestartToken};
pub use page_decoder::{PageDecoder, ResolvedRow};
pub use raw_row::{DeltaMask, RawRow};
pub use record::Record;

#[cfg(test)]
mod record_test;
