use thiserror::Error;

use crate::decoder::Record;

pub mod jsonl;
pub mod memory;

pub use jsonl::JsonlSink;
pub use memory::MemorySink;

#[derive(Debug, Error)]
pub enum SinkError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("record serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Destination for decoded records, fed one at a time in discovery order.
pub trait RecordSink {
    fn accept(&mut self, record: Record) -> Result<(), SinkError>;
}
