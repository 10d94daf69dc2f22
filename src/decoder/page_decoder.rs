use serde_json::Value;
use tracing::debug;

use crate::decoder::cache::DecoderCache;
use crate::decoder::dictionary::{ColumnDictionary, ColumnLayout};
use crate::decoder::errors::DecodeError;
use crate::decoder::raw_row::RawRow;

/// One fully resolved row in original slot order.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRow {
    values: Vec<Value>,
}

impl ResolvedRow {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

/// Expands the raw rows of one page into resolved rows.
///
/// Owns the page-scoped cache: the first row (always full) seeds it, delta
/// rows read and update it slot by slot, and later full rows leave it
/// untouched. Decoding a page is all-or-nothing; the first contract
/// violation aborts the whole page.
pub struct PageDecoder<'a> {
    layout: &'a ColumnLayout,
    dictionaries: &'a [ColumnDictionary],
}

impl<'a> PageDecoder<'a> {
    pub fn new(layout: &'a ColumnLayout, dictionaries: &'a [ColumnDictionary]) -> Self {
        Self {
            layout,
            dictionaries,
        }
    }

    /// Decodes every raw row of a page, in order.
    pub fn decode(&self, rows: &[RawRow]) -> Result<Vec<ResolvedRow>, DecodeError> {
        let Some((seed, rest)) = rows.split_first() else {
            return Ok(Vec::new());
        };

        let RawRow::Full { cells } = seed else {
            return Err(DecodeError::DeltaBeforeSeed);
        };
        let mut cache = DecoderCache::seed(
            cells
                .iter()
                .enumerate()
                .map(|(slot, value)| self.layout.classify(slot, value.clone()))
                .collect(),
        );

        let mut resolved = Vec::with_capacity(rows.len());
        resolved.push(self.resolve_full(cells)?);
        for row in rest {
            let values = match row {
                RawRow::Full { cells } => self.resolve_full(cells)?,
                RawRow::Delta { mask, changed } => {
                    let mut changed = changed.iter().cloned();
                    let mut values = Vec::with_capacity(self.layout.width());
                    for slot in 0..self.layout.width() {
                        if !mask.reuses(slot) {
                            let cell = self.layout.classify(
                                slot,
                                changed
                                    .next()
                                    .expect("changed-cell count is validated at parse time"),
                            );
                            cache.store(slot, cell);
                        }
                        values.push(self.layout.resolve(slot, cache.get(slot), self.dictionaries)?);
                    }
                    ResolvedRow::new(values)
                }
            };
            resolved.push(values);
        }

        debug!(
            target: "moj::decode",
            rows = resolved.len(),
            "Decoded page rows"
        );
        Ok(resolved)
    }

    /// Resolves a self-contained row without touching the cache.
    fn resolve_full(&self, cells: &[Value]) -> Result<ResolvedRow, DecodeError> {
        let mut values = Vec::with_capacity(cells.len());
        for (slot, value) in cells.iter().enumerate() {
            let cell = self.layout.classify(slot, value.clone());
            values.push(self.layout.resolve(slot, &cell, self.dictionaries)?);
        }
        Ok(ResolvedRow::new(values))
    }
}
