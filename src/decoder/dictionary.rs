use once_cell::sync::Lazy;
use serde_json::Value;

use crate::decoder::cell::Cell;
use crate::decoder::errors::DecodeError;

/// Ordered distinct values for one dictionary-encoded column.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnDictionary {
    values: Vec<Value>,
}

impl ColumnDictionary {
    pub fn new(values: Vec<Value>) -> Self {
        Self { values }
    }

    pub fn get(&self, index: u64) -> Option<&Value> {
        self.values.get(usize::try_from(index).ok()?)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Static binding of column slots to value dictionaries.
///
/// One entry per active slot, in original wire order; `Some(k)` binds the
/// slot to dictionary `Dk`, `None` marks an always-literal slot. The layout
/// is a contract with the remote service, never discovered at runtime.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    bindings: Vec<Option<usize>>,
}

/// Slot bindings of the `TransactionSale` report: slots 0-2 carry the
/// region/city/neighborhood dictionaries, slot 3 the literal reference id,
/// slots 4-6 the Hijri date/Gregorian date/classification dictionaries, and
/// slots 7-9 the literal price/space/count cells.
pub static TRANSACTION_SALE_LAYOUT: Lazy<ColumnLayout> = Lazy::new(|| {
    ColumnLayout::new(vec![
        Some(0),
        Some(1),
        Some(2),
        None,
        Some(3),
        Some(4),
        Some(5),
        None,
        None,
        None,
    ])
});

impl ColumnLayout {
    pub fn new(bindings: Vec<Option<usize>>) -> Self {
        Self { bindings }
    }

    /// Number of active column slots.
    pub fn width(&self) -> usize {
        self.bindings.len()
    }

    /// Dictionary bound to a slot, if any.
    pub fn binding(&self, slot: usize) -> Option<usize> {
        self.bindings.get(slot).copied().flatten()
    }

    /// Number of dictionaries the wire body must carry for this layout.
    pub fn dictionary_count(&self) -> usize {
        self.bindings
            .iter()
            .filter_map(|b| *b)
            .max()
            .map_or(0, |max| max + 1)
    }

    /// Tags a raw wire value for the given slot.
    pub fn classify(&self, slot: usize, value: Value) -> Cell {
        Cell::classify(value, self.binding(slot).is_some())
    }

    /// Resolves a tagged cell into its final value.
    ///
    /// Literal cells pass through; dictionary references are looked up in
    /// the slot's dictionary. An out-of-range index is a contract violation
    /// and fails, never truncates.
    pub fn resolve(
        &self,
        slot: usize,
        cell: &Cell,
        dictionaries: &[ColumnDictionary],
    ) -> Result<Value, DecodeError> {
        match cell {
            Cell::Literal(value) => Ok(value.clone()),
            Cell::DictIndex(index) => {
                let dictionary = self
                    .binding(slot)
                    .expect("DictIndex cells only exist in dictionary-bound slots");
                let dict = dictionaries
                    .get(dictionary)
                    .ok_or(DecodeError::MissingDictionary { slot, dictionary })?;
                dict.get(*index)
                    .cloned()
                    .ok_or(DecodeError::DictIndexOutOfRange {
                        slot,
                        dictionary,
                        index: *index,
                    })
            }
        }
    }
}
