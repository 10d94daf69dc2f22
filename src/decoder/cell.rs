use serde_json::Value;

/// One raw cell of a compacted row, classified against the column layout.
///
/// The wire format overloads plain integers as dictionary references, but
/// only in slots that carry a dictionary; everywhere else an integer is an
/// ordinary literal (a price, a property count). Classification therefore
/// happens per slot, once, and the tagged value is what the decoder caches.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    /// Value used as-is in the resolved row.
    Literal(Value),
    /// Index into the dictionary bound to the cell's slot.
    DictIndex(u64),
}

impl Cell {
    /// Classifies a raw wire value for a slot.
    ///
    /// `dict_bound` is whether the slot carries a dictionary; integers in
    /// unbound slots stay literal.
    pub fn classify(value: Value, dict_bound: bool) -> Self {
        if dict_bound {
            if let Some(index) = value.as_u64() {
                return Cell::DictIndex(index);
            }
        }
        Cell::Literal(value)
    }
}
