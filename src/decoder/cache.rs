use crate::decoder::cell::Cell;

/// Rolling "last seen raw value" per slot, scoped to one page.
///
/// Seeded from the page's first row and mutated in place as delta rows are
/// expanded. Holds raw (possibly still dictionary-indexed) cells; resolution
/// happens when a row is emitted, so a reused index is looked up again in
/// the emitting row's dictionaries.
#[derive(Debug)]
pub struct DecoderCache {
    slots: Vec<Cell>,
}

impl DecoderCache {
    pub fn seed(slots: Vec<Cell>) -> Self {
        Self { slots }
    }

    pub fn width(&self) -> usize {
        self.slots.len()
    }

    pub fn get(&self, slot: usize) -> &Cell {
        &self.slots[slot]
    }

    /// Records a changed value for a slot.
    pub fn store(&mut self, slot: usize, cell: Cell) {
        self.slots[slot] = cell;
    }
}
