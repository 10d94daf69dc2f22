use serde_json::Value;

use crate::decoder::errors::DecodeError;

/// Changed-bit mask of a delta row.
///
/// Bit `i` of the wire integer governs slot `i` (the textual big-endian
/// rendering the service documents is reversed, which lands on plain
/// LSB-first bit order). A set bit means "reuse the previous row's value
/// for this slot"; a clear bit means "a changed value follows".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeltaMask(u64);

impl DeltaMask {
    pub fn from_wire(mask: u64, width: usize) -> Result<Self, DecodeError> {
        if width < u64::BITS as usize && mask >> width != 0 {
            return Err(DecodeError::MaskTooWide { mask, width });
        }
        Ok(Self(mask))
    }

    /// Whether the previous row's value is reused for this slot.
    pub fn reuses(&self, slot: usize) -> bool {
        self.0 >> slot & 1 == 1
    }

    /// Number of slots marked changed, i.e. values the row must supply.
    pub fn changed_count(&self, width: usize) -> usize {
        (0..width).filter(|slot| !self.reuses(*slot)).count()
    }
}

/// One undecoded row of a page, in original slot order.
#[derive(Debug, Clone, PartialEq)]
pub enum RawRow {
    /// Self-contained row carrying one cell per active slot.
    Full { cells: Vec<Value> },
    /// Row carrying only the cells its bitmask marks as changed.
    Delta { mask: DeltaMask, changed: Vec<Value> },
}

impl RawRow {
    /// Parses one `DM0` entry against a layout of the given width.
    ///
    /// A row with an `R` key is a delta row; its changed-cell count must
    /// match the mask's clear bits exactly. A row without `R` is a full row
    /// and must span every slot.
    pub fn from_wire(row: &Value, width: usize) -> Result<Self, DecodeError> {
        match row.get("R") {
            None | Some(Value::Null) => Self::full(required_cells(row)?, width),
            Some(mask) => {
                let mask = mask.as_u64().ok_or(DecodeError::MalformedMask)?;
                let mask = DeltaMask::from_wire(mask, width)?;
                // A row that reuses every slot may omit `C` entirely.
                let cells = wire_cells(row)?.unwrap_or_default();
                let expected = mask.changed_count(width);
                if cells.len() != expected {
                    return Err(DecodeError::DeltaWidthMismatch {
                        expected,
                        supplied: cells.len(),
                    });
                }
                Ok(RawRow::Delta {
                    mask,
                    changed: cells,
                })
            }
        }
    }

    /// Parses the first `DM0` entry of a page.
    ///
    /// The service nests the seed row inside a wrapper object with extra
    /// keys; only its `C` cell list is the row, and it is always full, so
    /// any stray bitmask on the wrapper is discarded.
    pub fn seed_from_wire(row: &Value, width: usize) -> Result<Self, DecodeError> {
        Self::full(required_cells(row)?, width)
    }

    fn full(cells: Vec<Value>, width: usize) -> Result<Self, DecodeError> {
        if cells.len() != width {
            return Err(DecodeError::RowWidth {
                expected: width,
                supplied: cells.len(),
            });
        }
        Ok(RawRow::Full { cells })
    }
}

fn wire_cells(row: &Value) -> Result<Option<Vec<Value>>, DecodeError> {
    match row.get("C") {
        Some(Value::Array(cells)) => Ok(Some(cells.clone())),
        Some(_) => Err(DecodeError::MalformedCells),
        None => Ok(None),
    }
}

fn required_cells(row: &Value) -> Result<Vec<Value>, DecodeError> {
    wire_cells(row)?.ok_or_else(|| DecodeError::MissingField("C".to_string()))
}
