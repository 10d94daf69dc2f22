use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::decoder::errors::DecodeError;
use crate::decoder::page_decoder::ResolvedRow;

/// One decoded real-estate transaction, in output field order.
///
/// Field names are the serialized contract of the emitted records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub space: Value,
    pub price: Value,
    pub number_of_properties: Value,
    pub classification: Value,
    pub islamic_date: Value,
    /// Gregorian transaction date, prefix-comparable as `"YYYY/MM"`.
    pub date: String,
    pub id: Value,
    pub city_neighborhood: Value,
    pub city: Value,
    pub region: Value,
}

impl Record {
    /// Maps a resolved row into output order.
    ///
    /// The wire order is inverted relative to the output order, with two
    /// repositionings applied first: the date pair at slots 4/5 swaps, and
    /// the location slots shuffle as new 7 <- 9, 8 <- 7, 9 <- 8. The
    /// permutation is an undocumented fixed contract of the remote encoding
    /// (verified against sample data) and must not be "cleaned up".
    pub fn from_resolved(row: ResolvedRow) -> Result<Self, DecodeError> {
        let mut values = row.into_values();
        let supplied = values.len();
        if supplied != 10 {
            return Err(DecodeError::RowWidth {
                expected: 10,
                supplied,
            });
        }

        values.swap(4, 5);
        values[7..10].rotate_right(1);
        values.reverse();

        let [space, price, number_of_properties, classification, islamic_date, date, id, city_neighborhood, city, region]: [Value; 10] =
            values
                .try_into()
                .expect("length checked above");

        let Value::String(date) = date else {
            return Err(DecodeError::NonTextDate(date));
        };

        Ok(Self {
            space,
            price,
            number_of_properties,
            classification,
            islamic_date,
            date,
            id,
            city_neighborhood,
            city,
            region,
        })
    }
}
