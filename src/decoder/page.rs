use serde_json::Value;
use tracing::debug;

use crate::decoder::dictionary::{ColumnDictionary, ColumnLayout};
use crate::decoder::errors::DecodeError;
use crate::decoder::raw_row::RawRow;

/// Opaque pagination cursor echoed back to the service verbatim.
#[derive(Debug, Clone, PartialEq)]
pub struct RestartToken(Value);

impl RestartToken {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_value(&self) -> &Value {
        &self.0
    }
}

/// One parsed response page: value dictionaries, raw rows, and the cursor
/// for the next page.
///
/// Extracted from the nested wire body at
/// `results[0].result.data.dsr.DS[0]`, where `ValueDicts` carries the
/// dictionaries, `PH[0].DM0` the rows, and `RT` the optional cursor.
#[derive(Debug)]
pub struct PageBody {
    dictionaries: Vec<ColumnDictionary>,
    rows: Vec<RawRow>,
    restart_token: Option<RestartToken>,
}

impl PageBody {
    /// Parses a full response body against the layout's contract.
    ///
    /// Any missing dictionary or row list is a decode failure; the body is
    /// never partially accepted.
    pub fn parse(body: &Value, layout: &ColumnLayout) -> Result<Self, DecodeError> {
        let data_set = data_set(body)?;

        let value_dicts = data_set
            .get("ValueDicts")
            .ok_or_else(|| DecodeError::MissingField("ValueDicts".to_string()))?;
        let mut dictionaries = Vec::with_capacity(layout.dictionary_count());
        for index in 0..layout.dictionary_count() {
            let key = format!("D{index}");
            let values = value_dicts
                .get(&key)
                .and_then(Value::as_array)
                .ok_or(DecodeError::MissingField(key))?;
            dictionaries.push(ColumnDictionary::new(values.clone()));
        }

        let raw_rows = data_set
            .get("PH")
            .and_then(|ph| ph.get(0))
            .and_then(|dm| dm.get("DM0"))
            .and_then(Value::as_array)
            .ok_or_else(|| DecodeError::MissingField("PH[0].DM0".to_string()))?;
        let mut rows = Vec::with_capacity(raw_rows.len());
        for (index, raw) in raw_rows.iter().enumerate() {
            let row = if index == 0 {
                RawRow::seed_from_wire(raw, layout.width())?
            } else {
                RawRow::from_wire(raw, layout.width())?
            };
            rows.push(row);
        }

        let restart_token = match data_set.get("RT") {
            None | Some(Value::Null) => None,
            Some(token) => Some(RestartToken::new(token.clone())),
        };

        debug!(
            target: "moj::decode",
            rows = rows.len(),
            dictionaries = dictionaries.len(),
            has_restart_token = restart_token.is_some(),
            "Parsed page body"
        );

        Ok(Self {
            dictionaries,
            rows,
            restart_token,
        })
    }

    pub fn dictionaries(&self) -> &[ColumnDictionary] {
        &self.dictionaries
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    pub fn restart_token(&self) -> Option<&RestartToken> {
        self.restart_token.as_ref()
    }

    pub fn into_restart_token(self) -> Option<RestartToken> {
        self.restart_token
    }
}

fn data_set(body: &Value) -> Result<&Value, DecodeError> {
    let mut current = body;
    for key in ["results", "result", "data", "dsr", "DS"] {
        current = current
            .get(key)
            .ok_or_else(|| DecodeError::MissingField(key.to_string()))?;
        // `results` and `DS` are single-element arrays on this contract.
        if let Value::Array(_) = current {
            current = current
                .get(0)
                .ok_or_else(|| DecodeError::MissingField(format!("{key}[0]")))?;
        }
    }
    Ok(current)
}
