use serde_json::{Value, json};

/// Builds wire-shaped response bodies for decoder and controller tests.
///
/// Defaults to the six empty dictionaries of the production layout and no
/// rows; `build` nests everything under the real
/// `results[0].result.data.dsr.DS[0]` path.
pub struct PageBodyFactory {
    dictionaries: Vec<Value>,
    rows: Vec<Value>,
    restart_token: Option<Value>,
}

impl PageBodyFactory {
    pub fn new() -> Self {
        Self {
            dictionaries: vec![json!([]); 6],
            rows: Vec::new(),
            restart_token: None,
        }
    }

    pub fn with_dict_count(mut self, count: usize) -> Self {
        self.dictionaries.resize(count, json!([]));
        self
    }

    pub fn with_dict(mut self, index: usize, values: Vec<Value>) -> Self {
        if index >= self.dictionaries.len() {
            self.dictionaries.resize(index + 1, json!([]));
        }
        self.dictionaries[index] = Value::Array(values);
        self
    }

    pub fn with_full_row(mut self, cells: Vec<Value>) -> Self {
        self.rows.push(json!({ "C": cells }));
        self
    }

    pub fn with_delta_row(mut self, mask: u64, changed: Vec<Value>) -> Self {
        self.rows.push(json!({ "R": mask, "C": changed }));
        self
    }

    /// Pushes an arbitrary `DM0` entry, for wrapper-key and malformed-row
    /// cases the typed helpers cannot express.
    pub fn with_raw_row(mut self, row: Value) -> Self {
        self.rows.push(row);
        self
    }

    pub fn with_restart_token(mut self, token: Value) -> Self {
        self.restart_token = Some(token);
        self
    }

    pub fn build(self) -> Value {
        let mut value_dicts = serde_json::Map::new();
        for (index, dict) in self.dictionaries.into_iter().enumerate() {
            value_dicts.insert(format!("D{index}"), dict);
        }

        let mut data_set = json!({
            "PH": [{ "DM0": self.rows }],
            "ValueDicts": value_dicts,
        });
        if let Some(token) = self.restart_token {
            data_set["RT"] = token;
        }

        json!({
            "results": [{
                "result": {
                    "data": {
                        "dsr": { "DS": [data_set] }
                    }
                }
            }]
        })
    }
}
