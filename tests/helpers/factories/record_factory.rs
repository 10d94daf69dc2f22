use serde_json::json;

use crate::decoder::Record;

/// Builds output-order records for window and sink tests.
pub struct RecordFactory {
    record: Record,
}

impl RecordFactory {
    pub fn new() -> Self {
        Self {
            record: Record {
                space: json!(625.5),
                price: json!(1_500_000),
                number_of_properties: json!(1),
                classification: json!("قطعة أرض"),
                islamic_date: json!("1445/11/06"),
                date: "2024/05/14".to_string(),
                id: json!(900123),
                city_neighborhood: json!("حي العليا"),
                city: json!("الرياض"),
                region: json!("منطقة الرياض"),
            },
        }
    }

    pub fn with_date(mut self, date: &str) -> Self {
        self.record.date = date.to_string();
        self
    }

    pub fn with_id(mut self, id: u64) -> Self {
        self.record.id = json!(id);
        self
    }

    pub fn with_region(mut self, region: &str) -> Self {
        self.record.region = json!(region);
        self
    }

    pub fn build(self) -> Record {
        self.record
    }
}
