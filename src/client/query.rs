use serde_json::{Value, json};

use crate::decoder::RestartToken;
use crate::shared::config::model::PowerBiConfig;

/// Source alias the semantic query binds the entity to.
const SOURCE: &str = "n";

/// Projected properties of the report, in wire slot order. The slot order
/// here is what the decoder's column layout and output permutation are
/// calibrated against; reordering entries breaks the decode contract.
const REGION: &str = "المنطقة";
const CITY: &str = "المدينة";
const NEIGHBORHOOD: &str = "الحي";
const REFERENCE_ID: &str = "الرقم المرجعي للصفقة";
const HIJRI_DATE: &str = "تاريخ الصفقة هجري";
const GREGORIAN_DATE: &str = "تاريخ الصفقة ميلادي";
const CLASSIFICATION: &str = "تصنيف العقار";
const PRICE: &str = "السعر";
const SPACE: &str = "المساحة";
const PROPERTY_COUNT: &str = "عدد العقارات";

/// The fixed `SemanticQueryDataShapeCommand` payload of the
/// `TransactionSale` report.
///
/// The query shape is an external contract; only the restart token varies
/// between requests for one crawl.
#[derive(Debug, Clone)]
pub struct QueryTemplate {
    model_id: u64,
    entity: String,
    window_count: u32,
}

impl QueryTemplate {
    pub fn new(model_id: u64, entity: impl Into<String>, window_count: u32) -> Self {
        Self {
            model_id,
            entity: entity.into(),
            window_count,
        }
    }

    pub fn from_config(config: &PowerBiConfig) -> Self {
        Self::new(config.model_id, config.entity.clone(), config.window_count)
    }

    /// Renders the request body, injecting the restart token into the
    /// pagination window when continuing a crawl.
    pub fn render(&self, token: Option<&RestartToken>) -> Value {
        let select = json!([
            column(REGION, "NotarizationWork.المنطقة"),
            column(CITY, "NotarizationWork.المدينة"),
            column(NEIGHBORHOOD, "TransactionSale.الحي"),
            column(
                REFERENCE_ID,
                "CountNonNull(TransactionSale.الرقم المرجعي للصفقة)"
            ),
            column(HIJRI_DATE, "TransactionSale.HDate"),
            column(GREGORIAN_DATE, "TransactionSale.تاريخ الصفقة ميلادي"),
            column(CLASSIFICATION, "TransactionSale.تصنيف العقار"),
            column(PRICE, "Sum(TransactionSale.السعر)"),
            column(SPACE, "Sum(TransactionSale.المساحة)"),
            measure(PROPERTY_COUNT, "TransactionSale.عدد العقارات"),
        ]);
        let projections: Vec<u64> = (0..select.as_array().map_or(0, Vec::len) as u64).collect();

        let mut window = json!({ "Count": self.window_count });
        if let Some(token) = token {
            window["RestartTokens"] = token.as_value().clone();
        }

        json!({
            "version": "1.0.0",
            "queries": [{
                "Query": {
                    "Commands": [{
                        "SemanticQueryDataShapeCommand": {
                            "Query": {
                                "Version": 2,
                                "From": [{ "Name": SOURCE, "Entity": self.entity, "Type": 0 }],
                                "Select": select,
                                "OrderBy": [
                                    descending(GREGORIAN_DATE),
                                    descending(PRICE),
                                ],
                            },
                            "Binding": {
                                "Primary": {
                                    "Groupings": [{ "Projections": projections }]
                                },
                                "DataReduction": {
                                    "DataVolume": 15,
                                    "Primary": { "Window": window }
                                },
                                "Version": 2
                            },
                            "ExecutionMetricsKind": 1
                        }
                    }]
                },
                "QueryId": ""
            }],
            "cancelQueries": [],
            "modelId": self.model_id
        })
    }
}

fn source_ref(property: &str) -> Value {
    json!({
        "Expression": { "SourceRef": { "Source": SOURCE } },
        "Property": property
    })
}

fn column(property: &str, name: &str) -> Value {
    json!({ "Column": source_ref(property), "Name": name })
}

fn measure(property: &str, name: &str) -> Value {
    json!({ "Measure": source_ref(property), "Name": name })
}

fn descending(property: &str) -> Value {
    json!({ "Direction": 2, "Expression": { "Column": source_ref(property) } })
}
