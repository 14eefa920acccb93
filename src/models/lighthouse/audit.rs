use serde::{Deserialize, Serialize};
use serde_json::Value;

// pub struct for individual audit results. A null score means the audit was
// not applicable; details keeps its raw shape since it differs per audit.
#[derive(Debug, Deserialize, Serialize, Default)]
#[allow(non_snake_case)]
pub struct Audit {
    pub score: Option<f64>,
    pub displayValue: Option<String>,
    pub details: Option<Value>,
}
