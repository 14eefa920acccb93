use serde::{Deserialize, Serialize};

// pub struct for one row of the resource-summary details table
#[derive(Debug, Deserialize, Serialize, Clone, Default)]
#[allow(non_snake_case)]
pub struct ResourceItem {
    pub resourceType: Option<String>,
    pub transferSize: Option<u64>,
}
