use crate::models::lighthouse::audit::Audit;
use crate::models::lighthouse::category::Categories;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// Root pub structure for the Lighthouse report
#[derive(Debug, Deserialize, Serialize)]
#[allow(non_snake_case)]
pub struct Root {
    pub requestedUrl: Option<String>,
    pub fetchTime: Option<String>,
    pub categories: Categories,
    pub audits: HashMap<String, Audit>, // Store audit results dynamically
}
