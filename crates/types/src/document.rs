use serde::{Deserialize, Serialize};

/// Document-level metadata written once into the PDF info dictionary.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocumentInfo {
    pub title: String,
    pub author: String,
    pub subject: String,
    pub keywords: String,
}
