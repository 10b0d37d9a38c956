use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct JournalEntryRequest {
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ToggleRequest {
    pub name: String,
    pub checked: bool,
}

/// `value` is wide on purpose: any integer reaches the handler's range
/// check and comes back as a 400 rather than a body-rejection 422.
#[derive(Debug, Serialize, Deserialize)]
pub struct RatingRequest {
    pub name: String,
    pub value: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AddNameRequest {
    pub name: String,
}
