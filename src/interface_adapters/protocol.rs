use serde::Deserialize;
use serde_json::Value;

// Error envelope returned by the KS API. `detail` is usually a string, but
// validation failures send a list of field errors instead.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub detail: Option<Value>,
}

impl ErrorBody {
    // Display text for the detail, if it carries anything worth showing.
    pub fn detail_text(self) -> Option<String> {
        match self.detail? {
            Value::Null => None,
            Value::String(detail) if detail.is_empty() => None,
            Value::String(detail) => Some(detail),
            other => Some(other.to_string()),
        }
    }
}
