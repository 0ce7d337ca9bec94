use serde::Serialize;

// View of the error modal consumed by the UI layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModalState {
    pub is_open: bool,
    pub error_message: String,
}
