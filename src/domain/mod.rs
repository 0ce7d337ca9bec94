mod auth;
mod errors;
mod notification;
mod ports;

// Re-export the domain boundary types and ports.
pub use auth::{
    ConfirmRegistration, Credentials, LoginResponse, MessageResponse, ResetPassword,
    ResetPasswordCode,
};
pub use errors::{
    GatewayError, INVALID_PAYLOAD_MESSAGE, NO_RESPONSE_MESSAGE, REQUEST_FAILED_MESSAGE,
    StorageError,
};
pub use notification::ModalState;
pub use ports::{AuthApi, TokenStorage};
