use async_trait::async_trait;

use super::auth::{
    ConfirmRegistration, Credentials, MessageResponse, ResetPassword, ResetPasswordCode,
    LoginResponse,
};
use super::errors::{GatewayError, StorageError};

// Port for the durable key/value storage that mirrors the auth token.
pub trait TokenStorage: Send + Sync {
    fn load(&self) -> Result<Option<String>, StorageError>;
    fn save(&self, token: &str) -> Result<(), StorageError>;
    fn remove(&self) -> Result<(), StorageError>;
}

// Session flows depend on this trait, not the concrete HTTP client.
#[async_trait]
pub trait AuthApi: Send + Sync {
    async fn login(&self, req: Credentials) -> Result<LoginResponse, GatewayError>;

    async fn register(&self, req: Credentials) -> Result<MessageResponse, GatewayError>;

    async fn confirm_code(
        &self,
        req: ConfirmRegistration,
    ) -> Result<MessageResponse, GatewayError>;

    async fn confirm_reset_code(
        &self,
        req: ResetPassword,
    ) -> Result<MessageResponse, GatewayError>;

    async fn send_reset_code(
        &self,
        req: ResetPasswordCode,
    ) -> Result<MessageResponse, GatewayError>;

    async fn reset_password(&self, req: ResetPassword) -> Result<MessageResponse, GatewayError>;

    async fn send_confirmation_code_again(
        &self,
        req: Credentials,
    ) -> Result<MessageResponse, GatewayError>;
}
