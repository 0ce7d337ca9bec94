use crate::domain::{
    AuthApi, ConfirmRegistration, Credentials, GatewayError, LoginResponse, MessageResponse,
    ResetPassword, ResetPasswordCode,
};
use crate::interface_adapters::gateway::HttpGateway;
use async_trait::async_trait;

const AUTH_PREFIX: &str = "auth";

// Thin auth facade over the gateway. Each call is one fixed verb/path pair;
// errors and notifications come from the gateway unchanged.
#[derive(Clone)]
pub struct AuthClient {
    gateway: HttpGateway,
}

impl AuthClient {
    pub fn new(gateway: HttpGateway) -> Self {
        Self { gateway }
    }
}

fn auth_path(action: &str) -> String {
    format!("{AUTH_PREFIX}/{action}")
}

#[async_trait]
impl AuthApi for AuthClient {
    async fn login(&self, req: Credentials) -> Result<LoginResponse, GatewayError> {
        self.gateway.put(&auth_path("login"), &req).await
    }

    async fn register(&self, req: Credentials) -> Result<MessageResponse, GatewayError> {
        self.gateway.post(&auth_path("register"), &req).await
    }

    async fn confirm_code(
        &self,
        req: ConfirmRegistration,
    ) -> Result<MessageResponse, GatewayError> {
        self.gateway
            .put(&auth_path("confirm_registration"), &req)
            .await
    }

    async fn confirm_reset_code(
        &self,
        req: ResetPassword,
    ) -> Result<MessageResponse, GatewayError> {
        self.gateway.put(&auth_path("confirm_code"), &req).await
    }

    async fn send_reset_code(
        &self,
        req: ResetPasswordCode,
    ) -> Result<MessageResponse, GatewayError> {
        self.gateway
            .put(&auth_path("reset_password_code"), &req)
            .await
    }

    async fn reset_password(&self, req: ResetPassword) -> Result<MessageResponse, GatewayError> {
        self.gateway.put(&auth_path("reset_password"), &req).await
    }

    async fn send_confirmation_code_again(
        &self,
        req: Credentials,
    ) -> Result<MessageResponse, GatewayError> {
        self.gateway.put(&auth_path("resend_code"), &req).await
    }
}
