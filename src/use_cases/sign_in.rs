use std::sync::Arc;

use crate::domain::{AuthApi, Credentials, GatewayError, LoginResponse};
use crate::use_cases::token_store::TokenStore;

// Login followed by storing the issued token.
pub struct SignInUseCase<A: ?Sized> {
    pub auth: Arc<A>,
    pub tokens: Arc<TokenStore>,
}

impl<A> SignInUseCase<A>
where
    A: AuthApi + ?Sized,
{
    pub async fn execute(&self, credentials: Credentials) -> Result<LoginResponse, GatewayError> {
        let response = self.auth.login(credentials).await?;
        self.tokens.set_token(response.token());
        tracing::info!("signed in.");

        Ok(response)
    }
}
