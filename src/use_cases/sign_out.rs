use std::sync::Arc;

use crate::use_cases::token_store::TokenStore;

// Drops the local session. The server is not contacted.
pub struct SignOutUseCase {
    pub tokens: Arc<TokenStore>,
}

impl SignOutUseCase {
    pub fn execute(&self) {
        self.tokens.clear_token();
        tracing::info!("signed out.");
    }
}
