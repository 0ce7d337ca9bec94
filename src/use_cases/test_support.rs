use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::domain::{
    AuthApi, ConfirmRegistration, Credentials, GatewayError, LoginResponse, MessageResponse,
    ResetPassword, ResetPasswordCode, StorageError, TokenStorage,
};

#[derive(Clone, Copy, Default)]
pub(crate) struct StorageFailures {
    pub load: bool,
    pub save: bool,
    pub remove: bool,
}

// Shared in-memory storage; clones see the same slot, which lets tests simulate a restart.
#[derive(Clone)]
pub(crate) struct MemoryStorage {
    slot: Arc<Mutex<Option<String>>>,
    failures: StorageFailures,
}

impl MemoryStorage {
    pub(crate) fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
            failures: StorageFailures::default(),
        }
    }

    pub(crate) fn with_token(token: &str) -> Self {
        let storage = Self::new();
        *storage.slot.lock().expect("slot mutex poisoned") = Some(token.to_string());
        storage
    }

    pub(crate) fn with_failures(mut self, failures: StorageFailures) -> Self {
        self.failures = failures;
        self
    }

    pub(crate) fn persisted(&self) -> Option<String> {
        self.slot.lock().expect("slot mutex poisoned").clone()
    }
}

fn simulated_failure() -> StorageError {
    StorageError::Io(std::io::Error::other("simulated storage failure"))
}

impl TokenStorage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        if self.failures.load {
            return Err(simulated_failure());
        }
        Ok(self.persisted())
    }

    fn save(&self, token: &str) -> Result<(), StorageError> {
        if self.failures.save {
            return Err(simulated_failure());
        }
        *self.slot.lock().expect("slot mutex poisoned") = Some(token.to_string());
        Ok(())
    }

    fn remove(&self) -> Result<(), StorageError> {
        if self.failures.remove {
            return Err(simulated_failure());
        }
        *self.slot.lock().expect("slot mutex poisoned") = None;
        Ok(())
    }
}

// Fake auth API that answers login with a fixed token or a 401.
pub(crate) struct FakeAuthApi {
    pub login_token: Option<String>,
    pub calls: Mutex<Vec<&'static str>>,
}

impl FakeAuthApi {
    pub(crate) fn accepting(token: &str) -> Self {
        Self {
            login_token: Some(token.to_string()),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn rejecting() -> Self {
        Self {
            login_token: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub(crate) fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().expect("calls mutex poisoned").clone()
    }

    fn record(&self, call: &'static str) {
        self.calls.lock().expect("calls mutex poisoned").push(call);
    }

    fn message(&self, call: &'static str) -> Result<MessageResponse, GatewayError> {
        self.record(call);
        Ok(MessageResponse {
            message: call.to_string(),
        })
    }
}

#[async_trait]
impl AuthApi for FakeAuthApi {
    async fn login(&self, _req: Credentials) -> Result<LoginResponse, GatewayError> {
        self.record("login");
        match &self.login_token {
            Some(token) => Ok(LoginResponse::Bare(token.clone())),
            None => Err(GatewayError::Server {
                status: StatusCode::UNAUTHORIZED,
                detail: Some("invalid credentials".to_string()),
            }),
        }
    }

    async fn register(&self, _req: Credentials) -> Result<MessageResponse, GatewayError> {
        self.message("register")
    }

    async fn confirm_code(
        &self,
        _req: ConfirmRegistration,
    ) -> Result<MessageResponse, GatewayError> {
        self.message("confirm_code")
    }

    async fn confirm_reset_code(
        &self,
        _req: ResetPassword,
    ) -> Result<MessageResponse, GatewayError> {
        self.message("confirm_reset_code")
    }

    async fn send_reset_code(
        &self,
        _req: ResetPasswordCode,
    ) -> Result<MessageResponse, GatewayError> {
        self.message("send_reset_code")
    }

    async fn reset_password(&self, _req: ResetPassword) -> Result<MessageResponse, GatewayError> {
        self.message("reset_password")
    }

    async fn send_confirmation_code_again(
        &self,
        _req: Credentials,
    ) -> Result<MessageResponse, GatewayError> {
        self.message("send_confirmation_code_again")
    }
}
