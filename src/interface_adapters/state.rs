use crate::domain::{AuthApi, TokenStorage};
use crate::interface_adapters::clients::AuthClient;
use crate::interface_adapters::gateway::HttpGateway;
use crate::use_cases::notification_store::NotificationStore;
use crate::use_cases::token_store::TokenStore;
use std::sync::Arc;
use url::Url;

// Root-owned context wiring the stores into the gateway and the UI layer.
#[derive(Clone)]
pub struct AppContext {
    pub tokens: Arc<TokenStore>,
    pub notifications: Arc<NotificationStore>,
    pub gateway: HttpGateway,
    // We use Arc<dyn Trait> to hold any implementation (dependency injection).
    pub auth: Arc<dyn AuthApi>,
}

impl AppContext {
    pub fn new(
        base_url: Url,
        storage: impl TokenStorage + 'static,
    ) -> Result<Self, reqwest::Error> {
        let tokens = Arc::new(TokenStore::load(storage));
        let notifications = Arc::new(NotificationStore::new());
        let gateway = HttpGateway::new(base_url, Arc::clone(&tokens), Arc::clone(&notifications))?;
        let auth = Arc::new(AuthClient::new(gateway.clone()));

        Ok(Self {
            tokens,
            notifications,
            gateway,
            auth,
        })
    }
}
