pub mod domain;
pub mod frameworks;
pub mod interface_adapters;
pub mod use_cases;

pub use frameworks::app::run;
pub use interface_adapters::clients::AuthClient;
pub use interface_adapters::gateway::HttpGateway;
pub use interface_adapters::state::AppContext;
pub use interface_adapters::storage::FileTokenStorage;
pub use use_cases::notification_store::NotificationStore;
pub use use_cases::token_store::TokenStore;
