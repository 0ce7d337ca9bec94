use crate::domain::GatewayError;
use crate::interface_adapters::protocol::ErrorBody;
use crate::use_cases::notification_store::NotificationStore;
use crate::use_cases::token_store::TokenStore;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, Method};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use url::Url;

pub const DEFAULT_CONTENT_TYPE: &str = "application/json";

// Single choke point for outbound KS API traffic.
// Every call makes one attempt; failures are reported to the modal and returned.
#[derive(Clone)]
pub struct HttpGateway {
    http: Client,
    base_url: Url,
    tokens: Arc<TokenStore>,
    notifications: Arc<NotificationStore>,
}

impl HttpGateway {
    pub fn new(
        base_url: Url,
        tokens: Arc<TokenStore>,
        notifications: Arc<NotificationStore>,
    ) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(DEFAULT_CONTENT_TYPE));
        let http = Client::builder().default_headers(headers).build()?;

        Ok(Self {
            http,
            base_url,
            tokens,
            notifications,
        })
    }

    pub async fn get<T>(&self, endpoint: &str) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        self.request(Method::GET, endpoint, None::<&()>).await
    }

    pub async fn post<B, T>(&self, endpoint: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::POST, endpoint, Some(body)).await
    }

    pub async fn put<B, T>(&self, endpoint: &str, body: &B) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.request(Method::PUT, endpoint, Some(body)).await
    }

    pub async fn delete<T>(&self, endpoint: &str) -> Result<T, GatewayError>
    where
        T: DeserializeOwned,
    {
        self.request(Method::DELETE, endpoint, None::<&()>).await
    }

    #[tracing::instrument(
        name = "api_request",
        skip_all,
        fields(method = %method, endpoint = %endpoint)
    )]
    async fn request<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let result = self.dispatch(method, endpoint, body).await;

        // Surface the failure to the user, then hand it back to the caller untouched.
        if let Err(error) = &result {
            self.report(error);
        }

        result
    }

    async fn dispatch<B, T>(
        &self,
        method: Method,
        endpoint: &str,
        body: Option<&B>,
    ) -> Result<T, GatewayError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint_url(endpoint)?;
        let mut req = self.http.request(method, url);

        // Attach the current session token, read fresh for every request.
        if let Some(token) = self.tokens.token().filter(|token| !token.is_empty()) {
            req = req.bearer_auth(token);
        }

        if let Some(body) = body {
            let bytes = serde_json::to_vec(body)
                .map_err(|err| GatewayError::RequestConstruction(err.to_string()))?;
            req = req.body(bytes);
        }

        let res = req.send().await.map_err(classify_send_error)?;
        let status = res.status();

        // Keep upstream status/detail so the modal shows what the server said.
        if !status.is_success() {
            let detail = match res.bytes().await {
                Ok(bytes) => serde_json::from_slice::<ErrorBody>(&bytes)
                    .ok()
                    .and_then(ErrorBody::detail_text),
                Err(_) => None,
            };
            return Err(GatewayError::Server { status, detail });
        }

        let bytes = res.bytes().await.map_err(GatewayError::NoResponse)?;
        tracing::debug!(%status, len = bytes.len(), "api request succeeded.");
        decode_payload(&bytes)
    }

    fn endpoint_url(&self, endpoint: &str) -> Result<Url, GatewayError> {
        self.base_url
            .join(endpoint.trim_start_matches('/'))
            .map_err(|err| GatewayError::RequestConstruction(err.to_string()))
    }

    fn report(&self, error: &GatewayError) {
        let message = error.user_message();
        tracing::error!(error = ?error, %message, "api request failed.");
        self.notifications.open_modal(message);
    }
}

// Builder errors never reached the wire; everything else did and got no answer.
fn classify_send_error(err: reqwest::Error) -> GatewayError {
    if err.is_builder() {
        GatewayError::RequestConstruction(err.to_string())
    } else {
        GatewayError::NoResponse(err)
    }
}

// An empty 2xx body decodes as JSON null.
fn decode_payload<T>(bytes: &[u8]) -> Result<T, GatewayError>
where
    T: DeserializeOwned,
{
    let bytes = if bytes.iter().all(u8::is_ascii_whitespace) {
        b"null".as_slice()
    } else {
        bytes
    };
    serde_json::from_slice(bytes).map_err(GatewayError::InvalidPayload)
}
