//! The identity service client.

use std::time::Instant;

use agidentity_api::{
    paths, BalanceResponse, DecryptRequest, DecryptResponse, EncryptRequest, EncryptResponse,
    IdentityResponse, SignRequest, SignResponse,
};
use reqwest::blocking::{Client, RequestBuilder};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, trace};

use crate::{
    config::ClientConfig,
    error::{ClientError, Result},
    params::{require_non_empty, CryptoContext, SignParams},
};

/// Client for the AGIdentity HTTP API.
///
/// Holds only immutable configuration and a pooled [`reqwest`] client, so a
/// single instance can be cloned or shared across threads freely.
#[derive(Debug, Clone)]
pub struct IdentityServiceClient {
    config: ClientConfig,
    http: Client,
}

impl IdentityServiceClient {
    /// Build a client. Fails if `config` does not pass
    /// [`ClientConfig::validate`].
    pub fn new(config: ClientConfig) -> Result<Self> {
        config.validate()?;
        let http = Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(|e| ClientError::InvalidConfig(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    /// Shorthand for a client with default settings against `base_url`.
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self> {
        Self::new(ClientConfig::new(base_url))
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// `GET /api/identity`
    pub fn get_identity(&self) -> Result<IdentityResponse> {
        self.get(paths::IDENTITY)
    }

    /// `POST /api/sign`
    ///
    /// Signing may be randomized; two signatures over the same message need
    /// not be equal.
    pub fn sign(&self, message: &str, params: &SignParams) -> Result<SignResponse> {
        require_non_empty("message", message)?;
        params.validate()?;
        self.post(
            paths::SIGN,
            &SignRequest {
                message: message.to_string(),
                protocol: params.protocol.clone(),
            },
        )
    }

    /// [`sign`](Self::sign) with the `"agent message"` protocol.
    pub fn sign_default(&self, message: &str) -> Result<SignResponse> {
        self.sign(message, &SignParams::default())
    }

    /// `POST /api/encrypt`
    pub fn encrypt(&self, data: &str, ctx: &CryptoContext) -> Result<EncryptResponse> {
        require_non_empty("data", data)?;
        ctx.validate()?;
        self.post(
            paths::ENCRYPT,
            &EncryptRequest {
                data: data.to_string(),
                protocol: ctx.protocol.clone(),
                key_id: ctx.key_id.clone(),
                counterparty: ctx.counterparty.clone(),
            },
        )
    }

    /// [`encrypt`](Self::encrypt) under [`CryptoContext::default`].
    pub fn encrypt_default(&self, data: &str) -> Result<EncryptResponse> {
        self.encrypt(data, &CryptoContext::default())
    }

    /// `POST /api/decrypt`
    ///
    /// `ctx` must equal the context used at encryption time; the service
    /// rejects anything else with a `Service` error.
    pub fn decrypt(&self, ciphertext: &str, ctx: &CryptoContext) -> Result<DecryptResponse> {
        require_non_empty("ciphertext", ciphertext)?;
        ctx.validate()?;
        self.post(
            paths::DECRYPT,
            &DecryptRequest {
                ciphertext: ciphertext.to_string(),
                protocol: ctx.protocol.clone(),
                key_id: ctx.key_id.clone(),
                counterparty: ctx.counterparty.clone(),
            },
        )
    }

    /// [`decrypt`](Self::decrypt) under [`CryptoContext::default`].
    pub fn decrypt_default(&self, ciphertext: &str) -> Result<DecryptResponse> {
        self.decrypt(ciphertext, &CryptoContext::default())
    }

    /// `GET /api/balance`
    pub fn check_balance(&self) -> Result<BalanceResponse> {
        self.get(paths::BALANCE)
    }

    // ── Transport ─────────────────────────────────────────────────────────────

    fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.config.endpoint(path);
        self.execute(self.http.get(&url), "GET", &url)
    }

    fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let url = self.config.endpoint(path);
        self.execute(self.http.post(&url).json(body), "POST", &url)
    }

    fn execute<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        method: &str,
        url: &str,
    ) -> Result<T> {
        let started = Instant::now();
        let timeout = self.config.timeout;

        let response = request
            .send()
            .map_err(|e| ClientError::transport(url, timeout, e))?;
        let status = response.status();
        let body = response
            .text()
            .map_err(|e| ClientError::transport(url, timeout, e))?;

        debug!(
            method,
            url,
            status = status.as_u16(),
            elapsed_ms = started.elapsed().as_millis() as u64,
            "identity service responded"
        );

        if !status.is_success() {
            return Err(ClientError::from_error_body(url, status, &body));
        }
        trace!(url, body_len = body.len(), "decoding response body");
        serde_json::from_str(&body).map_err(|e| ClientError::undecodable(url, status, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Nothing listens on the discard port; validation must fail before any
    // connection attempt, so these tests never touch the network.
    fn offline_client() -> IdentityServiceClient {
        IdentityServiceClient::with_base_url("http://127.0.0.1:9").unwrap()
    }

    #[test]
    fn client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<IdentityServiceClient>();
    }

    #[test]
    fn rejects_invalid_config() {
        let err = IdentityServiceClient::with_base_url("not a url").unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn empty_message_is_rejected_locally() {
        let err = offline_client().sign_default("").unwrap_err();
        assert!(matches!(err, ClientError::Validation { field: "message" }));
    }

    #[test]
    fn empty_data_and_ciphertext_are_rejected_locally() {
        let client = offline_client();
        assert!(matches!(
            client.encrypt_default("").unwrap_err(),
            ClientError::Validation { field: "data" }
        ));
        assert!(matches!(
            client.decrypt_default("").unwrap_err(),
            ClientError::Validation { field: "ciphertext" }
        ));
    }

    #[test]
    fn empty_context_label_is_rejected_locally() {
        let ctx = CryptoContext::default().with_counterparty("");
        let err = offline_client().encrypt("data", &ctx).unwrap_err();
        assert!(matches!(err, ClientError::Validation { field: "counterparty" }));
    }

    #[test]
    fn overflowing_timeout_fails_construction() {
        let config = ClientConfig::new("http://127.0.0.1:9")
            .with_timeout(std::time::Duration::from_secs(u64::MAX));
        let err = IdentityServiceClient::new(config).unwrap_err();
        assert!(matches!(err, ClientError::InvalidConfig(_)));
    }

    #[test]
    fn config_is_exposed() {
        let client = offline_client();
        assert_eq!(client.config().base_url, "http://127.0.0.1:9");
    }
}
