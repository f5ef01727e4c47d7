//! HTTP implementation of [`PresentationApi`].

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::urls;
use super::wire::{
    CreatePresentationRequest, CreatePresentationResponse, DownloadRequest,
    GenerateContentRequest, GenerateContentResponse, TokenResponse,
};
use super::PresentationApi;
use crate::auth::{FileTokenStore, MemoryTokenStore, TokenStore};
use crate::config::ClientConfig;
use crate::error::{Error, Result};
use crate::model::{ContentCustomization, LayoutCustomization, Theme};

/// JSON client for the presentation service.
///
/// Attaches `Authorization: Bearer <token>` whenever the token store holds a
/// token. A 401 from any endpoint clears the stored token and surfaces as
/// [`Error::Unauthorized`].
#[derive(Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
    tokens: Arc<dyn TokenStore>,
}

impl ApiClient {
    /// Create a client; the token lives wherever `config.token_path` says.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let tokens: Arc<dyn TokenStore> = match &config.token_path {
            Some(path) => Arc::new(FileTokenStore::new(path.clone())),
            None => Arc::new(MemoryTokenStore::new()),
        };
        Self::with_token_store(config, tokens)
    }

    /// Create a client with an explicit token store.
    pub fn with_token_store(config: ClientConfig, tokens: Arc<dyn TokenStore>) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build()?;

        Ok(Self {
            http,
            config,
            tokens,
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// The token store this client reads from.
    pub fn token_store(&self) -> &Arc<dyn TokenStore> {
        &self.tokens
    }

    fn token(&self) -> Option<String> {
        match self.tokens.load() {
            Ok(token) => token,
            Err(e) => {
                log::warn!("Could not read token from {}: {}", self.tokens.name(), e);
                None
            }
        }
    }

    fn require_token(&self) -> Result<String> {
        self.token().ok_or(Error::Unauthorized)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        match self.token() {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Send a request and map the status onto the error taxonomy.
    async fn send(&self, endpoint: &str, request: RequestBuilder) -> Result<Response> {
        log::debug!("-> {}", endpoint);
        let response = self.authorized(request).send().await.map_err(|e| {
            log::error!("API request to {} failed: {}", endpoint, e);
            Error::from(e)
        })?;

        let status = response.status();
        log::debug!("<- {} {}", endpoint, status);

        if status == StatusCode::UNAUTHORIZED {
            log::warn!("{} rejected the token; clearing stored credentials", endpoint);
            if let Err(e) = self.tokens.clear() {
                log::error!("Could not clear token: {}", e);
            }
            return Err(Error::Unauthorized);
        }

        if !status.is_success() {
            let err = status_error(response).await;
            log::error!("API request to {} failed: {}", endpoint, err);
            return Err(err);
        }

        Ok(response)
    }

    async fn post_json<B, T>(&self, endpoint: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let request = self.http.post(self.config.endpoint(endpoint)).json(body);
        let response = self.send(endpoint, request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

async fn status_error(response: Response) -> Error {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    let message = if body.trim().is_empty() {
        status.canonical_reason().unwrap_or("unknown status").to_string()
    } else {
        body
    };
    Error::Status {
        status: status.as_u16(),
        message,
    }
}

#[async_trait]
impl PresentationApi for ApiClient {
    async fn login(&self, username: &str, password: &str) -> Result<String> {
        let response = self
            .http
            .post(self.config.endpoint("/token"))
            .form(&[("username", username), ("password", password)])
            .send()
            .await?;

        if !response.status().is_success() {
            let err = status_error(response).await;
            log::error!("Login failed: {}", err);
            return Err(err);
        }

        let body: TokenResponse = response.json().await?;
        let token = body.into_token().ok_or(Error::MissingToken)?;
        self.tokens.save(&token)?;
        log::info!("Logged in as {}", username);
        Ok(token)
    }

    async fn generate_content(
        &self,
        topic: &str,
        customization: &ContentCustomization,
    ) -> Result<String> {
        let body = GenerateContentRequest {
            topic,
            content_customization: customization,
        };
        let response: GenerateContentResponse =
            self.post_json("/chatbot/generate-content", &body).await?;
        Ok(response.content)
    }

    async fn create_presentation(
        &self,
        content: &str,
        layout: &LayoutCustomization,
        theme: Theme,
    ) -> Result<String> {
        let body = CreatePresentationRequest {
            content,
            layout_customization: layout,
            theme,
        };
        let response: CreatePresentationResponse =
            self.post_json("/chatbot/create-ppt", &body).await?;
        Ok(response.output_file)
    }

    async fn download(&self, filepath: &str) -> Result<Vec<u8>> {
        let endpoint = "/chatbot/download";
        let request = self
            .http
            .post(self.config.endpoint(endpoint))
            .json(&DownloadRequest { filepath });
        let response = self.send(endpoint, request).await?;
        Ok(response.bytes().await?.to_vec())
    }

    async fn fetch_preview(&self, filepath: &str) -> Result<Vec<u8>> {
        let url = self.preview_url(filepath)?;
        let response = self.send("/chatbot/preview", self.http.get(url)).await?;
        Ok(response.bytes().await?.to_vec())
    }

    fn direct_url(&self, filepath: &str) -> String {
        urls::direct_url(&self.config.base_url, filepath)
    }

    fn preview_url(&self, filepath: &str) -> Result<String> {
        let token = self.require_token()?;
        Ok(urls::preview_url(&self.config.base_url, filepath, &token))
    }

    fn viewer_url(&self, filepath: &str) -> Result<String> {
        let token = self.require_token()?;
        Ok(urls::viewer_url(&self.config.base_url, filepath, &token))
    }

    fn has_token(&self) -> bool {
        self.token().is_some()
    }

    fn clear_token(&self) -> Result<()> {
        self.tokens.clear()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client_with(token: Option<&str>) -> ApiClient {
        let store = match token {
            Some(t) => MemoryTokenStore::with_token(t),
            None => MemoryTokenStore::new(),
        };
        ApiClient::with_token_store(
            ClientConfig::new().with_base_url("http://localhost:9898"),
            Arc::new(store),
        )
        .unwrap()
    }

    #[test]
    fn test_memory_store_when_no_token_path() {
        let client = ApiClient::new(ClientConfig::new().without_token_file()).unwrap();
        assert_eq!(client.token_store().name(), "memory");
        assert!(!client.has_token());
    }

    #[test]
    fn test_preview_urls_need_token() {
        let client = client_with(None);
        assert!(matches!(
            client.preview_url("outputs/a.pptx"),
            Err(Error::Unauthorized)
        ));
        assert!(client.viewer_url("outputs/a.pptx").is_err());
        assert_eq!(
            client.direct_url("outputs/a.pptx"),
            "http://localhost:9898/outputs/a.pptx"
        );
    }

    #[test]
    fn test_preview_url_carries_token() {
        let client = client_with(Some("tok"));
        assert_eq!(
            client.preview_url("outputs/a.pptx").unwrap(),
            "http://localhost:9898/chatbot/preview/outputs%2Fa.pptx?token=tok"
        );
    }

    #[test]
    fn test_clear_token() {
        let client = client_with(Some("tok"));
        assert!(client.has_token());
        client.clear_token().unwrap();
        assert!(!client.has_token());
    }
}
