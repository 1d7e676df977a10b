use std::time::Duration;

use futures_util::StreamExt;
use news_core::Article;
use news_logging::news_debug;
use reqwest::header::CONTENT_TYPE;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::{FailureKind, FetchError};

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
    pub max_bytes: u64,
    pub user_agent: String,
    pub allowed_content_types: Vec<String>,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            max_bytes: 5 * 1024 * 1024,
            user_agent: concat!("news_table/", env!("CARGO_PKG_VERSION")).to_string(),
            allowed_content_types: vec!["application/json".to_string()],
        }
    }
}

/// Where and how to ask for top headlines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewsApiConfig {
    pub endpoint: String,
    pub country: String,
    pub api_key: String,
}

impl Default for NewsApiConfig {
    fn default() -> Self {
        Self {
            endpoint: "https://newsapi.org/v2/top-headlines".to_string(),
            country: "in".to_string(),
            api_key: String::new(),
        }
    }
}

#[async_trait::async_trait]
pub trait HeadlinesSource: Send + Sync {
    async fn top_headlines(&self) -> Result<Vec<Article>, FetchError>;
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct TopHeadlinesResponse {
    #[serde(default)]
    status: String,
    #[serde(default)]
    total_results: usize,
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default)]
    code: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewsApiClient {
    api: NewsApiConfig,
    client: JsonClient,
}

impl NewsApiClient {
    pub fn new(api: NewsApiConfig, settings: FetchSettings) -> Result<Self, FetchError> {
        Ok(Self {
            api,
            client: JsonClient::new(settings)?,
        })
    }

    fn request_url(&self) -> Result<reqwest::Url, FetchError> {
        reqwest::Url::parse_with_params(
            &self.api.endpoint,
            &[
                ("country", self.api.country.as_str()),
                ("apiKey", self.api.api_key.as_str()),
            ],
        )
        .map_err(|err| FetchError::new(FailureKind::InvalidUrl, err.to_string()))
    }
}

#[async_trait::async_trait]
impl HeadlinesSource for NewsApiClient {
    async fn top_headlines(&self) -> Result<Vec<Article>, FetchError> {
        let url = self.request_url()?;
        // The query string carries the api key, so only the endpoint is logged.
        news_debug!(
            "Requesting top headlines endpoint={} country={}",
            self.api.endpoint,
            self.api.country
        );

        let response: TopHeadlinesResponse = self.client.get_json(url).await?;
        if response.status == "error" {
            return Err(FetchError::new(
                FailureKind::Upstream {
                    code: response.code,
                },
                response.message.unwrap_or_default(),
            ));
        }

        news_debug!(
            "Top headlines received articles={} total_results={}",
            response.articles.len(),
            response.total_results
        );
        Ok(response.articles)
    }
}

/// Bounded JSON GETs shared by the upstream client and the page source.
#[derive(Debug, Clone)]
pub(crate) struct JsonClient {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl JsonClient {
    pub(crate) fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .user_agent(settings.user_agent.clone())
            .build()
            .map_err(|err| FetchError::new(FailureKind::Network, err.to_string()))?;
        Ok(Self { settings, client })
    }

    fn is_content_type_allowed(&self, content_type: &str) -> bool {
        let ct = content_type.split(';').next().unwrap_or(content_type).trim();
        self.settings
            .allowed_content_types
            .iter()
            .any(|allowed| allowed.eq_ignore_ascii_case(ct))
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(
        &self,
        url: reqwest::Url,
    ) -> Result<T, FetchError> {
        let response = self
            .client
            .get(url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        if let Some(content_len) = response.content_length() {
            if content_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(content_len),
                    },
                    "response too large",
                ));
            }
        }

        let content_type = response
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .map(|value| value.to_string());

        if let Some(ct) = content_type.as_deref() {
            if !self.is_content_type_allowed(ct) {
                return Err(FetchError::new(
                    FailureKind::UnsupportedContentType {
                        content_type: ct.to_string(),
                    },
                    "unsupported content type",
                ));
            }
        }

        let mut bytes = Vec::new();
        let mut stream = response.bytes_stream();
        while let Some(chunk) = stream.next().await {
            let chunk = chunk.map_err(map_reqwest_error)?;
            let next_len = bytes.len() as u64 + chunk.len() as u64;
            if next_len > self.settings.max_bytes {
                return Err(FetchError::new(
                    FailureKind::TooLarge {
                        max_bytes: self.settings.max_bytes,
                        actual: Some(next_len),
                    },
                    "response too large",
                ));
            }
            bytes.extend_from_slice(&chunk);
        }

        serde_json::from_slice(&bytes)
            .map_err(|err| FetchError::new(FailureKind::Decode, err.to_string()))
    }
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    FetchError::new(FailureKind::Network, err.to_string())
}
