use std::time::Duration;

use extractor_logging::{extractor_debug, extractor_warn};
use url::Url;

use crate::types::{ServiceErrorBody, WireResponse};
use crate::{ExtractError, ExtractionResponse};

pub const EXTRACT_IMAGES_PATH: &str = "/api/extract-images";
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const VALIDATION_MESSAGE: &str = "Please enter a valid URL";

#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

#[async_trait::async_trait]
pub trait ExtractionClient: Send + Sync {
    /// Ask the service for the images on `raw_url`. Single attempt, no retry.
    async fn extract(&self, raw_url: &str) -> Result<ExtractionResponse, ExtractError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestExtractionClient {
    settings: ClientSettings,
    client: reqwest::Client,
}

impl ReqwestExtractionClient {
    pub fn new(settings: ClientSettings) -> Result<Self, ExtractError> {
        let client = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ExtractError::Network(err.to_string()))?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &ClientSettings {
        &self.settings
    }

    /// `{base_url}/api/extract-images?url={percent-encoded raw_url}`
    pub fn endpoint(&self, raw_url: &str) -> Result<Url, ExtractError> {
        let endpoint = format!(
            "{}{}?url={}",
            self.settings.base_url.trim_end_matches('/'),
            EXTRACT_IMAGES_PATH,
            urlencoding::encode(raw_url)
        );
        Url::parse(&endpoint).map_err(|err| {
            ExtractError::Network(format!(
                "invalid service base url {:?}: {}",
                self.settings.base_url, err
            ))
        })
    }
}

#[async_trait::async_trait]
impl ExtractionClient for ReqwestExtractionClient {
    async fn extract(&self, raw_url: &str) -> Result<ExtractionResponse, ExtractError> {
        if raw_url.trim().is_empty() {
            return Err(ExtractError::Validation(VALIDATION_MESSAGE.to_string()));
        }
        let endpoint = self.endpoint(raw_url)?;
        extractor_debug!("GET {}", endpoint);

        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = response.bytes().await.unwrap_or_default();
            let message = serde_json::from_slice::<ServiceErrorBody>(&body)
                .ok()
                .and_then(|body| body.message)
                .unwrap_or_default();
            return Err(ExtractError::Service {
                status: status.as_u16(),
                message,
            });
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        let wire: WireResponse = match serde_json::from_slice(&body) {
            Ok(wire) => wire,
            Err(err) => {
                extractor_warn!("Unreadable extraction response: {}", err);
                return Err(ExtractError::NotFound);
            }
        };

        let image = wire
            .image
            .filter(|image| !image.trim().is_empty())
            .ok_or(ExtractError::NotFound)?;
        Ok(ExtractionResponse {
            image,
            image_list: wire.image_list.or(wire.images).unwrap_or_default(),
        })
    }
}

fn map_reqwest_error(err: reqwest::Error) -> ExtractError {
    if err.is_timeout() {
        return ExtractError::Network(format!("request timed out: {err}"));
    }
    ExtractError::Network(err.to_string())
}
