use serde::Deserialize;

pub type RequestId = u64;

/// Images found on a product page. `image` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractionResponse {
    pub image: String,
    pub image_list: Vec<String>,
}

/// Success body of `GET /api/extract-images`.
///
/// `imageList` is the canonical gallery field; `images` is still accepted
/// from older service builds. Unknown fields are ignored.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct WireResponse {
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default, rename = "imageList")]
    pub image_list: Option<Vec<String>>,
    #[serde(default)]
    pub images: Option<Vec<String>>,
}

/// Error body the service may attach to a non-2xx response.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ServiceErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ExtractError {
    #[error("{0}")]
    Validation(String),
    #[error("network error: {0}")]
    Network(String),
    #[error("service responded {status}: {message}")]
    Service { status: u16, message: String },
    #[error("no images found for this URL")]
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    ExtractionCompleted {
        request_id: RequestId,
        result: Result<ExtractionResponse, ExtractError>,
    },
}
