//! Extractor engine: HTTP client for the extraction service, background
//! request execution and preference persistence.
mod client;
mod engine;
mod persist;
mod types;

pub use client::{
    ClientSettings, ExtractionClient, ReqwestExtractionClient, DEFAULT_BASE_URL,
    EXTRACT_IMAGES_PATH,
};
pub use engine::{EngineEvents, EngineHandle};
pub use persist::{PersistError, PreferenceStore, PREFERENCES_FILENAME};
pub use types::{EngineEvent, ExtractError, ExtractionResponse, RequestId};
