//! Extractor core: pure workflow state machine, URL codec, vendor rewrites
//! and theme resolution.
pub mod codec;
mod effect;
mod msg;
mod state;
mod theme;
mod update;
mod vendor;
mod view_model;

pub use effect::{Effect, ToastLevel};
pub use msg::Msg;
pub use state::{
    AppState, ExtractedImages, ExtractionFailure, Feedback, FailureKind, Phase, RequestId, View,
    FEEDBACK_MAX_CHARS, GENERIC_FALLBACK_MESSAGE, NETWORK_FALLBACK_MESSAGE, NOT_FOUND_MESSAGE,
    VALIDATION_MESSAGE,
};
pub use theme::{Appearance, ParseAppearanceError, ParseThemeModeError, ThemeContext, ThemeMode};
pub use update::update;
pub use vendor::{RewriteError, Vendor, AMAZON_SIZE_TOKEN};
pub use view_model::{AppViewModel, Status};
