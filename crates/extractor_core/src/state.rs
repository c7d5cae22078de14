use crate::view_model::{AppViewModel, Status};

pub type RequestId = u64;

/// Longest free-text feedback accepted, in characters.
pub const FEEDBACK_MAX_CHARS: usize = 500;
pub const VALIDATION_MESSAGE: &str = "Please enter a valid URL";
pub const NOT_FOUND_MESSAGE: &str = "No images found for this URL";
pub const NETWORK_FALLBACK_MESSAGE: &str = "Network error. Please check your connection.";
pub const GENERIC_FALLBACK_MESSAGE: &str = "Failed to extract images";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Dashboard,
}

/// Images returned by a successful extraction. After the workflow has
/// processed them, `gallery` holds the vendor-rewritten URLs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtractedImages {
    pub primary: String,
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Validation,
    Network,
    Service { status: u16 },
    NotFound,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionFailure {
    pub kind: FailureKind,
    pub message: String,
}

impl ExtractionFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// Message shown to the user; blank messages get a default per kind.
    pub fn user_message(&self) -> String {
        let message = self.message.trim();
        if !message.is_empty() {
            return message.to_owned();
        }
        match self.kind {
            FailureKind::Validation => VALIDATION_MESSAGE,
            FailureKind::NotFound => NOT_FOUND_MESSAGE,
            FailureKind::Network => NETWORK_FALLBACK_MESSAGE,
            FailureKind::Service { .. } => GENERIC_FALLBACK_MESSAGE,
        }
        .to_owned()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Loading {
        request_id: RequestId,
        url: String,
    },
    Success(ExtractedImages),
    Failure(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Feedback {
    pub rating: Option<u8>,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppState {
    view: View,
    input: String,
    raw_input: String,
    phase: Phase,
    displayed_image: Option<String>,
    gallery_visible: bool,
    feedback: Feedback,
    last_request_id: RequestId,
    dirty: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn view(&self) -> AppViewModel {
        let (status, gallery) = match &self.phase {
            Phase::Idle => (Status::Idle, Vec::new()),
            Phase::Loading { .. } => (Status::Loading, Vec::new()),
            Phase::Success(images) => (Status::Success, images.gallery.clone()),
            Phase::Failure(message) => (
                Status::Failure {
                    message: message.clone(),
                },
                Vec::new(),
            ),
        };

        AppViewModel {
            view: self.view,
            input: self.input.clone(),
            input_enabled: !self.is_loading(),
            status,
            displayed_image: self.displayed_image.clone(),
            gallery,
            gallery_visible: self.gallery_visible,
            rating: self.feedback.rating,
            feedback: self.feedback.text.clone(),
            feedback_remaining: FEEDBACK_MAX_CHARS
                .saturating_sub(self.feedback.text.chars().count()),
            dirty: self.dirty,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn current_view(&self) -> View {
        self.view
    }

    /// Raw text behind the encoded field value.
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, Phase::Loading { .. })
    }

    /// Returns the dirty flag and clears it.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    pub(crate) fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    pub(crate) fn open_dashboard(&mut self) {
        if self.view != View::Dashboard {
            self.view = View::Dashboard;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_input(&mut self, raw: String, encoded: String) {
        if self.input != encoded || self.raw_input != raw {
            self.input = encoded;
            self.raw_input = raw;
            self.mark_dirty();
        }
    }

    /// Discard the previous result and enter Loading for `url`.
    pub(crate) fn begin_request(&mut self, url: String) -> RequestId {
        self.last_request_id += 1;
        let request_id = self.last_request_id;
        self.phase = Phase::Loading { request_id, url };
        self.displayed_image = None;
        self.gallery_visible = false;
        self.feedback = Feedback::default();
        self.mark_dirty();
        request_id
    }

    /// URL of the in-flight request when `request_id` is the current one.
    pub(crate) fn pending_url(&self, request_id: RequestId) -> Option<&str> {
        match &self.phase {
            Phase::Loading {
                request_id: current,
                url,
            } if *current == request_id => Some(url),
            _ => None,
        }
    }

    pub(crate) fn succeed(&mut self, images: ExtractedImages) {
        self.displayed_image = Some(images.primary.clone());
        self.phase = Phase::Success(images);
        self.mark_dirty();
    }

    pub(crate) fn fail(&mut self, message: String) {
        self.displayed_image = None;
        self.phase = Phase::Failure(message);
        self.mark_dirty();
    }

    /// Returns the id of the request that was in flight, if any.
    pub(crate) fn cancel_request(&mut self) -> Option<RequestId> {
        let Phase::Loading { request_id, .. } = self.phase else {
            return None;
        };
        self.phase = Phase::Idle;
        self.mark_dirty();
        Some(request_id)
    }

    pub(crate) fn select_gallery_image(&mut self, index: usize) -> bool {
        let Phase::Success(images) = &self.phase else {
            return false;
        };
        match images.gallery.get(index) {
            Some(url) => {
                self.displayed_image = Some(url.clone());
                self.mark_dirty();
                true
            }
            None => false,
        }
    }

    pub(crate) fn toggle_gallery(&mut self) {
        if let Phase::Success(images) = &self.phase {
            if !images.gallery.is_empty() {
                self.gallery_visible = !self.gallery_visible;
                self.mark_dirty();
            }
        }
    }

    pub(crate) fn set_rating(&mut self, rating: u8) -> bool {
        if !matches!(self.phase, Phase::Success(_)) || !(1..=5).contains(&rating) {
            return false;
        }
        self.feedback.rating = Some(rating);
        self.mark_dirty();
        true
    }

    pub(crate) fn set_feedback(&mut self, text: String) -> bool {
        if !matches!(self.phase, Phase::Success(_))
            || text.chars().count() > FEEDBACK_MAX_CHARS
        {
            return false;
        }
        self.feedback.text = text;
        self.mark_dirty();
        true
    }
}
