use crate::View;

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Status {
    #[default]
    Idle,
    Loading,
    Success,
    Failure {
        message: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AppViewModel {
    pub view: View,
    /// Encoded field value, as displayed.
    pub input: String,
    pub input_enabled: bool,
    pub status: Status,
    pub displayed_image: Option<String>,
    pub gallery: Vec<String>,
    pub gallery_visible: bool,
    pub rating: Option<u8>,
    pub feedback: String,
    pub feedback_remaining: usize,
    pub dirty: bool,
}
