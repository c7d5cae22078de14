#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// User took the single affirmative action on the landing view.
    GetStartedClicked,
    /// User edited the URL field; carries the whole field value.
    InputChanged(String),
    /// User asked to extract the URL currently in the field.
    SubmitClicked,
    /// User abandoned the in-flight extraction.
    CancelClicked,
    /// Engine completion for a request.
    ExtractionDone {
        request_id: crate::RequestId,
        result: Result<crate::ExtractedImages, crate::ExtractionFailure>,
    },
    /// User clicked a gallery thumbnail.
    GalleryImageSelected { index: usize },
    /// User clicked Show More Images / Hide Images.
    GalleryToggled,
    /// User picked a fitment rating.
    RatingSelected(u8),
    /// User edited the free-text feedback.
    FeedbackChanged(String),
    /// UI/render tick.
    Tick,
    /// Fallback for placeholder wiring.
    NoOp,
}
