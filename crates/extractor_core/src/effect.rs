#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the extraction service for images on `url` (raw, not encoded).
    Extract {
        request_id: crate::RequestId,
        url: String,
    },
    /// Abort the in-flight request; a late completion is discarded anyway.
    CancelExtract { request_id: crate::RequestId },
    /// Transient notification; has no effect on the workflow.
    Toast { level: ToastLevel, message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Info,
    Error,
}
