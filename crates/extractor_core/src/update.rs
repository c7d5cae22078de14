use extractor_logging::{extractor_debug, extractor_info};

use crate::codec::normalize_input;
use crate::{
    AppState, Effect, ExtractedImages, Msg, ToastLevel, Vendor, View, VALIDATION_MESSAGE,
};

const CANCELLED_MESSAGE: &str = "Extraction cancelled";

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::GetStartedClicked => {
            state.open_dashboard();
            Vec::new()
        }
        Msg::InputChanged(text) => {
            // The field is disabled while a request is in flight.
            if state.current_view() != View::Dashboard || state.is_loading() {
                return (state, Vec::new());
            }
            let input = normalize_input(&text);
            let raw = input.raw.clone();
            state.set_input(input.raw, input.encoded);
            if raw.trim().is_empty() {
                Vec::new()
            } else {
                submit(&mut state, raw)
            }
        }
        Msg::SubmitClicked => {
            if state.current_view() != View::Dashboard || state.is_loading() {
                return (state, Vec::new());
            }
            let raw = state.raw_input().to_owned();
            if raw.trim().is_empty() {
                state.fail(VALIDATION_MESSAGE.to_owned());
                Vec::new()
            } else {
                submit(&mut state, raw)
            }
        }
        Msg::CancelClicked => {
            match state.cancel_request() {
                Some(request_id) => vec![
                    Effect::CancelExtract { request_id },
                    Effect::Toast {
                        level: ToastLevel::Info,
                        message: CANCELLED_MESSAGE.to_owned(),
                    },
                ],
                None => Vec::new(),
            }
        }
        Msg::ExtractionDone { request_id, result } => {
            let Some(page_url) = state.pending_url(request_id).map(ToOwned::to_owned) else {
                extractor_debug!("Discarding stale completion for request {}", request_id);
                return (state, Vec::new());
            };
            match result {
                Ok(images) => {
                    let gallery = if images.gallery.is_empty() {
                        Vec::new()
                    } else {
                        Vendor::detect(&page_url).rewrite_gallery(&images.gallery)
                    };
                    extractor_info!(
                        "Request {} succeeded with {} gallery images",
                        request_id,
                        gallery.len()
                    );
                    state.succeed(ExtractedImages {
                        primary: images.primary,
                        gallery,
                    });
                    Vec::new()
                }
                Err(failure) => {
                    let message = failure.user_message();
                    extractor_info!(
                        "Request {} failed ({:?}): {}",
                        request_id,
                        failure.kind,
                        message
                    );
                    state.fail(message.clone());
                    vec![Effect::Toast {
                        level: ToastLevel::Error,
                        message,
                    }]
                }
            }
        }
        Msg::GalleryImageSelected { index } => {
            state.select_gallery_image(index);
            Vec::new()
        }
        Msg::GalleryToggled => {
            state.toggle_gallery();
            Vec::new()
        }
        Msg::RatingSelected(rating) => {
            state.set_rating(rating);
            Vec::new()
        }
        Msg::FeedbackChanged(text) => {
            state.set_feedback(text);
            Vec::new()
        }
        Msg::Tick | Msg::NoOp => Vec::new(),
    };

    (state, effects)
}

fn submit(state: &mut AppState, url: String) -> Vec<Effect> {
    let request_id = state.begin_request(url.clone());
    vec![Effect::Extract { request_id, url }]
}
