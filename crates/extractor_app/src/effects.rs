use std::sync::mpsc;
use std::thread;

use extractor_core::{Effect, ExtractedImages, ExtractionFailure, FailureKind, ToastLevel};
use extractor_engine::{EngineEvent, EngineEvents, EngineHandle, ExtractError, ExtractionResponse};
use extractor_logging::{extractor_info, extractor_warn};

use crate::app::{AppEvent, EffectSink};
use crate::render;

pub struct EffectRunner {
    engine: EngineHandle,
}

impl EffectRunner {
    /// Forward engine completions to the app loop as messages.
    pub fn new(
        engine: EngineHandle,
        events: EngineEvents,
        event_tx: mpsc::Sender<AppEvent>,
    ) -> Self {
        spawn_event_loop(events, event_tx);
        Self { engine }
    }
}

impl EffectSink for EffectRunner {
    fn run(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::Extract { request_id, url } => {
                    extractor_info!(
                        "Extract request_id={} url_len={} url={}",
                        request_id,
                        url.len(),
                        url
                    );
                    self.engine.extract(request_id, url);
                }
                Effect::CancelExtract { request_id } => {
                    self.engine.cancel(request_id);
                }
                Effect::Toast { level, message } => {
                    match level {
                        ToastLevel::Error => extractor_warn!("Toast: {}", message),
                        ToastLevel::Info => extractor_info!("Toast: {}", message),
                    }
                    eprintln!("{}", render::toast_line(level, &message));
                }
            }
        }
    }
}

fn spawn_event_loop(events: EngineEvents, event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        while let Some(event) = events.recv() {
            let EngineEvent::ExtractionCompleted { request_id, result } = event;
            if let Err(err) = &result {
                extractor_warn!("Request {} failed: {}", request_id, err);
            }
            let msg = extractor_core::Msg::ExtractionDone {
                request_id,
                result: map_result(result),
            };
            if event_tx.send(AppEvent::Msg(msg)).is_err() {
                break;
            }
        }
    });
}

pub(crate) fn map_result(
    result: Result<ExtractionResponse, ExtractError>,
) -> Result<ExtractedImages, ExtractionFailure> {
    match result {
        Ok(response) => Ok(ExtractedImages {
            primary: response.image,
            gallery: response.image_list,
        }),
        Err(err) => Err(map_error(err)),
    }
}

fn map_error(err: ExtractError) -> ExtractionFailure {
    match err {
        ExtractError::Validation(message) => {
            ExtractionFailure::new(FailureKind::Validation, message)
        }
        // The user sees the generic network message; details go to the log.
        ExtractError::Network(_) => ExtractionFailure::new(FailureKind::Network, ""),
        ExtractError::Service { status, message } => {
            ExtractionFailure::new(FailureKind::Service { status }, message)
        }
        ExtractError::NotFound => ExtractionFailure::new(FailureKind::NotFound, ""),
    }
}
