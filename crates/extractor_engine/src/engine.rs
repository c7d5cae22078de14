use std::collections::HashMap;
use std::io;
use std::sync::{mpsc, Arc};
use std::thread;

use extractor_logging::{extractor_debug, extractor_info};
use tokio::task::JoinHandle;

use crate::client::ExtractionClient;
use crate::{EngineEvent, RequestId};

enum EngineCommand {
    Extract { request_id: RequestId, url: String },
    Cancel { request_id: RequestId },
}

/// Sends work to the background runtime.
#[derive(Clone)]
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

/// Receives completions from the background runtime.
pub struct EngineEvents {
    event_rx: mpsc::Receiver<EngineEvent>,
}

impl EngineHandle {
    /// Start the background runtime. Requests run concurrently; each one
    /// reports exactly one `ExtractionCompleted` unless it is cancelled.
    pub fn spawn(client: Arc<dyn ExtractionClient>) -> io::Result<(Self, EngineEvents)> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .enable_all()
            .build()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();
        let (event_tx, event_rx) = mpsc::channel();

        thread::Builder::new()
            .name("extractor-engine".to_string())
            .spawn(move || {
                let mut in_flight: HashMap<RequestId, JoinHandle<()>> = HashMap::new();
                while let Ok(command) = cmd_rx.recv() {
                    in_flight.retain(|_, task| !task.is_finished());
                    match command {
                        EngineCommand::Extract { request_id, url } => {
                            let client = client.clone();
                            let event_tx = event_tx.clone();
                            let task = runtime.spawn(async move {
                                let result = client.extract(&url).await;
                                let _ = event_tx
                                    .send(EngineEvent::ExtractionCompleted { request_id, result });
                            });
                            in_flight.insert(request_id, task);
                        }
                        EngineCommand::Cancel { request_id } => {
                            if let Some(task) = in_flight.remove(&request_id) {
                                task.abort();
                                extractor_info!("Cancelled request {}", request_id);
                            }
                        }
                    }
                }
                extractor_debug!("Engine command channel closed");
            })?;

        Ok((Self { cmd_tx }, EngineEvents { event_rx }))
    }

    pub fn extract(&self, request_id: RequestId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Extract {
            request_id,
            url: url.into(),
        });
    }

    pub fn cancel(&self, request_id: RequestId) {
        let _ = self.cmd_tx.send(EngineCommand::Cancel { request_id });
    }
}

impl EngineEvents {
    pub fn try_recv(&self) -> Option<EngineEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Blocks until the next event; `None` once the engine has shut down.
    pub fn recv(&self) -> Option<EngineEvent> {
        self.event_rx.recv().ok()
    }

    pub fn recv_timeout(&self, timeout: std::time::Duration) -> Option<EngineEvent> {
        self.event_rx.recv_timeout(timeout).ok()
    }
}
