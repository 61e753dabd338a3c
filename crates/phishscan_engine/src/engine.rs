use std::sync::{mpsc, Arc};
use std::thread;

use phishscan_core::ScanId;
use scan_logging::{scan_debug, scan_info, scan_warn};
use tokio::task::JoinHandle;

use crate::client::{ClassifierClient, ClientSettings, ReqwestClient};
use crate::{EngineError, EngineEvent};

/// Receives engine events on whatever thread the engine runs them on.
pub trait EventSink: Send + Sync {
    fn emit(&self, event: EngineEvent);
}

pub struct ChannelEventSink {
    tx: mpsc::Sender<EngineEvent>,
}

impl ChannelEventSink {
    pub fn new(tx: mpsc::Sender<EngineEvent>) -> Self {
        Self { tx }
    }
}

impl EventSink for ChannelEventSink {
    fn emit(&self, event: EngineEvent) {
        let _ = self.tx.send(event);
    }
}

enum EngineCommand {
    ProbeHealth,
    Submit { scan_id: ScanId, url: String },
}

/// Owns the async runtime that talks to the classification service.
///
/// Requests run to completion; there is no cancellation.
pub struct EngineHandle {
    cmd_tx: mpsc::Sender<EngineCommand>,
}

impl EngineHandle {
    pub fn new(settings: &ClientSettings, sink: Arc<dyn EventSink>) -> Result<Self, EngineError> {
        let client = ReqwestClient::new(settings)?;
        scan_info!("Classification service at {}", settings.base_url);
        Self::with_client(Arc::new(client), sink)
    }

    pub fn with_client(
        client: Arc<dyn ClassifierClient>,
        sink: Arc<dyn EventSink>,
    ) -> Result<Self, EngineError> {
        let runtime = tokio::runtime::Runtime::new()?;
        let (cmd_tx, cmd_rx) = mpsc::channel();

        thread::spawn(move || {
            let mut in_flight: Option<(ScanId, JoinHandle<()>)> = None;
            while let Ok(command) = cmd_rx.recv() {
                let client = client.clone();
                let sink = sink.clone();
                match command {
                    EngineCommand::ProbeHealth => {
                        runtime.spawn(async move {
                            let report = client.probe_health().await;
                            sink.emit(EngineEvent::HealthChecked(report));
                        });
                    }
                    EngineCommand::Submit { scan_id, url } => {
                        if let Some((previous, handle)) = &in_flight {
                            if !handle.is_finished() {
                                scan_warn!(
                                    "Scan {} submitted while scan {} is still running",
                                    scan_id,
                                    previous
                                );
                            }
                        }
                        let handle = runtime.spawn(async move {
                            let result = client.submit_scan(&url).await;
                            scan_debug!("Scan {} finished (ok={})", scan_id, result.is_ok());
                            sink.emit(EngineEvent::ScanCompleted { scan_id, result });
                        });
                        in_flight = Some((scan_id, handle));
                    }
                }
            }
            scan_debug!("Engine command channel closed");
        });

        Ok(Self { cmd_tx })
    }

    pub fn probe_health(&self) {
        let _ = self.cmd_tx.send(EngineCommand::ProbeHealth);
    }

    pub fn submit(&self, scan_id: ScanId, url: impl Into<String>) {
        let _ = self.cmd_tx.send(EngineCommand::Submit {
            scan_id,
            url: url.into(),
        });
    }
}
