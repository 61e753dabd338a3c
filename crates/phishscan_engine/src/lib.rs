//! PhishScan engine: transport client and request execution.
mod client;
mod engine;
mod types;

pub use client::{ClassifierClient, ClientSettings, ReqwestClient, DEFAULT_BASE_URL};
pub use engine::{ChannelEventSink, EngineHandle, EventSink};
pub use types::{EngineError, EngineEvent, FailureKind, TransportError};
