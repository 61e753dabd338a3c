use crate::response::HealthBody;

/// Advisory service status shown next to the input surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Readiness {
    /// The startup probe has not answered yet.
    #[default]
    Checking,
    Ready,
    ModelNotLoaded,
    Offline,
}

impl Readiness {
    /// Maps a decoded health body; only a healthy service with a loaded model is ready.
    pub fn from_health(body: &HealthBody) -> Self {
        if body.status == "healthy" && body.model_loaded {
            Readiness::Ready
        } else {
            Readiness::ModelNotLoaded
        }
    }

    pub fn is_ready(self) -> bool {
        self == Readiness::Ready
    }

    pub fn label(self) -> &'static str {
        match self {
            Readiness::Checking => "Checking API...",
            Readiness::Ready => "API Ready",
            Readiness::ModelNotLoaded => "Model Not Loaded",
            Readiness::Offline => "API Offline",
        }
    }
}

/// Outcome of the startup health probe.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HealthReport {
    pub readiness: Readiness,
    pub model_type: Option<String>,
}

impl HealthReport {
    pub fn offline() -> Self {
        Self {
            readiness: Readiness::Offline,
            model_type: None,
        }
    }

    pub fn from_body(body: HealthBody) -> Self {
        Self {
            readiness: Readiness::from_health(&body),
            model_type: body.model_type,
        }
    }
}
