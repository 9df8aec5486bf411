use crate::error::{LlmError, Result};
use crate::providers::{GeminiConfig, GeminiProvider};
use crate::traits::TextModel;
use std::sync::Arc;
use tracing::{error, info};

/// Process-wide reference to the remote model, fixed at startup.
///
/// A handle is either ready, wrapping a shared [`TextModel`], or unavailable
/// because initialization failed. It is never mutated afterwards; clones share
/// the same client.
#[derive(Clone)]
pub struct ModelHandle {
    inner: Inner,
}

#[derive(Clone)]
enum Inner {
    Ready(Arc<dyn TextModel>),
    Unavailable(Arc<str>),
}

impl ModelHandle {
    pub fn ready(model: Arc<dyn TextModel>) -> Self {
        Self {
            inner: Inner::Ready(model),
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self {
            inner: Inner::Unavailable(Arc::from(reason.into())),
        }
    }

    /// Runs `build` once. Failures are logged and yield an unavailable handle
    /// instead of aborting startup.
    pub fn initialize<F>(build: F) -> Self
    where
        F: FnOnce() -> Result<Arc<dyn TextModel>>,
    {
        match build() {
            Ok(model) => {
                info!(
                    provider = model.name(),
                    model = model.model(),
                    "Model client configured"
                );
                Self::ready(model)
            }
            Err(e @ LlmError::MissingCredential(_)) => {
                error!(error = %e, "Model client unavailable, credential is missing");
                Self::unavailable(e.to_string())
            }
            Err(e) => {
                error!(error = %e, "Failed to configure model client");
                Self::unavailable(e.to_string())
            }
        }
    }

    /// Initializer for the Gemini backend. `configure` adjusts the default
    /// config (model, base URL, timeout) once a key is present.
    pub fn gemini<F>(api_key: Option<String>, configure: F) -> Self
    where
        F: FnOnce(GeminiConfig) -> GeminiConfig,
    {
        Self::initialize(|| {
            let api_key = api_key.ok_or_else(|| {
                LlmError::MissingCredential("GOOGLE_API_KEY is not set".to_string())
            })?;
            let provider = GeminiProvider::new(configure(GeminiConfig::new(api_key)))?;
            Ok(Arc::new(provider) as Arc<dyn TextModel>)
        })
    }

    pub fn get(&self) -> Option<&Arc<dyn TextModel>> {
        match &self.inner {
            Inner::Ready(model) => Some(model),
            Inner::Unavailable(_) => None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.get().is_some()
    }

    pub fn unavailable_reason(&self) -> Option<&str> {
        match &self.inner {
            Inner::Ready(_) => None,
            Inner::Unavailable(reason) => Some(reason.as_ref()),
        }
    }
}

impl std::fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.inner {
            Inner::Ready(model) => f
                .debug_struct("ModelHandle")
                .field("provider", &model.name())
                .field("model", &model.model())
                .finish(),
            Inner::Unavailable(reason) => f
                .debug_struct("ModelHandle")
                .field("unavailable", reason)
                .finish(),
        }
    }
}
