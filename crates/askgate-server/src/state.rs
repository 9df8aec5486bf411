use askgate_llm::ModelHandle;

/// Shared router state. Holds nothing but the read-only model handle.
#[derive(Clone, Debug)]
pub struct AppState {
    pub model: ModelHandle,
}

impl AppState {
    pub fn new(model: ModelHandle) -> Self {
        Self { model }
    }
}
