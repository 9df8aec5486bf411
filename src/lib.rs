//! askgate: a minimal HTTP gateway that relays questions to a hosted LLM.
//!
//! The model side lives in [`llm`], the HTTP side in [`server`]. The
//! `askgate` binary in `crates/askgate-cli` wires them together.

pub use askgate_llm as llm;
pub use askgate_server as server;

pub mod prelude {
    pub use askgate_llm::{
        GeminiConfig, GeminiProvider, LlmError, MockModel, ModelHandle, TextModel,
    };
    pub use askgate_server::{
        build_router, shutdown_signal, AppState, Server, ServerConfig, ServerError,
    };
}
