pub mod gemini;
pub mod mock;

pub use gemini::{GeminiConfig, GeminiProvider};
pub use mock::MockModel;
