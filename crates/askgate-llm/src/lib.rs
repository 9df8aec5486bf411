pub mod error;
pub mod handle;
pub mod providers;
pub mod traits;

pub use error::{LlmError, Result};
pub use handle::ModelHandle;
pub use providers::{GeminiConfig, GeminiProvider, MockModel};
pub use traits::TextModel;

pub mod prelude {
    pub use crate::error::{LlmError, Result};
    pub use crate::handle::ModelHandle;
    pub use crate::providers::{GeminiConfig, GeminiProvider, MockModel};
    pub use crate::traits::TextModel;
}
