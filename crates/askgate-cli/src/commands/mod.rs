pub mod ask;
pub mod serve;

use askgate_llm::ModelHandle;
use std::time::Duration;

use crate::ModelArgs;

/// Builds the process-wide model handle. Never fails; a missing key or a
/// client that cannot be built leaves the handle unavailable.
pub fn init_model(args: &ModelArgs) -> ModelHandle {
    let api_key = args
        .api_key
        .clone()
        .filter(|key| !key.trim().is_empty());

    ModelHandle::gemini(api_key, |config| {
        let config = config
            .with_model(args.model.clone())
            .with_timeout(Duration::from_secs(args.timeout_secs));

        match &args.base_url {
            Some(url) => config.with_base_url(url.clone()),
            None => config,
        }
    })
}
