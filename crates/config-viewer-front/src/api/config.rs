use common::api::F5_CONFIG_PATH;
use serde_json::Value;
use web_sys::AbortSignal;

use crate::api::client::get_json;
use crate::models::DisplayState;
use crate::utils::Liveness;

/// Something that can produce the F5 configuration document.
#[allow(async_fn_in_trait)]
pub trait ConfigSource {
    async fn fetch_config(&self, abort: Option<&AbortSignal>) -> Result<Value, String>;
}

/// Reads `/api/f5Config` from the document origin.
#[derive(Clone, Debug, PartialEq)]
pub struct HttpConfigSource;

impl ConfigSource for HttpConfigSource {
    async fn fetch_config(&self, abort: Option<&AbortSignal>) -> Result<Value, String> {
        get_json(F5_CONFIG_PATH, abort).await
    }
}

/// Fetches the configuration once and returns the resolved state, or `None`
/// when the owning component went away while the request was in flight.
pub async fn load_config<S: ConfigSource>(
    source: &S,
    abort: Option<&AbortSignal>,
    liveness: &Liveness,
) -> Option<DisplayState> {
    let outcome = source.fetch_config(abort).await;

    if !liveness.is_alive() {
        log::debug!("ConfigViewer unmounted before {} resolved, dropping result", F5_CONFIG_PATH);
        return None;
    }

    if let Err(reason) = &outcome {
        log::warn!("Failed to load {}: {}", F5_CONFIG_PATH, reason);
    }

    Some(DisplayState::default().resolve(outcome))
}
