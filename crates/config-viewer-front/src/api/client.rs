use common::failure::Failure;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use web_sys::AbortSignal;

pub fn get_base_url() -> Result<String, String> {
    web_sys::window()
        .ok_or_else(|| "No browser window available".to_string())?
        .location()
        .origin()
        .map_err(|e| format!("Failed to read document origin: {:?}", e))
}

/// GETs `<origin><path>` and decodes the JSON body.
///
/// Non-2xx responses carrying a server `Failure` body include its message.
pub async fn get_json<T>(path: &str, abort: Option<&AbortSignal>) -> Result<T, String>
where
    T: DeserializeOwned,
{
    let url = format!("{}{}", get_base_url()?, path);

    let response: Response = Request::get(&url)
        .abort_signal(abort)
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let status = format!(
            "HTTP error: status {} - {}",
            response.status(),
            response.status_text()
        );
        return Err(match response.json::<Failure>().await {
            Ok(failure) => format!("{} ({})", status, failure.message),
            Err(_) => status,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| format!("Response read error: {}", e))
}
