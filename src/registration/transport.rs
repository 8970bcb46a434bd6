use gloo_net::http::Request;
use log::error;
use web_sys::RequestMode;

use crate::config;
use crate::registration::error::RegistrationError;
use crate::registration::payload::FormPayload;

/// Posts the registration to the intake form. The endpoint is cross-origin
/// and we go through `no-cors`, so the response is opaque: reaching the
/// server at all counts as success and only a thrown fetch is a failure.
pub async fn post_registration(payload: &FormPayload) -> Result<(), RegistrationError> {
    let result = Request::post(config::get_form_url())
        .mode(RequestMode::NoCors)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(payload.to_urlencoded())
        .send()
        .await;

    match result {
        Ok(_) => Ok(()),
        Err(e) => {
            error!("Registration request failed: {}", e);
            Err(RegistrationError::Transport(e.to_string()))
        }
    }
}
