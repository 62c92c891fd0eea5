use gloo_net::http::{Request, Response};
use pa_console::{endpoints::FORM_CONTENT_TYPE, ConsoleError};
use serde::de::DeserializeOwned;

pub(crate) async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, ConsoleError> {
    log::debug!("GET {url}");
    let response = Request::get(url)
        .header("accept", "application/json")
        .send()
        .await
        .map_err(network_error)?;
    let response = check_status(response).await?;
    response
        .json::<T>()
        .await
        .map_err(|error| ConsoleError::Decode(error.to_string()))
}

/// Posts a urlencoded form and returns the response body as text.
pub(crate) async fn post_form(url: &str, body: String) -> Result<String, ConsoleError> {
    log::debug!("POST {url}");
    let response = Request::post(url)
        .header("content-type", FORM_CONTENT_TYPE)
        .body(body)
        .map_err(network_error)?
        .send()
        .await
        .map_err(network_error)?;
    let response = check_status(response).await?;
    response
        .text()
        .await
        .map_err(|error| ConsoleError::Decode(error.to_string()))
}

async fn check_status(response: Response) -> Result<Response, ConsoleError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ConsoleError::Status { status, body })
}

fn network_error(error: gloo_net::Error) -> ConsoleError {
    ConsoleError::Network(error.to_string())
}
