//! Utilities
use std::time::Instant;
use log::*;
use anyhow::{Context, Result};
use reqwest::blocking::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};

pub const ACCEPT_INVALID_CERTS: bool = true;

/// The parts of a http response the checks look at.
#[derive(Debug)]
pub struct HttpResponse {
    pub url: String,
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    /// 2xx is success.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Build the client that is shared by all checks of a run.
pub fn build_client() -> Result<Client>
{
    Client::builder()
        .danger_accept_invalid_certs(ACCEPT_INVALID_CERTS)
        .build()
        .with_context(|| "Unable to create http client")
}

/// Perform a single GET request.
///
/// When a token is provided, the request is authenticated with `Authorization: token=<token>`.
/// An `Err` means no usable response was obtained: connect failure, timeout, redirect loop
/// or a response body that could not be read.
pub fn http_get(
    client: &Client,
    url: &str,
    token: Option<&str>,
) -> reqwest::Result<HttpResponse>
{
    info!("begin http read: {}", url);
    let timer = Instant::now();

    let mut request = client.get(url);
    if let Some(token) = token {
        request = request
            .header(CONTENT_TYPE, "application/json")
            .header(AUTHORIZATION, format!("token={}", token));
    }

    let response = request.send().map_err(|e| {
        debug!("Non-Ok response: {}: {}", url, e);
        e
    })?;
    let status = response.status();
    if status.is_success() {
        debug!("Success response: {} = {}", url, status);
    } else {
        debug!("Non success response: {} = {}", url, status);
    }
    let body = response.text()?;

    info!("end http read: {:?}", timer.elapsed());

    Ok(HttpResponse {
        url: url.to_string(),
        status: status.as_u16(),
        body,
    })
}
