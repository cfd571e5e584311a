use std::net::IpAddr;

use reqwest::StatusCode;
use url::Url;

use crate::{ClientError, HttpError, Payload};

/// Sends a payload to the Namecheap API and returns the raw response body.
pub trait Transport {
    fn send(&self, payload: Payload) -> Result<String, ClientError>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, payload: Payload) -> Result<String, ClientError> {
        (**self).send(payload)
    }
}

/// Details used to authorize every request.
#[derive(Clone)]
pub(crate) struct Credentials {
    pub(crate) api_user: String,
    pub(crate) api_key: String,
    pub(crate) username: String,
    pub(crate) client_ip: IpAddr,
}

/// [Transport] that POSTs form-encoded requests over HTTP.
pub struct HttpTransport {
    endpoint: Url,
    credentials: Credentials,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub(crate) fn new(endpoint: &Url, credentials: Credentials) -> Self {
        Self {
            endpoint: endpoint.clone(),
            credentials,
            client: reqwest::blocking::Client::new(),
        }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Adds the authorization fields to `payload`.
    fn authorize(&self, payload: Payload) -> Payload {
        payload
            .add("ApiUser", &self.credentials.api_user)
            .add("ApiKey", &self.credentials.api_key)
            .add("UserName", &self.credentials.username)
            .add("ClientIp", self.credentials.client_ip)
    }
}

impl Transport for HttpTransport {
    fn send(&self, payload: Payload) -> Result<String, ClientError> {
        let command = payload.command().unwrap_or_default().to_string();
        log::debug!("POST {} {command}", self.endpoint);

        let payload = self.authorize(payload);
        let resp = self
            .client
            .post(self.endpoint.clone())
            .form(payload.params())
            .send()?;

        log::debug!("{command} response status: {}", resp.status());
        if resp.status() != StatusCode::OK {
            return Err(ClientError::Http(HttpError::from_response(resp)));
        }

        let body = resp.text()?;
        log::trace!("{command} response body: {}", truncate_for_log(&body));
        Ok(body)
    }
}

const MAX_LOG_LEN: usize = 1024;

fn truncate_for_log(body: &str) -> &str {
    match body.char_indices().nth(MAX_LOG_LEN) {
        Some((i, _)) => &body[..i],
        None => body,
    }
}
