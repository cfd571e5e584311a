//! Decode targets for the XML documents returned by the Namecheap API.

use serde::Deserialize;
use serde::de::DeserializeOwned;

use crate::record::Host;
use crate::{ApiError, ClientError, RemoteError};

/// The `ApiResponse` envelope shared by every command.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiResponse<T> {
    #[serde(rename = "@Status", default)]
    status: String,
    #[serde(rename = "Errors", default)]
    errors: Errors,
    #[serde(rename = "CommandResponse")]
    command_response: Option<T>,
}

#[derive(Debug, Default, Deserialize)]
struct Errors {
    #[serde(rename = "Error", default)]
    errors: Vec<ErrorEntry>,
}

#[derive(Debug, Deserialize)]
struct ErrorEntry {
    #[serde(rename = "@Number", default)]
    number: String,
    #[serde(rename = "$text", default)]
    message: String,
}

impl Errors {
    fn into_api_error(self) -> ApiError {
        ApiError::new(
            self.errors
                .into_iter()
                .map(|e| RemoteError {
                    number: e.number,
                    message: e.message,
                })
                .collect(),
        )
    }
}

impl<T> ApiResponse<T> {
    /// Returns the command response if the API reported success.
    ///
    /// The response counts as failed if its status is `ERROR`, if it has no
    /// command response, or if `succeeded` rejects the command response.
    pub(crate) fn into_command_response_if(
        self,
        succeeded: impl Fn(&T) -> bool,
    ) -> Result<T, ApiError> {
        let failed = self.status.eq_ignore_ascii_case("ERROR");
        match self.command_response {
            Some(resp) if !failed && succeeded(&resp) => Ok(resp),
            _ => {
                let err = self.errors.into_api_error();
                log::warn!("Namecheap API rejected the request: {err}");
                Err(err)
            }
        }
    }

    pub(crate) fn into_command_response(self) -> Result<T, ApiError> {
        self.into_command_response_if(|_| true)
    }
}

/// Decodes a response body into the envelope around `T`.
pub(crate) fn decode<T: DeserializeOwned>(body: &str) -> Result<ApiResponse<T>, ClientError> {
    quick_xml::de::from_str(body).map_err(|e| {
        log::error!("failed to decode Namecheap response: {e}");
        ClientError::Decode(e)
    })
}

#[derive(Debug, Deserialize)]
pub(crate) struct SetHostsCommandResponse {
    #[serde(rename = "DomainDNSSetHostsResult", default)]
    pub(crate) result: SetHostsResult,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct SetHostsResult {
    #[serde(rename = "@IsSuccess", default)]
    pub(crate) is_success: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GetHostsCommandResponse {
    #[serde(rename = "DomainDNSGetHostsResult", default)]
    pub(crate) result: GetHostsResult,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct GetHostsResult {
    #[serde(rename = "host", alias = "Host", default)]
    pub(crate) hosts: Vec<Host>,
}
