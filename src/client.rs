use std::net::IpAddr;

use url::Url;

use crate::domain::split_domain;
use crate::record::{Host, Record};
use crate::response::{self, GetHostsCommandResponse, SetHostsCommandResponse};
use crate::transport::{Credentials, HttpTransport, Transport};
use crate::{ClientBuilderError, ClientError, Payload};

const DEFAULT_ENDPOINT: &str = "https://api.namecheap.com/xml.response";
const SANDBOX_ENDPOINT: &str = "https://api.sandbox.namecheap.com/xml.response";

const SET_HOSTS_COMMAND: &str = "namecheap.domains.dns.setHosts";
const GET_HOSTS_COMMAND: &str = "namecheap.domains.dns.getHosts";

/// Builder for a [Client] that handles default values.
pub struct ClientBuilder {
    endpoint: Option<Url>,
    sandbox: bool,
    api_user: Option<String>,
    api_key: Option<String>,
    username: Option<String>,
    client_ip: Option<IpAddr>,
}

impl ClientBuilder {
    fn new() -> Self {
        Self {
            endpoint: None,
            sandbox: false,
            api_user: None,
            api_key: None,
            username: None,
            client_ip: None,
        }
    }

    /// Sets the API endpoint to the one given.
    pub fn endpoint(mut self, endpoint: &Url) -> Self {
        self.endpoint = Some(endpoint.clone());
        self
    }

    /// In the case that `endpoint` is the Some variant, sets the API endpoint to it.
    pub fn endpoint_if_some(mut self, endpoint: Option<&Url>) -> Self {
        if let Some(endpoint) = endpoint {
            self.endpoint = Some(endpoint.clone());
        }
        self
    }

    /// Uses the sandbox API unless an endpoint is set explicitly.
    pub fn sandbox(mut self) -> Self {
        self.sandbox = true;
        self
    }

    /// Sets the API user to the one given.
    pub fn api_user(mut self, api_user: &str) -> Self {
        self.api_user = Some(api_user.to_string());
        self
    }

    /// Sets the API key to the one given.
    pub fn api_key(mut self, api_key: &str) -> Self {
        self.api_key = Some(api_key.to_string());
        self
    }

    /// Sets the user the requests act on behalf of.
    ///
    /// Defaults to the API user.
    pub fn username(mut self, username: &str) -> Self {
        self.username = Some(username.to_string());
        self
    }

    /// Sets the whitelisted IP address requests are made from.
    pub fn client_ip(mut self, client_ip: IpAddr) -> Self {
        self.client_ip = Some(client_ip);
        self
    }

    /// Builds a [Client] from the builder.
    ///
    /// In the case that no API endpoint is set, the default endpoint of
    /// `https://api.namecheap.com/xml.response` is used, or the sandbox
    /// endpoint if [ClientBuilder::sandbox] was called.
    ///
    /// # Errors
    /// - `MissingField` if a required field isn't added to the builder.
    /// - `UrlParse` if the default API endpoint fails to parse. This shouldn't happen.
    pub fn build(self) -> Result<Client, ClientBuilderError> {
        let endpoint = match self.endpoint {
            Some(endpoint) => endpoint,
            None if self.sandbox => SANDBOX_ENDPOINT.parse()?,
            None => DEFAULT_ENDPOINT.parse()?,
        };
        let api_user = self
            .api_user
            .ok_or_else(|| ClientBuilderError::MissingField("api_user".to_string()))?;
        let api_key = self
            .api_key
            .ok_or_else(|| ClientBuilderError::MissingField("api_key".to_string()))?;
        let client_ip = self
            .client_ip
            .ok_or_else(|| ClientBuilderError::MissingField("client_ip".to_string()))?;
        let username = self.username.unwrap_or_else(|| api_user.clone());

        let credentials = Credentials {
            api_user,
            api_key,
            username,
            client_ip,
        };

        Ok(Client::with_transport(HttpTransport::new(
            &endpoint,
            credentials,
        )))
    }
}

/// API client for managing the host records of a domain.
pub struct Client<T = HttpTransport> {
    transport: T,
}

impl Client {
    /// Returns a builder for a Client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }
}

impl<T: Transport> Client<T> {
    /// Creates a new Client that sends its requests through `transport`.
    pub fn with_transport(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Replaces all host records of `domain` with `records`.
    ///
    /// Returns the hosts the API holds afterwards, as retrieved by
    /// [Client::get_hosts].
    ///
    /// # Errors
    ///
    /// Will return a `Validation` error, without sending anything, if any
    /// record has a TTL outside of the allowed range.
    /// Will return an `Api` error containing every error the API reported if
    /// the update was rejected.
    pub fn set_hosts(&self, domain: &str, records: &[Record]) -> Result<Vec<Host>, ClientError> {
        let parts = split_domain(domain);

        for record in records {
            record.validate()?;
        }

        let payload = Payload::for_domain(SET_HOSTS_COMMAND, &parts).add_records(records);
        log::debug!(
            "setting {} host records for {}.{}",
            records.len(),
            parts.sld,
            parts.tld
        );

        let body = self.transport.send(payload)?;
        response::decode::<SetHostsCommandResponse>(&body)?
            .into_command_response_if(|resp| resp.result.is_success)?;

        self.get_hosts(domain)
    }

    /// Retrieves all host records of `domain`, exactly as the API reports them.
    pub fn get_hosts(&self, domain: &str) -> Result<Vec<Host>, ClientError> {
        let parts = split_domain(domain);

        let payload = Payload::for_domain(GET_HOSTS_COMMAND, &parts);

        let body = self.transport.send(payload)?;
        let resp = response::decode::<GetHostsCommandResponse>(&body)?.into_command_response()?;

        Ok(resp.result.hosts)
    }
}
