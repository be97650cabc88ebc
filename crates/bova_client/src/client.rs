//! Client entry point and its builder

use std::{fmt, sync::Arc, time::Duration};

use bova_env::{logger, Logger};
use common_utils::consts::REQUEST_TIME_OUT;
use error_stack::{report, ResultExt};
use masking::{ExposeInterface, PeekInterface, Secret};

use crate::{
    configs::settings::Settings,
    errors::{ApiClientError, CustomResult},
    mass_transaction::MassTransaction,
    p2p::P2P,
    services::{ApiClient, LoggingApiClient, ReqwestApiClient},
    signature,
};

/// Immutable configuration shared by every endpoint group of one client
pub(crate) struct ClientConfig {
    pub(crate) api_url: String,
    pub(crate) secret: Secret<String>,
    pub(crate) transport: Box<dyn ApiClient>,
    pub(crate) logger: Logger,
}

impl ClientConfig {
    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }

    /// `path` followed by `segments`, each percent-encoded as a single path segment.
    pub(crate) fn resource_endpoint(
        &self,
        path: &str,
        segments: &[&str],
    ) -> CustomResult<String, ApiClientError> {
        let mut url = reqwest::Url::parse(&self.endpoint(path))
            .change_context(ApiClientError::TransportFailure(
                "invalid request URL".to_string(),
            ))
            .attach_printable_lazy(|| format!("Unable to parse {}{path}", self.api_url))?;

        url.path_segments_mut()
            .map_err(|()| {
                report!(ApiClientError::TransportFailure(
                    "invalid request URL".to_string()
                ))
            })
            .attach_printable("Base URL cannot carry path segments")?
            .extend(segments);

        Ok(url.into())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("api_url", &self.api_url)
            .field("secret", &self.secret)
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}

///
/// Client of the Bova API.
///
/// Cheap to clone and safe to share between tasks; all clones use the same configuration and
/// transport.
///
#[derive(Clone, Debug)]
pub struct BovaApi {
    config: Arc<ClientConfig>,
    p2p: P2P,
    mass_transaction: MassTransaction,
}

impl BovaApi {
    /// Start configuring a client
    pub fn builder() -> BovaApiBuilder {
        BovaApiBuilder::new()
    }

    /// P2P deposit transactions and disputes
    pub fn p2p(&self) -> &P2P {
        &self.p2p
    }

    /// Payouts
    pub fn mass_transaction(&self) -> &MassTransaction {
        &self.mass_transaction
    }

    /// Base URL the endpoint paths are appended to
    pub fn api_url(&self) -> &str {
        &self.config.api_url
    }

    /// Logger used by the default transport
    pub fn logger(&self) -> Logger {
        self.config.logger
    }

    /// Check a signed payload received from the API, such as a callback body.
    pub fn verify_callback(&self, body: &[u8], signature: &str) -> bool {
        signature::verify_signature(self.config.secret.peek(), body, signature)
    }
}

///
/// Builder of [`BovaApi`].
///
/// Setters may be called in any order and repeatedly; the last value wins. `api_url` and
/// `secret` are mandatory. Without a transport, requests go through a [`ReqwestApiClient`]
/// with a 30 second timeout (see [`BovaApiBuilder::request_timeout`]) wrapped in a
/// [`LoggingApiClient`]. A supplied transport is used as is.
///
#[derive(Clone, Default)]
pub struct BovaApiBuilder {
    api_url: Option<String>,
    secret: Option<Secret<String>>,
    transport: Option<Box<dyn ApiClient>>,
    logger: Option<Logger>,
    request_timeout: Option<Duration>,
}

impl fmt::Debug for BovaApiBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BovaApiBuilder")
            .field("api_url", &self.api_url)
            .field("secret", &self.secret)
            .field("transport", &self.transport.as_ref().map(|_| "custom"))
            .field("logger", &self.logger)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

impl BovaApiBuilder {
    /// Empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder prefilled from loaded [`Settings`]
    pub fn from_settings(settings: &Settings) -> Self {
        let builder = Self::new()
            .api_url(settings.api_url.clone())
            .secret(settings.secret.clone().expose())
            .logger(Logger::from(&settings.log.console));

        match settings.request_timeout_secs {
            Some(secs) => builder.request_timeout(Duration::from_secs(secs)),
            None => builder,
        }
    }

    /// Base URL, e.g. `https://bova.example/v1`; a trailing `/` is ignored
    pub fn api_url(mut self, api_url: impl Into<String>) -> Self {
        self.api_url = Some(api_url.into());
        self
    }

    /// Shared secret used to sign request bodies
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(Secret::new(secret.into()));
        self
    }

    /// Custom executor for all requests
    pub fn transport(mut self, transport: impl ApiClient + 'static) -> Self {
        self.transport = Some(Box::new(transport));
        self
    }

    /// Send requests through a preconfigured [`reqwest::Client`]
    pub fn http_client(self, client: reqwest::Client) -> Self {
        self.transport(ReqwestApiClient::from_client(client))
    }

    /// Logger of the default transport
    pub fn logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Overall timeout of one request made by the default transport
    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    /// Validate the configuration and assemble the client
    pub fn build(self) -> CustomResult<BovaApi, ApiClientError> {
        let secret = self
            .secret
            .filter(|secret| !secret.peek().is_empty())
            .ok_or(ApiClientError::MissingConfiguration {
                field_name: "secret",
            })?;

        let api_url = self
            .api_url
            .map(|url| url.trim().trim_end_matches('/').to_owned())
            .filter(|url| !url.is_empty())
            .ok_or(ApiClientError::MissingConfiguration {
                field_name: "api_url",
            })?;

        let logger = self.logger.unwrap_or_default();

        let transport: Box<dyn ApiClient> = match self.transport {
            Some(transport) => transport,
            None => {
                let timeout = self
                    .request_timeout
                    .unwrap_or(Duration::from_secs(REQUEST_TIME_OUT));
                Box::new(LoggingApiClient::new(
                    Box::new(ReqwestApiClient::new(timeout)?),
                    logger,
                ))
            }
        };

        logger::debug!(%api_url, "Bova client configured");

        let config = Arc::new(ClientConfig {
            api_url,
            secret,
            transport,
            logger,
        });

        Ok(BovaApi {
            p2p: P2P::new(Arc::clone(&config)),
            mass_transaction: MassTransaction::new(Arc::clone(&config)),
            config,
        })
    }
}
