use std::{fmt, time::Duration};

use bova_env::{logger, Level, Logger};
use common_utils::request::{Request, RequestContent};
use error_stack::{report, ResultExt};

use super::request::{to_reqwest_method, HeaderExt};
use crate::errors::{ApiClientError, CustomResult};

/// Raw response of a single HTTP exchange
#[derive(Clone, Debug)]
pub struct Response {
    pub headers: Option<http::HeaderMap>,
    pub response: bytes::Bytes,
    pub status_code: u16,
}

///
/// Executor of outbound requests.
///
/// Implementations send exactly one request per call and report the status they received
/// without judging it; status handling belongs to the caller.
///
#[async_trait::async_trait]
pub trait ApiClient: dyn_clone::DynClone
where
    Self: Send + Sync,
{
    /// Send `request` and wait for the complete response
    async fn send_request(&self, request: Request) -> CustomResult<Response, ApiClientError>;
}

dyn_clone::clone_trait_object!(ApiClient);

/// [`ApiClient`] backed by a [`reqwest::Client`]
#[derive(Clone, Debug)]
pub struct ReqwestApiClient {
    client: reqwest::Client,
}

impl ReqwestApiClient {
    /// Client with the given overall request timeout; redirects are not followed.
    pub fn new(timeout: Duration) -> CustomResult<Self, ApiClientError> {
        let client = reqwest::Client::builder()
            .redirect(reqwest::redirect::Policy::none())
            .timeout(timeout)
            .build()
            .change_context(ApiClientError::ClientConstructionFailed)
            .attach_printable("Failed to construct base client")?;

        Ok(Self { client })
    }

    /// Executor over a caller supplied client, with whatever timeout it was built with
    pub fn from_client(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait::async_trait]
impl ApiClient for ReqwestApiClient {
    async fn send_request(&self, request: Request) -> CustomResult<Response, ApiClientError> {
        let headers = request.headers.construct_header_map()?;

        let mut builder = self
            .client
            .request(to_reqwest_method(request.method), &request.url)
            .headers(headers);
        builder = match request.body {
            Some(RequestContent::Json(body)) => builder.body(body),
            Some(RequestContent::FormData(form)) => builder.multipart(form),
            None => builder,
        };

        let response = builder
            .send()
            .await
            .map_err(|error| {
                let message = if error.is_timeout() {
                    "request timed out".to_string()
                } else {
                    error.to_string()
                };
                report!(error).change_context(ApiClientError::TransportFailure(message))
            })
            .attach_printable("Unable to send request")?;

        let status_code = response.status().as_u16();
        let headers = Some(response.headers().to_owned());
        let response = response
            .bytes()
            .await
            .map_err(|error| {
                let message = error.to_string();
                report!(error).change_context(ApiClientError::TransportFailure(message))
            })
            .attach_printable("Error while waiting for response")?;

        Ok(Response {
            headers,
            response,
            status_code,
        })
    }
}

///
/// Decorator that logs every exchange of the wrapped [`ApiClient`].
///
/// Method and URL are logged before the call; status and latency, or the error, after it.
/// Headers and body are only logged at `DEBUG`, with masked headers hidden. The inner
/// result is returned untouched.
///
#[derive(Clone)]
pub struct LoggingApiClient {
    inner: Box<dyn ApiClient>,
    logger: Logger,
}

impl LoggingApiClient {
    /// Wrap `inner`, emitting events that pass `logger`
    pub fn new(inner: Box<dyn ApiClient>, logger: Logger) -> Self {
        Self { inner, logger }
    }
}

impl fmt::Debug for LoggingApiClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoggingApiClient")
            .field("logger", &self.logger)
            .finish_non_exhaustive()
    }
}

#[async_trait::async_trait]
impl ApiClient for LoggingApiClient {
    async fn send_request(&self, request: Request) -> CustomResult<Response, ApiClientError> {
        let method = request.method;
        let url = request.url.clone();

        if self.logger.is_enabled(Level::INFO) {
            logger::info!(%method, %url, "Sending request");
        }
        if self.logger.is_enabled(Level::DEBUG) {
            logger::debug!(headers = ?request.headers, body = ?request.body);
        }

        let started = std::time::Instant::now();
        let result = self.inner.send_request(request).await;
        let latency = started.elapsed();

        match &result {
            Ok(response) => {
                if self.logger.is_enabled(Level::INFO) {
                    logger::info!(
                        %method,
                        %url,
                        status_code = response.status_code,
                        ?latency,
                        "Received response"
                    );
                }
            }
            Err(error) => {
                if self.logger.is_enabled(Level::ERROR) {
                    logger::error!(%method, %url, ?latency, ?error, "Request failed");
                }
            }
        }

        result
    }
}
