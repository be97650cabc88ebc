//! Building, signing and executing API calls

pub mod client;
mod request;

use bova_env::{logger, Flow};
use common_utils::{
    consts,
    ext_traits::{ByteSliceExt, Encode},
    request::{Method, Request, RequestBuilder, RequestContent},
};
use error_stack::{report, ResultExt};
use masking::{Mask, PeekInterface};
use serde::{de::DeserializeOwned, Serialize};

use crate::{
    client::ClientConfig,
    consts::SIGNATURE_HEADER,
    errors::{ApiClientError, CustomResult},
    signature,
};

/// Request without a body to an already resolved `url`; these calls are not signed.
pub(crate) fn build_request(method: Method, url: &str) -> Request {
    RequestBuilder::new()
        .method(method)
        .url(url)
        .attach_default_headers()
        .build()
}

/// Request with a JSON body, signed over the exact bytes that are sent.
pub(crate) fn build_signed_json_request<T>(
    config: &ClientConfig,
    flow: Flow,
    method: Method,
    path: &str,
    payload: &T,
) -> CustomResult<Request, ApiClientError>
where
    T: Serialize + std::fmt::Debug,
{
    let body = payload
        .encode_to_vec()
        .change_context(ApiClientError::SerializationFailure)
        .attach_printable_lazy(|| format!("Flow: {flow}"))?;
    let signature = signature::calculate_signature(config.secret.peek(), &body);

    Ok(RequestBuilder::new()
        .method(method)
        .url(&config.endpoint(path))
        .attach_default_headers()
        .header(http::header::CONTENT_TYPE.as_str(), consts::APPLICATION_JSON)
        .headers(vec![(SIGNATURE_HEADER.to_string(), signature.into_masked())])
        .set_body(RequestContent::Json(body))
        .build())
}

/// Request with a `multipart/form-data` body; the transport sets the boundary.
pub(crate) fn build_form_request(
    config: &ClientConfig,
    method: Method,
    path: &str,
    form: reqwest::multipart::Form,
) -> Request {
    RequestBuilder::new()
        .method(method)
        .url(&config.endpoint(path))
        .attach_default_headers()
        .set_body(RequestContent::FormData(form))
        .build()
}

/// Send `request` once and decode a 200 response body into `Res`.
///
/// Any other status fails with [`ApiClientError::UnexpectedStatus`] without looking at the body.
pub(crate) async fn execute<Res>(
    config: &ClientConfig,
    flow: Flow,
    request: Request,
) -> CustomResult<Res, ApiClientError>
where
    Res: DeserializeOwned,
{
    let response = config
        .transport
        .send_request(request)
        .await
        .attach_printable_lazy(|| format!("Flow: {flow}"))?;

    if response.status_code != 200 {
        logger::debug!(status_code = response.status_code, %flow, "Unexpected status");
        return Err(report!(ApiClientError::UnexpectedStatus {
            status_code: response.status_code,
        })
        .attach_printable(format!("Flow: {flow}")));
    }

    response
        .response
        .parse_struct::<Res>(std::any::type_name::<Res>())
        .change_context(ApiClientError::DecodeFailure)
        .attach_printable_lazy(|| format!("Flow: {flow}"))
}
