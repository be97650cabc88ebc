use std::str::FromStr;

use common_utils::request::{Headers, Method};
use error_stack::ResultExt;
use masking::{Maskable, PeekInterface};
use reqwest::header::{HeaderMap, HeaderName, HeaderValue};

use crate::errors::{ApiClientError, CustomResult};

pub(super) trait HeaderExt {
    fn construct_header_map(self) -> CustomResult<HeaderMap, ApiClientError>;
}

impl HeaderExt for Headers {
    fn construct_header_map(self) -> CustomResult<HeaderMap, ApiClientError> {
        self.into_iter().try_fold(
            HeaderMap::new(),
            |mut header_map, (header_name, header_value)| {
                let name = HeaderName::from_str(&header_name)
                    .change_context(ApiClientError::TransportFailure(format!(
                        "invalid header name {header_name:?}"
                    )))?;
                let value = match header_value {
                    Maskable::Masked(value) => HeaderValue::from_str(value.peek()).map(|mut h| {
                        h.set_sensitive(true);
                        h
                    }),
                    Maskable::Normal(value) => HeaderValue::from_str(&value),
                }
                .change_context(ApiClientError::TransportFailure(format!(
                    "invalid value for header {header_name:?}"
                )))?;
                header_map.append(name, value);
                Ok(header_map)
            },
        )
    }
}

pub(super) fn to_reqwest_method(method: Method) -> reqwest::Method {
    match method {
        Method::Get => reqwest::Method::GET,
        Method::Post => reqwest::Method::POST,
        Method::Put => reqwest::Method::PUT,
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use common_utils::request::Headers;
    use masking::Mask;

    use super::HeaderExt;

    #[test]
    fn masked_headers_are_marked_sensitive() {
        let mut headers = Headers::new();
        headers.insert(("Signature".to_string(), "abc".to_string().into_masked()));
        headers.insert(("Accept".to_string(), "application/json".into()));

        let map = headers.construct_header_map().unwrap();

        assert!(map.get("signature").unwrap().is_sensitive());
        assert!(!map.get("accept").unwrap().is_sensitive());
        assert_eq!(map.get("signature").unwrap(), "abc");
    }

    #[test]
    fn invalid_header_value_is_a_transport_failure() {
        let mut headers = Headers::new();
        headers.insert(("X-Bad".to_string(), "line\nbreak".into()));

        let error = headers.construct_header_map().unwrap_err();
        assert!(matches!(
            error.current_context(),
            crate::errors::ApiClientError::TransportFailure(_)
        ));
    }
}
