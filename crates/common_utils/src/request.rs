//! Transport-agnostic description of an outbound HTTP request

use masking::Maskable;
use serde::{Deserialize, Serialize};

use crate::consts;

/// Header set of a request; masked values stay hidden when the request is logged
pub type Headers = std::collections::HashSet<(String, Maskable<String>)>;

/// HTTP method of a request
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize, Serialize, strum::Display)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE")]
pub enum Method {
    /// GET
    Get,
    /// POST
    Post,
    /// PUT
    Put,
}

/// Body of a request
pub enum RequestContent {
    /// Already serialized JSON; these are the exact bytes that were signed
    Json(Vec<u8>),
    /// `multipart/form-data` body
    FormData(reqwest::multipart::Form),
}

impl std::fmt::Debug for RequestContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Json(_) => "JsonRequestBody",
            Self::FormData(_) => "FormDataRequestBody",
        })
    }
}

impl RequestContent {
    /// The JSON bytes of the body, if it is a JSON body
    pub fn as_json_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Json(bytes) => Some(bytes.as_slice()),
            Self::FormData(_) => None,
        }
    }
}

/// Returns the default request headers as an array of tuples containing header names and values.
fn default_request_headers() -> [(String, Maskable<String>); 1] {
    use http::header;

    [(
        header::ACCEPT.to_string(),
        consts::APPLICATION_JSON.to_string().into(),
    )]
}

/// An outbound request ready to be handed to a transport
#[derive(Debug)]
pub struct Request {
    /// Absolute URL
    pub url: String,
    /// Headers
    pub headers: Headers,
    /// Method
    pub method: Method,
    /// Optional body
    pub body: Option<RequestContent>,
}

impl Request {
    /// Creates a new request with the specified HTTP method and URL.
    pub fn new(method: Method, url: &str) -> Self {
        Self {
            method,
            url: String::from(url),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    /// Sets the body of the request.
    pub fn set_body<T: Into<RequestContent>>(&mut self, body: T) {
        self.body.replace(body.into());
    }

    /// Adds a header, keeping masked values masked.
    pub fn add_header(&mut self, header: &str, value: Maskable<String>) {
        self.headers.insert((String::from(header), value));
    }

    /// Value of the first header with the given name, compared case-insensitively.
    pub fn get_header(&self, header: &str) -> Option<&Maskable<String>> {
        self.headers
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(header))
            .map(|(_, value)| value)
    }
}

/// Chained construction of a [`Request`]
#[derive(Debug)]
pub struct RequestBuilder {
    url: String,
    headers: Headers,
    method: Method,
    body: Option<RequestContent>,
}

impl RequestBuilder {
    /// Creates a builder for a GET request with no URL, headers or body.
    pub fn new() -> Self {
        Self {
            method: Method::Get,
            url: String::with_capacity(1024),
            headers: std::collections::HashSet::new(),
            body: None,
        }
    }

    /// Sets the URL.
    pub fn url(mut self, url: &str) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the method.
    pub fn method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Adds the headers every request carries.
    pub fn attach_default_headers(mut self) -> Self {
        self.headers.extend(default_request_headers());
        self
    }

    /// Adds a plain header.
    pub fn header(mut self, header: &str, value: &str) -> Self {
        self.headers.insert((header.into(), value.into()));
        self
    }

    /// Adds a list of headers, masked or plain.
    pub fn headers(mut self, headers: Vec<(String, Maskable<String>)>) -> Self {
        self.headers.extend(headers);
        self
    }

    /// Sets the body.
    pub fn set_body<T: Into<RequestContent>>(mut self, body: T) -> Self {
        self.body.replace(body.into());
        self
    }

    /// Builds the request.
    pub fn build(self) -> Request {
        Request {
            method: self.method,
            url: self.url,
            headers: self.headers,
            body: self.body,
        }
    }
}

impl Default for RequestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use masking::Mask;

    use super::{Method, RequestBuilder, RequestContent};

    #[test]
    fn builder_collects_headers_and_body() {
        let request = RequestBuilder::new()
            .method(Method::Post)
            .url("https://sandbox.example/p2p_transactions")
            .attach_default_headers()
            .header("Content-Type", "application/json")
            .headers(vec![("Signature".to_string(), "abc".to_string().into_masked())])
            .set_body(RequestContent::Json(b"{}".to_vec()))
            .build();

        assert_eq!(request.method, Method::Post);
        assert_eq!(request.url, "https://sandbox.example/p2p_transactions");
        assert_eq!(request.headers.len(), 3);
        assert_eq!(
            request.get_header("accept").map(|value| value.inner().as_str()),
            Some("application/json")
        );
        assert!(request
            .get_header("signature")
            .is_some_and(|value| value.is_masked()));
        assert_eq!(
            request.body.as_ref().and_then(RequestContent::as_json_bytes),
            Some(b"{}".as_slice())
        );
    }

    #[test]
    fn request_debug_output_hides_masked_headers() {
        let mut request = super::Request::new(Method::Put, "https://sandbox.example/x");
        request.add_header("Signature", "deadbeef".to_string().into_masked());
        let rendered = format!("{request:?}");

        assert!(!rendered.contains("deadbeef"));
        assert_eq!(Method::Put.to_string(), "PUT");
    }
}
