// Copyright 2025 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::ServiceStatus;
use http::HeaderMap;
use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// The header OCI services use to identify each request.
const REQUEST_ID_HEADER: &str = "opc-request-id";

/// The core error returned by all client libraries.
///
/// The client libraries report errors from multiple sources. The service may
/// return an error, the transport may be unable to complete the request, an
/// attempt may exceed its timeout, or the library may be unable to format
/// the request due to missing or invalid application inputs.
///
/// Most applications just return or log the error. Applications that need
/// more detail can use the predicates and accessors on this type, or query
/// the error [source][std::error::Error::source].
///
/// # Example
/// ```
/// use oci_gax::error::Error;
/// match example_function() {
///     Err(e) if e.status().is_some() => {
///         println!("service error {e}, request id {:?}", e.request_id());
///     },
///     Err(e) if e.is_timeout() => { println!("not enough time {e}"); },
///     Err(e) => { println!("some other error {e}"); },
///     Ok(_) => { println!("success, how boring"); },
/// }
///
/// fn example_function() -> Result<String, Error> {
///     # use oci_gax::error::ServiceStatus;
///     # Err(Error::service(ServiceStatus::default().set_code("NotAuthorizedOrNotFound")))
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

impl Error {
    /// Creates an error with the information returned by an OCI service.
    ///
    /// # Example
    /// ```
    /// use oci_gax::error::{Error, ServiceStatus};
    /// let status = ServiceStatus::default().set_code("NotAuthorizedOrNotFound");
    /// let error = Error::service(status.clone());
    /// assert_eq!(error.status(), Some(&status));
    /// ```
    pub fn service(status: ServiceStatus) -> Self {
        Self::service_with_http_metadata(status, None, None)
    }

    /// Creates a service error including the HTTP status code and headers.
    pub fn service_with_http_metadata(
        status: ServiceStatus,
        status_code: Option<u16>,
        headers: Option<HeaderMap>,
    ) -> Self {
        let details = ServiceDetails {
            status,
            status_code,
            headers,
        };
        Self {
            kind: ErrorKind::Service(Box::new(details)),
            source: None,
        }
    }

    /// Creates an error representing a timeout.
    ///
    /// # Example
    /// ```
    /// use std::error::Error as _;
    /// use oci_gax::error::Error;
    /// let error = Error::timeout("simulated timeout");
    /// assert!(error.is_timeout());
    /// assert!(error.source().is_some());
    /// ```
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The attempt could not be completed before its timeout.
    ///
    /// This is always a client-side generated error. The request may or may
    /// not have reached the service, and it may or may not complete there.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing an exhausted policy.
    ///
    /// The retry loop never creates these errors, it returns the last error
    /// reported by the service. Applications and custom policies may use them.
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Exhausted,
            source: Some(source.into()),
        }
    }

    /// A policy was exhausted.
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// Creates an error representing a deserialization problem.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized.
    ///
    /// This is always a client-side generated error. The request completed in
    /// the service, it may not be safe to send it again if it mutates state.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing a serialization problem.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request could not be serialized.
    ///
    /// This is always detected before the request is made, and it is never
    /// transient.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Cannot bind the application arguments to a request.
    ///
    /// The source is typically a [BindingError][super::BindingError].
    pub fn binding<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Binding,
            source: Some(source.into()),
        }
    }

    /// A required argument was missing, blank, or had an invalid value.
    ///
    /// # Troubleshooting
    ///
    /// This indicates a problem in the application. The error source names
    /// the parameter and the problem.
    pub fn is_binding(&self) -> bool {
        matches!(&self.kind, ErrorKind::Binding)
    }

    /// Creates an error representing a failure to sign the request.
    pub fn signing<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Signing,
            source: Some(source.into()),
        }
    }

    /// The request signer could not sign the request.
    ///
    /// # Troubleshooting
    ///
    /// Typically this indicates a misconfigured signer, for example a missing
    /// key or an expired delegation token.
    pub fn is_signing(&self) -> bool {
        matches!(self.kind, ErrorKind::Signing)
    }

    /// A full HTTP error response that could not be parsed as a service error.
    pub fn http(status_code: u16, headers: HeaderMap, payload: bytes::Bytes) -> Self {
        let details = TransportDetails {
            status_code: Some(status_code),
            headers: Some(headers),
            payload: Some(payload),
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: None,
        }
    }

    /// A problem in the transport layer without a full HTTP response.
    ///
    /// Examples include connection failures, or a connection dropped before
    /// the response is received.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// The request failed without receiving any HTTP response.
    ///
    /// # Troubleshooting
    ///
    /// Most often, the solution is to use the right retry policy. These
    /// errors are retryable when the request is idempotent.
    pub fn is_io(&self) -> bool {
        matches!(
        &self.kind,
        ErrorKind::Transport(d) if matches!(**d, TransportDetails {
            status_code: None,
            headers: None,
            payload: None,
        }))
    }

    /// A problem reported by the transport layer with response headers.
    pub fn transport<T: Into<BoxError>>(headers: HeaderMap, source: T) -> Self {
        let details = TransportDetails {
            status_code: None,
            headers: Some(headers),
            payload: None,
        };
        Self {
            kind: ErrorKind::Transport(Box::new(details)),
            source: Some(source.into()),
        }
    }

    /// The transport layer reported the problem.
    ///
    /// Errors generated by a proxy or load balancer, before the service sends
    /// a well-formed error payload, are also transport errors.
    pub fn is_transport(&self) -> bool {
        matches!(&self.kind, ErrorKind::Transport(_))
    }

    /// An error that does not fit any other category.
    pub fn other<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Other,
            source: Some(source.into()),
        }
    }

    /// The [ServiceStatus] payload associated with this error.
    ///
    /// # Example
    /// ```
    /// use oci_gax::error::{Error, ServiceStatus};
    /// let error = Error::service(ServiceStatus::default().set_code("IncorrectState"));
    /// if let Some(status) = error.status() {
    ///     if status.code == "IncorrectState" {
    ///         println!("the resource is busy, {}", status.message);
    ///     }
    /// }
    /// ```
    pub fn status(&self) -> Option<&ServiceStatus> {
        match &self.kind {
            ErrorKind::Service(d) => Some(&d.status),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Transport(d) => d.status_code,
            ErrorKind::Service(d) => d.status_code,
            _ => None,
        }
    }

    /// The HTTP headers, if any, associated with this error.
    pub fn http_headers(&self) -> Option<&HeaderMap> {
        match &self.kind {
            ErrorKind::Transport(d) => d.headers.as_ref(),
            ErrorKind::Service(d) => d.headers.as_ref(),
            _ => None,
        }
    }

    /// The HTTP payload, if any, associated with this error.
    ///
    /// Only set when the payload could not be parsed as a [ServiceStatus].
    pub fn http_payload(&self) -> Option<&bytes::Bytes> {
        match &self.kind {
            ErrorKind::Transport(d) => d.payload.as_ref(),
            _ => None,
        }
    }

    /// The `opc-request-id` returned by the service, if any.
    ///
    /// Include this value when contacting Oracle support about a failed
    /// request.
    pub fn request_id(&self) -> Option<&str> {
        self.http_headers()
            .and_then(|h| h.get(REQUEST_ID_HEADER))
            .and_then(|v| v.to_str().ok())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (&self.kind, &self.source) {
            (ErrorKind::Binding, Some(e)) => {
                write!(f, "cannot bind the arguments to the request: {e}")
            }
            (ErrorKind::Serialization, Some(e)) => write!(f, "cannot serialize the request {e}"),
            (ErrorKind::Deserialization, Some(e)) => {
                write!(f, "cannot deserialize the response {e}")
            }
            (ErrorKind::Signing, Some(e)) => write!(f, "cannot sign the request {e}"),
            (ErrorKind::Timeout, Some(e)) => {
                write!(f, "the attempt exceeded its timeout {e}")
            }
            (ErrorKind::Exhausted, Some(e)) => write!(f, "{e}"),
            (ErrorKind::Transport(details), _) => details.display(self.source(), f),
            (ErrorKind::Service(d), _) => match d.status_code {
                Some(code) => write!(
                    f,
                    "the service reports a [{code}] error with code {} described as: {}",
                    d.status.code, d.status.message
                ),
                None => write!(
                    f,
                    "the service reports an error with code {} described as: {}",
                    d.status.code, d.status.message
                ),
            },
            (ErrorKind::Other, Some(e)) => {
                write!(f, "an unclassified problem making a request: {e}")
            }
            (_, None) => unreachable!("no constructor allows this"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error))
    }
}

/// The type of error held by an [Error] instance.
#[derive(Debug)]
enum ErrorKind {
    Binding,
    Serialization,
    Deserialization,
    Signing,
    Timeout,
    Exhausted,
    Transport(Box<TransportDetails>),
    Service(Box<ServiceDetails>),
    Other,
}

#[derive(Debug)]
struct TransportDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    payload: Option<bytes::Bytes>,
}

impl TransportDetails {
    fn display(
        &self,
        source: Option<&(dyn StdError + 'static)>,
        f: &mut std::fmt::Formatter<'_>,
    ) -> std::fmt::Result {
        match (source, self) {
            (
                _,
                TransportDetails {
                    status_code: Some(code),
                    payload: Some(p),
                    ..
                },
            ) => {
                if let Ok(message) = std::str::from_utf8(p.as_ref()) {
                    write!(f, "the HTTP transport reports a [{code}] error: {message}")
                } else {
                    write!(f, "the HTTP transport reports a [{code}] error: {p:?}")
                }
            }
            (Some(source), _) => write!(f, "the transport reports an error: {source}"),
            (None, _) => unreachable!("no Error constructor allows this"),
        }
    }
}

#[derive(Debug)]
struct ServiceDetails {
    status_code: Option<u16>,
    headers: Option<HeaderMap>,
    status: ServiceStatus,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BindingError;
    use std::error::Error as StdError;

    static_assertions::assert_impl_all!(Error: Send, Sync, std::fmt::Debug, StdError);

    fn headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(
            "content-type",
            http::HeaderValue::from_static("application/json"),
        );
        headers.insert(
            REQUEST_ID_HEADER,
            http::HeaderValue::from_static("ABCD/1234"),
        );
        headers
    }

    #[test]
    fn service() {
        let status = ServiceStatus::default()
            .set_code("NotAuthorizedOrNotFound")
            .set_message("not found");
        let error = Error::service(status.clone());
        assert_eq!(error.status(), Some(&status));
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert!(error.request_id().is_none(), "{error:?}");
        assert!(error.source().is_none(), "{error:?}");
        assert!(
            error.to_string().contains("NotAuthorizedOrNotFound"),
            "{error}"
        );
    }

    #[test]
    fn service_with_http_metadata() {
        let status = ServiceStatus::default()
            .set_code("IncorrectState")
            .set_message("busy");
        let error = Error::service_with_http_metadata(status.clone(), Some(409), Some(headers()));
        assert_eq!(error.status(), Some(&status));
        assert_eq!(error.http_status_code(), Some(409));
        assert_eq!(error.http_headers(), Some(&headers()));
        assert_eq!(error.request_id(), Some("ABCD/1234"));
        assert!(error.http_payload().is_none(), "{error:?}");
        assert!(error.to_string().contains("[409]"), "{error}");
        assert!(!error.is_transport(), "{error:?}");
    }

    #[test]
    fn timeout() {
        let error = Error::timeout("simulated");
        assert!(error.is_timeout(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.source().is_some(), "{error:?}");
        assert!(error.to_string().contains("simulated"), "{error}");
    }

    #[test]
    fn exhausted() {
        let error = Error::exhausted("too many attempts");
        assert!(error.is_exhausted(), "{error:?}");
        assert_eq!(error.to_string(), "too many attempts");
    }

    #[test]
    fn binding() {
        let error = Error::binding(BindingError::Blank("userId".into()));
        assert!(error.is_binding(), "{error:?}");
        let got = error
            .source()
            .and_then(|e| e.downcast_ref::<BindingError>());
        assert_eq!(got, Some(&BindingError::Blank("userId".into())));
        assert!(error.to_string().contains("userId"), "{error}");
    }

    #[test]
    fn ser_deser() {
        let error = Error::ser("bad input");
        assert!(error.is_serialization(), "{error:?}");
        assert!(!error.is_deserialization(), "{error:?}");
        let error = Error::deser("bad output");
        assert!(error.is_deserialization(), "{error:?}");
        assert!(!error.is_serialization(), "{error:?}");
    }

    #[test]
    fn signing() {
        let error = Error::signing("no key");
        assert!(error.is_signing(), "{error:?}");
        assert!(error.to_string().contains("no key"), "{error}");
    }

    #[test]
    fn http() {
        let payload = bytes::Bytes::from_static(b"bad gateway");
        let error = Error::http(502, headers(), payload.clone());
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.status().is_none(), "{error:?}");
        assert_eq!(error.http_status_code(), Some(502));
        assert_eq!(error.http_payload(), Some(&payload));
        assert_eq!(error.request_id(), Some("ABCD/1234"));
        assert!(error.to_string().contains("bad gateway"), "{error}");
        assert!(error.to_string().contains("502"), "{error}");
    }

    #[test]
    fn http_binary() {
        let payload = bytes::Bytes::from_static(&[0xFF, 0xFF]);
        let error = Error::http(500, HeaderMap::new(), payload.clone());
        assert!(
            error.to_string().contains(&format!("{payload:?}")),
            "{error}"
        );
    }

    #[test]
    fn io() {
        let error = Error::io("connection reset");
        assert!(error.is_transport(), "{error:?}");
        assert!(error.is_io(), "{error:?}");
        assert!(error.http_headers().is_none(), "{error:?}");
        assert!(error.to_string().contains("connection reset"), "{error}");
    }

    #[test]
    fn transport() {
        let error = Error::transport(headers(), "proxy reset");
        assert!(error.is_transport(), "{error:?}");
        assert!(!error.is_io(), "{error:?}");
        assert!(error.http_status_code().is_none(), "{error:?}");
        assert_eq!(error.http_headers(), Some(&headers()));
    }

    #[test]
    fn other() {
        let error = Error::other("something else");
        assert!(error.to_string().contains("something else"), "{error}");
        assert!(!error.is_transport(), "{error:?}");
    }
}
