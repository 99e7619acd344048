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

//! The request signer contract.
//!
//! OCI requests are authenticated by signing a subset of the request headers
//! (and, for most operations, the body). The signing algorithm and the key
//! material are provided by the application through the [Signer] trait. The
//! transport calls the signer once per attempt, after all the headers are in
//! place, so every attempt carries a fresh signature.

use http::HeaderMap;
use std::sync::Arc;

pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Selects how a request is signed.
///
/// Each operation declares its strategy. Almost all operations use
/// [Standard][SigningStrategy::Standard].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SigningStrategy {
    /// Sign the headers and, for requests with a body, the body digest.
    #[default]
    Standard,
    /// Sign the headers, but not the body.
    ExcludeBody,
    /// Do not sign the request.
    Anonymous,
}

/// The parts of a request visible to a signer.
///
/// Signers may add or replace headers. They cannot change the method, the
/// URL, or the body.
#[derive(Debug)]
pub struct SignableRequest<'a> {
    pub method: &'a http::Method,
    pub url: &'a str,
    pub headers: &'a mut HeaderMap,
    pub body: Option<&'a [u8]>,
}

/// Signs outgoing requests.
pub trait Signer: Send + Sync + std::fmt::Debug {
    /// Sign `request` according to `strategy`.
    ///
    /// The transport never calls signers for
    /// [Anonymous][SigningStrategy::Anonymous] operations, implementations
    /// only receive the strategies that require a signature.
    fn sign(
        &self,
        strategy: SigningStrategy,
        request: &mut SignableRequest<'_>,
    ) -> Result<(), BoxError>;
}

/// A cloneable, type-erased [Signer].
///
/// This is the signer type stored in the client configuration.
#[derive(Clone, Debug)]
pub struct RequestSigner {
    inner: Arc<dyn Signer>,
}

impl<T> std::convert::From<T> for RequestSigner
where
    T: Signer + 'static,
{
    fn from(value: T) -> Self {
        Self {
            inner: Arc::new(value),
        }
    }
}

impl std::default::Default for RequestSigner {
    fn default() -> Self {
        Self::from(Anonymous)
    }
}

impl RequestSigner {
    /// Signs `request`, converting any failure into a signing error.
    pub fn sign(
        &self,
        strategy: SigningStrategy,
        request: &mut SignableRequest<'_>,
    ) -> gax::Result<()> {
        if strategy == SigningStrategy::Anonymous {
            return Ok(());
        }
        self.inner
            .sign(strategy, request)
            .map_err(gax::error::Error::signing)
    }
}

/// A signer that leaves requests unchanged.
///
/// Useful for public endpoints and for tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct Anonymous;

impl Signer for Anonymous {
    fn sign(&self, _: SigningStrategy, _: &mut SignableRequest<'_>) -> Result<(), BoxError> {
        Ok(())
    }
}

/// The error returned by [StaticHeaders::with_header].
#[derive(thiserror::Error, Debug)]
pub enum InvalidHeader {
    #[error("invalid header name: {0}")]
    Name(#[from] http::header::InvalidHeaderName),
    #[error("invalid header value: {0}")]
    Value(#[from] http::header::InvalidHeaderValue),
}

/// A signer that adds a fixed set of headers to each request.
///
/// Applications use this for pre-computed credentials, such as a delegation
/// token obtained out of band.
#[derive(Clone, Debug, Default)]
pub struct StaticHeaders {
    headers: HeaderMap,
}

impl StaticHeaders {
    pub fn new(headers: HeaderMap) -> Self {
        Self { headers }
    }

    /// Adds a header, validating its name and value.
    pub fn with_header<K: AsRef<str>, V: AsRef<str>>(
        mut self,
        name: K,
        value: V,
    ) -> Result<Self, InvalidHeader> {
        let name = http::HeaderName::from_bytes(name.as_ref().as_bytes())?;
        let value = http::HeaderValue::from_str(value.as_ref())?;
        self.headers.insert(name, value);
        Ok(self)
    }
}

impl Signer for StaticHeaders {
    fn sign(&self, _: SigningStrategy, request: &mut SignableRequest<'_>) -> Result<(), BoxError> {
        for (name, value) in self.headers.iter() {
            request.headers.insert(name.clone(), value.clone());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use test_case::test_case;

    fn request_parts() -> (http::Method, HeaderMap) {
        (http::Method::POST, HeaderMap::new())
    }

    #[test_case(SigningStrategy::Standard, true)]
    #[test_case(SigningStrategy::ExcludeBody, true)]
    #[test_case(SigningStrategy::Anonymous, false)]
    fn static_headers(strategy: SigningStrategy, want: bool) -> anyhow::Result<()> {
        let signer = RequestSigner::from(
            StaticHeaders::default().with_header("authorization", "Signature abc")?,
        );
        let (method, mut headers) = request_parts();
        let mut request = SignableRequest {
            method: &method,
            url: "https://identity.us-ashburn-1.oraclecloud.com/20160918/users",
            headers: &mut headers,
            body: Some(b"{}"),
        };
        signer.sign(strategy, &mut request)?;
        let got = headers.get("authorization").and_then(|v| v.to_str().ok());
        assert_eq!(got.is_some(), want, "{headers:?}");
        if want {
            assert_eq!(got, Some("Signature abc"));
        }
        Ok(())
    }

    #[test]
    fn static_headers_invalid() {
        let err = StaticHeaders::default().with_header("bad header", "value");
        assert!(matches!(err, Err(InvalidHeader::Name(_))), "{err:?}");
        let err = StaticHeaders::default().with_header("x-good", "bad\nvalue");
        assert!(matches!(err, Err(InvalidHeader::Value(_))), "{err:?}");
    }

    #[test]
    fn anonymous() -> anyhow::Result<()> {
        let signer = RequestSigner::default();
        let (method, mut headers) = request_parts();
        let mut request = SignableRequest {
            method: &method,
            url: "https://example.com/",
            headers: &mut headers,
            body: None,
        };
        signer.sign(SigningStrategy::Standard, &mut request)?;
        assert!(headers.is_empty(), "{headers:?}");
        Ok(())
    }

    #[derive(Debug)]
    struct Failing;
    impl Signer for Failing {
        fn sign(&self, _: SigningStrategy, _: &mut SignableRequest<'_>) -> Result<(), BoxError> {
            Err("key file not found".into())
        }
    }

    #[test]
    fn failure_is_signing_error() {
        let signer = RequestSigner::from(Failing);
        let (method, mut headers) = request_parts();
        let mut request = SignableRequest {
            method: &method,
            url: "https://example.com/",
            headers: &mut headers,
            body: None,
        };
        let err = signer
            .sign(SigningStrategy::Standard, &mut request)
            .unwrap_err();
        assert!(err.is_signing(), "{err:?}");
        let source = err.source().map(|e| e.to_string());
        assert_eq!(source.as_deref(), Some("key file not found"));
    }

    #[derive(Debug, Default)]
    struct Counting(AtomicUsize);
    impl Signer for Counting {
        fn sign(&self, _: SigningStrategy, _: &mut SignableRequest<'_>) -> Result<(), BoxError> {
            self.0.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    #[test_case(SigningStrategy::Standard, 1)]
    #[test_case(SigningStrategy::ExcludeBody, 1)]
    #[test_case(SigningStrategy::Anonymous, 0)]
    fn anonymous_skips_signer(strategy: SigningStrategy, want: usize) -> anyhow::Result<()> {
        let counting = Arc::new(Counting::default());
        let signer = RequestSigner {
            inner: counting.clone(),
        };
        let (method, mut headers) = request_parts();
        let mut request = SignableRequest {
            method: &method,
            url: "https://example.com/",
            headers: &mut headers,
            body: None,
        };
        signer.sign(strategy, &mut request)?;
        assert_eq!(counting.0.load(Ordering::SeqCst), want);
        Ok(())
    }
}
