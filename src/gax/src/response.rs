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

//! Response types.
//!
//! This module contains types related to OCI service responses. Notably it
//! contains the `Response` type itself, with accessors for the headers OCI
//! services use to return metadata: `opc-request-id`, `opc-next-page`, and
//! `etag`.
//!
//! # Examples
//!
//! Creating a response for mocks
//!
//! ```
//! # use oci_gax::Result;
//! # use oci_gax::response::Response;
//! struct User {
//!   // ...
//! }
//!
//! fn make_mock_response(body: User) -> Result<Response<User>> {
//!     Ok(Response::from(body))
//! }
//! ```

/// The header carrying the service-assigned request identifier.
pub const REQUEST_ID: &str = "opc-request-id";
/// The header carrying the token for the next page in list operations.
pub const NEXT_PAGE: &str = "opc-next-page";
/// The header carrying the entity tag of the returned resource.
pub const ETAG: &str = "etag";

/// Represents an OCI service response.
///
/// A response from an OCI service consists of a body (potentially the unit
/// type), and some metadata, currently just headers.
#[derive(Clone, Debug)]
pub struct Response<T> {
    parts: Parts,
    body: T,
}

impl<T> Response<T> {
    /// Creates a response from the body, with empty metadata.
    pub fn from(body: T) -> Self {
        Self {
            body,
            parts: Parts::default(),
        }
    }

    /// Creates a response from the given parts.
    pub fn from_parts(parts: Parts, body: T) -> Self {
        Self { parts, body }
    }

    /// Returns the headers associated with this response.
    pub fn headers(&self) -> &http::HeaderMap<http::HeaderValue> {
        &self.parts.headers
    }

    /// Returns the body associated with this response.
    pub fn body(&self) -> &T {
        &self.body
    }

    /// Decomposes the response into its parts.
    pub fn into_parts(self) -> (Parts, T) {
        (self.parts, self.body)
    }

    /// Returns the body, discarding any metadata.
    pub fn into_body(self) -> T {
        self.body
    }

    /// The `opc-request-id` assigned to this request.
    pub fn request_id(&self) -> Option<&str> {
        self.header(REQUEST_ID)
    }

    /// The token to fetch the next page, if there are more results.
    pub fn next_page(&self) -> Option<&str> {
        self.header(NEXT_PAGE)
    }

    /// The entity tag of the returned resource.
    ///
    /// Use it as the `if-match` precondition in a later update.
    pub fn etag(&self) -> Option<&str> {
        self.header(ETAG)
    }

    fn header(&self, name: &str) -> Option<&str> {
        self.parts.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Component parts of a response.
#[derive(Clone, Debug, Default)]
#[non_exhaustive]
pub struct Parts {
    /// The HTTP headers or the gRPC metadata converted to HTTP headers.
    pub headers: http::HeaderMap<http::HeaderValue>,
}

impl Parts {
    /// Create a new instance.
    pub fn new() -> Self {
        Parts::default()
    }

    /// Set the headers.
    pub fn set_headers<V>(mut self, v: V) -> Self
    where
        V: Into<http::HeaderMap>,
    {
        self.headers = v.into();
        self
    }
}
