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

//! Declarative descriptions of service operations.
//!
//! Each operation in a service is described by a static [OperationSpec]:
//! its method, its path template, the arguments it requires, the optional
//! query parameters it accepts, and whether it takes a body. A single
//! generic builder ([crate::descriptor]) turns a spec, the application
//! arguments, and the request options into a request.

use crate::signer::SigningStrategy;
use std::collections::BTreeMap;

/// The HTTP methods used by OCI services.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    Get,
    Head,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Requests with these methods change state in the service and carry an
    /// `opc-retry-token` header.
    pub fn is_mutating(&self) -> bool {
        !matches!(self, Self::Get | Self::Head)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Head => "HEAD",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }
}

impl From<HttpMethod> for http::Method {
    fn from(value: HttpMethod) -> Self {
        match value {
            HttpMethod::Get => http::Method::GET,
            HttpMethod::Head => http::Method::HEAD,
            HttpMethod::Post => http::Method::POST,
            HttpMethod::Put => http::Method::PUT,
            HttpMethod::Patch => http::Method::PATCH,
            HttpMethod::Delete => http::Method::DELETE,
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a required argument goes in the request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    /// Substituted for `{placeholder}` in the path template.
    Path(&'static str),
    /// Sent as a query parameter with this name.
    Query(&'static str),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterKind {
    /// A resource identifier, must not be blank.
    Identifier,
    /// Any other value, must be present.
    Value,
}

/// A required argument.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub location: Location,
    pub kind: ParameterKind,
}

impl ParameterSpec {
    /// A resource identifier used in the path, the common case.
    pub const fn path_id(name: &'static str) -> Self {
        Self {
            name,
            location: Location::Path(name),
            kind: ParameterKind::Identifier,
        }
    }

    /// A required query parameter.
    pub const fn query(name: &'static str, kind: ParameterKind) -> Self {
        Self {
            name,
            location: Location::Query(name),
            kind,
        }
    }
}

/// An optional query parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct QuerySpec {
    pub name: &'static str,
    /// If set, the only values the service accepts.
    pub allowed: Option<&'static [&'static str]>,
}

impl QuerySpec {
    pub const fn any(name: &'static str) -> Self {
        Self {
            name,
            allowed: None,
        }
    }

    pub const fn one_of(name: &'static str, allowed: &'static [&'static str]) -> Self {
        Self {
            name,
            allowed: Some(allowed),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BodySpec {
    #[default]
    None,
    Optional,
    Required,
}

/// Describes one operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OperationSpec {
    /// The operation name, used in errors and tracing.
    pub name: &'static str,
    pub method: HttpMethod,
    /// The path relative to the endpoint, with `{name}` placeholders.
    pub path_template: &'static str,
    pub parameters: &'static [ParameterSpec],
    pub query: &'static [QuerySpec],
    pub body: BodySpec,
    /// The operation honors `if-match` preconditions.
    pub conditional: bool,
    /// The type of the response payload, `None` if the response has no body.
    pub response_type: Option<&'static str>,
    pub signing: SigningStrategy,
}

impl OperationSpec {
    /// Returns the placeholders in the path template, in order.
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        placeholders(self.path_template)
    }

    pub fn accepts_query(&self, name: &str) -> Option<&QuerySpec> {
        self.query.iter().find(|q| q.name == name)
    }
}

pub(crate) fn placeholders(template: &'static str) -> impl Iterator<Item = &'static str> {
    template.split('{').skip(1).filter_map(|s| s.split_once('}')).map(|(name, _)| name)
}

/// The arguments for one call.
///
/// Arguments are stored as strings, a value of `None` is the same as never
/// setting the argument.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Arguments {
    values: BTreeMap<&'static str, Option<String>>,
}

impl Arguments {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set<V: Into<String>>(mut self, name: &'static str, value: V) -> Self {
        self.values.insert(name, Some(value.into()));
        self
    }

    pub fn set_option<V: Into<String>>(mut self, name: &'static str, value: Option<V>) -> Self {
        self.values.insert(name, value.map(Into::into));
        self
    }

    pub fn insert<V: Into<String>>(&mut self, name: &'static str, value: Option<V>) {
        self.values.insert(name, value.map(Into::into));
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).and_then(|v| v.as_deref())
    }
}
