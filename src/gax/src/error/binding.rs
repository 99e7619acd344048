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

/// A failure to bind the caller's arguments to an operation.
///
/// These errors are detected before any request is sent. They are never
/// retried and are returned to the application unchanged.
///
/// # Example
/// ```
/// # use oci_gax::error::{BindingError, Error};
/// use std::error::Error as _;
/// let error = Error::binding(BindingError::Missing("userId".into()));
/// let detail = error.source().and_then(|e| e.downcast_ref::<BindingError>());
/// assert_eq!(detail, Some(&BindingError::Missing("userId".into())));
/// ```
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum BindingError {
    /// A required argument was not provided.
    #[error("missing required parameter `{0}`")]
    Missing(String),

    /// A required resource identifier was provided, but it is empty or only
    /// contains whitespace.
    #[error("parameter `{0}` must not be blank")]
    Blank(String),

    /// An enumerated option is not one of the values accepted by the service.
    #[error("invalid value `{value}` for `{name}`, must be one of {allowed:?}")]
    InvalidEnum {
        name: String,
        value: String,
        allowed: &'static [&'static str],
    },

    /// The operation does not take a request body, but one was provided.
    #[error("operation `{0}` does not accept a request body")]
    UnexpectedBody(String),

    /// The operation requires a request body, but none was provided.
    #[error("operation `{0}` requires a request body")]
    MissingBody(String),

    /// The path template references a placeholder with no matching argument.
    #[error("path template `{template}` references unknown placeholder `{name}`")]
    UnknownPlaceholder {
        template: &'static str,
        name: String,
    },
}

impl BindingError {
    /// The name of the offending parameter, if any.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::Missing(n) | Self::Blank(n) => Some(n),
            Self::InvalidEnum { name, .. } => Some(name),
            Self::UnknownPlaceholder { name, .. } => Some(name),
            Self::UnexpectedBody(_) | Self::MissingBody(_) => None,
        }
    }
}
