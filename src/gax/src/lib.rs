// Copyright 2024 Google LLC
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

//! OCI APIs helpers.
//!
//! This crate contains a number of types and functions used in the
//! implementation of the OCI Client Libraries for Rust: the error type,
//! retry and backoff policies, the retry loop, request options, and the
//! client builder.
//!
//! <div class="warning">
//! The modules marked as hidden in the documentation are <b>not</b> intended
//! for general use. We (the OCI Client Libraries for Rust team) control both
//! this crate and the client crates using them, and will change both if
//! needed.
//! </div>

/// An alias of [std::result::Result] where the error is always [crate::error::Error].
///
/// This is the result type used by all functions wrapping RPCs.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The core error types used by the clients.
pub mod error;

pub mod backoff_policy;
pub mod client_builder;
pub mod exponential_backoff;
pub mod options;
pub mod response;
pub mod retry_policy;
pub mod retry_result;
pub mod retry_token;

/// Helpers to extract required path parameters.
///
/// Path parameters are always required. The operation tables store arguments
/// as `Option<String>`; these helpers convert them to `Result<&str>` and
/// reject blank identifiers.
#[doc(hidden)]
pub mod path_parameter;

#[doc(hidden)]
pub mod query_parameter;

#[doc(hidden)]
pub mod retry_loop_internal;

#[cfg(test)]
pub(crate) mod mock_rng;
