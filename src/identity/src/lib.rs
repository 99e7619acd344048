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

//! OCI Client Libraries for Rust - Identity and Access Management
//!
//! **WARNING:** this crate is under active development. We expect multiple
//! breaking changes in the upcoming releases. We welcome feedback about the
//! APIs, documentation, missing features, bugs, etc.
//!
//! This crate contains a client for the [Identity] service, which manages
//! users, groups, compartments, policies, tags, and identity domains.
//!
//! The operations are described in [operations], and sent with the generic
//! request builder in [builder]. Requests and responses use JSON payloads,
//! applications can use [serde_json::Value] or their own `serde` types.
//!
//! [identity]: https://docs.oracle.com/iaas/Content/Identity/home.htm

pub use gax::Result;
pub use gax::error::Error;

pub mod builder;
pub mod client;
pub mod model;
pub mod operations;
