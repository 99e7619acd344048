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

//! Errors returned by the OCI client libraries.
//!
//! The client libraries distinguish between errors detected before a request
//! is sent (missing or malformed arguments, serialization problems, request
//! signing), errors in the transport (the connection is dropped, a proxy
//! rejects the request), and errors returned by the service itself.

mod binding;
mod core_error;
mod service_status;
pub use binding::*;
pub use core_error::*;
pub use service_status::*;
