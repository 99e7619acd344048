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

use crate::signer::RequestSigner;

// The client configuration for [crate::http::ReqwestClient].
pub type ClientConfig = gax::client_builder::internal::ClientConfig<RequestSigner>;

pub(crate) const LOGGING_VAR: &str = "OCI_RUST_LOGGING";

/// Describes the service a client talks to.
#[derive(Copy, Clone, Debug)]
pub struct ServiceInfo {
    /// The service name used in regional hostnames, e.g. `identity`.
    pub service_name: &'static str,
    /// The API version appended to every endpoint, e.g. `20160918`.
    pub api_version: &'static str,
    /// The version of the client library.
    pub client_version: &'static str,
}

// Returns true if the environment or client configuration enables tracing.
pub fn tracing_enabled(config: &ClientConfig) -> bool {
    if config.tracing {
        return true;
    }
    std::env::var(LOGGING_VAR)
        .map(|v| v == "true")
        .unwrap_or(false)
}
