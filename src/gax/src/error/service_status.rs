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

use serde::{Deserialize, Serialize};

/// The error payload returned by OCI services.
///
/// OCI services report failures with a non-2xx HTTP status code and a JSON
/// object containing a machine-readable `code` (e.g. `NotAuthorizedOrNotFound`,
/// `IncorrectState`) and a human-readable `message`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[non_exhaustive]
pub struct ServiceStatus {
    /// A short, machine-readable error code.
    pub code: String,
    /// A human-readable description of the problem.
    pub message: String,
}

impl ServiceStatus {
    /// Sets the value of [code][ServiceStatus::code].
    pub fn set_code<T: Into<String>>(mut self, v: T) -> Self {
        self.code = v.into();
        self
    }

    /// Sets the value of [message][ServiceStatus::message].
    pub fn set_message<T: Into<String>>(mut self, v: T) -> Self {
        self.message = v.into();
        self
    }
}

impl TryFrom<&bytes::Bytes> for ServiceStatus {
    type Error = serde_json::Error;

    fn try_from(value: &bytes::Bytes) -> Result<Self, Self::Error> {
        let status = serde_json::from_slice::<ServiceStatus>(value)?;
        if status.code.is_empty() {
            return Err(serde::de::Error::missing_field("code"));
        }
        Ok(status)
    }
}
