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

//! Generates idempotency tokens for mutating requests.
//!
//! OCI services deduplicate `POST`, `PUT`, `PATCH`, and `DELETE` requests
//! carrying the same `opc-retry-token` header. The token must stay the same
//! across all the attempts of one logical call, so it is generated once, when
//! the request is built, and never per attempt.

use rand::RngCore;

/// The number of random bytes in each token.
const TOKEN_BYTES: usize = 32;

/// Returns a new token: 32 random bytes, hex encoded.
///
/// # Example
/// ```
/// let token = oci_gax::retry_token::generate();
/// assert_eq!(token.len(), 64);
/// ```
pub fn generate() -> String {
    generate_with(&mut rand::rng())
}

pub(crate) fn generate_with<R: RngCore + ?Sized>(rng: &mut R) -> String {
    let mut bytes = [0_u8; TOKEN_BYTES];
    rng.fill_bytes(&mut bytes);
    hex::encode(bytes)
}
