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

//! Defines traits for retry policies and some common implementations.
//!
//! The client libraries can retry requests that fail due to transient errors
//! when the request is idempotent, that is, when it is safe to perform the
//! request more than once. Mutating requests become idempotent when they
//! carry an `opc-retry-token`: the service uses the token to detect and
//! discard duplicates.
//!
//! Retries are disabled unless the application configures a policy, either
//! as the client default or for a single request.
//!
//! # Example:
//! ```
//! # use oci_gax::*;
//! # use oci_gax::retry_policy::*;
//! use std::time::Duration;
//! let policy = DefaultRetryable
//!     .with_time_limit(Duration::from_secs(60))
//!     .with_attempt_limit(5);
//! ```

use crate::error::Error;
use crate::retry_result::RetryResult;
use std::sync::Arc;
use std::time::Duration;

/// The service error code returned when a resource is busy with another
/// operation. The request may succeed once the resource settles.
const INCORRECT_STATE: &str = "IncorrectState";

/// Determines how errors are handled in the retry loop.
///
/// Implementations of this trait determine if errors are retryable, and for
/// how long the retry loop may continue.
pub trait RetryPolicy: Send + Sync + std::fmt::Debug {
    /// Query the retry policy after an error.
    ///
    /// # Parameters
    /// * `loop_start` - when the retry loop started.
    /// * `attempt_count` - the number of attempts. This includes the initial
    ///   attempt. This method is called after the first attempt, so the
    ///   value is always non-zero.
    /// * `idempotent` - if `true` assume the operation is idempotent. Many
    ///   more errors are retryable on idempotent operations.
    /// * `error` - the last error when attempting the request.
    #[must_use = "the result of on_error() determines the retry loop behavior"]
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult;

    /// The remaining time in the retry policy.
    ///
    /// For policies based on time, this returns the remaining time in the
    /// policy. The retry loop uses this value to limit each attempt's timeout
    /// and to skip sleeps that outlast the policy. For policies that are not
    /// time based this returns `None`.
    fn remaining_time(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
    ) -> Option<Duration> {
        None
    }
}

/// A helper type to use [RetryPolicy] in client and request options.
#[derive(Clone, Debug)]
pub struct RetryPolicyArg(Arc<dyn RetryPolicy>);

impl<T> std::convert::From<T> for RetryPolicyArg
where
    T: RetryPolicy + 'static,
{
    fn from(value: T) -> Self {
        Self(Arc::new(value))
    }
}

impl std::convert::From<Arc<dyn RetryPolicy>> for RetryPolicyArg {
    fn from(value: Arc<dyn RetryPolicy>) -> Self {
        Self(value)
    }
}

impl From<RetryPolicyArg> for Arc<dyn RetryPolicy> {
    fn from(value: RetryPolicyArg) -> Arc<dyn RetryPolicy> {
        value.0
    }
}

/// Extension trait for [`RetryPolicy`]
pub trait RetryPolicyExt: RetryPolicy + Sized {
    /// Decorate a [`RetryPolicy`] to limit the total elapsed time in the retry
    /// loop.
    ///
    /// # Example
    /// ```
    /// # use oci_gax::retry_policy::*;
    /// use std::time::Duration;
    /// let policy = DefaultRetryable.with_time_limit(Duration::from_secs(10));
    /// ```
    fn with_time_limit(self, maximum_duration: Duration) -> LimitedElapsedTime<Self> {
        LimitedElapsedTime::custom(self, maximum_duration)
    }

    /// Decorate a [RetryPolicy] to limit the number of attempts.
    ///
    /// # Example
    /// ```
    /// # use oci_gax::retry_policy::*;
    /// let policy = DefaultRetryable.with_attempt_limit(3);
    /// ```
    fn with_attempt_limit(self, maximum_attempts: u32) -> LimitedAttemptCount<Self> {
        LimitedAttemptCount::custom(self, maximum_attempts)
    }
}

impl<T: RetryPolicy> RetryPolicyExt for T {}

/// The recommended retry policy.
///
/// Retries the errors classified as transient by [DefaultRetryable], for at
/// most 8 attempts and 600 seconds.
///
/// # Example
/// ```
/// # use oci_gax::retry_policy::*;
/// let policy = default_policy();
/// ```
pub fn default_policy() -> LimitedAttemptCount<LimitedElapsedTime<DefaultRetryable>> {
    DefaultRetryable
        .with_time_limit(Duration::from_secs(600))
        .with_attempt_limit(8)
}

/// Retries the errors OCI services document as transient.
///
/// The following errors are retryable, provided the request is idempotent:
/// * timeouts, and I/O errors where no response was received,
/// * HTTP `429`, `500`, `502`, `503`, and `504`,
/// * HTTP `409` with the `IncorrectState` service code.
///
/// Requests throttled with HTTP `429` are retried even if they are not
/// idempotent, as the service rejects them before processing.
///
/// This policy must be decorated to limit the number of attempts or the
/// duration of the retry loop.
#[derive(Clone, Debug)]
pub struct DefaultRetryable;

impl DefaultRetryable {
    fn is_transient_status(error: &Error, code: u16) -> bool {
        match code {
            500 | 502 | 503 | 504 => true,
            409 => error.status().is_some_and(|s| s.code == INCORRECT_STATE),
            _ => false,
        }
    }
}

impl RetryPolicy for DefaultRetryable {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        if error.is_timeout() || error.is_io() {
            return if idempotent {
                RetryResult::Continue(error)
            } else {
                RetryResult::Permanent(error)
            };
        }
        match error.http_status_code() {
            Some(429) => RetryResult::Continue(error),
            Some(code) if idempotent && Self::is_transient_status(&error, code) => {
                RetryResult::Continue(error)
            }
            _ => RetryResult::Permanent(error),
        }
    }
}

/// A retry policy that retries all errors.
///
/// This policy must be decorated to limit the number of attempts or the
/// duration of the retry loop.
#[derive(Clone, Debug)]
pub struct AlwaysRetry;

impl RetryPolicy for AlwaysRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Continue(error)
    }
}

/// A retry policy that never retries.
///
/// Useful as the inner policy in tests, and to document intent.
#[derive(Clone, Debug)]
pub struct NeverRetry;

impl RetryPolicy for NeverRetry {
    fn on_error(
        &self,
        _loop_start: std::time::Instant,
        _attempt_count: u32,
        _idempotent: bool,
        error: Error,
    ) -> RetryResult {
        RetryResult::Permanent(error)
    }
}

/// A retry policy decorator that limits the total time in the retry loop.
///
/// Once the loop exceeds its duration, this policy turns any [Continue]
/// decision into [Exhausted]. The inner policy decides before that.
///
/// [Continue]: RetryResult::Continue
/// [Exhausted]: RetryResult::Exhausted
#[derive(Debug)]
pub struct LimitedElapsedTime<P = DefaultRetryable>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_duration: Duration,
}

impl LimitedElapsedTime {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_duration: Duration) -> Self {
        Self {
            inner: DefaultRetryable,
            maximum_duration,
        }
    }
}

impl<P> LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_duration: Duration) -> Self {
        Self {
            inner,
            maximum_duration,
        }
    }

    fn error_if_exhausted(&self, loop_start: std::time::Instant, error: Error) -> RetryResult {
        let deadline = loop_start + self.maximum_duration;
        let now = tokio::time::Instant::now().into_std();
        if now < deadline {
            RetryResult::Continue(error)
        } else {
            RetryResult::Exhausted(error)
        }
    }
}

impl<P> RetryPolicy for LimitedElapsedTime<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Continue(e) => self.error_if_exhausted(loop_start, e),
            other => other,
        }
    }

    fn remaining_time(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
    ) -> Option<Duration> {
        let deadline = loop_start + self.maximum_duration;
        let remaining = deadline.saturating_duration_since(tokio::time::Instant::now().into_std());
        match self.inner.remaining_time(loop_start, attempt_count) {
            Some(inner) => Some(std::cmp::min(remaining, inner)),
            None => Some(remaining),
        }
    }
}

/// A retry policy decorator that limits the number of attempts.
///
/// Once the loop reaches `maximum_attempts` this policy turns any
/// [Continue] decision into [Exhausted]. With a limit of `K` the request is
/// attempted at most `K` times.
///
/// [Continue]: RetryResult::Continue
/// [Exhausted]: RetryResult::Exhausted
#[derive(Debug)]
pub struct LimitedAttemptCount<P = DefaultRetryable>
where
    P: RetryPolicy,
{
    inner: P,
    maximum_attempts: u32,
}

impl LimitedAttemptCount {
    /// Creates a new instance, with the default inner policy.
    pub fn new(maximum_attempts: u32) -> Self {
        Self {
            inner: DefaultRetryable,
            maximum_attempts,
        }
    }
}

impl<P> LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    /// Creates a new instance with a custom inner policy.
    pub fn custom(inner: P, maximum_attempts: u32) -> Self {
        Self {
            inner,
            maximum_attempts,
        }
    }
}

impl<P> RetryPolicy for LimitedAttemptCount<P>
where
    P: RetryPolicy,
{
    fn on_error(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
        idempotent: bool,
        error: Error,
    ) -> RetryResult {
        match self
            .inner
            .on_error(loop_start, attempt_count, idempotent, error)
        {
            RetryResult::Continue(e) if attempt_count >= self.maximum_attempts => {
                RetryResult::Exhausted(e)
            }
            other => other,
        }
    }

    fn remaining_time(
        &self,
        loop_start: std::time::Instant,
        attempt_count: u32,
    ) -> Option<Duration> {
        self.inner.remaining_time(loop_start, attempt_count)
    }
}
