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

//! Per request options.
//!
//! The client defaults are intended to work for most applications, but
//! applications may need to customize the behavior of some calls. For
//! example, change the timeout for a specific call, change its retry
//! configuration, or set an `if-match` precondition. The call builders
//! returned by each client implement the [RequestOptionsBuilder] trait where
//! applications can override these defaults.

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::collections::BTreeMap;
use std::sync::Arc;

/// The per-request retry policy override.
///
/// "Never mentioned" and "explicitly disabled" are different requests:
/// [Unset][RetryPolicySetting::Unset] defers to the client default policy,
/// while [Disabled][RetryPolicySetting::Disabled] turns retries off even if
/// the client has a default policy.
#[derive(Clone, Debug, Default)]
pub enum RetryPolicySetting {
    /// Use the client default policy, if any.
    #[default]
    Unset,
    /// Do not retry this request.
    Disabled,
    /// Use this policy for this request only.
    Policy(Arc<dyn RetryPolicy>),
}

impl RetryPolicySetting {
    /// Returns the policy governing a request, given the client default.
    ///
    /// `None` means the request is attempted exactly once.
    ///
    /// # Example
    /// ```
    /// # use oci_gax::options::RetryPolicySetting;
    /// # use oci_gax::retry_policy::{RetryPolicy, default_policy};
    /// # use std::sync::Arc;
    /// let default: Arc<dyn RetryPolicy> = Arc::new(default_policy());
    /// assert!(RetryPolicySetting::Unset.resolve(Some(&default)).is_some());
    /// assert!(RetryPolicySetting::Disabled.resolve(Some(&default)).is_none());
    /// ```
    pub fn resolve(
        &self,
        client_default: Option<&Arc<dyn RetryPolicy>>,
    ) -> Option<Arc<dyn RetryPolicy>> {
        match self {
            Self::Unset => client_default.cloned(),
            Self::Disabled => None,
            Self::Policy(p) => Some(p.clone()),
        }
    }

    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

impl<T: Into<RetryPolicyArg>> From<Option<T>> for RetryPolicySetting {
    /// `Some(policy)` overrides the default, `None` disables retries.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(p) => Self::Policy(p.into().into()),
            None => Self::Disabled,
        }
    }
}

/// A set of options configuring a single request.
///
/// Applications only use this type directly in mocks, where they may want
/// to verify their application has configured all the right request
/// parameters and options.
///
/// All other code uses this type indirectly, via the per-request builders.
#[derive(Clone, Debug, Default)]
pub struct RequestOptions {
    idempotent: Option<bool>,
    user_agent: Option<String>,
    attempt_timeout: Option<std::time::Duration>,
    retry_policy: RetryPolicySetting,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    request_id: Option<String>,
    retry_token: Option<String>,
    if_match: Option<String>,
    query_parameters: BTreeMap<String, String>,
}

impl RequestOptions {
    /// Treat the request as idempotent, or not.
    ///
    /// By default reads are idempotent, and so are mutating requests carrying
    /// an `opc-retry-token`.
    pub fn idempotent(&self) -> Option<bool> {
        self.idempotent
    }

    /// Treat the request underlying this options as idempotent.
    pub fn set_idempotency(&mut self, value: bool) {
        self.idempotent = Some(value);
    }

    pub(crate) fn set_default_idempotency(&mut self, default: bool) {
        self.idempotent.get_or_insert(default);
    }

    /// Prepends this prefix to the user agent header value.
    pub fn set_user_agent<T: Into<String>>(&mut self, v: T) {
        self.user_agent = Some(v.into());
    }

    /// Gets the current user-agent prefix.
    pub fn user_agent(&self) -> &Option<String> {
        &self.user_agent
    }

    /// Sets the per-attempt timeout.
    ///
    /// When using a retry loop, this affects the timeout for each attempt.
    /// The overall timeout for a request is set by the retry policy.
    pub fn set_attempt_timeout<T: Into<std::time::Duration>>(&mut self, v: T) {
        self.attempt_timeout = Some(v.into());
    }

    /// Gets the current per-attempt timeout.
    pub fn attempt_timeout(&self) -> &Option<std::time::Duration> {
        &self.attempt_timeout
    }

    /// Gets the retry policy override.
    pub fn retry_policy(&self) -> &RetryPolicySetting {
        &self.retry_policy
    }

    /// Sets the retry policy for this request only.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = RetryPolicySetting::Policy(v.into().into());
    }

    /// Disables retries for this request, even if the client has a default
    /// retry policy.
    pub fn disable_retries(&mut self) {
        self.retry_policy = RetryPolicySetting::Disabled;
    }

    /// Replaces the retry policy override.
    pub fn set_retry_policy_setting<V: Into<RetryPolicySetting>>(&mut self, v: V) {
        self.retry_policy = v.into();
    }

    /// Gets the backoff policy override.
    pub fn backoff_policy(&self) -> &Option<Arc<dyn BackoffPolicy>> {
        &self.backoff_policy
    }

    /// Sets the backoff policy configuration.
    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }

    /// The `opc-request-id` sent with the request, if any.
    pub fn request_id(&self) -> Option<&str> {
        self.request_id.as_deref()
    }

    /// Sets the `opc-request-id` header, used to correlate client and
    /// service logs.
    pub fn set_request_id<T: Into<String>>(&mut self, v: T) {
        self.request_id = Some(v.into());
    }

    /// The caller-supplied `opc-retry-token`, if any.
    pub fn retry_token(&self) -> Option<&str> {
        self.retry_token.as_deref()
    }

    /// Sets the `opc-retry-token` header.
    ///
    /// The token is sent unchanged with every attempt. Mutating requests
    /// without a caller-supplied token get a generated one.
    pub fn set_retry_token<T: Into<String>>(&mut self, v: T) {
        self.retry_token = Some(v.into());
    }

    /// The `if-match` precondition, if any.
    pub fn if_match(&self) -> Option<&str> {
        self.if_match.as_deref()
    }

    /// Sets the `if-match` precondition, typically an `etag` from a previous
    /// read.
    pub fn set_if_match<T: Into<String>>(&mut self, v: T) {
        self.if_match = Some(v.into());
    }

    /// The optional query parameters set on this request.
    pub fn query_parameters(&self) -> &BTreeMap<String, String> {
        &self.query_parameters
    }

    /// Sets an optional query parameter.
    ///
    /// Parameters the operation does not declare are ignored.
    pub fn set_query_parameter<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.query_parameters.insert(key.into(), value.into());
    }
}

/// Implementations of this trait provide setters to configure request options.
///
/// The client library provides a builder for each request. These builders
/// implement this trait.
pub trait RequestOptionsBuilder: internal::RequestBuilder {
    /// If `v` is `true`, treat the request as idempotent.
    fn with_idempotency(self, v: bool) -> Self;

    /// Set the user agent header.
    fn with_user_agent<V: Into<String>>(self, v: V) -> Self;

    /// Sets the per-attempt timeout.
    fn with_attempt_timeout<V: Into<std::time::Duration>>(self, v: V) -> Self;

    /// Sets the retry policy configuration for this request only.
    fn with_retry_policy<V: Into<RetryPolicyArg>>(self, v: V) -> Self;

    /// Disables retries for this request, even if the client has a default
    /// retry policy.
    fn with_retries_disabled(self) -> Self;

    /// Sets the backoff policy configuration.
    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(self, v: V) -> Self;

    /// Sets the `opc-request-id` header.
    fn with_request_id<V: Into<String>>(self, v: V) -> Self;

    /// Sets the `opc-retry-token` header.
    fn with_retry_token<V: Into<String>>(self, v: V) -> Self;

    /// Sets the `if-match` precondition.
    fn with_if_match<V: Into<String>>(self, v: V) -> Self;

    /// Sets an optional query parameter.
    fn with_query_parameter<K: Into<String>, V: Into<String>>(self, key: K, value: V) -> Self;
}

#[doc(hidden)]
pub mod internal {
    //! This module contains implementation details. It is not part of the
    //! public API. Types and functions in this module may be changed or removed
    //! without warnings. Applications should not use any types contained
    //! within.
    use super::RequestOptions;
    use crate::backoff_policy::BackoffPolicy;
    use crate::exponential_backoff::ExponentialBackoff;
    use crate::retry_policy::RetryPolicy;
    use std::sync::Arc;

    /// Simplify implementation of the [super::RequestOptionsBuilder] trait in
    /// generated code.
    pub trait RequestBuilder {
        fn request_options(&mut self) -> &mut RequestOptions;
    }

    pub fn set_default_idempotency(mut options: RequestOptions, default: bool) -> RequestOptions {
        options.set_default_idempotency(default);
        options
    }

    /// Picks the retry policy for a request.
    ///
    /// * No override: the client default, which may be `None`.
    /// * Retries explicitly disabled: `None`.
    /// * A per-request policy: that policy.
    pub fn resolve_retry_policy(
        options: &RequestOptions,
        client_default: Option<&Arc<dyn RetryPolicy>>,
    ) -> Option<Arc<dyn RetryPolicy>> {
        options.retry_policy().resolve(client_default)
    }

    /// Picks the backoff policy for a request.
    pub fn resolve_backoff_policy(
        options: &RequestOptions,
        client_default: Option<&Arc<dyn BackoffPolicy>>,
    ) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .clone()
            .or_else(|| client_default.cloned())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }
}

impl<T> RequestOptionsBuilder for T
where
    T: internal::RequestBuilder,
{
    fn with_idempotency(mut self, v: bool) -> Self {
        self.request_options().set_idempotency(v);
        self
    }

    fn with_user_agent<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_user_agent(v);
        self
    }

    fn with_attempt_timeout<V: Into<std::time::Duration>>(mut self, v: V) -> Self {
        self.request_options().set_attempt_timeout(v);
        self
    }

    fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_retry_policy(v);
        self
    }

    fn with_retries_disabled(mut self) -> Self {
        self.request_options().disable_retries();
        self
    }

    fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.request_options().set_backoff_policy(v);
        self
    }

    fn with_request_id<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_request_id(v);
        self
    }

    fn with_retry_token<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_retry_token(v);
        self
    }

    fn with_if_match<V: Into<String>>(mut self, v: V) -> Self {
        self.request_options().set_if_match(v);
        self
    }

    fn with_query_parameter<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.request_options().set_query_parameter(key, value);
        self
    }
}
