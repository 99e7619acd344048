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

use crate::descriptor::CallDescriptor;
use crate::options::{ClientConfig, ServiceInfo};
use crate::signer::{RequestSigner, SignableRequest};
use gax::Result;
use gax::backoff_policy::BackoffPolicy;
use gax::client_builder::Error as BuilderError;
use gax::error::{Error, ServiceStatus};
use gax::options::RequestOptions;
use gax::options::internal::{resolve_backoff_policy, resolve_retry_policy};
use gax::response::{Parts, Response};
use gax::retry_policy::RetryPolicy;
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;

#[derive(Clone, Debug)]
pub struct ReqwestClient {
    inner: reqwest::Client,
    signer: RequestSigner,
    endpoint: String,
    user_agent: String,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    attempt_timeout: Option<Duration>,
    tracing: bool,
}

impl ReqwestClient {
    pub async fn new(
        config: ClientConfig,
        info: &ServiceInfo,
    ) -> gax::client_builder::Result<Self> {
        let tracing = crate::options::tracing_enabled(&config);
        let endpoint = crate::region::endpoint(
            config.endpoint.as_deref(),
            config.region.as_deref(),
            info.service_name,
            info.api_version,
        )?;
        let mut builder = reqwest::Client::builder();
        if let Some(proxy) = &config.proxy {
            let mut p = reqwest::Proxy::all(&proxy.address).map_err(BuilderError::transport)?;
            if let Some(username) = &proxy.username {
                p = p.basic_auth(username, proxy.password.as_deref().unwrap_or_default());
            }
            builder = builder.proxy(p);
        }
        let inner = builder.build().map_err(BuilderError::transport)?;
        Ok(Self {
            inner,
            signer: config.signer.unwrap_or_default(),
            endpoint,
            user_agent: format!("oci-rust-sdk/{}", info.client_version),
            retry_policy: config.retry_policy,
            backoff_policy: config.backoff_policy,
            attempt_timeout: config.attempt_timeout,
            tracing,
        })
    }

    /// The endpoint, including the API version path.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Runs one logical call.
    ///
    /// Without a retry policy the call is attempted exactly once. Otherwise
    /// the retry loop repeats the attempt, always with the same descriptor,
    /// until it succeeds or the policy stops. Errors are returned unchanged.
    pub async fn execute<O: serde::de::DeserializeOwned + Default>(
        &self,
        descriptor: CallDescriptor,
        mut options: RequestOptions,
    ) -> Result<Response<O>> {
        if options.attempt_timeout().is_none() {
            if let Some(t) = self.attempt_timeout {
                options.set_attempt_timeout(t);
            }
        }
        let policy = resolve_retry_policy(&options, self.retry_policy.as_ref());
        if !self.tracing {
            return self.dispatch(&descriptor, &options, policy).await;
        }
        let span = tracing::info_span!(
            "oci.call",
            call_name = descriptor.operation(),
            method = descriptor.method().as_str(),
            path = descriptor.path(),
        );
        let result = self
            .dispatch(&descriptor, &options, policy)
            .instrument(span.clone())
            .await;
        if let Err(e) = &result {
            span.in_scope(|| {
                tracing::warn!(error = %e, request_id = e.request_id(), "call failed")
            });
        }
        result
    }

    async fn dispatch<O: serde::de::DeserializeOwned + Default>(
        &self,
        descriptor: &CallDescriptor,
        options: &RequestOptions,
        policy: Option<Arc<dyn RetryPolicy>>,
    ) -> Result<Response<O>> {
        match policy {
            None => self.request_attempt::<O>(descriptor, options, None).await,
            Some(policy) => self.retry_loop::<O>(descriptor, options, policy).await,
        }
    }

    async fn retry_loop<O: serde::de::DeserializeOwned + Default>(
        &self,
        descriptor: &CallDescriptor,
        options: &RequestOptions,
        retry_policy: Arc<dyn RetryPolicy>,
    ) -> Result<Response<O>> {
        let idempotent = options.idempotent().unwrap_or(true);
        let backoff = resolve_backoff_policy(options, self.backoff_policy.as_ref());
        let inner = async |d| self.request_attempt(descriptor, options, d).await;
        let sleep = async |d| tokio::time::sleep(d).await;
        let tracing = self.tracing;
        let on_retry = move |attempt: u32, error: &Error, delay: Duration| {
            if tracing {
                tracing::debug!(attempt, ?delay, error = %error, "retrying");
            }
        };
        gax::retry_loop_internal::retry_loop_with_callback(
            inner,
            sleep,
            idempotent,
            retry_policy,
            backoff,
            on_retry,
        )
        .await
    }

    async fn request_attempt<O: serde::de::DeserializeOwned + Default>(
        &self,
        descriptor: &CallDescriptor,
        options: &RequestOptions,
        remaining_time: Option<Duration>,
    ) -> Result<Response<O>> {
        let url = format!("{}{}", self.endpoint, descriptor.encoded_path());
        let mut builder = self
            .inner
            .request(descriptor.method().into(), url)
            .headers(descriptor.headers().clone())
            .header(reqwest::header::USER_AGENT, self.user_agent(options)?);
        if !descriptor.query().is_empty() {
            builder = builder.query(descriptor.query());
        }
        if let Some(body) = descriptor.body() {
            builder = builder.body(body.clone());
        }
        builder = gax::retry_loop_internal::effective_timeout(options, remaining_time)
            .into_iter()
            .fold(builder, |b, t| b.timeout(t));
        let mut request = builder.build().map_err(Error::ser)?;

        let method = request.method().clone();
        let url = request.url().to_string();
        let mut signable = SignableRequest {
            method: &method,
            url: &url,
            headers: request.headers_mut(),
            body: descriptor.body().map(|b| b.as_ref()),
        };
        self.signer.sign(descriptor.signing(), &mut signable)?;

        if self.tracing {
            tracing::debug!(method = %method, url, "sending request");
        }
        let response = self
            .inner
            .execute(request)
            .await
            .map_err(Self::map_send_error)?;
        if !response.status().is_success() {
            return self::to_http_error(response).await;
        }
        self::to_http_response(response, descriptor.response_type().is_some()).await
    }

    fn user_agent(&self, options: &RequestOptions) -> Result<reqwest::header::HeaderValue> {
        let value = match options.user_agent() {
            Some(prefix) => format!("{prefix} {}", self.user_agent),
            None => self.user_agent.clone(),
        };
        reqwest::header::HeaderValue::from_str(&value).map_err(Error::ser)
    }

    fn map_send_error(err: reqwest::Error) -> Error {
        match err {
            e if e.is_timeout() => Error::timeout(e),
            e => Error::io(e),
        }
    }
}

pub async fn to_http_error<O>(response: reqwest::Response) -> Result<O> {
    let status_code = response.status().as_u16();
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;

    let error = match ServiceStatus::try_from(&body) {
        Ok(status) => Error::service_with_http_metadata(status, Some(status_code), Some(headers)),
        Err(_) => Error::http(status_code, headers, body),
    };
    Err(error)
}

async fn to_http_response<O: serde::de::DeserializeOwned + Default>(
    response: reqwest::Response,
    has_body: bool,
) -> Result<Response<O>> {
    // 204 No Content has no body and throws EOF error if we try to parse with serde::json
    let no_content_status = response.status() == reqwest::StatusCode::NO_CONTENT;
    let headers = response.headers().clone();
    let body = response.bytes().await.map_err(Error::io)?;

    let response = match body {
        _ if !has_body => O::default(),
        content if (content.is_empty() && no_content_status) => O::default(),
        content => serde_json::from_slice::<O>(&content).map_err(Error::deser)?,
    };

    Ok(Response::from_parts(
        Parts::new().set_headers(headers),
        response,
    ))
}
