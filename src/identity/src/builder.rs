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

//! Request builders.
//!
//! Every operation is sent through a [Call]. Set the required arguments, any
//! optional query parameters, the body if the operation takes one, and the
//! per-request options, then call [send()][Call::send].

use crate::Result;
use crate::model::{AccessLevel, LifecycleState, SortBy, SortOrder};
use futures::Stream;
use gax::error::Error;
use gax::options::RequestOptions;
use gax::options::internal::RequestBuilder;
use gax::query_parameter::QueryParameter;
use gax::response::Response;
use gaxi::http::ReqwestClient;
use gaxi::operation::{Arguments, OperationSpec};
use serde::de::DeserializeOwned;
use std::sync::Arc;

const PAGE: &str = "page";

/// A request builder for one call to the identity service.
///
/// # Example
/// ```no_run
/// # use oci_identity::client::Identity;
/// # use oci_identity::operations;
/// use gax::options::RequestOptionsBuilder;
/// async fn example(client: &Identity) -> oci_identity::Result<()> {
///     let user = client
///         .call(&operations::UPDATE_USER)
///         .set_argument("userId", "ocid1.user.oc1..example")
///         .with_body(serde_json::json!({"description": "updated"}))
///         .with_if_match("etag-123")
///         .send()
///         .await?;
///     println!("{:?}", user.body());
///     Ok(())
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Call {
    stub: ReqwestClient,
    spec: &'static OperationSpec,
    args: Arguments,
    body: Option<std::result::Result<serde_json::Value, Arc<serde_json::Error>>>,
    options: RequestOptions,
}

impl Call {
    pub(crate) fn new(stub: ReqwestClient, spec: &'static OperationSpec) -> Self {
        Self {
            stub,
            spec,
            args: Arguments::new(),
            body: None,
            options: RequestOptions::default(),
        }
    }

    /// The operation sent by this builder.
    pub fn operation(&self) -> &'static OperationSpec {
        self.spec
    }

    /// Sets a required argument, e.g. `userId` or `compartmentId`.
    pub fn set_argument<V: Into<String>>(mut self, name: &'static str, v: V) -> Self {
        self.args.insert(name, Some(v));
        self
    }

    /// Sets or clears a required argument.
    ///
    /// Sending the call fails if a required argument is `None`.
    pub fn set_or_clear_argument<V: Into<String>>(
        mut self,
        name: &'static str,
        v: Option<V>,
    ) -> Self {
        self.args.insert(name, v);
        self
    }

    /// Sets the compartment for list operations.
    pub fn set_compartment_id<V: Into<String>>(self, v: V) -> Self {
        self.set_argument("compartmentId", v)
    }

    /// Sets the request body.
    ///
    /// The body is serialized as JSON. Serialization errors are reported when
    /// the call is sent.
    pub fn with_body<B: serde::Serialize>(mut self, v: B) -> Self {
        self.body = Some(serde_json::to_value(v).map_err(Arc::new));
        self
    }

    /// Sets an optional query parameter.
    ///
    /// Parameters the operation does not accept are ignored.
    pub fn with_query<V: QueryParameter>(mut self, name: &str, v: V) -> Self {
        self.options.set_query_parameter(name, v.format());
        self
    }

    /// The maximum number of items per page.
    pub fn with_limit(self, v: u32) -> Self {
        self.with_query("limit", v)
    }

    /// The page token returned in a previous response.
    pub fn with_page<V: Into<String>>(self, v: V) -> Self {
        self.with_query(PAGE, v.into())
    }

    /// Only return resources with this exact name.
    pub fn with_name<V: Into<String>>(self, v: V) -> Self {
        self.with_query("name", v.into())
    }

    pub fn with_sort_by(self, v: SortBy) -> Self {
        self.with_query("sortBy", v)
    }

    pub fn with_sort_order(self, v: SortOrder) -> Self {
        self.with_query("sortOrder", v)
    }

    /// Only return resources in this lifecycle state.
    pub fn with_lifecycle_state(self, v: LifecycleState) -> Self {
        self.with_query("lifecycleState", v)
    }

    pub fn with_access_level(self, v: AccessLevel) -> Self {
        self.with_query("accessLevel", v)
    }

    /// Include resources in all the subcompartments.
    pub fn with_compartment_id_in_subtree(self, v: bool) -> Self {
        self.with_query("compartmentIdInSubtree", v)
    }

    /// Sends the request, returning the response payload as JSON.
    ///
    /// Operations without a response payload return [serde_json::Value::Null].
    pub async fn send(self) -> Result<Response<serde_json::Value>> {
        self.send_as().await
    }

    /// Sends the request, deserializing the response payload into `O`.
    pub async fn send_as<O>(self) -> Result<Response<O>>
    where
        O: DeserializeOwned + Default,
    {
        let body = self.body.transpose().map_err(Error::ser)?;
        let descriptor =
            gaxi::descriptor::build(self.spec, &self.args, body.as_ref(), &self.options)?;
        self.stub.execute(descriptor, self.options).await
    }

    /// Streams the pages of a list operation.
    ///
    /// The first request is sent as configured, each following request sets
    /// `page` from the `opc-next-page` header of the previous response. The
    /// stream ends after the last page or the first error.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_identity::client::Identity;
    /// use futures::StreamExt;
    /// async fn example(client: &Identity) -> oci_identity::Result<()> {
    ///     let pages = client.list_users("ocid1.tenancy.oc1..example").with_limit(100).by_page();
    ///     let mut pages = std::pin::pin!(pages);
    ///     while let Some(page) = pages.next().await {
    ///         println!("{:?}", page?.body());
    ///     }
    ///     Ok(())
    /// }
    /// ```
    pub fn by_page(self) -> impl Stream<Item = Result<Response<serde_json::Value>>> {
        futures::stream::unfold(Some(self), |state| async move {
            let call = state?;
            if call.spec.accepts_query(PAGE).is_none() {
                let error = Error::binding(NotPaginated(call.spec.name));
                return Some((Err(error), None));
            }
            match call.clone().send().await {
                Ok(page) => {
                    let next = page.next_page().map(|token| call.with_page(token));
                    Some((Ok(page), next))
                }
                Err(e) => Some((Err(e), None)),
            }
        })
    }

    /// Fetches every page of a list operation and concatenates the items.
    ///
    /// Each page is a JSON array, non-array payloads are kept as one item.
    pub async fn send_all_pages(self) -> Result<Vec<serde_json::Value>> {
        use futures::StreamExt;
        let mut items = Vec::new();
        let mut pages = std::pin::pin!(self.by_page());
        while let Some(page) = pages.next().await {
            match page?.into_body() {
                serde_json::Value::Array(page) => items.extend(page),
                serde_json::Value::Null => {}
                other => items.push(other),
            }
        }
        Ok(items)
    }
}

impl RequestBuilder for Call {
    fn request_options(&mut self) -> &mut RequestOptions {
        &mut self.options
    }
}

/// The operation does not return results in pages.
#[derive(thiserror::Error, Debug)]
#[error("operation {0} does not support pagination")]
pub struct NotPaginated(pub &'static str);
