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

//! Contains the Identity client and related types.

use crate::builder::Call;
use crate::operations;
use gaxi::http::ReqwestClient;
use gaxi::operation::OperationSpec;
use gaxi::options::{ClientConfig, ServiceInfo};

pub(crate) const SERVICE: ServiceInfo = ServiceInfo {
    service_name: "identity",
    api_version: "20160918",
    client_version: env!("CARGO_PKG_VERSION"),
};

/// The type returned by [Identity::builder].
pub type ClientBuilder =
    gax::client_builder::ClientBuilder<client_builder::Factory, gaxi::signer::RequestSigner>;

pub(crate) mod client_builder {
    use super::Identity;
    use gaxi::options::ClientConfig;

    pub struct Factory;
    impl gax::client_builder::internal::ClientFactory for Factory {
        type Client = Identity;
        type Signer = gaxi::signer::RequestSigner;
        async fn build(self, config: ClientConfig) -> gax::client_builder::Result<Self::Client> {
            Self::Client::new(config).await
        }
    }
}

/// Implements a client for the OCI Identity and Access Management service.
///
/// # Example
/// ```no_run
/// # use oci_identity::client::Identity;
/// async fn example() -> anyhow::Result<()> {
///     let client = Identity::builder().with_region("us-ashburn-1").build().await?;
///     let user = client.get_user("ocid1.user.oc1..example").send().await?;
///     println!("{:?}", user.body());
///     Ok(())
/// }
/// ```
///
/// # Configuration
///
/// To configure `Identity` use the `with_*` methods in the type returned by
/// [builder()][Identity::builder]. Common configuration changes include
///
/// * [with_region()]: selects the regional endpoint, e.g.
///   `https://identity.us-ashburn-1.oraclecloud.com/20160918`. Either a region
///   or an endpoint is required.
/// * [with_endpoint()]: overrides the endpoint, the API version is appended
///   to it.
/// * [with_signer()]: authenticates the requests. By default the requests are
///   not signed.
/// * [with_retry_policy()]: the default retry policy for all requests. By
///   default requests are not retried.
///
/// # Pooling and Cloning
///
/// `Identity` holds a connection pool internally, it is advised to create one
/// and reuse it. You do not need to wrap `Identity` in an
/// [Rc](std::rc::Rc) or [Arc](std::sync::Arc) to reuse it, because it already
/// uses an `Arc` internally.
///
/// [with_region()]: ClientBuilder::with_region
/// [with_endpoint()]: ClientBuilder::with_endpoint
/// [with_signer()]: ClientBuilder::with_signer
/// [with_retry_policy()]: ClientBuilder::with_retry_policy
#[derive(Clone, Debug)]
pub struct Identity {
    inner: ReqwestClient,
    config: ClientConfig,
}

impl Identity {
    /// Returns a builder for [Identity].
    ///
    /// ```no_run
    /// # use oci_identity::client::Identity;
    /// async fn example() -> anyhow::Result<()> {
    ///     let client = Identity::builder().with_region("eu-frankfurt-1").build().await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn builder() -> ClientBuilder {
        gax::client_builder::internal::new_builder(client_builder::Factory)
    }

    pub(crate) async fn new(config: ClientConfig) -> gax::client_builder::Result<Self> {
        let inner = ReqwestClient::new(config.clone(), &SERVICE).await?;
        Ok(Self { inner, config })
    }

    /// The endpoint used by this client, including the API version.
    pub fn endpoint(&self) -> &str {
        self.inner.endpoint()
    }

    /// Returns a new client for a different region.
    ///
    /// The endpoint is derived from the region, any endpoint override is
    /// discarded. All other configuration is unchanged and `self` is not
    /// modified.
    pub async fn with_region<T: Into<String>>(
        &self,
        region: T,
    ) -> gax::client_builder::Result<Self> {
        let mut config = self.config.clone();
        config.region = Some(region.into());
        config.endpoint = None;
        Self::new(config).await
    }

    /// Returns a new client using a different endpoint.
    pub async fn with_endpoint<T: Into<String>>(
        &self,
        endpoint: T,
    ) -> gax::client_builder::Result<Self> {
        let mut config = self.config.clone();
        config.endpoint = Some(endpoint.into());
        Self::new(config).await
    }

    /// Starts a call to any operation.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_identity::client::Identity;
    /// # use oci_identity::operations;
    /// async fn example(client: &Identity) -> oci_identity::Result<()> {
    ///     client
    ///         .call(&operations::DELETE_POLICY)
    ///         .set_argument("policyId", "ocid1.policy.oc1..example")
    ///         .send()
    ///         .await?;
    ///     Ok(())
    /// }
    /// ```
    pub fn call(&self, operation: &'static OperationSpec) -> Call {
        Call::new(self.inner.clone(), operation)
    }

    /// Starts a call to the operation named `name`, e.g. `ListPolicies`.
    pub fn call_by_name(&self, name: &str) -> Option<Call> {
        operations::find(name).map(|op| self.call(op))
    }

    /// Lists the users in a tenancy.
    ///
    /// # Parameters
    /// * `compartment_id` - the OCID of the tenancy.
    pub fn list_users<T: Into<String>>(&self, compartment_id: T) -> Call {
        self.call(&operations::LIST_USERS)
            .set_compartment_id(compartment_id)
    }

    /// Gets a user.
    pub fn get_user<T: Into<String>>(&self, user_id: T) -> Call {
        self.call(&operations::GET_USER)
            .set_argument("userId", user_id)
    }

    /// Creates a user, the body is a `CreateUserDetails` document.
    ///
    /// # Example
    /// ```no_run
    /// # use oci_identity::client::Identity;
    /// async fn example(client: &Identity) -> oci_identity::Result<()> {
    ///     let user = client
    ///         .create_user()
    ///         .with_body(serde_json::json!({
    ///             "compartmentId": "ocid1.tenancy.oc1..example",
    ///             "name": "alice",
    ///             "description": "an example user",
    ///         }))
    ///         .send()
    ///         .await?;
    ///     println!("etag={:?}", user.etag());
    ///     Ok(())
    /// }
    /// ```
    pub fn create_user(&self) -> Call {
        self.call(&operations::CREATE_USER)
    }

    /// Deletes a user.
    pub fn delete_user<T: Into<String>>(&self, user_id: T) -> Call {
        self.call(&operations::DELETE_USER)
            .set_argument("userId", user_id)
    }

    pub fn list_groups<T: Into<String>>(&self, compartment_id: T) -> Call {
        self.call(&operations::LIST_GROUPS)
            .set_compartment_id(compartment_id)
    }

    /// Lists the compartments directly under `compartment_id`.
    pub fn list_compartments<T: Into<String>>(&self, compartment_id: T) -> Call {
        self.call(&operations::LIST_COMPARTMENTS)
            .set_compartment_id(compartment_id)
    }

    pub fn get_compartment<T: Into<String>>(&self, compartment_id: T) -> Call {
        self.call(&operations::GET_COMPARTMENT)
            .set_argument("compartmentId", compartment_id)
    }

    pub fn list_policies<T: Into<String>>(&self, compartment_id: T) -> Call {
        self.call(&operations::LIST_POLICIES)
            .set_compartment_id(compartment_id)
    }

    /// Lists all the regions offered by Oracle Cloud Infrastructure.
    pub fn list_regions(&self) -> Call {
        self.call(&operations::LIST_REGIONS)
    }

    /// Gets the status of a work request, e.g. after deleting a compartment.
    pub fn get_work_request<T: Into<String>>(&self, work_request_id: T) -> Call {
        self.call(&operations::GET_WORK_REQUEST)
            .set_argument("workRequestId", work_request_id)
    }
}
