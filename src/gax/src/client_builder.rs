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

//! Provide types for client construction.
//!
//! Some applications need to construct clients with custom configuration, for
//! example, they may need to target a different region, use a private
//! endpoint, or go through a proxy. The OCI client libraries use a generic
//! builder type to provide such functionality. The types in this module
//! implement the client builders.
//!
//! Applications should not create builders directly, instead each client type
//! defines a `builder()` function to obtain the correct type of builder.
//!
//! ## Example: create a client for a region.
//!
//! ```
//! # use oci_gax::client_builder::examples;
//! # use oci_gax::client_builder::Result;
//! # async fn sample() -> Result<()> {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_region("us-ashburn-1")
//!     .build().await?;
//! # Ok(()) }
//! ```
//!
//! ## Example: create a client with a different endpoint
//!
//! ```
//! # use oci_gax::client_builder::examples;
//! # use oci_gax::client_builder::Result;
//! # async fn sample() -> Result<()> {
//! pub use examples::Client; // Placeholder for examples
//! let client = Client::builder()
//!     .with_endpoint("https://identity.private.example.com")
//!     .build().await?;
//! # Ok(()) }
//! ```

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;
use std::time::Duration;

/// The result type for this module.
pub type Result<T> = std::result::Result<T, Error>;

/// Indicates a problem while constructing a client.
///
/// # Examples
/// ```no_run
/// # use oci_gax::client_builder::examples;
/// use oci_gax::client_builder::Error;
/// # async fn sample() {
/// pub use examples::Client; // Placeholder for examples
/// match Client::builder().build().await {
///     Ok(c) => { /* use the client */ },
///     Err(e) if e.is_configuration() => {
///         println!("set a region or an endpoint: {e}");
///     }
///     Err(e) => { println!("could not create client: {e}"); },
/// }
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
#[error(transparent)]
pub struct Error(ErrorKind);

impl Error {
    /// If true, the client configuration is incomplete or invalid.
    pub fn is_configuration(&self) -> bool {
        matches!(&self.0, ErrorKind::Configuration(_))
    }

    /// If true, the client could not initialize the request signer.
    pub fn is_signer(&self) -> bool {
        matches!(&self.0, ErrorKind::Signer(_))
    }

    /// If true, the client could not initialize the transport client.
    pub fn is_transport(&self) -> bool {
        matches!(&self.0, ErrorKind::Transport(_))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn configuration<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Configuration(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn signer<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Signer(source.into()))
    }

    /// Not part of the public API, subject to change without notice.
    #[doc(hidden)]
    pub fn transport<T: Into<BoxError>>(source: T) -> Self {
        Self(ErrorKind::Transport(source.into()))
    }
}

#[derive(thiserror::Error, Debug)]
enum ErrorKind {
    #[error("invalid client configuration")]
    Configuration(#[source] BoxError),
    #[error("could not create the request signer")]
    Signer(#[source] BoxError),
    #[error("could not initialize transport client")]
    Transport(#[source] BoxError),
}

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Proxy configuration for the transport client.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub struct ProxySettings {
    /// The proxy URL, e.g. `http://proxy.example.com:3128`.
    pub address: String,
    /// The user name for proxy authentication, if any.
    pub username: Option<String>,
    /// The password for proxy authentication, if any.
    pub password: Option<String>,
}

impl ProxySettings {
    /// Creates proxy settings without authentication.
    pub fn new<T: Into<String>>(address: T) -> Self {
        Self {
            address: address.into(),
            username: None,
            password: None,
        }
    }

    /// Sets the proxy credentials.
    pub fn with_basic_auth<U: Into<String>, P: Into<String>>(
        mut self,
        username: U,
        password: P,
    ) -> Self {
        self.username = Some(username.into());
        self.password = Some(password.into());
        self
    }
}

/// A generic builder for clients.
///
/// In the OCI client libraries for Rust a "client" represents a connection to
/// a specific service. Each client library defines a `builder()` function
/// returning this type, with the correct factory and signer types.
#[derive(Clone, Debug)]
pub struct ClientBuilder<F, S> {
    config: internal::ClientConfig<S>,
    factory: F,
}

impl<F, S> ClientBuilder<F, S> {
    /// Creates a new client.
    pub async fn build<C>(self) -> Result<C>
    where
        F: internal::ClientFactory<Client = C, Signer = S>,
    {
        self.factory.build(self.config).await
    }

    /// Sets the endpoint.
    ///
    /// The API version path is appended to this endpoint. An explicit
    /// endpoint takes precedence over the region.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.config.endpoint = Some(v.into());
        self
    }

    /// Sets the region, e.g. `us-ashburn-1` or its short code `iad`.
    ///
    /// The endpoint is derived from the region and its realm.
    pub fn with_region<V: Into<String>>(mut self, v: V) -> Self {
        self.config.region = Some(v.into());
        self
    }

    /// Enables tracing.
    ///
    /// The client libraries can be dynamically instrumented with the Tokio
    /// [tracing] framework. Setting this flag enables this instrumentation.
    ///
    /// [tracing]: https://docs.rs/tracing/latest/tracing/
    pub fn with_tracing(mut self) -> Self {
        self.config.tracing = true;
        self
    }

    /// Configure the request signer.
    pub fn with_signer<T: Into<S>>(mut self, v: T) -> Self {
        self.config.signer = Some(v.into());
        self
    }

    /// Send all requests through a proxy.
    pub fn with_proxy<V: Into<ProxySettings>>(mut self, v: V) -> Self {
        self.config.proxy = Some(v.into());
        self
    }

    /// Configure the default retry policy.
    ///
    /// Without a default policy each request is attempted exactly once,
    /// unless the request sets its own policy.
    ///
    /// # Example
    /// ```
    /// # use oci_gax::client_builder::examples;
    /// # use oci_gax::client_builder::Result;
    /// # async fn sample() -> Result<()> {
    /// use oci_gax::retry_policy::default_policy;
    /// pub use examples::Client; // Placeholder for examples
    /// let client = Client::builder()
    ///     .with_region("eu-frankfurt-1")
    ///     .with_retry_policy(default_policy())
    ///     .build().await?;
    /// # Ok(()) }
    /// ```
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.config.retry_policy = Some(v.into().into());
        self
    }

    /// Configure the default backoff policy.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.config.backoff_policy = Some(v.into().into());
        self
    }

    /// Configure the default per-attempt timeout.
    pub fn with_attempt_timeout<V: Into<Duration>>(mut self, v: V) -> Self {
        self.config.attempt_timeout = Some(v.into());
        self
    }
}

impl From<&str> for ProxySettings {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProxySettings {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[doc(hidden)]
pub mod internal {
    use super::*;

    pub trait ClientFactory {
        type Client;
        type Signer;
        fn build(
            self,
            config: internal::ClientConfig<Self::Signer>,
        ) -> impl Future<Output = Result<Self::Client>>;
    }

    pub fn new_builder<F, S, C>(factory: F) -> super::ClientBuilder<F, S>
    where
        F: ClientFactory<Client = C, Signer = S>,
    {
        super::ClientBuilder {
            factory,
            config: ClientConfig::default(),
        }
    }

    /// Configure a client.
    ///
    /// A client is a type with methods to make requests to an OCI service.
    /// Each client requires some configuration; all of it is optional.
    #[derive(Clone, Debug)]
    pub struct ClientConfig<S> {
        pub endpoint: Option<String>,
        pub region: Option<String>,
        pub signer: Option<S>,
        pub proxy: Option<ProxySettings>,
        pub tracing: bool,
        pub retry_policy: Option<Arc<dyn RetryPolicy>>,
        pub backoff_policy: Option<Arc<dyn BackoffPolicy>>,
        pub attempt_timeout: Option<Duration>,
    }

    impl<S> std::default::Default for ClientConfig<S> {
        fn default() -> Self {
            Self {
                endpoint: None,
                region: None,
                signer: None,
                proxy: None,
                tracing: false,
                retry_policy: None,
                backoff_policy: None,
                attempt_timeout: None,
            }
        }
    }
}

#[doc(hidden)]
pub mod examples {
    //! This module contains helper types used in the rustdoc examples.
    //!
    //! The examples require relatively complex types to be useful.

    type Config = super::internal::ClientConfig<Signer>;
    use super::Result;

    #[allow(dead_code)]
    pub struct Client(Config);
    impl Client {
        pub fn builder() -> client::Builder {
            super::internal::new_builder(client::Factory)
        }

        async fn new(config: Config) -> Result<Self> {
            if config.endpoint.is_none() && config.region.is_none() {
                return Err(super::Error::configuration("missing region"));
            }
            Ok(Self(config))
        }
    }
    mod client {
        pub type Builder = super::super::ClientBuilder<Factory, super::Signer>;
        pub struct Factory;
        impl super::super::internal::ClientFactory for Factory {
            type Signer = super::Signer;
            type Client = super::Client;
            async fn build(
                self,
                config: crate::client_builder::internal::ClientConfig<Self::Signer>,
            ) -> super::Result<Self::Client> {
                Self::Client::new(config).await
            }
        }
    }

    #[derive(Clone, Debug, Default, PartialEq)]
    pub struct Signer {
        pub key_id: String,
    }

}
