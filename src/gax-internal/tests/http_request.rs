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

//! Verify the transport sends what the descriptor describes: path, query,
//! headers, body, user agent, and signature.

#[cfg(test)]
mod tests {
    use gax::options::RequestOptions;
    use httptest::{Expectation, Server, matchers::*, responders::*};
    use oci_gax_internal::descriptor::{self, NoBody};
    use oci_gax_internal::http::ReqwestClient;
    use oci_gax_internal::operation::*;
    use oci_gax_internal::options::{ClientConfig, ServiceInfo};
    use oci_gax_internal::signer::{SigningStrategy, StaticHeaders};
    use serde_json::json;
    use std::time::Duration;

    type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

    const INFO: ServiceInfo = ServiceInfo {
        service_name: "identity",
        api_version: "20160918",
        client_version: "1.2.3",
    };

    const LIST_TAGS: OperationSpec = OperationSpec {
        name: "ListTags",
        method: HttpMethod::Get,
        path_template: "/tagNamespaces/{tagNamespaceId}/tags",
        parameters: &[ParameterSpec::path_id("tagNamespaceId")],
        query: &[
            QuerySpec::any("limit"),
            QuerySpec::one_of("lifecycleState", &["ACTIVE", "INACTIVE"]),
        ],
        body: BodySpec::None,
        conditional: false,
        response_type: Some("Vec<TagSummary>"),
        signing: SigningStrategy::Standard,
    };

    const DELETE_TAG: OperationSpec = OperationSpec {
        name: "DeleteTag",
        method: HttpMethod::Delete,
        path_template: "/tagNamespaces/{tagNamespaceId}/tags/{tagName}",
        parameters: &[
            ParameterSpec::path_id("tagNamespaceId"),
            ParameterSpec::path_id("tagName"),
        ],
        query: &[],
        body: BodySpec::None,
        conditional: true,
        response_type: None,
        signing: SigningStrategy::Standard,
    };

    fn test_config(server: &Server) -> ClientConfig {
        let mut config = ClientConfig::default();
        config.endpoint = Some(format!("http://{}/", server.addr()));
        config
    }

    #[tokio::test]
    async fn get_with_query() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20160918/tagNamespaces/ns-1/tags"),
                request::query(url_decoded(contains(("limit", "10")))),
                request::query(url_decoded(contains(("lifecycleState", "ACTIVE")))),
                request::headers(contains(("accept", "application/json"))),
                request::headers(contains(("content-type", "application/json"))),
                request::headers(contains(("user-agent", "oci-rust-sdk/1.2.3"))),
                request::headers(not(contains(key("opc-retry-token")))),
                request::headers(not(contains(key("opc-request-id")))),
                request::headers(not(contains(key("if-match")))),
            ])
            .respond_with(
                status_code(200)
                    .insert_header("opc-request-id", "req-1")
                    .insert_header("opc-next-page", "page-2")
                    .body(json!([{"name": "cost-center"}]).to_string()),
            ),
        );

        let client = ReqwestClient::new(test_config(&server), &INFO).await?;
        let mut options = RequestOptions::default();
        options.set_query_parameter("limit", "10");
        options.set_query_parameter("lifecycleState", "ACTIVE");
        let args = Arguments::new().set("tagNamespaceId", "ns-1");
        let descriptor = descriptor::build(&LIST_TAGS, &args, None::<&NoBody>, &options)?;
        let response = client
            .execute::<serde_json::Value>(descriptor, options)
            .await?;
        assert_eq!(response.request_id(), Some("req-1"));
        assert_eq!(response.next_page(), Some("page-2"));
        assert_eq!(response.body(), &json!([{"name": "cost-center"}]));
        Ok(())
    }

    #[tokio::test]
    async fn delete_with_headers_and_encoding() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("DELETE", "/20160918/tagNamespaces/ns-1/tags/cost%20center"),
                request::headers(contains(("opc-retry-token", "caller-token"))),
                request::headers(contains(("opc-request-id", "req-42"))),
                request::headers(contains(("if-match", "etag-7"))),
                request::headers(contains(("user-agent", "myapp/1.0 oci-rust-sdk/1.2.3"))),
                request::headers(contains(("authorization", "Signature test"))),
            ])
            .respond_with(status_code(204)),
        );

        let mut config = test_config(&server);
        config.signer = Some(
            StaticHeaders::default()
                .with_header("authorization", "Signature test")?
                .into(),
        );
        let client = ReqwestClient::new(config, &INFO).await?;
        let mut options = RequestOptions::default();
        options.set_retry_token("caller-token");
        options.set_request_id("req-42");
        options.set_if_match("etag-7");
        options.set_user_agent("myapp/1.0");
        let args = Arguments::new()
            .set("tagNamespaceId", "ns-1")
            .set("tagName", "cost center");
        let descriptor = descriptor::build(&DELETE_TAG, &args, None::<&NoBody>, &options)?;
        let response = client.execute::<()>(descriptor, options).await?;
        assert_eq!(response.body(), &());
        Ok(())
    }

    #[tokio::test]
    async fn slash_in_argument_stays_in_segment() -> Result<()> {
        const GET_TAG: OperationSpec = OperationSpec {
            name: "GetTag",
            method: HttpMethod::Get,
            response_type: Some("Tag"),
            conditional: false,
            ..DELETE_TAG
        };
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20160918/tagNamespaces/ns/tags/a%2Fb",
            ))
            .respond_with(status_code(200).body(json!({"name": "a/b"}).to_string())),
        );

        let client = ReqwestClient::new(test_config(&server), &INFO).await?;
        let options = RequestOptions::default();
        let args = Arguments::new()
            .set("tagNamespaceId", "ns")
            .set("tagName", "a/b");
        let descriptor = descriptor::build(&GET_TAG, &args, None::<&NoBody>, &options)?;
        let response = client
            .execute::<serde_json::Value>(descriptor, options)
            .await?;
        assert_eq!(response.body(), &json!({"name": "a/b"}));
        Ok(())
    }

    #[tokio::test]
    async fn anonymous_operations_are_not_signed() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(all_of![
                request::method_path("GET", "/20160918/tagNamespaces/ns-1/tags"),
                request::headers(not(contains(key("authorization")))),
            ])
            .respond_with(status_code(200).body("[]")),
        );

        let mut config = test_config(&server);
        config.signer = Some(
            StaticHeaders::default()
                .with_header("authorization", "Signature test")?
                .into(),
        );
        let client = ReqwestClient::new(config, &INFO).await?;
        let spec = OperationSpec {
            signing: SigningStrategy::Anonymous,
            ..LIST_TAGS
        };
        let args = Arguments::new().set("tagNamespaceId", "ns-1");
        let options = RequestOptions::default();
        let descriptor = descriptor::build(&spec, &args, None::<&NoBody>, &options)?;
        let response = client
            .execute::<serde_json::Value>(descriptor, options)
            .await?;
        assert_eq!(response.body(), &json!([]));
        Ok(())
    }

    #[tokio::test]
    async fn attempt_timeout() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20160918/tagNamespaces/ns-1/tags",
            ))
            .respond_with(delay_and_then(
                Duration::from_secs(5),
                status_code(200).body("[]"),
            )),
        );

        let mut config = test_config(&server);
        config.attempt_timeout = Some(Duration::from_millis(100));
        let client = ReqwestClient::new(config, &INFO).await?;
        let args = Arguments::new().set("tagNamespaceId", "ns-1");
        let options = RequestOptions::default();
        let descriptor = descriptor::build(&LIST_TAGS, &args, None::<&NoBody>, &options)?;
        let err = client
            .execute::<serde_json::Value>(descriptor, options)
            .await
            .unwrap_err();
        assert!(err.is_timeout(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> Result<()> {
        let server = Server::run();
        server.expect(
            Expectation::matching(request::method_path(
                "GET",
                "/20160918/tagNamespaces/missing/tags",
            ))
            .respond_with(
                status_code(404)
                    .insert_header("opc-request-id", "req-404")
                    .body(
                        json!({"code": "NotAuthorizedOrNotFound", "message": "not found"})
                            .to_string(),
                    ),
            ),
        );

        let client = ReqwestClient::new(test_config(&server), &INFO).await?;
        let args = Arguments::new().set("tagNamespaceId", "missing");
        let options = RequestOptions::default();
        let descriptor = descriptor::build(&LIST_TAGS, &args, None::<&NoBody>, &options)?;
        let err = client
            .execute::<serde_json::Value>(descriptor, options)
            .await
            .unwrap_err();
        assert_eq!(err.http_status_code(), Some(404));
        assert_eq!(err.request_id(), Some("req-404"));
        assert_eq!(
            err.status().map(|s| s.code.as_str()),
            Some("NotAuthorizedOrNotFound")
        );
        Ok(())
    }

    #[tokio::test]
    async fn endpoint_from_region() -> Result<()> {
        let mut config = ClientConfig::default();
        config.region = Some("fra".into());
        let client = ReqwestClient::new(config, &INFO).await?;
        assert_eq!(
            client.endpoint(),
            "https://identity.eu-frankfurt-1.oraclecloud.com/20160918"
        );

        let err = ReqwestClient::new(ClientConfig::default(), &INFO)
            .await
            .unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
        Ok(())
    }

    #[tokio::test]
    async fn invalid_proxy() {
        let mut config = ClientConfig::default();
        config.region = Some("iad".into());
        config.proxy = Some("http://[bad".into());
        let err = ReqwestClient::new(config, &INFO).await.unwrap_err();
        assert!(err.is_transport(), "{err:?}");
    }
}
