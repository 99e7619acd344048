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

//! Builds call descriptors from operation specs.
//!
//! A [CallDescriptor] is the complete, immutable description of one logical
//! call: method, path, query, headers, body, and signing strategy. It is
//! built once, before the first attempt. Every attempt, including retries,
//! sends exactly the same descriptor. In particular, the `opc-retry-token`
//! generated for a mutating call is the same in all attempts, which lets the
//! service deduplicate them.
//!
//! All argument validation happens here, so invalid arguments fail before
//! any network call, and are never retried.

use crate::operation::{Arguments, BodySpec, HttpMethod, Location, OperationSpec, ParameterKind};
use crate::signer::SigningStrategy;
use gax::Result;
use gax::error::{BindingError, Error};
use gax::options::RequestOptions;
use http::{HeaderMap, HeaderName, HeaderValue};
use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use std::collections::BTreeMap;

pub const REQUEST_ID: &str = "opc-request-id";
pub const RETRY_TOKEN: &str = "opc-retry-token";
pub const IF_MATCH: &str = "if-match";
const APPLICATION_JSON: &str = "application/json";

/// Characters escaped in each substituted path argument.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// A placeholder for operations without a body.
#[derive(Clone, Copy, Debug, serde::Serialize)]
pub struct NoBody;

/// The immutable description of one logical call.
#[derive(Clone, Debug)]
pub struct CallDescriptor {
    operation: &'static str,
    method: HttpMethod,
    path: String,
    encoded_path: String,
    query: BTreeMap<String, String>,
    headers: HeaderMap,
    body: Option<bytes::Bytes>,
    signing: SigningStrategy,
    response_type: Option<&'static str>,
}

impl CallDescriptor {
    /// The operation name.
    pub fn operation(&self) -> &'static str {
        self.operation
    }

    pub fn method(&self) -> HttpMethod {
        self.method
    }

    /// The path with all placeholders substituted, not URL-encoded.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The path sent on the wire.
    ///
    /// Each argument is percent-encoded as a single segment, so a `/` in a
    /// value never introduces a new path segment.
    pub fn encoded_path(&self) -> &str {
        &self.encoded_path
    }

    pub fn query(&self) -> &BTreeMap<String, String> {
        &self.query
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// The serialized body, if any.
    pub fn body(&self) -> Option<&bytes::Bytes> {
        self.body.as_ref()
    }

    pub fn signing(&self) -> SigningStrategy {
        self.signing
    }

    pub fn response_type(&self) -> Option<&'static str> {
        self.response_type
    }

    /// The idempotency token sent with each attempt, if any.
    pub fn retry_token(&self) -> Option<&str> {
        self.headers
            .get(RETRY_TOKEN)
            .and_then(|v| v.to_str().ok())
    }
}

/// Builds the descriptor for one call to `spec`.
///
/// Fails with a [binding][Error::is_binding] error if a required argument is
/// missing or blank, an optional query parameter has a value outside its
/// allowed set, or the body does not match what the operation accepts.
pub fn build<B>(
    spec: &OperationSpec,
    args: &Arguments,
    body: Option<&B>,
    options: &RequestOptions,
) -> Result<CallDescriptor>
where
    B: serde::Serialize + ?Sized,
{
    let mut path_values = BTreeMap::new();
    let mut query = BTreeMap::new();
    for p in spec.parameters {
        let value = match p.kind {
            ParameterKind::Identifier => gax::path_parameter::identifier(args.get(p.name), p.name)?,
            ParameterKind::Value => gax::path_parameter::required(args.get(p.name), p.name)?,
        };
        match p.location {
            Location::Path(placeholder) => {
                path_values.insert(placeholder, value);
            }
            Location::Query(name) => {
                query.insert(name.to_string(), value.to_string());
            }
        }
    }
    let (path, encoded_path) = substitute(spec.path_template, &path_values)?;

    // Unknown keys are ignored, operations only send what they declare.
    for (name, value) in options.query_parameters() {
        let Some(q) = spec.accepts_query(name) else {
            continue;
        };
        gax::query_parameter::validate(name, value, q.allowed)?;
        query.entry(name.clone()).or_insert_with(|| value.clone());
    }

    let body = match (spec.body, body) {
        (BodySpec::None, Some(_)) => {
            let name = spec.name.to_string();
            return Err(Error::binding(BindingError::UnexpectedBody(name)));
        }
        (BodySpec::Required, None) => {
            let name = spec.name.to_string();
            return Err(Error::binding(BindingError::MissingBody(name)));
        }
        (_, None) => None,
        (_, Some(b)) => Some(bytes::Bytes::from(serde_json::to_vec(b).map_err(Error::ser)?)),
    };

    let headers = headers(spec, options)?;
    Ok(CallDescriptor {
        operation: spec.name,
        method: spec.method,
        path,
        encoded_path,
        query,
        headers,
        body,
        signing: spec.signing,
        response_type: spec.response_type,
    })
}

fn headers(spec: &OperationSpec, options: &RequestOptions) -> Result<HeaderMap> {
    let mut headers = HeaderMap::new();
    headers.insert(http::header::ACCEPT, HeaderValue::from_static(APPLICATION_JSON));
    headers.insert(http::header::CONTENT_TYPE, HeaderValue::from_static(APPLICATION_JSON));
    if let Some(id) = options.request_id() {
        insert(&mut headers, REQUEST_ID, id)?;
    }
    if spec.conditional {
        if let Some(etag) = options.if_match() {
            insert(&mut headers, IF_MATCH, etag)?;
        }
    }
    if spec.method.is_mutating() {
        match options.retry_token() {
            Some(token) => insert(&mut headers, RETRY_TOKEN, token)?,
            None => insert(&mut headers, RETRY_TOKEN, &gax::retry_token::generate())?,
        }
    }
    Ok(headers)
}

fn insert(headers: &mut HeaderMap, name: &'static str, value: &str) -> Result<()> {
    let value = HeaderValue::from_str(value).map_err(Error::binding)?;
    headers.insert(HeaderName::from_static(name), value);
    Ok(())
}

/// Returns the substituted path, both verbatim and encoded for the wire.
fn substitute(
    template: &'static str,
    values: &BTreeMap<&'static str, &str>,
) -> Result<(String, String)> {
    let unknown = |name: &str| {
        Error::binding(BindingError::UnknownPlaceholder {
            template,
            name: name.to_string(),
        })
    };
    let mut path = String::with_capacity(template.len());
    let mut encoded = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        path.push_str(&rest[..start]);
        encoded.push_str(&rest[..start]);
        let tail = &rest[start + 1..];
        let Some(end) = tail.find('}') else {
            return Err(unknown(tail));
        };
        let name = &tail[..end];
        let value = values.get(name).ok_or_else(|| unknown(name))?;
        path.push_str(value);
        encoded.extend(utf8_percent_encode(value, SEGMENT));
        rest = &tail[end + 1..];
    }
    path.push_str(rest);
    encoded.push_str(rest);
    Ok((path, encoded))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::operation::{ParameterSpec, QuerySpec};
    use gax::options::RequestOptions;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::error::Error as _;
    use test_case::test_case;

    const LIFECYCLE: &[&str] = &["CREATING", "ACTIVE", "INACTIVE", "DELETING", "DELETED"];

    const GET_USER: OperationSpec = OperationSpec {
        name: "GetUser",
        method: HttpMethod::Get,
        path_template: "/users/{userId}",
        parameters: &[ParameterSpec::path_id("userId")],
        query: &[],
        body: BodySpec::None,
        conditional: false,
        response_type: Some("User"),
        signing: SigningStrategy::Standard,
    };

    const LIST_USERS: OperationSpec = OperationSpec {
        name: "ListUsers",
        method: HttpMethod::Get,
        path_template: "/users",
        parameters: &[ParameterSpec::query("compartmentId", ParameterKind::Identifier)],
        query: &[
            QuerySpec::any("limit"),
            QuerySpec::any("page"),
            QuerySpec::one_of("lifecycleState", LIFECYCLE),
        ],
        body: BodySpec::None,
        conditional: false,
        response_type: Some("Vec<User>"),
        signing: SigningStrategy::Standard,
    };

    const UPDATE_USER: OperationSpec = OperationSpec {
        name: "UpdateUser",
        method: HttpMethod::Put,
        path_template: "/users/{userId}",
        parameters: &[ParameterSpec::path_id("userId")],
        query: &[],
        body: BodySpec::Required,
        conditional: true,
        response_type: Some("User"),
        signing: SigningStrategy::Standard,
    };

    const DELETE_API_KEY: OperationSpec = OperationSpec {
        name: "DeleteApiKey",
        method: HttpMethod::Delete,
        path_template: "/users/{userId}/apiKeys/{fingerprint}",
        parameters: &[
            ParameterSpec::path_id("userId"),
            ParameterSpec {
                name: "fingerprint",
                location: Location::Path("fingerprint"),
                kind: ParameterKind::Value,
            },
        ],
        query: &[],
        body: BodySpec::None,
        conditional: true,
        response_type: None,
        signing: SigningStrategy::Standard,
    };

    fn binding(e: &Error) -> Option<&BindingError> {
        e.source().and_then(|s| s.downcast_ref::<BindingError>())
    }

    fn user_args() -> Arguments {
        Arguments::new().set("userId", "ocid1.user.oc1..aaa")
    }

    #[test]
    fn get_minimal() -> anyhow::Result<()> {
        let d = build(&GET_USER, &user_args(), None::<&NoBody>, &RequestOptions::default())?;
        assert_eq!(d.operation(), "GetUser");
        assert_eq!(d.method(), HttpMethod::Get);
        assert_eq!(d.path(), "/users/ocid1.user.oc1..aaa");
        assert!(d.query().is_empty(), "{d:?}");
        assert!(d.body().is_none(), "{d:?}");
        assert_eq!(d.response_type(), Some("User"));
        assert_eq!(d.signing(), SigningStrategy::Standard);

        // Only the two fixed headers, optional headers are omitted.
        let names = d.headers().keys().map(|k| k.as_str()).collect::<Vec<_>>();
        assert_eq!(names.len(), 2, "{names:?}");
        assert_eq!(d.headers().get("accept").unwrap(), APPLICATION_JSON);
        assert_eq!(d.headers().get("content-type").unwrap(), APPLICATION_JSON);
        assert_eq!(d.retry_token(), None);
        Ok(())
    }

    #[test]
    fn get_ignores_retry_token() -> anyhow::Result<()> {
        let mut options = RequestOptions::default();
        options.set_retry_token("caller-token");
        options.set_if_match("etag-1");
        let d = build(&GET_USER, &user_args(), None::<&NoBody>, &options)?;
        assert!(d.headers().get(RETRY_TOKEN).is_none(), "{d:?}");
        assert!(d.headers().get(IF_MATCH).is_none(), "{d:?}");
        Ok(())
    }

    #[test]
    fn optional_headers() -> anyhow::Result<()> {
        let mut options = RequestOptions::default();
        options.set_request_id("req-123");
        options.set_if_match("etag-456");
        options.set_retry_token("token-789");
        let body = json!({"description": "updated"});
        let d = build(&UPDATE_USER, &user_args(), Some(&body), &options)?;
        assert_eq!(d.headers().get(REQUEST_ID).unwrap(), "req-123");
        assert_eq!(d.headers().get(IF_MATCH).unwrap(), "etag-456");
        assert_eq!(d.retry_token(), Some("token-789"));
        let got = serde_json::from_slice::<serde_json::Value>(d.body().unwrap())?;
        assert_eq!(got, body);
        Ok(())
    }

    #[test]
    fn mutating_generates_token() -> anyhow::Result<()> {
        let args = user_args().set("fingerprint", "aa:bb:cc");
        let options = RequestOptions::default();
        let d1 = build(&DELETE_API_KEY, &args, None::<&NoBody>, &options)?;
        let d2 = build(&DELETE_API_KEY, &args, None::<&NoBody>, &options)?;
        let t1 = d1.retry_token().unwrap();
        let t2 = d2.retry_token().unwrap();
        assert_eq!(t1.len(), 64, "{t1}");
        assert_ne!(t1, t2);
        assert_eq!(d1.path(), "/users/ocid1.user.oc1..aaa/apiKeys/aa:bb:cc");
        assert!(d1.headers().get(IF_MATCH).is_none(), "{d1:?}");

        // The descriptor is immutable, clones carry the same token.
        let clone = d1.clone();
        assert_eq!(clone.retry_token(), Some(t1));
        Ok(())
    }

    #[test]
    fn query_parameters() -> anyhow::Result<()> {
        let args = Arguments::new().set("compartmentId", "ocid1.tenancy.oc1..aaa");
        let mut options = RequestOptions::default();
        options.set_query_parameter("limit", "10");
        options.set_query_parameter("lifecycleState", "ACTIVE");
        options.set_query_parameter("notDeclared", "ignored");
        let d = build(&LIST_USERS, &args, None::<&NoBody>, &options)?;
        let got = d
            .query()
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            got,
            vec![
                ("compartmentId", "ocid1.tenancy.oc1..aaa"),
                ("lifecycleState", "ACTIVE"),
                ("limit", "10"),
            ]
        );
        Ok(())
    }

    #[test]
    fn required_query_wins() -> anyhow::Result<()> {
        let args = Arguments::new().set("compartmentId", "ocid1.tenancy.oc1..aaa");
        let mut options = RequestOptions::default();
        options.set_query_parameter("compartmentId", "other");
        let spec = OperationSpec {
            query: const { &[QuerySpec::any("compartmentId")] },
            ..LIST_USERS
        };
        let d = build(&spec, &args, None::<&NoBody>, &options)?;
        assert_eq!(
            d.query().get("compartmentId").map(String::as_str),
            Some("ocid1.tenancy.oc1..aaa")
        );
        Ok(())
    }

    #[test]
    fn invalid_enum() {
        let args = Arguments::new().set("compartmentId", "ocid1.tenancy.oc1..aaa");
        let mut options = RequestOptions::default();
        options.set_query_parameter("lifecycleState", "active");
        let err = build(&LIST_USERS, &args, None::<&NoBody>, &options).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        let got = binding(&err);
        assert!(
            matches!(got, Some(BindingError::InvalidEnum { name, value, .. })
                if name == "lifecycleState" && value == "active"),
            "{err:?}"
        );
    }

    #[test_case(None, BindingError::Missing("userId".into()); "missing")]
    #[test_case(Some(""), BindingError::Blank("userId".into()); "empty")]
    #[test_case(Some("   "), BindingError::Blank("userId".into()); "whitespace")]
    fn invalid_identifier(value: Option<&str>, want: BindingError) {
        let args = Arguments::new().set_option("userId", value);
        let err = build(&GET_USER, &args, None::<&NoBody>, &RequestOptions::default()).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
        assert_eq!(binding(&err), Some(&want));
    }

    #[test]
    fn value_may_be_blank() -> anyhow::Result<()> {
        let args = user_args().set("fingerprint", "");
        let d = build(&DELETE_API_KEY, &args, None::<&NoBody>, &RequestOptions::default())?;
        assert_eq!(d.path(), "/users/ocid1.user.oc1..aaa/apiKeys/");
        Ok(())
    }

    #[test]
    fn unexpected_body() {
        let err = build(&GET_USER, &user_args(), Some(&json!({})), &RequestOptions::default())
            .unwrap_err();
        assert_eq!(
            binding(&err),
            Some(&BindingError::UnexpectedBody("GetUser".into()))
        );
    }

    #[test]
    fn missing_body() {
        let err = build(&UPDATE_USER, &user_args(), None::<&NoBody>, &RequestOptions::default())
            .unwrap_err();
        assert_eq!(
            binding(&err),
            Some(&BindingError::MissingBody("UpdateUser".into()))
        );
    }

    #[test]
    fn unknown_placeholder() {
        let spec = OperationSpec {
            path_template: "/users/{user}",
            ..GET_USER
        };
        let err = build(&spec, &user_args(), None::<&NoBody>, &RequestOptions::default())
            .unwrap_err();
        assert!(
            matches!(binding(&err), Some(BindingError::UnknownPlaceholder { name, .. })
                if name == "user"),
            "{err:?}"
        );
    }

    #[test]
    fn unclosed_placeholder() {
        let spec = OperationSpec {
            path_template: "/a/{b",
            parameters: &[],
            ..GET_USER
        };
        let err = build(&spec, &Arguments::new(), None::<&NoBody>, &RequestOptions::default())
            .unwrap_err();
        assert!(
            matches!(binding(&err), Some(BindingError::UnknownPlaceholder { name, .. })
                if name == "b"),
            "{err:?}"
        );
    }

    #[test_case("ocid1.user.oc1..aaa", "/users/ocid1.user.oc1..aaa/apiKeys/aa:bb"; "identifier")]
    #[test_case("a/b", "/users/a%2Fb/apiKeys/aa:bb"; "slash")]
    #[test_case("cost center", "/users/cost%20center/apiKeys/aa:bb"; "space")]
    #[test_case("a?b#c", "/users/a%3Fb%23c/apiKeys/aa:bb"; "query and fragment")]
    fn encoded_path(user: &str, want: &str) -> anyhow::Result<()> {
        let args = Arguments::new().set("userId", user).set("fingerprint", "aa:bb");
        let d = build(&DELETE_API_KEY, &args, None::<&NoBody>, &RequestOptions::default())?;
        assert_eq!(d.path(), format!("/users/{user}/apiKeys/aa:bb"));
        assert_eq!(d.encoded_path(), want);
        Ok(())
    }

    #[test]
    fn invalid_header_value() {
        let mut options = RequestOptions::default();
        options.set_request_id("bad\nvalue");
        let err = build(&GET_USER, &user_args(), None::<&NoBody>, &options).unwrap_err();
        assert!(err.is_binding(), "{err:?}");
    }
}
