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

//! Verify request options and the retry policy resolver are usable from
//! outside the crate.

#[cfg(test)]
mod tests {
    use oci_gax::options::internal::{RequestBuilder, resolve_retry_policy};
    use oci_gax::options::{RequestOptions, RequestOptionsBuilder, RetryPolicySetting};
    use oci_gax::retry_policy::{NeverRetry, RetryPolicy, default_policy};
    use pretty_assertions::assert_eq;
    use std::sync::Arc;
    use std::time::Duration;

    #[derive(Debug, Default)]
    struct Builder(RequestOptions);

    impl RequestBuilder for Builder {
        fn request_options(&mut self) -> &mut RequestOptions {
            &mut self.0
        }
    }

    #[test]
    fn builder_chain() {
        let builder = Builder::default()
            .with_user_agent("myapp/1.2.3")
            .with_attempt_timeout(Duration::from_secs(5))
            .with_request_id("req-123")
            .with_retry_token("token-456")
            .with_if_match("etag-789")
            .with_query_parameter("limit", "10");
        let options = builder.0;
        assert_eq!(options.user_agent().as_deref(), Some("myapp/1.2.3"));
        assert_eq!(options.attempt_timeout(), &Some(Duration::from_secs(5)));
        assert_eq!(options.request_id(), Some("req-123"));
        assert_eq!(options.retry_token(), Some("token-456"));
        assert_eq!(options.if_match(), Some("etag-789"));
        assert_eq!(
            options.query_parameters().get("limit").map(String::as_str),
            Some("10")
        );
        assert!(options.retry_policy().is_unset());
    }

    #[test]
    fn resolver() {
        let default: Arc<dyn RetryPolicy> = Arc::new(default_policy());

        let options = RequestOptions::default();
        let got = resolve_retry_policy(&options, Some(&default));
        assert!(got.is_some_and(|p| Arc::ptr_eq(&p, &default)));
        assert!(resolve_retry_policy(&options, None).is_none());

        let options = Builder::default().with_retries_disabled().0;
        assert!(options.retry_policy().is_disabled());
        assert!(resolve_retry_policy(&options, Some(&default)).is_none());

        let options = Builder::default().with_retry_policy(NeverRetry).0;
        let got = resolve_retry_policy(&options, Some(&default));
        assert!(got.is_some_and(|p| !Arc::ptr_eq(&p, &default)));
        assert!(resolve_retry_policy(&options, None).is_some());
    }

    #[test]
    fn setting_from_option() {
        let setting = RetryPolicySetting::from(Some(NeverRetry));
        assert!(matches!(setting, RetryPolicySetting::Policy(_)), "{setting:?}");
        let setting = RetryPolicySetting::from(None::<NeverRetry>);
        assert!(setting.is_disabled(), "{setting:?}");
    }
}
