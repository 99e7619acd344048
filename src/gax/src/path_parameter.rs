// Copyright 2024 Google LLC
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

//! Handling of missing or blank path parameters.
//!
//! Parameters used to build the request path (aka 'path parameters') are
//! required. The operation tables store arguments as `Option<String>`, a
//! small helper function makes the descriptor builder easier to read.

use crate::error::{BindingError, Error};

/// Returns the value of a required argument, or a binding error naming it.
pub fn required<T>(value: Option<T>, name: &str) -> crate::Result<T> {
    value.ok_or_else(|| missing(name))
}

/// Returns the value of a required identifier.
///
/// Identifiers (OCIDs, names used as path segments) must not be blank. An
/// empty or whitespace-only value would produce a request for a different
/// resource.
pub fn identifier<'a>(value: Option<&'a str>, name: &str) -> crate::Result<&'a str> {
    let value = required(value, name)?;
    if value.trim().is_empty() {
        return Err(Error::binding(BindingError::Blank(name.to_string())));
    }
    Ok(value)
}

pub fn missing(name: &str) -> Error {
    Error::binding(BindingError::Missing(name.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;
    use test_case::test_case;

    fn detail(e: &Error) -> Option<&BindingError> {
        e.source().and_then(|s| s.downcast_ref::<BindingError>())
    }

    #[test]
    fn missing() {
        let e = super::missing("abc123");
        assert!(e.is_binding(), "{e:?}");
        let fmt = format!("{e}");
        assert!(fmt.contains("abc123"), "{e:?}");
        assert_eq!(detail(&e), Some(&BindingError::Missing("abc123".into())));
    }

    #[test]
    fn required_present() {
        let got = required(Some(42), "answer");
        assert!(matches!(got, Ok(42)), "{got:?}");
    }

    #[test]
    fn required_absent() {
        let e = required(None::<i32>, "answer").unwrap_err();
        assert_eq!(detail(&e), Some(&BindingError::Missing("answer".into())));
    }

    #[test_case("")]
    #[test_case(" ")]
    #[test_case("\t\n")]
    fn identifier_blank(input: &str) {
        let e = identifier(Some(input), "userId").unwrap_err();
        assert!(e.is_binding(), "{e:?}");
        assert_eq!(detail(&e), Some(&BindingError::Blank("userId".into())));
    }

    #[test]
    fn identifier_missing() {
        let e = identifier(None, "userId").unwrap_err();
        assert_eq!(detail(&e), Some(&BindingError::Missing("userId".into())));
    }

    #[test_case("ocid1.user.oc1..aaaa")]
    #[test_case(" padded ")]
    fn identifier_valid(input: &str) {
        let got = identifier(Some(input), "userId");
        assert_eq!(got.ok(), Some(input));
    }
}
