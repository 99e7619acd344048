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

//! Formatting and validation of optional query parameters.
//!
//! Optional query parameters are stored as strings in the request options.
//! Some of them only accept a fixed set of values (sort orders, lifecycle
//! states), and the descriptor builder rejects anything else before the
//! request reaches the service.

use crate::error::{BindingError, Error};

/// [QueryParameter] is a trait representing types that can be used as a query
/// parameter.
pub trait QueryParameter {
    fn format(&self) -> String;
}

macro_rules! display_parameter {
    ($($t:ty),*) => {
        $(impl QueryParameter for $t {
            fn format(&self) -> String {
                self.to_string()
            }
        })*
    };
}

display_parameter!(i32, i64, u32, u64, bool, String, &str);

impl<T: QueryParameter> QueryParameter for Vec<T> {
    fn format(&self) -> String {
        self.iter()
            .map(QueryParameter::format)
            .collect::<Vec<_>>()
            .join(",")
    }
}

/// Formats a query parameter.
pub fn format<T: QueryParameter>(parameter: &T) -> String {
    parameter.format()
}

/// Verifies that `value` is one of the `allowed` values, when the parameter
/// has a restricted set.
pub fn validate(
    name: &str,
    value: &str,
    allowed: Option<&'static [&'static str]>,
) -> crate::Result<()> {
    match allowed {
        Some(set) if !set.contains(&value) => Err(Error::binding(BindingError::InvalidEnum {
            name: name.to_string(),
            value: value.to_string(),
            allowed: set,
        })),
        _ => Ok(()),
    }
}
