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

//! Typed values for the enumerated query parameters.
//!
//! The service rejects unknown values for these parameters, the call builders
//! accept these types to catch mistakes at compile time. The string forms are
//! also validated when an application sets the parameters by name.

use gax::query_parameter::QueryParameter;

macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($(#[$vmeta:meta])* $variant:ident => $wire:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[non_exhaustive]
        pub enum $name {
            $($(#[$vmeta])* #[serde(rename = $wire)] $variant,)+
        }

        impl $name {
            /// All the values accepted by the service.
            pub const VALUES: &'static [&'static str] = &[$($wire),+];

            /// Returns the value sent to the service.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $wire,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownValue;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($wire => Ok(Self::$variant),)+
                    _ => Err(UnknownValue(s.to_string())),
                }
            }
        }

        impl QueryParameter for $name {
            fn format(&self) -> String {
                self.as_str().to_string()
            }
        }
    };
}

/// The error returned when parsing an unknown enum value.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
#[error("unknown enum value {0:?}")]
pub struct UnknownValue(pub String);

wire_enum! {
    /// The lifecycle state of users, groups, compartments, policies, and tags.
    LifecycleState {
        Creating => "CREATING",
        Active => "ACTIVE",
        Inactive => "INACTIVE",
        Deleting => "DELETING",
        Deleted => "DELETED",
    }
}

wire_enum! {
    /// The lifecycle state of identity domains.
    DomainLifecycleState {
        Creating => "CREATING",
        Active => "ACTIVE",
        Deleting => "DELETING",
        Inactive => "INACTIVE",
    }
}

wire_enum! {
    /// The field used to sort list results.
    SortBy {
        TimeCreated => "TIMECREATED",
        Name => "NAME",
    }
}

wire_enum! {
    SortOrder {
        Asc => "ASC",
        Desc => "DESC",
    }
}

wire_enum! {
    /// Restricts compartment listings to compartments the caller can access.
    AccessLevel {
        Any => "ANY",
        Accessible => "ACCESSIBLE",
    }
}

wire_enum! {
    /// The license type of an identity domain.
    DomainLicenseType {
        Free => "free",
        Premium => "premium",
        OracleAppsPremium => "oracle-apps-premium",
        ExternalUser => "external-user",
    }
}

wire_enum! {
    DomainType {
        Default => "DEFAULT",
        Secondary => "SECONDARY",
    }
}
