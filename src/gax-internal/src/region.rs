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

//! Region table and endpoint derivation.
//!
//! OCI services are reached at `https://{service}.{region}.{realm-domain}`,
//! followed by the API version path. Regions are named by their identifier
//! (`us-ashburn-1`) or by their short code (`iad`). Each region belongs to a
//! realm, and the realm determines the second level domain.

use gax::client_builder::Error as BuilderError;
use http::Uri;
use std::str::FromStr;

/// A group of regions sharing a second level domain.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Realm {
    pub key: &'static str,
    pub domain: &'static str,
}

pub const OC1: Realm = Realm {
    key: "oc1",
    domain: "oraclecloud.com",
};
pub const OC2: Realm = Realm {
    key: "oc2",
    domain: "oraclegovcloud.com",
};
pub const OC3: Realm = Realm {
    key: "oc3",
    domain: "oraclegovcloud.com",
};
pub const OC4: Realm = Realm {
    key: "oc4",
    domain: "oraclegovcloud.uk",
};
pub const OC8: Realm = Realm {
    key: "oc8",
    domain: "oraclecloud8.com",
};

/// Regions with unknown identifiers are assumed to be in this realm.
pub const DEFAULT_REALM: Realm = OC1;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RegionInfo {
    pub id: &'static str,
    pub short_code: &'static str,
    pub realm: Realm,
}

macro_rules! regions {
    ($(($id:literal, $code:literal, $realm:ident)),* $(,)?) => {
        &[$(RegionInfo { id: $id, short_code: $code, realm: $realm }),*]
    };
}

static REGIONS: &[RegionInfo] = regions![
    ("af-johannesburg-1", "jnb", OC1),
    ("ap-chuncheon-1", "yny", OC1),
    ("ap-hyderabad-1", "hyd", OC1),
    ("ap-melbourne-1", "mel", OC1),
    ("ap-mumbai-1", "bom", OC1),
    ("ap-osaka-1", "kix", OC1),
    ("ap-seoul-1", "icn", OC1),
    ("ap-singapore-1", "sin", OC1),
    ("ap-sydney-1", "syd", OC1),
    ("ap-tokyo-1", "nrt", OC1),
    ("ca-montreal-1", "yul", OC1),
    ("ca-toronto-1", "yyz", OC1),
    ("eu-amsterdam-1", "ams", OC1),
    ("eu-frankfurt-1", "fra", OC1),
    ("eu-madrid-1", "mad", OC1),
    ("eu-marseille-1", "mrs", OC1),
    ("eu-milan-1", "lin", OC1),
    ("eu-paris-1", "cdg", OC1),
    ("eu-stockholm-1", "arn", OC1),
    ("eu-zurich-1", "zrh", OC1),
    ("il-jerusalem-1", "mtz", OC1),
    ("me-abudhabi-1", "auh", OC1),
    ("me-dubai-1", "dxb", OC1),
    ("me-jeddah-1", "jed", OC1),
    ("mx-queretaro-1", "qro", OC1),
    ("sa-santiago-1", "scl", OC1),
    ("sa-saopaulo-1", "gru", OC1),
    ("sa-vinhedo-1", "vcp", OC1),
    ("uk-cardiff-1", "cwl", OC1),
    ("uk-london-1", "lhr", OC1),
    ("us-ashburn-1", "iad", OC1),
    ("us-chicago-1", "ord", OC1),
    ("us-phoenix-1", "phx", OC1),
    ("us-sanjose-1", "sjc", OC1),
    ("us-langley-1", "lfi", OC2),
    ("us-luke-1", "luf", OC2),
    ("us-gov-ashburn-1", "ric", OC3),
    ("us-gov-chicago-1", "pia", OC3),
    ("us-gov-phoenix-1", "tus", OC3),
    ("uk-gov-london-1", "ltn", OC4),
    ("uk-gov-cardiff-1", "brs", OC4),
    ("ap-chiyoda-1", "nja", OC8),
    ("ap-ibaraki-1", "ukb", OC8),
];

/// Finds a region by identifier or short code, ignoring case.
pub fn lookup(name: &str) -> Option<&'static RegionInfo> {
    let name = name.trim();
    REGIONS
        .iter()
        .find(|r| r.id.eq_ignore_ascii_case(name) || r.short_code.eq_ignore_ascii_case(name))
}

/// Returns the hostname of `service` in `region`.
///
/// Unknown regions are assumed to be in the [DEFAULT_REALM], and their name
/// is used verbatim (in lowercase) as the region identifier.
pub fn service_host(service: &str, region: &str) -> String {
    match lookup(region) {
        Some(info) => format!("{service}.{}.{}", info.id, info.realm.domain),
        None => format!(
            "{service}.{}.{}",
            region.trim().to_ascii_lowercase(),
            DEFAULT_REALM.domain
        ),
    }
}

/// Computes the endpoint for a client.
///
/// An explicit endpoint wins over the region. In both cases the API version
/// is appended, so the result is always `{origin}/{api_version}`.
pub fn endpoint(
    endpoint: Option<&str>,
    region: Option<&str>,
    service: &str,
    api_version: &str,
) -> gax::client_builder::Result<String> {
    if let Some(endpoint) = endpoint {
        let origin = endpoint.trim_end_matches('/');
        let uri = Uri::from_str(origin).map_err(BuilderError::configuration)?;
        if uri.authority().is_none() {
            return Err(BuilderError::configuration(format!(
                "missing authority in endpoint {endpoint}"
            )));
        }
        return Ok(format!("{origin}/{api_version}"));
    }
    match region {
        Some(r) if !r.trim().is_empty() => {
            Ok(format!("https://{}/{api_version}", service_host(service, r)))
        }
        Some(_) => Err(BuilderError::configuration("the region is blank")),
        None => Err(BuilderError::configuration(
            "the client needs a region or an endpoint",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("us-ashburn-1", "us-ashburn-1", "oc1")]
    #[test_case("iad", "us-ashburn-1", "oc1")]
    #[test_case("IAD", "us-ashburn-1", "oc1")]
    #[test_case(" fra ", "eu-frankfurt-1", "oc1")]
    #[test_case("us-langley-1", "us-langley-1", "oc2")]
    #[test_case("ric", "us-gov-ashburn-1", "oc3")]
    #[test_case("uk-gov-london-1", "uk-gov-london-1", "oc4")]
    #[test_case("nja", "ap-chiyoda-1", "oc8")]
    fn lookup_known(name: &str, id: &str, realm: &str) {
        let got = lookup(name).unwrap();
        assert_eq!(got.id, id);
        assert_eq!(got.realm.key, realm);
    }

    #[test]
    fn lookup_unknown() {
        assert_eq!(lookup("xx-nowhere-1"), None);
    }

    #[test]
    fn table_is_consistent() {
        let mut ids = std::collections::HashSet::new();
        let mut codes = std::collections::HashSet::new();
        for r in REGIONS {
            assert!(ids.insert(r.id), "duplicate region {r:?}");
            assert!(codes.insert(r.short_code), "duplicate short code {r:?}");
            assert_eq!(r.short_code.len(), 3, "{r:?}");
        }
    }

    #[test_case("iad", "identity.us-ashburn-1.oraclecloud.com")]
    #[test_case("us-gov-phoenix-1", "identity.us-gov-phoenix-1.oraclegovcloud.com")]
    #[test_case("uk-gov-cardiff-1", "identity.uk-gov-cardiff-1.oraclegovcloud.uk")]
    #[test_case("XX-Nowhere-1", "identity.xx-nowhere-1.oraclecloud.com")]
    fn host(region: &str, want: &str) {
        assert_eq!(service_host("identity", region), want);
    }

    const PRIVATE: &str = "https://private.example.com/20160918";

    const ASHBURN: &str = "https://identity.us-ashburn-1.oraclecloud.com/20160918";
    const LOCAL: &str = "http://127.0.0.1:8080/20160918";

    #[test_case(None, Some("iad"), ASHBURN; "region")]
    #[test_case(Some("https://private.example.com"), Some("iad"), PRIVATE; "endpoint wins")]
    #[test_case(Some("https://private.example.com/"), None, PRIVATE; "trailing slash")]
    #[test_case(Some("http://127.0.0.1:8080//"), None, LOCAL; "many slashes")]
    fn derive(custom: Option<&str>, region: Option<&str>, want: &str) -> anyhow::Result<()> {
        let got = endpoint(custom, region, "identity", "20160918")?;
        assert_eq!(got, want);
        Ok(())
    }

    #[test_case(None, None; "nothing")]
    #[test_case(None, Some("  "); "blank region")]
    #[test_case(Some("/no/host"), None; "no authority")]
    fn derive_errors(custom: Option<&str>, region: Option<&str>) {
        let err = endpoint(custom, region, "identity", "20160918").unwrap_err();
        assert!(err.is_configuration(), "{err:?}");
    }
}
