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

//! The operations in the identity service.
//!
//! Each operation is described by an [OperationSpec]: its HTTP method, path
//! template, required arguments, the optional query parameters it accepts,
//! whether it takes a body, and whether it honors `if-match` preconditions.
//! Use [Identity::call][crate::client::Identity::call] to send any of them.

use crate::model::{
    AccessLevel, DomainLicenseType, DomainLifecycleState, DomainType, LifecycleState, SortBy,
    SortOrder,
};
use gaxi::operation::{
    BodySpec, HttpMethod, OperationSpec, ParameterKind, ParameterSpec, QuerySpec,
};
use gaxi::signer::SigningStrategy;

#[allow(clippy::too_many_arguments)]
const fn op(
    name: &'static str,
    method: HttpMethod,
    path_template: &'static str,
    parameters: &'static [ParameterSpec],
    query: &'static [QuerySpec],
    body: BodySpec,
    conditional: bool,
    response_type: Option<&'static str>,
) -> OperationSpec {
    OperationSpec {
        name,
        method,
        path_template,
        parameters,
        query,
        body,
        conditional,
        response_type,
        signing: SigningStrategy::Standard,
    }
}

const fn list(
    name: &'static str,
    path_template: &'static str,
    parameters: &'static [ParameterSpec],
    query: &'static [QuerySpec],
    response_type: &'static str,
) -> OperationSpec {
    op(
        name,
        HttpMethod::Get,
        path_template,
        parameters,
        query,
        BodySpec::None,
        false,
        Some(response_type),
    )
}

const fn get(
    name: &'static str,
    path_template: &'static str,
    parameters: &'static [ParameterSpec],
    response_type: &'static str,
) -> OperationSpec {
    op(
        name,
        HttpMethod::Get,
        path_template,
        parameters,
        &[],
        BodySpec::None,
        false,
        Some(response_type),
    )
}

const fn create(
    name: &'static str,
    path_template: &'static str,
    parameters: &'static [ParameterSpec],
    response_type: &'static str,
) -> OperationSpec {
    op(
        name,
        HttpMethod::Post,
        path_template,
        parameters,
        &[],
        BodySpec::Required,
        false,
        Some(response_type),
    )
}

const fn update(
    name: &'static str,
    path_template: &'static str,
    parameters: &'static [ParameterSpec],
    response_type: &'static str,
) -> OperationSpec {
    op(
        name,
        HttpMethod::Put,
        path_template,
        parameters,
        &[],
        BodySpec::Required,
        true,
        Some(response_type),
    )
}

const fn delete(
    name: &'static str,
    path_template: &'static str,
    parameters: &'static [ParameterSpec],
) -> OperationSpec {
    op(name, HttpMethod::Delete, path_template, parameters, &[], BodySpec::None, true, None)
}

const fn action(
    name: &'static str,
    path_template: &'static str,
    parameters: &'static [ParameterSpec],
    body: BodySpec,
    conditional: bool,
    response_type: Option<&'static str>,
) -> OperationSpec {
    op(name, HttpMethod::Post, path_template, parameters, &[], body, conditional, response_type)
}

const IN_COMPARTMENT: &[ParameterSpec] =
    &[ParameterSpec::query("compartmentId", ParameterKind::Identifier)];
const USER: &[ParameterSpec] = &[ParameterSpec::path_id("userId")];
const GROUP: &[ParameterSpec] = &[ParameterSpec::path_id("groupId")];
const DYNAMIC_GROUP: &[ParameterSpec] = &[ParameterSpec::path_id("dynamicGroupId")];
const COMPARTMENT: &[ParameterSpec] = &[ParameterSpec::path_id("compartmentId")];
const POLICY: &[ParameterSpec] = &[ParameterSpec::path_id("policyId")];
const TAG_NAMESPACE: &[ParameterSpec] = &[ParameterSpec::path_id("tagNamespaceId")];
const TAG: &[ParameterSpec] = &[
    ParameterSpec::path_id("tagNamespaceId"),
    ParameterSpec::path_id("tagName"),
];
const TAG_DEFAULT: &[ParameterSpec] = &[ParameterSpec::path_id("tagDefaultId")];
const DOMAIN: &[ParameterSpec] = &[ParameterSpec::path_id("domainId")];
const NETWORK_SOURCE: &[ParameterSpec] = &[ParameterSpec::path_id("networkSourceId")];
const TENANCY: &[ParameterSpec] = &[ParameterSpec::path_id("tenancyId")];
const IAM_WORK_REQUEST: &[ParameterSpec] = &[ParameterSpec::path_id("iamWorkRequestId")];
const WORK_REQUEST: &[ParameterSpec] = &[ParameterSpec::path_id("workRequestId")];
const MEMBERSHIP: &[ParameterSpec] = &[ParameterSpec::path_id("userGroupMembershipId")];

const PAGE: QuerySpec = QuerySpec::any("page");
const LIMIT: QuerySpec = QuerySpec::any("limit");
const NAME: QuerySpec = QuerySpec::any("name");
const SORT_BY: QuerySpec = QuerySpec::one_of("sortBy", SortBy::VALUES);
const SORT_ORDER: QuerySpec = QuerySpec::one_of("sortOrder", SortOrder::VALUES);
const LIFECYCLE_STATE: QuerySpec = QuerySpec::one_of("lifecycleState", LifecycleState::VALUES);

const PAGED: &[QuerySpec] = &[PAGE, LIMIT];
const FILTERED: &[QuerySpec] = &[PAGE, LIMIT, NAME, SORT_BY, SORT_ORDER, LIFECYCLE_STATE];
const SORTED: &[QuerySpec] = &[PAGE, LIMIT, SORT_BY, SORT_ORDER];
const WORK_REQUESTS: &[QuerySpec] = &[PAGE, LIMIT, QuerySpec::any("resourceIdentifier")];

// Users
pub const LIST_USERS: OperationSpec = list(
    "ListUsers",
    "/users",
    IN_COMPARTMENT,
    &[
        PAGE,
        LIMIT,
        NAME,
        SORT_BY,
        SORT_ORDER,
        LIFECYCLE_STATE,
        QuerySpec::any("identityProviderId"),
        QuerySpec::any("externalIdentifier"),
    ],
    "Vec<User>",
);
pub const GET_USER: OperationSpec = get("GetUser", "/users/{userId}", USER, "User");
pub const CREATE_USER: OperationSpec = create("CreateUser", "/users", &[], "User");
pub const UPDATE_USER: OperationSpec = update("UpdateUser", "/users/{userId}", USER, "User");
pub const DELETE_USER: OperationSpec = delete("DeleteUser", "/users/{userId}", USER);
pub const UPDATE_USER_STATE: OperationSpec =
    update("UpdateUserState", "/users/{userId}/state", USER, "User");
pub const UPDATE_USER_CAPABILITIES: OperationSpec =
    update("UpdateUserCapabilities", "/users/{userId}/capabilities", USER, "User");
pub const CREATE_OR_RESET_UI_PASSWORD: OperationSpec = action(
    "CreateOrResetUIPassword",
    "/users/{userId}/uiPassword",
    USER,
    BodySpec::None,
    false,
    Some("UIPassword"),
);
pub const GET_USER_UI_PASSWORD_INFORMATION: OperationSpec = get(
    "GetUserUIPasswordInformation",
    "/users/{userId}/uiPassword",
    USER,
    "UIPasswordInformation",
);

// User credentials
pub const LIST_API_KEYS: OperationSpec =
    list("ListApiKeys", "/users/{userId}/apiKeys", USER, &[], "Vec<ApiKey>");
pub const UPLOAD_API_KEY: OperationSpec =
    create("UploadApiKey", "/users/{userId}/apiKeys", USER, "ApiKey");
pub const DELETE_API_KEY: OperationSpec = delete(
    "DeleteApiKey",
    "/users/{userId}/apiKeys/{fingerprint}",
    &[
        ParameterSpec::path_id("userId"),
        ParameterSpec::path_id("fingerprint"),
    ],
);
pub const LIST_AUTH_TOKENS: OperationSpec =
    list("ListAuthTokens", "/users/{userId}/authTokens", USER, &[], "Vec<AuthToken>");
pub const CREATE_AUTH_TOKEN: OperationSpec =
    create("CreateAuthToken", "/users/{userId}/authTokens", USER, "AuthToken");
pub const UPDATE_AUTH_TOKEN: OperationSpec = update(
    "UpdateAuthToken",
    "/users/{userId}/authTokens/{authTokenId}",
    &[
        ParameterSpec::path_id("userId"),
        ParameterSpec::path_id("authTokenId"),
    ],
    "AuthToken",
);
pub const DELETE_AUTH_TOKEN: OperationSpec = delete(
    "DeleteAuthToken",
    "/users/{userId}/authTokens/{authTokenId}",
    &[
        ParameterSpec::path_id("userId"),
        ParameterSpec::path_id("authTokenId"),
    ],
);
pub const LIST_CUSTOMER_SECRET_KEYS: OperationSpec = list(
    "ListCustomerSecretKeys",
    "/users/{userId}/customerSecretKeys",
    USER,
    &[],
    "Vec<CustomerSecretKeySummary>",
);
pub const CREATE_CUSTOMER_SECRET_KEY: OperationSpec = create(
    "CreateCustomerSecretKey",
    "/users/{userId}/customerSecretKeys",
    USER,
    "CustomerSecretKey",
);
pub const DELETE_CUSTOMER_SECRET_KEY: OperationSpec = delete(
    "DeleteCustomerSecretKey",
    "/users/{userId}/customerSecretKeys/{customerSecretKeyId}",
    &[
        ParameterSpec::path_id("userId"),
        ParameterSpec::path_id("customerSecretKeyId"),
    ],
);
pub const LIST_SMTP_CREDENTIALS: OperationSpec = list(
    "ListSmtpCredentials",
    "/users/{userId}/smtpCredentials",
    USER,
    &[],
    "Vec<SmtpCredentialSummary>",
);
pub const CREATE_SMTP_CREDENTIAL: OperationSpec = create(
    "CreateSmtpCredential",
    "/users/{userId}/smtpCredentials",
    USER,
    "SmtpCredential",
);
pub const DELETE_SMTP_CREDENTIAL: OperationSpec = delete(
    "DeleteSmtpCredential",
    "/users/{userId}/smtpCredentials/{smtpCredentialId}",
    &[
        ParameterSpec::path_id("userId"),
        ParameterSpec::path_id("smtpCredentialId"),
    ],
);
pub const LIST_MFA_TOTP_DEVICES: OperationSpec = list(
    "ListMfaTotpDevices",
    "/users/{userId}/mfaTotpDevices",
    USER,
    SORTED,
    "Vec<MfaTotpDeviceSummary>",
);
pub const CREATE_MFA_TOTP_DEVICE: OperationSpec = action(
    "CreateMfaTotpDevice",
    "/users/{userId}/mfaTotpDevices",
    USER,
    BodySpec::None,
    false,
    Some("MfaTotpDevice"),
);
pub const DELETE_MFA_TOTP_DEVICE: OperationSpec = delete(
    "DeleteMfaTotpDevice",
    "/users/{userId}/mfaTotpDevices/{mfaTotpDeviceId}",
    &[
        ParameterSpec::path_id("userId"),
        ParameterSpec::path_id("mfaTotpDeviceId"),
    ],
);
pub const ACTIVATE_MFA_TOTP_DEVICE: OperationSpec = action(
    "ActivateMfaTotpDevice",
    "/users/{userId}/mfaTotpDevices/{mfaTotpDeviceId}/actions/activate",
    &[
        ParameterSpec::path_id("userId"),
        ParameterSpec::path_id("mfaTotpDeviceId"),
    ],
    BodySpec::Required,
    true,
    Some("MfaTotpDeviceSummary"),
);

// Groups and memberships
pub const LIST_GROUPS: OperationSpec =
    list("ListGroups", "/groups", IN_COMPARTMENT, FILTERED, "Vec<Group>");
pub const GET_GROUP: OperationSpec = get("GetGroup", "/groups/{groupId}", GROUP, "Group");
pub const CREATE_GROUP: OperationSpec = create("CreateGroup", "/groups", &[], "Group");
pub const UPDATE_GROUP: OperationSpec = update("UpdateGroup", "/groups/{groupId}", GROUP, "Group");
pub const DELETE_GROUP: OperationSpec = delete("DeleteGroup", "/groups/{groupId}", GROUP);
pub const LIST_USER_GROUP_MEMBERSHIPS: OperationSpec = list(
    "ListUserGroupMemberships",
    "/userGroupMemberships",
    IN_COMPARTMENT,
    &[PAGE, LIMIT, QuerySpec::any("userId"), QuerySpec::any("groupId")],
    "Vec<UserGroupMembership>",
);
pub const GET_USER_GROUP_MEMBERSHIP: OperationSpec = get(
    "GetUserGroupMembership",
    "/userGroupMemberships/{userGroupMembershipId}",
    MEMBERSHIP,
    "UserGroupMembership",
);
pub const ADD_USER_TO_GROUP: OperationSpec = create(
    "AddUserToGroup",
    "/userGroupMemberships",
    &[],
    "UserGroupMembership",
);
pub const REMOVE_USER_FROM_GROUP: OperationSpec = delete(
    "RemoveUserFromGroup",
    "/userGroupMemberships/{userGroupMembershipId}",
    MEMBERSHIP,
);
pub const LIST_DYNAMIC_GROUPS: OperationSpec = list(
    "ListDynamicGroups",
    "/dynamicGroups",
    IN_COMPARTMENT,
    FILTERED,
    "Vec<DynamicGroup>",
);
pub const GET_DYNAMIC_GROUP: OperationSpec =
    get("GetDynamicGroup", "/dynamicGroups/{dynamicGroupId}", DYNAMIC_GROUP, "DynamicGroup");
pub const CREATE_DYNAMIC_GROUP: OperationSpec =
    create("CreateDynamicGroup", "/dynamicGroups", &[], "DynamicGroup");
pub const UPDATE_DYNAMIC_GROUP: OperationSpec = update(
    "UpdateDynamicGroup",
    "/dynamicGroups/{dynamicGroupId}",
    DYNAMIC_GROUP,
    "DynamicGroup",
);
pub const DELETE_DYNAMIC_GROUP: OperationSpec =
    delete("DeleteDynamicGroup", "/dynamicGroups/{dynamicGroupId}", DYNAMIC_GROUP);

// Compartments
pub const LIST_COMPARTMENTS: OperationSpec = list(
    "ListCompartments",
    "/compartments",
    IN_COMPARTMENT,
    &[
        PAGE,
        LIMIT,
        NAME,
        SORT_BY,
        SORT_ORDER,
        LIFECYCLE_STATE,
        QuerySpec::one_of("accessLevel", AccessLevel::VALUES),
        QuerySpec::one_of("compartmentIdInSubtree", &["true", "false"]),
    ],
    "Vec<Compartment>",
);
pub const GET_COMPARTMENT: OperationSpec =
    get("GetCompartment", "/compartments/{compartmentId}", COMPARTMENT, "Compartment");
pub const CREATE_COMPARTMENT: OperationSpec =
    create("CreateCompartment", "/compartments", &[], "Compartment");
pub const UPDATE_COMPARTMENT: OperationSpec = update(
    "UpdateCompartment",
    "/compartments/{compartmentId}",
    COMPARTMENT,
    "Compartment",
);
pub const DELETE_COMPARTMENT: OperationSpec =
    delete("DeleteCompartment", "/compartments/{compartmentId}", COMPARTMENT);
pub const MOVE_COMPARTMENT: OperationSpec = action(
    "MoveCompartment",
    "/compartments/{compartmentId}/actions/moveCompartment",
    COMPARTMENT,
    BodySpec::Required,
    true,
    None,
);
pub const RECOVER_COMPARTMENT: OperationSpec = action(
    "RecoverCompartment",
    "/compartments/{compartmentId}/actions/recoverCompartment",
    COMPARTMENT,
    BodySpec::None,
    true,
    Some("Compartment"),
);
pub const BULK_DELETE_RESOURCES: OperationSpec = action(
    "BulkDeleteResources",
    "/compartments/{compartmentId}/actions/bulkDeleteResources",
    COMPARTMENT,
    BodySpec::Required,
    false,
    None,
);
pub const BULK_MOVE_RESOURCES: OperationSpec = action(
    "BulkMoveResources",
    "/compartments/{compartmentId}/actions/bulkMoveResources",
    COMPARTMENT,
    BodySpec::Required,
    false,
    None,
);

// Policies
pub const LIST_POLICIES: OperationSpec =
    list("ListPolicies", "/policies", IN_COMPARTMENT, FILTERED, "Vec<Policy>");
pub const GET_POLICY: OperationSpec = get("GetPolicy", "/policies/{policyId}", POLICY, "Policy");
pub const CREATE_POLICY: OperationSpec = create("CreatePolicy", "/policies", &[], "Policy");
pub const UPDATE_POLICY: OperationSpec =
    update("UpdatePolicy", "/policies/{policyId}", POLICY, "Policy");
pub const DELETE_POLICY: OperationSpec = delete("DeletePolicy", "/policies/{policyId}", POLICY);

// Tagging
pub const LIST_TAG_NAMESPACES: OperationSpec = list(
    "ListTagNamespaces",
    "/tagNamespaces",
    IN_COMPARTMENT,
    &[
        PAGE,
        LIMIT,
        LIFECYCLE_STATE,
        QuerySpec::one_of("includeSubcompartments", &["true", "false"]),
    ],
    "Vec<TagNamespaceSummary>",
);
pub const GET_TAG_NAMESPACE: OperationSpec =
    get("GetTagNamespace", "/tagNamespaces/{tagNamespaceId}", TAG_NAMESPACE, "TagNamespace");
pub const CREATE_TAG_NAMESPACE: OperationSpec =
    create("CreateTagNamespace", "/tagNamespaces", &[], "TagNamespace");
pub const UPDATE_TAG_NAMESPACE: OperationSpec = op(
    "UpdateTagNamespace",
    HttpMethod::Put,
    "/tagNamespaces/{tagNamespaceId}",
    TAG_NAMESPACE,
    &[],
    BodySpec::Required,
    false,
    Some("TagNamespace"),
);
pub const DELETE_TAG_NAMESPACE: OperationSpec =
    delete("DeleteTagNamespace", "/tagNamespaces/{tagNamespaceId}", TAG_NAMESPACE);
pub const CASCADE_DELETE_TAG_NAMESPACE: OperationSpec = action(
    "CascadeDeleteTagNamespace",
    "/tagNamespaces/{tagNamespaceId}/actions/cascadeDelete",
    TAG_NAMESPACE,
    BodySpec::None,
    true,
    None,
);
pub const LIST_TAGS: OperationSpec = list(
    "ListTags",
    "/tagNamespaces/{tagNamespaceId}/tags",
    TAG_NAMESPACE,
    &[PAGE, LIMIT, LIFECYCLE_STATE],
    "Vec<TagSummary>",
);
pub const GET_TAG: OperationSpec =
    get("GetTag", "/tagNamespaces/{tagNamespaceId}/tags/{tagName}", TAG, "Tag");
pub const CREATE_TAG: OperationSpec =
    create("CreateTag", "/tagNamespaces/{tagNamespaceId}/tags", TAG_NAMESPACE, "Tag");
pub const UPDATE_TAG: OperationSpec =
    update("UpdateTag", "/tagNamespaces/{tagNamespaceId}/tags/{tagName}", TAG, "Tag");
pub const DELETE_TAG: OperationSpec =
    delete("DeleteTag", "/tagNamespaces/{tagNamespaceId}/tags/{tagName}", TAG);
pub const LIST_TAG_DEFAULTS: OperationSpec = list(
    "ListTagDefaults",
    "/tagDefaults",
    &[],
    &[
        PAGE,
        LIMIT,
        LIFECYCLE_STATE,
        QuerySpec::any("id"),
        QuerySpec::any("compartmentId"),
        QuerySpec::any("tagDefinitionId"),
    ],
    "Vec<TagDefaultSummary>",
);
pub const GET_TAG_DEFAULT: OperationSpec =
    get("GetTagDefault", "/tagDefaults/{tagDefaultId}", TAG_DEFAULT, "TagDefault");
pub const CREATE_TAG_DEFAULT: OperationSpec =
    create("CreateTagDefault", "/tagDefaults", &[], "TagDefault");
pub const UPDATE_TAG_DEFAULT: OperationSpec =
    update("UpdateTagDefault", "/tagDefaults/{tagDefaultId}", TAG_DEFAULT, "TagDefault");
pub const DELETE_TAG_DEFAULT: OperationSpec =
    delete("DeleteTagDefault", "/tagDefaults/{tagDefaultId}", TAG_DEFAULT);

// Identity domains
pub const LIST_DOMAINS: OperationSpec = list(
    "ListDomains",
    "/domains",
    IN_COMPARTMENT,
    &[
        PAGE,
        LIMIT,
        NAME,
        SORT_BY,
        SORT_ORDER,
        QuerySpec::one_of("lifecycleState", DomainLifecycleState::VALUES),
        QuerySpec::one_of("type", DomainType::VALUES),
        QuerySpec::one_of("licenseType", DomainLicenseType::VALUES),
        QuerySpec::any("displayName"),
        QuerySpec::any("url"),
        QuerySpec::any("homeRegionUrl"),
        QuerySpec::one_of("isHiddenOnLogin", &["true", "false"]),
    ],
    "Vec<DomainSummary>",
);
pub const GET_DOMAIN: OperationSpec = get("GetDomain", "/domains/{domainId}", DOMAIN, "Domain");
pub const CREATE_DOMAIN: OperationSpec = action(
    "CreateDomain",
    "/domains",
    &[],
    BodySpec::Required,
    false,
    None,
);
pub const UPDATE_DOMAIN: OperationSpec = op(
    "UpdateDomain",
    HttpMethod::Put,
    "/domains/{domainId}",
    DOMAIN,
    &[],
    BodySpec::Required,
    true,
    None,
);
pub const DELETE_DOMAIN: OperationSpec = delete("DeleteDomain", "/domains/{domainId}", DOMAIN);
pub const ACTIVATE_DOMAIN: OperationSpec = action(
    "ActivateDomain",
    "/domains/{domainId}/actions/activate",
    DOMAIN,
    BodySpec::None,
    true,
    None,
);
pub const DEACTIVATE_DOMAIN: OperationSpec = action(
    "DeactivateDomain",
    "/domains/{domainId}/actions/deactivate",
    DOMAIN,
    BodySpec::None,
    true,
    None,
);
pub const CHANGE_DOMAIN_LICENSE_TYPE: OperationSpec = action(
    "ChangeDomainLicenseType",
    "/domains/{domainId}/actions/changeLicenseType",
    DOMAIN,
    BodySpec::Required,
    true,
    None,
);
pub const LIST_IAM_WORK_REQUESTS: OperationSpec = list(
    "ListIamWorkRequests",
    "/iamWorkRequests",
    IN_COMPARTMENT,
    WORK_REQUESTS,
    "Vec<IamWorkRequestSummary>",
);
pub const GET_IAM_WORK_REQUEST: OperationSpec = get(
    "GetIamWorkRequest",
    "/iamWorkRequests/{iamWorkRequestId}",
    IAM_WORK_REQUEST,
    "IamWorkRequest",
);
pub const LIST_IAM_WORK_REQUEST_ERRORS: OperationSpec = list(
    "ListIamWorkRequestErrors",
    "/iamWorkRequests/{iamWorkRequestId}/errors",
    IAM_WORK_REQUEST,
    &[PAGE, LIMIT, SORT_ORDER],
    "Vec<IamWorkRequestErrorSummary>",
);
pub const LIST_IAM_WORK_REQUEST_LOGS: OperationSpec = list(
    "ListIamWorkRequestLogs",
    "/iamWorkRequests/{iamWorkRequestId}/logs",
    IAM_WORK_REQUEST,
    &[PAGE, LIMIT, SORT_ORDER],
    "Vec<IamWorkRequestLogSummary>",
);

// Network sources
pub const LIST_NETWORK_SOURCES: OperationSpec = list(
    "ListNetworkSources",
    "/networkSources",
    IN_COMPARTMENT,
    FILTERED,
    "Vec<NetworkSourcesSummary>",
);
pub const GET_NETWORK_SOURCE: OperationSpec = get(
    "GetNetworkSource",
    "/networkSources/{networkSourceId}",
    NETWORK_SOURCE,
    "NetworkSources",
);
pub const CREATE_NETWORK_SOURCE: OperationSpec =
    create("CreateNetworkSource", "/networkSources", &[], "NetworkSources");
pub const UPDATE_NETWORK_SOURCE: OperationSpec = update(
    "UpdateNetworkSource",
    "/networkSources/{networkSourceId}",
    NETWORK_SOURCE,
    "NetworkSources",
);
pub const DELETE_NETWORK_SOURCE: OperationSpec =
    delete("DeleteNetworkSource", "/networkSources/{networkSourceId}", NETWORK_SOURCE);

// Work requests
pub const LIST_WORK_REQUESTS: OperationSpec = list(
    "ListWorkRequests",
    "/workRequests",
    IN_COMPARTMENT,
    WORK_REQUESTS,
    "Vec<WorkRequestSummary>",
);
pub const GET_WORK_REQUEST: OperationSpec =
    get("GetWorkRequest", "/workRequests/{workRequestId}", WORK_REQUEST, "WorkRequest");
pub const LIST_TAGGING_WORK_REQUESTS: OperationSpec = list(
    "ListTaggingWorkRequests",
    "/taggingWorkRequests",
    IN_COMPARTMENT,
    WORK_REQUESTS,
    "Vec<TaggingWorkRequestSummary>",
);
pub const GET_TAGGING_WORK_REQUEST: OperationSpec = get(
    "GetTaggingWorkRequest",
    "/taggingWorkRequests/{workRequestId}",
    WORK_REQUEST,
    "TaggingWorkRequest",
);

// Tenancy and regions
pub const GET_TENANCY: OperationSpec =
    get("GetTenancy", "/tenancies/{tenancyId}", TENANCY, "Tenancy");
pub const LIST_REGIONS: OperationSpec = list("ListRegions", "/regions", &[], &[], "Vec<Region>");
pub const LIST_REGION_SUBSCRIPTIONS: OperationSpec = list(
    "ListRegionSubscriptions",
    "/tenancies/{tenancyId}/regionSubscriptions",
    TENANCY,
    &[],
    "Vec<RegionSubscription>",
);
pub const CREATE_REGION_SUBSCRIPTION: OperationSpec = create(
    "CreateRegionSubscription",
    "/tenancies/{tenancyId}/regionSubscriptions",
    TENANCY,
    "RegionSubscription",
);
pub const LIST_AVAILABILITY_DOMAINS: OperationSpec = list(
    "ListAvailabilityDomains",
    "/availabilityDomains",
    IN_COMPARTMENT,
    &[],
    "Vec<AvailabilityDomain>",
);
pub const LIST_FAULT_DOMAINS: OperationSpec = list(
    "ListFaultDomains",
    "/faultDomains",
    &[
        ParameterSpec::query("compartmentId", ParameterKind::Identifier),
        ParameterSpec::query("availabilityDomain", ParameterKind::Value),
    ],
    &[],
    "Vec<FaultDomain>",
);

/// Every operation in the service.
pub static ALL: &[&OperationSpec] = &[
    &LIST_USERS,
    &GET_USER,
    &CREATE_USER,
    &UPDATE_USER,
    &DELETE_USER,
    &UPDATE_USER_STATE,
    &UPDATE_USER_CAPABILITIES,
    &CREATE_OR_RESET_UI_PASSWORD,
    &GET_USER_UI_PASSWORD_INFORMATION,
    &LIST_API_KEYS,
    &UPLOAD_API_KEY,
    &DELETE_API_KEY,
    &LIST_AUTH_TOKENS,
    &CREATE_AUTH_TOKEN,
    &UPDATE_AUTH_TOKEN,
    &DELETE_AUTH_TOKEN,
    &LIST_CUSTOMER_SECRET_KEYS,
    &CREATE_CUSTOMER_SECRET_KEY,
    &DELETE_CUSTOMER_SECRET_KEY,
    &LIST_SMTP_CREDENTIALS,
    &CREATE_SMTP_CREDENTIAL,
    &DELETE_SMTP_CREDENTIAL,
    &LIST_MFA_TOTP_DEVICES,
    &CREATE_MFA_TOTP_DEVICE,
    &DELETE_MFA_TOTP_DEVICE,
    &ACTIVATE_MFA_TOTP_DEVICE,
    &LIST_GROUPS,
    &GET_GROUP,
    &CREATE_GROUP,
    &UPDATE_GROUP,
    &DELETE_GROUP,
    &LIST_USER_GROUP_MEMBERSHIPS,
    &GET_USER_GROUP_MEMBERSHIP,
    &ADD_USER_TO_GROUP,
    &REMOVE_USER_FROM_GROUP,
    &LIST_DYNAMIC_GROUPS,
    &GET_DYNAMIC_GROUP,
    &CREATE_DYNAMIC_GROUP,
    &UPDATE_DYNAMIC_GROUP,
    &DELETE_DYNAMIC_GROUP,
    &LIST_COMPARTMENTS,
    &GET_COMPARTMENT,
    &CREATE_COMPARTMENT,
    &UPDATE_COMPARTMENT,
    &DELETE_COMPARTMENT,
    &MOVE_COMPARTMENT,
    &RECOVER_COMPARTMENT,
    &BULK_DELETE_RESOURCES,
    &BULK_MOVE_RESOURCES,
    &LIST_POLICIES,
    &GET_POLICY,
    &CREATE_POLICY,
    &UPDATE_POLICY,
    &DELETE_POLICY,
    &LIST_TAG_NAMESPACES,
    &GET_TAG_NAMESPACE,
    &CREATE_TAG_NAMESPACE,
    &UPDATE_TAG_NAMESPACE,
    &DELETE_TAG_NAMESPACE,
    &CASCADE_DELETE_TAG_NAMESPACE,
    &LIST_TAGS,
    &GET_TAG,
    &CREATE_TAG,
    &UPDATE_TAG,
    &DELETE_TAG,
    &LIST_TAG_DEFAULTS,
    &GET_TAG_DEFAULT,
    &CREATE_TAG_DEFAULT,
    &UPDATE_TAG_DEFAULT,
    &DELETE_TAG_DEFAULT,
    &LIST_DOMAINS,
    &GET_DOMAIN,
    &CREATE_DOMAIN,
    &UPDATE_DOMAIN,
    &DELETE_DOMAIN,
    &ACTIVATE_DOMAIN,
    &DEACTIVATE_DOMAIN,
    &CHANGE_DOMAIN_LICENSE_TYPE,
    &LIST_IAM_WORK_REQUESTS,
    &GET_IAM_WORK_REQUEST,
    &LIST_IAM_WORK_REQUEST_ERRORS,
    &LIST_IAM_WORK_REQUEST_LOGS,
    &LIST_NETWORK_SOURCES,
    &GET_NETWORK_SOURCE,
    &CREATE_NETWORK_SOURCE,
    &UPDATE_NETWORK_SOURCE,
    &DELETE_NETWORK_SOURCE,
    &LIST_WORK_REQUESTS,
    &GET_WORK_REQUEST,
    &LIST_TAGGING_WORK_REQUESTS,
    &GET_TAGGING_WORK_REQUEST,
    &GET_TENANCY,
    &LIST_REGIONS,
    &LIST_REGION_SUBSCRIPTIONS,
    &CREATE_REGION_SUBSCRIPTION,
    &LIST_AVAILABILITY_DOMAINS,
    &LIST_FAULT_DOMAINS,
];

/// Finds an operation by name, e.g. `GetUser`.
pub fn find(name: &str) -> Option<&'static OperationSpec> {
    ALL.iter().copied().find(|op| op.name == name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use gaxi::operation::Location;
    use std::collections::BTreeSet;

    #[test]
    fn names_are_unique() {
        let names = ALL.iter().map(|op| op.name).collect::<BTreeSet<_>>();
        assert_eq!(names.len(), ALL.len());
        assert!(ALL.len() >= 50, "{}", ALL.len());
    }

    #[test]
    fn placeholders_have_parameters() {
        for op in ALL {
            let placeholders = op.placeholders().collect::<BTreeSet<_>>();
            let in_path = op
                .parameters
                .iter()
                .filter_map(|p| match p.location {
                    Location::Path(name) => Some(name),
                    Location::Query(_) => None,
                })
                .collect::<BTreeSet<_>>();
            assert_eq!(placeholders, in_path, "{}", op.name);
        }
    }

    #[test]
    fn queries_do_not_collide() {
        for op in ALL {
            let mut seen = BTreeSet::new();
            for q in op.query {
                assert!(seen.insert(q.name), "{} {}", op.name, q.name);
            }
            for p in op.parameters {
                if let Location::Query(name) = p.location {
                    assert!(seen.insert(name), "{} {}", op.name, name);
                }
            }
        }
    }

    #[test]
    fn reads_have_no_body() {
        for op in ALL.iter().filter(|op| !op.method.is_mutating()) {
            assert_eq!(op.body, BodySpec::None, "{}", op.name);
            assert!(!op.conditional, "{}", op.name);
            assert!(op.response_type.is_some(), "{}", op.name);
        }
    }

    #[test]
    fn paths() {
        for op in ALL {
            assert!(op.path_template.starts_with('/'), "{}", op.name);
            assert!(!op.path_template.ends_with('/'), "{}", op.name);
        }
    }

    #[test]
    fn lookup() {
        assert_eq!(find("GetUser"), Some(&GET_USER));
        assert_eq!(find("ListFaultDomains").map(|op| op.parameters.len()), Some(2));
        assert_eq!(find("getUser"), None);
    }
}
