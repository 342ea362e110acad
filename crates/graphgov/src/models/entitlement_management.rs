//! Entitlement management: catalogs, access packages, policies, assignments
//! and the requests that create them.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    AccessPackageAssignmentState, AccessPackageRequestState, AccessPackageRequestType,
    AllowedTargetScope, ConnectedOrganizationState, DirectoryObject, Entity,
    ExpirationPatternType, Group, Identity, PatternedRecurrence,
};

/// The `/identityGovernance/entitlementManagement` container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementManagement {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_package_assignment_approvals: Option<Vec<Approval>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_packages: Option<Vec<AccessPackage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_policies: Option<Vec<AccessPackageAssignmentPolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_requests: Option<Vec<AccessPackageAssignmentRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignments: Option<Vec<AccessPackageAssignment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalogs: Option<Vec<AccessPackageCatalog>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_organizations: Option<Vec<ConnectedOrganization>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_environments: Option<Vec<AccessPackageResourceEnvironment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_requests: Option<Vec<AccessPackageResourceRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_role_scopes: Option<Vec<AccessPackageResourceRoleScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<AccessPackageResource>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<EntitlementManagementSettings>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// A bundle of resource roles that users request together.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackage {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_packages_incompatible_with: Option<Vec<AccessPackage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_policies: Option<Vec<AccessPackageAssignmentPolicy>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<AccessPackageCatalog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incompatible_access_packages: Option<Vec<AccessPackage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub incompatible_groups: Option<Vec<Group>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_hidden: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_role_scopes: Option<Vec<AccessPackageResourceRoleScope>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// A container of access packages and the resources they grant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageCatalog {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_packages: Option<Vec<AccessPackage>>,
    /// `userManaged`, `serviceDefault` or `serviceManaged`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_workflow_extensions: Option<Vec<CustomCalloutExtension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_externally_visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_roles: Option<Vec<AccessPackageResourceRole>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_scopes: Option<Vec<AccessPackageResourceScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<AccessPackageResource>>,
    /// `published` or `unpublished`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// Who may request an access package, with which approvals, for how long.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageAssignmentPolicy {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_package: Option<AccessPackage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allowed_target_scope: Option<AllowedTargetScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub automatic_request_settings: Option<AccessPackageAutomaticRequestSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<AccessPackageCatalog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_extension_stage_settings: Option<Vec<CustomExtensionStageSetting>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<ExpirationPattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<AccessPackageQuestion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_approval_settings: Option<AccessPackageAssignmentApprovalSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestor_settings: Option<AccessPackageAssignmentRequestorSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_settings: Option<AccessPackageAssignmentReviewSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specific_allowed_targets: Option<Vec<SubjectSet>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// A subject's grant of an access package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageAssignment {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_package: Option<AccessPackage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_policy: Option<AccessPackageAssignmentPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expired_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<EntitlementManagementSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<AccessPackageAssignmentState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<AccessPackageSubject>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// A request to create, change or remove an assignment.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageAssignmentRequest {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_package: Option<AccessPackage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<AccessPackageAnswer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment: Option<AccessPackageAssignment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<AccessPackageRequestType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requestor: Option<AccessPackageSubject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<EntitlementManagementSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<AccessPackageRequestState>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// A user or service principal that requests or receives access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageSubject {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_organization: Option<ConnectedOrganization>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_premises_security_identifier: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_name: Option<String>,
    /// `notSpecified`, `user` or `servicePrincipal`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// A group, application or site added to a catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageResource {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub environment: Option<AccessPackageResourceEnvironment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_id: Option<String>,
    /// `AadGroup`, `AadApplication` or `SharePointOnline`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub roles: Option<Vec<AccessPackageResourceRole>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<AccessPackageResourceScope>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageResourceRole {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<AccessPackageResource>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageResourceScope {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_root_scope: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<AccessPackageResource>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// A resource role, at a scope, granted by an access package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageResourceRoleScope {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<AccessPackageResourceRole>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<AccessPackageResourceScope>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// A request to add a resource to, or remove it from, a catalog.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageResourceRequest {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog: Option<AccessPackageCatalog>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    /// `adminAdd`, `adminRemove`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<AccessPackageResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectionInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// Where a resource lives, e.g. a SharePoint Online tenant.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageResourceEnvironment {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connection_info: Option<ConnectionInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_default_environment: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub origin_system: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resources: Option<Vec<AccessPackageResource>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// An external organization whose users may request access packages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectedOrganization {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_sponsors: Option<Vec<DirectoryObject>>,
    /// Polymorphic identity sources (`azureActiveDirectoryTenant`, `domainIdentitySource`, ...).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identity_sources: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub internal_sponsors: Option<Vec<DirectoryObject>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_by: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<ConnectedOrganizationState>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementManagementSettings {
    #[serde(flatten)]
    pub entity: Entity,
    /// ISO 8601 duration.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_until_external_user_deleted_after_blocked: Option<String>,
    /// `none`, `blockSignIn` or `blockSignInAndDelete`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_user_lifecycle_action: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// Approval of an assignment request, made of one or more stages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Approval {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<ApprovalStage>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApprovalStage {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_to_me: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
    /// `Approve`, `Deny` or `NotReviewed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<Identity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EntitlementManagementSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<ExpirationPattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<PatternedRecurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpirationPattern {
    /// ISO 8601 duration, used with `afterDuration`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateTime<Utc>>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub pattern_type: Option<ExpirationPatternType>,
}

/// A set of subjects, such as a single user or a group's members.
///
/// The concrete kind is named by `@odata.type`
/// (`#microsoft.graph.singleUser`, `#microsoft.graph.groupMembers`,
/// `#microsoft.graph.requestorManager`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSet {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub connected_organization_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub manager_level: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

impl SubjectSet {
    #[must_use]
    pub fn single_user(user_id: impl Into<String>) -> Self {
        Self {
            odata_type: Some("#microsoft.graph.singleUser".to_string()),
            user_id: Some(user_id.into()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn group_members(group_id: impl Into<String>) -> Self {
        Self {
            odata_type: Some("#microsoft.graph.groupMembers".to_string()),
            group_id: Some(group_id.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageAssignmentApprovalSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approval_required_for_add: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approval_required_for_update: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_requestor_justification_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<AccessPackageApprovalStage>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageApprovalStage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_before_automatic_denial: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_before_escalation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub escalation_approvers: Option<Vec<SubjectSet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_escalation_approvers: Option<Vec<SubjectSet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_primary_approvers: Option<Vec<SubjectSet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approver_justification_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_escalation_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_approvers: Option<Vec<SubjectSet>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageAssignmentRequestorSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_custom_assignment_schedule: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_on_behalf_requestors_to_add_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_on_behalf_requestors_to_remove_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_on_behalf_requestors_to_update_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_targets_to_self_add_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_targets_to_self_remove_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_targets_to_self_update_access: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub on_behalf_requestors: Option<Vec<SubjectSet>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageAssignmentReviewSettings {
    /// `keepAccess`, `removeAccess` or `acceptAccessRecommendation`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_behavior: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reviewers: Option<Vec<SubjectSet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_recommendation_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_reviewer_justification_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_self_review: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_reviewers: Option<Vec<SubjectSet>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<EntitlementManagementSchedule>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageAutomaticRequestSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grace_period_before_access_removal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_access_when_target_leaves_allowed_targets: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_access_for_allowed_targets: Option<bool>,
}

/// A question asked of requestors; text input or multiple choice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageQuestion {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_answer_editable: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub localizations: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageAnswer {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answered_question: Option<AccessPackageQuestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// What the current user must supply to request an access package.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessPackageAssignmentRequestRequirements {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_custom_assignment_schedule: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approval_required_for_add: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_approval_required_for_update: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_requestor_justification_required: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub questions: Option<Vec<AccessPackageQuestion>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule: Option<EntitlementManagementSchedule>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// Custom extension invoked at one stage of the assignment lifecycle.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomExtensionStageSetting {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_extension: Option<CustomCalloutExtension>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// Logic App or endpoint called out to by a catalog's custom extensions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomCalloutExtension {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_configuration: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_configuration: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_configuration: Option<Value>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

graph_entity! {
    AccessPackage => "#microsoft.graph.accessPackage", "accessPackage%2Did";
    AccessPackageCatalog => "#microsoft.graph.accessPackageCatalog", "accessPackageCatalog%2Did";
    AccessPackageAssignmentPolicy => "#microsoft.graph.accessPackageAssignmentPolicy", "accessPackageAssignmentPolicy%2Did";
    AccessPackageAssignment => "#microsoft.graph.accessPackageAssignment", "accessPackageAssignment%2Did";
    AccessPackageAssignmentRequest => "#microsoft.graph.accessPackageAssignmentRequest", "accessPackageAssignmentRequest%2Did";
    AccessPackageSubject => "#microsoft.graph.accessPackageSubject", "accessPackageSubject%2Did";
    AccessPackageResource => "#microsoft.graph.accessPackageResource", "accessPackageResource%2Did";
    AccessPackageResourceRole => "#microsoft.graph.accessPackageResourceRole", "accessPackageResourceRole%2Did";
    AccessPackageResourceScope => "#microsoft.graph.accessPackageResourceScope", "accessPackageResourceScope%2Did";
    AccessPackageResourceRoleScope => "#microsoft.graph.accessPackageResourceRoleScope", "accessPackageResourceRoleScope%2Did";
    AccessPackageResourceRequest => "#microsoft.graph.accessPackageResourceRequest", "accessPackageResourceRequest%2Did";
    AccessPackageResourceEnvironment => "#microsoft.graph.accessPackageResourceEnvironment", "accessPackageResourceEnvironment%2Did";
    AccessPackageQuestion => "#microsoft.graph.accessPackageQuestion", "accessPackageQuestion%2Did";
    ConnectedOrganization => "#microsoft.graph.connectedOrganization", "connectedOrganization%2Did";
    EntitlementManagementSettings => "#microsoft.graph.entitlementManagementSettings", "entitlementManagementSettings%2Did";
    Approval => "#microsoft.graph.approval", "approval%2Did";
    ApprovalStage => "#microsoft.graph.approvalStage", "approvalStage%2Did";
    CustomCalloutExtension => "#microsoft.graph.customCalloutExtension", "customCalloutExtension%2Did";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_assignment_request_from_service_payload() {
        let request: AccessPackageAssignmentRequest = serde_json::from_value(json!({
            "id": "7e382d02-4454-436b-b700-59c7dd77f466",
            "requestType": "adminAdd",
            "state": "submitted",
            "status": "Accepted",
            "createdDateTime": "2021-01-19T20:01:34.847Z",
            "schedule": {
                "startDateTime": "2021-01-19T20:01:34.847Z",
                "expiration": { "type": "afterDuration", "duration": "P365D" }
            },
            "answers": [
                {
                    "@odata.type": "#microsoft.graph.accessPackageAnswerString",
                    "value": "Yes",
                    "answeredQuestion": { "id": "q1", "text": "Training done?" }
                }
            ]
        }))
        .unwrap();

        assert_eq!(request.request_type, Some(AccessPackageRequestType::AdminAdd));
        assert_eq!(request.state, Some(AccessPackageRequestState::Submitted));
        let expiration = request.schedule.unwrap().expiration.unwrap();
        assert_eq!(expiration.pattern_type, Some(ExpirationPatternType::AfterDuration));
        assert_eq!(expiration.duration.as_deref(), Some("P365D"));
        let answer = &request.answers.unwrap()[0];
        assert_eq!(answer.value.as_deref(), Some("Yes"));
        assert_eq!(
            answer.answered_question.as_ref().unwrap().entity.id.as_deref(),
            Some("q1")
        );
    }

    #[test]
    fn test_policy_serializes_subject_sets() {
        let policy = AccessPackageAssignmentPolicy {
            display_name: Some("Sales".to_string()),
            allowed_target_scope: Some(AllowedTargetScope::SpecificDirectoryUsers),
            specific_allowed_targets: Some(vec![SubjectSet::group_members("g1")]),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&policy).unwrap(),
            json!({
                "displayName": "Sales",
                "allowedTargetScope": "specificDirectoryUsers",
                "specificAllowedTargets": [
                    { "@odata.type": "#microsoft.graph.groupMembers", "groupId": "g1" }
                ]
            })
        );
    }

    #[test]
    fn test_unknown_state_survives() {
        let assignment: AccessPackageAssignment = serde_json::from_value(json!({
            "id": "a1",
            "state": "pendingDelivery",
            "customExtensionCalloutInstances": []
        }))
        .unwrap();
        assert_eq!(
            assignment.state,
            Some(AccessPackageAssignmentState::UnknownFutureValue)
        );
        assert!(assignment
            .additional_data
            .contains_key("customExtensionCalloutInstances"));
    }
}
