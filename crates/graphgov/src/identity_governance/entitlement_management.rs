//! `/identityGovernance/entitlementManagement`.

use graphgov_abstractions::CollectionResponse;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::filter_by_current_user;
use crate::builders::{
    ActionRequestBuilder, BodyActionRequestBuilder, CollectionFunctionRequestBuilder,
    CollectionRequestBuilder, ItemRequestBuilder, NavigationRequestBuilder,
    ReturningActionRequestBuilder, SingletonRequestBuilder,
};
use crate::models::{
    AccessPackage, AccessPackageAssignment, AccessPackageAssignmentFilterByCurrentUserOptions,
    AccessPackageAssignmentPolicy, AccessPackageAssignmentRequest,
    AccessPackageAssignmentRequestFilterByCurrentUserOptions,
    AccessPackageAssignmentRequestRequirements, AccessPackageCatalog,
    AccessPackageFilterByCurrentUserOptions, AccessPackageQuestion, AccessPackageResource,
    AccessPackageResourceEnvironment, AccessPackageResourceRequest, AccessPackageResourceRole,
    AccessPackageResourceRoleScope, AccessPackageResourceScope, AccessPackageSubject, Approval,
    ApprovalFilterByCurrentUserOptions, ApprovalStage, ConnectedOrganization,
    CustomCalloutExtension, DirectoryObject, EntitlementManagement,
    EntitlementManagementSettings, Group,
};

const ADDITIONAL_ACCESS: &str = "additionalAccess(accessPackageId='{accessPackageId}',incompatibleAccessPackageId='{incompatibleAccessPackageId}')";

/// Body of an assignment request's `resume`, sent by a custom extension
/// once its callout has finished.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumePostRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
    /// Stage being resumed, e.g.
    /// `microsoft.graph.accessPackageCustomExtensionStage.assignmentRequestCreated`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resume_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

/// Policies the signed-in user may request an access package through.
pub type ApplicablePolicyRequirements = CollectionResponse<AccessPackageAssignmentRequestRequirements>;

impl SingletonRequestBuilder<EntitlementManagement> {
    #[must_use]
    pub fn access_packages(&self) -> CollectionRequestBuilder<AccessPackage> {
        CollectionRequestBuilder::new(self.path().join("accessPackages"))
    }

    #[must_use]
    pub fn assignment_approvals(&self) -> CollectionRequestBuilder<Approval> {
        CollectionRequestBuilder::new(self.path().join("accessPackageAssignmentApprovals"))
    }

    #[must_use]
    pub fn assignment_policies(&self) -> CollectionRequestBuilder<AccessPackageAssignmentPolicy> {
        CollectionRequestBuilder::new(self.path().join("assignmentPolicies"))
    }

    #[must_use]
    pub fn assignment_requests(&self) -> CollectionRequestBuilder<AccessPackageAssignmentRequest> {
        CollectionRequestBuilder::new(self.path().join("assignmentRequests"))
    }

    #[must_use]
    pub fn assignments(&self) -> CollectionRequestBuilder<AccessPackageAssignment> {
        CollectionRequestBuilder::new(self.path().join("assignments"))
    }

    #[must_use]
    pub fn catalogs(&self) -> CollectionRequestBuilder<AccessPackageCatalog> {
        CollectionRequestBuilder::new(self.path().join("catalogs"))
    }

    #[must_use]
    pub fn connected_organizations(&self) -> CollectionRequestBuilder<ConnectedOrganization> {
        CollectionRequestBuilder::new(self.path().join("connectedOrganizations"))
    }

    #[must_use]
    pub fn resource_environments(&self) -> CollectionRequestBuilder<AccessPackageResourceEnvironment> {
        CollectionRequestBuilder::new(self.path().join("resourceEnvironments"))
    }

    #[must_use]
    pub fn resource_requests(&self) -> CollectionRequestBuilder<AccessPackageResourceRequest> {
        CollectionRequestBuilder::new(self.path().join("resourceRequests"))
    }

    #[must_use]
    pub fn resource_role_scopes(&self) -> CollectionRequestBuilder<AccessPackageResourceRoleScope> {
        CollectionRequestBuilder::new(self.path().join("resourceRoleScopes"))
    }

    #[must_use]
    pub fn resources(&self) -> CollectionRequestBuilder<AccessPackageResource> {
        CollectionRequestBuilder::new(self.path().join("resources"))
    }

    #[must_use]
    pub fn settings(&self) -> SingletonRequestBuilder<EntitlementManagementSettings> {
        SingletonRequestBuilder::new(self.path().join("settings"))
    }
}

impl CollectionRequestBuilder<AccessPackage> {
    /// Packages the signed-in user is allowed to request.
    #[must_use]
    pub fn filter_by_current_user(
        &self,
        on: AccessPackageFilterByCurrentUserOptions,
    ) -> CollectionFunctionRequestBuilder<AccessPackage> {
        filter_by_current_user(self.path(), on)
    }
}

impl ItemRequestBuilder<AccessPackage> {
    /// Access packages this one is marked incompatible with.
    #[must_use]
    pub fn access_packages_incompatible_with(&self) -> CollectionRequestBuilder<AccessPackage> {
        CollectionRequestBuilder::new(self.path().join("accessPackagesIncompatibleWith"))
    }

    #[must_use]
    pub fn assignment_policies(&self) -> CollectionRequestBuilder<AccessPackageAssignmentPolicy> {
        CollectionRequestBuilder::new(self.path().join("assignmentPolicies"))
    }

    #[must_use]
    pub fn catalog(&self) -> NavigationRequestBuilder<AccessPackageCatalog> {
        NavigationRequestBuilder::new(self.path().join("catalog"))
    }

    #[must_use]
    pub fn get_applicable_policy_requirements(
        &self,
    ) -> ReturningActionRequestBuilder<(), ApplicablePolicyRequirements> {
        ReturningActionRequestBuilder::new(self.path().join("getApplicablePolicyRequirements"))
    }

    /// Use [`CollectionRequestBuilder::reference`] to add or remove entries.
    #[must_use]
    pub fn incompatible_access_packages(&self) -> CollectionRequestBuilder<AccessPackage> {
        CollectionRequestBuilder::new(self.path().join("incompatibleAccessPackages"))
    }

    /// Use [`CollectionRequestBuilder::reference`] to add or remove entries.
    #[must_use]
    pub fn incompatible_groups(&self) -> CollectionRequestBuilder<Group> {
        CollectionRequestBuilder::new(self.path().join("incompatibleGroups"))
    }

    #[must_use]
    pub fn resource_role_scopes(&self) -> CollectionRequestBuilder<AccessPackageResourceRoleScope> {
        CollectionRequestBuilder::new(self.path().join("resourceRoleScopes"))
    }
}

impl ItemRequestBuilder<AccessPackageAssignmentPolicy> {
    #[must_use]
    pub fn access_package(&self) -> NavigationRequestBuilder<AccessPackage> {
        NavigationRequestBuilder::new(self.path().join("accessPackage"))
    }

    #[must_use]
    pub fn catalog(&self) -> NavigationRequestBuilder<AccessPackageCatalog> {
        NavigationRequestBuilder::new(self.path().join("catalog"))
    }

    #[must_use]
    pub fn questions(&self) -> CollectionRequestBuilder<AccessPackageQuestion> {
        CollectionRequestBuilder::new(self.path().join("questions"))
    }
}

impl CollectionRequestBuilder<AccessPackageAssignmentRequest> {
    #[must_use]
    pub fn filter_by_current_user(
        &self,
        on: AccessPackageAssignmentRequestFilterByCurrentUserOptions,
    ) -> CollectionFunctionRequestBuilder<AccessPackageAssignmentRequest> {
        filter_by_current_user(self.path(), on)
    }
}

impl ItemRequestBuilder<AccessPackageAssignmentRequest> {
    #[must_use]
    pub fn access_package(&self) -> NavigationRequestBuilder<AccessPackage> {
        NavigationRequestBuilder::new(self.path().join("accessPackage"))
    }

    #[must_use]
    pub fn assignment(&self) -> NavigationRequestBuilder<AccessPackageAssignment> {
        NavigationRequestBuilder::new(self.path().join("assignment"))
    }

    /// Cancels a request that is still pending or in an approval stage.
    #[must_use]
    pub fn cancel(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.path().join("cancel"))
    }

    #[must_use]
    pub fn reprocess(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.path().join("reprocess"))
    }

    #[must_use]
    pub fn requestor(&self) -> NavigationRequestBuilder<AccessPackageSubject> {
        NavigationRequestBuilder::new(self.path().join("requestor"))
    }

    #[must_use]
    pub fn resume(&self) -> BodyActionRequestBuilder<ResumePostRequestBody> {
        BodyActionRequestBuilder::new(self.path().join("resume"))
    }
}

impl CollectionRequestBuilder<AccessPackageAssignment> {
    /// Assignments of `access_package_id` whose targets also hold
    /// `incompatible_access_package_id`.
    #[must_use]
    pub fn additional_access(
        &self,
        access_package_id: impl Into<String>,
        incompatible_access_package_id: impl Into<String>,
    ) -> CollectionFunctionRequestBuilder<AccessPackageAssignment> {
        CollectionFunctionRequestBuilder::<AccessPackageAssignment>::collection(
            self.path().join_function(
                ADDITIONAL_ACCESS,
                &[
                    ("accessPackageId", access_package_id.into()),
                    ("incompatibleAccessPackageId", incompatible_access_package_id.into()),
                ],
            ),
        )
    }

    #[must_use]
    pub fn filter_by_current_user(
        &self,
        on: AccessPackageAssignmentFilterByCurrentUserOptions,
    ) -> CollectionFunctionRequestBuilder<AccessPackageAssignment> {
        filter_by_current_user(self.path(), on)
    }
}

impl ItemRequestBuilder<AccessPackageAssignment> {
    #[must_use]
    pub fn access_package(&self) -> NavigationRequestBuilder<AccessPackage> {
        NavigationRequestBuilder::new(self.path().join("accessPackage"))
    }

    #[must_use]
    pub fn assignment_policy(&self) -> NavigationRequestBuilder<AccessPackageAssignmentPolicy> {
        NavigationRequestBuilder::new(self.path().join("assignmentPolicy"))
    }

    /// Re-evaluates a delivered assignment, re-granting missing access.
    #[must_use]
    pub fn reprocess(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.path().join("reprocess"))
    }

    #[must_use]
    pub fn target(&self) -> NavigationRequestBuilder<AccessPackageSubject> {
        NavigationRequestBuilder::new(self.path().join("target"))
    }
}

impl ItemRequestBuilder<AccessPackageCatalog> {
    #[must_use]
    pub fn access_packages(&self) -> CollectionRequestBuilder<AccessPackage> {
        CollectionRequestBuilder::new(self.path().join("accessPackages"))
    }

    #[must_use]
    pub fn custom_workflow_extensions(&self) -> CollectionRequestBuilder<CustomCalloutExtension> {
        CollectionRequestBuilder::new(self.path().join("customWorkflowExtensions"))
    }

    #[must_use]
    pub fn resource_roles(&self) -> CollectionRequestBuilder<AccessPackageResourceRole> {
        CollectionRequestBuilder::new(self.path().join("resourceRoles"))
    }

    #[must_use]
    pub fn resource_scopes(&self) -> CollectionRequestBuilder<AccessPackageResourceScope> {
        CollectionRequestBuilder::new(self.path().join("resourceScopes"))
    }

    #[must_use]
    pub fn resources(&self) -> CollectionRequestBuilder<AccessPackageResource> {
        CollectionRequestBuilder::new(self.path().join("resources"))
    }
}

impl ItemRequestBuilder<AccessPackageResource> {
    #[must_use]
    pub fn environment(&self) -> NavigationRequestBuilder<AccessPackageResourceEnvironment> {
        NavigationRequestBuilder::new(self.path().join("environment"))
    }

    #[must_use]
    pub fn roles(&self) -> CollectionRequestBuilder<AccessPackageResourceRole> {
        CollectionRequestBuilder::new(self.path().join("roles"))
    }

    #[must_use]
    pub fn scopes(&self) -> CollectionRequestBuilder<AccessPackageResourceScope> {
        CollectionRequestBuilder::new(self.path().join("scopes"))
    }
}

impl ItemRequestBuilder<AccessPackageResourceEnvironment> {
    #[must_use]
    pub fn resources(&self) -> CollectionRequestBuilder<AccessPackageResource> {
        CollectionRequestBuilder::new(self.path().join("resources"))
    }
}

impl ItemRequestBuilder<AccessPackageResourceRoleScope> {
    #[must_use]
    pub fn role(&self) -> NavigationRequestBuilder<AccessPackageResourceRole> {
        NavigationRequestBuilder::new(self.path().join("role"))
    }

    #[must_use]
    pub fn scope(&self) -> NavigationRequestBuilder<AccessPackageResourceScope> {
        NavigationRequestBuilder::new(self.path().join("scope"))
    }
}

impl ItemRequestBuilder<AccessPackageResourceRequest> {
    #[must_use]
    pub fn resource(&self) -> NavigationRequestBuilder<AccessPackageResource> {
        NavigationRequestBuilder::new(self.path().join("resource"))
    }
}

impl ItemRequestBuilder<ConnectedOrganization> {
    /// Sponsors from outside the tenant. Manage with
    /// [`CollectionRequestBuilder::reference`].
    #[must_use]
    pub fn external_sponsors(&self) -> CollectionRequestBuilder<DirectoryObject> {
        CollectionRequestBuilder::new(self.path().join("externalSponsors"))
    }

    #[must_use]
    pub fn internal_sponsors(&self) -> CollectionRequestBuilder<DirectoryObject> {
        CollectionRequestBuilder::new(self.path().join("internalSponsors"))
    }
}

impl CollectionRequestBuilder<Approval> {
    #[must_use]
    pub fn filter_by_current_user(
        &self,
        on: ApprovalFilterByCurrentUserOptions,
    ) -> CollectionFunctionRequestBuilder<Approval> {
        filter_by_current_user(self.path(), on)
    }
}

impl ItemRequestBuilder<Approval> {
    #[must_use]
    pub fn stages(&self) -> CollectionRequestBuilder<ApprovalStage> {
        CollectionRequestBuilder::new(self.path().join("stages"))
    }
}
