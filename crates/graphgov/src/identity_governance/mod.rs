//! The `/identityGovernance` resource tree.
//!
//! Every node is one of the generic builders from [`crate::builders`]; the
//! navigation between nodes lives here as inherent methods on the concrete
//! instantiations, grouped by area:
//!
//! - [`access_reviews`]: review definitions, instances, stages and decisions
//! - [`app_consent`]: admin consent requests
//! - [`entitlement_management`]: access packages, policies and assignments
//! - [`lifecycle_workflows`]: joiner/mover/leaver workflows and their runs
//! - [`privileged_access`]: PIM for groups
//! - [`terms_of_use`]: agreements and acceptances

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};

use crate::builders::{
    CollectionFunctionRequestBuilder, FunctionRequestBuilder, ResourcePath,
    SingletonRequestBuilder,
};
use crate::models::{
    AccessReviewSet, AppConsentApprovalRoute, EntitlementManagement, IdentityGovernance,
    LifecycleWorkflowsContainer, PrivilegedAccessRoot, TermsOfUseContainer,
};

pub mod access_reviews;
pub mod app_consent;
pub mod entitlement_management;
pub mod lifecycle_workflows;
pub mod privileged_access;
pub mod terms_of_use;

/// `/identityGovernance`.
pub type IdentityGovernanceRequestBuilder = SingletonRequestBuilder<IdentityGovernance>;

const FILTER_BY_CURRENT_USER: &str = "filterByCurrentUser(on='{on}')";
const SUMMARY: &str =
    "microsoft.graph.identityGovernance.summary(startDateTime={startDateTime},endDateTime={endDateTime})";

impl SingletonRequestBuilder<IdentityGovernance> {
    #[must_use]
    pub fn access_reviews(&self) -> SingletonRequestBuilder<AccessReviewSet> {
        SingletonRequestBuilder::new(self.path().join("accessReviews"))
    }

    #[must_use]
    pub fn app_consent(&self) -> SingletonRequestBuilder<AppConsentApprovalRoute> {
        SingletonRequestBuilder::new(self.path().join("appConsent"))
    }

    #[must_use]
    pub fn entitlement_management(&self) -> SingletonRequestBuilder<EntitlementManagement> {
        SingletonRequestBuilder::new(self.path().join("entitlementManagement"))
    }

    #[must_use]
    pub fn lifecycle_workflows(&self) -> SingletonRequestBuilder<LifecycleWorkflowsContainer> {
        SingletonRequestBuilder::new(self.path().join("lifecycleWorkflows"))
    }

    #[must_use]
    pub fn privileged_access(&self) -> SingletonRequestBuilder<PrivilegedAccessRoot> {
        SingletonRequestBuilder::new(self.path().join("privilegedAccess"))
    }

    #[must_use]
    pub fn terms_of_use(&self) -> SingletonRequestBuilder<TermsOfUseContainer> {
        SingletonRequestBuilder::new(self.path().join("termsOfUse"))
    }
}

/// `filterByCurrentUser(on='...')` under `path`.
pub(crate) fn filter_by_current_user<M>(
    path: &ResourcePath,
    on: impl fmt::Display,
) -> CollectionFunctionRequestBuilder<M> {
    CollectionFunctionRequestBuilder::<M>::collection(
        path.join_function(FILTER_BY_CURRENT_USER, &[("on", on.to_string())]),
    )
}

/// Lifecycle workflow `summary(startDateTime=...,endDateTime=...)` under `path`.
pub(crate) fn summary<R>(
    path: &ResourcePath,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> FunctionRequestBuilder<R> {
    FunctionRequestBuilder::single(path.join_function(
        SUMMARY,
        &[
            ("startDateTime", start.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
            ("endDateTime", end.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use crate::builders::test_support::RecordingAdapter;
    use crate::builders::ResourcePath;
    use crate::identity_governance::IdentityGovernanceRequestBuilder;

    fn identity_governance() -> IdentityGovernanceRequestBuilder {
        IdentityGovernanceRequestBuilder::new(
            ResourcePath::root(RecordingAdapter::new()).join("identityGovernance"),
        )
    }

    #[test]
    fn test_children_templates() {
        let root = identity_governance();
        assert_eq!(
            root.url_template(),
            "{+baseurl}/identityGovernance{?%24expand,%24select}"
        );
        assert_eq!(
            root.access_reviews().url_template(),
            "{+baseurl}/identityGovernance/accessReviews{?%24expand,%24select}"
        );
        assert_eq!(
            root.app_consent().url_template(),
            "{+baseurl}/identityGovernance/appConsent{?%24expand,%24select}"
        );
        assert_eq!(
            root.entitlement_management().url_template(),
            "{+baseurl}/identityGovernance/entitlementManagement{?%24expand,%24select}"
        );
        assert_eq!(
            root.lifecycle_workflows().url_template(),
            "{+baseurl}/identityGovernance/lifecycleWorkflows{?%24expand,%24select}"
        );
        assert_eq!(
            root.privileged_access().url_template(),
            "{+baseurl}/identityGovernance/privilegedAccess{?%24expand,%24select}"
        );
        assert_eq!(
            root.terms_of_use().url_template(),
            "{+baseurl}/identityGovernance/termsOfUse{?%24expand,%24select}"
        );
    }
}
