use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    AccessReviewSet, AppConsentApprovalRoute, EntitlementManagement, LifecycleWorkflowsContainer,
    PrivilegedAccessRoot, TermsOfUseContainer,
};

/// The `/identityGovernance` singleton.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentityGovernance {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_reviews: Option<AccessReviewSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_consent: Option<AppConsentApprovalRoute>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitlement_management: Option<EntitlementManagement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lifecycle_workflows: Option<LifecycleWorkflowsContainer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub privileged_access: Option<PrivilegedAccessRoot>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub terms_of_use: Option<TermsOfUseContainer>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}
