//! `/identityGovernance/appConsent`.

use super::filter_by_current_user;
use crate::builders::{
    CollectionFunctionRequestBuilder, CollectionRequestBuilder, ItemRequestBuilder,
    NavigationRequestBuilder, SingletonRequestBuilder,
};
use crate::models::{
    AppConsentApprovalRoute, AppConsentRequest, Approval, ApprovalStage,
    ConsentRequestFilterByCurrentUserOptions, UserConsentRequest,
};

impl SingletonRequestBuilder<AppConsentApprovalRoute> {
    #[must_use]
    pub fn app_consent_requests(&self) -> CollectionRequestBuilder<AppConsentRequest> {
        CollectionRequestBuilder::new(self.path().join("appConsentRequests"))
    }
}

impl CollectionRequestBuilder<AppConsentRequest> {
    /// Requests the signed-in user can review.
    #[must_use]
    pub fn filter_by_current_user(
        &self,
        on: ConsentRequestFilterByCurrentUserOptions,
    ) -> CollectionFunctionRequestBuilder<AppConsentRequest> {
        filter_by_current_user(self.path(), on)
    }
}

impl ItemRequestBuilder<AppConsentRequest> {
    #[must_use]
    pub fn user_consent_requests(&self) -> CollectionRequestBuilder<UserConsentRequest> {
        CollectionRequestBuilder::new(self.path().join("userConsentRequests"))
    }
}

impl CollectionRequestBuilder<UserConsentRequest> {
    #[must_use]
    pub fn filter_by_current_user(
        &self,
        on: ConsentRequestFilterByCurrentUserOptions,
    ) -> CollectionFunctionRequestBuilder<UserConsentRequest> {
        filter_by_current_user(self.path(), on)
    }
}

impl ItemRequestBuilder<UserConsentRequest> {
    #[must_use]
    pub fn approval(&self) -> NavigationRequestBuilder<Approval> {
        NavigationRequestBuilder::new(self.path().join("approval"))
    }
}

impl NavigationRequestBuilder<Approval> {
    #[must_use]
    pub fn stages(&self) -> CollectionRequestBuilder<ApprovalStage> {
        CollectionRequestBuilder::new(self.path().join("stages"))
    }
}
