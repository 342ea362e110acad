//! `/identityGovernance/privilegedAccess/group`: PIM for groups.

use super::filter_by_current_user;
use crate::builders::{
    ActionRequestBuilder, CollectionFunctionRequestBuilder, CollectionRequestBuilder,
    ItemRequestBuilder, NavigationRequestBuilder, SingletonRequestBuilder,
};
use crate::models::{
    DirectoryObject, Group, PrivilegedAccessGroup, PrivilegedAccessGroupAssignmentSchedule,
    PrivilegedAccessGroupAssignmentScheduleInstance,
    PrivilegedAccessGroupAssignmentScheduleRequest, PrivilegedAccessGroupEligibilitySchedule,
    PrivilegedAccessGroupEligibilityScheduleInstance,
    PrivilegedAccessGroupEligibilityScheduleRequest, PrivilegedAccessRoot,
    ScheduleFilterByCurrentUserOptions, ScheduleRequestFilterByCurrentUserOptions,
};

impl SingletonRequestBuilder<PrivilegedAccessRoot> {
    #[must_use]
    pub fn group(&self) -> SingletonRequestBuilder<PrivilegedAccessGroup> {
        SingletonRequestBuilder::new(self.path().join("group"))
    }
}

impl SingletonRequestBuilder<PrivilegedAccessGroup> {
    #[must_use]
    pub fn assignment_schedule_instances(
        &self,
    ) -> CollectionRequestBuilder<PrivilegedAccessGroupAssignmentScheduleInstance> {
        CollectionRequestBuilder::new(self.path().join("assignmentScheduleInstances"))
    }

    /// Requests to activate, assign or remove active membership or ownership.
    #[must_use]
    pub fn assignment_schedule_requests(
        &self,
    ) -> CollectionRequestBuilder<PrivilegedAccessGroupAssignmentScheduleRequest> {
        CollectionRequestBuilder::new(self.path().join("assignmentScheduleRequests"))
    }

    #[must_use]
    pub fn assignment_schedules(&self) -> CollectionRequestBuilder<PrivilegedAccessGroupAssignmentSchedule> {
        CollectionRequestBuilder::new(self.path().join("assignmentSchedules"))
    }

    #[must_use]
    pub fn eligibility_schedule_instances(
        &self,
    ) -> CollectionRequestBuilder<PrivilegedAccessGroupEligibilityScheduleInstance> {
        CollectionRequestBuilder::new(self.path().join("eligibilityScheduleInstances"))
    }

    #[must_use]
    pub fn eligibility_schedule_requests(
        &self,
    ) -> CollectionRequestBuilder<PrivilegedAccessGroupEligibilityScheduleRequest> {
        CollectionRequestBuilder::new(self.path().join("eligibilityScheduleRequests"))
    }

    #[must_use]
    pub fn eligibility_schedules(&self) -> CollectionRequestBuilder<PrivilegedAccessGroupEligibilitySchedule> {
        CollectionRequestBuilder::new(self.path().join("eligibilitySchedules"))
    }
}

/// `filterByCurrentUser` on a collection, plus the `principal` and `group`
/// navigations every PIM for groups entity has.
macro_rules! pim_group_entity {
    ($($model:ty => $options:ty;)+) => {
        $(
            impl CollectionRequestBuilder<$model> {
                #[must_use]
                pub fn filter_by_current_user(
                    &self,
                    on: $options,
                ) -> CollectionFunctionRequestBuilder<$model> {
                    filter_by_current_user(self.path(), on)
                }
            }

            impl ItemRequestBuilder<$model> {
                #[must_use]
                pub fn group(&self) -> NavigationRequestBuilder<Group> {
                    NavigationRequestBuilder::new(self.path().join("group"))
                }

                #[must_use]
                pub fn principal(&self) -> NavigationRequestBuilder<DirectoryObject> {
                    NavigationRequestBuilder::new(self.path().join("principal"))
                }
            }
        )+
    };
}

pim_group_entity! {
    PrivilegedAccessGroupAssignmentScheduleRequest => ScheduleRequestFilterByCurrentUserOptions;
    PrivilegedAccessGroupEligibilityScheduleRequest => ScheduleRequestFilterByCurrentUserOptions;
    PrivilegedAccessGroupAssignmentSchedule => ScheduleFilterByCurrentUserOptions;
    PrivilegedAccessGroupEligibilitySchedule => ScheduleFilterByCurrentUserOptions;
    PrivilegedAccessGroupAssignmentScheduleInstance => ScheduleFilterByCurrentUserOptions;
    PrivilegedAccessGroupEligibilityScheduleInstance => ScheduleFilterByCurrentUserOptions;
}

impl ItemRequestBuilder<PrivilegedAccessGroupAssignmentScheduleRequest> {
    /// The eligibility a `selfActivate` request was made through.
    #[must_use]
    pub fn activated_using(&self) -> NavigationRequestBuilder<PrivilegedAccessGroupEligibilitySchedule> {
        NavigationRequestBuilder::new(self.path().join("activatedUsing"))
    }

    /// Cancels a request still in `PendingApproval` or `Granted` but not yet active.
    #[must_use]
    pub fn cancel(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.path().join("cancel"))
    }

    #[must_use]
    pub fn target_schedule(&self) -> NavigationRequestBuilder<PrivilegedAccessGroupAssignmentSchedule> {
        NavigationRequestBuilder::new(self.path().join("targetSchedule"))
    }
}

impl ItemRequestBuilder<PrivilegedAccessGroupEligibilityScheduleRequest> {
    #[must_use]
    pub fn cancel(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.path().join("cancel"))
    }

    #[must_use]
    pub fn target_schedule(&self) -> NavigationRequestBuilder<PrivilegedAccessGroupEligibilitySchedule> {
        NavigationRequestBuilder::new(self.path().join("targetSchedule"))
    }
}

impl ItemRequestBuilder<PrivilegedAccessGroupAssignmentSchedule> {
    #[must_use]
    pub fn activated_using(&self) -> NavigationRequestBuilder<PrivilegedAccessGroupEligibilitySchedule> {
        NavigationRequestBuilder::new(self.path().join("activatedUsing"))
    }
}

impl ItemRequestBuilder<PrivilegedAccessGroupAssignmentScheduleInstance> {
    #[must_use]
    pub fn activated_using(
        &self,
    ) -> NavigationRequestBuilder<PrivilegedAccessGroupEligibilityScheduleInstance> {
        NavigationRequestBuilder::new(self.path().join("activatedUsing"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use graphgov_abstractions::HttpMethod;
    use serde_json::json;

    use crate::builders::test_support::RecordingAdapter;
    use crate::builders::ResourcePath;
    use crate::models::{PrivilegedAccessGroupRelationships, ScheduleRequestActions};

    fn pim_group(adapter: Arc<RecordingAdapter>) -> SingletonRequestBuilder<PrivilegedAccessGroup> {
        SingletonRequestBuilder::<PrivilegedAccessRoot>::new(
            ResourcePath::root(adapter)
                .join("identityGovernance")
                .join("privilegedAccess"),
        )
        .group()
    }

    #[tokio::test]
    async fn test_self_activate_membership() {
        let adapter = RecordingAdapter::new();
        adapter.respond_json(json!({
            "id": "req1",
            "status": "Provisioned",
            "action": "selfActivate",
            "accessId": "member"
        }));
        let body = PrivilegedAccessGroupAssignmentScheduleRequest {
            access_id: Some(PrivilegedAccessGroupRelationships::Member),
            action: Some(ScheduleRequestActions::SelfActivate),
            group_id: Some("g1".to_string()),
            principal_id: Some("u1".to_string()),
            ..Default::default()
        };
        let created = pim_group(adapter.clone())
            .assignment_schedule_requests()
            .post(&body, None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(created.status.as_deref(), Some("Provisioned"));
        assert_eq!(
            adapter.last_request().uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/privilegedAccess/group/assignmentScheduleRequests"
        );
    }

    #[test]
    fn test_cancel_and_filters() {
        let group = pim_group(RecordingAdapter::new());
        let cancel = group
            .eligibility_schedule_requests()
            .by_id("req1")
            .cancel()
            .to_post_request_information(None);
        assert_eq!(cancel.method, HttpMethod::Post);
        assert_eq!(
            cancel.uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/privilegedAccess/group/eligibilityScheduleRequests/req1/cancel"
        );

        let mine = group
            .assignment_schedule_instances()
            .filter_by_current_user(ScheduleFilterByCurrentUserOptions::Principal);
        assert_eq!(
            mine.to_get_request_information(None).uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/privilegedAccess/group/assignmentScheduleInstances/filterByCurrentUser(on='principal')"
        );
    }
}
