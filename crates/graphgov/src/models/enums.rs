//! Enumerations of the identity governance API.

graph_enum! {
    /// Delivery state of an access package assignment.
    AccessPackageAssignmentState {
        Delivering => "delivering",
        PartiallyDelivered => "partiallyDelivered",
        Delivered => "delivered",
        Expired => "expired",
        DeliveryFailed => "deliveryFailed",
    }
}

graph_enum! {
    /// Processing state of an access package assignment request.
    AccessPackageRequestState {
        Submitted => "submitted",
        PendingApproval => "pendingApproval",
        Delivering => "delivering",
        Delivered => "delivered",
        DeliveryFailed => "deliveryFailed",
        Denied => "denied",
        Scheduled => "scheduled",
        Canceled => "canceled",
        PartiallyDelivered => "partiallyDelivered",
    }
}

graph_enum! {
    /// Who asked for an assignment change, and what kind of change it is.
    AccessPackageRequestType {
        NotSpecified => "notSpecified",
        UserAdd => "userAdd",
        UserUpdate => "userUpdate",
        UserRemove => "userRemove",
        AdminAdd => "adminAdd",
        AdminUpdate => "adminUpdate",
        AdminRemove => "adminRemove",
        SystemAdd => "systemAdd",
        SystemUpdate => "systemUpdate",
        SystemRemove => "systemRemove",
        OnBehalfAdd => "onBehalfAdd",
    }
}

graph_enum! {
    /// Principals an assignment policy applies to.
    AllowedTargetScope {
        NotSpecified => "notSpecified",
        SpecificDirectoryUsers => "specificDirectoryUsers",
        SpecificConnectedOrganizationUsers => "specificConnectedOrganizationUsers",
        SpecificDirectoryServicePrincipals => "specificDirectoryServicePrincipals",
        AllMemberUsers => "allMemberUsers",
        AllDirectoryUsers => "allDirectoryUsers",
        AllDirectoryServicePrincipals => "allDirectoryServicePrincipals",
        AllConfiguredConnectedOrganizationUsers => "allConfiguredConnectedOrganizationUsers",
        AllExternalUsers => "allExternalUsers",
    }
}

graph_enum! {
    ExpirationPatternType {
        NotSpecified => "notSpecified",
        NoExpiration => "noExpiration",
        AfterDateTime => "afterDateTime",
        AfterDuration => "afterDuration",
    }
}

graph_enum! {
    ConnectedOrganizationState {
        Configured => "configured",
        Proposed => "proposed",
    }
}

graph_enum! {
    /// Joiner, mover or leaver scenario of a lifecycle workflow.
    LifecycleWorkflowCategory {
        Joiner => "joiner",
        Leaver => "leaver",
        Mover => "mover",
    }
}

graph_enum! {
    LifecycleWorkflowProcessingStatus {
        Queued => "queued",
        InProgress => "inProgress",
        Completed => "completed",
        CompletedWithErrors => "completedWithErrors",
        Canceled => "canceled",
        Failed => "failed",
    }
}

graph_enum! {
    WorkflowExecutionType {
        Scheduled => "scheduled",
        OnDemand => "onDemand",
    }
}

graph_enum! {
    AccessReviewHistoryStatus {
        Done => "done",
        InProgress => "inProgress",
        Error => "error",
        Requested => "requested",
    }
}

graph_enum! {
    /// Operation requested by a privileged access schedule request.
    ScheduleRequestActions {
        AdminAssign => "adminAssign",
        AdminUpdate => "adminUpdate",
        AdminRemove => "adminRemove",
        SelfActivate => "selfActivate",
        SelfDeactivate => "selfDeactivate",
        AdminExtend => "adminExtend",
        AdminRenew => "adminRenew",
        SelfExtend => "selfExtend",
        SelfRenew => "selfRenew",
    }
}

graph_enum! {
    PrivilegedAccessGroupRelationships {
        Owner => "owner",
        Member => "member",
    }
}

graph_enum! {
    PrivilegedAccessGroupMemberType {
        Direct => "direct",
        Group => "group",
    }
}

graph_enum! {
    PrivilegedAccessGroupAssignmentType {
        Assigned => "assigned",
        Activated => "activated",
    }
}

graph_enum! {
    RecurrencePatternType {
        Daily => "daily",
        Weekly => "weekly",
        AbsoluteMonthly => "absoluteMonthly",
        RelativeMonthly => "relativeMonthly",
        AbsoluteYearly => "absoluteYearly",
        RelativeYearly => "relativeYearly",
    }
}

graph_enum! {
    RecurrenceRangeType {
        EndDate => "endDate",
        NoEnd => "noEnd",
        Numbered => "numbered",
    }
}

graph_enum! {
    DayOfWeek {
        Sunday => "sunday",
        Monday => "monday",
        Tuesday => "tuesday",
        Wednesday => "wednesday",
        Thursday => "thursday",
        Friday => "friday",
        Saturday => "saturday",
    }
}

graph_enum! {
    WeekIndex {
        First => "first",
        Second => "second",
        Third => "third",
        Fourth => "fourth",
        Last => "last",
    }
}

graph_enum! {
    /// `on` argument of `filterByCurrentUser` for access review definitions.
    AccessReviewScheduleDefinitionFilterByCurrentUserOptions {
        Reviewer => "reviewer",
    }
}

graph_enum! {
    /// `on` argument of `filterByCurrentUser` for access review instances.
    AccessReviewInstanceFilterByCurrentUserOptions {
        Reviewer => "reviewer",
    }
}

graph_enum! {
    /// `on` argument of `filterByCurrentUser` for access review decisions.
    AccessReviewInstanceDecisionItemFilterByCurrentUserOptions {
        Reviewer => "reviewer",
    }
}

graph_enum! {
    /// `on` argument of `filterByCurrentUser` for access review stages.
    AccessReviewStageFilterByCurrentUserOptions {
        Reviewer => "reviewer",
    }
}

graph_enum! {
    /// `on` argument of `filterByCurrentUser` for app and user consent requests.
    ConsentRequestFilterByCurrentUserOptions {
        Reviewer => "reviewer",
    }
}

graph_enum! {
    /// `on` argument of `filterByCurrentUser` for access packages.
    AccessPackageFilterByCurrentUserOptions {
        AllowedRequestor => "allowedRequestor",
    }
}

graph_enum! {
    /// `on` argument of `filterByCurrentUser` for access package assignments.
    AccessPackageAssignmentFilterByCurrentUserOptions {
        Target => "target",
        CreatedBy => "createdBy",
    }
}

graph_enum! {
    /// `on` argument of `filterByCurrentUser` for assignment requests.
    AccessPackageAssignmentRequestFilterByCurrentUserOptions {
        Target => "target",
        CreatedBy => "createdBy",
        Approver => "approver",
    }
}

graph_enum! {
    /// `on` argument of `filterByCurrentUser` for assignment approvals.
    ApprovalFilterByCurrentUserOptions {
        Target => "target",
        CreatedBy => "createdBy",
        Approver => "approver",
    }
}

graph_enum! {
    /// `on` argument of `filterByCurrentUser` for privileged access schedule requests.
    ScheduleRequestFilterByCurrentUserOptions {
        Principal => "principal",
        CreatedBy => "createdBy",
        Approver => "approver",
    }
}

graph_enum! {
    /// Schedule types PIM schedules and instances can be filtered on.
    ScheduleFilterByCurrentUserOptions {
        Principal => "principal",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_wire_name() {
        let json = serde_json::to_string(&AccessPackageRequestState::PendingApproval).unwrap();
        assert_eq!(json, "\"pendingApproval\"");
        assert_eq!(LifecycleWorkflowCategory::Leaver.to_string(), "leaver");
    }

    #[test]
    fn test_unknown_member_becomes_future_value() {
        let state: AccessPackageAssignmentState =
            serde_json::from_str("\"quarantined\"").unwrap();
        assert_eq!(state, AccessPackageAssignmentState::UnknownFutureValue);

        let known: AccessPackageAssignmentState =
            serde_json::from_str("\"unknownFutureValue\"").unwrap();
        assert_eq!(known, AccessPackageAssignmentState::UnknownFutureValue);
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "Sunday".parse::<DayOfWeek>().unwrap_err();
        assert_eq!(err.enum_name, "DayOfWeek");
        assert_eq!(err.to_string(), "\"Sunday\" is not a valid DayOfWeek");
        assert_eq!("sunday".parse::<DayOfWeek>().unwrap(), DayOfWeek::Sunday);
    }

    #[test]
    fn test_enum_inside_option_field() {
        #[derive(serde::Deserialize)]
        #[serde(rename_all = "camelCase")]
        struct Holder {
            category: Option<LifecycleWorkflowCategory>,
        }
        let holder: Holder = serde_json::from_str(r#"{"category":"mover"}"#).unwrap();
        assert_eq!(holder.category, Some(LifecycleWorkflowCategory::Mover));
        let holder: Holder = serde_json::from_str(r#"{"category":null}"#).unwrap();
        assert_eq!(holder.category, None);
    }
}
