//! Access reviews: definitions, their recurring instances, stages and decisions.

use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    AccessReviewHistoryStatus, DayOfWeek, Entity, Identity, RecurrencePatternType,
    RecurrenceRangeType, UserIdentity, WeekIndex,
};

/// The `/identityGovernance/accessReviews` container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewSet {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub definitions: Option<Vec<AccessReviewScheduleDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history_definitions: Option<Vec<AccessReviewHistoryDefinition>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// What is reviewed, by whom, and on which schedule.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewScheduleDefinition {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_notification_recipients: Option<Vec<AccessReviewNotificationRecipientItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub backup_reviewers: Option<Vec<AccessReviewReviewerScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_for_admins: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description_for_reviewers: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reviewers: Option<Vec<AccessReviewReviewerScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_enumeration_scope: Option<AccessReviewScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<AccessReviewInstance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewers: Option<Vec<AccessReviewReviewerScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<AccessReviewScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<AccessReviewScheduleSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_settings: Option<Vec<AccessReviewStageSettings>>,
    /// `NotStarted`, `InProgress`, `Completed`, ... as reported by the service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewScheduleSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_actions: Option<Vec<AccessReviewApplyAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_apply_decisions_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision_histories_for_reviewers_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_decision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_decision_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance_duration_in_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification_required_on_approval: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mail_notifications_enabled: Option<bool>,
    /// ISO 8601 duration, e.g. `P30D`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_look_back_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_insight_settings: Option<Vec<AccessReviewRecommendationInsightSetting>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<PatternedRecurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder_notifications_enabled: Option<bool>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// Scope of a review.
///
/// Graph sends one of several derived types, told apart by `@odata.type`:
/// `#microsoft.graph.accessReviewQueryScope` fills the query properties,
/// `#microsoft.graph.principalResourceMembershipsScope` fills
/// `principal_scopes` and `resource_scopes`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewScope {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_scopes: Option<Vec<AccessReviewScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_scopes: Option<Vec<AccessReviewScope>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

impl AccessReviewScope {
    pub const QUERY_SCOPE: &'static str = "#microsoft.graph.accessReviewQueryScope";
    pub const PRINCIPAL_RESOURCE_MEMBERSHIPS_SCOPE: &'static str =
        "#microsoft.graph.principalResourceMembershipsScope";

    /// Query scope with `queryType` `MicrosoftGraph`.
    #[must_use]
    pub fn query(query: impl Into<String>) -> Self {
        Self {
            odata_type: Some(Self::QUERY_SCOPE.to_string()),
            query: Some(query.into()),
            query_type: Some("MicrosoftGraph".to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn principal_resource_memberships(
        principal_scopes: Vec<AccessReviewScope>,
        resource_scopes: Vec<AccessReviewScope>,
    ) -> Self {
        Self {
            odata_type: Some(Self::PRINCIPAL_RESOURCE_MEMBERSHIPS_SCOPE.to_string()),
            principal_scopes: Some(principal_scopes),
            resource_scopes: Some(resource_scopes),
            ..Self::default()
        }
    }
}

/// Reviewers selected by query, e.g. `./manager` or a group's owners.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewReviewerScope {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewNotificationRecipientScope {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_root: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewNotificationRecipientItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_recipient_scope: Option<AccessReviewNotificationRecipientScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification_template_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// Settings of one stage in a multi-stage review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewStageSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decisions_that_will_move_to_next_stage: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_in_days: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reviewers: Option<Vec<AccessReviewReviewerScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_insight_settings: Option<Vec<AccessReviewRecommendationInsightSetting>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendations_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewers: Option<Vec<AccessReviewReviewerScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stage_id: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// Action applied to denied principals when a review completes.
///
/// `@odata.type` is `#microsoft.graph.removeAccessApplyAction` or
/// `#microsoft.graph.disableAndDeleteUserApplyAction`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccessReviewApplyAction {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewRecommendationInsightSetting {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_look_back_duration: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sign_in_scope: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// One occurrence of a recurring review.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewInstance {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contacted_reviewers: Option<Vec<AccessReviewReviewer>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decisions: Option<Vec<AccessReviewInstanceDecisionItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reviewers: Option<Vec<AccessReviewReviewerScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewers: Option<Vec<AccessReviewReviewerScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<AccessReviewScope>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stages: Option<Vec<AccessReviewStage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewStage {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decisions: Option<Vec<AccessReviewInstanceDecisionItem>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fallback_reviewers: Option<Vec<AccessReviewReviewerScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewers: Option<Vec<AccessReviewReviewerScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// A reviewer who was notified about an instance.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewReviewer {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_principal_name: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// A reviewer's decision on one principal's access to one resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewInstanceDecisionItem {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_review_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_by: Option<UserIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub applied_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apply_result: Option<String>,
    /// `Approve`, `Deny`, `NotReviewed` or `DontKnow`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insights: Option<Vec<Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<Identity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource: Option<AccessReviewInstanceDecisionItemResource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_by: Option<UserIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reviewed_date_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewInstanceDecisionItemResource {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub resource_type: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// Export of past review decisions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewHistoryDefinition {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<UserIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decisions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instances: Option<Vec<AccessReviewHistoryInstance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_history_period_end_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_history_period_start_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_settings: Option<AccessReviewHistoryScheduleSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scopes: Option<Vec<AccessReviewScope>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AccessReviewHistoryStatus>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewHistoryScheduleSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<PatternedRecurrence>,
    /// ISO 8601 duration covered by each report.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub report_range: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccessReviewHistoryInstance {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_uri: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fulfilled_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_history_period_end_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub review_history_period_start_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<AccessReviewHistoryStatus>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternedRecurrence {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pattern: Option<RecurrencePattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<RecurrenceRange>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrencePattern {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day_of_month: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub days_of_week: Option<Vec<DayOfWeek>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_day_of_week: Option<DayOfWeek>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub index: Option<WeekIndex>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interval: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub month: Option<i32>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub pattern_type: Option<RecurrencePatternType>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecurrenceRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_occurrences: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence_time_zone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub range_type: Option<RecurrenceRangeType>,
}

graph_entity! {
    AccessReviewScheduleDefinition => "#microsoft.graph.accessReviewScheduleDefinition", "accessReviewScheduleDefinition%2Did";
    AccessReviewInstance => "#microsoft.graph.accessReviewInstance", "accessReviewInstance%2Did";
    AccessReviewStage => "#microsoft.graph.accessReviewStage", "accessReviewStage%2Did";
    AccessReviewReviewer => "#microsoft.graph.accessReviewReviewer", "accessReviewReviewer%2Did";
    AccessReviewInstanceDecisionItem => "#microsoft.graph.accessReviewInstanceDecisionItem", "accessReviewInstanceDecisionItem%2Did";
    AccessReviewHistoryDefinition => "#microsoft.graph.accessReviewHistoryDefinition", "accessReviewHistoryDefinition%2Did";
    AccessReviewHistoryInstance => "#microsoft.graph.accessReviewHistoryInstance", "accessReviewHistoryInstance%2Did";
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_definition_from_service_payload() {
        let payload = json!({
            "id": "60860cdd-fb4d-4054-91ba-f75e04444aa6",
            "displayName": "Review guest access across Microsoft 365 groups",
            "createdDateTime": "2021-03-09T23:10:28.6090000Z",
            "status": "InProgress",
            "scope": {
                "@odata.type": "#microsoft.graph.accessReviewQueryScope",
                "query": "/groups?$filter=(groupTypes/any(c:c+eq+'Unified'))",
                "queryType": "MicrosoftGraph"
            },
            "reviewers": [
                { "query": "./owners", "queryType": "MicrosoftGraph" }
            ],
            "settings": {
                "instanceDurationInDays": 3,
                "recommendationsEnabled": true,
                "recurrence": {
                    "pattern": { "type": "weekly", "interval": 1, "daysOfWeek": ["monday"] },
                    "range": { "type": "noEnd", "startDate": "2021-03-10" }
                }
            }
        });

        let definition: AccessReviewScheduleDefinition = serde_json::from_value(payload).unwrap();
        assert_eq!(
            definition.entity.id.as_deref(),
            Some("60860cdd-fb4d-4054-91ba-f75e04444aa6")
        );
        let scope = definition.scope.unwrap();
        assert_eq!(scope.odata_type.as_deref(), Some(AccessReviewScope::QUERY_SCOPE));
        assert_eq!(definition.reviewers.unwrap()[0].query.as_deref(), Some("./owners"));

        let recurrence = definition.settings.unwrap().recurrence.unwrap();
        let pattern = recurrence.pattern.unwrap();
        assert_eq!(pattern.pattern_type, Some(RecurrencePatternType::Weekly));
        assert_eq!(pattern.days_of_week, Some(vec![DayOfWeek::Monday]));
        let range = recurrence.range.unwrap();
        assert_eq!(range.range_type, Some(RecurrenceRangeType::NoEnd));
        assert_eq!(range.start_date, NaiveDate::from_ymd_opt(2021, 3, 10));
    }

    #[test]
    fn test_query_scope_serialization() {
        let scope = AccessReviewScope::query("/users");
        assert_eq!(
            serde_json::to_value(&scope).unwrap(),
            json!({
                "@odata.type": "#microsoft.graph.accessReviewQueryScope",
                "query": "/users",
                "queryType": "MicrosoftGraph"
            })
        );
    }

    #[test]
    fn test_decision_item_keeps_resource_type() {
        let decision: AccessReviewInstanceDecisionItem = serde_json::from_value(json!({
            "id": "d1",
            "decision": "Approve",
            "resource": { "id": "g1", "displayName": "Sales", "type": "group" },
            "principal": { "@odata.type": "#microsoft.graph.userIdentity", "id": "u1" }
        }))
        .unwrap();
        assert_eq!(decision.resource.unwrap().resource_type.as_deref(), Some("group"));
        assert_eq!(decision.principal.unwrap().id.as_deref(), Some("u1"));
    }
}
