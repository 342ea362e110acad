//! Privileged Identity Management for groups: just-in-time membership and
//! ownership.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    DirectoryObject, Entity, ExpirationPattern, Group, IdentitySet, PatternedRecurrence,
    PrivilegedAccessGroupAssignmentType, PrivilegedAccessGroupMemberType,
    PrivilegedAccessGroupRelationships, ScheduleRequestActions,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivilegedAccessRoot {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<PrivilegedAccessGroup>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivilegedAccessGroup {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_schedule_instances: Option<Vec<PrivilegedAccessGroupAssignmentScheduleInstance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_schedule_requests: Option<Vec<PrivilegedAccessGroupAssignmentScheduleRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_schedules: Option<Vec<PrivilegedAccessGroupAssignmentSchedule>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility_schedule_instances: Option<Vec<PrivilegedAccessGroupEligibilityScheduleInstance>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility_schedule_requests: Option<Vec<PrivilegedAccessGroupEligibilityScheduleRequest>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility_schedules: Option<Vec<PrivilegedAccessGroupEligibilitySchedule>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// Start and end of an assignment or eligibility.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestSchedule {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expiration: Option<ExpirationPattern>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<PatternedRecurrence>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateTime<Utc>>,
}

/// Ticket that justifies a request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_system: Option<String>,
}

/// Request to activate, assign, extend or remove active group access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivilegedAccessGroupAssignmentScheduleRequest {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_id: Option<PrivilegedAccessGroupRelationships>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ScheduleRequestActions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated_using: Option<PrivilegedAccessGroupEligibilitySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentitySet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_validation_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<DirectoryObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_info: Option<RequestSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_schedule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_info: Option<TicketInfo>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// Request to create, extend or remove eligibility for group access.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivilegedAccessGroupEligibilityScheduleRequest {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_id: Option<PrivilegedAccessGroupRelationships>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub action: Option<ScheduleRequestActions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<IdentitySet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_data: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_validation_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<DirectoryObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_info: Option<RequestSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_schedule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ticket_info: Option<TicketInfo>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivilegedAccessGroupAssignmentSchedule {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_id: Option<PrivilegedAccessGroupRelationships>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub activated_using: Option<PrivilegedAccessGroupEligibilitySchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_type: Option<PrivilegedAccessGroupAssignmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_using: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_type: Option<PrivilegedAccessGroupMemberType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<DirectoryObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_info: Option<RequestSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivilegedAccessGroupEligibilitySchedule {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_id: Option<PrivilegedAccessGroupRelationships>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_using: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group: Option<Group>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_type: Option<PrivilegedAccessGroupMemberType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub modified_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal: Option<DirectoryObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schedule_info: Option<RequestSchedule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivilegedAccessGroupAssignmentScheduleInstance {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_id: Option<PrivilegedAccessGroupRelationships>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_schedule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignment_type: Option<PrivilegedAccessGroupAssignmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_type: Option<PrivilegedAccessGroupMemberType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivilegedAccessGroupEligibilityScheduleInstance {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub access_id: Option<PrivilegedAccessGroupRelationships>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eligibility_schedule_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub member_type: Option<PrivilegedAccessGroupMemberType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

graph_entity! {
    PrivilegedAccessGroupAssignmentScheduleRequest => "#microsoft.graph.privilegedAccessGroupAssignmentScheduleRequest", "privilegedAccessGroupAssignmentScheduleRequest%2Did";
    PrivilegedAccessGroupEligibilityScheduleRequest => "#microsoft.graph.privilegedAccessGroupEligibilityScheduleRequest", "privilegedAccessGroupEligibilityScheduleRequest%2Did";
    PrivilegedAccessGroupAssignmentSchedule => "#microsoft.graph.privilegedAccessGroupAssignmentSchedule", "privilegedAccessGroupAssignmentSchedule%2Did";
    PrivilegedAccessGroupEligibilitySchedule => "#microsoft.graph.privilegedAccessGroupEligibilitySchedule", "privilegedAccessGroupEligibilitySchedule%2Did";
    PrivilegedAccessGroupAssignmentScheduleInstance => "#microsoft.graph.privilegedAccessGroupAssignmentScheduleInstance", "privilegedAccessGroupAssignmentScheduleInstance%2Did";
    PrivilegedAccessGroupEligibilityScheduleInstance => "#microsoft.graph.privilegedAccessGroupEligibilityScheduleInstance", "privilegedAccessGroupEligibilityScheduleInstance%2Did";
}
