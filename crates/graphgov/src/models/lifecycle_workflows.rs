//! Lifecycle workflows: joiner, mover and leaver automation.
//!
//! These types live in the `microsoft.graph.identityGovernance` namespace.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::{
    Entity, KeyValuePair, LifecycleWorkflowCategory, LifecycleWorkflowProcessingStatus, User,
    WorkflowExecutionType,
};

/// The `/identityGovernance/lifecycleWorkflows` container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleWorkflowsContainer {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom_task_extensions: Option<Vec<CustomTaskExtension>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_items: Option<DeletedItemContainer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<LifecycleManagementSettings>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definitions: Option<Vec<TaskDefinition>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_templates: Option<Vec<WorkflowTemplate>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflows: Option<Vec<Workflow>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// Soft-deleted workflows, restorable for 30 days.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletedItemContainer {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflows: Option<Vec<Workflow>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// A set of tasks run for users matching the execution conditions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workflow {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<LifecycleWorkflowCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_conditions: Option<WorkflowExecutionConditions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_scope: Option<Vec<UserProcessingResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_scheduling_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_schedule_run_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub runs: Option<Vec<Run>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_reports: Option<Vec<TaskReport>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_processing_results: Option<Vec<UserProcessingResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub versions: Option<Vec<WorkflowVersion>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// A snapshot of a workflow's definition, keyed by version number.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowVersion {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<LifecycleWorkflowCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_conditions: Option<WorkflowExecutionConditions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_scheduling_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version_number: Option<i32>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// A predefined workflow to start from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowTemplate {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<LifecycleWorkflowCategory>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_conditions: Option<WorkflowExecutionConditions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tasks: Option<Vec<Task>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// When a workflow runs and for whom.
///
/// `@odata.type` is
/// `#microsoft.graph.identityGovernance.triggerAndScopeBasedConditions` for
/// scheduled workflows and
/// `#microsoft.graph.identityGovernance.onDemandExecutionOnly` otherwise.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowExecutionConditions {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scope: Option<RuleBasedSubjectSet>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trigger: Option<WorkflowExecutionTrigger>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

impl WorkflowExecutionConditions {
    pub const TRIGGER_AND_SCOPE_BASED: &'static str =
        "#microsoft.graph.identityGovernance.triggerAndScopeBasedConditions";
    pub const ON_DEMAND_EXECUTION_ONLY: &'static str =
        "#microsoft.graph.identityGovernance.onDemandExecutionOnly";

    #[must_use]
    pub fn on_demand() -> Self {
        Self {
            odata_type: Some(Self::ON_DEMAND_EXECUTION_ONLY.to_string()),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn trigger_and_scope(scope: RuleBasedSubjectSet, trigger: WorkflowExecutionTrigger) -> Self {
        Self {
            odata_type: Some(Self::TRIGGER_AND_SCOPE_BASED.to_string()),
            scope: Some(scope),
            trigger: Some(trigger),
            additional_data: BTreeMap::new(),
        }
    }
}

/// Users selected by a filter rule, e.g. `(department eq 'Marketing')`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleBasedSubjectSet {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

impl RuleBasedSubjectSet {
    #[must_use]
    pub fn new(rule: impl Into<String>) -> Self {
        Self {
            odata_type: Some("#microsoft.graph.identityGovernance.ruleBasedSubjectSet".to_string()),
            rule: Some(rule.into()),
            additional_data: BTreeMap::new(),
        }
    }
}

/// What starts a workflow; usually a user attribute plus an offset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkflowExecutionTrigger {
    #[serde(rename = "@odata.type", skip_serializing_if = "Option::is_none")]
    pub odata_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset_in_days: Option<i32>,
    /// `employeeHireDate`, `employeeLeaveDateTime`, `createdDateTime`, ...
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_based_attribute: Option<String>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

impl WorkflowExecutionTrigger {
    #[must_use]
    pub fn time_based(attribute: impl Into<String>, offset_in_days: i32) -> Self {
        Self {
            odata_type: Some(
                "#microsoft.graph.identityGovernance.timeBasedAttributeTrigger".to_string(),
            ),
            offset_in_days: Some(offset_in_days),
            time_based_attribute: Some(attribute.into()),
            additional_data: BTreeMap::new(),
        }
    }
}

/// A built-in task type tasks are created from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDefinition {
    #[serde(flatten)]
    pub entity: Entity,
    /// Comma-separated categories, e.g. `joiner,leaver`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_on_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<Vec<Parameter>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<i32>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Parameter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub values: Option<Vec<String>>,
}

/// One step of a workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub arguments: Option<Vec<KeyValuePair>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub continue_on_error: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_sequence: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_processing_results: Option<Vec<TaskProcessingResult>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// Outcome of one task for one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskProcessingResult {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_status: Option<LifecycleWorkflowProcessingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// Aggregated outcome of one task within one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskReport {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_users_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_status: Option<LifecycleWorkflowProcessingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_users_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_definition: Option<TaskDefinition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_processing_results: Option<Vec<TaskProcessingResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_users_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unprocessed_users_count: Option<i32>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// One execution of a workflow.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Run {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_tasks_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_users_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_updated_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_status: Option<LifecycleWorkflowProcessingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_users_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_processing_results: Option<Vec<TaskProcessingResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tasks_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_unprocessed_tasks_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_users_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_processing_results: Option<Vec<UserProcessingResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_execution_type: Option<WorkflowExecutionType>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// Outcome of a workflow for one user.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProcessingResult {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_tasks_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub processing_status: Option<LifecycleWorkflowProcessingStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task_processing_results: Option<Vec<TaskProcessingResult>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tasks_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_unprocessed_tasks_count: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_execution_type: Option<WorkflowExecutionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_version: Option<i32>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// A Logic App callout usable as a workflow task.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomTaskExtension {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_configuration: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback_configuration: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub client_configuration: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_date_time: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub endpoint_configuration: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_by: Option<User>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_date_time: Option<DateTime<Utc>>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// Tenant-wide lifecycle workflow settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LifecycleManagementSettings {
    #[serde(flatten)]
    pub entity: Entity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email_settings: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow_schedule_interval_in_hours: Option<i32>,
    #[serde(flatten)]
    pub additional_data: BTreeMap<String, Value>,
}

/// Result of `runs/summary(...)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_runs: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_tasks: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_runs: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_runs: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tasks: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_users: Option<i32>,
}

/// Result of `userProcessingResults/summary(...)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_tasks: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_users: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_users: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tasks: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_users: Option<i32>,
}

/// Result of `taskReports/summary(...)`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskReportSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub failed_tasks: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub successful_tasks: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_tasks: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unprocessed_tasks: Option<i32>,
}

graph_entity! {
    Workflow => "#microsoft.graph.identityGovernance.workflow", "workflow%2Did";
    WorkflowVersion => "#microsoft.graph.identityGovernance.workflowVersion", "workflowVersion%2DversionNumber";
    WorkflowTemplate => "#microsoft.graph.identityGovernance.workflowTemplate", "workflowTemplate%2Did";
    TaskDefinition => "#microsoft.graph.identityGovernance.taskDefinition", "taskDefinition%2Did";
    Task => "#microsoft.graph.identityGovernance.task", "task%2Did";
    TaskProcessingResult => "#microsoft.graph.identityGovernance.taskProcessingResult", "taskProcessingResult%2Did";
    TaskReport => "#microsoft.graph.identityGovernance.taskReport", "taskReport%2Did";
    Run => "#microsoft.graph.identityGovernance.run", "run%2Did";
    UserProcessingResult => "#microsoft.graph.identityGovernance.userProcessingResult", "userProcessingResult%2Did";
    CustomTaskExtension => "#microsoft.graph.customTaskExtension", "customTaskExtension%2Did";
    LifecycleManagementSettings => "#microsoft.graph.identityGovernance.lifecycleManagementSettings", "lifecycleManagementSettings%2Did";
}
