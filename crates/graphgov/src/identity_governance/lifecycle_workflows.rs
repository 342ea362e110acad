//! `/identityGovernance/lifecycleWorkflows`.
//!
//! Actions and functions bound to lifecycle workflow types live in the
//! `microsoft.graph.identityGovernance` namespace, so their segments are
//! fully qualified.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::summary;
use crate::builders::{
    BodyActionRequestBuilder, CollectionRequestBuilder, FunctionRequestBuilder,
    ItemRequestBuilder, NavigationRequestBuilder, ReturningActionRequestBuilder,
    SingletonRequestBuilder,
};
use crate::models::{
    CustomTaskExtension, DeletedItemContainer, GraphEntity, LifecycleManagementSettings,
    LifecycleWorkflowsContainer, Run, RunSummary, Task, TaskDefinition, TaskProcessingResult,
    TaskReport, TaskReportSummary, User, UserProcessingResult, UserSummary, Workflow,
    WorkflowTemplate, WorkflowVersion,
};

const ACTIVATE: &str = "microsoft.graph.identityGovernance.activate";
const CREATE_NEW_VERSION: &str = "microsoft.graph.identityGovernance.createNewVersion";
const RESTORE: &str = "microsoft.graph.identityGovernance.restore";

/// Body of a workflow's `activate`: runs it on demand for `subjects`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivatePostRequestBody {
    pub subjects: Vec<User>,
}

impl ActivatePostRequestBody {
    /// Runs the workflow for the users with the given object ids.
    pub fn for_users<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            subjects: ids.into_iter().map(User::reference).collect(),
        }
    }
}

/// Body of a workflow's `createNewVersion`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateNewVersionPostRequestBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<Workflow>,
}

impl SingletonRequestBuilder<LifecycleWorkflowsContainer> {
    #[must_use]
    pub fn custom_task_extensions(&self) -> CollectionRequestBuilder<CustomTaskExtension> {
        CollectionRequestBuilder::new(self.path().join("customTaskExtensions"))
    }

    #[must_use]
    pub fn deleted_items(&self) -> SingletonRequestBuilder<DeletedItemContainer> {
        SingletonRequestBuilder::new(self.path().join("deletedItems"))
    }

    #[must_use]
    pub fn settings(&self) -> SingletonRequestBuilder<LifecycleManagementSettings> {
        SingletonRequestBuilder::new(self.path().join("settings"))
    }

    #[must_use]
    pub fn task_definitions(&self) -> CollectionRequestBuilder<TaskDefinition> {
        CollectionRequestBuilder::new(self.path().join("taskDefinitions"))
    }

    #[must_use]
    pub fn workflow_templates(&self) -> CollectionRequestBuilder<WorkflowTemplate> {
        CollectionRequestBuilder::new(self.path().join("workflowTemplates"))
    }

    #[must_use]
    pub fn workflows(&self) -> CollectionRequestBuilder<Workflow> {
        CollectionRequestBuilder::new(self.path().join("workflows"))
    }
}

impl SingletonRequestBuilder<DeletedItemContainer> {
    /// Soft-deleted workflows, restorable for 30 days.
    #[must_use]
    pub fn workflows(&self) -> CollectionRequestBuilder<Workflow> {
        CollectionRequestBuilder::new(self.path().join("workflows"))
    }
}

impl ItemRequestBuilder<Workflow> {
    /// Runs the workflow now for the given users.
    #[must_use]
    pub fn activate(&self) -> BodyActionRequestBuilder<ActivatePostRequestBody> {
        BodyActionRequestBuilder::new(self.path().join(ACTIVATE))
    }

    /// Publishes a new version; the body carries the complete workflow
    /// including its tasks.
    #[must_use]
    pub fn create_new_version(
        &self,
    ) -> ReturningActionRequestBuilder<CreateNewVersionPostRequestBody, Workflow> {
        ReturningActionRequestBuilder::new(self.path().join(CREATE_NEW_VERSION))
    }

    #[must_use]
    pub fn created_by(&self) -> NavigationRequestBuilder<User> {
        NavigationRequestBuilder::new(self.path().join("createdBy"))
    }

    #[must_use]
    pub fn execution_scope(&self) -> CollectionRequestBuilder<UserProcessingResult> {
        CollectionRequestBuilder::new(self.path().join("executionScope"))
    }

    #[must_use]
    pub fn last_modified_by(&self) -> NavigationRequestBuilder<User> {
        NavigationRequestBuilder::new(self.path().join("lastModifiedBy"))
    }

    /// Restores a deleted workflow. Only valid under `deletedItems/workflows`.
    #[must_use]
    pub fn restore(&self) -> ReturningActionRequestBuilder<(), Workflow> {
        ReturningActionRequestBuilder::new(self.path().join(RESTORE))
    }

    #[must_use]
    pub fn runs(&self) -> CollectionRequestBuilder<Run> {
        CollectionRequestBuilder::new(self.path().join("runs"))
    }

    #[must_use]
    pub fn task_reports(&self) -> CollectionRequestBuilder<TaskReport> {
        CollectionRequestBuilder::new(self.path().join("taskReports"))
    }

    #[must_use]
    pub fn tasks(&self) -> CollectionRequestBuilder<Task> {
        CollectionRequestBuilder::new(self.path().join("tasks"))
    }

    #[must_use]
    pub fn user_processing_results(&self) -> CollectionRequestBuilder<UserProcessingResult> {
        CollectionRequestBuilder::new(self.path().join("userProcessingResults"))
    }

    #[must_use]
    pub fn versions(&self) -> CollectionRequestBuilder<WorkflowVersion> {
        CollectionRequestBuilder::new(self.path().join("versions"))
    }
}

impl CollectionRequestBuilder<WorkflowVersion> {
    /// Versions are keyed by number rather than id.
    #[must_use]
    pub fn by_version_number(&self, version_number: i32) -> ItemRequestBuilder<WorkflowVersion> {
        ItemRequestBuilder::new(
            self.path()
                .join_key(WorkflowVersion::KEY, version_number.to_string()),
        )
    }
}

impl ItemRequestBuilder<WorkflowVersion> {
    #[must_use]
    pub fn created_by(&self) -> NavigationRequestBuilder<User> {
        NavigationRequestBuilder::new(self.path().join("createdBy"))
    }

    #[must_use]
    pub fn last_modified_by(&self) -> NavigationRequestBuilder<User> {
        NavigationRequestBuilder::new(self.path().join("lastModifiedBy"))
    }

    #[must_use]
    pub fn tasks(&self) -> CollectionRequestBuilder<Task> {
        CollectionRequestBuilder::new(self.path().join("tasks"))
    }
}

impl ItemRequestBuilder<WorkflowTemplate> {
    #[must_use]
    pub fn tasks(&self) -> CollectionRequestBuilder<Task> {
        CollectionRequestBuilder::new(self.path().join("tasks"))
    }
}

impl ItemRequestBuilder<Task> {
    #[must_use]
    pub fn task_processing_results(&self) -> CollectionRequestBuilder<TaskProcessingResult> {
        CollectionRequestBuilder::new(self.path().join("taskProcessingResults"))
    }
}

impl ItemRequestBuilder<TaskProcessingResult> {
    #[must_use]
    pub fn subject(&self) -> NavigationRequestBuilder<User> {
        NavigationRequestBuilder::new(self.path().join("subject"))
    }

    #[must_use]
    pub fn task(&self) -> NavigationRequestBuilder<Task> {
        NavigationRequestBuilder::new(self.path().join("task"))
    }
}

impl CollectionRequestBuilder<Run> {
    /// Aggregate run counts between `start` and `end`.
    #[must_use]
    pub fn summary(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> FunctionRequestBuilder<RunSummary> {
        summary(self.path(), start, end)
    }
}

impl ItemRequestBuilder<Run> {
    #[must_use]
    pub fn task_processing_results(&self) -> CollectionRequestBuilder<TaskProcessingResult> {
        CollectionRequestBuilder::new(self.path().join("taskProcessingResults"))
    }

    #[must_use]
    pub fn user_processing_results(&self) -> CollectionRequestBuilder<UserProcessingResult> {
        CollectionRequestBuilder::new(self.path().join("userProcessingResults"))
    }
}

impl CollectionRequestBuilder<TaskReport> {
    #[must_use]
    pub fn summary(
        &self,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> FunctionRequestBuilder<TaskReportSummary> {
        summary(self.path(), start, end)
    }
}

impl ItemRequestBuilder<TaskReport> {
    #[must_use]
    pub fn task(&self) -> NavigationRequestBuilder<Task> {
        NavigationRequestBuilder::new(self.path().join("task"))
    }

    #[must_use]
    pub fn task_definition(&self) -> NavigationRequestBuilder<TaskDefinition> {
        NavigationRequestBuilder::new(self.path().join("taskDefinition"))
    }

    #[must_use]
    pub fn task_processing_results(&self) -> CollectionRequestBuilder<TaskProcessingResult> {
        CollectionRequestBuilder::new(self.path().join("taskProcessingResults"))
    }
}

impl CollectionRequestBuilder<UserProcessingResult> {
    #[must_use]
    pub fn summary(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> FunctionRequestBuilder<UserSummary> {
        summary(self.path(), start, end)
    }
}

impl ItemRequestBuilder<UserProcessingResult> {
    #[must_use]
    pub fn subject(&self) -> NavigationRequestBuilder<User> {
        NavigationRequestBuilder::new(self.path().join("subject"))
    }

    #[must_use]
    pub fn task_processing_results(&self) -> CollectionRequestBuilder<TaskProcessingResult> {
        CollectionRequestBuilder::new(self.path().join("taskProcessingResults"))
    }
}

impl ItemRequestBuilder<CustomTaskExtension> {
    #[must_use]
    pub fn created_by(&self) -> NavigationRequestBuilder<User> {
        NavigationRequestBuilder::new(self.path().join("createdBy"))
    }

    #[must_use]
    pub fn last_modified_by(&self) -> NavigationRequestBuilder<User> {
        NavigationRequestBuilder::new(self.path().join("lastModifiedBy"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::TimeZone;
    use graphgov_abstractions::HttpMethod;
    use serde_json::json;

    use crate::builders::test_support::RecordingAdapter;
    use crate::builders::ResourcePath;

    fn lifecycle_workflows(
        adapter: Arc<RecordingAdapter>,
    ) -> SingletonRequestBuilder<LifecycleWorkflowsContainer> {
        SingletonRequestBuilder::new(
            ResourcePath::root(adapter)
                .join("identityGovernance")
                .join("lifecycleWorkflows"),
        )
    }

    #[tokio::test]
    async fn test_activate_posts_subjects() {
        let adapter = RecordingAdapter::new();
        lifecycle_workflows(adapter.clone())
            .workflows()
            .by_id("wf1")
            .activate()
            .post(&ActivatePostRequestBody::for_users(["u1", "u2"]), None)
            .await
            .unwrap();

        let request = adapter.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(
            request.uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/lifecycleWorkflows/workflows/wf1/microsoft.graph.identityGovernance.activate"
        );
        let sent: serde_json::Value = serde_json::from_slice(request.content.as_ref().unwrap()).unwrap();
        assert_eq!(sent, json!({ "subjects": [{ "id": "u1" }, { "id": "u2" }] }));
    }

    #[tokio::test]
    async fn test_restore_deleted_workflow() {
        let adapter = RecordingAdapter::new();
        adapter.respond_json(json!({ "id": "wf1", "displayName": "Leaver", "category": "leaver" }));
        let restored = lifecycle_workflows(adapter.clone())
            .deleted_items()
            .workflows()
            .by_id("wf1")
            .restore()
            .post(None, None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(restored.display_name.as_deref(), Some("Leaver"));
        assert_eq!(
            adapter.last_request().uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/lifecycleWorkflows/deletedItems/workflows/wf1/microsoft.graph.identityGovernance.restore"
        );
    }

    #[tokio::test]
    async fn test_run_summary() {
        let adapter = RecordingAdapter::new();
        adapter.respond_json(json!({
            "failedRuns": 0,
            "failedTasks": 1,
            "successfulRuns": 4,
            "totalRuns": 5,
            "totalTasks": 12,
            "totalUsers": 5
        }));
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let end = Utc.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let summary = lifecycle_workflows(adapter.clone())
            .workflows()
            .by_id("wf1")
            .runs()
            .summary(start, end)
            .get(None)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(summary.total_runs, Some(5));
        assert_eq!(
            adapter.last_request().uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/lifecycleWorkflows/workflows/wf1/runs/microsoft.graph.identityGovernance.summary(startDateTime=2024-01-01T00%3A00%3A00Z,endDateTime=2024-01-31T00%3A00%3A00Z)"
        );
    }

    #[test]
    fn test_version_and_run_result_templates() {
        let workflow = lifecycle_workflows(RecordingAdapter::new())
            .workflows()
            .by_id("wf1");
        let version = workflow.versions().by_version_number(2);
        assert_eq!(
            version.tasks().url_template(),
            "{+baseurl}/identityGovernance/lifecycleWorkflows/workflows/{workflow%2Did}/versions/{workflowVersion%2DversionNumber}/tasks{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}"
        );
        assert_eq!(
            version.to_get_request_information(None).uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/lifecycleWorkflows/workflows/wf1/versions/2"
        );

        let results = workflow
            .runs()
            .by_id("run1")
            .user_processing_results()
            .by_id("upr1")
            .task_processing_results();
        assert_eq!(
            results.to_get_request_information(None).uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/lifecycleWorkflows/workflows/wf1/runs/run1/userProcessingResults/upr1/taskProcessingResults"
        );
    }

    #[test]
    fn test_create_new_version_body() {
        let action = lifecycle_workflows(RecordingAdapter::new())
            .workflows()
            .by_id("wf1")
            .create_new_version();
        let body = CreateNewVersionPostRequestBody {
            workflow: Some(Workflow {
                description: Some("Adds a welcome email".to_string()),
                ..Default::default()
            }),
        };
        let info = action.to_post_request_information(Some(&body), None).unwrap();
        let sent: serde_json::Value = serde_json::from_slice(info.content.as_ref().unwrap()).unwrap();
        assert_eq!(sent, json!({ "workflow": { "description": "Adds a welcome email" } }));
        assert!(info
            .url_template
            .ends_with("/microsoft.graph.identityGovernance.createNewVersion"));
    }
}
