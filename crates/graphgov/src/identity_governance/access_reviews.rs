//! `/identityGovernance/accessReviews`.

use serde::{Deserialize, Serialize};

use super::filter_by_current_user;
use crate::builders::{
    ActionRequestBuilder, BodyActionRequestBuilder, CollectionFunctionRequestBuilder,
    CollectionRequestBuilder, ItemRequestBuilder, ReturningActionRequestBuilder,
    SingletonRequestBuilder,
};
use crate::models::{
    AccessReviewHistoryDefinition, AccessReviewHistoryInstance, AccessReviewInstance,
    AccessReviewInstanceDecisionItem, AccessReviewInstanceDecisionItemFilterByCurrentUserOptions,
    AccessReviewInstanceFilterByCurrentUserOptions, AccessReviewReviewer,
    AccessReviewScheduleDefinition, AccessReviewScheduleDefinitionFilterByCurrentUserOptions,
    AccessReviewSet, AccessReviewStage, AccessReviewStageFilterByCurrentUserOptions,
};

/// Body of `batchRecordDecisions`. Unset filters apply the decision to
/// every decision item the caller may review.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BatchRecordDecisionsPostRequestBody {
    /// `Approve`, `Deny`, `DontKnow` or `NotReviewed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub decision: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub justification: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub principal_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
}

impl SingletonRequestBuilder<AccessReviewSet> {
    #[must_use]
    pub fn definitions(&self) -> CollectionRequestBuilder<AccessReviewScheduleDefinition> {
        CollectionRequestBuilder::new(self.path().join("definitions"))
    }

    #[must_use]
    pub fn history_definitions(&self) -> CollectionRequestBuilder<AccessReviewHistoryDefinition> {
        CollectionRequestBuilder::new(self.path().join("historyDefinitions"))
    }
}

impl CollectionRequestBuilder<AccessReviewScheduleDefinition> {
    /// Definitions where the signed-in user is a reviewer.
    #[must_use]
    pub fn filter_by_current_user(
        &self,
        on: AccessReviewScheduleDefinitionFilterByCurrentUserOptions,
    ) -> CollectionFunctionRequestBuilder<AccessReviewScheduleDefinition> {
        filter_by_current_user(self.path(), on)
    }
}

impl ItemRequestBuilder<AccessReviewScheduleDefinition> {
    #[must_use]
    pub fn instances(&self) -> CollectionRequestBuilder<AccessReviewInstance> {
        CollectionRequestBuilder::new(self.path().join("instances"))
    }

    /// Stops the series; running instances end as well.
    #[must_use]
    pub fn stop(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.path().join("stop"))
    }
}

impl CollectionRequestBuilder<AccessReviewInstance> {
    #[must_use]
    pub fn filter_by_current_user(
        &self,
        on: AccessReviewInstanceFilterByCurrentUserOptions,
    ) -> CollectionFunctionRequestBuilder<AccessReviewInstance> {
        filter_by_current_user(self.path(), on)
    }
}

impl ItemRequestBuilder<AccessReviewInstance> {
    #[must_use]
    pub fn decisions(&self) -> CollectionRequestBuilder<AccessReviewInstanceDecisionItem> {
        CollectionRequestBuilder::new(self.path().join("decisions"))
    }

    #[must_use]
    pub fn stages(&self) -> CollectionRequestBuilder<AccessReviewStage> {
        CollectionRequestBuilder::new(self.path().join("stages"))
    }

    #[must_use]
    pub fn contacted_reviewers(&self) -> CollectionRequestBuilder<AccessReviewReviewer> {
        CollectionRequestBuilder::new(self.path().join("contactedReviewers"))
    }

    #[must_use]
    pub fn accept_recommendations(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.path().join("acceptRecommendations"))
    }

    #[must_use]
    pub fn apply_decisions(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.path().join("applyDecisions"))
    }

    #[must_use]
    pub fn batch_record_decisions(&self) -> BodyActionRequestBuilder<BatchRecordDecisionsPostRequestBody> {
        BodyActionRequestBuilder::new(self.path().join("batchRecordDecisions"))
    }

    #[must_use]
    pub fn reset_decisions(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.path().join("resetDecisions"))
    }

    #[must_use]
    pub fn send_reminder(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.path().join("sendReminder"))
    }

    #[must_use]
    pub fn stop(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.path().join("stop"))
    }
}

impl CollectionRequestBuilder<AccessReviewInstanceDecisionItem> {
    #[must_use]
    pub fn filter_by_current_user(
        &self,
        on: AccessReviewInstanceDecisionItemFilterByCurrentUserOptions,
    ) -> CollectionFunctionRequestBuilder<AccessReviewInstanceDecisionItem> {
        filter_by_current_user(self.path(), on)
    }
}

impl CollectionRequestBuilder<AccessReviewStage> {
    #[must_use]
    pub fn filter_by_current_user(
        &self,
        on: AccessReviewStageFilterByCurrentUserOptions,
    ) -> CollectionFunctionRequestBuilder<AccessReviewStage> {
        filter_by_current_user(self.path(), on)
    }
}

impl ItemRequestBuilder<AccessReviewStage> {
    #[must_use]
    pub fn decisions(&self) -> CollectionRequestBuilder<AccessReviewInstanceDecisionItem> {
        CollectionRequestBuilder::new(self.path().join("decisions"))
    }

    #[must_use]
    pub fn stop(&self) -> ActionRequestBuilder {
        ActionRequestBuilder::new(self.path().join("stop"))
    }
}

impl ItemRequestBuilder<AccessReviewHistoryDefinition> {
    #[must_use]
    pub fn instances(&self) -> CollectionRequestBuilder<AccessReviewHistoryInstance> {
        CollectionRequestBuilder::new(self.path().join("instances"))
    }
}

impl ItemRequestBuilder<AccessReviewHistoryInstance> {
    /// Generates a short-lived SAS URL for the report; the returned instance
    /// carries it in `downloadUri`.
    #[must_use]
    pub fn generate_download_uri(
        &self,
    ) -> ReturningActionRequestBuilder<(), AccessReviewHistoryInstance> {
        ReturningActionRequestBuilder::new(self.path().join("generateDownloadUri"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use graphgov_abstractions::{CollectionQueryParameters, HttpMethod, RequestConfiguration};
    use serde_json::json;

    use crate::builders::test_support::RecordingAdapter;
    use crate::builders::ResourcePath;

    fn access_reviews(adapter: Arc<RecordingAdapter>) -> SingletonRequestBuilder<AccessReviewSet> {
        SingletonRequestBuilder::new(
            ResourcePath::root(adapter).join("identityGovernance").join("accessReviews"),
        )
    }

    #[test]
    fn test_instance_decisions_template() {
        let decisions = access_reviews(RecordingAdapter::new())
            .definitions()
            .by_id("def1")
            .instances()
            .by_id("inst1")
            .decisions();
        assert_eq!(
            decisions.url_template(),
            "{+baseurl}/identityGovernance/accessReviews/definitions/{accessReviewScheduleDefinition%2Did}/instances/{accessReviewInstance%2Did}/decisions{?%24count,%24expand,%24filter,%24orderby,%24search,%24select,%24skip,%24top}"
        );
    }

    #[tokio::test]
    async fn test_pending_decisions_for_reviewer() {
        let adapter = RecordingAdapter::new();
        adapter.respond_json(json!({
            "value": [{ "id": "dec1", "decision": "NotReviewed", "recommendation": "Approve" }]
        }));
        let config = RequestConfiguration::new()
            .with_query(CollectionQueryParameters::new().filter("decision eq 'NotReviewed'"));
        let page = access_reviews(adapter.clone())
            .definitions()
            .by_id("def1")
            .instances()
            .by_id("inst1")
            .decisions()
            .filter_by_current_user(AccessReviewInstanceDecisionItemFilterByCurrentUserOptions::Reviewer)
            .get(Some(&config))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(page.value[0].decision.as_deref(), Some("NotReviewed"));
        assert_eq!(
            adapter.last_request().uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/accessReviews/definitions/def1/instances/inst1/decisions/filterByCurrentUser(on='reviewer')?%24filter=decision%20eq%20%27NotReviewed%27"
        );
    }

    #[tokio::test]
    async fn test_batch_record_decisions() {
        let adapter = RecordingAdapter::new();
        let body = BatchRecordDecisionsPostRequestBody {
            decision: Some("Approve".to_string()),
            justification: Some("Still on the project".to_string()),
            ..Default::default()
        };
        access_reviews(adapter.clone())
            .definitions()
            .by_id("def1")
            .instances()
            .by_id("inst1")
            .batch_record_decisions()
            .post(&body, None)
            .await
            .unwrap();

        let request = adapter.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        let sent: serde_json::Value = serde_json::from_slice(request.content.as_ref().unwrap()).unwrap();
        assert_eq!(
            sent,
            json!({ "decision": "Approve", "justification": "Still on the project" })
        );
    }

    #[test]
    fn test_stage_stop_and_history_download() {
        let reviews = access_reviews(RecordingAdapter::new());
        let stop = reviews
            .definitions()
            .by_id("def1")
            .instances()
            .by_id("inst1")
            .stages()
            .by_id("st1")
            .stop()
            .to_post_request_information(None);
        assert_eq!(
            stop.uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/accessReviews/definitions/def1/instances/inst1/stages/st1/stop"
        );

        let download = reviews
            .history_definitions()
            .by_id("h1")
            .instances()
            .by_id("hi1")
            .generate_download_uri()
            .to_post_request_information(None, None)
            .unwrap();
        assert_eq!(
            download.uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/accessReviews/historyDefinitions/h1/instances/hi1/generateDownloadUri"
        );
    }
}
