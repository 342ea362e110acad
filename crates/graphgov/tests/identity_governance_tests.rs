//! End-to-end request builder tests against a mock Graph service.

mod common;

use chrono::{TimeZone, Utc};
use common::*;
use graphgov::identity_governance::lifecycle_workflows::ActivatePostRequestBody;
use graphgov::models::{
    AccessPackage, AccessPackageFilterByCurrentUserOptions, AccessReviewScheduleDefinition,
    AccessReviewScheduleDefinitionFilterByCurrentUserOptions, LifecycleWorkflowCategory,
};
use graphgov::{
    CollectionQueryParameters, CountQueryParameters, GraphError, ItemQueryParameters,
    RequestConfiguration,
};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_list_access_packages_with_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/identityGovernance/entitlementManagement/accessPackages"))
        .and(query_param("$filter", "displayName eq 'Sales'"))
        .and(query_param("$expand", "catalog"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@odata.context": "https://graph.microsoft.com/v1.0/$metadata#identityGovernance/entitlementManagement/accessPackages",
            "value": [access_package("ap1", "Sales")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let config = RequestConfiguration::new().with_query(
        CollectionQueryParameters::new()
            .filter("displayName eq 'Sales'")
            .expand(["catalog"]),
    );
    let page = client
        .identity_governance()
        .entitlement_management()
        .access_packages()
        .get(Some(&config))
        .await
        .unwrap()
        .unwrap();

    assert_eq!(page.value.len(), 1);
    assert_eq!(page.value[0].entity.id.as_deref(), Some("ap1"));
    assert_eq!(page.value[0].display_name.as_deref(), Some("Sales"));
}

#[tokio::test]
async fn test_page_iterator_walks_all_pages() {
    let server = MockServer::start().await;
    let next_link = format!(
        "{}/v1.0/identityGovernance/entitlementManagement/accessPackages?$skiptoken=page2",
        server.uri()
    );
    Mock::given(method("GET"))
        .and(path("/v1.0/identityGovernance/entitlementManagement/accessPackages"))
        .and(query_param("$skiptoken", "page2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [access_package("ap3", "Finance")]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/identityGovernance/entitlementManagement/accessPackages"))
        .and(query_param("$top", "2"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "@odata.nextLink": next_link,
            "value": [access_package("ap1", "Sales"), access_package("ap2", "Marketing")]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let config = RequestConfiguration::new().with_query(CollectionQueryParameters::new().top(2));
    let mut iterator = client
        .identity_governance()
        .entitlement_management()
        .access_packages()
        .page_iterator(Some(&config))
        .await
        .unwrap();

    let mut names = Vec::new();
    let completed = iterator
        .iterate(|package: AccessPackage| {
            names.push(package.display_name.unwrap_or_default());
            true
        })
        .await
        .unwrap();

    assert!(completed);
    assert_eq!(names, ["Sales", "Marketing", "Finance"]);
}

#[tokio::test]
async fn test_not_found_maps_to_odata_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/identityGovernance/lifecycleWorkflows/workflows/missing"))
        .respond_with(
            ResponseTemplate::new(404)
                .set_body_json(odata_error("ResourceNotFound", "Workflow not found")),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .identity_governance()
        .lifecycle_workflows()
        .workflows()
        .by_id("missing")
        .get(None)
        .await
        .unwrap_err();

    assert_eq!(err.status_code(), Some(404));
    assert_eq!(err.odata_code(), Some("ResourceNotFound"));
    match err {
        GraphError::OData(odata) => assert_eq!(odata.error.message, "Workflow not found"),
        other => panic!("expected OData error, got {other:?}"),
    }
}

#[tokio::test]
async fn test_patch_returns_none_on_no_content() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/v1.0/identityGovernance/lifecycleWorkflows/workflows/wf1"))
        .and(body_json(json!({ "description": "Offboarding for contractors" })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let body = graphgov::models::Workflow {
        description: Some("Offboarding for contractors".to_string()),
        ..Default::default()
    };
    let updated = client
        .identity_governance()
        .lifecycle_workflows()
        .workflows()
        .by_id("wf1")
        .patch(&body, None)
        .await
        .unwrap();
    assert!(updated.is_none());
}

#[tokio::test]
async fn test_count_reads_text_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1.0/identityGovernance/entitlementManagement/assignments/$count"))
        .and(query_param("$filter", "state eq 'delivered'"))
        .and(header("accept", "text/plain;q=0.9"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "text/plain")
                .set_body_string("42"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server);
    let config = RequestConfiguration::new()
        .with_query(CountQueryParameters::new().filter("state eq 'delivered'"));
    let count = client
        .identity_governance()
        .entitlement_management()
        .assignments()
        .count()
        .get(Some(&config))
        .await
        .unwrap();
    assert_eq!(count, Some(42));
}

#[tokio::test]
async fn test_filter_by_current_user_functions() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(
            "/v1.0/identityGovernance/accessReviews/definitions/filterByCurrentUser(on='reviewer')",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [{ "id": "def1", "displayName": "Guest review", "status": "InProgress" }]
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(
            "/v1.0/identityGovernance/entitlementManagement/accessPackages/filterByCurrentUser(on='allowedRequestor')",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "value": [access_package("ap1", "Sales")]
        })))
        .mount(&server)
        .await;

    let governance = test_client(&server).identity_governance();
    let definitions = governance
        .access_reviews()
        .definitions()
        .filter_by_current_user(AccessReviewScheduleDefinitionFilterByCurrentUserOptions::Reviewer)
        .get(None)
        .await
        .unwrap()
        .unwrap();
    let definition: &AccessReviewScheduleDefinition = &definitions.value[0];
    assert_eq!(definition.status.as_deref(), Some("InProgress"));

    let requestable = governance
        .entitlement_management()
        .access_packages()
        .filter_by_current_user(AccessPackageFilterByCurrentUserOptions::AllowedRequestor)
        .get(None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(requestable.value[0].display_name.as_deref(), Some("Sales"));
}

#[tokio::test]
async fn test_workflow_actions_and_summary() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(
            "/v1.0/identityGovernance/lifecycleWorkflows/workflows/wf1/microsoft.graph.identityGovernance.activate",
        ))
        .and(body_json(json!({ "subjects": [{ "id": "u1" }] })))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(
            "/v1.0/identityGovernance/lifecycleWorkflows/workflows/wf1/runs/microsoft.graph.identityGovernance.summary(startDateTime=2024-03-01T00%3A00%3A00Z,endDateTime=2024-03-31T00%3A00%3A00Z)",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "failedRuns": 1,
            "failedTasks": 2,
            "successfulRuns": 9,
            "totalRuns": 10,
            "totalTasks": 40,
            "totalUsers": 10
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1.0/identityGovernance/lifecycleWorkflows/workflows/wf1"))
        .and(query_param("$select", "id,category"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "wf1",
            "category": "mover"
        })))
        .mount(&server)
        .await;

    let workflow = test_client(&server)
        .identity_governance()
        .lifecycle_workflows()
        .workflows()
        .by_id("wf1");

    workflow
        .activate()
        .post(&ActivatePostRequestBody::for_users(["u1"]), None)
        .await
        .unwrap();

    let config = RequestConfiguration::new()
        .with_query(ItemQueryParameters::new().select(["id", "category"]));
    let fetched = workflow.get(Some(&config)).await.unwrap().unwrap();
    assert_eq!(fetched.category, Some(LifecycleWorkflowCategory::Mover));

    let start = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 3, 31, 0, 0, 0).unwrap();
    let summary = workflow
        .runs()
        .summary(start, end)
        .get(None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(summary.successful_runs, Some(9));
    assert_eq!(summary.failed_tasks, Some(2));
}
