use graphgov_abstractions::{
    BaseRequestBuilder, CollectionQueryParameters, CollectionResponse, ErrorMappings, GraphResult,
    HttpMethod, RequestAdapterExt, RequestConfiguration, RequestInformation,
    ReferenceDeleteQueryParameters, JSON_CONTENT_TYPE,
};
use serde::{Deserialize, Serialize};

use super::{json_request, ResourcePath};

const REFERENCE_LIST_QUERY: &str = "{?%24count,%24filter,%24orderby,%24search,%24skip,%24top}";
const REFERENCE_DELETE_QUERY: &str = "?@id={%40id}";

/// A link to another entity, by its full URL.
///
/// Sent when adding a reference and returned when listing them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceCreate {
    #[serde(rename = "@odata.id")]
    pub odata_id: String,
}

impl ReferenceCreate {
    pub fn new(odata_id: impl Into<String>) -> Self {
        Self {
            odata_id: odata_id.into(),
        }
    }
}

/// The `$ref` segment of a navigation collection, such as a package's
/// `incompatibleGroups/$ref`.
#[derive(Debug, Clone)]
pub struct ReferenceCollectionRequestBuilder {
    list: BaseRequestBuilder,
    delete: BaseRequestBuilder,
}

impl ReferenceCollectionRequestBuilder {
    /// `path` must already end in `/$ref`.
    #[must_use]
    pub fn new(path: ResourcePath) -> Self {
        Self {
            list: path.base(REFERENCE_LIST_QUERY),
            delete: path.base(REFERENCE_DELETE_QUERY),
        }
    }

    #[must_use]
    pub fn url_template(&self) -> &str {
        self.list.url_template()
    }

    #[must_use]
    pub fn to_get_request_information(
        &self,
        config: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> RequestInformation {
        json_request(&self.list, HttpMethod::Get, config)
    }

    pub fn to_post_request_information(
        &self,
        body: &ReferenceCreate,
        config: Option<&RequestConfiguration<()>>,
    ) -> GraphResult<RequestInformation> {
        let mut request = json_request(&self.list, HttpMethod::Post, config);
        request.set_content_from_parsable(JSON_CONTENT_TYPE, body)?;
        Ok(request)
    }

    /// `odata_id` is the full URL of the referenced entity.
    #[must_use]
    pub fn to_delete_request_information(
        &self,
        odata_id: &str,
        config: Option<&RequestConfiguration<()>>,
    ) -> RequestInformation {
        let mut request = json_request(&self.delete, HttpMethod::Delete, config);
        request.add_query_parameters(&ReferenceDeleteQueryParameters::new(odata_id));
        request
    }

    /// Lists the references.
    pub async fn get(
        &self,
        config: Option<&RequestConfiguration<CollectionQueryParameters>>,
    ) -> GraphResult<Option<CollectionResponse<ReferenceCreate>>> {
        let request = self.to_get_request_information(config);
        self.list
            .request_adapter()
            .send::<CollectionResponse<ReferenceCreate>>(request, &ErrorMappings::odata())
            .await
    }

    /// Adds a reference.
    pub async fn post(
        &self,
        body: &ReferenceCreate,
        config: Option<&RequestConfiguration<()>>,
    ) -> GraphResult<()> {
        let request = self.to_post_request_information(body, config)?;
        self.list
            .request_adapter()
            .send_no_content(request, &ErrorMappings::odata())
            .await
    }

    /// Removes the reference to `odata_id`.
    pub async fn delete(
        &self,
        odata_id: &str,
        config: Option<&RequestConfiguration<()>>,
    ) -> GraphResult<()> {
        let request = self.to_delete_request_information(odata_id, config);
        self.delete
            .request_adapter()
            .send_no_content(request, &ErrorMappings::odata())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::test_support::RecordingAdapter;
    use serde_json::json;
    use std::sync::Arc;

    fn incompatible_groups(adapter: Arc<RecordingAdapter>) -> ReferenceCollectionRequestBuilder {
        ReferenceCollectionRequestBuilder::new(
            ResourcePath::root(adapter)
                .join("identityGovernance/entitlementManagement/accessPackages")
                .join_key("accessPackage%2Did", "ap1")
                .join("incompatibleGroups")
                .join("$ref"),
        )
    }

    #[tokio::test]
    async fn test_post_sends_odata_id() {
        let adapter = RecordingAdapter::new();
        incompatible_groups(adapter.clone())
            .post(
                &ReferenceCreate::new("https://graph.microsoft.com/v1.0/groups/g1"),
                None,
            )
            .await
            .unwrap();

        let request = adapter.last_request();
        assert_eq!(request.method, HttpMethod::Post);
        let sent: serde_json::Value = serde_json::from_slice(request.content.as_ref().unwrap()).unwrap();
        assert_eq!(sent, json!({ "@odata.id": "https://graph.microsoft.com/v1.0/groups/g1" }));
        assert_eq!(
            request.uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/entitlementManagement/accessPackages/ap1/incompatibleGroups/$ref"
        );
    }

    #[test]
    fn test_delete_encodes_id() {
        let builder = incompatible_groups(RecordingAdapter::new());
        let info = builder
            .to_delete_request_information("https://graph.microsoft.com/v1.0/groups/g1", None);
        assert_eq!(info.method, HttpMethod::Delete);
        assert_eq!(
            info.uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/entitlementManagement/accessPackages/ap1/incompatibleGroups/$ref?@id=https%3A%2F%2Fgraph.microsoft.com%2Fv1.0%2Fgroups%2Fg1"
        );
    }

    #[tokio::test]
    async fn test_get_lists_references() {
        let adapter = RecordingAdapter::new();
        adapter.respond_json(json!({
            "value": [{ "@odata.id": "https://graph.microsoft.com/v1.0/groups/g1" }]
        }));
        let page = incompatible_groups(adapter).get(None).await.unwrap().unwrap();
        assert_eq!(page.value[0].odata_id, "https://graph.microsoft.com/v1.0/groups/g1");
    }
}
