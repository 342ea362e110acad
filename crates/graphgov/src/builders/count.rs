use graphgov_abstractions::{
    BaseRequestBuilder, CountQueryParameters, ErrorMappings, GraphResult, HttpMethod,
    RequestAdapterExt, RequestConfiguration, RequestInformation,
};

use super::{build_request, ResourcePath, COUNT_QUERY};

const TEXT_PLAIN: &str = "text/plain;q=0.9";

/// The `$count` segment of a collection.
#[derive(Debug, Clone)]
pub struct CountRequestBuilder {
    base: BaseRequestBuilder,
}

impl CountRequestBuilder {
    /// `path` must already end in `/$count`.
    #[must_use]
    pub fn new(path: ResourcePath) -> Self {
        Self {
            base: path.base(COUNT_QUERY),
        }
    }

    #[must_use]
    pub fn url_template(&self) -> &str {
        self.base.url_template()
    }

    #[must_use]
    pub fn to_get_request_information(
        &self,
        config: Option<&RequestConfiguration<CountQueryParameters>>,
    ) -> RequestInformation {
        build_request(&self.base, HttpMethod::Get, TEXT_PLAIN, config)
    }

    /// Number of items matching the optional filter and search.
    ///
    /// Directory objects only support `$count` with the
    /// `ConsistencyLevel: eventual` header.
    pub async fn get(
        &self,
        config: Option<&RequestConfiguration<CountQueryParameters>>,
    ) -> GraphResult<Option<i32>> {
        let request = self.to_get_request_information(config);
        self.base
            .request_adapter()
            .send_primitive::<i32>(request, &ErrorMappings::odata())
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builders::test_support::RecordingAdapter;

    #[tokio::test]
    async fn test_count_parses_text_body() {
        let adapter = RecordingAdapter::new();
        adapter.respond_text("17");
        let builder = CountRequestBuilder::new(
            ResourcePath::root(adapter.clone())
                .join("identityGovernance/entitlementManagement/assignments")
                .join("$count"),
        );
        let config = RequestConfiguration::new()
            .with_query(CountQueryParameters::new().filter("state eq 'delivered'"));

        assert_eq!(builder.get(Some(&config)).await.unwrap(), Some(17));

        let request = adapter.last_request();
        assert_eq!(request.headers.first("accept"), Some("text/plain;q=0.9"));
        assert_eq!(
            request.uri().unwrap().as_str(),
            "https://graph.microsoft.com/v1.0/identityGovernance/entitlementManagement/assignments/$count?%24filter=state%20eq%20%27delivered%27"
        );
    }
}
