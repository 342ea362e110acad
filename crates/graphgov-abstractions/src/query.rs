//! OData query parameter sets.
//!
//! Each set maps its fields onto the variable names used by the URL templates
//! (`%24select`, `%24filter`, ...). Unset fields are left out so the template
//! expansion drops them.

/// A value bound to a URL template variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryValue {
    String(String),
    Bool(bool),
    Int(i64),
    List(Vec<String>),
}

impl QueryValue {
    /// Returns `true` for values the expansion treats as undefined.
    #[must_use]
    pub fn is_undefined(&self) -> bool {
        matches!(self, Self::List(items) if items.is_empty())
    }

    /// Renders scalars as text; lists are joined with commas.
    #[must_use]
    pub fn to_text(&self) -> String {
        match self {
            Self::String(value) => value.clone(),
            Self::Bool(value) => value.to_string(),
            Self::Int(value) => value.to_string(),
            Self::List(items) => items.join(","),
        }
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<bool> for QueryValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for QueryValue {
    fn from(value: i32) -> Self {
        Self::Int(i64::from(value))
    }
}

impl From<i64> for QueryValue {
    fn from(value: i64) -> Self {
        Self::Int(value)
    }
}

impl From<Vec<String>> for QueryValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

/// A set of query parameters that can be applied to a request.
pub trait QueryParameters: Send + Sync {
    /// Returns `(template variable, value)` pairs for every field that is set.
    fn to_query_pairs(&self) -> Vec<(&'static str, QueryValue)>;
}

impl QueryParameters for () {
    fn to_query_pairs(&self) -> Vec<(&'static str, QueryValue)> {
        Vec::new()
    }
}

fn collect_strings<I, S>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    items.into_iter().map(Into::into).collect()
}

fn push_list(pairs: &mut Vec<(&'static str, QueryValue)>, name: &'static str, items: &[String]) {
    if !items.is_empty() {
        pairs.push((name, QueryValue::List(items.to_vec())));
    }
}

/// Query options accepted when listing a collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectionQueryParameters {
    /// Include count of items (`$count`).
    pub count: Option<bool>,
    /// Expand related entities (`$expand`).
    pub expand: Vec<String>,
    /// Filter items by property values (`$filter`).
    pub filter: Option<String>,
    /// Order items by property values (`$orderby`).
    pub orderby: Vec<String>,
    /// Search items by search phrases (`$search`).
    pub search: Option<String>,
    /// Select properties to be returned (`$select`).
    pub select: Vec<String>,
    /// Skip the first n items (`$skip`).
    pub skip: Option<i32>,
    /// Show only the first n items (`$top`).
    pub top: Option<i32>,
}

impl CollectionQueryParameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    #[must_use]
    pub fn expand<I, S>(mut self, expand: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand = collect_strings(expand);
        self
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn orderby<I, S>(mut self, orderby: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.orderby = collect_strings(orderby);
        self
    }

    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    #[must_use]
    pub fn select<I, S>(mut self, select: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = collect_strings(select);
        self
    }

    #[must_use]
    pub fn skip(mut self, skip: i32) -> Self {
        self.skip = Some(skip);
        self
    }

    #[must_use]
    pub fn top(mut self, top: i32) -> Self {
        self.top = Some(top);
        self
    }
}

impl QueryParameters for CollectionQueryParameters {
    fn to_query_pairs(&self) -> Vec<(&'static str, QueryValue)> {
        let mut pairs = Vec::new();
        if let Some(count) = self.count {
            pairs.push(("%24count", QueryValue::Bool(count)));
        }
        push_list(&mut pairs, "%24expand", &self.expand);
        if let Some(filter) = &self.filter {
            pairs.push(("%24filter", QueryValue::String(filter.clone())));
        }
        push_list(&mut pairs, "%24orderby", &self.orderby);
        if let Some(search) = &self.search {
            pairs.push(("%24search", QueryValue::String(search.clone())));
        }
        push_list(&mut pairs, "%24select", &self.select);
        if let Some(skip) = self.skip {
            pairs.push(("%24skip", QueryValue::from(skip)));
        }
        if let Some(top) = self.top {
            pairs.push(("%24top", QueryValue::from(top)));
        }
        pairs
    }
}

/// Query options accepted when reading a single entity.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemQueryParameters {
    /// Expand related entities (`$expand`).
    pub expand: Vec<String>,
    /// Select properties to be returned (`$select`).
    pub select: Vec<String>,
}

impl ItemQueryParameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn expand<I, S>(mut self, expand: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.expand = collect_strings(expand);
        self
    }

    #[must_use]
    pub fn select<I, S>(mut self, select: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.select = collect_strings(select);
        self
    }
}

impl QueryParameters for ItemQueryParameters {
    fn to_query_pairs(&self) -> Vec<(&'static str, QueryValue)> {
        let mut pairs = Vec::new();
        push_list(&mut pairs, "%24expand", &self.expand);
        push_list(&mut pairs, "%24select", &self.select);
        pairs
    }
}

/// Query options accepted by `/$count` segments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CountQueryParameters {
    pub filter: Option<String>,
    pub search: Option<String>,
}

impl CountQueryParameters {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    #[must_use]
    pub fn search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }
}

impl QueryParameters for CountQueryParameters {
    fn to_query_pairs(&self) -> Vec<(&'static str, QueryValue)> {
        let mut pairs = Vec::new();
        if let Some(filter) = &self.filter {
            pairs.push(("%24filter", QueryValue::String(filter.clone())));
        }
        if let Some(search) = &self.search {
            pairs.push(("%24search", QueryValue::String(search.clone())));
        }
        pairs
    }
}

/// The `@id` parameter used when deleting a reference from a `$ref` collection.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferenceDeleteQueryParameters {
    /// Full URL of the referenced entity.
    pub id: Option<String>,
}

impl ReferenceDeleteQueryParameters {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
        }
    }
}

impl QueryParameters for ReferenceDeleteQueryParameters {
    fn to_query_pairs(&self) -> Vec<(&'static str, QueryValue)> {
        self.id
            .iter()
            .map(|id| ("%40id", QueryValue::String(id.clone())))
            .collect()
    }
}
