//! Strapi query parameters in bracket notation
//! (`pagination[page]=1`, `filters[slug][$eq]=home`, ...).

use url::form_urlencoded;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterOp {
    Eq,
    Ne,
    Contains,
    ContainsI,
    Lt,
    Lte,
    Gt,
    Gte,
}

impl FilterOp {
    fn as_str(&self) -> &'static str {
        match self {
            FilterOp::Eq => "$eq",
            FilterOp::Ne => "$ne",
            FilterOp::Contains => "$contains",
            FilterOp::ContainsI => "$containsi",
            FilterOp::Lt => "$lt",
            FilterOp::Lte => "$lte",
            FilterOp::Gt => "$gt",
            FilterOp::Gte => "$gte",
        }
    }
}

/// Ordered list of query parameters; insertion order is kept in the output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, String)>,
    populate_count: usize,
    sort_count: usize,
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn locale(self, locale: &str) -> Self {
        self.param("locale", locale)
    }

    /// Populate every relation and media field one level deep.
    pub fn populate_all(self) -> Self {
        self.param("populate", "*")
    }

    pub fn populate(mut self, field: &str) -> Self {
        let key = format!("populate[{}]", self.populate_count);
        self.populate_count += 1;
        self.param(&key, field)
    }

    pub fn sort(mut self, field: &str, descending: bool) -> Self {
        let key = format!("sort[{}]", self.sort_count);
        self.sort_count += 1;
        let order = if descending { "desc" } else { "asc" };
        self.param(&key, &format!("{field}:{order}"))
    }

    /// One-based page number.
    pub fn page(self, page: u32) -> Self {
        self.param("pagination[page]", &page.max(1).to_string())
    }

    pub fn page_size(self, size: u32) -> Self {
        self.param("pagination[pageSize]", &size.max(1).to_string())
    }

    pub fn filter(self, field: &str, op: FilterOp, value: &str) -> Self {
        let key = format!("filters[{field}][{}]", op.as_str());
        self.param(&key, value)
    }

    /// Escape hatch for parameters without a dedicated builder.
    pub fn param(mut self, key: &str, value: &str) -> Self {
        self.params.push((key.to_string(), value.to_string()));
        self
    }

    pub fn pairs(&self) -> &[(String, String)] {
        &self.params
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// `application/x-www-form-urlencoded` string without the leading `?`.
    pub fn to_query_string(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .extend_pairs(self.params.iter())
            .finish()
    }
}
