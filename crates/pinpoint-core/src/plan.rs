use std::path::PathBuf;

/// A document path paired with the keywords to locate within it.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    /// Path of the document, resolved against the working directory.
    pub path: PathBuf,
    /// Keywords scanned in order, producing at most one window each.
    pub keywords: Vec<String>,
}

impl SearchRequest {
    /// Creates a request for `path` over the given keywords.
    pub fn new<T: Into<PathBuf>>(path: T, keywords: &[&str]) -> Self {
        Self {
            path: path.into(),
            keywords: keywords.iter().map(|keyword| (*keyword).to_owned()).collect(),
        }
    }
}

/// An ordered list of search requests, processed front to back.
#[derive(Debug, Clone, Default)]
pub struct SearchPlan {
    /// Requests in processing order.
    pub requests: Vec<SearchRequest>,
}

impl SearchPlan {
    /// Creates an empty plan.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a request, preserving insertion order.
    #[must_use]
    pub fn with_request(mut self, request: SearchRequest) -> Self {
        self.requests.push(request);
        self
    }
}
