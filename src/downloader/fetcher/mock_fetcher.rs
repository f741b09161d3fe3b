use std::cell::RefCell;
use std::collections::HashMap;

use super::{Fetcher, Response};

/// Answers by exact URL; anything unrouted gets a 404.
pub struct MockFetcher {
    routes: HashMap<String, Response>,
    requests: RefCell<Vec<(String, Vec<(String, String)>)>>,
}

impl Fetcher for MockFetcher {
    fn fetch(&self, url: &str, headers: &[(&str, &str)]) -> Response {
        let headers = headers
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect();

        self.requests.borrow_mut().push((url.to_string(), headers));

        self.routes
            .get(url)
            .cloned()
            .unwrap_or_else(|| Response::status(404))
    }
}

impl MockFetcher {
    pub fn new() -> Self {
        Self {
            routes: HashMap::new(),
            requests: RefCell::new(Vec::new()),
        }
    }

    pub fn with_route(mut self, url: &str, response: Response) -> Self {
        self.routes.insert(url.to_string(), response);
        self
    }

    pub fn requested_urls(&self) -> Vec<String> {
        self.requests
            .borrow()
            .iter()
            .map(|(url, _)| url.clone())
            .collect()
    }

    pub fn headers_for(&self, url: &str) -> Option<Vec<(String, String)>> {
        self.requests
            .borrow()
            .iter()
            .find(|(requested, _)| requested == url)
            .map(|(_, headers)| headers.clone())
    }
}

impl Default for MockFetcher {
    fn default() -> Self {
        Self::new()
    }
}
