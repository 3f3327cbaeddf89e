//! Test fixtures: canned transports and a recording diagnostic sink.

use std::cell::RefCell;

use async_trait::async_trait;

use crate::error::{FetchError, FetchResult};
use crate::transport::{HttpTransport, RawResponse};
use crate::view::{Diagnostics, Liveness};

pub const TESTING_JSON: &str =
    r#"[{"title":"Testing","finished":[{"uid":"a1","link":"/a","title":"Foo"}],"wip":[],"stubs":[]}]"#;

/// Replays one canned result and records every requested URL
pub struct FakeTransport {
    response: FetchResult<RawResponse>,
    pub requests: RefCell<Vec<String>>,
    revoke_on_request: Option<Liveness>,
}

impl FakeTransport {
    pub fn respond(status: u16, status_text: &str, body: &str) -> Self {
        Self::with_result(Ok(RawResponse {
            status,
            status_text: status_text.to_string(),
            body: body.to_string(),
        }))
    }

    pub fn ok(body: &str) -> Self {
        Self::respond(200, "OK", body)
    }

    pub fn unreachable() -> Self {
        Self::with_result(Err(FetchError::Transport("connection refused".into())))
    }

    fn with_result(response: FetchResult<RawResponse>) -> Self {
        Self {
            response,
            requests: RefCell::new(Vec::new()),
            revoke_on_request: None,
        }
    }

    /// Revoke `liveness` while the request is in flight, as a teardown
    /// racing the response would.
    pub fn revoking(mut self, liveness: Liveness) -> Self {
        self.revoke_on_request = Some(liveness);
        self
    }

    pub fn request_count(&self) -> usize {
        self.requests.borrow().len()
    }
}

#[async_trait(?Send)]
impl HttpTransport for FakeTransport {
    async fn get(&self, url: &str) -> FetchResult<RawResponse> {
        self.requests.borrow_mut().push(url.to_string());
        if let Some(liveness) = &self.revoke_on_request {
            liveness.revoke();
        }
        self.response.clone()
    }
}

#[async_trait(?Send)]
impl<T: HttpTransport + ?Sized> HttpTransport for std::rc::Rc<T> {
    async fn get(&self, url: &str) -> FetchResult<RawResponse> {
        (**self).get(url).await
    }
}

#[derive(Default)]
pub struct RecordingDiagnostics {
    pub messages: RefCell<Vec<String>>,
}

impl RecordingDiagnostics {
    pub fn count(&self) -> usize {
        self.messages.borrow().len()
    }
}

impl Diagnostics for RecordingDiagnostics {
    fn report(&self, error: &FetchError) {
        self.messages.borrow_mut().push(error.to_string());
    }
}
