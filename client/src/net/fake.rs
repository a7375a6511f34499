//! Recording transport used by unit tests.

use std::cell::RefCell;
use std::collections::VecDeque;

use super::http::{ApiError, ApiRequest, ApiResponse, Transport};

/// Replays scripted responses in order and records every request.
///
/// When the script runs out, requests answer `200 {}`.
#[derive(Default)]
pub struct FakeTransport {
    requests: RefCell<Vec<ApiRequest>>,
    script: RefCell<VecDeque<Result<ApiResponse, ApiError>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, status: u16, body: &str) {
        self.script
            .borrow_mut()
            .push_back(Ok(ApiResponse { status, body: body.to_owned() }));
    }

    pub fn respond_json(&self, status: u16, body: serde_json::Value) {
        self.respond(status, &body.to_string());
    }

    pub fn fail(&self, err: ApiError) {
        self.script.borrow_mut().push_back(Err(err));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for FakeTransport {
    async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
        self.requests.borrow_mut().push(request);
        self.script
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(ApiResponse { status: 200, body: "{}".to_owned() }))
    }
}
