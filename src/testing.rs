//! In-memory transport used by the unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use crate::client::HubSpotClient;
use crate::config::ClientConfig;
use crate::error::Result;
use crate::request::RequestDescriptor;
use crate::transport::{RawResponse, Transport};

pub(crate) const BASE: &str = "https://api.hubapi.com/";

/// Records every request and answers with queued responses, `200 {}` once
/// the queue runs dry.
#[derive(Default)]
pub(crate) struct RecordingTransport {
    requests: Mutex<Vec<RequestDescriptor>>,
    responses: Mutex<VecDeque<RawResponse>>,
}

impl RecordingTransport {
    pub(crate) fn respond_with(&self, response: RawResponse) {
        self.responses.lock().unwrap().push_back(response);
    }

    pub(crate) fn requests(&self) -> Vec<RequestDescriptor> {
        self.requests.lock().unwrap().clone()
    }

    pub(crate) fn last(&self) -> RequestDescriptor {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request was sent")
    }

    pub(crate) fn count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

impl Transport for RecordingTransport {
    fn send(&self, request: &RequestDescriptor) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| RawResponse::new(200, "{}")))
    }
}

/// Client authenticated with API key `demo`, wired to a recording transport.
pub(crate) fn recording_client() -> (HubSpotClient, Arc<RecordingTransport>) {
    let transport = Arc::new(RecordingTransport::default());
    let config = ClientConfig::builder()
        .api_key("demo")
        .base_url(BASE)
        .build()
        .unwrap();
    let client = HubSpotClient::with_transport(config, transport.clone());
    (client, transport)
}

/// Route of a request relative to the API root.
pub(crate) fn path(request: &RequestDescriptor) -> &str {
    request.route().trim_start_matches(BASE)
}

/// Query pairs minus the `hapikey` credential.
pub(crate) fn query(request: &RequestDescriptor) -> Vec<(String, String)> {
    request
        .query_pairs()
        .into_iter()
        .filter(|(k, _)| k != "hapikey")
        .collect()
}

/// Build owned query pairs for comparisons.
pub(crate) fn pairs(items: &[(&str, &str)]) -> Vec<(String, String)> {
    items
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}
