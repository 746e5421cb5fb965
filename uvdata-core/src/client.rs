use anyhow::Context;
use std::sync::Arc;
use tracing::{debug, warn};

use crate::{
    city::resolve_coordinates,
    date::format_date,
    error::UvError,
    model::{UvLevelResponse, UvRequest, UvSample, transform},
    transport::{HttpTransport, Transport},
};

pub const API_URL: &str = "https://uvdata.arpansa.gov.au/api/uvlevel/";

/// Fetches a day of per-minute UV readings for one site.
///
/// Every call makes at most one request; there is no retry and no cache.
#[derive(Debug, Clone)]
pub struct UvClient {
    base_url: String,
    transport: Arc<dyn Transport>,
}

impl Default for UvClient {
    fn default() -> Self {
        Self::new()
    }
}

impl UvClient {
    pub fn new() -> Self {
        Self::with_base_url(API_URL)
    }

    /// Client against another endpoint, e.g. a mirror or a test server.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self::with_transport(base_url, Arc::new(HttpTransport::new()))
    }

    pub fn with_transport(base_url: impl Into<String>, transport: Arc<dyn Transport>) -> Self {
        Self { base_url: base_url.into(), transport }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Validate `request`, query the API and return its samples in upstream order.
    ///
    /// Location and date are checked before anything goes over the wire; any
    /// failure after that point is reported as [`UvError::FetchFailed`].
    pub async fn fetch(&self, request: &UvRequest) -> Result<Vec<UvSample>, UvError> {
        let result = match build_query(request) {
            Ok(query) => {
                debug!(url = %self.base_url, ?query, "requesting UV data");
                self.request(&query).await
            }
            Err(err) => Err(err),
        };

        match &result {
            Ok(samples) => debug!(count = samples.len(), "received UV samples"),
            Err(err) if err.is_validation() => debug!(%err, "rejected UV data request"),
            Err(err) => warn!(%err, location = %request.location, "UV data request failed"),
        }
        result
    }

    async fn request(&self, query: &[(&str, String)]) -> Result<Vec<UvSample>, UvError> {
        let res = self
            .transport
            .get(&self.base_url, query)
            .await
            .map_err(|err| UvError::fetch_failed(&err))?;

        if !res.is_success() {
            return Err(UvError::FetchFailed {
                status: Some(res.status),
                reason: format!("API error: {}", res.status),
            });
        }

        let parsed: UvLevelResponse = serde_json::from_str(&res.body)
            .context("Failed to parse ARPANSA JSON")
            .map_err(|err| UvError::fetch_failed(&err))?;

        Ok(transform(parsed.graph_data))
    }
}

fn build_query(request: &UvRequest) -> Result<[(&'static str, String); 3], UvError> {
    let coords = resolve_coordinates(&request.location)?;
    let date = format_date(&request.date.resolve()?);

    Ok([
        ("longitude", coords.longitude.to_string()),
        ("latitude", coords.latitude.to_string()),
        ("date", date),
    ])
}

/// Fetch UV data from the public ARPANSA endpoint.
pub async fn fetch_uv_data(request: &UvRequest) -> Result<Vec<UvSample>, UvError> {
    UvClient::new().fetch(request).await
}
