//! Response handling shared by the public and trading clients

use futures::future::BoxFuture;
use reqwest::Response;
use serde_json::Value;
use tracing::debug;

use crate::error::{RestError, RestResult};

/// Pending API call
///
/// Everything that must happen before the network round-trip (URL building,
/// nonce generation, signing) has already been done when this is returned.
pub type ApiFuture = BoxFuture<'static, RestResult<Value>>;

/// Read the body and decode it as JSON
///
/// The HTTP status is not inspected: the exchange reports failures in the
/// body, and those bodies are passed through to the caller.
pub(crate) async fn read_json(response: Response) -> RestResult<Value> {
    let status = response.status();
    let body = response.bytes().await?;

    debug!(%status, len = body.len(), "Received response");

    serde_json::from_slice(&body).map_err(|e| RestError::decode(e, &body))
}

/// Wrap an early failure so it surfaces when the call is awaited
pub(crate) fn failed(err: RestError) -> ApiFuture {
    Box::pin(futures::future::ready(Err(err)))
}
