// Optional request observer
//
// The transport calls `record` synchronously after reading each response
// body. Observation is best-effort: failures are logged at debug level and
// discarded, never surfaced to the call that triggered them. The original
// app's append-only request log is one possible implementation, supplied by
// the consumer.

use std::error::Error as StdError;

/// One request/response exchange as seen by the transport.
#[derive(Debug, Clone, Copy)]
pub struct RequestRecord<'a> {
    /// Full request URL.
    pub url: &'a str,
    /// Form fields as sent, in order, prior to percent-encoding.
    pub form: &'a [(String, String)],
    /// Raw response body.
    pub body: &'a str,
}

/// Sink for recorded exchanges (e.g. a local append-only request log).
pub trait RequestObserver: Send + Sync {
    fn record(&self, record: &RequestRecord<'_>) -> Result<(), Box<dyn StdError + Send + Sync>>;
}
