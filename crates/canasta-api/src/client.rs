// Afición HTTP client
//
// Wraps `reqwest::Client` with the vendor's conventions: form-encoded POST
// requests against a fixed base host, a device id on every request, and a
// rotating session key obtained by the `connect` handshake. Endpoint modules
// (teams, season, matches, lookup) are implemented as inherent methods via
// separate files to keep this module focused on transport mechanics.

use std::sync::Arc;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use tracing::{debug, trace};
use url::Url;

use crate::error::Error;
use crate::observer::{RequestObserver, RequestRecord};
use crate::transport::TransportConfig;

/// Production base host for the vendor API.
pub const BASE_URL: &str = "https://appaficioncabb.indalweb.net/";

/// Client version string the mobile app reports during the handshake.
const APP_VERSION: &str = "30012";

/// Envelope fields present in every response.
///
/// `resultado == "error"` signals a server-side rejection and `error`
/// carries the message. The envelope is checked before the endpoint shape
/// is decoded, so wrappers never see a rejected payload.
#[derive(Debug, Deserialize)]
struct Envelope {
    #[serde(default)]
    resultado: String,
    #[serde(default)]
    error: String,
}

/// Client construction settings.
///
/// Both the base URL override and the observer are explicit here rather
/// than process globals: tests point `base_url` at a mock server, and a
/// consumer that wants a request log injects an observer.
#[derive(Clone, Default)]
pub struct ClientConfig {
    /// Override for the API host. `None` uses [`BASE_URL`].
    pub base_url: Option<Url>,
    pub transport: TransportConfig,
    /// Optional best-effort sink for request/response records.
    pub observer: Option<Arc<dyn RequestObserver>>,
}

/// Authenticated client for the Afición API.
///
/// Obtained via [`Client::connect`], which performs the device handshake
/// and captures the session key attached to all subsequent requests. The
/// key has no modeled expiry; server-side invalidation surfaces as
/// [`Error::Api`] on the affected call.
pub struct Client {
    http: reqwest::Client,
    base_url: Url,
    device_id: String,
    key: String,
    observer: Option<Arc<dyn RequestObserver>>,
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("base_url", &self.base_url)
            .field("device_id", &self.device_id)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// Register `uid`/`device_id` with the server and return a ready client.
    ///
    /// `POST dispositivo.ashx` with the fixed platform metadata the mobile
    /// app sends; the response carries the rotating session `key`. An empty
    /// `device_id` is accepted by the protocol but yields a key scoped to
    /// no device.
    pub async fn connect(uid: &str, device_id: &str, config: ClientConfig) -> Result<Self, Error> {
        let base_url = match config.base_url {
            Some(url) => url,
            None => Url::parse(BASE_URL)?,
        };
        let http = config.transport.build_client()?;

        let mut client = Self {
            http,
            base_url,
            device_id: device_id.to_owned(),
            key: String::new(),
            observer: config.observer,
        };

        #[derive(Deserialize)]
        struct Access {
            #[serde(default)]
            key: String,
        }

        debug!(uid, "registering device");

        let access: Access = client
            .request(
                "dispositivo.ashx",
                &[
                    ("uid", uid),
                    ("plataforma", "ios"),
                    ("tipo_dispositivo", "mobile"),
                    ("token_push", ""),
                    ("version", APP_VERSION),
                    ("accion", "acceso"),
                ],
            )
            .await?;

        client.key = access.key;
        debug!("session established");

        Ok(client)
    }

    /// The device id sent with every request.
    pub fn device_id(&self) -> &str {
        &self.device_id
    }

    /// The session key captured by the handshake.
    pub fn session_key(&self) -> &str {
        &self.key
    }

    // ── Request execution ────────────────────────────────────────────

    /// Execute one endpoint call.
    ///
    /// Merges the device id and, once known, the session key into `fields`,
    /// POSTs the form, reads the full body, notifies the observer, then
    /// applies the shared two-stage decode: envelope first, endpoint shape
    /// second. On success the returned value is fully populated per the
    /// endpoint's field mapping; there is no partial population on error.
    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        path: &str,
        fields: &[(&str, &str)],
    ) -> Result<T, Error> {
        let url = self.base_url.join(path)?;

        let mut form: Vec<(String, String)> = fields
            .iter()
            .map(|&(k, v)| (k.to_owned(), v.to_owned()))
            .collect();
        form.push(("id_dispositivo".to_owned(), self.device_id.clone()));
        if !self.key.is_empty() {
            form.push(("key".to_owned(), self.key.clone()));
        }

        debug!("POST {}", url);

        let resp = self
            .http
            .post(url.clone())
            .form(&form)
            .send()
            .await
            .map_err(Error::Transport)?;

        let status = resp.status();
        let body = resp.text().await.map_err(Error::Transport)?;
        trace!(%status, len = body.len(), "response read");

        self.observe(&url, &form, &body);

        parse_body(&body)
    }

    /// Notify the observer, discarding its failures.
    fn observe(&self, url: &Url, form: &[(String, String)], body: &str) {
        let Some(ref observer) = self.observer else {
            return;
        };
        let record = RequestRecord {
            url: url.as_str(),
            form,
            body,
        };
        if let Err(e) = observer.record(&record) {
            debug!("request observer failed: {e}");
        }
    }
}

/// Shared decode step applied to every response body.
///
/// Checks the `{resultado, error}` envelope before specializing into the
/// endpoint shape. An `"error"` discriminator wins over everything else in
/// the payload, and over the HTTP status code.
fn parse_body<T: DeserializeOwned>(body: &str) -> Result<T, Error> {
    let envelope: Envelope = serde_json::from_str(body).map_err(|e| decode_error(&e, body))?;

    if envelope.resultado == "error" {
        return Err(Error::Api {
            message: envelope.error,
        });
    }

    serde_json::from_str(body).map_err(|e| decode_error(&e, body))
}

fn decode_error(e: &serde_json::Error, body: &str) -> Error {
    // Clamp the preview to a char boundary; bodies are Spanish text.
    let mut end = body.len().min(200);
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    Error::Decode {
        message: format!("{e} (body preview: {:?})", &body[..end]),
        body: body.to_owned(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Probe {
        #[serde(default)]
        key: String,
    }

    #[test]
    fn parse_body_unwraps_success() {
        let probe: Probe = parse_body(r#"{"resultado":"ok","key":"abc"}"#).unwrap();
        assert_eq!(probe.key, "abc");
    }

    #[test]
    fn parse_body_surfaces_error_discriminator() {
        let result: Result<Probe, Error> =
            parse_body(r#"{"resultado":"error","error":"sesión inválida","key":"ignored"}"#);
        match result {
            Err(Error::Api { message }) => assert_eq!(message, "sesión inválida"),
            other => panic!("expected Api error, got: {other:?}"),
        }
    }

    #[test]
    fn parse_body_missing_envelope_fields_is_success() {
        // The server omits `resultado` on some happy paths; absence is not
        // an error signal.
        let probe: Probe = parse_body(r#"{"key":"abc"}"#).unwrap();
        assert_eq!(probe.key, "abc");
    }

    #[test]
    fn parse_body_rejects_non_json() {
        let result: Result<Probe, Error> = parse_body("<html>mantenimiento</html>");
        assert!(matches!(result, Err(Error::Decode { .. })));
    }

    #[test]
    fn decode_error_preview_respects_char_boundaries() {
        // Byte 200 of this body falls inside a two-byte 'á'.
        let body = "aá".repeat(100);
        let result: Result<Probe, Error> = parse_body(&body);
        match result {
            Err(Error::Decode { message, .. }) => assert!(message.contains("body preview")),
            other => panic!("expected Decode error, got: {other:?}"),
        }
    }
}
