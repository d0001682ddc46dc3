//! Public IP lookup against an ipify-style endpoint

use serde_json::Value;
use tracing::{error, info};

use super::http_transport::HttpTransport;
use crate::core::models::{IpInfo, RawResponse};
use crate::errors::HandlerError;

/// Endpoint queried by the dependency handler.
pub const IPIFY_URL: &str = "https://api.ipify.org?format=json";

/// Fetches `url` and interprets the body as `{"ip": ...}`.
///
/// The raw response is logged before it is interpreted.
///
/// # Errors
///
/// Propagates transport failures, non-2xx statuses, bodies that are not JSON
/// and bodies without an `ip` key.
pub async fn fetch_ip(
    transport: &dyn HttpTransport,
    url: &str,
) -> Result<(RawResponse, IpInfo), HandlerError> {
    let raw = transport.get(url).await?;
    info!("{}", raw);
    info!("Response body: {}", body_for_log(&raw.body));

    let info = parse_ip_response(&raw)?;
    Ok((raw, info))
}

/// The `ip` value is taken as-is; only an absent key is an error.
///
/// # Errors
///
/// See [`fetch_ip`].
pub fn parse_ip_response(raw: &RawResponse) -> Result<IpInfo, HandlerError> {
    if !raw.is_success() {
        error!(
            "IP lookup returned status={} body={}",
            raw.status,
            body_for_log(&raw.body)
        );
        return Err(HandlerError::Status {
            status: raw.status,
            body: raw.body.clone(),
        });
    }

    let json: Value = serde_json::from_str(&raw.body)?;

    if json.get("ip").is_none() {
        return Err(HandlerError::MissingField("ip"));
    }

    Ok(serde_json::from_value(json)?)
}

/// Response bodies only reach the logs with the `debug-logs` feature.
fn body_for_log(body: &str) -> String {
    #[cfg(feature = "debug-logs")]
    {
        body.to_string()
    }
    #[cfg(not(feature = "debug-logs"))]
    {
        format!(
            "[... {} bytes masked, enable debug-logs feature to view ...]",
            body.len()
        )
    }
}
