//! Handler that depends on an external HTTP API.
//!
//! Looks up the function's public IP and logs it. The event is returned
//! untouched; the lookup only shows up in the logs.

use lambda_runtime::{Context, Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info};

use crate::clients::{HttpTransport, IPIFY_URL, ReqwestTransport, fetch_ip};
use crate::errors::HandlerError;

pub use self::function_handler as handler;

/// Lambda handler for the dependency entrypoint.
///
/// # Errors
///
/// Any transport or response error is propagated to the runtime as an
/// invocation failure.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let transport = ReqwestTransport::new();

    let (payload, context) = event.into_parts();
    Ok(handle_event(payload, &context, &transport).await?)
}

/// Logs the invocation, fetches the public IP through `transport` and echoes `event`.
///
/// # Errors
///
/// See [`fetch_ip`].
pub async fn handle_event(
    event: Value,
    context: &Context,
    transport: &dyn HttpTransport,
) -> Result<Value, HandlerError> {
    info!("{:?} - {:?}", event, context);

    let (_, ip_info) = fetch_ip(transport, IPIFY_URL)
        .await
        .map_err(|e| {
            error!(request_id = %context.request_id, "IP lookup failed: {}", e);
            e
        })?;

    info!("Lambda IP: {}", ip_info.ip_text());

    Ok(event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::RawResponse;
    use async_trait::async_trait;
    use serde_json::json;

    struct FailingTransport;

    #[async_trait]
    impl HttpTransport for FailingTransport {
        async fn get(&self, _url: &str) -> Result<RawResponse, HandlerError> {
            Err(HandlerError::Transport("dns error: no such host".to_string()))
        }
    }

    #[tokio::test]
    async fn test_transport_error_propagates_unchanged() {
        let err = handle_event(json!({"k": "v"}), &Context::default(), &FailingTransport)
            .await
            .unwrap_err();

        match err {
            HandlerError::Transport(msg) => assert_eq!(msg, "dns error: no such host"),
            other => panic!("Unexpected error: {other:?}"),
        }
    }
}
