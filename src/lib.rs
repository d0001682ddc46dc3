//! Demo serverless functions for AWS Lambda.
//!
//! This crate holds two independent handlers, each shipped as its own binary:
//! 1. `dependency`: calls an external HTTP API (ipify) and logs the function's
//!    public IP, returning the event unchanged
//! 2. `simple`: returns a fixed record built from string formatting, literals
//!    and the toolchain version
//!
//! # Example
//!
//! ```no_run
//! use demo_functions::clients::ReqwestTransport;
//! use demo_functions::handlers::dependency::handle_event;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     demo_functions::setup_logging();
//!
//!     let transport = ReqwestTransport::new();
//!     let event = serde_json::json!({ "hello": "world" });
//!
//!     let echoed =
//!         handle_event(event.clone(), &lambda_runtime::Context::default(), &transport).await?;
//!     assert_eq!(echoed, event);
//!
//!     Ok(())
//! }
//! ```

pub mod clients;
pub mod core;
pub mod errors;
pub mod handlers;

pub use errors::HandlerError;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once, before the handler
/// is passed to `lambda_runtime::run`.
///
/// # Example
///
/// ```
/// demo_functions::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    tracing_subscriber::registry().with(fmt_layer).init();
}
