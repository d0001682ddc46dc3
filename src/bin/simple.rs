pub use demo_functions::handlers::simple::handler;

#[tokio::main]
async fn main() -> Result<(), lambda_runtime::Error> {
    demo_functions::setup_logging();
    lambda_runtime::run(lambda_runtime::service_fn(handler)).await
}
