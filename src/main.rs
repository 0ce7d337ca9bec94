use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    // Delegate to the client framework entry point.
    ks_client::run().await
}
