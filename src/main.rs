#[tokio::main]
async fn main() {
    if let Err(e) = mapcolab::run().await {
        eprintln!("Server startup failed: {}", e);
        std::process::exit(1);
    }
}
