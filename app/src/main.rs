#[tokio::main]
async fn main() {
    if let Err(e) = bridge_amounts_app::run().await {
        eprintln!("bridge-amounts: {}", e);
        std::process::exit(1);
    }
}
