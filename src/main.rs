#[tokio::main]
async fn main() {
    auth_flow::run().await;
}
