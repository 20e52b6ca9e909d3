#[tokio::main]
async fn main() {
    infoqueue::app::startup::startup().await;
}
