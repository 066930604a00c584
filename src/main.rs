#[tokio::main]
async fn main() -> anyhow::Result<()> {
    shoplist_lib::bootstrap::run_app().await
}
