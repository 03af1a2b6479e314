#[tokio::main]
async fn main() -> anyhow::Result<()> {
    vimgym_server::run().await
}
