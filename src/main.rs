#[tokio::main]
async fn main() -> anyhow::Result<()> {
    huker_console::bootstrapper::run().await
}
