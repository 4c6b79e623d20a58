#[tokio::main]
async fn main() -> anyhow::Result<()> {
    scene_server::main_lib::run().await
}
