#[tokio::main]
async fn main() -> anyhow::Result<()> {
    quizlet_docx_server::run().await
}
