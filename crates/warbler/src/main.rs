use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // stdout carries the command output
    tracing_subscriber::fmt().with_writer(std::io::stderr).init();

    let args = warbler::cli::WarblerArgs::parse();

    warbler::run(args).await
}
