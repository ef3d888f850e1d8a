use clap::Parser;
use p3r4::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    if let Err(err) = p3r4::run(cli).await {
        eprintln!("p3r4: {err}");
        std::process::exit(1);
    }
}
