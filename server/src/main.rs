mod cli;
mod env;
mod http;
mod server;
mod state;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = cli::parse();
    match cli.command {
        Some(cli::Commands::Start) | None => {
            let config = env::init()?;
            upcheck_common::logger::init("upcheck:server", &config.mode);
            server::start(config).await
        }
        Some(cli::Commands::Version) => {
            println!("{}", env::version());
            Ok(())
        }
    }
}
