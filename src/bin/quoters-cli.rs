use clap::{Parser, Subcommand};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "quoters-cli")]
#[command(about = "Command line client for the quoters API", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8080")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every quote
    All,
    /// Fetch one quote by id
    Get { id: i64 },
    /// Fetch a random quote
    Random,
    /// Call the latency-injection health check
    Ping,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let client = reqwest::Client::new();
    let base = cli.url.trim_end_matches('/');

    match cli.command {
        Commands::All => {
            let res = client.get(format!("{}/api", base)).send().await?;
            print_json(res).await?;
        }
        Commands::Get { id } => {
            let res = client.get(format!("{}/api/{}", base, id)).send().await?;
            print_json(res).await?;
        }
        Commands::Random => {
            let res = client.get(format!("{}/api/random", base)).send().await?;
            print_json(res).await?;
        }
        Commands::Ping => {
            let start = std::time::Instant::now();
            let res = client.get(format!("{}/ping", base)).send().await?;
            let status = res.status();
            let body = res.text().await?;
            if !status.is_success() {
                eprintln!("Error: ping returned status {}", status);
            }
            println!("{} ({} ms)", body, start.elapsed().as_millis());
        }
    }

    Ok(())
}

async fn print_json(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: API returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
