//! Quoters service.
//!
//! ```text
//!     GET /api            ┐
//!     GET /api/{id}       ├─▶ http::quote ─▶ QuoteService ─▶ QuoteStore
//!     GET /api/random     ┘                      │
//!                                                ▼
//!                                          quoting::mapper ─▶ JSON
//!
//!     GET /ping ─▶ QuoteService::ping ─▶ observe_work (span "doWork" + do_work histogram)
//! ```

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "quoters")]
#[command(about = "Quote API with tracing and metrics", long_about = None)]
struct Cli {
    /// Path to a TOML configuration file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    quoters::lifecycle::startup::run(cli.config.as_deref()).await?;
    Ok(())
}
