//! Parcel CLI: upload a file through a pre-signed URL.
//!
//! The endpoint of the URL-issuing function comes from `--endpoint` or PARCEL_ENDPOINT.

use anyhow::Context;
use clap::{Parser, Subcommand};
use parcel_cli::{init_tracing, TerminalObserver};
use parcel_client::{SelectedFile, UploadClient, UploadController};

#[derive(Parser)]
#[command(name = "parcel", about = "Direct-to-bucket file uploads")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Upload a file and print its storage key
    Upload {
        /// Path to the file to upload
        file: std::path::PathBuf,
        /// URL of the upload URL function
        #[arg(long, env = "PARCEL_ENDPOINT")]
        endpoint: String,
        /// MIME type to send instead of the one guessed from the extension
        #[arg(long)]
        content_type: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Upload {
            file,
            endpoint,
            content_type,
        } => {
            let mut selected = SelectedFile::from_path(&file).await?;
            if let Some(content_type) = content_type {
                selected = selected.with_content_type(content_type);
            }

            let client = UploadClient::new(endpoint).context("Failed to create upload client")?;
            let mut controller = UploadController::new(client, TerminalObserver::default());
            controller.select_file(Some(selected))?;

            let file_key = controller.upload().await?;
            println!("{}", file_key);
        }
    }

    Ok(())
}
