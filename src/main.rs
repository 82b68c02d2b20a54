use anyhow::Context;
use clap::Parser;
use dotenvy::dotenv;
use filedrop::cli::{Cli, Command};
use filedrop::config::UploadConfig;
use filedrop::services::controller::UploadController;
use filedrop::utils::sniff::detect_content_type;
use std::io::Write;
use tokio::sync::mpsc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();

    // Initialize tracing with EnvFilter
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "filedrop=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = UploadConfig::from_env();
    let mut controller =
        UploadController::new(&config).context("failed to open the upload history")?;

    match cli.command {
        Command::Upload { path, content_type } => {
            let content_type = match content_type {
                Some(explicit) => explicit,
                None => detect_content_type(&path)
                    .await
                    .with_context(|| format!("cannot read {}", path.display()))?,
            };
            info!("📤 Uploading {} as {content_type}", path.display());

            let (tx, mut rx) = mpsc::unbounded_channel();
            let reporter = tokio::spawn(async move {
                let mut stdout = std::io::stdout();
                while let Some(percent) = rx.recv().await {
                    let _ = write!(stdout, "\rUploading... {percent}%");
                    let _ = stdout.flush();
                }
                let _ = writeln!(stdout);
            });

            if let Some(outcome) = controller.upload(&path, &content_type, tx).await {
                reporter.await.ok();
                match outcome {
                    Ok(record) => {
                        println!("File uploaded successfully! (key: {})", record.key);
                        println!("{}", controller.render());
                    }
                    Err(e) => {
                        eprintln!("{}", e.status_line());
                        std::process::exit(1);
                    }
                }
            }
        }

        Command::List => {
            println!("{}", controller.render());
        }

        Command::Delete { index } => match controller.delete(index)? {
            Some(removed) => {
                println!("Removed {}", removed.name);
                println!("{}", controller.render());
            }
            None => {
                eprintln!("No history entry at index {index}");
                std::process::exit(1);
            }
        },
    }

    Ok(())
}
