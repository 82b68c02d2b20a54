use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "filedrop",
    version,
    about = "Upload files to object storage via pre-signed URLs"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Upload one file and record it in the history
    Upload {
        /// Path of the file to upload
        path: PathBuf,

        /// MIME type to send; sniffed from the file content when omitted
        #[arg(long)]
        content_type: Option<String>,
    },

    /// List previously uploaded files, newest first
    List,

    /// Delete one history entry by the index shown by `list`
    Delete { index: usize },
}
