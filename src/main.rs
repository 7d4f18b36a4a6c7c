use anyhow::Result;
use clap::Parser;
use clap::error::ErrorKind;
use repofetch::commands::{Command, CommandContext, FetchCommand};
use repofetch::manifest;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "repofetch")]
#[command(about = "Clone the repositories listed in a manifest and pin each at a target commit")]
#[command(version)]
struct Cli {
    /// Path to the manifest file (three lines per record: URL, commit, reserved)
    manifest: PathBuf,

    /// Base directory to create the working copies under
    target_dir: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    // A wrong argument count prints the usage diagnostic and exits 1
    // before any file is touched. Help and version keep exit status 0.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => e.exit(),
            _ => {
                let _ = e.print();
                process::exit(1)
            }
        },
    };

    // A missing or unreadable manifest is fatal and aborts the run
    let projects = manifest::read_manifest(&cli.manifest)?;

    let context = CommandContext {
        projects,
        target_dir: cli.target_dir,
    };
    FetchCommand::default().execute(&context).await?;

    Ok(())
}
