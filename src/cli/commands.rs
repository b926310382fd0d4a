use std::path::Path;
use std::process::ExitCode;

use crate::app::Result;
use crate::cli::Cli;
use crate::domain::CleanReport;
use crate::filter::ChannelFilter;
use crate::store::{FileStore, Store};

/// Remove every `channel` release from the appcast at `path`, in place.
pub fn clean_appcast(path: &Path, channel: &str) -> Result<CleanReport> {
    clean_appcast_with(&FileStore::new(), path, channel)
}

pub fn clean_appcast_with<S: Store>(store: &S, path: &Path, channel: &str) -> Result<CleanReport> {
    let input = store.load(path)?;
    let filtered = ChannelFilter::new(channel).filter(&input)?;
    store.save(path, &filtered.xml)?;

    Ok(CleanReport {
        path: path.to_path_buf(),
        channel: channel.to_string(),
        removed: filtered.removed,
    })
}

/// Run the command and report the outcome. Every failure exits with 1.
pub fn run(cli: &Cli) -> ExitCode {
    match clean_appcast(&cli.appcast_file, &cli.channel_name) {
        Ok(report) => {
            println!("✓ {}", report);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("✗ {}", e);
            ExitCode::FAILURE
        }
    }
}
