//! # appcast-clean
//!
//! Removes every release of one Sparkle update channel from an
//! `appcast.xml`, rewriting the file in place.
//!
//! ## Pipeline
//!
//! ```text
//! Store::load → ChannelFilter → Store::save → CleanReport
//! ```
//!
//! ## Quick Start
//!
//! ```bash
//! # Drop all pre-release builds before publishing a stable appcast
//! clean-appcast appcast.xml edge
//! ```
//!
//! Set `RUST_LOG=debug` to see which releases were removed or kept.

/// Error handling.
///
/// [`AppcastError`](app::AppcastError) separates missing files, malformed
/// XML and every other failure.
pub mod app;

/// Command-line interface using clap.
///
/// `clean-appcast <appcast_file> <channel_name>`; any other argument count
/// prints [`USAGE`](cli::USAGE) and exits with 1.
pub mod cli;

/// Core domain models.
///
/// - [`Release`](domain::Release): channel and title of one `<item>`
/// - [`CleanReport`](domain::CleanReport): result of a successful run
pub mod domain;

/// Namespace-aware streaming filter over appcast XML.
pub mod filter;

/// Loading and saving appcast documents.
///
/// - [`Store`](store::Store): trait seam used by the commands
/// - [`FileStore`](store::FileStore): filesystem implementation with atomic saves
pub mod store;
