pub mod release;
pub mod report;

pub use release::Release;
pub use report::CleanReport;

/// XML namespace of Sparkle's appcast extensions (`sparkle:channel`,
/// `sparkle:version`, ...).
pub const SPARKLE_NAMESPACE: &str = "http://www.andymatuschak.org/xml-namespaces/sparkle";

/// Local name shared by the RSS feed channel and the Sparkle channel element.
pub const CHANNEL_TAG: &str = "channel";

pub const ITEM_TAG: &str = "item";
