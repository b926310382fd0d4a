pub mod file;

use std::path::Path;

use crate::app::Result;

pub use file::FileStore;

/// Where appcast documents are loaded from and saved back to.
pub trait Store {
    /// Read the whole document. A missing document is
    /// [`AppcastError::NotFound`](crate::app::AppcastError::NotFound).
    fn load(&self, path: &Path) -> Result<Vec<u8>>;

    /// Replace the document with `xml`.
    fn save(&self, path: &Path, xml: &[u8]) -> Result<()>;
}
