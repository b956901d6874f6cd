use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Core error type shared across schemadrift crates.
#[derive(Debug, Error)]
pub enum Error {
    /// A schema dump could not be opened or read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The dump never contains the `---` line that ends its header.
    #[error("missing header separator (`---`) in {origin}")]
    MissingSeparator { origin: String },
}

/// Convenience alias for results returned by schemadrift crates.
pub type Result<T> = std::result::Result<T, Error>;
