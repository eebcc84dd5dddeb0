//! Error taxonomy for the wayline core.

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A field required by the active template/document branch is absent.
    /// No partial document is produced.
    #[error("missing configuration: {0}")]
    MissingConfiguration(&'static str),

    /// The destination directory could not be created at write time.
    #[error("failed to create output directory {path}")]
    DirectoryCreation {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An expected container entry is missing, unreadable, or holds
    /// XML that does not parse.
    #[error("malformed container: {0}")]
    MalformedContainer(String),

    #[error("xml encoding failed")]
    XmlEncode(#[from] quick_xml::SeError),

    #[error("xml decoding failed")]
    XmlDecode(#[from] quick_xml::DeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
