use std::fmt;
use std::path::PathBuf;

/// Non-fatal condition found while loading a collection
#[derive(Debug, Clone, PartialEq)]
pub enum CollectionWarning {
    /// A file disagrees with the first file on a collection-wide attribute
    InconsistentCollection {
        /// Attribute name (`sensor`, `aerosol` or `proportion`)
        field: &'static str,
        /// Value kept for the collection
        expected: String,
        /// Value carried by `path`
        found: String,
        /// Diverging metadata file
        path: PathBuf,
    },
}

impl fmt::Display for CollectionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CollectionWarning::InconsistentCollection {
                field,
                expected,
                found,
                path,
            } => write!(
                f,
                "Inconsistent {field} in {}: found '{found}', keeping '{expected}'",
                path.display()
            ),
        }
    }
}
