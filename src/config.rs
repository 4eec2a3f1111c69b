//! Collection configuration, optionally read from a TOML file:
//!
//! ```toml
//! # luts.toml
//! [naming]
//! metadata_extension = "txt"
//! lut_types = ["albedo", "lut_inv_CS", "lut_inv", "refl", "Tdif", "Tdir"]
//!
//! [decode]
//! precision = "float32"
//! endianness = "native"
//! ```
//!
//! Every key is optional.

use std::path::Path;

use serde::Deserialize;

use crate::binary::DecodeOptions;
use crate::error::{LutError, Result};
use crate::naming::NamingGrammar;

/// Configuration for discovering and decoding a collection
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CollectionConfig {
    /// File naming rules
    pub naming: NamingGrammar,
    /// Payload interpretation
    pub decode: DecodeOptions,
}

impl CollectionConfig {
    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| LutError::io(path, e))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::binary::{Endianness, Precision};

    #[test]
    fn test_parse_config() {
        let toml = r#"
            [naming]
            metadata_extension = "meta"
            lut_types = ["refl", "albedo"]

            [decode]
            precision = "float64"
            endianness = "big"
        "#;

        let config = CollectionConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.naming.metadata_extension, "meta");
        assert_eq!(config.naming.lut_types, vec!["refl", "albedo"]);
        assert_eq!(config.decode.precision, Precision::Float64);
        assert_eq!(config.decode.endianness, Endianness::Big);
    }

    #[test]
    fn test_partial_config() {
        let toml = r#"
            [decode]
            endianness = "little"
        "#;

        let config = CollectionConfig::from_toml_str(toml).unwrap();
        assert_eq!(config.decode.endianness, Endianness::Little);
        assert_eq!(config.decode.precision, Precision::Float32);
        assert_eq!(config.naming, NamingGrammar::default());
    }

    #[test]
    fn test_empty_config() {
        let config = CollectionConfig::from_toml_str("").unwrap();
        assert_eq!(config, CollectionConfig::default());
    }

    #[test]
    fn test_invalid_config() {
        let err = CollectionConfig::from_toml_str("[decode]\nprecision = \"float16\"\n").unwrap_err();
        assert!(matches!(err, LutError::Config(_)));
    }
}
