//! LUT file naming grammar
//!
//! Every LUT is stored as a binary payload `<stem>` next to a metadata file
//! `<stem>.txt`. The stem encodes what the table contains:
//!
//! ```text
//! <prop>_<tag>_<sensor>_<aerosol>_<tag>_<proportion>[_<tag>...]_<wavelength>
//! ```
//!
//! e.g. `refl_smac_VENUS_CONTINENTAL_aot_0.50_450.txt`. Tags are carried by
//! the simulation tooling and ignored here. The wavelength token ends at its
//! first `.`; what follows may be a file suffix such as `.bin`, but an
//! all-digit remainder (`450.5`) is a fractional wavelength and is rejected.
//! Parsing fails closed: a name that does not fit the grammar is an error,
//! never a default.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::{LutError, Result};

/// Version of the naming grammar implemented by [`NamingGrammar::parse`]
pub const GRAMMAR_VERSION: u32 = 1;

/// Property types produced by the simulation chain
pub const DEFAULT_LUT_TYPES: [&str; 6] = ["albedo", "lut_inv_CS", "lut_inv", "refl", "Tdif", "Tdir"];

/// Default extension of metadata files
pub const DEFAULT_METADATA_EXTENSION: &str = "txt";

/// Tokens that must follow the property: tag, sensor, aerosol, tag,
/// proportion, wavelength
const MIN_TOKENS_AFTER_PROP: usize = 6;

/// Wavelength identifier in nanometres
///
/// Canonical form is the integer value without zero padding, so `"0450"`
/// and `"450"` name the same band. Bands order numerically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Band(u32);

impl Band {
    /// Create a band from a wavelength in nanometres
    pub fn new(nm: u32) -> Self {
        Band(nm)
    }

    /// Wavelength in nanometres
    pub fn nm(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for Band {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Reason a wavelength token was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidBand(String);

impl fmt::Display for InvalidBand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for InvalidBand {}

impl FromStr for Band {
    type Err = InvalidBand;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(InvalidBand(format!(
                "wavelength '{s}' is not an unsigned integer"
            )));
        }
        let nm: u32 = s
            .parse()
            .map_err(|_| InvalidBand(format!("wavelength '{s}' is out of range")))?;
        if nm == 0 {
            return Err(InvalidBand("wavelength must be non-zero".to_string()));
        }
        Ok(Band(nm))
    }
}

/// Tokens extracted from one LUT file name
#[derive(Debug, Clone, PartialEq)]
pub struct LutFileName {
    /// Physical property, e.g. `refl` or `albedo`
    pub prop: String,
    /// Sensor name, e.g. `VENUS`
    pub sensor: String,
    /// Aerosol model, e.g. `CONTINENTAL`
    pub aerosol: String,
    /// Mixing proportion of the aerosol model
    pub proportion: f64,
    /// Wavelength of the table
    pub band: Band,
}

/// Naming grammar, parameterized by the known property types
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct NamingGrammar {
    /// Extension of metadata files, matched case-insensitively
    pub metadata_extension: String,
    /// Property types that may themselves contain underscores
    pub lut_types: Vec<String>,
}

impl Default for NamingGrammar {
    fn default() -> Self {
        Self {
            metadata_extension: DEFAULT_METADATA_EXTENSION.to_string(),
            lut_types: DEFAULT_LUT_TYPES.iter().map(|t| t.to_string()).collect(),
        }
    }
}

impl NamingGrammar {
    /// Whether `path` carries the metadata extension
    pub fn is_metadata_file(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|e| e.eq_ignore_ascii_case(&self.metadata_extension))
            .unwrap_or(false)
    }

    /// Parse the file name of `path` into its tokens
    pub fn parse(&self, path: &Path) -> Result<LutFileName> {
        let malformed = |reason: String| LutError::MalformedFilename {
            path: path.to_path_buf(),
            reason,
        };

        let stem = self
            .stem(path)
            .ok_or_else(|| malformed("file name is not valid UTF-8".to_string()))?;

        let (prop, rest) = self.split_prop(stem);
        if prop.is_empty() {
            return Err(malformed("empty property token".to_string()));
        }
        let tokens: Vec<&str> = rest.map(|r| r.split('_').collect()).unwrap_or_default();
        if tokens.len() < MIN_TOKENS_AFTER_PROP {
            return Err(malformed(format!(
                "expected at least {} tokens after '{prop}', found {}",
                MIN_TOKENS_AFTER_PROP,
                tokens.len()
            )));
        }
        if let Some(pos) = tokens.iter().position(|t| t.is_empty()) {
            return Err(malformed(format!("empty token at position {}", pos + 1)));
        }

        let proportion: f64 = tokens[4]
            .parse()
            .ok()
            .filter(|p: &f64| p.is_finite())
            .ok_or_else(|| malformed(format!("proportion '{}' is not a number", tokens[4])))?;

        let last = tokens[tokens.len() - 1];
        let (wavelength, suffix) = last.split_once('.').unwrap_or((last, ""));
        if !suffix.is_empty() && suffix.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed(format!("wavelength '{last}' has a fractional part")));
        }
        let band = wavelength
            .parse::<Band>()
            .map_err(|e| malformed(e.to_string()))?;

        Ok(LutFileName {
            prop: prop.to_string(),
            sensor: tokens[1].to_string(),
            aerosol: tokens[2].to_string(),
            proportion,
            band,
        })
    }

    /// Property a file name claims, resolved like [`parse`](Self::parse)
    /// resolves it, even when the rest of the name is malformed
    pub fn prop_of<'a>(&self, path: &'a Path) -> Option<&'a str> {
        let (prop, _) = self.split_prop(self.stem(path)?);
        Some(prop).filter(|p| !p.is_empty())
    }

    /// File name without the metadata extension
    fn stem<'a>(&self, path: &'a Path) -> Option<&'a str> {
        let file_name = path.file_name()?.to_str()?;
        if self.is_metadata_file(path) {
            Some(&file_name[..file_name.len() - self.metadata_extension.len() - 1])
        } else {
            Some(file_name)
        }
    }

    /// Split `stem` into the property and the remainder after its `_`
    ///
    /// Known property types win longest first, so `lut_inv_CS_...` is not
    /// read as `lut_inv`.
    fn split_prop<'a>(&self, stem: &'a str) -> (&'a str, Option<&'a str>) {
        let known = self
            .lut_types
            .iter()
            .filter(|t| {
                stem.len() > t.len() && stem.starts_with(t.as_str()) && stem[t.len()..].starts_with('_')
            })
            .max_by_key(|t| t.len());

        match known {
            Some(t) => (&stem[..t.len()], Some(&stem[t.len() + 1..])),
            None => match stem.split_once('_') {
                Some((prop, rest)) => (prop, Some(rest)),
                None => (stem, None),
            },
        }
    }
}
