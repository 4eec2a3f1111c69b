use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::path::PathBuf;

use log::{debug, info, warn};
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::{Collection, CollectionState, CollectionWarning};
use crate::error::{LutError, Result};
use crate::lut::Lut;
use crate::naming::{Band, LutFileName};

impl Collection {
    /// Load every table of property `var`, replacing the current state
    ///
    /// # Errors
    /// * [`LutError::NoMatchingFiles`] if no file under the root has `var`
    /// * [`LutError::DuplicateWavelength`] if two files map to one band
    /// * any error raised while parsing names, metadata or payloads
    ///
    /// On error the collection keeps whatever it held before the call.
    pub fn load(&mut self, var: &str) -> Result<()> {
        let state = self.build_state(var)?;

        info!(
            "This collection is for {} with aerosol type {} with proportion {:.2}",
            state.sensor.as_deref().unwrap_or_default(),
            state.aerosol.as_deref().unwrap_or_default(),
            state.proportion.unwrap_or_default()
        );
        info!(
            "Found {} bands for wavelengths {:?}",
            state.bands.len(),
            state.bands.iter().map(Band::to_string).collect::<Vec<_>>()
        );

        self.state = state;
        Ok(())
    }

    /// Property types present under the root, whatever is currently loaded
    pub fn available_props(&self) -> Result<BTreeSet<String>> {
        let grammar = &self.config.naming;
        Ok(self
            .metadata_files()?
            .iter()
            .filter_map(|path| grammar.parse(path).ok())
            .map(|parsed| parsed.prop)
            .collect())
    }

    fn build_state(&self, var: &str) -> Result<CollectionState> {
        let matched = self.discover(var)?;

        let Some((_, first)) = matched.values().next() else {
            return Err(LutError::NoMatchingFiles {
                path: self.path.clone(),
                prop: var.to_string(),
            });
        };
        let warnings = consistency_warnings(first, &matched);
        for warning in &warnings {
            warn!("{warning}");
        }

        let options = self.config.decode;
        #[cfg(not(feature = "parallel"))]
        let entries = matched.iter();
        #[cfg(feature = "parallel")]
        let entries = matched.par_iter();
        let luts = entries
            .map(|(band, (path, _))| -> Result<(Band, Lut)> {
                let lut = Lut::open(path, &format!("{var}_{band}"), &options)?;
                Ok((*band, lut))
            })
            .collect::<Result<BTreeMap<Band, Lut>>>()?;

        Ok(CollectionState {
            prop: Some(var.to_string()),
            sensor: Some(first.sensor.clone()),
            aerosol: Some(first.aerosol.clone()),
            proportion: Some(first.proportion),
            bands: luts.keys().copied().collect(),
            luts,
            warnings,
        })
    }

    /// Metadata files of property `var`, keyed by band
    fn discover(&self, var: &str) -> Result<BTreeMap<Band, (PathBuf, LutFileName)>> {
        let grammar = &self.config.naming;
        let mut matched: BTreeMap<Band, (PathBuf, LutFileName)> = BTreeMap::new();

        for path in self.metadata_files()? {
            let parsed = match grammar.parse(&path) {
                Ok(parsed) => parsed,
                Err(e) => {
                    if grammar.prop_of(&path) == Some(var) {
                        return Err(e);
                    }
                    debug!("Skipping {}: {}", path.display(), e);
                    continue;
                }
            };
            if parsed.prop != var {
                continue;
            }

            match matched.entry(parsed.band) {
                Entry::Occupied(existing) => {
                    return Err(LutError::DuplicateWavelength {
                        band: parsed.band.to_string(),
                        first: existing.get().0.clone(),
                        second: path,
                    });
                }
                Entry::Vacant(slot) => {
                    info!("Found LUT {} for band {}", var, parsed.band);
                    slot.insert((path, parsed));
                }
            }
        }
        Ok(matched)
    }

    /// Regular files directly under the root carrying the metadata extension,
    /// sorted by name
    fn metadata_files(&self) -> Result<Vec<PathBuf>> {
        let grammar = &self.config.naming;
        let entries = std::fs::read_dir(&self.path).map_err(|e| LutError::io(&self.path, e))?;

        let mut files = Vec::new();
        for entry in entries {
            let path = entry.map_err(|e| LutError::io(&self.path, e))?.path();
            if path.is_file() && grammar.is_metadata_file(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }
}

/// Compare every file against `first` on the collection-wide attributes
fn consistency_warnings(
    first: &LutFileName,
    matched: &BTreeMap<Band, (PathBuf, LutFileName)>,
) -> Vec<CollectionWarning> {
    let mut warnings = Vec::new();
    for (path, parsed) in matched.values() {
        let checks = [
            ("sensor", &first.sensor, &parsed.sensor),
            ("aerosol", &first.aerosol, &parsed.aerosol),
        ];
        for (field, expected, found) in checks {
            if expected != found {
                warnings.push(CollectionWarning::InconsistentCollection {
                    field,
                    expected: expected.clone(),
                    found: found.clone(),
                    path: path.clone(),
                });
            }
        }
        if first.proportion != parsed.proportion {
            warnings.push(CollectionWarning::InconsistentCollection {
                field: "proportion",
                expected: first.proportion.to_string(),
                found: parsed.proportion.to_string(),
                path: path.clone(),
            });
        }
    }
    warnings
}
