use std::collections::HashSet;
use std::io::ErrorKind;
use std::path::Path;

use log::debug;

use super::Dimension;
use crate::error::{LutError, Result};

/// Read the dimension schema stored in a LUT metadata file
///
/// Dimensions are returned in file order, which is the order the binary
/// payload is serialized in (first dimension varies slowest).
pub fn read_metadata(path: &Path) -> Result<Vec<Dimension>> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(LutError::MissingMetadataFile {
                path: path.to_path_buf(),
            })
        }
        Err(e) => return Err(LutError::io(path, e)),
    };

    let dims = parse_metadata(&text, path)?;
    debug!(
        "Read {} dimensions from {}: {:?}",
        dims.len(),
        path.display(),
        dims.iter().map(|d| d.name.as_str()).collect::<Vec<_>>()
    );
    Ok(dims)
}

/// Parse metadata text; `path` is only used in error reports
///
/// Each non-blank line not starting with `#` declares one dimension:
///
/// ```text
/// tau 0.0 0.25 0.5 1.0
/// vza[3] 0 30 60
/// ```
///
/// The optional `[n]` suffix on the name declares the number of coordinates.
pub fn parse_metadata(text: &str, path: &Path) -> Result<Vec<Dimension>> {
    let malformed = |line: usize, reason: String| LutError::MalformedMetadata {
        path: path.to_path_buf(),
        line,
        reason,
    };

    let mut dims: Vec<Dimension> = Vec::new();
    let mut seen = HashSet::new();

    for (idx, raw) in text.lines().enumerate() {
        let line_no = idx + 1;
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut tokens = line.split_whitespace();
        let head = tokens.next().unwrap_or_default();
        let (name, declared) = split_declared_size(head).map_err(|r| malformed(line_no, r))?;
        if name.is_empty() {
            return Err(malformed(line_no, "empty dimension name".to_string()));
        }

        let coords = tokens
            .map(|tok| {
                tok.parse::<f64>()
                    .ok()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| {
                        malformed(
                            line_no,
                            format!("coordinate '{tok}' of '{name}' is not a number"),
                        )
                    })
            })
            .collect::<Result<Vec<f64>>>()?;

        if coords.is_empty() {
            return Err(malformed(line_no, format!("dimension '{name}' has no coordinates")));
        }
        if let Some(size) = declared {
            if size != coords.len() {
                return Err(malformed(
                    line_no,
                    format!(
                        "dimension '{name}' declares {size} values but lists {}",
                        coords.len()
                    ),
                ));
            }
        }
        if !seen.insert(name.to_string()) {
            return Err(malformed(line_no, format!("dimension '{name}' declared twice")));
        }

        dims.push(Dimension::new(name, coords));
    }

    if dims.is_empty() {
        return Err(malformed(0, "no dimensions declared".to_string()));
    }
    Ok(dims)
}

/// Split `name[n]` into `("name", Some(n))`; a bare name has no size
fn split_declared_size(head: &str) -> std::result::Result<(&str, Option<usize>), String> {
    let Some(open) = head.find('[') else {
        return Ok((head, None));
    };
    let inner = head[open + 1..]
        .strip_suffix(']')
        .ok_or_else(|| format!("unterminated size in '{head}'"))?;
    let size = inner
        .parse::<usize>()
        .map_err(|_| format!("size '{inner}' is not an unsigned integer"))?;
    Ok((&head[..open], Some(size)))
}
