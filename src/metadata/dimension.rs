use std::fmt;

/// One named axis of a lookup table and its coordinate labels
#[derive(Debug, Clone, PartialEq)]
pub struct Dimension {
    /// Dimension name, e.g. `tau` or `vza`
    pub name: String,
    /// Label of each position along the axis
    pub coords: Vec<f64>,
}

impl Dimension {
    /// Create a dimension from its name and coordinate vector
    pub fn new(name: impl Into<String>, coords: Vec<f64>) -> Self {
        Self {
            name: name.into(),
            coords,
        }
    }

    /// Number of positions along the axis
    pub fn len(&self) -> usize {
        self.coords.len()
    }

    /// Whether the axis has no positions
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Smallest and largest coordinate
    pub fn range(&self) -> Option<(f64, f64)> {
        if self.coords.is_empty() {
            return None;
        }
        let min = self.coords.iter().copied().fold(f64::INFINITY, f64::min);
        let max = self.coords.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.len())?;
        if let Some((min, max)) = self.range() {
            write!(f, ": {} .. {}", min, max)?;
        }
        Ok(())
    }
}

/// Sizes of `dims`, in order
pub fn shape_of(dims: &[Dimension]) -> Vec<usize> {
    dims.iter().map(Dimension::len).collect()
}
