use super::LabeledArray;

/// Result of a label or positional selection
#[derive(Debug, Clone, PartialEq)]
pub enum Selection {
    /// Some dimensions remain
    Array(LabeledArray),
    /// Every dimension was pinned
    Scalar(f64),
}

impl Selection {
    /// The scalar, if every dimension was pinned
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            Selection::Scalar(v) => Some(*v),
            Selection::Array(_) => None,
        }
    }

    /// The reduced array, if any dimension remains
    pub fn as_array(&self) -> Option<&LabeledArray> {
        match self {
            Selection::Array(a) => Some(a),
            Selection::Scalar(_) => None,
        }
    }

    /// Take the reduced array
    pub fn into_array(self) -> Option<LabeledArray> {
        match self {
            Selection::Array(a) => Some(a),
            Selection::Scalar(_) => None,
        }
    }
}
