//! Core types passed across the model boundary.
//!
//! Every prediction starts from a [`Frame`] (one column, one value), goes
//! through an encoder to an opaque [`Encoded`] index, and ends as an
//! [`OutputRow`] whose shape is tagged instead of probed.

use serde::{Deserialize, Serialize};

// =============================================================================
// Column Names
// =============================================================================

/// Column names the deployed artifacts were fitted on.
///
/// These are part of the contract with the trained bundle: an encoder
/// rejects a frame whose column doesn't match its own.
pub mod columns {
    /// Input column for the hero encoder
    pub const HERO_NAME: &str = "hero_name";
    /// Input column for the genre encoder
    pub const GENRES: &str = "genres";
    /// Input column for the title encoder
    pub const TITLE: &str = "title_x";
}

// =============================================================================
// Frame
// =============================================================================

/// A single-row, single-column input table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    column: String,
    value: String,
}

impl Frame {
    /// Build a frame holding one value under the given column
    pub fn single(column: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            value: value.into(),
        }
    }

    pub fn column(&self) -> &str {
        &self.column
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

// =============================================================================
// Encoded
// =============================================================================

/// Opaque output of `Encoder::transform`, consumed by `Predictor::predict`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Encoded(pub(crate) usize);

impl Encoded {
    /// Dense index into a predictor's output table
    pub fn index(&self) -> usize {
        self.0
    }
}

// =============================================================================
// OutputRow
// =============================================================================

/// One row of a predictor's output table.
///
/// The deployed artifacts emit three shapes: a text label (a movie title or
/// an actor name), a single scalar (runtime minutes), or a triple of scalars
/// (financial figures). The shape is resolved here, once; callers match on
/// the adapters instead of probing the value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum OutputRow {
    Text(String),
    Scalar(f64),
    Triple(f64, f64, f64),
}

impl OutputRow {
    /// The row as a text label, if it is one
    pub fn as_text(&self) -> Option<&str> {
        match self {
            OutputRow::Text(s) => Some(s),
            _ => None,
        }
    }

    /// The row as a single float: a scalar directly, or a text row that
    /// parses as one. A triple has no single value and yields `None`.
    pub fn as_scalar(&self) -> Option<f64> {
        match self {
            OutputRow::Scalar(v) => Some(*v),
            OutputRow::Text(s) => s.trim().parse().ok(),
            OutputRow::Triple(..) => None,
        }
    }

    /// The row's three positional values, if it is a triple
    pub fn as_triple(&self) -> Option<(f64, f64, f64)> {
        match self {
            OutputRow::Triple(a, b, c) => Some((*a, *b, *c)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_single() {
        let frame = Frame::single(columns::HERO_NAME, "Iron Man");
        assert_eq!(frame.column(), "hero_name");
        assert_eq!(frame.value(), "Iron Man");
    }

    #[test]
    fn test_as_text_only_for_text_rows() {
        assert_eq!(
            OutputRow::Text("The Avengers".to_string()).as_text(),
            Some("The Avengers")
        );
        assert_eq!(OutputRow::Scalar(120.0).as_text(), None);
        assert_eq!(OutputRow::Triple(1.0, 2.0, 3.0).as_text(), None);
    }

    #[test]
    fn test_as_scalar_coerces_numeric_text() {
        assert_eq!(OutputRow::Scalar(132.5).as_scalar(), Some(132.5));
        assert_eq!(
            OutputRow::Text(" 98.0 ".to_string()).as_scalar(),
            Some(98.0)
        );
        assert_eq!(
            OutputRow::Text("not a number".to_string()).as_scalar(),
            None
        );
        assert_eq!(OutputRow::Triple(1.0, 2.0, 3.0).as_scalar(), None);
    }

    #[test]
    fn test_as_triple_only_for_triples() {
        assert_eq!(
            OutputRow::Triple(1000.0, 2000.0, 350.0).as_triple(),
            Some((1000.0, 2000.0, 350.0))
        );
        assert_eq!(OutputRow::Scalar(1.0).as_triple(), None);
        assert_eq!(OutputRow::Text("x".to_string()).as_triple(), None);
    }
}
