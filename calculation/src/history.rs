//! The calculations of one session.

use crate::Calculation;
use std::slice;

/// Successfully executed calculations in execution order.
///
/// The history is append-only and lives as long as its session.
#[derive(Debug, Default)]
pub struct History {
    calculations: Vec<Box<dyn Calculation>>,
}

impl History {
    /// Create an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a calculation.
    pub fn push(&mut self, calculation: Box<dyn Calculation>) {
        self.calculations.push(calculation);
    }

    /// The number of recorded calculations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.calculations.len()
    }

    /// Check whether nothing was recorded yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.calculations.is_empty()
    }

    /// Iterate over the recorded calculations, oldest first.
    pub fn iter(&self) -> slice::Iter<'_, Box<dyn Calculation>> {
        self.calculations.iter()
    }

    /// Render every entry as `"<n>. <calculation>"`, numbered from 1.
    ///
    /// Entries that fail to render are shown with their error instead.
    #[must_use]
    pub fn render_lines(&self) -> Vec<String> {
        self.iter()
            .enumerate()
            .map(|(index, calculation)| match calculation.render() {
                Ok(rendered) => format!("{}. {}", index + 1, rendered),
                Err(err) => format!("{}. {:?}: {}", index + 1, calculation, err),
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a History {
    type Item = &'a Box<dyn Calculation>;
    type IntoIter = slice::Iter<'a, Box<dyn Calculation>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
