//! Derives the N-dimensional shape of the table set from table-level
//! conditions.

use crate::types::ConditionBlock;

/// Shape of the multi-dimensional table array.
///
/// One axis per table-condition name; the axis length is that condition's
/// value count. A block with no names is zero-dimensional and yields exactly
/// one grid with an empty coordinate.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridShape {
    dims: Vec<usize>,
}

impl GridShape {
    /// Derive the shape from the table-condition block.
    #[must_use]
    pub fn from_block(block: &ConditionBlock) -> Self {
        Self {
            dims: block.values.iter().map(Vec::len).collect(),
        }
    }

    /// Number of axes. Zero when there are no table conditions.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.dims.len()
    }

    /// Axis lengths, one per table condition.
    #[must_use]
    pub fn dims(&self) -> &[usize] {
        &self.dims
    }

    /// Total number of grids: the product of the axis lengths (1 for a
    /// zero-dimensional shape).
    #[must_use]
    pub fn total_grids(&self) -> usize {
        self.dims.iter().product()
    }

    /// Enumerate coordinates in row-major order (last axis fastest).
    ///
    /// A zero-dimensional shape yields a single empty coordinate. A shape
    /// with any zero-length axis yields nothing.
    #[must_use]
    pub fn coordinates(&self) -> Coordinates {
        let next = if self.dims.contains(&0) {
            None
        } else {
            Some(vec![0; self.dims.len()])
        };
        Coordinates {
            dims: self.dims.clone(),
            next,
        }
    }
}

/// Row-major coordinate iterator over a [`GridShape`].
#[derive(Debug)]
pub struct Coordinates {
    dims: Vec<usize>,
    next: Option<Vec<usize>>,
}

impl Iterator for Coordinates {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        // Compute the successor: increment the last axis, carrying leftward.
        let mut succ = current.clone();
        let mut axis = succ.len();
        loop {
            if axis == 0 {
                break;
            }
            axis -= 1;
            let Some(idx) = succ.get_mut(axis) else { break };
            let Some(&dim) = self.dims.get(axis) else { break };
            *idx += 1;
            if *idx < dim {
                self.next = Some(succ);
                break;
            }
            *idx = 0;
        }

        Some(current)
    }
}
