//! Sparse numeric feature representation produced by vectorizers

use crate::domain::DomainError;

/// A single row of features with only the non-zero columns stored.
///
/// Entries are kept sorted by column and every column is below `dim`.
#[derive(Debug, Clone, PartialEq)]
pub struct SparseVector {
    dim: usize,
    entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// An all-zero vector of the given dimension
    pub fn zeros(dim: usize) -> Self {
        Self {
            dim,
            entries: Vec::new(),
        }
    }

    /// Build a vector from `(column, value)` pairs.
    ///
    /// Duplicate columns are summed and explicit zeros are dropped.
    pub fn from_entries(
        dim: usize,
        mut entries: Vec<(usize, f64)>,
    ) -> Result<Self, DomainError> {
        if let Some((column, _)) = entries.iter().find(|(column, _)| *column >= dim) {
            return Err(DomainError::vectorizer(format!(
                "column {} out of range for dimension {}",
                column, dim
            )));
        }

        entries.sort_by_key(|(column, _)| *column);

        let mut merged: Vec<(usize, f64)> = Vec::with_capacity(entries.len());

        for (column, value) in entries {
            match merged.last_mut() {
                Some((last, acc)) if *last == column => *acc += value,
                _ => merged.push((column, value)),
            }
        }

        merged.retain(|(_, value)| *value != 0.0);

        Ok(Self {
            dim,
            entries: merged,
        })
    }

    pub fn dim(&self) -> usize {
        self.dim
    }

    pub fn nnz(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, f64)> + '_ {
        self.entries.iter().copied()
    }

    /// Dot product against a dense row of weights
    pub fn dot(&self, weights: &[f64]) -> Result<f64, DomainError> {
        if weights.len() != self.dim {
            return Err(DomainError::classifier(format!(
                "feature dimension mismatch: expected {}, got {}",
                weights.len(),
                self.dim
            )));
        }

        Ok(self
            .entries
            .iter()
            .map(|(column, value)| weights[*column] * value)
            .sum())
    }

    /// Scale every entry in place
    pub fn scale(&mut self, factor: f64) {
        for (_, value) in &mut self.entries {
            *value *= factor;
        }
    }

    /// Apply `f` to every stored entry in place
    pub fn map_values(&mut self, mut f: impl FnMut(usize, f64) -> f64) {
        for (column, value) in &mut self.entries {
            *value = f(*column, *value);
        }
    }

    pub fn l1_norm(&self) -> f64 {
        self.entries.iter().map(|(_, value)| value.abs()).sum()
    }

    pub fn l2_norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|(_, value)| value * value)
            .sum::<f64>()
            .sqrt()
    }
}
