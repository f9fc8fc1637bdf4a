use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Per-atom descriptor vectors for one structure, one row per atom in atom order.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DescriptorMatrix {
    dim: usize,
    rows: Vec<Vec<Feature>>,
}

impl DescriptorMatrix {
    /// Every row must have the same length.
    pub fn new(rows: Vec<Vec<Feature>>) -> Result<Self> {
        let dim = rows.first().map(Vec::len).unwrap_or(0);
        match rows.iter().find(|r| r.len() != dim) {
            Some(bad) => Err(Error::dimension_mismatch(dim, bad.len())),
            None => Ok(Self { dim, rows }),
        }
    }
    pub fn dim(&self) -> usize {
        self.dim
    }
    /// number of atoms
    pub fn n(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
    pub fn row(&self, i: usize) -> Option<&[Feature]> {
        self.rows.get(i).map(Vec::as_slice)
    }
    pub fn rows(&self) -> impl Iterator<Item = &[Feature]> {
        self.rows.iter().map(Vec::as_slice)
    }
    /// Column-wise arithmetic mean over all rows. None when there are no rows.
    pub fn mean(&self) -> Option<Vec<Feature>> {
        if self.rows.is_empty() {
            return None;
        }
        let n = self.rows.len() as Feature;
        Some(
            self.rows
                .iter()
                .fold(vec![0.; self.dim], |mut acc, row| {
                    acc.iter_mut().zip(row).for_each(|(a, x)| *a += x);
                    acc
                })
                .into_iter()
                .map(|sum| sum / n)
                .collect(),
        )
    }
}

impl From<DescriptorMatrix> for Vec<Vec<Feature>> {
    fn from(matrix: DescriptorMatrix) -> Self {
        matrix.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ragged_rows_are_rejected() {
        let result = DescriptorMatrix::new(vec![vec![1., 2.], vec![1.]]);
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                expected: 2,
                actual: 1
            })
        ));
    }

    #[test]
    fn mean_is_column_wise() {
        let m = DescriptorMatrix::new(vec![vec![1., 10.], vec![3., 20.]]).unwrap();
        assert_eq!(m.mean(), Some(vec![2., 15.]));
        assert_eq!(DescriptorMatrix::default().mean(), None);
    }
}
