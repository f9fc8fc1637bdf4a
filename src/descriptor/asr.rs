use crate::*;

/// Average structural representation: the mean of a structure's per-atom
/// descriptor rows, optionally scaled to unit length.
#[derive(Debug, Clone, PartialEq)]
pub struct Asr {
    kind: String,
    normalize: bool,
}

impl Default for Asr {
    fn default() -> Self {
        Self {
            kind: DEFAULT_DESCRIPTOR.to_string(),
            normalize: false,
        }
    }
}

impl Asr {
    /// average the matrices cached under this store kind
    pub fn with_kind(self, kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ..self
        }
    }
    pub fn with_normalize(self, normalize: bool) -> Self {
        Self { normalize, ..self }
    }

    /// Reduce the cached descriptor matrix of `structure` to one vector.
    ///
    /// Returns `Ok(None)` when no matrix is cached yet under
    /// `(kind, aid, params)`; describe the structure first. A zero mean
    /// cannot be normalized and yields [`Error::DegenerateNormalization`].
    pub fn reduce<S: Store>(
        &self,
        structure: &Structure,
        store: &S,
        params: &Params,
    ) -> Result<Option<Vec<Feature>>> {
        let matrix = match store.get::<DescriptorMatrix>(&self.kind, structure.aid().as_str(), params)? {
            Some(matrix) => matrix,
            None => return Ok(None),
        };
        let mean = matrix.mean().ok_or_else(|| {
            Error::degenerate(format!("structure {} has no atoms to average", structure.aid()))
        })?;
        if !self.normalize {
            return Ok(Some(mean));
        }
        let magnitude = mean.iter().map(|x| x * x).sum::<Feature>().sqrt();
        if magnitude == 0. {
            return Err(Error::degenerate(format!(
                "mean {} descriptor of {} is the zero vector",
                self.kind,
                structure.aid()
            )));
        }
        Ok(Some(mean.into_iter().map(|x| x / magnitude).collect()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixture() -> (Structure, MemoryStore, Params) {
        let structure = Structure::new(
            "quad",
            vec![28; 4],
            vec![[0.; 3], [1., 0., 0.], [0., 1., 0.], [0., 0., 1.]],
            UnitCell::default(),
        )
        .unwrap();
        let matrix = DescriptorMatrix::new(vec![
            vec![1., 2., 3.],
            vec![3., 2., 1.],
            vec![0., 4., 2.],
            vec![4., 0., 2.],
        ])
        .unwrap();
        let params = Params::new().with("rcut", 5.0);
        let mut store = MemoryStore::default();
        store.store(&matrix, "soap", "quad", &params).unwrap();
        (structure, store, params)
    }

    #[test]
    fn mean_of_known_matrix() {
        let (s, store, params) = fixture();
        let asr = Asr::default().reduce(&s, &store, &params).unwrap();
        assert_eq!(asr, Some(vec![2., 2., 2.]));
    }

    #[test]
    fn normalized_mean_has_unit_length() {
        let (s, store, params) = fixture();
        let asr = Asr::default()
            .with_normalize(true)
            .reduce(&s, &store, &params)
            .unwrap()
            .unwrap();
        let expected = 1. / 3f64.sqrt();
        assert!(asr.iter().all(|x| (x - expected).abs() < 1e-12));
        let length = asr.iter().map(|x| x * x).sum::<f64>().sqrt();
        assert!((length - 1.).abs() < 1e-12);
    }

    #[test]
    fn uncached_structure_is_none() {
        let (s, store, _) = fixture();
        let other = Params::new().with("rcut", 6.0);
        assert_eq!(Asr::default().reduce(&s, &store, &other).unwrap(), None);
        let other_kind = Asr::default().with_kind("acsf");
        assert_eq!(other_kind.reduce(&s, &store, &Params::new().with("rcut", 5.0)).unwrap(), None);
    }

    #[test]
    fn zero_mean_cannot_be_normalized() {
        let s = Structure::new("zero", vec![28], vec![[0.; 3]], UnitCell::default()).unwrap();
        let mut store = MemoryStore::default();
        let matrix = DescriptorMatrix::new(vec![vec![0., 0.]]).unwrap();
        store.store(&matrix, "soap", "zero", &Params::new()).unwrap();
        let result = Asr::default()
            .with_normalize(true)
            .reduce(&s, &store, &Params::new());
        assert!(matches!(result, Err(Error::DegenerateNormalization { .. })));
    }
}
