use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Clustering of one collection under one parameter set.
///
/// Computed once and cached; never updated in place. The graph used to
/// classify is not kept, since it is rebuilt from the centers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LerResult {
    pub centers: Centers,
    pub clusters: Assignment,
}

impl LerResult {
    pub fn n(&self) -> usize {
        self.centers.len()
    }

    /// Fraction of `aid`'s environments that fall in each non-empty cluster,
    /// in order of first classification. Fails with [`Error::DegenerateNormalization`] when `aid`
    /// contributed no environments to this clustering.
    pub fn histogram(&self, aid: &Aid) -> Result<Vec<Probability>> {
        let counts = self.clusters.counts(aid);
        let total = counts.iter().sum::<usize>();
        if total == 0 {
            return Err(Error::degenerate(format!(
                "structure {} has no environments in this clustering",
                aid
            )));
        }
        Ok(counts
            .into_iter()
            .map(|n| n as Probability / total as Probability)
            .collect())
    }
}
