use crate::*;
use rayon::prelude::*;
use serde::Deserialize;
use serde::Serialize;

/// Cluster membership, one entry per center that attracted at least one
/// environment.
///
/// Clusters appear in the order they first received an environment, and
/// within a cluster sites keep traversal order. Every environment of the
/// collection appears in exactly one cluster.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Assignment(Vec<(CenterId, Vec<Site>)>);

impl Assignment {
    /// Classify every environment to its approximate nearest center.
    ///
    /// Queries run in parallel against the fixed graph; memberships are
    /// then appended sequentially in traversal order, so the outcome is the
    /// same as a sequential pass.
    pub fn classify(
        centers: &Centers,
        graph: &Graph,
        environments: &Environments,
        search_k: Option<usize>,
    ) -> Result<Self> {
        let sites = environments.iter().collect::<Vec<_>>();
        let nearest = sites
            .par_iter()
            .map(|(site, x)| {
                graph
                    .nearest(x, 1, search_k)?
                    .first()
                    .copied()
                    .ok_or_else(|| {
                        Error::invalid_parameter(format!("no center found for {}", site))
                    })
            })
            .collect::<Result<Vec<usize>>>()?;
        let mut slots = vec![None; centers.len()];
        let mut clusters = Vec::<(CenterId, Vec<Site>)>::new();
        for ((site, _), i) in sites.into_iter().zip(nearest) {
            let slot = match slots[i] {
                Some(slot) => slot,
                None => {
                    let id = centers.id(i).cloned().ok_or_else(|| {
                        Error::invalid_parameter(format!("graph returned unknown center {}", i))
                    })?;
                    clusters.push((id, Vec::new()));
                    slots[i] = Some(clusters.len() - 1);
                    clusters.len() - 1
                }
            };
            clusters[slot].1.push(site);
        }
        slots
            .iter()
            .enumerate()
            .filter(|(_, slot)| slot.is_none())
            .filter_map(|(i, _)| centers.id(i))
            .for_each(|id| log::warn!("center {} attracted no environments", id));
        Ok(Self(clusters))
    }

    /// number of non-empty clusters
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// the center of the `i`th cluster
    pub fn center(&self, i: usize) -> Option<&CenterId> {
        self.0.get(i).map(|(id, _)| id)
    }
    pub fn members(&self, i: usize) -> &[Site] {
        self.0.get(i).map(|(_, m)| m.as_slice()).unwrap_or_default()
    }
    pub fn clusters(&self) -> impl Iterator<Item = &[Site]> {
        self.0.iter().map(|(_, m)| m.as_slice())
    }
    /// How many of `aid`'s environments each cluster holds.
    pub fn counts(&self, aid: &Aid) -> Vec<usize> {
        self.0
            .iter()
            .map(|(_, members)| members.iter().filter(|s| &s.aid == aid).count())
            .collect()
    }
}

impl From<Vec<(CenterId, Vec<Site>)>> for Assignment {
    fn from(clusters: Vec<(CenterId, Vec<Site>)>) -> Self {
        Self(clusters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn site(aid: &str, row: usize) -> Site {
        Site::new(Aid::from(aid), row)
    }

    #[test]
    fn clusters_follow_first_classification() {
        let mut centers = Centers::seeded(vec![100., 100.]);
        centers.witness(site("a", 0), &[0., 0.], 1.).unwrap();
        centers.witness(site("a", 1), &[10., 0.], 1.).unwrap();
        let environments = Environments::from(vec![
            (Aid::from("a"), DescriptorMatrix::new(vec![vec![10., 0.], vec![0., 0.]]).unwrap()),
            (Aid::from("b"), DescriptorMatrix::new(vec![vec![9.5, 0.]]).unwrap()),
        ]);
        let graph = centers.graph(Metric::Euclidean, 4).unwrap();
        let assignment = Assignment::classify(&centers, &graph, &environments, None).unwrap();
        assert_eq!(assignment.len(), 2);
        assert_eq!(assignment.center(0), Some(&CenterId::Site(site("a", 1))));
        assert_eq!(assignment.members(0), &[site("a", 0), site("b", 0)]);
        assert_eq!(assignment.center(1), Some(&CenterId::Site(site("a", 0))));
        assert_eq!(assignment.members(1), &[site("a", 1)]);
        assert_eq!(assignment.counts(&Aid::from("b")), vec![1, 0]);
    }
}
