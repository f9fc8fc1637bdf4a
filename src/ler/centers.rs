use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Representative local environments, in insertion order.
///
/// Order is part of the contract: position `i` here is item `i` of the
/// nearest neighbor graph, and earlier centers win when an environment
/// falls inside several basins.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Centers(Vec<(CenterId, Vec<Feature>)>);

impl Centers {
    /// A center set holding only the perfect-crystal seed.
    pub fn seeded(seed: Vec<Feature>) -> Self {
        Self(vec![(CenterId::Seed, seed)])
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    pub fn dim(&self) -> usize {
        self.0.first().map(|(_, x)| x.len()).unwrap_or(0)
    }
    pub fn id(&self, i: usize) -> Option<&CenterId> {
        self.0.get(i).map(|(id, _)| id)
    }
    pub fn ids(&self) -> impl Iterator<Item = &CenterId> {
        self.0.iter().map(|(id, _)| id)
    }
    pub fn vectors(&self) -> impl Iterator<Item = &[Feature]> {
        self.0.iter().map(|(_, x)| x.as_slice())
    }
    pub fn position(&self, id: &CenterId) -> Option<usize> {
        self.ids().position(|x| x == id)
    }

    /// The first center, in insertion order, strictly closer than `eps`.
    /// Not necessarily the nearest one.
    pub fn basin(&self, x: &[Feature], eps: Distance) -> Option<usize> {
        self.vectors()
            .position(|c| Metric::Euclidean.distance(c, x) < eps)
    }

    /// Found a new center at `site` unless `x` already lies in some basin.
    /// Returns whether a center was added.
    pub fn witness(&mut self, site: Site, x: &[Feature], eps: Distance) -> Result<bool> {
        if x.len() != self.dim() {
            return Err(Error::dimension_mismatch(self.dim(), x.len()));
        }
        match self.basin(x, eps) {
            Some(_) => Ok(false),
            None => {
                self.0.push((CenterId::from(site), x.to_vec()));
                Ok(true)
            }
        }
    }

    /// Greedy online clustering. Each environment, in traversal order,
    /// either falls in an existing basin or founds a new center. Centers
    /// never move or merge, so the result depends on traversal order.
    pub fn grow(seed: Vec<Feature>, environments: &Environments, eps: Distance) -> Result<Self> {
        let mut centers = Self::seeded(seed);
        for (site, x) in environments.iter() {
            centers.witness(site, x, eps)?;
        }
        log::info!(
            "clustered {} environments into {} centers (eps = {})",
            environments.n(),
            centers.len(),
            eps
        );
        Ok(centers)
    }

    /// Nearest neighbor graph over the center vectors, item `i` being center `i`.
    pub fn graph(&self, metric: Metric, n_trees: usize) -> Result<Graph> {
        let mut graph = Graph::new(self.dim(), metric, self.len(), n_trees)?;
        for x in self.vectors() {
            graph.insert(x)?;
        }
        Ok(graph)
    }
}
