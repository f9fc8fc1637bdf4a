use crate::*;
use hnsw_rs::hnsw::Hnsw;
use hnsw_rs::prelude::Neighbour;

/// Approximate nearest neighbor index over a fixed set of vectors.
///
/// Items are inserted into a hierarchical navigable small world graph.
/// Queries walk the graph for `search_k` candidates and rank those
/// candidates by exact distance, so results never depend on the graph's
/// single precision arithmetic.
pub struct Graph {
    dim: usize,
    metric: Metric,
    connections: usize,
    items: Vec<Vec<Feature>>,
    hnsw: Hnsw<'static, Feature, Metric>,
}

impl Graph {
    /// An empty graph sized for `capacity` items. Each node keeps at most
    /// `connections` links per layer.
    pub fn new(dim: usize, metric: Metric, capacity: usize, connections: usize) -> Result<Self> {
        if connections == 0 {
            return Err(Error::invalid_parameter("graph needs at least one connection per node"));
        }
        let hnsw = Hnsw::<Feature, Metric>::new(
            connections.clamp(2, ANN_MAX_CONNECTIONS),
            capacity.max(1),
            ANN_MAX_LAYER,
            ANN_EF_CONSTRUCTION,
            metric,
        );
        Ok(Self {
            dim,
            metric,
            connections,
            items: Vec::with_capacity(capacity),
            hnsw,
        })
    }

    /// Insert the next item. Its id is its insertion position.
    pub fn insert(&mut self, vector: &[Feature]) -> Result<usize> {
        if vector.len() != self.dim {
            return Err(Error::dimension_mismatch(self.dim, vector.len()));
        }
        let id = self.items.len();
        self.hnsw.insert_slice((vector, id));
        self.items.push(vector.to_vec());
        Ok(id)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// The `k` nearest item ids to `vector`, nearest first, ties by id.
    /// `search_k` is the candidate budget of the graph walk; `None` uses
    /// `connections * k`.
    pub fn nearest(&self, vector: &[Feature], k: usize, search_k: Option<usize>) -> Result<Vec<usize>> {
        if vector.len() != self.dim {
            return Err(Error::dimension_mismatch(self.dim, vector.len()));
        }
        if self.is_empty() || k == 0 {
            return Ok(Vec::new());
        }
        let budget = search_k
            .unwrap_or(self.connections.saturating_mul(k))
            .max(k)
            .min(self.len());
        let mut ranked = self
            .hnsw
            .search(vector, budget, budget)
            .into_iter()
            .map(|Neighbour { d_id, .. }| d_id)
            .filter_map(|i| self.items.get(i).map(|x| (i, self.metric.distance(x, vector))))
            .collect::<Vec<_>>();
        ranked.sort_by(|(i, a), (j, b)| a.total_cmp(b).then(i.cmp(j)));
        ranked.dedup_by_key(|(i, _)| *i);
        Ok(ranked.into_iter().take(k).map(|(i, _)| i).collect())
    }
}

impl std::fmt::Debug for Graph {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("dim", &self.dim)
            .field("metric", &self.metric)
            .field("len", &self.len())
            .finish()
    }
}
