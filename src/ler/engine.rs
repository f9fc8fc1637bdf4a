use crate::*;

/// Local environment representation.
///
/// Clusters every local environment of a collection into a small set of
/// unique environment types, then describes each structure by the
/// distribution of its own environments over those types.
///
/// The clustering is shared by the whole collection and cached in the
/// [`Store`] under [`LER_CACHE_KIND`]/[`LER_CACHE_KEY`], keyed by every
/// parameter that can change it. Only a cache miss recomputes it.
#[derive(Debug, Clone)]
pub struct Ler {
    eps: Distance,
    kind: String,
    seed: Option<Vec<Feature>>,
    seeds: SeedGenerator,
    metric: Metric,
    n_trees: usize,
    search_k: Option<usize>,
}

impl Ler {
    /// Environments closer than `eps` to an existing center join its basin.
    pub fn new(eps: Distance) -> Self {
        Self {
            eps,
            kind: DEFAULT_DESCRIPTOR.to_string(),
            seed: None,
            seeds: SeedGenerator::default(),
            metric: Metric::default(),
            n_trees: LER_N_TREES,
            search_k: None,
        }
    }
    /// cluster the descriptor matrices cached under this store kind
    pub fn with_kind(self, kind: &str) -> Self {
        Self {
            kind: kind.to_string(),
            ..self
        }
    }
    /// Use this vector as center 0 instead of deriving one from the
    /// collection's element.
    pub fn with_seed(self, seed: Vec<Feature>) -> Self {
        Self {
            seed: Some(seed),
            ..self
        }
    }
    pub fn with_seeds(self, seeds: SeedGenerator) -> Self {
        Self { seeds, ..self }
    }
    pub fn with_metric(self, metric: Metric) -> Self {
        Self { metric, ..self }
    }
    /// Links per node of the classification graph, and the per-neighbor
    /// candidate budget when `search_k` is `None`.
    pub fn with_n_trees(self, n_trees: usize) -> Self {
        Self { n_trees, ..self }
    }
    /// Candidate budget per query; `None` inspects `n_trees` candidates per neighbor.
    pub fn with_search_k(self, search_k: Option<usize>) -> Self {
        Self { search_k, ..self }
    }
    pub fn eps(&self) -> Distance {
        self.eps
    }

    fn validate(&self) -> Result<()> {
        if !(self.eps >= 0.) {
            return Err(Error::invalid_parameter(format!("eps must be non-negative, got {}", self.eps)));
        }
        if self.n_trees == 0 {
            return Err(Error::invalid_parameter("n_trees must be at least 1"));
        }
        if self.search_k == Some(0) {
            return Err(Error::invalid_parameter("search_k must be positive"));
        }
        Ok(())
    }

    /// Everything the clustering depends on. The seed vector is included
    /// as resolved, so a different element table or explicit seed never
    /// shares an entry. The describer's own parameters are flattened in as
    /// well, since they select the cached matrices.
    pub fn params<D>(&self, collection: &Collection, describer: &D, seed: &[Feature]) -> Params
    where
        D: Describe,
    {
        Params::new()
            .with("collection", collection.identity())
            .with("eps", self.eps)
            .with("res_needed", self.kind.as_str())
            .with("seed_fn", describer.identity())
            .with("seed", seed)
            .with("metric", self.metric.to_string())
            .with("n_trees", self.n_trees)
            .with("search_k", self.search_k.map(|k| k as i64).unwrap_or(-1))
            .merge(&describer.params())
    }

    /// The seed center: the explicit one if given, otherwise the perfect
    /// crystal of the first atom of the first structure.
    pub fn seed<D>(&self, collection: &Collection, describer: &D) -> Result<Vec<Feature>>
    where
        D: Describe,
    {
        if let Some(ref seed) = self.seed {
            return Ok(seed.clone());
        }
        let element = collection
            .iter()
            .next()
            .and_then(|s| s.symbols().first().copied())
            .ok_or_else(|| {
                Error::invalid_parameter(format!(
                    "collection {} has no atoms to seed from",
                    collection.name()
                ))
            })?;
        log::debug!("seeding from perfect {}", element);
        self.seeds.seed(element, describer)
    }

    /// Run the clustering and classification passes, without touching the cache.
    pub fn compute<D, S>(&self, collection: &Collection, store: &S, describer: &D) -> Result<LerResult>
    where
        D: Describe,
        S: Store,
    {
        self.validate()?;
        let seed = self.seed(collection, describer)?;
        self.cluster(collection, store, describer, seed)
    }

    fn cluster<D, S>(
        &self,
        collection: &Collection,
        store: &S,
        describer: &D,
        seed: Vec<Feature>,
    ) -> Result<LerResult>
    where
        D: Describe,
        S: Store,
    {
        let ref environments = Environments::fetch(collection, store, &self.kind, &describer.params())?;
        let centers = Centers::grow(seed, environments, self.eps)?;
        let ref graph = centers.graph(self.metric, self.n_trees)?;
        let clusters = Assignment::classify(&centers, graph, environments, self.search_k)?;
        log::info!(
            "classified {} environments of {} into {} clusters",
            environments.n(),
            collection.name(),
            clusters.len()
        );
        Ok(LerResult { centers, clusters })
    }

    /// The collection's clustering, from cache when possible. A freshly
    /// computed result is stored once, after it is complete.
    pub fn result<D, S>(&self, collection: &Collection, store: &mut S, describer: &D) -> Result<LerResult>
    where
        D: Describe,
        S: Store,
    {
        self.validate()?;
        let seed = self.seed(collection, describer)?;
        let ref params = self.params(collection, describer, &seed);
        if let Some(cached) = store.get::<LerResult>(LER_CACHE_KIND, LER_CACHE_KEY, params)? {
            log::info!("ler cache hit for {}", collection.name());
            return Ok(cached);
        }
        log::info!("ler cache miss for {}, clustering", collection.name());
        let result = self.cluster(collection, store, describer, seed)?;
        store.store(&result, LER_CACHE_KIND, LER_CACHE_KEY, params)?;
        Ok(result)
    }

    /// LER histogram of one structure of `collection`.
    pub fn describe<D, S>(
        &self,
        structure: &Structure,
        collection: &Collection,
        store: &mut S,
        describer: &D,
    ) -> Result<Vec<Probability>>
    where
        D: Describe,
        S: Store,
    {
        self.result(collection, store, describer)?
            .histogram(structure.aid())
    }
}
