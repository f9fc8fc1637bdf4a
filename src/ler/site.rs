use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// One local atomic environment: row `row` of structure `aid`'s descriptor matrix.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Site {
    pub aid: Aid,
    pub row: usize,
}

impl Site {
    pub fn new(aid: Aid, row: usize) -> Self {
        Self { aid, row }
    }
}

impl std::fmt::Display for Site {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.aid, self.row)
    }
}

/// Identity of a cluster center: either the perfect-crystal seed or the
/// environment that founded the cluster.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum CenterId {
    Seed,
    Site(Site),
}

impl From<Site> for CenterId {
    fn from(site: Site) -> Self {
        Self::Site(site)
    }
}

impl std::fmt::Display for CenterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Seed => write!(f, "({}, 0)", SEED_SENTINEL),
            Self::Site(site) => write!(f, "{}", site),
        }
    }
}
