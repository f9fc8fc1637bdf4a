use crate::*;

/// Every local environment of a collection, in traversal order:
/// structures in collection order, then rows in atom order.
#[derive(Debug, Clone, Default)]
pub struct Environments(Vec<(Aid, DescriptorMatrix)>);

impl Environments {
    /// Load each member's cached descriptor matrix. Descriptors are a hard
    /// prerequisite: a member without one fails the whole fetch.
    pub fn fetch<S>(collection: &Collection, store: &S, kind: &str, params: &Params) -> Result<Self>
    where
        S: Store,
    {
        collection
            .aids()
            .map(|aid| {
                store
                    .get::<DescriptorMatrix>(kind, aid.as_str(), params)?
                    .map(|matrix| (aid.clone(), matrix))
                    .ok_or_else(|| Error::missing_descriptor(kind, aid))
            })
            .collect::<Result<Vec<_>>>()
            .map(Self)
    }
    /// (site, descriptor row) pairs in traversal order
    pub fn iter(&self) -> impl Iterator<Item = (Site, &[Feature])> {
        self.0.iter().flat_map(|(aid, matrix)| {
            matrix
                .rows()
                .enumerate()
                .map(move |(row, x)| (Site::new(aid.clone(), row), x))
        })
    }
    /// total number of environments
    pub fn n(&self) -> usize {
        self.0.iter().map(|(_, m)| m.n()).sum()
    }
}

impl From<Vec<(Aid, DescriptorMatrix)>> for Environments {
    fn from(matrices: Vec<(Aid, DescriptorMatrix)>) -> Self {
        Self(matrices)
    }
}
