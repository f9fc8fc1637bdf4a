use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// An ordered, named set of structures with unique aids.
///
/// Iteration order is insertion order, and it is the traversal order of
/// LER clustering: reordering a collection can change its clusters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Members")]
pub struct Collection {
    name: String,
    structures: Vec<Structure>,
}

/// Unchecked wire form; deserialization goes through [`Collection::push`].
#[derive(Deserialize)]
struct Members {
    name: String,
    structures: Vec<Structure>,
}

impl TryFrom<Members> for Collection {
    type Error = Error;
    fn try_from(members: Members) -> Result<Self> {
        Self::from_structures(&members.name, members.structures)
    }
}

impl Collection {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            structures: Vec::new(),
        }
    }
    /// A collection holding `structures` in order. Fails on a repeated aid.
    pub fn from_structures<I>(name: &str, structures: I) -> Result<Self>
    where
        I: IntoIterator<Item = Structure>,
    {
        let mut collection = Self::new(name);
        for structure in structures {
            collection.push(structure)?;
        }
        Ok(collection)
    }
    pub fn name(&self) -> &str {
        &self.name
    }
    pub fn push(&mut self, structure: Structure) -> Result<()> {
        if self.get(structure.aid()).is_some() {
            return Err(Error::invalid_parameter(format!(
                "collection {} already holds structure {}",
                self.name,
                structure.aid()
            )));
        }
        self.structures.push(structure);
        Ok(())
    }
    pub fn get(&self, aid: &Aid) -> Option<&Structure> {
        self.structures.iter().find(|s| s.aid() == aid)
    }
    pub fn iter(&self) -> impl Iterator<Item = &Structure> {
        self.structures.iter()
    }
    pub fn aids(&self) -> impl Iterator<Item = &Aid> {
        self.structures.iter().map(Structure::aid)
    }
    pub fn len(&self) -> usize {
        self.structures.len()
    }
    pub fn is_empty(&self) -> bool {
        self.structures.is_empty()
    }
    /// Name and ordered membership, for cache keys of results that
    /// depend on the whole collection.
    pub fn identity(&self) -> Params {
        Params::new().with("name", self.name.as_str()).with(
            "aids",
            self.aids().map(|a| a.as_str()).collect::<Vec<_>>(),
        )
    }

    /// Compute and cache a descriptor matrix for every member that does
    /// not have one yet under `(describer.kind(), aid, describer.params())`.
    /// Returns how many members were newly described.
    pub fn describe<D, S>(&self, describer: &D, store: &mut S) -> Result<usize>
    where
        D: Describe,
        S: Store,
    {
        let ref params = describer.params();
        let mut described = 0;
        for structure in self.iter() {
            let aid = structure.aid().as_str();
            if store.contains(describer.kind(), aid, params)? {
                log::debug!("{} {} already cached", describer.kind(), aid);
                continue;
            }
            let matrix = describer.describe(structure)?;
            store.store(&matrix, describer.kind(), aid, params)?;
            described += 1;
        }
        log::info!(
            "described {} of {} structures in {} ({})",
            described,
            self.len(),
            self.name,
            describer.kind()
        );
        Ok(described)
    }
}

impl<'a> IntoIterator for &'a Collection {
    type Item = &'a Structure;
    type IntoIter = std::slice::Iter<'a, Structure>;
    fn into_iter(self) -> Self::IntoIter {
        self.structures.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_aids_are_rejected() {
        let mut c = Collection::new("grains");
        c.push(Structure::random().relabel("a")).unwrap();
        let err = c.push(Structure::random().relabel("a"));
        assert!(matches!(err, Err(Error::InvalidParameter { .. })));
        assert_eq!(c.len(), 1);
    }

    #[test]
    fn repeated_aids_are_rejected_on_every_path() {
        let a = Structure::random().relabel("a");
        let twice = Collection::from_structures("grains", [a.clone(), a.clone()]);
        assert!(matches!(twice, Err(Error::InvalidParameter { .. })));
        let once = Collection::from_structures("grains", [a]).unwrap();
        let json = serde_json::to_value(&once).unwrap();
        let member = json["structures"][0].clone();
        let doubled = serde_json::json!({ "name": "grains", "structures": [member.clone(), member] });
        assert!(serde_json::from_value::<Collection>(doubled).is_err());
        assert_eq!(serde_json::from_value::<Collection>(json).unwrap(), once);
    }

    #[test]
    fn identity_tracks_order() {
        let a = Structure::random().relabel("a");
        let b = Structure::random().relabel("b");
        let ab = Collection::from_structures("grains", [a.clone(), b.clone()]).unwrap();
        let ba = Collection::from_structures("grains", [b, a]).unwrap();
        assert_ne!(ab.identity().key(), ba.identity().key());
        assert_eq!(ab.identity().key(), ab.clone().identity().key());
    }

    #[test]
    fn describe_skips_cached_members() {
        let c = Collection::from_structures(
            "grains",
            (0..3).map(|i| Structure::random().relabel(format!("s{}", i))),
        )
        .unwrap();
        let soap = Soap::new(3.0, 2, 2, 0.5).unwrap();
        let mut store = MemoryStore::default();
        assert_eq!(c.describe(&soap, &mut store).unwrap(), 3);
        assert_eq!(c.describe(&soap, &mut store).unwrap(), 0);
        let m = store
            .get::<DescriptorMatrix>("soap", "s1", &soap.params())
            .unwrap()
            .unwrap();
        assert_eq!(m.n(), 4);
        assert_eq!(m.dim(), soap.dim());
    }
}
