use crate::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::collections::HashMap;

/// Process-local [`Store`].
///
/// Values are kept in their serialized form so that a round trip through
/// this store behaves exactly like one through [`DiskStore`]. Lookups are
/// counted per kind, which lets callers observe whether a computation
/// actually touched its inputs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<(String, String, String), serde_json::Value>,
    lookups: RefCell<BTreeMap<String, usize>>,
}

impl MemoryStore {
    /// how many times `get` was called for this kind
    pub fn lookups(&self, kind: &str) -> usize {
        self.lookups.borrow().get(kind).copied().unwrap_or(0)
    }
    pub fn len(&self) -> usize {
        self.entries.len()
    }
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
    fn address(kind: &str, key: &str, params: &Params) -> (String, String, String) {
        (kind.to_string(), key.to_string(), params.key())
    }
}

impl Store for MemoryStore {
    fn get<T>(&self, kind: &str, key: &str, params: &Params) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        *self
            .lookups
            .borrow_mut()
            .entry(kind.to_string())
            .or_insert(0) += 1;
        self.entries
            .get(&Self::address(kind, key, params))
            .cloned()
            .map(serde_json::from_value)
            .transpose()
            .map_err(Error::from)
    }

    fn store<T>(&mut self, value: &T, kind: &str, key: &str, params: &Params) -> Result<()>
    where
        T: Serialize,
    {
        let value = serde_json::to_value(value)?;
        self.entries.insert(Self::address(kind, key, params), value);
        Ok(())
    }
}
