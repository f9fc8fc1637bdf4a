use crate::*;
use serde::Serialize;
use serde::de::DeserializeOwned;

/// A memoizing cache of computed results.
///
/// Entries are addressed by a result `kind` (e.g. `"soap"`), a `key`
/// (usually a structure's aid) and the full [`Params`] that produced them.
/// Lookup and insertion use exactly the same addressing, so any change to
/// the parameters yields a distinct entry rather than an overwrite.
pub trait Store {
    /// `Ok(None)` is a cache miss, never an error.
    fn get<T>(&self, kind: &str, key: &str, params: &Params) -> Result<Option<T>>
    where
        T: DeserializeOwned;

    /// Persist `value`. Writes are all-or-nothing: a failed store leaves no
    /// partially written entry behind.
    fn store<T>(&mut self, value: &T, kind: &str, key: &str, params: &Params) -> Result<()>
    where
        T: Serialize;

    /// whether an entry exists, without decoding it
    fn contains(&self, kind: &str, key: &str, params: &Params) -> Result<bool> {
        self.get::<serde_json::Value>(kind, key, params)
            .map(|v| v.is_some())
    }
}
