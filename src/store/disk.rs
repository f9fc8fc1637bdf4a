use crate::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

/// JSON-on-disk [`Store`].
///
/// Layout is `<root>/<kind>/<key>.json`, each file holding every parameter
/// set computed for that key as a map from [`Params::key`] to value.
/// Updates are written to a sibling temporary file and renamed into place.
#[derive(Debug, Clone)]
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl AsRef<Path>) -> Result<Self> {
        std::fs::create_dir_all(root.as_ref())?;
        Ok(Self {
            root: root.as_ref().to_path_buf(),
        })
    }
    pub fn root(&self) -> &Path {
        &self.root
    }
    /// path to file on disk, with kind and key percent-encoded so that
    /// distinct keys never share a file
    fn path(&self, kind: &str, key: &str) -> PathBuf {
        self.root
            .join(escape(kind))
            .join(format!("{}.json", escape(key)))
    }
    fn read(&self, path: &Path) -> Result<BTreeMap<String, serde_json::Value>> {
        match std::fs::read(path) {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Everything outside `[A-Za-z0-9_-]` becomes `%XX` per byte.
fn escape(name: &str) -> String {
    name.bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' => char::from(b).to_string(),
            _ => format!("%{:02X}", b),
        })
        .collect()
}

impl Store for DiskStore {
    fn get<T>(&self, kind: &str, key: &str, params: &Params) -> Result<Option<T>>
    where
        T: DeserializeOwned,
    {
        self.read(&self.path(kind, key))?
            .remove(&params.key())
            .map(serde_json::from_value)
            .transpose()
            .map_err(Error::from)
    }

    fn store<T>(&mut self, value: &T, kind: &str, key: &str, params: &Params) -> Result<()>
    where
        T: Serialize,
    {
        let path = self.path(kind, key);
        let mut entries = self.read(&path)?;
        entries.insert(params.key(), serde_json::to_value(value)?);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let temp = path.with_extension("json.partial");
        let written = serde_json::to_vec(&entries)
            .map_err(Error::from)
            .and_then(|bytes| std::fs::write(&temp, bytes).map_err(Error::from))
            .and_then(|_| std::fs::rename(&temp, &path).map_err(Error::from));
        if written.is_err() {
            let _ = std::fs::remove_file(&temp);
        }
        log::debug!("stored {} / {} ({})", kind, key, params);
        written
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn entries_persist_across_handles() {
        let scratch = TempDir::new().unwrap();
        let params = Params::new().with("rcut", 5.0).with("nmax", 4);
        let matrix = DescriptorMatrix::new(vec![vec![0.1, 0.2], vec![1. / 3., 2. / 3.]]).unwrap();
        DiskStore::open(scratch.path())
            .unwrap()
            .store(&matrix, "soap", "grain/1", &params)
            .unwrap();
        let reopened = DiskStore::open(scratch.path()).unwrap();
        let loaded = reopened
            .get::<DescriptorMatrix>("soap", "grain/1", &params)
            .unwrap();
        assert_eq!(loaded, Some(matrix));
    }

    #[test]
    fn params_share_a_file_without_clobbering() {
        let scratch = TempDir::new().unwrap();
        let mut store = DiskStore::open(scratch.path()).unwrap();
        let p1 = Params::new().with("eps", 0.1);
        let p2 = Params::new().with("eps", 0.2);
        store.store(&1u32, "temp", "U_ler", &p1).unwrap();
        store.store(&2u32, "temp", "U_ler", &p2).unwrap();
        assert_eq!(store.get::<u32>("temp", "U_ler", &p1).unwrap(), Some(1));
        assert_eq!(store.get::<u32>("temp", "U_ler", &p2).unwrap(), Some(2));
        assert_eq!(store.get::<u32>("temp", "other", &p2).unwrap(), None);
        let leftovers = std::fs::read_dir(scratch.path().join("temp"))
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().to_string_lossy().ends_with(".partial"))
            .count();
        assert_eq!(leftovers, 0);
    }

    #[test]
    fn similar_keys_do_not_collide() {
        let scratch = TempDir::new().unwrap();
        let mut store = DiskStore::open(scratch.path()).unwrap();
        let params = Params::new().with("rcut", 5.0);
        let keys = ["grain/1", "grain_1", "grain:1", "grain%2F1", "grain.1", ".."];
        for (i, key) in keys.iter().enumerate() {
            let matrix = DescriptorMatrix::new(vec![vec![i as f64]]).unwrap();
            store.store(&matrix, "soap", key, &params).unwrap();
        }
        for (i, key) in keys.iter().enumerate() {
            let loaded = store.get::<DescriptorMatrix>("soap", key, &params).unwrap();
            assert_eq!(loaded.unwrap().row(0), Some(&[i as f64][..]), "{}", key);
        }
        assert_eq!(std::fs::read_dir(scratch.path().join("soap")).unwrap().count(), keys.len());
    }

    #[test]
    fn corrupt_file_is_a_codec_error() {
        let scratch = TempDir::new().unwrap();
        let store = DiskStore::open(scratch.path()).unwrap();
        std::fs::create_dir_all(scratch.path().join("soap")).unwrap();
        std::fs::write(scratch.path().join("soap").join("a.json"), b"{not json").unwrap();
        let result = store.get::<DescriptorMatrix>("soap", "a", &Params::new());
        assert!(matches!(result, Err(Error::Codec(_))));
    }
}
