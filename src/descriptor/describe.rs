use crate::*;

/// A per-atom descriptor: maps a structure to one feature vector per atom.
///
/// Implementations must be deterministic for a fixed structure and fixed
/// parameters, since their output is cached under `(kind, aid, params)`.
pub trait Describe: Sync {
    /// Store kind under which results are cached, e.g. `"soap"`.
    fn kind(&self) -> &str;
    /// Parameters that, together with [`Describe::kind`], identify this describer.
    fn params(&self) -> Params;
    /// Compute the descriptor matrix, one row per atom in atom order.
    fn describe(&self, structure: &Structure) -> Result<DescriptorMatrix>;

    /// Kind and parameters as a single nested parameter, for embedding
    /// this describer's identity into other cache keys.
    fn identity(&self) -> Params {
        Params::new()
            .with("kind", self.kind())
            .with("params", self.params())
    }
}
