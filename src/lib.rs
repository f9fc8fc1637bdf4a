//! Local environment representations of crystalline atomic structures.
//!
//! Per-atom SOAP-style descriptors are reduced to fixed-length vectors for
//! downstream models, either by averaging ([`Asr`]) or by clustering every
//! local environment in a [`Collection`] and emitting a per-structure
//! histogram over the resulting environment types ([`Ler`]).
//!
//! ## Pipeline
//!
//! 1. **Describe**: compute a [`DescriptorMatrix`] for every structure and cache it in a [`Store`]
//! 2. **Cluster**: greedily grow [`Centers`] from a perfect-crystal seed
//! 3. **Classify**: assign every environment to its nearest center through a [`Graph`]
//! 4. **Emit**: normalize one structure's cluster memberships into a histogram
pub mod ann;
pub mod atoms;
pub mod descriptor;
pub mod error;
pub mod ler;
pub mod store;

pub use ann::*;
pub use atoms::*;
pub use descriptor::*;
pub use error::*;
pub use ler::*;
pub use store::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Descriptor components and cartesian coordinates.
pub type Feature = f64;
/// Distances between local environments and between atoms.
pub type Distance = f64;
/// Histogram weights.
pub type Probability = f64;
/// Cartesian position or displacement in Angstroms.
pub type Vector = [f64; 3];

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for testing and benchmarking.
pub trait Arbitrary {
    /// Generate a random instance.
    fn random() -> Self;
}

// ============================================================================
// SOAP DESCRIPTOR DEFAULTS
// ============================================================================
/// Store kind under which descriptor matrices are cached by default.
pub const DEFAULT_DESCRIPTOR: &str = "soap";
/// Local environment cutoff radius in Angstroms.
pub const SOAP_RCUT: f64 = 5.0;
/// Radial basis size.
pub const SOAP_NMAX: usize = 4;
/// Angular band limit.
pub const SOAP_LMAX: usize = 4;
/// Width of each radial Gaussian in Angstroms.
pub const SOAP_SIGMA: f64 = 0.5;

// ============================================================================
// APPROXIMATE NEAREST NEIGHBORS
// Navigable small world graph used to classify environments against centers.
// ============================================================================
/// Default `n_trees`: links kept per graph node, and the candidate budget
/// per neighbor when no `search_k` is given.
pub const LER_N_TREES: usize = 10;
/// Upper bound on links per graph node.
pub const ANN_MAX_CONNECTIONS: usize = 256;
/// Number of graph layers.
pub const ANN_MAX_LAYER: usize = 16;
/// Candidate list size while inserting into the graph.
pub const ANN_EF_CONSTRUCTION: usize = 200;

// ============================================================================
// LER CACHING
// ============================================================================
/// Structure id reserved for the perfect-crystal seed center.
pub const SEED_SENTINEL: &str = "0";
/// Store kind for clustering results.
pub const LER_CACHE_KIND: &str = "temp";
/// Store key for clustering results.
pub const LER_CACHE_KEY: &str = "U_ler";

/// Default directory for log files.
pub const LOG_DIR: &str = "logs";

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Log INFO to stderr, keeping stdout free for JSON output, and DEBUG to
/// `<dir>/relate-<secs>.log`. The directory is `RELATE_LOG_DIR`, else
/// [`LOG_DIR`]. Records from dependencies such as the neighbor graph are
/// dropped below WARN.
#[cfg(feature = "cli")]
pub fn log() {
    let dir = std::env::var("RELATE_LOG_DIR").unwrap_or_else(|_| LOG_DIR.to_string());
    log_to(std::path::Path::new(&dir));
}

/// [`log()`] into an explicit directory.
#[cfg(feature = "cli")]
pub fn log_to(dir: &std::path::Path) {
    std::fs::create_dir_all(dir).expect("create log directory");
    let started = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or_default();
    let path = dir.join(format!("relate-{}.log", started));
    let ours = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Error)
        .set_thread_level(log::LevelFilter::Off)
        .add_filter_allow_str(env!("CARGO_CRATE_NAME"))
        .build();
    let theirs = simplelog::ConfigBuilder::new()
        .add_filter_ignore_str(env!("CARGO_CRATE_NAME"))
        .build();
    let loggers: Vec<Box<dyn simplelog::SharedLogger>> = vec![
        simplelog::TermLogger::new(
            log::LevelFilter::Info,
            ours.clone(),
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::TermLogger::new(
            log::LevelFilter::Warn,
            theirs,
            simplelog::TerminalMode::Stderr,
            simplelog::ColorChoice::Auto,
        ),
        simplelog::WriteLogger::new(
            log::LevelFilter::Debug,
            ours,
            std::fs::File::create(&path).expect("create log file"),
        ),
    ];
    simplelog::CombinedLogger::init(loggers).expect("initialize logger");
    log::debug!("logging to {}", path.display());
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn log_writes_our_records_to_a_timestamped_file() {
        let dir = tempfile::TempDir::new().unwrap();
        log_to(dir.path());
        log::info!("hello from the log test");
        let files = std::fs::read_dir(dir.path())
            .unwrap()
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect::<Vec<_>>();
        assert_eq!(files.len(), 1);
        assert!(files[0].starts_with("relate-") && files[0].ends_with(".log"));
        let text = std::fs::read_to_string(dir.path().join(&files[0])).unwrap();
        assert!(text.contains("hello from the log test"));
    }
}
