//! Relate Binary
//!
//! Describe a JSON collection of structures and print its representations.
//!
//! Descriptor matrices and clusterings are cached under `--store`
//! (or `RELATE_STORE`), so `asr` and `ler` run after `describe`.

use clap::Args;
use clap::Parser;
use clap::Subcommand;
use relate::*;
use std::path::PathBuf;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Root directory of the descriptor and clustering cache
    #[arg(long, env = "RELATE_STORE", default_value = "store")]
    store: PathBuf,
    #[command(subcommand)]
    command: Command,
}

#[derive(Args)]
struct SoapArgs {
    #[arg(long, default_value_t = SOAP_RCUT)]
    rcut: f64,
    #[arg(long, default_value_t = SOAP_NMAX)]
    nmax: usize,
    #[arg(long, default_value_t = SOAP_LMAX)]
    lmax: usize,
    #[arg(long, default_value_t = SOAP_SIGMA)]
    sigma: f64,
}

impl SoapArgs {
    fn soap(&self) -> relate::Result<Soap> {
        Soap::new(self.rcut, self.nmax, self.lmax, self.sigma)
    }
}

#[derive(Subcommand)]
enum Command {
    #[command(about = "Compute and cache descriptor matrices for every structure")]
    Describe {
        #[arg(long)]
        input: PathBuf,
        #[command(flatten)]
        soap: SoapArgs,
    },
    #[command(about = "Average the cached descriptor rows of one structure")]
    Asr {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        aid: String,
        #[arg(long)]
        normalize: bool,
        #[command(flatten)]
        soap: SoapArgs,
    },
    #[command(about = "Cluster local environments and print LER histograms")]
    Ler {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        eps: f64,
        /// Only print this structure's histogram
        #[arg(long)]
        aid: Option<String>,
        #[arg(long, default_value_t = Metric::Euclidean)]
        metric: Metric,
        #[arg(long, default_value_t = LER_N_TREES)]
        n_trees: usize,
        /// Candidates inspected per query, -1 for n_trees
        #[arg(long, default_value_t = -1, allow_hyphen_values = true)]
        search_k: i64,
        #[command(flatten)]
        soap: SoapArgs,
    },
    #[command(about = "Print the perfect-crystal seed vector of an element")]
    Seed {
        #[arg(long)]
        element: String,
        #[command(flatten)]
        soap: SoapArgs,
    },
}

/// Read and validate a collection.
fn load(path: &PathBuf) -> anyhow::Result<Collection> {
    let file = std::fs::File::open(path)?;
    let collection = serde_json::from_reader::<_, Collection>(std::io::BufReader::new(file))?;
    log::info!("loaded {} structures from {}", collection.len(), path.display());
    Ok(collection)
}

fn member<'a>(collection: &'a Collection, aid: &str) -> anyhow::Result<&'a Structure> {
    collection
        .get(&Aid::from(aid))
        .ok_or_else(|| anyhow::anyhow!("no structure {} in {}", aid, collection.name()))
}

fn emit<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    Ok(println!("{}", serde_json::to_string(value)?))
}

fn main() -> anyhow::Result<()> {
    log();
    let cli = Cli::parse();
    let mut store = DiskStore::open(&cli.store)?;
    match cli.command {
        Command::Describe { input, soap } => {
            let collection = load(&input)?;
            let computed = collection.describe(&soap.soap()?, &mut store)?;
            log::info!("described {} new structures", computed);
            emit(&collection.aids().collect::<Vec<_>>())
        }
        Command::Asr { input, aid, normalize, soap } => {
            let collection = load(&input)?;
            let structure = member(&collection, &aid)?;
            let asr = Asr::default().with_normalize(normalize);
            match asr.reduce(structure, &store, &soap.soap()?.params())? {
                Some(vector) => emit(&vector),
                None => anyhow::bail!("{} has no cached descriptor, run describe first", aid),
            }
        }
        Command::Ler { input, eps, aid, metric, n_trees, search_k, soap } => {
            let collection = load(&input)?;
            let ref soap = soap.soap()?;
            let ler = Ler::new(eps)
                .with_metric(metric)
                .with_n_trees(n_trees)
                .with_search_k(usize::try_from(search_k).ok());
            match aid {
                Some(aid) => {
                    let structure = member(&collection, &aid)?;
                    emit(&ler.describe(structure, &collection, &mut store, soap)?)
                }
                None => {
                    let result = ler.result(&collection, &mut store, soap)?;
                    let histograms = collection
                        .aids()
                        .map(|aid| result.histogram(aid).map(|h| (aid.clone(), h)))
                        .collect::<relate::Result<std::collections::BTreeMap<_, _>>>()?;
                    emit(&histograms)
                }
            }
        }
        Command::Seed { element, soap } => {
            emit(&SeedGenerator::default().seed(&element, &soap.soap()?)?)
        }
    }
}
