use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// An ordered collection of atoms in a periodic cell.
///
/// Atom order is significant: row `i` of every descriptor matrix computed
/// from this structure describes atom `i`. Structures are never mutated
/// after construction, so cached descriptors stay valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Atoms")]
pub struct Structure {
    aid: Aid,
    numbers: Vec<usize>,
    positions: Vec<Vector>,
    cell: UnitCell,
}

/// Unchecked wire form; deserialization goes through [`Structure::new`].
#[derive(Deserialize)]
struct Atoms {
    aid: Aid,
    numbers: Vec<usize>,
    positions: Vec<Vector>,
    #[serde(default)]
    cell: UnitCell,
}

impl TryFrom<Atoms> for Structure {
    type Error = Error;
    fn try_from(atoms: Atoms) -> Result<Self> {
        Self::new(atoms.aid, atoms.numbers, atoms.positions, atoms.cell)
    }
}

impl Structure {
    pub fn new(
        aid: impl Into<Aid>,
        numbers: Vec<usize>,
        positions: Vec<Vector>,
        cell: UnitCell,
    ) -> Result<Self> {
        if numbers.len() != positions.len() {
            return Err(Error::dimension_mismatch(numbers.len(), positions.len()));
        }
        if let Some(z) = numbers.iter().find(|z| species::symbol(**z).is_none()) {
            return Err(Error::invalid_parameter(format!("atomic number {} out of range", z)));
        }
        Ok(Self {
            aid: aid.into(),
            numbers,
            positions,
            cell,
        })
    }
    /// Same atoms under a different identifier.
    pub fn relabel(self, aid: impl Into<Aid>) -> Self {
        Self {
            aid: aid.into(),
            ..self
        }
    }
    pub fn aid(&self) -> &Aid {
        &self.aid
    }
    pub fn numbers(&self) -> &[usize] {
        &self.numbers
    }
    pub fn positions(&self) -> &[Vector] {
        &self.positions
    }
    pub fn cell(&self) -> &UnitCell {
        &self.cell
    }
    pub fn len(&self) -> usize {
        self.numbers.len()
    }
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
    /// chemical symbols in atom order
    pub fn symbols(&self) -> Vec<&'static str> {
        self.numbers
            .iter()
            .filter_map(|z| species::symbol(*z))
            .collect()
    }
}

/// A perturbed nickel conventional cell with a random aid. Small thermal noise keeps
/// environments close to, but not exactly at, the perfect FCC environment.
impl Arbitrary for Structure {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let ideal = Lattice::FaceCenteredCubic
            .generate(LatticeConstant::Cubic(3.52), 28)
            .expect("nickel fcc");
        let positions = ideal
            .positions()
            .iter()
            .map(|p| p.map(|x| x + rng.random_range(-0.05..0.05)))
            .collect();
        Self {
            aid: Aid::from(format!("random-{:08x}", rng.random::<u32>())),
            numbers: ideal.numbers,
            positions,
            cell: ideal.cell,
        }
    }
}
