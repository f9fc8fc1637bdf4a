use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Bravais lattice families used for perfect-crystal reference structures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Lattice {
    FaceCenteredCubic,
    BodyCenteredCubic,
    HexagonalClosedPacked,
}

/// Lattice parameters in Angstroms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LatticeConstant {
    Cubic(f64),
    Hexagonal { a: f64, c_over_a: f64 },
}

impl Lattice {
    /// Fractional coordinates of the conventional cell's basis.
    fn basis(&self) -> &'static [Vector] {
        match self {
            Self::FaceCenteredCubic => &[
                [0.0, 0.0, 0.0],
                [0.0, 0.5, 0.5],
                [0.5, 0.0, 0.5],
                [0.5, 0.5, 0.0],
            ],
            Self::BodyCenteredCubic => &[
                [0.0, 0.0, 0.0], //
                [0.5, 0.5, 0.5],
            ],
            Self::HexagonalClosedPacked => &[
                [0.0, 0.0, 0.0], //
                [1. / 3., 2. / 3., 0.5],
            ],
        }
    }

    fn cell(&self, constant: LatticeConstant) -> Result<UnitCell> {
        match (self, constant) {
            (Self::FaceCenteredCubic | Self::BodyCenteredCubic, LatticeConstant::Cubic(a)) => {
                Ok(UnitCell::orthorhombic(a, a, a))
            }
            (Self::HexagonalClosedPacked, LatticeConstant::Hexagonal { a, c_over_a }) => {
                Ok(UnitCell::from([
                    [a, 0., 0.],
                    [-a / 2., a * 3f64.sqrt() / 2., 0.],
                    [0., 0., a * c_over_a],
                ]))
            }
            (lattice, constant) => Err(Error::invalid_parameter(format!(
                "{:?} cannot be built from {:?}",
                lattice, constant
            ))),
        }
    }

    /// The conventional cell of this lattice, every site occupied by
    /// atomic number `z`.
    pub fn generate(&self, constant: LatticeConstant, z: usize) -> Result<Structure> {
        let cell = self.cell(constant)?;
        let positions = self
            .basis()
            .iter()
            .map(|f| cell.cartesian(*f))
            .collect::<Vec<_>>();
        let numbers = vec![z; positions.len()];
        let aid = format!("{}-{:?}", species::symbol(z).unwrap_or("X"), self);
        Structure::new(aid, numbers, positions, cell)
    }
}
