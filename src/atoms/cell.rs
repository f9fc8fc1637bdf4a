use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Periodic simulation cell spanned by three lattice vectors (rows).
///
/// An all-zero cell marks a non-periodic cluster of atoms; neighbor
/// search then never looks at periodic images.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct UnitCell([Vector; 3]);

impl From<[Vector; 3]> for UnitCell {
    fn from(vectors: [Vector; 3]) -> Self {
        Self(vectors)
    }
}

impl UnitCell {
    /// Orthorhombic cell with the given edge lengths.
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Self {
        Self([[a, 0., 0.], [0., b, 0.], [0., 0., c]])
    }
    pub fn vectors(&self) -> &[Vector; 3] {
        &self.0
    }
    pub fn is_periodic(&self) -> bool {
        self.volume() > f64::EPSILON
    }
    /// |a · (b × c)|
    pub fn volume(&self) -> f64 {
        let [a, b, c] = self.0;
        dot(a, cross(b, c)).abs()
    }
    /// Fractional coordinates to cartesian.
    pub fn cartesian(&self, fractional: Vector) -> Vector {
        let [a, b, c] = self.0;
        std::array::from_fn(|i| fractional[0] * a[i] + fractional[1] * b[i] + fractional[2] * c[i])
    }
    /// Lattice translation n₀a + n₁b + n₂c.
    pub fn translation(&self, n: [i32; 3]) -> Vector {
        self.cartesian(n.map(f64::from))
    }
    /// Distance between opposite faces of the cell, per lattice direction.
    pub fn heights(&self) -> Vector {
        let [a, b, c] = self.0;
        let volume = self.volume();
        [
            volume / norm(cross(b, c)),
            volume / norm(cross(c, a)),
            volume / norm(cross(a, b)),
        ]
    }
    /// How many periodic images along each lattice direction can hold
    /// an atom within `cutoff` of any atom in the home cell.
    pub fn images(&self, cutoff: f64) -> [i32; 3] {
        if self.is_periodic() {
            self.heights().map(|h| (cutoff / h).ceil() as i32)
        } else {
            [0; 3]
        }
    }
}

pub fn dot(a: Vector, b: Vector) -> f64 {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}
pub fn cross(a: Vector, b: Vector) -> Vector {
    [
        a[1] * b[2] - a[2] * b[1],
        a[2] * b[0] - a[0] * b[2],
        a[0] * b[1] - a[1] * b[0],
    ]
}
pub fn norm(a: Vector) -> f64 {
    dot(a, a).sqrt()
}
pub fn sub(a: Vector, b: Vector) -> Vector {
    [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
}
pub fn add(a: Vector, b: Vector) -> Vector {
    [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
}
