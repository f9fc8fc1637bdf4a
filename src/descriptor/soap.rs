use crate::*;
use rayon::prelude::*;
use std::f64::consts::PI;

/// Smooth overlap of atomic positions, as a rotation invariant power spectrum.
///
/// For atom i with neighbor displacements r_j inside the cutoff, each
/// component is
///
/// ```text
/// p(n, n', l) = Σ_j Σ_k g_n(|r_j|) g_n'(|r_k|) P_l(cos θ_jk)
/// ```
///
/// where g_n are Gaussians centered on evenly spaced radii and damped by a
/// cosine cutoff, and P_l are Legendre polynomials. By the addition theorem
/// this equals the usual Σ_m c_nlm c*_n'lm up to a constant per l, without
/// ever expanding in spherical harmonics. Species are not distinguished.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Soap {
    pub rcut: Distance,
    pub nmax: usize,
    pub lmax: usize,
    pub sigma: Distance,
}

impl Default for Soap {
    fn default() -> Self {
        Self {
            rcut: SOAP_RCUT,
            nmax: SOAP_NMAX,
            lmax: SOAP_LMAX,
            sigma: SOAP_SIGMA,
        }
    }
}

impl Soap {
    pub fn new(rcut: Distance, nmax: usize, lmax: usize, sigma: Distance) -> Result<Self> {
        if !(rcut > 0.) || !(sigma > 0.) {
            return Err(Error::invalid_parameter(format!(
                "soap rcut and sigma must be positive, got rcut={} sigma={}",
                rcut, sigma
            )));
        }
        if nmax == 0 {
            return Err(Error::invalid_parameter("soap nmax must be at least 1"));
        }
        Ok(Self {
            rcut,
            nmax,
            lmax,
            sigma,
        })
    }

    /// length of each descriptor row
    pub fn dim(&self) -> usize {
        self.nmax * (self.nmax + 1) / 2 * (self.lmax + 1)
    }

    fn cutoff(&self, r: Distance) -> f64 {
        0.5 * ((PI * r / self.rcut).cos() + 1.)
    }

    fn radial(&self, r: Distance) -> Vec<f64> {
        let fc = self.cutoff(r);
        (0..self.nmax)
            .map(|n| self.rcut * n as f64 / self.nmax as f64)
            .map(|rn| (-(r - rn).powi(2) / (2. * self.sigma.powi(2))).exp() * fc)
            .collect()
    }

    /// P_0(x) ..= P_lmax(x) by Bonnet's recursion
    fn legendre(&self, x: f64) -> Vec<f64> {
        let mut p = Vec::with_capacity(self.lmax + 1);
        p.push(1.);
        if self.lmax >= 1 {
            p.push(x);
        }
        for l in 2..=self.lmax {
            let l1 = l as f64;
            let next = ((2. * l1 - 1.) * x * p[l - 1] - (l1 - 1.) * p[l - 2]) / l1;
            p.push(next);
        }
        p
    }

    /// Power spectrum of one atom's neighborhood.
    fn spectrum(&self, structure: &Structure, center: usize) -> Vec<Feature> {
        let shell = neighbors(structure, center, self.rcut);
        let radii = shell.iter().map(|d| norm(*d)).collect::<Vec<_>>();
        let basis = radii.iter().map(|r| self.radial(*r)).collect::<Vec<_>>();
        let mut row = vec![0.; self.dim()];
        for j in 0..shell.len() {
            for k in 0..shell.len() {
                let cos = (dot(shell[j], shell[k]) / (radii[j] * radii[k])).clamp(-1., 1.);
                let legendre = self.legendre(cos);
                let mut i = 0;
                for n in 0..self.nmax {
                    for m in n..self.nmax {
                        let g = basis[j][n] * basis[k][m];
                        for p in legendre.iter() {
                            row[i] += g * p;
                            i += 1;
                        }
                    }
                }
            }
        }
        row
    }
}

impl Describe for Soap {
    fn kind(&self) -> &str {
        DEFAULT_DESCRIPTOR
    }
    fn params(&self) -> Params {
        Params::new()
            .with("rcut", self.rcut)
            .with("nmax", self.nmax)
            .with("lmax", self.lmax)
            .with("sigma", self.sigma)
    }
    fn describe(&self, structure: &Structure) -> Result<DescriptorMatrix> {
        log::debug!("soap {} over {} atoms", structure.aid(), structure.len());
        let rows = (0..structure.len())
            .into_par_iter()
            .map(|i| self.spectrum(structure, i))
            .collect::<Vec<_>>();
        DescriptorMatrix::new(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rotate(structure: &Structure, theta: f64) -> Structure {
        let (s, c) = theta.sin_cos();
        let spin = |v: &Vector| [c * v[0] - s * v[1], s * v[0] + c * v[1], v[2]];
        let cell = structure.cell().vectors().each_ref().map(spin);
        Structure::new(
            structure.aid().clone(),
            structure.numbers().to_vec(),
            structure.positions().iter().map(spin).collect(),
            UnitCell::from(cell),
        )
        .unwrap()
    }

    #[test]
    fn rows_match_atoms_and_dim() {
        let soap = Soap::default();
        let s = ElementTable::default().structure("Mg").unwrap();
        let m = soap.describe(&s).unwrap();
        assert_eq!(m.n(), s.len());
        assert_eq!(m.dim(), soap.dim());
        assert_eq!(soap.dim(), 4 * 5 / 2 * 5);
    }

    #[test]
    fn equivalent_sites_share_a_descriptor() {
        let soap = Soap::default();
        let s = ElementTable::default().structure("Ni").unwrap();
        let m = soap.describe(&s).unwrap();
        let first = m.row(0).unwrap();
        for row in m.rows() {
            for (a, b) in first.iter().zip(row) {
                assert!((a - b).abs() <= 1e-8 * a.abs().max(1.), "{} != {}", a, b);
            }
        }
    }

    #[test]
    fn rotation_invariant() {
        let soap = Soap::default();
        let s = Structure::random();
        let r = rotate(&s, 0.7);
        let a = soap.describe(&s).unwrap();
        let b = soap.describe(&r).unwrap();
        for (x, y) in a.rows().zip(b.rows()) {
            for (p, q) in x.iter().zip(y) {
                assert!((p - q).abs() <= 1e-6 * p.abs().max(1.), "{} != {}", p, q);
            }
        }
    }

    #[test]
    fn isolated_atom_is_zero() {
        let s = Structure::new("lonely", vec![28], vec![[0.; 3]], UnitCell::default()).unwrap();
        let m = Soap::default().describe(&s).unwrap();
        assert!(m.row(0).unwrap().iter().all(|x| *x == 0.));
    }

    #[test]
    fn distinguishes_lattices() {
        let table = ElementTable::default();
        let soap = Soap::default();
        let fcc = soap.describe(&table.structure("Ni").unwrap()).unwrap();
        let bcc = soap.describe(&table.structure("Cr").unwrap()).unwrap();
        let d = Metric::Euclidean.distance(fcc.row(0).unwrap(), bcc.row(0).unwrap());
        assert!(d > 1e-3);
    }

    #[test]
    fn rejects_nonsense_params() {
        assert!(Soap::new(-1., 4, 4, 0.5).is_err());
        assert!(Soap::new(5., 0, 4, 0.5).is_err());
        assert!(Soap::new(5., 4, 4, 0.).is_err());
    }
}
