use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Distance used to rank neighbors in a [`Graph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    #[default]
    Euclidean,
    Manhattan,
    /// sqrt(2 - 2 cos θ), i.e. euclidean distance between unit vectors
    Angular,
    /// negated inner product, so that larger products rank nearer
    Dot,
}

impl Metric {
    pub fn distance(&self, a: &[Feature], b: &[Feature]) -> Distance {
        match self {
            Self::Euclidean => a
                .iter()
                .zip(b)
                .map(|(x, y)| (x - y) * (x - y))
                .sum::<Distance>()
                .sqrt(),
            Self::Manhattan => a.iter().zip(b).map(|(x, y)| (x - y).abs()).sum(),
            Self::Angular => {
                let na = inner(a, a).sqrt();
                let nb = inner(b, b).sqrt();
                if na == 0. || nb == 0. {
                    return 2f64.sqrt();
                }
                (2. - 2. * inner(a, b) / (na * nb)).max(0.).sqrt()
            }
            Self::Dot => -inner(a, b),
        }
    }
}

/// Graph construction compares in single precision.
impl hnsw_rs::prelude::Distance<Feature> for Metric {
    fn eval(&self, a: &[Feature], b: &[Feature]) -> f32 {
        self.distance(a, b) as f32
    }
}

pub(crate) fn inner(a: &[Feature], b: &[Feature]) -> Feature {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}

impl std::str::FromStr for Metric {
    type Err = Error;
    fn from_str(s: &str) -> Result<Self> {
        match s {
            "euclidean" => Ok(Self::Euclidean),
            "manhattan" => Ok(Self::Manhattan),
            "angular" => Ok(Self::Angular),
            "dot" => Ok(Self::Dot),
            other => Err(Error::invalid_parameter(format!("unknown metric {}", other))),
        }
    }
}

impl std::fmt::Display for Metric {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Euclidean => write!(f, "euclidean"),
            Self::Manhattan => write!(f, "manhattan"),
            Self::Angular => write!(f, "angular"),
            Self::Dot => write!(f, "dot"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances_on_a_right_triangle() {
        let a = [0., 0.];
        let b = [3., 4.];
        assert_eq!(Metric::Euclidean.distance(&a, &b), 5.);
        assert_eq!(Metric::Manhattan.distance(&a, &b), 7.);
        assert_eq!(Metric::Dot.distance(&b, &b), -25.);
    }

    #[test]
    fn angular_ignores_magnitude() {
        let a = [1., 0.];
        let b = [10., 0.];
        let c = [0., 2.];
        assert!(Metric::Angular.distance(&a, &b).abs() < 1e-12);
        assert!((Metric::Angular.distance(&a, &c) - 2f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn names_round_trip() {
        for metric in [Metric::Euclidean, Metric::Manhattan, Metric::Angular, Metric::Dot] {
            assert_eq!(metric.to_string().parse::<Metric>().unwrap(), metric);
        }
        assert!("hamming".parse::<Metric>().is_err());
    }
}
