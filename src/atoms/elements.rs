use crate::*;
use std::collections::BTreeMap;

/// Tabulated lattice metadata for one element.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub lattice: Lattice,
    pub constant: LatticeConstant,
    pub number: usize,
}

/// Immutable table of perfect-crystal definitions keyed by chemical symbol.
///
/// The default table covers the simple metals we routinely seed from.
/// Extend it with [`ElementTable::with`] rather than mutating shared state.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementTable(BTreeMap<String, Element>);

impl Default for ElementTable {
    fn default() -> Self {
        Self::empty()
            .with(
                "Ni",
                Element {
                    lattice: Lattice::FaceCenteredCubic,
                    constant: LatticeConstant::Cubic(3.52),
                    number: 28,
                },
            )
            .with(
                "Al",
                Element {
                    lattice: Lattice::FaceCenteredCubic,
                    constant: LatticeConstant::Cubic(4.05),
                    number: 13,
                },
            )
            .with(
                "Cr",
                Element {
                    lattice: Lattice::BodyCenteredCubic,
                    constant: LatticeConstant::Cubic(2.91),
                    number: 24,
                },
            )
            .with(
                "Mg",
                Element {
                    lattice: Lattice::HexagonalClosedPacked,
                    constant: LatticeConstant::Hexagonal {
                        a: 3.21,
                        c_over_a: 1.633,
                    },
                    number: 12,
                },
            )
    }
}

impl ElementTable {
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }
    /// A copy of this table with one more (or one replaced) row.
    pub fn with(mut self, symbol: &str, element: Element) -> Self {
        self.0.insert(symbol.to_string(), element);
        self
    }
    pub fn lookup(&self, symbol: &str) -> Result<&Element> {
        self.0
            .get(symbol)
            .ok_or_else(|| Error::unknown_element(symbol))
    }
    pub fn symbols(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
    /// The ideal crystal for this element.
    pub fn structure(&self, symbol: &str) -> Result<Structure> {
        let element = self.lookup(symbol)?;
        element
            .lattice
            .generate(element.constant, element.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_table_builds_every_row() {
        let table = ElementTable::default();
        for symbol in table.symbols() {
            let s = table.structure(symbol).unwrap();
            assert!(s.symbols().iter().all(|x| *x == symbol));
        }
    }

    #[test]
    fn unknown_element_is_reported() {
        let table = ElementTable::default();
        assert!(matches!(
            table.lookup("Unobtainium"),
            Err(Error::UnknownElement { element }) if element == "Unobtainium"
        ));
    }

    #[test]
    fn custom_rows_extend_the_table() {
        let table = ElementTable::empty().with(
            "Cu",
            Element {
                lattice: Lattice::FaceCenteredCubic,
                constant: LatticeConstant::Cubic(3.61),
                number: 29,
            },
        );
        assert_eq!(table.structure("Cu").unwrap().len(), 4);
        assert!(table.lookup("Ni").is_err());
    }
}
