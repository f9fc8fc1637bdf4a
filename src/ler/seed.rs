use crate::*;

/// Reference environments from perfect crystals.
///
/// The seed for an element is the descriptor of the first atom of its
/// ideal conventional cell, i.e. the bulk environment every other
/// environment of that element is measured against.
#[derive(Debug, Clone, Default)]
pub struct SeedGenerator {
    table: ElementTable,
}

impl From<ElementTable> for SeedGenerator {
    fn from(table: ElementTable) -> Self {
        Self { table }
    }
}

impl SeedGenerator {
    pub fn table(&self) -> &ElementTable {
        &self.table
    }
    pub fn seed<D>(&self, element: &str, describer: &D) -> Result<Vec<Feature>>
    where
        D: Describe + ?Sized,
    {
        let ref crystal = self.table.structure(element)?;
        describer
            .describe(crystal)?
            .row(0)
            .map(<[Feature]>::to_vec)
            .ok_or_else(|| {
                Error::invalid_parameter(format!(
                    "{} described the {} crystal with no rows",
                    describer.kind(),
                    element
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seed_is_first_row_of_ideal_crystal() {
        let soap = Soap::default();
        let seeds = SeedGenerator::default();
        let seed = seeds.seed("Al", &soap).unwrap();
        let crystal = ElementTable::default().structure("Al").unwrap();
        let matrix = soap.describe(&crystal).unwrap();
        assert_eq!(seed.as_slice(), matrix.row(0).unwrap());
    }

    #[test]
    fn unknown_element_fails() {
        let result = SeedGenerator::default().seed("Xx", &Soap::default());
        assert!(matches!(result, Err(Error::UnknownElement { .. })));
    }

    #[test]
    fn custom_table_is_used() {
        let table = ElementTable::empty().with(
            "Fe",
            Element {
                lattice: Lattice::BodyCenteredCubic,
                constant: LatticeConstant::Cubic(2.87),
                number: 26,
            },
        );
        let seeds = SeedGenerator::from(table);
        assert!(seeds.seed("Fe", &Soap::default()).is_ok());
        assert!(seeds.seed("Ni", &Soap::default()).is_err());
    }
}
