/// Chemical symbols indexed by atomic number. Index 0 is a placeholder.
const SYMBOLS: [&str; 119] = [
    "X", //
    "H", "He", //
    "Li", "Be", "B", "C", "N", "O", "F", "Ne", //
    "Na", "Mg", "Al", "Si", "P", "S", "Cl", "Ar", //
    "K", "Ca", "Sc", "Ti", "V", "Cr", "Mn", "Fe", "Co", "Ni", "Cu", "Zn", "Ga", "Ge", "As", "Se",
    "Br", "Kr", //
    "Rb", "Sr", "Y", "Zr", "Nb", "Mo", "Tc", "Ru", "Rh", "Pd", "Ag", "Cd", "In", "Sn", "Sb", "Te",
    "I", "Xe", //
    "Cs", "Ba", "La", "Ce", "Pr", "Nd", "Pm", "Sm", "Eu", "Gd", "Tb", "Dy", "Ho", "Er", "Tm",
    "Yb", "Lu", "Hf", "Ta", "W", "Re", "Os", "Ir", "Pt", "Au", "Hg", "Tl", "Pb", "Bi", "Po", "At",
    "Rn", //
    "Fr", "Ra", "Ac", "Th", "Pa", "U", "Np", "Pu", "Am", "Cm", "Bk", "Cf", "Es", "Fm", "Md", "No",
    "Lr", "Rf", "Db", "Sg", "Bh", "Hs", "Mt", "Ds", "Rg", "Cn", "Nh", "Fl", "Mc", "Lv", "Ts", "Og",
];

/// Chemical symbol for an atomic number.
pub fn symbol(number: usize) -> Option<&'static str> {
    SYMBOLS.get(number).copied().filter(|_| number > 0)
}

/// Atomic number for a chemical symbol.
pub fn number(symbol: &str) -> Option<usize> {
    SYMBOLS
        .iter()
        .skip(1)
        .position(|s| *s == symbol)
        .map(|i| i + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip_known_metals() {
        assert_eq!(symbol(28), Some("Ni"));
        assert_eq!(symbol(13), Some("Al"));
        assert_eq!(symbol(24), Some("Cr"));
        assert_eq!(symbol(12), Some("Mg"));
        assert_eq!(number("Og"), Some(118));
    }

    #[test]
    fn placeholder_is_not_an_element() {
        assert_eq!(symbol(0), None);
        assert_eq!(symbol(119), None);
        assert_eq!(number("X"), None);
    }
}
