use crate::*;

/// Displacements from atom `center` to every atom (periodic images included)
/// strictly within `cutoff`. The atom itself at zero translation is excluded.
pub fn neighbors(structure: &Structure, center: usize, cutoff: Distance) -> Vec<Vector> {
    let ref origin = structure.positions()[center];
    let cell = structure.cell();
    // one extra shell, positions need not be wrapped into the home cell
    let [na, nb, nc] = match cell.is_periodic() {
        true => cell.images(cutoff).map(|n| n + 1),
        false => [0; 3],
    };
    let mut found = Vec::new();
    for a in -na..=na {
        for b in -nb..=nb {
            for c in -nc..=nc {
                let shift = cell.translation([a, b, c]);
                for (j, position) in structure.positions().iter().enumerate() {
                    if j == center && (a, b, c) == (0, 0, 0) {
                        continue;
                    }
                    let d = sub(add(*position, shift), *origin);
                    if norm(d) < cutoff {
                        found.push(d);
                    }
                }
            }
        }
    }
    found
}
