use kerf_core::{CellBox, ConnectivityAccess, IntVect};
use kerf_space::{stencil_offsets, CellKind, EbGeometry};
use proptest::prelude::*;

/// Covered iff the cell centre lies inside a disk of radius `r` around `(cx, cy)`.
fn disk(cx: f64, cy: f64, r: f64) -> impl Fn(IntVect<2>) -> bool {
    move |iv| {
        let dx = iv[0] as f64 + 0.5 - cx;
        let dy = iv[1] as f64 + 0.5 - cy;
        dx * dx + dy * dy < r * r
    }
}

#[test]
fn covered_cells_are_isolated() {
    let bx = CellBox::<2>::cube(12).unwrap().grow(1);
    let geom = EbGeometry::from_covered_mask(bx, disk(6.0, 6.0, 3.0), |_| [0.0; 2]);
    for cell in bx.iter() {
        let flag = geom.flags().get(cell).unwrap();
        if flag.kind() == CellKind::Covered {
            for offset in stencil_offsets::<2>() {
                assert!(!geom.is_connected(cell, offset), "covered {cell} connected to {offset}");
            }
        }
    }
    let (regular, cut, covered) = geom.flags().census();
    assert!(covered > 0 && cut > 0 && regular > 0);
    assert_eq!(regular + cut + covered, bx.num_cells());
}

#[test]
fn three_dimensional_slab() {
    let bx = CellBox::<3>::cube(4).unwrap().grow(1);
    let geom = EbGeometry::from_covered_mask(bx, |iv| iv[2] < 1, |_| [0.0, 0.0, 0.25]);
    let flag = geom.flags().get(IntVect([1, 1, 1])).unwrap();
    assert!(flag.is_single_valued());
    assert_eq!(flag.num_connected::<3>(), 18);
    assert!(!geom.is_connected(IntVect([1, 1, 1]), IntVect([0, 0, -1])));
    assert!(geom.is_connected(IntVect([1, 1, 2]), IntVect([0, 0, -1])));
}

proptest! {
    #[test]
    fn mask_connectivity_is_symmetric(
        cx in 0.0f64..10.0,
        cy in 0.0f64..10.0,
        r in 0.5f64..4.0,
    ) {
        let bx = CellBox::<2>::cube(10).unwrap().grow(1);
        let geom = EbGeometry::from_covered_mask(bx, disk(cx, cy, r), |_| [0.0; 2]);
        for cell in bx.iter() {
            for offset in stencil_offsets::<2>() {
                let nb = cell + offset;
                if !bx.contains(nb) {
                    continue;
                }
                prop_assert_eq!(
                    geom.is_connected(cell, offset),
                    geom.is_connected(nb, -offset),
                    "asymmetric connectivity between {} and {}", cell, nb
                );
            }
        }
    }
}
