//! Piece catalog tests

use tui_well::core::{get_shape, get_spawn_shape, shape_at, SPAWN_ANCHOR};
use tui_well::types::{PieceKind, Rotation, PIECE_COUNT};

#[test]
fn test_every_kind_and_rotation_has_four_distinct_offsets() {
    for kind in PieceKind::ALL {
        for r in 0..4 {
            let shape = shape_at(kind, r);
            assert_eq!(shape.len(), 4);
            for (i, a) in shape.iter().enumerate() {
                assert!((0..4).contains(&a.0) && (0..4).contains(&a.1), "{kind:?} r{r}");
                for b in &shape[i + 1..] {
                    assert_ne!(a, b, "{kind:?} r{r} repeats an offset");
                }
            }
        }
    }
}

#[test]
fn test_catalog_order_and_tags() {
    assert_eq!(PieceKind::ALL.len(), PIECE_COUNT);
    let tags: Vec<u8> = PieceKind::ALL.iter().map(|k| k.tag()).collect();
    assert_eq!(tags, vec![1, 2, 3, 4, 5, 6, 7]);
    assert_eq!(PieceKind::ALL[0], PieceKind::I);
    assert_eq!(PieceKind::ALL[6], PieceKind::T);
}

#[test]
fn test_rotation_index_wraps() {
    for kind in PieceKind::ALL {
        assert_eq!(shape_at(kind, 4), shape_at(kind, 0));
        assert_eq!(shape_at(kind, 7), get_shape(kind, Rotation::West));
    }
}

#[test]
fn test_spawn_shape_is_rotation_zero() {
    for kind in PieceKind::ALL {
        assert_eq!(get_spawn_shape(kind), get_shape(kind, Rotation::North));
    }
    assert_eq!(SPAWN_ANCHOR, (0, 7));
}

#[test]
fn test_o_piece_never_changes() {
    let north = get_shape(PieceKind::O, Rotation::North);
    for r in 1..4 {
        assert_eq!(shape_at(PieceKind::O, r), north);
    }
}

#[test]
fn test_i_piece_is_flat_then_upright() {
    let flat = get_shape(PieceKind::I, Rotation::North);
    assert!(flat.iter().all(|&(r, _)| r == flat[0].0));

    let upright = get_shape(PieceKind::I, Rotation::East);
    assert!(upright.iter().all(|&(_, c)| c == upright[0].1));
}
