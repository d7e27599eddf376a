//! Piece catalog tests - template matrices and matrix rotation

use blockfall::core::{random_kind, template, SimpleRng};
use blockfall::types::{Color, PieceKind};

fn rows(shape: &blockfall::core::Shape) -> Vec<Vec<u8>> {
    (0..shape.height())
        .map(|r| (0..shape.width()).map(|c| shape.filled(r, c) as u8).collect())
        .collect()
}

#[test]
fn test_canonical_templates() {
    assert_eq!(rows(&template(PieceKind::I)), [[1, 1, 1, 1]]);
    assert_eq!(rows(&template(PieceKind::O)), [[1, 1], [1, 1]]);
    assert_eq!(rows(&template(PieceKind::T)), [[0, 1, 0], [1, 1, 1]]);
    assert_eq!(rows(&template(PieceKind::S)), [[0, 1, 1], [1, 1, 0]]);
    assert_eq!(rows(&template(PieceKind::Z)), [[1, 1, 0], [0, 1, 1]]);
    assert_eq!(rows(&template(PieceKind::J)), [[1, 0, 0], [1, 1, 1]]);
    assert_eq!(rows(&template(PieceKind::L)), [[0, 0, 1], [1, 1, 1]]);
}

#[test]
fn test_clockwise_rotation_mapping() {
    // For an r x c matrix, dest[col][rows - 1 - row] = src[row][col]
    let t = template(PieceKind::T).rotated_cw();
    assert_eq!(rows(&t), [[1, 0], [1, 1], [1, 0]]);

    let l = template(PieceKind::L).rotated_cw();
    assert_eq!(rows(&l), [[1, 0], [1, 0], [1, 1]]);

    let i = template(PieceKind::I).rotated_cw();
    assert_eq!(rows(&i), [[1], [1], [1], [1]]);
}

#[test]
fn test_o_rotation_is_stable() {
    let o = template(PieceKind::O);
    assert_eq!(o.rotated_cw(), o);
}

#[test]
fn test_rotation_has_order_four() {
    for kind in PieceKind::ALL {
        let original = template(kind);
        let mut shape = original;
        for _ in 0..4 {
            shape = shape.rotated_cw();
            assert_eq!(shape.cell_count(), 4);
        }
        assert_eq!(shape, original, "{:?} after four turns", kind);
    }
}

#[test]
fn test_rotation_preserves_cell_count() {
    for kind in PieceKind::ALL {
        let shape = template(kind);
        assert_eq!(shape.rotated_cw().cell_count(), shape.cell_count());
    }
}

#[test]
fn test_catalog_colors() {
    assert_eq!(PieceKind::I.color(), Color { r: 0, g: 255, b: 255 });
    assert_eq!(PieceKind::O.color(), Color { r: 255, g: 255, b: 0 });
    assert_eq!(PieceKind::L.color(), Color { r: 255, g: 165, b: 0 });
}

#[test]
fn test_kind_codes_are_distinct() {
    let mut seen = [false; 8];
    for kind in PieceKind::ALL {
        let code = kind.code() as usize;
        assert!((1..=7).contains(&code));
        assert!(!seen[code], "duplicate code for {:?}", kind);
        seen[code] = true;
    }
}

#[test]
fn test_random_kind_covers_all_kinds() {
    let mut rng = SimpleRng::new(2024);
    let mut seen = [false; 8];
    for _ in 0..700 {
        seen[random_kind(&mut rng).code() as usize] = true;
    }
    for kind in PieceKind::ALL {
        assert!(seen[kind.code() as usize], "{:?} never drawn", kind);
    }
}
