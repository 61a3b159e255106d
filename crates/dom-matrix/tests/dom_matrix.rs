use dom_matrix::{DomMatrix, MatrixError};

const IDENTITY: [f64; 16] = [
    1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0,
];

#[test]
fn accepts_no_parameters() {
    let matrix = DomMatrix::new();
    assert!(matrix.is_identity());
}

#[test]
fn constructs_2d_matrix() -> Result<(), MatrixError> {
    let matrix = DomMatrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?;
    assert_eq!(matrix.a(), 1.0);
    assert_eq!(matrix.b(), 2.0);
    assert_eq!(matrix.c(), 3.0);
    assert_eq!(matrix.d(), 4.0);
    assert_eq!(matrix.e(), 5.0);
    assert_eq!(matrix.f(), 6.0);
    assert!(matrix.is_2d());
    Ok(())
}

#[test]
fn default_is_3d() {
    assert!(!DomMatrix::new().is_2d());
}

#[test]
fn throws_for_invalid_length() {
    let result = DomMatrix::from_slice(&[1.0]);
    assert!(matches!(result, Err(MatrixError::InvalidMatrixLength(1))));
}

#[test]
fn accepts_16_values() -> Result<(), MatrixError> {
    let values = [
        1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0, 13.0, 14.0, 15.0, 16.0,
    ];
    let matrix = DomMatrix::from_slice(&values)?;
    assert!(!matrix.is_2d());
    assert_eq!(matrix.to_float64_array(), values);
    assert_eq!(matrix.m23(), 7.0);
    assert_eq!(matrix.m44(), 16.0);
    Ok(())
}

#[test]
fn exports_float32_array() {
    let matrix = DomMatrix::new();
    let expected = IDENTITY.map(|v| v as f32);
    assert_eq!(matrix.to_float32_array(), expected);
    assert_eq!(matrix.to_float32_array(), matrix.to_float32_array());
}

#[test]
fn exports_float64_array() {
    assert_eq!(DomMatrix::new().to_float64_array(), IDENTITY);
}

#[test]
fn identity_2d() -> Result<(), MatrixError> {
    assert!(DomMatrix::from_slice(&[1.0, 0.0, 0.0, 1.0, 0.0, 0.0])?.is_identity());
    assert!(!DomMatrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0])?.is_identity());
    Ok(())
}

#[test]
fn identity_3d() {
    let mut matrix = DomMatrix::new();
    assert!(matrix.is_identity());
    matrix.set_m21(100.0);
    assert!(!matrix.is_identity());
    assert!(!matrix.is_2d());
}

#[test]
fn alias_setters_write_cells() {
    let base = DomMatrix::from_affine([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    let mut matrix = base;
    matrix.set_a(2.0);
    assert_eq!(matrix.m11(), 2.0);

    let mut matrix = base;
    matrix.set_b(2.0);
    assert_eq!(matrix.m12(), 2.0);

    let mut matrix = base;
    matrix.set_c(2.0);
    assert_eq!(matrix.m21(), 2.0);

    let mut matrix = base;
    matrix.set_d(2.0);
    assert_eq!(matrix.m22(), 2.0);

    let mut matrix = base;
    matrix.set_e(2.0);
    assert_eq!(matrix.m41(), 2.0);

    let mut matrix = base;
    matrix.set_f(2.0);
    assert_eq!(matrix.m42(), 2.0);
}

#[test]
fn cell_setters_show_through_aliases() {
    let base = DomMatrix::from_affine([1.0, 0.0, 0.0, 1.0, 0.0, 0.0]);

    let mut matrix = base;
    matrix.set_m11(-0.75);
    assert_eq!(matrix.a(), -0.75);

    let mut matrix = base;
    matrix.set_m12(-0.75);
    assert_eq!(matrix.b(), -0.75);

    let mut matrix = base;
    matrix.set_m21(-0.75);
    assert_eq!(matrix.c(), -0.75);

    let mut matrix = base;
    matrix.set_m22(-0.75);
    assert_eq!(matrix.d(), -0.75);

    let mut matrix = base;
    matrix.set_m41(-0.75);
    assert_eq!(matrix.e(), -0.75);

    let mut matrix = base;
    matrix.set_m42(-0.75);
    assert_eq!(matrix.f(), -0.75);
}

#[test]
fn translate_returns_new_matrix() {
    let matrix = DomMatrix::new();
    let translated = matrix.translate(100.0, 100.0);
    assert_ne!(translated, matrix);
    assert!(matrix.is_identity());
}

#[test]
fn translate_applies_2d_changes() {
    let (x, y) = (100.0, 200.0);
    let matrix = DomMatrix::new();
    let translated = matrix.translate(x, y);
    assert_eq!(translated.e(), x + matrix.m11());
    assert_eq!(translated.f(), y + matrix.m22());
}

#[test]
fn translate_applies_3d_changes() {
    let (x, y, z) = (100.0, 200.0, 300.0);
    let matrix = DomMatrix::new();
    let translated = matrix.translate_3d(x, y, z);
    assert_eq!(translated.m41(), x + matrix.m11());
    assert_eq!(translated.m42(), y + matrix.m22());
    assert_eq!(translated.m43(), z + matrix.m33());
}

#[test]
fn scale_returns_new_matrix() {
    let matrix = DomMatrix::new();
    let scaled = matrix.scale(0.5, 0.7);
    assert_ne!(scaled, matrix);
    assert!(matrix.is_identity());
}

#[test]
fn scale_applies_2d_changes() {
    let (scale_x, scale_y) = (0.75, 0.5);
    let scaled = DomMatrix::new().scale(scale_x, scale_y);
    assert_eq!(scaled.a(), scale_x);
    assert_eq!(scaled.d(), scale_y);
}
