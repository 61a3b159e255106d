use std::fmt;

use glam::DMat4;

use crate::error::MatrixError;

/// A 4x4 homogeneous transformation matrix modelled after the browser `DOMMatrix`.
///
/// The 16 cells are stored once in a [`glam::DMat4`], whose column-major layout
/// matches the `m11` .. `m44` order (`x_axis` holds `m11` .. `m14`). They can be
/// addressed either by their full names (`m11` .. `m44`) or, for the cells relevant
/// to 2D affine transforms, by the short aliases `a` .. `f`:
///
/// | alias | cell  |
/// |-------|-------|
/// | `a`   | `m11` |
/// | `b`   | `m12` |
/// | `c`   | `m21` |
/// | `d`   | `m22` |
/// | `e`   | `m41` |
/// | `f`   | `m42` |
///
/// Whether the matrix is 2D is decided when it is built and is not re-derived from
/// the cell values afterwards.
///
/// # Examples
///
/// ```
/// use dom_matrix::DomMatrix;
///
/// let mut matrix = DomMatrix::from_slice(&[1.0, 0.0, 0.0, 1.0, 0.0, 0.0]).unwrap();
/// assert!(matrix.is_2d());
/// assert!(matrix.is_identity());
///
/// matrix.set_a(2.0);
/// assert_eq!(matrix.m11(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DomMatrix {
    pub(crate) inner: DMat4,
    pub(crate) is_2d: bool,
}

impl DomMatrix {
    /// The identity matrix, classified as 3D.
    pub const IDENTITY: Self = Self {
        inner: DMat4::IDENTITY,
        is_2d: false,
    };

    /// Create a new identity matrix.
    ///
    /// A default constructed matrix is classified as 3D even though it only holds
    /// identity values.
    pub fn new() -> Self {
        Self::IDENTITY
    }

    /// Create a 2D matrix from the affine coefficients `[a, b, c, d, e, f]`.
    ///
    /// The coefficients are written to `m11, m12, m21, m22, m41, m42`; every other
    /// cell keeps its identity value.
    pub fn from_affine(affine: [f64; 6]) -> Self {
        let [a, b, c, d, e, f] = affine;
        let mut inner = DMat4::IDENTITY;
        inner.x_axis.x = a;
        inner.x_axis.y = b;
        inner.y_axis.x = c;
        inner.y_axis.y = d;
        inner.w_axis.x = e;
        inner.w_axis.y = f;
        Self { inner, is_2d: true }
    }

    /// Create a 3D matrix from its 16 cells in row-major order (`m11` .. `m44`).
    pub fn from_row_major(data: [f64; 16]) -> Self {
        Self {
            inner: DMat4::from_cols_array(&data),
            is_2d: false,
        }
    }

    /// Create a matrix from a flat sequence of 6 or 16 values.
    ///
    /// # Arguments
    ///
    /// * `init` - The affine coefficients `[a, b, c, d, e, f]` or the 16 cells in
    ///   row-major order.
    ///
    /// # Errors
    ///
    /// Returns [`MatrixError::InvalidMatrixLength`] if `init` holds neither 6 nor 16
    /// values.
    ///
    /// # Examples
    ///
    /// ```
    /// use dom_matrix::{DomMatrix, MatrixError};
    ///
    /// let matrix = DomMatrix::from_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]).unwrap();
    /// assert_eq!(matrix.f(), 6.0);
    ///
    /// let err = DomMatrix::from_slice(&[1.0]).unwrap_err();
    /// assert_eq!(err, MatrixError::InvalidMatrixLength(1));
    /// ```
    pub fn from_slice(init: &[f64]) -> Result<Self, MatrixError> {
        Self::from_values(init)
    }

    /// Create a matrix from single precision values, widening each to `f64`.
    ///
    /// Follows the same 6 or 16 length rule as [`DomMatrix::from_slice`].
    pub fn from_float32_array(init: &[f32]) -> Result<Self, MatrixError> {
        Self::from_values(init)
    }

    /// Create a matrix from double precision values.
    ///
    /// Follows the same 6 or 16 length rule as [`DomMatrix::from_slice`].
    pub fn from_float64_array(init: &[f64]) -> Result<Self, MatrixError> {
        Self::from_values(init)
    }

    fn from_values<T: Copy + Into<f64>>(init: &[T]) -> Result<Self, MatrixError> {
        match init.len() {
            6 => {
                let mut affine = [0.0; 6];
                widen_into(&mut affine, init);
                Ok(Self::from_affine(affine))
            }
            16 => {
                let mut data = [0.0; 16];
                widen_into(&mut data, init);
                Ok(Self::from_row_major(data))
            }
            len => {
                log::debug!("rejecting matrix init sequence of length {len}");
                Err(MatrixError::InvalidMatrixLength(len))
            }
        }
    }

    /// Whether the matrix was built as a 2D affine transform.
    #[inline]
    pub fn is_2d(&self) -> bool {
        self.is_2d
    }

    /// Whether every cell currently equals the identity matrix, compared exactly.
    pub fn is_identity(&self) -> bool {
        self.inner == DMat4::IDENTITY
    }

    /// Export the cells in row-major order, narrowed to single precision.
    pub fn to_float32_array(&self) -> [f32; 16] {
        self.inner.as_mat4().to_cols_array()
    }

    /// Export the cells in row-major order at double precision.
    pub fn to_float64_array(&self) -> [f64; 16] {
        self.inner.to_cols_array()
    }

    /// Return a translated copy of the matrix, leaving `self` untouched.
    ///
    /// Equivalent to [`DomMatrix::translate_3d`] with `z = 0`.
    pub fn translate(&self, x: f64, y: f64) -> Self {
        self.translate_3d(x, y, 0.0)
    }

    /// Return a translated copy of the matrix, leaving `self` untouched.
    ///
    /// The offsets are added to the diagonal terms and written to the translation
    /// cells: `m41 = x + m11`, `m42 = y + m22` and `m43 = z + m33`. No matrix
    /// composition is performed. A non-zero `z` makes the result 3D.
    ///
    /// # Examples
    ///
    /// ```
    /// use dom_matrix::DomMatrix;
    ///
    /// let matrix = DomMatrix::new();
    /// let translated = matrix.translate_3d(100.0, 200.0, 300.0);
    /// assert_eq!(translated.m41(), 101.0);
    /// assert_eq!(translated.m42(), 201.0);
    /// assert_eq!(translated.m43(), 301.0);
    /// assert!(matrix.is_identity());
    /// ```
    pub fn translate_3d(&self, x: f64, y: f64, z: f64) -> Self {
        let mut out = *self;
        out.inner.w_axis.x = x + self.inner.x_axis.x;
        out.inner.w_axis.y = y + self.inner.y_axis.y;
        out.inner.w_axis.z = z + self.inner.z_axis.z;
        out.is_2d = self.is_2d && z == 0.0;
        log::trace!("translate({x}, {y}, {z}) -> {out}");
        out
    }

    /// Return a scaled copy of the matrix, leaving `self` untouched.
    ///
    /// The factors are assigned to `a` (`m11`) and `d` (`m22`) directly rather than
    /// multiplied into the existing values.
    pub fn scale(&self, scale_x: f64, scale_y: f64) -> Self {
        let mut out = *self;
        out.inner.x_axis.x = scale_x;
        out.inner.y_axis.y = scale_y;
        log::trace!("scale({scale_x}, {scale_y}) -> {out}");
        out
    }

    /// Return a copy scaled by the same factor on both axes.
    pub fn scale_uniform(&self, scale: f64) -> Self {
        self.scale(scale, scale)
    }

    /// Return a scaled copy that also assigns `scale_z` to `m33`.
    ///
    /// The result is 3D whenever `scale_z` is not 1.
    pub fn scale_3d(&self, scale_x: f64, scale_y: f64, scale_z: f64) -> Self {
        let mut out = *self;
        out.inner.x_axis.x = scale_x;
        out.inner.y_axis.y = scale_y;
        out.inner.z_axis.z = scale_z;
        out.is_2d = self.is_2d && scale_z == 1.0;
        log::trace!("scale({scale_x}, {scale_y}, {scale_z}) -> {out}");
        out
    }
}

fn widen_into<T: Copy + Into<f64>>(dst: &mut [f64], src: &[T]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d = (*s).into();
    }
}

macro_rules! define_cell_accessors {
    ($($get:ident, $set:ident => $axis:ident.$lane:ident, $cell:literal;)+) => {
        impl DomMatrix {
            $(
                #[doc = concat!("Returns the value of the `", $cell, "` cell.")]
                #[inline]
                pub fn $get(&self) -> f64 {
                    self.inner.$axis.$lane
                }

                #[doc = concat!("Sets the value of the `", $cell, "` cell.")]
                #[inline]
                pub fn $set(&mut self, value: f64) {
                    self.inner.$axis.$lane = value;
                }
            )+
        }
    };
}

// 2D aliases
define_cell_accessors! {
    a, set_a => x_axis.x, "m11";
    b, set_b => x_axis.y, "m12";
    c, set_c => y_axis.x, "m21";
    d, set_d => y_axis.y, "m22";
    e, set_e => w_axis.x, "m41";
    f, set_f => w_axis.y, "m42";
}

define_cell_accessors! {
    m11, set_m11 => x_axis.x, "m11";
    m12, set_m12 => x_axis.y, "m12";
    m13, set_m13 => x_axis.z, "m13";
    m14, set_m14 => x_axis.w, "m14";
    m21, set_m21 => y_axis.x, "m21";
    m22, set_m22 => y_axis.y, "m22";
    m23, set_m23 => y_axis.z, "m23";
    m24, set_m24 => y_axis.w, "m24";
    m31, set_m31 => z_axis.x, "m31";
    m32, set_m32 => z_axis.y, "m32";
    m33, set_m33 => z_axis.z, "m33";
    m34, set_m34 => z_axis.w, "m34";
    m41, set_m41 => w_axis.x, "m41";
    m42, set_m42 => w_axis.y, "m42";
    m43, set_m43 => w_axis.z, "m43";
    m44, set_m44 => w_axis.w, "m44";
}

impl Default for DomMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl From<[f64; 6]> for DomMatrix {
    fn from(affine: [f64; 6]) -> Self {
        Self::from_affine(affine)
    }
}

impl From<[f64; 16]> for DomMatrix {
    fn from(data: [f64; 16]) -> Self {
        Self::from_row_major(data)
    }
}

impl TryFrom<&[f64]> for DomMatrix {
    type Error = MatrixError;

    fn try_from(init: &[f64]) -> Result<Self, Self::Error> {
        Self::from_slice(init)
    }
}

impl TryFrom<Vec<f64>> for DomMatrix {
    type Error = MatrixError;

    fn try_from(init: Vec<f64>) -> Result<Self, Self::Error> {
        Self::from_slice(&init)
    }
}

impl From<DomMatrix> for [f64; 16] {
    fn from(matrix: DomMatrix) -> Self {
        matrix.to_float64_array()
    }
}

/// Formats the matrix as a CSS transform function: `matrix(a, b, c, d, e, f)` for 2D
/// matrices and `matrix3d(m11, .., m44)` otherwise.
impl fmt::Display for DomMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_2d {
            let affine = [self.a(), self.b(), self.c(), self.d(), self.e(), self.f()];
            write_function(f, "matrix", &affine)
        } else {
            write_function(f, "matrix3d", &self.inner.to_cols_array())
        }
    }
}

fn write_function(f: &mut fmt::Formatter<'_>, name: &str, values: &[f64]) -> fmt::Result {
    write!(f, "{name}(")?;
    for (i, value) in values.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{value}")?;
    }
    f.write_str(")")
}
