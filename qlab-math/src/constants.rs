//! Matrizes constantes: identidade, Pauli e Hadamard
//!
//! Definidas uma vez, em tempo de compilação, e nunca alteradas.

use std::f64::consts::FRAC_1_SQRT_2;

use num_complex::Complex64 as Complex;

use crate::matrix::Matrix2x2;

/// Identidade I
pub const IDENTITY: Matrix2x2 = Matrix2x2::from_real([[1.0, 0.0], [0.0, 1.0]]);

/// Pauli-X (NOT quântico)
pub const PAULI_X: Matrix2x2 = Matrix2x2::from_real([[0.0, 1.0], [1.0, 0.0]]);

/// Pauli-Y
pub const PAULI_Y: Matrix2x2 = Matrix2x2::new([
    [Complex::new(0.0, 0.0), Complex::new(0.0, -1.0)],
    [Complex::new(0.0, 1.0), Complex::new(0.0, 0.0)],
]);

/// Pauli-Z (phase flip)
pub const PAULI_Z: Matrix2x2 = Matrix2x2::from_real([[1.0, 0.0], [0.0, -1.0]]);

/// Hadamard: leva |0⟩ em |+⟩
pub const HADAMARD: Matrix2x2 = Matrix2x2::from_real([
    [FRAC_1_SQRT_2, FRAC_1_SQRT_2],
    [FRAC_1_SQRT_2, -FRAC_1_SQRT_2],
]);
