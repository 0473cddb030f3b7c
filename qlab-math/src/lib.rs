//! # qlab-math — Kernel de Álgebra Linear Complexa 2x2
//!
//! Aritmética complexa escalar e operações sobre matrizes 2x2 complexas de
//! tamanho fixo, mais as matrizes nomeadas usadas pela simulação de um qubit.
//!
//! Todas as operações são puras e totais: não existe caminho de erro neste
//! crate, o tamanho das matrizes é fixado pelo tipo.
//!
//! ## Escalares
//!
//! Os escalares são [`num_complex::Complex64`], reexportado como [`Complex`]:
//! soma `a + b`, produto `a * b`, conjugado `a.conj()`.
//!
//! ## Exemplo
//!
//! ```
//! use qlab_math::{HADAMARD, PAULI_X, PAULI_Z};
//!
//! // H Z H = X
//! let hzh = HADAMARD.mul(&PAULI_Z).mul(&HADAMARD.dagger());
//! assert!(hzh.approx_eq(&PAULI_X, 1e-12));
//! ```

pub mod constants;
pub mod matrix;

pub use constants::{HADAMARD, IDENTITY, PAULI_X, PAULI_Y, PAULI_Z};
pub use matrix::Matrix2x2;
pub use num_complex::Complex64 as Complex;
