//! Matriz densidade ρ e observáveis derivados
//!
//! Invariantes de uma ρ válida (dentro da tolerância de ponto flutuante):
//! Tr(ρ) = 1, ρ = ρ†, e pureza Tr(ρ²) em [0.5, 1].

use qlab_math::{Complex, IDENTITY, Matrix2x2, PAULI_X, PAULI_Y, PAULI_Z};
use serde::{Deserialize, Serialize};

use crate::error::InvariantViolation;

/// Observáveis de ρ: vetor de Bloch e pureza
///
/// Função pura de ρ, recalculada a cada pedido e nunca guardada à parte.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    /// ⟨X⟩ = Re Tr(ρX)
    pub x: f64,
    /// ⟨Y⟩ = Re Tr(ρY)
    pub y: f64,
    /// ⟨Z⟩ = Re Tr(ρZ)
    pub z: f64,
    /// Tr(ρ²)
    pub purity: f64,
}

impl Snapshot {
    /// Observáveis do estado fundamental |0⟩
    pub const GROUND: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 1.0,
        purity: 1.0,
    };

    /// Comprimento |r| do vetor de Bloch (1 = puro, 0 = maximamente misto)
    pub fn radius(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Compara componente a componente
    pub fn approx_eq(&self, other: &Snapshot, tol: f64) -> bool {
        (self.x - other.x).abs() <= tol
            && (self.y - other.y).abs() <= tol
            && (self.z - other.z).abs() <= tol
            && (self.purity - other.purity).abs() <= tol
    }

    /// Todos os observáveis são finitos (sem overflow nem NaN)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.purity.is_finite()
    }
}

/// Matriz densidade de um qubit
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DensityMatrix(Matrix2x2);

impl DensityMatrix {
    /// Estado fundamental |0⟩⟨0| = diag(1, 0)
    pub const fn ground() -> Self {
        Self(Matrix2x2::from_real([[1.0, 0.0], [0.0, 0.0]]))
    }

    /// ρ = ½(I + xX + yY + zZ)
    ///
    /// Não renormaliza: com |r| > 1 o resultado deixa de ser positivo.
    #[must_use]
    pub fn from_bloch(x: f64, y: f64, z: f64) -> Self {
        let m = IDENTITY
            .add(&PAULI_X.scale(x))
            .add(&PAULI_Y.scale(y))
            .add(&PAULI_Z.scale(z))
            .scale(0.5);
        Self(m)
    }

    /// Evolução unitária ρ′ = UρU†
    #[must_use]
    pub fn conjugate_by(&self, u: &Matrix2x2) -> Self {
        Self(u.mul(&self.0).mul(&u.dagger()))
    }

    /// Canal de dephasing ρ′ = (1−p)ρ + p·ZρZ
    ///
    /// Equivalente à forma de Kraus {√(1−p)·I, √p·Z}.
    #[must_use]
    pub fn dephase(&self, p: f64) -> Self {
        let flipped = PAULI_Z.mul(&self.0).mul(&PAULI_Z);
        Self(self.0.scale(1.0 - p).add(&flipped.scale(p)))
    }

    /// Matriz subjacente
    pub fn matrix(&self) -> &Matrix2x2 {
        &self.0
    }

    /// Tr(ρ)
    pub fn trace(&self) -> Complex {
        self.0.trace()
    }

    /// Tr(ρ²)
    pub fn purity(&self) -> f64 {
        self.0.trace_of_product(&self.0).re
    }

    /// ρ = ρ†
    pub fn is_hermitian(&self, tol: f64) -> bool {
        self.0.is_hermitian(tol)
    }

    /// Vetor de Bloch e pureza
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            x: self.0.trace_of_product(&PAULI_X).re,
            y: self.0.trace_of_product(&PAULI_Y).re,
            z: self.0.trace_of_product(&PAULI_Z).re,
            purity: self.purity(),
        }
    }

    /// Verifica traço, hermiticidade e faixa de pureza
    pub fn check_invariants(&self, tol: f64) -> Result<(), InvariantViolation> {
        let tr = self.trace();
        if (tr.re - 1.0).abs() > tol || tr.im.abs() > tol {
            return Err(InvariantViolation::Trace { re: tr.re, im: tr.im });
        }
        if !self.is_hermitian(tol) {
            return Err(InvariantViolation::NotHermitian);
        }
        let purity = self.purity();
        if purity < 0.5 - tol || purity > 1.0 + tol {
            return Err(InvariantViolation::Purity(purity));
        }
        Ok(())
    }
}

impl Default for DensityMatrix {
    fn default() -> Self {
        Self::ground()
    }
}
