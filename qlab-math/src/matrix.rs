//! Matriz 2x2 complexa
//!
//! Tipo valor (`Copy`): toda operação devolve uma matriz nova, nada é
//! alterado in-place. Serve tanto como operador de gate quanto como matriz
//! densidade.

use num_complex::Complex64 as Complex;

/// Matriz 2x2 complexa, row-major
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Matrix2x2 {
    /// Elementos: [[a, b], [c, d]]
    pub elements: [[Complex; 2]; 2],
}

impl Matrix2x2 {
    /// Matriz nula
    pub const ZERO: Self = Self::from_real([[0.0, 0.0], [0.0, 0.0]]);

    /// Cria matriz a partir dos elementos
    pub const fn new(elements: [[Complex; 2]; 2]) -> Self {
        Self { elements }
    }

    /// Cria matriz com entradas puramente reais
    pub const fn from_real(re: [[f64; 2]; 2]) -> Self {
        Self {
            elements: [
                [Complex::new(re[0][0], 0.0), Complex::new(re[0][1], 0.0)],
                [Complex::new(re[1][0], 0.0), Complex::new(re[1][1], 0.0)],
            ],
        }
    }

    /// Multiplicação de matrizes: `R[i][j] = Σₖ A[i][k]·B[k][j]`
    pub fn mul(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;

        Matrix2x2 {
            elements: [
                [a * e + b * g, a * f + b * h],
                [c * e + d * g, c * f + d * h],
            ],
        }
    }

    /// Soma entrada a entrada
    pub fn add(&self, other: &Matrix2x2) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;

        Matrix2x2 {
            elements: [[a + e, b + f], [c + g, d + h]],
        }
    }

    /// Multiplicação por escalar real
    pub fn scale(&self, s: f64) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        Matrix2x2 {
            elements: [[a * s, b * s], [c * s, d * s]],
        }
    }

    /// Transposta conjugada (dagger)
    pub fn dagger(&self) -> Matrix2x2 {
        let [[a, b], [c, d]] = self.elements;
        Matrix2x2 {
            elements: [[a.conj(), c.conj()], [b.conj(), d.conj()]],
        }
    }

    /// Traço: soma da diagonal
    pub fn trace(&self) -> Complex {
        self.elements[0][0] + self.elements[1][1]
    }

    /// Tr(A·B) sem montar o produto inteiro
    ///
    /// Só a diagonal de `A·B` entra no traço, então as entradas fora da
    /// diagonal nunca são calculadas.
    pub fn trace_of_product(&self, other: &Matrix2x2) -> Complex {
        let [[a, b], [c, d]] = self.elements;
        let [[e, f], [g, h]] = other.elements;

        (a * e + b * g) + (c * f + d * h)
    }

    /// Compara entrada a entrada com tolerância absoluta
    pub fn approx_eq(&self, other: &Matrix2x2, tol: f64) -> bool {
        self.elements
            .iter()
            .flatten()
            .zip(other.elements.iter().flatten())
            .all(|(x, y)| (x - y).norm() <= tol)
    }

    /// Verifica se U·U† = I
    pub fn is_unitary(&self, tol: f64) -> bool {
        self.mul(&self.dagger()).approx_eq(&crate::IDENTITY, tol)
    }

    /// Verifica se A = A†
    pub fn is_hermitian(&self, tol: f64) -> bool {
        self.approx_eq(&self.dagger(), tol)
    }
}

impl Default for Matrix2x2 {
    fn default() -> Self {
        Self::ZERO
    }
}

impl std::ops::Mul for Matrix2x2 {
    type Output = Matrix2x2;

    fn mul(self, rhs: Matrix2x2) -> Matrix2x2 {
        Matrix2x2::mul(&self, &rhs)
    }
}

impl std::ops::Add for Matrix2x2 {
    type Output = Matrix2x2;

    fn add(self, rhs: Matrix2x2) -> Matrix2x2 {
        Matrix2x2::add(&self, &rhs)
    }
}
