//! # Gates — portas unitárias suportadas
//!
//! Conjunto fechado {H, X, Y, Z}. O despacho é um `match` exaustivo; tags
//! desconhecidas viram [`EngineError::UnknownGate`] em vez de uma matriz
//! indefinida.

use std::fmt;
use std::str::FromStr;

use qlab_math::{HADAMARD, Matrix2x2, PAULI_X, PAULI_Y, PAULI_Z};
use serde::{Deserialize, Serialize};

use crate::error::EngineError;

/// Porta single-qubit aplicável como ρ ↦ UρU†
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Gate {
    /// Hadamard: cria superposição
    H,
    /// Pauli-X (bit flip)
    X,
    /// Pauli-Y
    Y,
    /// Pauli-Z (phase flip)
    Z,
}

impl Gate {
    /// Todas as portas
    pub const ALL: [Gate; 4] = [Gate::H, Gate::X, Gate::Y, Gate::Z];

    /// Matriz unitária da porta
    pub fn matrix(self) -> Matrix2x2 {
        match self {
            Gate::H => HADAMARD,
            Gate::X => PAULI_X,
            Gate::Y => PAULI_Y,
            Gate::Z => PAULI_Z,
        }
    }

    /// Tag de uma letra usada no protocolo
    pub fn name(self) -> &'static str {
        match self {
            Gate::H => "H",
            Gate::X => "X",
            Gate::Y => "Y",
            Gate::Z => "Z",
        }
    }
}

impl fmt::Display for Gate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Gate {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "H" => Ok(Gate::H),
            "X" => Ok(Gate::X),
            "Y" => Ok(Gate::Y),
            "Z" => Ok(Gate::Z),
            other => Err(EngineError::UnknownGate(other.to_string())),
        }
    }
}

impl TryFrom<String> for Gate {
    type Error = EngineError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Gate> for String {
    fn from(gate: Gate) -> Self {
        gate.name().to_string()
    }
}
