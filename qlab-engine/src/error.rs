//! Tipos de erro para qlab-engine

use thiserror::Error;

/// Resultado customizado para operações do engine
pub type EngineResult<T> = Result<T, EngineError>;

/// Erros de validação e de transporte
///
/// Toda validação acontece antes de ρ ser substituída: um pedido rejeitado
/// deixa o estado intacto.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EngineError {
    #[error("Unknown gate: {0:?} (expected one of H, X, Y, Z)")]
    UnknownGate(String),

    #[error("Dephasing probability out of range: {0} (expected 0 <= p <= 1)")]
    ProbabilityOutOfRange(f64),

    #[error("Bloch vector out of range: ({x}, {y}, {z}) has length {norm} > 1")]
    BlochOutOfRange { x: f64, y: f64, z: f64, norm: f64 },

    #[error("Non-finite value for {0}")]
    NonFinite(&'static str),

    /// Só alcançável com validação de faixa desligada
    #[error("Resulting state is not finite (f64 overflow)")]
    StateOverflow,

    #[error("Command channel closed")]
    ChannelClosed,
}

/// Violação dos invariantes de uma matriz densidade
///
/// Usado para diagnosticar drift numérico; nunca chega ao chamador.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum InvariantViolation {
    #[error("Trace drifted: Tr(rho) = {re} + {im}i")]
    Trace { re: f64, im: f64 },

    #[error("Density matrix is not Hermitian")]
    NotHermitian,

    #[error("Purity out of [0.5, 1]: {0}")]
    Purity(f64),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = EngineError::UnknownGate("Q".into());
        assert!(err.to_string().contains("\"Q\""));

        let err = EngineError::ProbabilityOutOfRange(1.5);
        assert!(err.to_string().contains("1.5"));

        let err = EngineError::BlochOutOfRange { x: 1.0, y: 1.0, z: 0.0, norm: 2f64.sqrt() };
        assert!(err.to_string().starts_with("Bloch vector out of range"));

        assert!(EngineError::StateOverflow.to_string().contains("not finite"));
    }
}
