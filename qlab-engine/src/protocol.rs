//! Protocolo de mensagens do canal de comandos
//!
//! Forma no fio (JSON):
//!
//! ```text
//! → {"type":"reset"}
//! → {"type":"gate","gate":"H"}
//! → {"type":"dephase","p":0.5}
//! → {"type":"setBloch","x":0.0,"y":0.0,"z":1.0}
//! → {"type":"snapshot"}
//! ← {"kind":"state","x":1.0,"y":0.0,"z":0.0,"purity":1.0}
//! ← {"kind":"error","message":"..."}
//! ```

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::gates::Gate;
use crate::state::Snapshot;

/// Pedido do chamador para o engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Request {
    /// Volta ao estado fundamental
    Reset,
    /// Conjugação unitária
    Gate { gate: Gate },
    /// Canal de dephasing
    Dephase { p: f64 },
    /// Reconstrução direta a partir do vetor de Bloch
    SetBloch { x: f64, y: f64, z: f64 },
    /// Sem mutação, só dispara uma resposta
    Snapshot,
}

impl Request {
    /// Tag do pedido no protocolo
    pub fn kind(&self) -> &'static str {
        match self {
            Request::Reset => "reset",
            Request::Gate { .. } => "gate",
            Request::Dephase { .. } => "dephase",
            Request::SetBloch { .. } => "setBloch",
            Request::Snapshot => "snapshot",
        }
    }

    /// Pedido altera ρ?
    pub fn is_mutation(&self) -> bool {
        !matches!(self, Request::Snapshot)
    }
}

/// Resposta do engine, exatamente uma por pedido
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Response {
    /// Observáveis após aplicar o pedido
    State(Snapshot),
    /// Pedido rejeitado; ρ não foi alterada
    Error { message: String },
}

impl Response {
    /// Snapshot, se o pedido foi aceito
    pub fn snapshot(&self) -> Option<&Snapshot> {
        match self {
            Response::State(s) => Some(s),
            Response::Error { .. } => None,
        }
    }

    /// Pedido foi rejeitado?
    pub fn is_error(&self) -> bool {
        matches!(self, Response::Error { .. })
    }
}

impl From<EngineError> for Response {
    fn from(err: EngineError) -> Self {
        Response::Error {
            message: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_decode_requests() {
        let cases = [
            (json!({"type": "reset"}), Request::Reset),
            (json!({"type": "gate", "gate": "Z"}), Request::Gate { gate: Gate::Z }),
            (json!({"type": "dephase", "p": 0.25}), Request::Dephase { p: 0.25 }),
            (
                json!({"type": "setBloch", "x": 0.0, "y": 1.0, "z": 0.0}),
                Request::SetBloch { x: 0.0, y: 1.0, z: 0.0 },
            ),
            (json!({"type": "snapshot"}), Request::Snapshot),
        ];

        for (value, expected) in cases {
            let decoded: Request = serde_json::from_value(value).unwrap();
            assert_eq!(decoded, expected);
        }
    }

    #[test]
    fn test_decode_unknown_gate_fails() {
        let err = serde_json::from_value::<Request>(json!({"type": "gate", "gate": "T"}))
            .unwrap_err();
        assert!(err.to_string().contains("Unknown gate"));
    }

    #[test]
    fn test_decode_unknown_type_fails() {
        assert!(serde_json::from_value::<Request>(json!({"type": "measure"})).is_err());
    }

    #[test]
    fn test_encode_state_response() {
        let response = Response::State(Snapshot::GROUND);
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(
            value,
            json!({"kind": "state", "x": 0.0, "y": 0.0, "z": 1.0, "purity": 1.0})
        );
    }

    #[test]
    fn test_encode_error_response() {
        let response = Response::from(EngineError::UnknownGate("Q".into()));
        let value = serde_json::to_value(&response).unwrap();
        assert_eq!(value["kind"], "error");
        assert!(value["message"].as_str().unwrap().contains("Unknown gate"));
        assert!(response.is_error());
        assert!(response.snapshot().is_none());
    }

    #[test]
    fn test_request_kind() {
        assert_eq!(Request::SetBloch { x: 0.0, y: 0.0, z: 0.0 }.kind(), "setBloch");
        assert!(!Request::Snapshot.is_mutation());
        assert!(Request::Reset.is_mutation());
    }
}
