//! # qlab-engine — Engine de Evolução de um Qubit
//!
//! Simula um único qubit como matriz densidade 2x2 complexa. Aplica portas
//! unitárias (H, X, Y, Z), o canal de dephasing e a injeção direta de um
//! vetor de Bloch, e devolve os observáveis derivados após cada operação.
//!
//! ## Arquitetura
//!
//! ```text
//! ┌─────────────────────────────────────────────────┐
//! │          EngineChannel                          │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Request queue (mpsc, em ordem)           │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Worker: QubitEngine (dono de ρ)          │  │
//! │  └───────────────────────────────────────────┘  │
//! │  ┌───────────────────────────────────────────┐  │
//! │  │  Response queue (1 por pedido)            │  │
//! │  └───────────────────────────────────────────┘  │
//! └─────────────────────────────────────────────────┘
//! ```
//!
//! ## Observáveis
//!
//! - ⟨X⟩, ⟨Y⟩, ⟨Z⟩ = Re Tr(ρσ)
//! - pureza = Re Tr(ρ²), 1 para estados puros e 0.5 para I/2
//!
//! ## Exemplo
//!
//! ```
//! use qlab_engine::{Gate, QubitEngine};
//!
//! let mut engine = QubitEngine::new();
//! engine.apply_gate(Gate::H);
//! let s = engine.apply_dephasing(0.5).unwrap();
//!
//! assert!(s.x.abs() < 1e-9);
//! assert!((s.purity - 0.5).abs() < 1e-9);
//! ```

pub mod channel;
pub mod config;
pub mod engine;
pub mod error;
pub mod gates;
pub mod protocol;
pub mod state;

pub use channel::{EngineChannel, RequestSender};
pub use config::EngineConfig;
pub use engine::QubitEngine;
pub use error::{EngineError, EngineResult, InvariantViolation};
pub use gates::Gate;
pub use protocol::{Request, Response};
pub use state::{DensityMatrix, Snapshot};
