//! Engine de evolução do qubit
//!
//! Dono exclusivo de ρ. Cada operação valida as entradas, substitui ρ por
//! um valor novo e devolve o [`Snapshot`] recalculado.

use tracing::{debug, warn};

use crate::config::EngineConfig;
use crate::error::{EngineError, EngineResult};
use crate::gates::Gate;
use crate::protocol::{Request, Response};
use crate::state::{DensityMatrix, Snapshot};

/// Engine single-qubit
#[derive(Debug, Clone)]
pub struct QubitEngine {
    /// Estado atual
    rho: DensityMatrix,
    /// Configuração
    config: EngineConfig,
    /// Operações aceitas desde a criação
    applied: u64,
}

impl QubitEngine {
    /// Cria engine no estado fundamental
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    /// Cria engine com configuração customizada
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            rho: DensityMatrix::ground(),
            config,
            applied: 0,
        }
    }

    /// Configuração ativa
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Estado atual (somente leitura)
    pub fn density(&self) -> &DensityMatrix {
        &self.rho
    }

    /// Número de operações aceitas
    pub fn applied(&self) -> u64 {
        self.applied
    }

    /// Observáveis do estado atual
    pub fn snapshot(&self) -> Snapshot {
        self.rho.snapshot()
    }

    /// Volta ao estado fundamental
    pub fn reset(&mut self) -> Snapshot {
        debug!("reset to ground state");
        self.replace(DensityMatrix::ground())
    }

    /// Aplica porta unitária: ρ′ = UρU†
    pub fn apply_gate(&mut self, gate: Gate) -> Snapshot {
        let next = self.rho.conjugate_by(&gate.matrix());
        let snapshot = self.replace(next);
        debug!(%gate, purity = snapshot.purity, "applied gate");
        snapshot
    }

    /// Aplica dephasing com probabilidade `p`
    pub fn apply_dephasing(&mut self, p: f64) -> EngineResult<Snapshot> {
        if !p.is_finite() {
            return Err(EngineError::NonFinite("p"));
        }
        let tol = self.config.range_tolerance;
        if self.config.validate_ranges && !(-tol..=1.0 + tol).contains(&p) {
            return Err(EngineError::ProbabilityOutOfRange(p));
        }

        let next = self.rho.dephase(p);
        let snapshot = self.try_replace(next)?;
        debug!(p, purity = snapshot.purity, "applied dephasing");
        Ok(snapshot)
    }

    /// Reconstrói ρ a partir de um vetor de Bloch
    pub fn set_bloch(&mut self, x: f64, y: f64, z: f64) -> EngineResult<Snapshot> {
        for (name, v) in [("x", x), ("y", y), ("z", z)] {
            if !v.is_finite() {
                return Err(EngineError::NonFinite(name));
            }
        }
        let norm = (x * x + y * y + z * z).sqrt();
        if self.config.validate_ranges && norm > 1.0 + self.config.range_tolerance {
            return Err(EngineError::BlochOutOfRange { x, y, z, norm });
        }

        let snapshot = self.try_replace(DensityMatrix::from_bloch(x, y, z))?;
        debug!(x, y, z, "set Bloch vector");
        Ok(snapshot)
    }

    /// Aplica um pedido do protocolo
    pub fn handle(&mut self, request: Request) -> EngineResult<Snapshot> {
        match request {
            Request::Reset => Ok(self.reset()),
            Request::Gate { gate } => Ok(self.apply_gate(gate)),
            Request::Dephase { p } => self.apply_dephasing(p),
            Request::SetBloch { x, y, z } => self.set_bloch(x, y, z),
            Request::Snapshot => Ok(self.snapshot()),
        }
    }

    /// Como [`handle`](Self::handle), mas sempre produz uma resposta
    pub fn respond(&mut self, request: Request) -> Response {
        match self.handle(request) {
            Ok(snapshot) => Response::State(snapshot),
            Err(err) => {
                warn!(error = %err, "request rejected");
                Response::from(err)
            }
        }
    }

    /// Como `replace`, mas recusa estados cujos observáveis não são finitos
    fn try_replace(&mut self, next: DensityMatrix) -> EngineResult<Snapshot> {
        if !next.snapshot().is_finite() {
            return Err(EngineError::StateOverflow);
        }
        Ok(self.replace(next))
    }

    fn replace(&mut self, next: DensityMatrix) -> Snapshot {
        self.rho = next;
        self.applied += 1;

        // Sem validação, ρ pode sair da esfera de propósito
        if self.config.validate_ranges {
            if let Err(violation) = self.rho.check_invariants(self.config.drift_tolerance) {
                warn!(%violation, applied = self.applied, "density matrix drifted");
            }
        }
        self.rho.snapshot()
    }
}

impl Default for QubitEngine {
    fn default() -> Self {
        Self::new()
    }
}
