//! Configuração do engine
//!
//! Valores vêm de variáveis de ambiente (ou de um `.env`), com defaults
//! quando ausentes ou inválidos:
//!
//! - `QLAB_CHANNEL_CAPACITY`: tamanho da fila de pedidos do canal de comandos (default: 64)
//! - `QLAB_VALIDATE_RANGES`: rejeita `p` fora de [0, 1] e |r| > 1 (default: true)
//! - `QLAB_RANGE_TOLERANCE`: folga aceita nas checagens de faixa (default: 1e-9)
//! - `QLAB_DRIFT_TOLERANCE`: drift máximo dos invariantes antes de logar (default: 1e-6)

use std::env;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

static DOTENV_INIT: Lazy<()> = Lazy::new(|| {
    let _ = dotenv::dotenv();
});

#[inline]
fn ensure_loaded() {
    let _ = &*DOTENV_INIT;
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.trim().parse().ok())
        .unwrap_or(default)
}

/// Configuração do engine e do canal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Capacidade da fila de pedidos
    pub channel_capacity: usize,
    /// Validar faixas numéricas antes de aplicar
    pub validate_ranges: bool,
    /// Folga nas checagens de faixa
    pub range_tolerance: f64,
    /// Drift aceitável de traço/hermiticidade/pureza
    pub drift_tolerance: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            channel_capacity: 64,
            validate_ranges: true,
            range_tolerance: 1e-9,
            drift_tolerance: 1e-6,
        }
    }
}

impl EngineConfig {
    /// Carrega configuração do ambiente
    pub fn from_env() -> Self {
        ensure_loaded();
        let defaults = Self::default();

        let validate_ranges = env::var("QLAB_VALIDATE_RANGES")
            .map(|s| {
                let s = s.trim();
                s != "false" && s != "0"
            })
            .unwrap_or(defaults.validate_ranges);

        Self {
            channel_capacity: env_or("QLAB_CHANNEL_CAPACITY", defaults.channel_capacity).max(1),
            validate_ranges,
            range_tolerance: env_or("QLAB_RANGE_TOLERANCE", defaults.range_tolerance),
            drift_tolerance: env_or("QLAB_DRIFT_TOLERANCE", defaults.drift_tolerance),
        }
    }

    /// Desliga validação de faixas
    pub fn unchecked(mut self) -> Self {
        self.validate_ranges = false;
        self
    }

    /// Define capacidade do canal
    pub fn with_capacity(mut self, capacity: usize) -> Self {
        self.channel_capacity = capacity.max(1);
        self
    }
}
