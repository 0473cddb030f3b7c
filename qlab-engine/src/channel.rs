//! Canal de comandos assíncrono
//!
//! Um único worker (task tokio) é dono do [`QubitEngine`] e drena a fila de
//! pedidos em ordem, processando cada um até o fim antes do próximo. Para
//! cada pedido sai exatamente uma [`Response`] na fila de respostas, na mesma
//! ordem de chegada.
//!
//! A fila de pedidos é limitada por `channel_capacity` (backpressure no
//! chamador); a de respostas não tem limite, então o worker nunca bloqueia
//! ao responder e um chamador pode enviar tudo antes de ler.
//!
//! ```text
//! caller ──Request──▶ mpsc ──▶ worker(QubitEngine) ──▶ mpsc ──Response──▶ caller
//! ```

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::config::EngineConfig;
use crate::engine::QubitEngine;
use crate::error::{EngineError, EngineResult};
use crate::protocol::{Request, Response};

/// Lado emissor de pedidos (clonável)
#[derive(Debug, Clone)]
pub struct RequestSender {
    tx: mpsc::Sender<Request>,
}

impl RequestSender {
    /// Enfileira um pedido
    pub async fn send(&self, request: Request) -> EngineResult<()> {
        self.tx
            .send(request)
            .await
            .map_err(|_| EngineError::ChannelClosed)
    }
}

/// Ponta do chamador: pedidos saem, respostas voltam em ordem
pub struct EngineChannel {
    requests: RequestSender,
    responses: mpsc::UnboundedReceiver<Response>,
    worker: JoinHandle<QubitEngine>,
}

impl EngineChannel {
    /// Sobe o worker com um engine novo no estado fundamental
    ///
    /// Precisa rodar dentro de um runtime tokio.
    pub fn spawn(config: EngineConfig) -> Self {
        Self::spawn_with(QubitEngine::with_config(config))
    }

    /// Sobe o worker com um engine já existente
    pub fn spawn_with(engine: QubitEngine) -> Self {
        let capacity = engine.config().channel_capacity.max(1);
        let (req_tx, req_rx) = mpsc::channel(capacity);
        let (resp_tx, resp_rx) = mpsc::unbounded_channel();

        let worker = tokio::spawn(run_worker(engine, req_rx, resp_tx));

        Self {
            requests: RequestSender { tx: req_tx },
            responses: resp_rx,
            worker,
        }
    }

    /// Emissor clonável para outras tasks
    pub fn sender(&self) -> RequestSender {
        self.requests.clone()
    }

    /// Enfileira um pedido sem esperar resposta
    pub async fn send(&self, request: Request) -> EngineResult<()> {
        self.requests.send(request).await
    }

    /// Próxima resposta; `None` quando o worker terminou
    pub async fn recv(&mut self) -> Option<Response> {
        self.responses.recv().await
    }

    /// Envia e espera a resposta correspondente
    ///
    /// Só pareia corretamente se não houver pedidos em voo de outros emissores.
    pub async fn request(&mut self, request: Request) -> EngineResult<Response> {
        self.send(request).await?;
        self.recv().await.ok_or(EngineError::ChannelClosed)
    }

    /// Fecha a fila de pedidos e devolve o engine final
    ///
    /// Respostas ainda não lidas são descartadas. Espera até todos os
    /// [`RequestSender`] clonados serem descartados. Retorna `None` se o
    /// worker entrou em pânico.
    pub async fn shutdown(self) -> Option<QubitEngine> {
        let Self {
            requests,
            responses,
            worker,
        } = self;
        drop(requests);
        drop(responses);
        worker.await.ok()
    }
}

/// Loop do worker: um pedido por vez, uma resposta por pedido
async fn run_worker(
    mut engine: QubitEngine,
    mut requests: mpsc::Receiver<Request>,
    responses: mpsc::UnboundedSender<Response>,
) -> QubitEngine {
    info!("qubit engine worker started");

    while let Some(request) = requests.recv().await {
        let kind = request.kind();
        let mutation = request.is_mutation();
        let response = engine.respond(request);
        debug!(kind, mutation, error = response.is_error(), "request processed");

        if responses.send(response).is_err() {
            // Ninguém mais escuta
            break;
        }
    }

    info!(applied = engine.applied(), "qubit engine worker stopped");
    engine
}
