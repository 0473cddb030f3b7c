//! JSON-lines transport over stdin/stdout

use anyhow::{Context, Result};
use qlab_engine::{EngineChannel, EngineConfig, Request, Response};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{info, warn};

/// Serve requests until stdin closes
pub async fn run(config: EngineConfig) -> Result<()> {
    info!("serving JSON-lines requests on stdin");
    run_with(config, BufReader::new(tokio::io::stdin()), tokio::io::stdout()).await
}

/// Serve requests from any line reader until it reaches EOF
pub async fn run_with<R, W>(config: EngineConfig, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut channel = EngineChannel::spawn(config);
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await.context("reading request")? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        // Linhas inválidas também recebem resposta, para manter o pareamento
        let response = match decode_request(line) {
            Ok(request) => channel.request(request).await?,
            Err(response) => response,
        };

        let encoded = encode_response(&response)?;
        writer
            .write_all(encoded.as_bytes())
            .await
            .context("writing response")?;
        writer.flush().await.context("flushing response")?;
    }

    if let Some(engine) = channel.shutdown().await {
        info!(applied = engine.applied(), "input closed, engine stopped");
    }
    Ok(())
}

/// Decodes one line; failures become an `error` response
pub fn decode_request(line: &str) -> Result<Request, Response> {
    serde_json::from_str(line).map_err(|err| {
        warn!(error = %err, "undecodable request");
        Response::Error {
            message: format!("Invalid request: {err}"),
        }
    })
}

/// Encodes one response as a newline-terminated JSON line
pub fn encode_response(response: &Response) -> Result<String> {
    let mut encoded = serde_json::to_string(response).context("encoding response")?;
    encoded.push('\n');
    Ok(encoded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use qlab_engine::{Gate, Snapshot};

    #[test]
    fn test_decode_valid_line() {
        let request = decode_request(r#"{"type":"gate","gate":"H"}"#).unwrap();
        assert_eq!(request, Request::Gate { gate: Gate::H });
    }

    #[test]
    fn test_decode_unknown_gate_is_error_response() {
        let response = decode_request(r#"{"type":"gate","gate":"S"}"#).unwrap_err();
        match response {
            Response::Error { message } => assert!(message.contains("Unknown gate")),
            other => panic!("expected error response, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_garbage() {
        assert!(decode_request("not json").unwrap_err().is_error());
    }

    #[test]
    fn test_encode_is_single_line() {
        let encoded = encode_response(&Response::State(Snapshot::GROUND)).unwrap();
        assert!(encoded.ends_with('\n'));
        assert_eq!(encoded.matches('\n').count(), 1);
        assert!(encoded.starts_with(r#"{"kind":"state""#));
    }

    #[tokio::test]
    async fn test_session_answers_every_line_in_order() {
        let input = concat!(
            "{\"type\":\"reset\"}\n",
            "\n",
            "{\"type\":\"gate\",\"gate\":\"H\"}\n",
            "{\"type\":\"gate\",\"gate\":\"S\"}\n",
            "not json\n",
            "{\"type\":\"dephase\",\"p\":0.5}\n",
            "{\"type\":\"snapshot\"}\n",
        );
        let mut output = Vec::new();

        run_with(EngineConfig::default(), input.as_bytes(), &mut output)
            .await
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        let responses: Vec<Response> = output
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();

        // Linha em branco é ignorada; as demais têm uma resposta cada
        assert_eq!(responses.len(), 6);
        assert_eq!(responses[0], Response::State(Snapshot::GROUND));
        assert!((responses[1].snapshot().unwrap().x - 1.0).abs() < 1e-9);
        assert!(responses[2].is_error());
        assert!(responses[3].is_error());
        let mixed = responses[4].snapshot().unwrap();
        assert!(mixed.radius() < 1e-9);
        assert_eq!(responses[5].snapshot(), Some(mixed));
    }

    #[tokio::test]
    async fn test_unchecked_overflow_is_error_line() {
        let input = "{\"type\":\"setBloch\",\"x\":1e200,\"y\":0,\"z\":0}\n";
        let mut output = Vec::new();

        run_with(EngineConfig::default().unchecked(), input.as_bytes(), &mut output)
            .await
            .unwrap();

        let output = String::from_utf8(output).unwrap();
        assert!(!output.contains("null"));
        let response: Response = serde_json::from_str(output.trim_end()).unwrap();
        assert!(response.is_error());
    }
}
