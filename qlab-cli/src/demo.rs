//! Canned request sequences

use anyhow::Result;
use clap::ValueEnum;
use colored::*;
use qlab_engine::{EngineChannel, EngineConfig, Gate, Request, Response};

/// Demo sequences
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum DemoKind {
    /// Reset, then H: the |+⟩ state on the equator
    Plus,
    /// Reset, H, then dephase with p = 0.5: the maximally mixed state
    Dephase,
}

impl DemoKind {
    /// Requests sent by this demo, in order
    pub fn script(self) -> Vec<Request> {
        let mut script = vec![Request::Reset, Request::Gate { gate: Gate::H }];
        if self == DemoKind::Dephase {
            script.push(Request::Dephase { p: 0.5 });
        }
        script
    }
}

/// Run a demo and print one row per response
pub async fn run(kind: DemoKind, config: EngineConfig) -> Result<()> {
    let mut channel = EngineChannel::spawn(config);

    println!(
        "{}",
        format!(
            "{:<10} {:>8} {:>8} {:>8} {:>8} {:>8}",
            "request", "⟨X⟩", "⟨Y⟩", "⟨Z⟩", "purity", "|r|"
        )
        .bold()
    );

    for request in kind.script() {
        let label = describe(&request);
        match channel.request(request).await? {
            Response::State(s) => println!(
                "{:<10} {:>8.3} {:>8.3} {:>8.3} {:>8.3} {:>8.3}",
                label.cyan(),
                s.x,
                s.y,
                s.z,
                s.purity,
                s.radius()
            ),
            Response::Error { message } => println!("{:<10} {}", label.cyan(), message.red()),
        }
    }

    channel.shutdown().await;
    Ok(())
}

fn describe(request: &Request) -> String {
    match request {
        Request::Gate { gate } => format!("gate {gate}"),
        Request::Dephase { p } => format!("dephase {p}"),
        other => other.kind().to_string(),
    }
}
