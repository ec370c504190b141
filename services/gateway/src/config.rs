use std::collections::HashMap;
use std::env;
use std::net::SocketAddr;

use anyhow::{Context, Result};
use simulation::sweep::{DEFAULT_SWEEP_MAX, DEFAULT_SWEEP_STEP, RevenueSweep};

/// Gateway settings, read from `GATEWAY_*` environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GatewayConfig {
    pub bind_addr: SocketAddr,
    /// Revenue range accepted from clients and walked for chart series
    pub sweep: RevenueSweep,
    /// `tracing_subscriber::EnvFilter` directive used when `RUST_LOG` is unset
    pub log_filter: String,
}

impl GatewayConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_map(&env::vars().collect())
    }

    pub fn from_map(vars: &HashMap<String, String>) -> Result<Self> {
        let bind_addr = get(vars, "GATEWAY_BIND_ADDR", "0.0.0.0:8080");
        let bind_addr: SocketAddr = bind_addr
            .parse()
            .with_context(|| format!("GATEWAY_BIND_ADDR is not a socket address: {}", bind_addr))?;

        let sweep_max = parse_u64(vars, "GATEWAY_SWEEP_MAX", DEFAULT_SWEEP_MAX)?;
        let sweep_step = parse_u64(vars, "GATEWAY_SWEEP_STEP", DEFAULT_SWEEP_STEP)?;
        let sweep = RevenueSweep::new(0, sweep_max, sweep_step).context("invalid revenue sweep")?;

        Ok(Self {
            bind_addr,
            sweep,
            log_filter: get(vars, "GATEWAY_LOG", "info"),
        })
    }
}

fn get(vars: &HashMap<String, String>, key: &str, default: &str) -> String {
    vars.get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
        .unwrap_or(default)
        .to_string()
}

fn parse_u64(vars: &HashMap<String, String>, key: &str, default: u64) -> Result<u64> {
    match vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty()) {
        Some(raw) => raw
            .parse()
            .with_context(|| format!("{} must be a non-negative integer, got {}", key, raw)),
        None => Ok(default),
    }
}
