use simulation::sweep::RevenueSweep;
use types::errors::CommissionError;
use types::numeric::Revenue;

use crate::config::GatewayConfig;

#[derive(Clone)]
pub struct AppState {
    /// Accepted revenue range; also the x-axis of every chart series
    pub sweep: RevenueSweep,
}

impl AppState {
    pub fn new(config: &GatewayConfig) -> Self {
        Self {
            sweep: config.sweep,
        }
    }

    /// Parse a client-supplied revenue and check it against the accepted range.
    pub fn parse_revenue(&self, raw: &str) -> Result<Revenue, CommissionError> {
        let revenue: Revenue = raw.parse()?;
        if !self.sweep.contains(revenue) {
            return Err(CommissionError::invalid_input(format!(
                "revenue {} outside accepted range [{}, {}]",
                revenue, self.sweep.start, self.sweep.end
            )));
        }
        Ok(revenue)
    }
}
