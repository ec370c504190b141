//! Crossover analysis
//!
//! Finds the revenue intervals of a sweep where the better-paying model
//! changes, and the largest advantage each model reaches.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use types::numeric::Revenue;

use crate::sweep::ModelPoint;

/// Which model pays more at a given revenue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Leader {
    Tiered,
    Legacy,
    Even,
}

impl Leader {
    fn of(point: &ModelPoint) -> Self {
        match point.tiered.cmp(&point.legacy) {
            Ordering::Greater => Leader::Tiered,
            Ordering::Less => Leader::Legacy,
            Ordering::Equal => Leader::Even,
        }
    }
}

/// Leadership change between two consecutive sweep points.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Crossover {
    pub after_revenue: Revenue,
    pub at_revenue: Revenue,
    pub from: Leader,
    pub to: Leader,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrossoverReport {
    pub crossovers: Vec<Crossover>,
    /// Largest `tiered - legacy` and where it occurs
    pub max_tiered_advantage: Option<(Revenue, Decimal)>,
    /// Largest `legacy - tiered` and where it occurs
    pub max_legacy_advantage: Option<(Revenue, Decimal)>,
}

pub fn analyze(series: &[ModelPoint]) -> CrossoverReport {
    let mut crossovers = Vec::new();
    let mut last_decided: Option<(Revenue, Leader)> = None;
    let mut max_tiered: Option<(Revenue, Decimal)> = None;
    let mut max_legacy: Option<(Revenue, Decimal)> = None;

    for point in series {
        let leader = Leader::of(point);
        let gap = point.tiered - point.legacy;

        match leader {
            Leader::Tiered if max_tiered.map_or(true, |(_, best)| gap > best) => {
                max_tiered = Some((point.revenue, gap));
            }
            Leader::Legacy if max_legacy.map_or(true, |(_, best)| -gap > best) => {
                max_legacy = Some((point.revenue, -gap));
            }
            _ => {}
        }

        // Even points do not count as a change of leadership
        if leader == Leader::Even {
            continue;
        }
        if let Some((prev_revenue, prev_leader)) = last_decided {
            if prev_leader != leader {
                crossovers.push(Crossover {
                    after_revenue: prev_revenue,
                    at_revenue: point.revenue,
                    from: prev_leader,
                    to: leader,
                });
            }
        }
        last_decided = Some((point.revenue, leader));
    }

    CrossoverReport {
        crossovers,
        max_tiered_advantage: max_tiered,
        max_legacy_advantage: max_legacy,
    }
}
