//! Solve reports for frontends.

use serde::Serialize;
use tb_balance::{BalanceConfig, BalanceSolution, Termination};
use tb_core::to_watts;
use tb_project::schema::RoomDef;

use crate::error::AppResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Converged,
    IterationCapReached,
}

impl From<Termination> for Outcome {
    fn from(t: Termination) -> Self {
        match t {
            Termination::Converged => Outcome::Converged,
            Termination::IterationCapReached => Outcome::IterationCapReached,
        }
    }
}

/// Result of one room solve.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RoomReport {
    pub room_id: String,
    pub room_name: String,
    pub final_room_temp_c: f64,
    pub total_heat_gain_w: f64,
    pub ventilation_heat_gain_w: f64,
    pub required_reheat_w: f64,
    pub iterations: usize,
    pub max_iterations: usize,
    pub outcome: Outcome,
}

impl RoomReport {
    pub fn new(room: &RoomDef, solution: &BalanceSolution, config: &BalanceConfig) -> Self {
        Self {
            room_id: room.id.clone(),
            room_name: room.name.clone(),
            final_room_temp_c: solution.room_temp(),
            total_heat_gain_w: solution.total_heat_gain(),
            ventilation_heat_gain_w: solution.ventilation_heat_gain(),
            required_reheat_w: to_watts(solution.required_reheat()),
            iterations: solution.iterations,
            max_iterations: config.max_iterations,
            outcome: solution.termination.into(),
        }
    }

    pub fn converged(&self) -> bool {
        self.outcome == Outcome::Converged
    }
}

/// Per-room entry in a project run. A failing room does not stop the others.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RoomOutcome {
    Solved(RoomReport),
    Failed { room_id: String, error: String },
}

impl RoomOutcome {
    pub fn room_id(&self) -> &str {
        match self {
            RoomOutcome::Solved(report) => &report.room_id,
            RoomOutcome::Failed { room_id, .. } => room_id,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RoomOutcome::Failed { .. })
    }
}

pub fn render_json(outcomes: &[RoomOutcome]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(outcomes)?)
}

pub fn render_text(outcome: &RoomOutcome) -> String {
    match outcome {
        RoomOutcome::Solved(r) => {
            let status = match r.outcome {
                Outcome::Converged => format!("converged in {} iterations", r.iterations),
                Outcome::IterationCapReached => format!(
                    "NOT converged: iteration cap {} reached",
                    r.max_iterations
                ),
            };
            format!(
                "{} - {}\n  Room temperature:      {:.3} °C\n  Total heat gain:       {:.3} W\n  Ventilation heat gain: {:.3} W\n  Required reheat:       {:.3} W\n  Status:                {}\n",
                r.room_id,
                r.room_name,
                r.final_room_temp_c,
                r.total_heat_gain_w,
                r.ventilation_heat_gain_w,
                r.required_reheat_w,
                status
            )
        }
        RoomOutcome::Failed { room_id, error } => {
            format!("{}\n  FAILED: {}\n", room_id, error)
        }
    }
}
