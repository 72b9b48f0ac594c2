//! Fixed-point balance iteration.

use crate::config::BalanceConfig;
use crate::error::{BalanceError, BalanceResult};
use crate::room::{BalanceState, RoomModel};
use tb_core::{Power, Real, Temperature, ensure_finite, watts};
use tracing::{debug, info, warn};

/// Why the iteration stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Termination {
    /// `|required| <= tolerance`
    Converged,
    /// Iteration cap hit with the residual still above tolerance
    IterationCapReached,
}

/// Outcome of [`RoomModel::find_balance`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalanceSolution {
    /// State at the last iterate
    pub state: BalanceState,
    /// Number of temperature updates performed
    pub iterations: usize,
    pub termination: Termination,
}

impl BalanceSolution {
    pub fn converged(&self) -> bool {
        self.termination == Termination::Converged
    }

    pub fn room_temp(&self) -> Real {
        self.state.room_temp
    }

    pub fn total_heat_gain(&self) -> Real {
        self.state.total_heat_gain
    }

    pub fn ventilation_heat_gain(&self) -> Real {
        self.state.ventilation_heat_gain
    }

    pub fn required_power(&self) -> Real {
        self.state.required_power()
    }

    pub fn room_temperature(&self) -> Temperature {
        self.state.room_temperature()
    }

    pub fn required_reheat(&self) -> Power {
        watts(self.required_power())
    }

    /// `(room_temp, total_heat_gain, ventilation_heat_gain, iterations)`
    pub fn into_tuple(self) -> (Real, Real, Real, usize) {
        (
            self.state.room_temp,
            self.state.total_heat_gain,
            self.state.ventilation_heat_gain,
            self.iterations,
        )
    }
}

impl RoomModel {
    /// Iterate the room temperature from `initial_room_temp` until the
    /// required reheat is within `config.tolerance` or `config.max_iterations`
    /// updates have been made.
    ///
    /// Each update is `T += required / (ρ·cp·flow)`. Only the ventilation
    /// term's sensitivity to room temperature drives the correction, so
    /// convergence depends on the parameters. Hitting the cap is reported
    /// through [`Termination::IterationCapReached`], not as an error.
    ///
    /// # Errors
    /// * [`BalanceError::InvalidParameters`] if the config is invalid or the
    ///   ventilation capacity rate is zero.
    /// * [`BalanceError::Diverged`] if an iterate leaves the finite range.
    pub fn find_balance(
        &self,
        initial_room_temp: Real,
        config: &BalanceConfig,
    ) -> BalanceResult<BalanceSolution> {
        config.validate()?;
        ensure_finite(initial_room_temp, "initial room temperature")?;
        let capacity_rate = self.update_denominator()?;

        let mut state = self.evaluate(initial_room_temp);
        ensure_finite(state.required_power(), "required reheat")?;

        let mut iterations = 0;
        while state.required_power().abs() > config.tolerance
            && iterations < config.max_iterations
        {
            let room_temp = state.room_temp + state.required_power() / capacity_rate;
            state = self.evaluate(room_temp);
            iterations += 1;

            if !room_temp.is_finite() || !state.required_power().is_finite() {
                return Err(BalanceError::Diverged {
                    iteration: iterations,
                    room_temp,
                });
            }

            debug!(
                iteration = iterations,
                room_temp = state.room_temp,
                required = state.required_power(),
                "balance iteration"
            );
        }

        let termination = if state.required_power().abs() <= config.tolerance {
            info!(
                iterations,
                room_temp = state.room_temp,
                "room balance converged"
            );
            Termination::Converged
        } else {
            warn!(
                iterations,
                room_temp = state.room_temp,
                required = state.required_power(),
                "room balance hit iteration cap"
            );
            Termination::IterationCapReached
        };

        Ok(BalanceSolution {
            state,
            iterations,
            termination,
        })
    }
}
