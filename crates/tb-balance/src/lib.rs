//! Steady-state room heat balance solver.
//!
//! A room is described by its envelope surfaces, constant internal gains and a
//! ventilation supply. The solver adjusts the room temperature by successive
//! substitution until the envelope, internal and ventilation gains cancel
//! within a tolerance, or until the iteration cap is reached.

pub mod config;
pub mod error;
pub mod room;
pub mod solve;
pub mod surface;

pub use config::BalanceConfig;
pub use error::{BalanceError, BalanceResult};
pub use room::{BalanceState, InternalGains, RoomModel, Ventilation};
pub use solve::{BalanceSolution, Termination};
pub use surface::Surface;
