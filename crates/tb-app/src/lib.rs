//! Shared application service layer for thermobalance.
//!
//! Frontends go through this crate to load room definitions, turn them into
//! solver inputs, run balance solves and render reports.

pub mod balance_service;
pub mod error;
pub mod project_service;
pub mod report;

pub use balance_service::{
    RunOptions, build_room_model, resolve_config, solve_form, solve_project, solve_room,
};
pub use error::{AppError, AppResult};
pub use project_service::{RoomSummary, get_room, list_rooms, load_project, validate_project};
pub use report::{Outcome, RoomOutcome, RoomReport, render_json, render_text};
