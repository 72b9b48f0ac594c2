//! Building solver inputs from room definitions and running solves.

use tb_balance::{BalanceConfig, InternalGains, RoomModel, Surface, Ventilation};
use tb_project::schema::{Project, RoomDef, SolverDef};

use crate::error::{AppError, AppResult};
use crate::project_service::get_room;
use crate::report::{RoomOutcome, RoomReport};

/// Caller overrides, applied on top of the project's `solver` section.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunOptions {
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
}

/// Defaults, then project settings, then caller overrides.
pub fn resolve_config(
    project_solver: Option<&SolverDef>,
    options: &RunOptions,
) -> AppResult<BalanceConfig> {
    let mut config = BalanceConfig::default();
    if let Some(solver) = project_solver {
        if let Some(tol) = solver.tolerance {
            config = config.with_tolerance(tol);
        }
        if let Some(max) = solver.max_iterations {
            config = config.with_max_iterations(max);
        }
    }
    if let Some(tol) = options.tolerance {
        config = config.with_tolerance(tol);
    }
    if let Some(max) = options.max_iterations {
        config = config.with_max_iterations(max);
    }
    config.validate()?;
    Ok(config)
}

pub fn build_room_model(room: &RoomDef) -> AppResult<RoomModel> {
    let surfaces = room
        .surfaces
        .iter()
        .map(|s| Surface::new(s.u_value, s.area_m2, s.external_temp_c))
        .collect();
    let gains = InternalGains::new(
        room.internal_gains.lights_personnel_w,
        room.internal_gains.equipment_w,
        room.internal_gains.miscellaneous_w,
    );
    let vent = &room.ventilation;
    let ventilation = Ventilation::new(
        vent.flow_rate,
        vent.air_density,
        vent.specific_heat_capacity,
        vent.supply_air_temp_c,
    );
    Ok(RoomModel::new(surfaces, gains, ventilation)?)
}

/// Log inputs that are finite but physically unusual. These still go to the
/// solver, which only rejects a zero capacity rate.
fn warn_unphysical(room: &RoomDef) {
    let vent = &room.ventilation;
    for (field, value) in [
        ("flow_rate", vent.flow_rate),
        ("air_density", vent.air_density),
        ("specific_heat_capacity", vent.specific_heat_capacity),
    ] {
        if value <= 0.0 {
            tracing::warn!(room = %room.id, field, value, "ventilation parameter is not positive");
        }
    }
    for (idx, s) in room.surfaces.iter().enumerate() {
        if s.u_value < 0.0 || s.area_m2 < 0.0 {
            tracing::warn!(
                room = %room.id,
                surface = idx,
                u_value = s.u_value,
                area_m2 = s.area_m2,
                "surface has a negative U-value or area"
            );
        }
    }
}

/// Validate and solve a single room.
pub fn solve_room(room: &RoomDef, config: &BalanceConfig) -> AppResult<RoomReport> {
    tb_project::validate_room(room)?;
    warn_unphysical(room);
    let model = build_room_model(room)?;
    tracing::info!(room = %room.id, surfaces = room.surfaces.len(), "solving room balance");
    let solution = model.find_balance(room.initial_room_temp_c, config)?;
    Ok(RoomReport::new(room, &solution, config))
}

/// Solve every room in the project, or only `room_id` when given. Rooms are
/// independent; a failure is recorded in that room's entry.
pub fn solve_project(
    project: &Project,
    room_id: Option<&str>,
    options: &RunOptions,
) -> AppResult<Vec<RoomOutcome>> {
    let config = resolve_config(project.solver.as_ref(), options)?;

    let rooms: Vec<&RoomDef> = match room_id {
        Some(id) => vec![get_room(project, id)?],
        None => project.rooms.iter().collect(),
    };

    let outcomes = rooms
        .into_iter()
        .map(|room| match solve_room(room, &config) {
            Ok(report) => RoomOutcome::Solved(report),
            Err(e) => {
                tracing::warn!(room = %room.id, error = %e, "room solve failed");
                RoomOutcome::Failed {
                    room_id: room.id.clone(),
                    error: e.to_string(),
                }
            }
        })
        .collect();
    Ok(outcomes)
}

/// Solve a room given as form fields (see [`tb_project::form`]).
pub fn solve_form<'a, I>(fields: I, options: &RunOptions) -> AppResult<RoomReport>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let room = tb_project::room_from_fields(fields)?;
    let config = resolve_config(None, options)?;
    solve_room(&room, &config).map_err(|e| match e {
        AppError::Validation(msg) => AppError::Form(msg),
        other => other,
    })
}
