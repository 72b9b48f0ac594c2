//! Project validation logic.

use crate::schema::{Project, RoomDef, SolverDef, SurfaceDef};
use std::collections::HashSet;

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_project(project: &Project) -> Result<(), ValidationError> {
    if project.version > crate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: project.version,
        });
    }

    if let Some(solver) = &project.solver {
        validate_solver(solver)?;
    }

    let mut room_ids = HashSet::new();
    for room in &project.rooms {
        if !room_ids.insert(&room.id) {
            return Err(ValidationError::DuplicateId {
                id: room.id.clone(),
                context: "rooms".to_string(),
            });
        }
        validate_room(room)?;
    }

    Ok(())
}

fn validate_solver(solver: &SolverDef) -> Result<(), ValidationError> {
    if let Some(tol) = solver.tolerance
        && (!tol.is_finite() || tol < 0.0)
    {
        return Err(ValidationError::InvalidValue {
            field: "solver tolerance".to_string(),
            value: tol.to_string(),
            reason: "must be non-negative and finite".to_string(),
        });
    }
    Ok(())
}

pub fn validate_room(room: &RoomDef) -> Result<(), ValidationError> {
    if room.id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: format!("room '{}' id", room.name),
            value: room.id.clone(),
            reason: "must not be empty".to_string(),
        });
    }

    finite(room, "initial_room_temp_c", room.initial_room_temp_c)?;

    for (idx, surface) in room.surfaces.iter().enumerate() {
        validate_surface(room, idx, surface)?;
    }

    let gains = &room.internal_gains;
    finite(room, "lights_personnel_w", gains.lights_personnel_w)?;
    finite(room, "equipment_w", gains.equipment_w)?;
    finite(room, "miscellaneous_w", gains.miscellaneous_w)?;

    let vent = &room.ventilation;
    finite(room, "ventilation flow_rate", vent.flow_rate)?;
    finite(room, "ventilation air_density", vent.air_density)?;
    finite(
        room,
        "ventilation specific_heat_capacity",
        vent.specific_heat_capacity,
    )?;
    finite(room, "ventilation supply_air_temp_c", vent.supply_air_temp_c)?;

    Ok(())
}

fn validate_surface(room: &RoomDef, idx: usize, surface: &SurfaceDef) -> Result<(), ValidationError> {
    let name = surface
        .label
        .clone()
        .unwrap_or_else(|| format!("#{}", idx));
    for (what, value) in [
        ("u_value", surface.u_value),
        ("area_m2", surface.area_m2),
        ("external_temp_c", surface.external_temp_c),
    ] {
        if !value.is_finite() {
            return Err(ValidationError::InvalidValue {
                field: format!("room '{}' surface {} {}", room.id, name, what),
                value: value.to_string(),
                reason: "must be finite".to_string(),
            });
        }
    }
    Ok(())
}

fn finite(room: &RoomDef, field: &str, value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::InvalidValue {
            field: format!("room '{}' {}", room.id, field),
            value: value.to_string(),
            reason: "must be finite".to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{InternalGainsDef, VentilationDef};

    fn room(id: &str) -> RoomDef {
        RoomDef {
            id: id.to_string(),
            name: "Office".to_string(),
            initial_room_temp_c: 21.0,
            surfaces: vec![SurfaceDef {
                label: Some("north wall".to_string()),
                u_value: 0.35,
                area_m2: 12.0,
                external_temp_c: -5.0,
            }],
            internal_gains: InternalGainsDef::default(),
            ventilation: VentilationDef {
                flow_rate: 0.1,
                air_density: 1.2,
                specific_heat_capacity: 1005.0,
                supply_air_temp_c: 18.0,
            },
        }
    }

    fn project(rooms: Vec<RoomDef>) -> Project {
        Project {
            version: 1,
            name: "Test".to_string(),
            solver: None,
            rooms,
        }
    }

    #[test]
    fn accepts_valid_room() {
        validate_project(&project(vec![room("a"), room("b")])).unwrap();
    }

    #[test]
    fn rejects_duplicate_room_ids() {
        let err = validate_project(&project(vec![room("a"), room("a")])).unwrap_err();
        assert!(matches!(err, ValidationError::DuplicateId { .. }));
    }

    #[test]
    fn rejects_future_version() {
        let mut p = project(vec![]);
        p.version = crate::LATEST_VERSION + 1;
        assert!(matches!(
            validate_project(&p),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn accepts_zero_and_negative_ventilation() {
        // The solver decides what a zero capacity rate means.
        let mut r = room("a");
        r.ventilation.flow_rate = 0.0;
        validate_room(&r).unwrap();
        r.ventilation.flow_rate = -0.01;
        r.surfaces[0].u_value = -0.35;
        validate_room(&r).unwrap();
    }

    #[test]
    fn rejects_non_finite_flow() {
        let mut r = room("a");
        r.ventilation.flow_rate = f64::NAN;
        let err = validate_room(&r).unwrap_err();
        assert!(err.to_string().contains("flow_rate"));
    }

    #[test]
    fn rejects_infinite_area_with_label() {
        let mut r = room("a");
        r.surfaces[0].area_m2 = f64::INFINITY;
        let err = validate_room(&r).unwrap_err();
        assert!(err.to_string().contains("north wall area_m2"));
    }

    #[test]
    fn rejects_negative_tolerance() {
        let mut p = project(vec![room("a")]);
        p.solver = Some(SolverDef {
            tolerance: Some(-1.0),
            max_iterations: None,
        });
        assert!(validate_project(&p).is_err());
    }
}
