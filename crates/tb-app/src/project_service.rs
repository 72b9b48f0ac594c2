//! Project loading, validation and introspection.

use std::path::Path;
use tb_project::schema::{Project, RoomDef};

use crate::error::{AppError, AppResult};

/// Summary of a room for listing.
#[derive(Debug, Clone)]
pub struct RoomSummary {
    pub id: String,
    pub name: String,
    pub surface_count: usize,
    pub envelope_area_m2: f64,
}

/// Load a project file (JSON by `.json` extension, YAML otherwise) and
/// validate it.
pub fn load_project(path: &Path) -> AppResult<Project> {
    let project = tb_project::load(path).map_err(|e| match e {
        tb_project::ProjectError::Io(source) => AppError::ProjectFileRead {
            path: path.to_path_buf(),
            source,
        },
        other => AppError::from(other),
    })?;
    tracing::debug!(path = %path.display(), rooms = project.rooms.len(), "loaded project");
    Ok(project)
}

/// Validate project structure.
pub fn validate_project(project: &Project) -> AppResult<()> {
    if project.rooms.is_empty() {
        return Err(AppError::Validation(
            "Project must have at least one room".to_string(),
        ));
    }
    tb_project::validate_project(project)?;
    Ok(())
}

/// List all rooms in the project with summaries.
pub fn list_rooms(project: &Project) -> Vec<RoomSummary> {
    project
        .rooms
        .iter()
        .map(|room| RoomSummary {
            id: room.id.clone(),
            name: room.name.clone(),
            surface_count: room.surfaces.len(),
            envelope_area_m2: room.surfaces.iter().map(|s| s.area_m2).sum(),
        })
        .collect()
}

/// Get a specific room by ID.
pub fn get_room<'a>(project: &'a Project, room_id: &str) -> AppResult<&'a RoomDef> {
    project
        .room(room_id)
        .ok_or_else(|| AppError::RoomNotFound(room_id.to_string()))
}
