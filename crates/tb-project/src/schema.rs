//! Project schema definitions.

use serde::{Deserialize, Serialize};
use tb_core::units::constants::{AIR_CP_J_KGK, AIR_DENSITY_KG_M3};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub version: u32,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solver: Option<SolverDef>,
    #[serde(default)]
    pub rooms: Vec<RoomDef>,
}

/// Overrides for the balance solver defaults.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct SolverDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tolerance: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_iterations: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RoomDef {
    pub id: String,
    pub name: String,
    pub initial_room_temp_c: f64,
    #[serde(default)]
    pub surfaces: Vec<SurfaceDef>,
    #[serde(default)]
    pub internal_gains: InternalGainsDef,
    pub ventilation: VentilationDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SurfaceDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    pub u_value: f64,
    pub area_m2: f64,
    pub external_temp_c: f64,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq)]
pub struct InternalGainsDef {
    #[serde(default)]
    pub lights_personnel_w: f64,
    #[serde(default)]
    pub equipment_w: f64,
    #[serde(default)]
    pub miscellaneous_w: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct VentilationDef {
    pub flow_rate: f64,
    #[serde(default = "default_air_density")]
    pub air_density: f64,
    #[serde(default = "default_specific_heat_capacity")]
    pub specific_heat_capacity: f64,
    pub supply_air_temp_c: f64,
}

fn default_air_density() -> f64 {
    AIR_DENSITY_KG_M3
}

fn default_specific_heat_capacity() -> f64 {
    AIR_CP_J_KGK
}

impl Project {
    pub fn room(&self, id: &str) -> Option<&RoomDef> {
        self.rooms.iter().find(|r| r.id == id)
    }
}
