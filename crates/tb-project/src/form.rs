//! Form-style input: repeated `surfaces=U,A,T` entries plus eight named
//! scalars, turned into a single [`RoomDef`].

use crate::schema::{InternalGainsDef, RoomDef, SurfaceDef, VentilationDef};

pub const SURFACES: &str = "surfaces";

/// Scalar fields every form submission must carry.
pub const SCALAR_FIELDS: [&str; 8] = [
    "lights_personnel",
    "equipment",
    "miscellaneous",
    "ventilation_flow_rate",
    "air_density",
    "specific_heat_capacity",
    "supply_air_temp",
    "room_temp",
];

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("Field '{field}' is not a number: '{value}'")]
    InvalidNumber { field: String, value: String },

    #[error("Surface '{value}' must be three comma-separated numbers (U,A,T_ext), found {found}")]
    SurfaceArity { value: String, found: usize },

    #[error("Missing field: {0}")]
    MissingField(&'static str),

    #[error("Field given more than once: {0}")]
    DuplicateField(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Expected key=value, got '{0}'")]
    Malformed(String),
}

/// Split `key=value` at the first `=`.
pub fn split_pair(raw: &str) -> Result<(&str, &str), FormError> {
    raw.split_once('=')
        .map(|(k, v)| (k.trim(), v.trim()))
        .filter(|(k, _)| !k.is_empty())
        .ok_or_else(|| FormError::Malformed(raw.to_string()))
}

/// Parse one `U,A,T_ext` triple.
pub fn parse_surface(raw: &str) -> Result<SurfaceDef, FormError> {
    let parts: Vec<&str> = raw.split(',').map(str::trim).collect();
    let [u, a, t] = parts.as_slice() else {
        return Err(FormError::SurfaceArity {
            value: raw.to_string(),
            found: parts.len(),
        });
    };
    Ok(SurfaceDef {
        label: None,
        u_value: number(SURFACES, u)?,
        area_m2: number(SURFACES, a)?,
        external_temp_c: number(SURFACES, t)?,
    })
}

/// Build a room from form fields. `surfaces` may repeat; blank surface
/// entries are skipped. Every scalar in [`SCALAR_FIELDS`] must appear once.
pub fn room_from_fields<'a, I>(fields: I) -> Result<RoomDef, FormError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut surfaces = Vec::new();
    let mut scalars: [Option<f64>; 8] = [None; 8];

    for (key, value) in fields {
        if key == SURFACES {
            if !value.trim().is_empty() {
                surfaces.push(parse_surface(value)?);
            }
            continue;
        }

        let idx = SCALAR_FIELDS
            .iter()
            .position(|f| *f == key)
            .ok_or_else(|| FormError::UnknownField(key.to_string()))?;
        if scalars[idx].is_some() {
            return Err(FormError::DuplicateField(key.to_string()));
        }
        scalars[idx] = Some(number(key, value)?);
    }

    let mut values = [0.0; 8];
    for (idx, slot) in scalars.iter().enumerate() {
        values[idx] = slot.ok_or(FormError::MissingField(SCALAR_FIELDS[idx]))?;
    }
    let [
        lights_personnel,
        equipment,
        miscellaneous,
        flow_rate,
        air_density,
        specific_heat_capacity,
        supply_air_temp,
        room_temp,
    ] = values;

    Ok(RoomDef {
        id: "form".to_string(),
        name: "Form input".to_string(),
        initial_room_temp_c: room_temp,
        surfaces,
        internal_gains: InternalGainsDef {
            lights_personnel_w: lights_personnel,
            equipment_w: equipment,
            miscellaneous_w: miscellaneous,
        },
        ventilation: VentilationDef {
            flow_rate,
            air_density,
            specific_heat_capacity,
            supply_air_temp_c: supply_air_temp,
        },
    })
}

fn number(field: &str, raw: &str) -> Result<f64, FormError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| FormError::InvalidNumber {
            field: field.to_string(),
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_form() -> Vec<(&'static str, &'static str)> {
        vec![
            ("surfaces", "1, 10, 30"),
            ("surfaces", "0.35,12,-5"),
            ("lights_personnel", "400"),
            ("equipment", "250"),
            ("miscellaneous", "50"),
            ("ventilation_flow_rate", "0.1"),
            ("air_density", "1.2"),
            ("specific_heat_capacity", "1005"),
            ("supply_air_temp", "18"),
            ("room_temp", "21"),
        ]
    }

    #[test]
    fn parses_complete_form() {
        let room = room_from_fields(full_form()).unwrap();
        assert_eq!(room.surfaces.len(), 2);
        assert_eq!(room.surfaces[0].u_value, 1.0);
        assert_eq!(room.surfaces[1].external_temp_c, -5.0);
        assert_eq!(room.internal_gains.equipment_w, 250.0);
        assert_eq!(room.ventilation.specific_heat_capacity, 1005.0);
        assert_eq!(room.initial_room_temp_c, 21.0);
    }

    #[test]
    fn surface_needs_three_values() {
        let err = parse_surface("1,2").unwrap_err();
        assert_eq!(
            err,
            FormError::SurfaceArity {
                value: "1,2".to_string(),
                found: 2
            }
        );
    }

    #[test]
    fn blank_surface_rows_skipped() {
        let mut form = full_form();
        form.push(("surfaces", "  "));
        assert_eq!(room_from_fields(form).unwrap().surfaces.len(), 2);
    }

    #[test]
    fn missing_and_unknown_fields() {
        let form: Vec<_> = full_form()
            .into_iter()
            .filter(|(k, _)| *k != "room_temp")
            .collect();
        assert_eq!(
            room_from_fields(form).unwrap_err(),
            FormError::MissingField("room_temp")
        );

        let mut form = full_form();
        form.push(("humidity", "0.5"));
        assert!(matches!(
            room_from_fields(form),
            Err(FormError::UnknownField(_))
        ));
    }

    #[test]
    fn duplicate_scalar_rejected() {
        let mut form = full_form();
        form.push(("equipment", "10"));
        assert_eq!(
            room_from_fields(form).unwrap_err(),
            FormError::DuplicateField("equipment".to_string())
        );
    }

    #[test]
    fn bad_number_names_field() {
        let mut form = full_form();
        form[2] = ("lights_personnel", "lots");
        let err = room_from_fields(form).unwrap_err();
        assert!(err.to_string().contains("lights_personnel"));
    }

    #[test]
    fn split_pair_trims() {
        assert_eq!(split_pair(" surfaces = 1,2,3 ").unwrap(), ("surfaces", "1,2,3"));
        assert!(split_pair("room_temp").is_err());
        assert!(split_pair("=5").is_err());
    }
}
