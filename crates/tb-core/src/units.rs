// tb-core/src/units.rs

use uom::si::f64::{Power as UomPower, ThermodynamicTemperature as UomThermodynamicTemperature};

// Public canonical unit types (SI, f64)
pub type Power = UomPower;
pub type Temperature = UomThermodynamicTemperature;

#[inline]
pub fn celsius(v: f64) -> Temperature {
    use uom::si::thermodynamic_temperature::degree_celsius;
    Temperature::new::<degree_celsius>(v)
}

#[inline]
pub fn watts(v: f64) -> Power {
    use uom::si::power::watt;
    Power::new::<watt>(v)
}

/// Temperature expressed in degrees Celsius.
#[inline]
pub fn to_celsius(t: Temperature) -> f64 {
    use uom::si::thermodynamic_temperature::degree_celsius;
    t.get::<degree_celsius>()
}

#[inline]
pub fn to_watts(p: Power) -> f64 {
    use uom::si::power::watt;
    p.get::<watt>()
}

pub mod constants {
    /// Dry air near 20 °C at sea level.
    pub const AIR_DENSITY_KG_M3: f64 = 1.2;
    pub const AIR_CP_J_KGK: f64 = 1005.0;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_roundtrip() {
        assert!((to_celsius(celsius(21.5)) - 21.5).abs() < 1e-9);
        assert!((to_watts(watts(-350.0)) + 350.0).abs() < 1e-12);
    }

    #[test]
    fn celsius_is_offset_from_kelvin() {
        use uom::si::thermodynamic_temperature::kelvin;
        assert!((celsius(0.0).get::<kelvin>() - 273.15).abs() < 1e-9);
    }
}
