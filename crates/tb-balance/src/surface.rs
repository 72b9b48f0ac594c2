//! Envelope surfaces.

use tb_core::{Real, TbResult, ensure_finite};

/// One envelope surface: thermal transmittance, area and the temperature on
/// its far side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Surface {
    /// U-value, W/(m²·K)
    pub u_value: Real,
    /// Area, m²
    pub area: Real,
    /// External temperature, °C
    pub external_temp: Real,
}

impl Surface {
    pub fn new(u_value: Real, area: Real, external_temp: Real) -> Self {
        Self {
            u_value,
            area,
            external_temp,
        }
    }

    /// UA product, W/K.
    #[inline]
    pub fn conductance(&self) -> Real {
        self.u_value * self.area
    }

    /// Heat flowing into the room through this surface, W. Positive when the
    /// far side is warmer than the room.
    #[inline]
    pub fn heat_gain(&self, room_temp: Real) -> Real {
        self.conductance() * (self.external_temp - room_temp)
    }

    pub(crate) fn check_finite(&self) -> TbResult<()> {
        ensure_finite(self.u_value, "surface U-value")?;
        ensure_finite(self.area, "surface area")?;
        ensure_finite(self.external_temp, "surface external temperature")?;
        Ok(())
    }
}

impl From<(Real, Real, Real)> for Surface {
    fn from((u_value, area, external_temp): (Real, Real, Real)) -> Self {
        Self::new(u_value, area, external_temp)
    }
}
