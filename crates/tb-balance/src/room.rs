//! Room parameters and heat-gain evaluation.
//!
//! [`RoomModel`] holds everything that stays fixed for one solve. Evaluating it
//! at a room temperature yields a [`BalanceState`]; the solver folds over
//! states rather than mutating the model.

use crate::error::{BalanceError, BalanceResult};
use crate::surface::Surface;
use tb_core::{Real, TbResult, Temperature, celsius, ensure_finite};

/// Constant internal heat gains, W.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InternalGains {
    pub lights_personnel: Real,
    pub equipment: Real,
    pub miscellaneous: Real,
}

impl InternalGains {
    pub fn new(lights_personnel: Real, equipment: Real, miscellaneous: Real) -> Self {
        Self {
            lights_personnel,
            equipment,
            miscellaneous,
        }
    }

    #[inline]
    pub fn total(&self) -> Real {
        self.lights_personnel + self.equipment + self.miscellaneous
    }

    fn check_finite(&self) -> TbResult<()> {
        ensure_finite(self.lights_personnel, "lights and personnel gain")?;
        ensure_finite(self.equipment, "equipment gain")?;
        ensure_finite(self.miscellaneous, "miscellaneous gain")?;
        Ok(())
    }
}

/// Ventilation supply parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ventilation {
    /// Supply flow rate
    pub flow_rate: Real,
    /// Air density, kg/m³
    pub air_density: Real,
    /// Specific heat capacity, J/(kg·K)
    pub specific_heat_capacity: Real,
    /// Supply air temperature, °C
    pub supply_air_temp: Real,
}

impl Ventilation {
    pub fn new(
        flow_rate: Real,
        air_density: Real,
        specific_heat_capacity: Real,
        supply_air_temp: Real,
    ) -> Self {
        Self {
            flow_rate,
            air_density,
            specific_heat_capacity,
            supply_air_temp,
        }
    }

    /// Heat capacity rate of the supply air, W/K.
    #[inline]
    pub fn capacity_rate(&self) -> Real {
        self.air_density * self.specific_heat_capacity * self.flow_rate
    }

    /// Sensible heat delivered by the supply air, W.
    #[inline]
    pub fn heat_gain(&self, room_temp: Real) -> Real {
        self.flow_rate
            * self.air_density
            * self.specific_heat_capacity
            * (self.supply_air_temp - room_temp)
    }

    fn check_finite(&self) -> TbResult<()> {
        ensure_finite(self.flow_rate, "ventilation flow rate")?;
        ensure_finite(self.air_density, "air density")?;
        ensure_finite(self.specific_heat_capacity, "specific heat capacity")?;
        ensure_finite(self.supply_air_temp, "supply air temperature")?;
        Ok(())
    }
}

/// Fixed thermal description of a room.
#[derive(Clone, Debug, PartialEq)]
pub struct RoomModel {
    surfaces: Vec<Surface>,
    gains: InternalGains,
    ventilation: Ventilation,
}

impl RoomModel {
    /// Build a room model. All values must be finite.
    pub fn new(
        surfaces: Vec<Surface>,
        gains: InternalGains,
        ventilation: Ventilation,
    ) -> BalanceResult<Self> {
        for surface in &surfaces {
            surface.check_finite()?;
        }
        gains.check_finite()?;
        ventilation.check_finite()?;
        Ok(Self {
            surfaces,
            gains,
            ventilation,
        })
    }

    /// Envelope gain: Σ U·A·(T_ext − T_room), W.
    pub fn heat_gain_surfaces(&self, room_temp: Real) -> Real {
        self.surfaces.iter().map(|s| s.heat_gain(room_temp)).sum()
    }

    /// Ventilation gain: flow·ρ·cp·(T_supply − T_room), W.
    pub fn heat_gain_ventilation(&self, room_temp: Real) -> Real {
        self.ventilation.heat_gain(room_temp)
    }

    /// Returns `(total, ventilation)`.
    ///
    /// `total` is the envelope gain plus the internal gains. The ventilation
    /// gain is reported on its own and is not part of `total`.
    pub fn total_heat_gain(&self, room_temp: Real) -> (Real, Real) {
        let total = self.heat_gain_surfaces(room_temp) + self.gains.total();
        (total, self.heat_gain_ventilation(room_temp))
    }

    /// Evaluate all gains at `room_temp`.
    pub fn evaluate(&self, room_temp: Real) -> BalanceState {
        let (total_heat_gain, ventilation_heat_gain) = self.total_heat_gain(room_temp);
        BalanceState {
            room_temp,
            total_heat_gain,
            ventilation_heat_gain,
        }
    }

    /// Denominator of the temperature update. Zero means the supply air has
    /// no heat capacity and the update is undefined.
    pub fn update_denominator(&self) -> BalanceResult<Real> {
        let capacity_rate = self.ventilation.capacity_rate();
        if capacity_rate == 0.0 {
            return Err(BalanceError::InvalidParameters {
                what: format!(
                    "ventilation capacity rate is zero (flow={}, density={}, cp={})",
                    self.ventilation.flow_rate,
                    self.ventilation.air_density,
                    self.ventilation.specific_heat_capacity
                ),
            });
        }
        Ok(capacity_rate)
    }

    /// One substitution step: `T += required / (ρ·cp·flow)`, then re-evaluate.
    pub fn step(&self, state: &BalanceState) -> BalanceResult<BalanceState> {
        let capacity_rate = self.update_denominator()?;
        Ok(self.evaluate(state.room_temp + state.required_power() / capacity_rate))
    }
}

/// Gains evaluated at one room temperature.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BalanceState {
    /// Room temperature, °C
    pub room_temp: Real,
    /// Envelope plus internal gains, W
    pub total_heat_gain: Real,
    /// Ventilation gain, W
    pub ventilation_heat_gain: Real,
}

impl BalanceState {
    /// Reheat (positive) or cooling (negative) power still needed to hold the
    /// room at `room_temp`, W.
    #[inline]
    pub fn required_power(&self) -> Real {
        -(self.total_heat_gain + self.ventilation_heat_gain)
    }

    pub fn room_temperature(&self) -> Temperature {
        celsius(self.room_temp)
    }
}
