//! Property tests for the balance iteration.

use proptest::prelude::*;
use tb_balance::{
    BalanceConfig, BalanceError, InternalGains, RoomModel, Surface, Termination, Ventilation,
};

fn surface_strategy() -> impl Strategy<Value = Surface> {
    (0.1_f64..5.0, 0.5_f64..50.0, -20.0_f64..40.0)
        .prop_map(|(u, a, t)| Surface::new(u, a, t))
}

/// Room whose supply temperature is chosen so that `room_temp` balances.
fn balanced_room(
    surfaces: Vec<Surface>,
    gains: InternalGains,
    flow: f64,
    room_temp: f64,
) -> RoomModel {
    let at_supply = RoomModel::new(
        surfaces.clone(),
        gains,
        Ventilation::new(flow, 1.2, 1005.0, room_temp),
    )
    .unwrap();
    let (total, _) = at_supply.total_heat_gain(room_temp);
    let capacity_rate = flow * 1.2 * 1005.0;
    let supply = room_temp - total / capacity_rate;
    RoomModel::new(surfaces, gains, Ventilation::new(flow, 1.2, 1005.0, supply)).unwrap()
}

proptest! {
    #[test]
    fn iterations_bounded_by_cap(
        surfaces in prop::collection::vec(surface_strategy(), 0..6),
        lights in 0.0_f64..2000.0,
        flow in 0.01_f64..2.0,
        supply in 10.0_f64..30.0,
        initial in 10.0_f64..30.0,
        cap in 0_usize..1500,
    ) {
        let room = RoomModel::new(
            surfaces,
            InternalGains::new(lights, 0.0, 0.0),
            Ventilation::new(flow, 1.2, 1005.0, supply),
        ).unwrap();
        let cfg = BalanceConfig::default().with_max_iterations(cap);

        match room.find_balance(initial, &cfg) {
            Ok(sol) => {
                prop_assert!(sol.iterations <= cap);
                prop_assert!(sol.room_temp().is_finite());
                prop_assert!(sol.total_heat_gain().is_finite());
                prop_assert!(sol.ventilation_heat_gain().is_finite());
                if sol.termination == Termination::IterationCapReached {
                    prop_assert_eq!(sol.iterations, cap);
                }
            }
            Err(BalanceError::Diverged { iteration, .. }) => {
                prop_assert!(iteration <= cap);
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn balanced_room_is_a_fixed_point(
        surfaces in prop::collection::vec(surface_strategy(), 0..6),
        lights in 0.0_f64..2000.0,
        equipment in 0.0_f64..1000.0,
        flow in 0.05_f64..2.0,
        room_temp in 15.0_f64..28.0,
    ) {
        let gains = InternalGains::new(lights, equipment, 0.0);
        let room = balanced_room(surfaces, gains, flow, room_temp);
        let cfg = BalanceConfig::default();

        let first = room.find_balance(room_temp, &cfg).unwrap();
        prop_assert_eq!(first.termination, Termination::Converged);
        prop_assert_eq!(first.iterations, 0);

        let again = room.find_balance(first.room_temp(), &cfg).unwrap();
        prop_assert!(again.iterations <= 1);
        prop_assert!((again.room_temp() - first.room_temp()).abs() <= cfg.tolerance);
    }
}

#[test]
fn zero_everything_converges_immediately() {
    let room = RoomModel::new(
        vec![],
        InternalGains::default(),
        Ventilation::new(0.5, 1.2, 1005.0, 21.0),
    )
    .unwrap();
    let (temp, total, vent, iterations) = room
        .find_balance(21.0, &BalanceConfig::default())
        .unwrap()
        .into_tuple();

    assert_eq!(iterations, 0);
    assert_eq!(temp, 21.0);
    assert_eq!(total, 0.0);
    assert_eq!(vent, 0.0);
}

#[test]
fn zero_density_or_cp_rejected() {
    for vent in [
        Ventilation::new(1.0, 0.0, 1005.0, 20.0),
        Ventilation::new(1.0, 1.2, 0.0, 20.0),
    ] {
        let room = RoomModel::new(vec![], InternalGains::default(), vent).unwrap();
        let err = room
            .find_balance(20.0, &BalanceConfig::default())
            .unwrap_err();
        assert!(matches!(err, BalanceError::InvalidParameters { .. }));
    }
}
