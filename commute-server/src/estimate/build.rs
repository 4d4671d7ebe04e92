//! Per-mode metric derivation.
//!
//! Two builders share the same formulas. [`routed_results`] starts from real
//! road and transit routes; [`geodesic_results`] only knows the great-circle
//! distance and assumes a speed for every mode.

use crate::domain::{Coordinate, INFEASIBLE_MINS, Mode, ModeResult, RouteMetrics, round_to};

/// Rail networks run this much longer than the straight line.
pub const RAIL_DETOUR_FACTOR: f64 = 1.18;

/// Metro trips longer than this are marked infeasible.
pub const METRO_MAX_FEASIBLE_KM: f64 = 40.0;

/// Smallest non-zero energy saving reported.
pub const ENERGY_FLOOR_KWH: f64 = 0.05;

/// Road router output for the three road profiles.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadLegs {
    pub driving: RouteMetrics,
    pub cycling: RouteMetrics,
    pub walking: RouteMetrics,
}

/// Transit planner output; each class may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TransitLegs {
    pub rail: Option<RouteMetrics>,
    pub subway: Option<RouteMetrics>,
    pub bus: Option<RouteMetrics>,
}

/// Great-circle distance rounded to 2 decimal km.
pub fn air_distance_km(from: Coordinate, to: Coordinate) -> f64 {
    round_to(from.haversine_km(&to), 2)
}

/// Emissions for `distance_km` by `mode`, 3 decimals.
pub fn carbon_kg(mode: Mode, distance_km: f64) -> f64 {
    round_to(distance_km * mode.emission_kg_per_km(), 3)
}

/// Energy saved versus driving the same distance, 3 decimals.
///
/// Car and Aeroplane always report 0. Any positive saving under
/// [`ENERGY_FLOOR_KWH`] is raised to it.
pub fn energy_saved_kwh(mode: Mode, distance_km: f64) -> f64 {
    if matches!(mode, Mode::Car | Mode::Aeroplane) {
        return 0.0;
    }

    let delta = (Mode::Car.energy_kwh_per_km() - mode.energy_kwh_per_km()).max(0.0);
    let mut saved = distance_km * delta;
    if saved > 0.0 && saved < ENERGY_FLOOR_KWH {
        saved = ENERGY_FLOOR_KWH;
    }
    round_to(saved, 3)
}

/// Travel time at the mode's assumed speed plus its fixed overhead.
pub fn estimated_mins(mode: Mode, distance_km: f64) -> u32 {
    let mins = distance_km / mode.assumed_speed_kmh() * 60.0 + mode.overhead_mins();
    mins.round().max(0.0) as u32
}

fn entry(mode: Mode, distance_km: f64, time_mins: u32) -> ModeResult {
    ModeResult {
        mode,
        distance_km,
        time_mins,
        carbon_kg: carbon_kg(mode, distance_km),
        energy_saved_kwh: energy_saved_kwh(mode, distance_km),
    }
}

fn metro_entry(distance_km: f64, supplied_mins: Option<u32>) -> ModeResult {
    if distance_km > METRO_MAX_FEASIBLE_KM {
        return ModeResult {
            energy_saved_kwh: 0.0,
            ..entry(Mode::Metro, distance_km, INFEASIBLE_MINS)
        };
    }
    let mins = supplied_mins.unwrap_or_else(|| estimated_mins(Mode::Metro, distance_km));
    entry(Mode::Metro, distance_km, mins)
}

fn air_entry(air_km: f64) -> ModeResult {
    entry(Mode::Aeroplane, air_km, estimated_mins(Mode::Aeroplane, air_km))
}

/// All eight modes from routed road legs and optional transit legs.
///
/// Missing transit falls back to: train over `air × 1.18`, metro over the
/// air distance, bus over the driving distance, each at assumed speed. Bus
/// time is always taken at assumed speed.
pub fn routed_results(air_km: f64, road: &RoadLegs, transit: &TransitLegs) -> Vec<ModeResult> {
    let car_km = road.driving.distance_km;

    let train_km = transit
        .rail
        .map_or_else(|| round_to(air_km * RAIL_DETOUR_FACTOR, 2), |m| m.distance_km);
    let metro_km = transit.subway.map_or(air_km, |m| m.distance_km);
    let bus_km = transit.bus.map_or(car_km, |m| m.distance_km);

    let train_mins = transit
        .rail
        .map_or_else(|| estimated_mins(Mode::Train, train_km), |m| m.time_mins);
    // bus itineraries refine the distance only
    let bus_mins = estimated_mins(Mode::Bus, bus_km);

    vec![
        entry(Mode::Car, car_km, road.driving.time_mins),
        entry(
            Mode::Motorcycle,
            car_km,
            estimated_mins(Mode::Motorcycle, car_km),
        ),
        entry(Mode::Bus, bus_km, bus_mins),
        entry(Mode::Train, train_km, train_mins),
        metro_entry(metro_km, transit.subway.map(|m| m.time_mins)),
        entry(Mode::Cycle, road.cycling.distance_km, road.cycling.time_mins),
        entry(Mode::Walking, road.walking.distance_km, road.walking.time_mins),
        air_entry(air_km),
    ]
}

/// All eight modes from the air distance alone.
pub fn geodesic_results(air_km: f64) -> Vec<ModeResult> {
    let train_km = round_to(air_km * RAIL_DETOUR_FACTOR, 2);

    Mode::ALL
        .into_iter()
        .map(|mode| match mode {
            Mode::Train => entry(mode, train_km, estimated_mins(mode, train_km)),
            Mode::Metro => metro_entry(air_km, None),
            Mode::Aeroplane => air_entry(air_km),
            _ => entry(mode, air_km, estimated_mins(mode, air_km)),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn road(driving_km: f64, cycling_km: f64, walking_km: f64) -> RoadLegs {
        RoadLegs {
            driving: RouteMetrics::new(driving_km, 40),
            cycling: RouteMetrics::new(cycling_km, 70),
            walking: RouteMetrics::new(walking_km, 200),
        }
    }

    fn find(results: &[ModeResult], mode: Mode) -> &ModeResult {
        results.iter().find(|r| r.mode == mode).unwrap()
    }

    #[test]
    fn carbon_uses_factor_and_rounds() {
        assert_eq!(carbon_kg(Mode::Car, 10.0), 1.71);
        assert_eq!(carbon_kg(Mode::Bus, 12.345), 0.864);
        assert_eq!(carbon_kg(Mode::Walking, 5.0), 0.0);
    }

    #[test]
    fn energy_saved_against_car() {
        assert_eq!(energy_saved_kwh(Mode::Bus, 10.0), 4.6);
        assert_eq!(energy_saved_kwh(Mode::Walking, 2.0), 1.16);
        assert_eq!(energy_saved_kwh(Mode::Car, 10.0), 0.0);
        assert_eq!(energy_saved_kwh(Mode::Aeroplane, 900.0), 0.0);
    }

    #[test]
    fn energy_floor_applies_to_tiny_positive_savings() {
        // 0.05 km on foot saves 0.029 kWh, raised to the floor
        assert_eq!(energy_saved_kwh(Mode::Walking, 0.05), ENERGY_FLOOR_KWH);
        assert_eq!(energy_saved_kwh(Mode::Train, 0.01), ENERGY_FLOOR_KWH);
    }

    #[test]
    fn zero_saving_stays_zero() {
        assert_eq!(energy_saved_kwh(Mode::Walking, 0.0), 0.0);
        assert_eq!(energy_saved_kwh(Mode::Metro, 0.0), 0.0);
    }

    #[test]
    fn estimated_times() {
        assert_eq!(estimated_mins(Mode::Bus, 14.0), 30);
        assert_eq!(estimated_mins(Mode::Train, 90.0), 80);
        assert_eq!(estimated_mins(Mode::Metro, 35.0), 70);
        assert_eq!(estimated_mins(Mode::Aeroplane, 850.0), 120);
        assert_eq!(estimated_mins(Mode::Aeroplane, 0.0), 60);
    }

    #[test]
    fn air_distance_is_rounded() {
        let a = Coordinate::new(0.0, 0.0);
        let b = Coordinate::new(0.0, 1.0);
        assert_eq!(air_distance_km(a, b), 111.19);
    }

    #[test]
    fn routed_without_transit_uses_substitutes() {
        let results = routed_results(14.0, &road(18.5, 17.9, 7.5), &TransitLegs::default());
        assert_eq!(results.len(), 8);

        let car = find(&results, Mode::Car);
        assert_eq!(car.distance_km, 18.5);
        assert_eq!(car.time_mins, 40);
        assert_eq!(car.energy_saved_kwh, 0.0);

        let moto = find(&results, Mode::Motorcycle);
        assert_eq!(moto.distance_km, 18.5);
        assert_eq!(moto.time_mins, 22);

        let bus = find(&results, Mode::Bus);
        assert_eq!(bus.distance_km, 18.5);
        assert_eq!(bus.time_mins, 40);

        let train = find(&results, Mode::Train);
        assert_eq!(train.distance_km, 16.52);
        assert_eq!(train.time_mins, 31);

        let metro = find(&results, Mode::Metro);
        assert_eq!(metro.distance_km, 14.0);
        assert_eq!(metro.time_mins, 34);

        let walk = find(&results, Mode::Walking);
        assert_eq!(walk.distance_km, 7.5);
        assert_eq!(walk.time_mins, 200);
        assert_eq!(walk.carbon_kg, 0.0);

        let air = find(&results, Mode::Aeroplane);
        assert_eq!(air.distance_km, 14.0);
        assert_eq!(air.time_mins, 61);
        assert_eq!(air.energy_saved_kwh, 0.0);
    }

    #[test]
    fn routed_prefers_transit_legs() {
        let transit = TransitLegs {
            rail: Some(RouteMetrics::new(21.0, 48)),
            subway: Some(RouteMetrics::new(16.0, 38)),
            bus: Some(RouteMetrics::new(20.0, 55)),
        };
        let results = routed_results(14.0, &road(18.5, 17.9, 7.5), &transit);

        assert_eq!(
            (find(&results, Mode::Train).distance_km, find(&results, Mode::Train).time_mins),
            (21.0, 48)
        );
        assert_eq!(
            (find(&results, Mode::Metro).distance_km, find(&results, Mode::Metro).time_mins),
            (16.0, 38)
        );
        assert_eq!(
            (find(&results, Mode::Bus).distance_km, find(&results, Mode::Bus).time_mins),
            (20.0, 43)
        );
    }

    #[test]
    fn bus_itinerary_sets_distance_not_time() {
        let transit = TransitLegs {
            bus: Some(RouteMetrics::new(14.0, 90)),
            ..TransitLegs::default()
        };
        let results = routed_results(14.0, &road(18.5, 17.9, 7.5), &transit);

        let bus = find(&results, Mode::Bus);
        assert_eq!(bus.distance_km, 14.0);
        assert_eq!(bus.time_mins, estimated_mins(Mode::Bus, 14.0));
        assert_eq!(bus.time_mins, 30);
    }

    #[test]
    fn metro_boundary() {
        let at = geodesic_results(40.0);
        let metro = find(&at, Mode::Metro);
        assert_eq!(metro.time_mins, 79);
        assert_eq!(metro.energy_saved_kwh, 20.8);

        let past = geodesic_results(40.01);
        let metro = find(&past, Mode::Metro);
        assert_eq!(metro.time_mins, INFEASIBLE_MINS);
        assert_eq!(metro.energy_saved_kwh, 0.0);
        assert!(metro.carbon_kg > 0.0);
    }

    #[test]
    fn long_transit_metro_is_infeasible_even_with_itinerary() {
        let transit = TransitLegs {
            subway: Some(RouteMetrics::new(45.0, 70)),
            ..TransitLegs::default()
        };
        let results = routed_results(30.0, &road(35.0, 34.0, 33.0), &transit);
        let metro = find(&results, Mode::Metro);
        assert_eq!(metro.time_mins, INFEASIBLE_MINS);
        assert_eq!(metro.energy_saved_kwh, 0.0);
    }

    #[test]
    fn geodesic_uses_assumed_speeds() {
        let results = geodesic_results(10.0);
        assert_eq!(results.len(), 8);
        assert_eq!(find(&results, Mode::Car).time_mins, 11);
        assert_eq!(find(&results, Mode::Motorcycle).time_mins, 12);
        assert_eq!(find(&results, Mode::Bus).time_mins, 21);
        assert_eq!(find(&results, Mode::Cycle).time_mins, 50);
        assert_eq!(find(&results, Mode::Walking).time_mins, 120);
        assert_eq!(find(&results, Mode::Train).distance_km, 11.8);
        assert_eq!(find(&results, Mode::Train).time_mins, 28);
        assert_eq!(find(&results, Mode::Metro).time_mins, 27);
        assert_eq!(find(&results, Mode::Aeroplane).time_mins, 61);
    }

    #[test]
    fn results_follow_mode_order() {
        let modes: Vec<Mode> = geodesic_results(5.0).iter().map(|r| r.mode).collect();
        assert_eq!(modes, Mode::ALL.to_vec());
        let modes: Vec<Mode> = routed_results(5.0, &road(6.0, 6.0, 6.0), &TransitLegs::default())
            .iter()
            .map(|r| r.mode)
            .collect();
        assert_eq!(modes, Mode::ALL.to_vec());
    }
}
