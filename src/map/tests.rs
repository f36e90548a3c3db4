use crate::map::consts::SEOUL_CITY_HALL;
use crate::map::models::{DistanceResult, LatLng};
use crate::map::{calculate_distance, haversine_km};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const SAMPLES: usize = 2_000;

fn random_point(rng: &mut StdRng) -> LatLng {
    LatLng::new(rng.gen_range(-90.0..=90.0), rng.gen_range(-180.0..=180.0))
}

#[test]
fn test_distance_to_itself_is_zero() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..SAMPLES {
        let point = random_point(&mut rng);
        let distance = calculate_distance(point, point);
        assert_eq!(distance.km, 0.0);
        assert_eq!(distance.formatted, "0m");
    }
}

#[test]
fn test_distance_is_symmetric() {
    let mut rng = StdRng::seed_from_u64(11);
    for _ in 0..SAMPLES {
        let a = random_point(&mut rng);
        let b = random_point(&mut rng);
        let there = calculate_distance(a, b);
        let back = calculate_distance(b, a);
        assert!(
            (there.km - back.km).abs() < 1e-3,
            "{a:?} -> {b:?}: {} vs {}",
            there.km,
            back.km,
        );
    }
}

#[test]
fn test_distance_is_bounded_by_half_circumference() {
    let mut rng = StdRng::seed_from_u64(13);
    let half_circumference = std::f64::consts::PI * 6371.0;
    for _ in 0..SAMPLES {
        let km = haversine_km(random_point(&mut rng), random_point(&mut rng));
        assert!(km >= 0.0);
        assert!(km <= half_circumference + 1e-6);
    }
}

#[test]
fn test_meters_follow_kilometers() {
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..SAMPLES {
        let distance = calculate_distance(random_point(&mut rng), random_point(&mut rng));
        assert_eq!(distance.m, distance.km * 1000.0);
        if distance.km >= 1.0 {
            assert!(distance.formatted.ends_with("km"));
        } else {
            assert!(distance.formatted.ends_with('m'));
            assert!(!distance.formatted.ends_with("km"));
        }
    }
}

#[test]
fn test_one_degree_of_longitude_on_the_equator() {
    let distance = calculate_distance(LatLng::new(0.0, 0.0), LatLng::new(0.0, 1.0));
    assert!((distance.km - 111.19).abs() < 0.01);
    assert_eq!(distance.formatted, "111.2km");
}

#[test]
fn test_seoul_city_hall_to_itself() {
    let distance = calculate_distance(SEOUL_CITY_HALL, LatLng::new(37.5665, 126.9780));
    assert_eq!(distance.km, 0.0);
    assert_eq!(distance.formatted, "0m");
}

#[test]
fn test_formatting_boundary() {
    assert_eq!(DistanceResult::from_kilometers(1.0).formatted, "1.0km");
    assert_eq!(DistanceResult::from_kilometers(0.999).formatted, "999m");
    assert_eq!(DistanceResult::from_kilometers(1000.0 / 1000.0).formatted, "1.0km");
    assert_eq!(DistanceResult::from_kilometers(0.0004).formatted, "0m");
    assert_eq!(DistanceResult::from_kilometers(0.0006).formatted, "1m");
    assert_eq!(DistanceResult::from_kilometers(12.34).formatted, "12.3km");
}

#[test]
fn test_short_distance_is_formatted_in_meters() {
    // About 111 meters north of Seoul City Hall.
    let guess = LatLng::new(SEOUL_CITY_HALL.lat + 0.001, SEOUL_CITY_HALL.lng);
    let distance = calculate_distance(SEOUL_CITY_HALL, guess);
    assert_eq!(distance.formatted, "111m");
}
