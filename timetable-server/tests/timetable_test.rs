//! End-to-end tests of the prediction API over an in-memory bus system.

use std::sync::Arc;
use std::thread;

use chrono::{NaiveDate, NaiveDateTime};

use transit_timetable::domain::{Location, PlanId, Route, RouteId, Stop, StopId};
use transit_timetable::prediction::{PredictionError, TimetableService};
use transit_timetable::repository::{InMemoryRepository, RepositoryError};

fn at(hour: u32, minute: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 15)
        .unwrap()
        .and_hms_opt(hour, minute, 0)
        .unwrap()
}

fn stop_id(n: u32) -> StopId {
    StopId::new(n).unwrap()
}

fn route_id(n: u32) -> RouteId {
    RouteId::new(n).unwrap()
}

#[test]
fn two_by_two_system() {
    let service = TimetableService::new(InMemoryRepository::synthetic(2, 2)).unwrap();

    assert_eq!(
        service.schedule().arrivals(stop_id(2), route_id(2)).unwrap(),
        &[4, 19, 34, 49]
    );

    let predictions = service.get_stop_predictions(stop_id(2), 4, &at(8, 20)).unwrap();
    let by_route: Vec<(u32, Vec<u32>)> = predictions
        .iter()
        .map(|p| (p.route.id.get(), p.minutes.clone()))
        .collect();

    // Route 1 at stop 2 arrives at {2, 17, 32, 47}; route 2 at {4, 19, 34, 49}
    assert_eq!(
        by_route,
        vec![(1, vec![12, 27, 42, 57]), (2, vec![14, 29, 44, 59])]
    );
}

#[test]
fn only_minute_of_hour_matters() {
    let service = TimetableService::new(InMemoryRepository::synthetic(3, 3)).unwrap();

    let morning = service.get_all_stop_predictions(3, &at(6, 41)).unwrap();
    let evening = service.get_all_stop_predictions(3, &at(22, 41)).unwrap();

    assert_eq!(morning, evening);
}

#[test]
fn zero_predictions_per_route() {
    let service = TimetableService::new(InMemoryRepository::synthetic(3, 2)).unwrap();

    let predictions = service.get_all_stop_predictions(0, &at(12, 0)).unwrap();

    assert_eq!(predictions.len(), 3);
    for stop in &predictions {
        assert_eq!(stop.arrivals.len(), 2);
        assert!(stop.arrivals.iter().all(|a| a.minutes.is_empty()));
    }
}

#[test]
fn repository_order_is_preserved() {
    let stops: Vec<Stop> = [2, 3, 1]
        .into_iter()
        .map(|n| Stop::new(stop_id(n), format!("Stop {n}"), Location::new(0.0, 0.0)))
        .collect();
    let routes = vec![Route::new(route_id(1), "Line 1", vec![])];
    let service = TimetableService::new(InMemoryRepository::new(stops, routes)).unwrap();

    let predictions = service.get_all_stop_predictions(1, &at(0, 0)).unwrap();
    let ids: Vec<u32> = predictions.iter().map(|p| p.stop.id.get()).collect();

    assert_eq!(ids, vec![2, 3, 1]);
}

#[test]
fn plan_filter_is_pass_through() {
    let plan = PlanId::new(7).unwrap();
    let repository = InMemoryRepository::synthetic(5, 1).with_plan(plan, [stop_id(4)]);
    let service = TimetableService::new(repository).unwrap();

    let stops = service.get_all_stops_info(Some(plan));
    assert_eq!(stops.len(), 1);
    assert_eq!(stops[0].id, stop_id(4));

    assert_eq!(service.get_stop_info(stop_id(5)).unwrap().name, "Stop 5");
}

#[test]
fn missing_stop_is_not_found() {
    let service = TimetableService::new(InMemoryRepository::synthetic(1, 1)).unwrap();

    assert_eq!(
        service.get_stop_info(stop_id(2)).unwrap_err(),
        PredictionError::Repository(RepositoryError::StopNotFound(stop_id(2)))
    );
}

#[test]
fn empty_system_has_no_predictions() {
    let service = TimetableService::new(InMemoryRepository::default()).unwrap();

    assert!(service.schedule().is_empty());
    assert!(service.get_all_stop_predictions(2, &at(9, 9)).unwrap().is_empty());
}

#[test]
fn shared_between_threads() {
    let service = Arc::new(TimetableService::new(InMemoryRepository::synthetic(4, 3)).unwrap());
    let expected = service.get_all_stop_predictions(2, &at(10, 10)).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let service = Arc::clone(&service);
            thread::spawn(move || service.get_all_stop_predictions(2, &at(10, 10)).unwrap())
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.join().unwrap(), expected);
    }
}

#[test]
fn borrowed_repository() {
    let repository = InMemoryRepository::synthetic(2, 1);
    let service = TimetableService::new(&repository).unwrap();

    let predictions = service.get_stop_predictions(stop_id(1), 2, &at(7, 10)).unwrap();
    assert_eq!(predictions[0].minutes, vec![5, 20]);
    assert_eq!(service.repository().stop_count(), 2);
}
