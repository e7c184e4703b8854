use chrono::{Duration, TimeZone, Utc};

use trailex_services::ServiceError;
use trailex_services::requests::ReturnTrailerRequest;
use trailex_store::models::{BookingStatus, NotificationType, TrailerStatus};

use crate::fixtures::test_system::{TestSystem, booking_request};

#[tokio::test]
async fn on_time_return_completes_without_excess_fee() {
    let system = TestSystem::spawn().await;
    let due = Utc::now() + Duration::hours(8);

    let mut request = booking_request("LOC002-001", due);
    request.has_insurance = true;
    let booking = system.bookings.create_booking(request).await.unwrap();

    let returned = system
        .bookings
        .return_trailer(ReturnTrailerRequest {
            booking_id: booking.id.clone(),
            return_time: due - Duration::hours(1),
        })
        .await
        .unwrap();

    assert_eq!(returned.status, BookingStatus::Completed);
    assert_eq!(returned.excess_fee, 0.0);
    assert_eq!(returned.total_cost, returned.insurance_fee);
    assert_eq!(returned.actual_return_time, Some(due - Duration::hours(1)));

    let trailer = system.trailers.get_by_id("LOC002-001").await.unwrap().unwrap();
    assert_eq!(trailer.status, TrailerStatus::Available);

    let notifications = system
        .notifications
        .get_by_customer(&returned.customer_id)
        .await
        .unwrap();
    assert!(
        notifications
            .iter()
            .any(|n| n.kind == NotificationType::ReturnConfirmation)
    );
    assert!(notifications.iter().all(|n| n.kind != NotificationType::LateFee));
}

#[tokio::test]
async fn ninety_minutes_late_bills_two_full_hours() {
    let system = TestSystem::spawn().await;
    let due = Utc::now() + Duration::hours(4);

    let booking = system
        .bookings
        .create_booking(booking_request("LOC001-002", due))
        .await
        .unwrap();

    let returned = system
        .bookings
        .return_trailer(ReturnTrailerRequest {
            booking_id: booking.id.clone(),
            return_time: due + Duration::minutes(90),
        })
        .await
        .unwrap();

    assert_eq!(returned.excess_fee, 200.0);
    assert_eq!(returned.total_cost, returned.insurance_fee + returned.excess_fee);
}

#[tokio::test]
async fn overnight_late_return_charges_insurance_plus_two_hours() {
    let system = TestSystem::spawn().await;
    // Due just before midnight, brought back at 01:30 the next day.
    let due = Utc.with_ymd_and_hms(2026, 8, 7, 23, 59, 0).unwrap();
    let brought_back = Utc.with_ymd_and_hms(2026, 8, 8, 1, 30, 0).unwrap();

    let mut request = booking_request("LOC002-001", due);
    request.has_insurance = true;
    let booking = system.bookings.create_booking(request).await.unwrap();

    let returned = system
        .bookings
        .return_trailer(ReturnTrailerRequest {
            booking_id: booking.id.clone(),
            return_time: brought_back,
        })
        .await
        .unwrap();

    // 1h31m late rounds up to two billable hours.
    assert_eq!(returned.excess_fee, 200.0);
    assert_eq!(returned.insurance_fee, 50.0);
    assert_eq!(returned.total_cost, 250.0);
    assert_eq!(returned.total_cost, returned.insurance_fee + returned.excess_fee);
}

#[tokio::test]
async fn late_return_emits_a_late_fee_notification() {
    let system = TestSystem::spawn().await;
    let due = Utc::now() - Duration::hours(2);

    let booking = system
        .bookings
        .create_booking(booking_request("LOC001-002", due))
        .await
        .unwrap();

    system
        .bookings
        .return_trailer(ReturnTrailerRequest {
            booking_id: booking.id.clone(),
            return_time: due + Duration::minutes(90),
        })
        .await
        .unwrap();

    let notifications = system
        .notifications
        .get_by_customer(&booking.customer_id)
        .await
        .unwrap();
    let late_fee = notifications
        .iter()
        .find(|n| n.kind == NotificationType::LateFee)
        .expect("late fee notice should be emitted");
    assert!(late_fee.message.contains("1.5 hours late"));
    assert!(late_fee.message.contains("200.00 DKK"));
}

#[tokio::test]
async fn returning_an_unknown_booking_fails_with_not_found() {
    let system = TestSystem::spawn().await;

    let err = system
        .bookings
        .return_trailer(ReturnTrailerRequest {
            booking_id: "BOOK999".to_string(),
            return_time: Utc::now(),
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::NotFound(_)));
}

#[tokio::test]
async fn returning_a_completed_booking_fails_with_invalid_state() {
    let system = TestSystem::spawn().await;
    let due = Utc::now() + Duration::hours(8);

    let booking = system
        .bookings
        .create_booking(booking_request("LOC002-001", due))
        .await
        .unwrap();

    system
        .bookings
        .return_trailer(ReturnTrailerRequest {
            booking_id: booking.id.clone(),
            return_time: due,
        })
        .await
        .unwrap();

    let err = system
        .bookings
        .return_trailer(ReturnTrailerRequest {
            booking_id: booking.id.clone(),
            return_time: due,
        })
        .await
        .unwrap_err();

    assert!(matches!(err, ServiceError::InvalidState(_)));
}
