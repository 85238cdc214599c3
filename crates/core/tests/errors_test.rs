use std::error::Error;

use slotbook_core::errors::{BookingError, BookingResult};

#[test]
fn test_booking_error_display() {
    let not_found = BookingError::NotFound("Organization not found".to_string());
    let validation = BookingError::Validation("Invalid input".to_string());
    let invalid_range = BookingError::InvalidRange("duration must be positive".to_string());
    let invalid_schedule = BookingError::InvalidSchedule("start after end".to_string());
    let slot_unavailable = BookingError::SlotUnavailable("16:00 already booked".to_string());
    let database = BookingError::Database(eyre::eyre!("Database connection failed"));
    let internal = BookingError::Internal(Box::new(std::io::Error::new(
        std::io::ErrorKind::Other,
        "Internal error",
    )));

    assert_eq!(
        not_found.to_string(),
        "Resource not found: Organization not found"
    );
    assert_eq!(validation.to_string(), "Validation error: Invalid input");
    assert_eq!(
        invalid_range.to_string(),
        "Invalid time range: duration must be positive"
    );
    assert_eq!(
        invalid_schedule.to_string(),
        "Invalid schedule: start after end"
    );
    assert_eq!(
        slot_unavailable.to_string(),
        "Slot unavailable: 16:00 already booked"
    );
    assert!(database.to_string().contains("Database error:"));
    assert!(internal.to_string().contains("Internal server error:"));
}

#[test]
fn test_error_conversion() {
    let io_error = std::io::Error::new(std::io::ErrorKind::Other, "IO error");
    let booking_error = BookingError::Internal(Box::new(io_error));

    assert!(booking_error.source().is_some());
}

#[test]
fn test_booking_result() {
    let result: BookingResult<i32> = Ok(42);
    assert_eq!(result.unwrap(), 42);

    let result: BookingResult<i32> = Err(BookingError::NotFound("Not found".to_string()));
    assert!(result.is_err());
}

#[test]
fn test_from_trait_implementation() {
    let eyre_error = eyre::eyre!("Database error");
    let booking_error = BookingError::Database(eyre_error);

    assert!(booking_error.to_string().contains("Database error"));
}
