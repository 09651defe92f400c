#[cfg(test)]
mod tests {
    use crate::logic::{
        build_booking_message, normalize_phone_number, rejection_from, BookingDetails,
        BookingSmsRequest, TwilioError,
    };
    use reqwest::StatusCode;

    #[test]
    fn normalize_prepends_india_country_code() {
        assert_eq!(
            normalize_phone_number(Some("9876543210")).as_deref(),
            Some("+919876543210")
        );
    }

    #[test]
    fn normalize_keeps_existing_country_code() {
        assert_eq!(
            normalize_phone_number(Some("+19876543210")).as_deref(),
            Some("+19876543210")
        );
    }

    #[test]
    fn normalize_rejects_missing_or_empty_input() {
        assert_eq!(normalize_phone_number(None), None);
        assert_eq!(normalize_phone_number(Some("")), None);
    }

    #[test]
    fn normalize_stays_permissive_for_digit_free_input() {
        // Stripping leaves nothing, the country code is still prepended; the
        // provider decides whether the number is real.
        assert_eq!(normalize_phone_number(Some("   ")).as_deref(), Some("+91"));
        assert_eq!(normalize_phone_number(Some("--")).as_deref(), Some("+91"));
    }

    #[test]
    fn normalize_strips_punctuation_and_spaces() {
        assert_eq!(
            normalize_phone_number(Some("98-765 43210")).as_deref(),
            Some("+919876543210")
        );
        assert_eq!(
            normalize_phone_number(Some("+1 (987) 654-3210")).as_deref(),
            Some("+19876543210")
        );
    }

    #[test]
    fn booking_message_uses_placeholders_when_details_empty() {
        let message = build_booking_message(&BookingDetails::default());

        assert!(message.contains("booking N/A"), "message: {message}");
        assert!(message.contains("Driver: Assigned Soon (Assigned Soon)"));
        assert!(!message.contains('\n'));
        assert!(!message.contains("  "), "double space in: {message}");
        assert_eq!(message, message.trim());
    }

    #[test]
    fn booking_message_includes_supplied_fields() {
        let payload: BookingSmsRequest = serde_json::from_value(serde_json::json!({
            "phoneNumber": "9876543210",
            "bookingDetails": {
                "bookingId": "BK-42",
                "pickup": "MG Road",
                "dropoff": "Airport",
                "pickupDate": "2026-09-01",
                "pickupTime": "09:30",
                "fareDetails": { "total": 540.5 },
                "driverName": "Ravi",
                "driverVehicle": "KA-01-AB-1234"
            }
        }))
        .unwrap();

        let message = build_booking_message(payload.booking_details.as_ref().unwrap());
        assert!(message.contains("booking BK-42"));
        assert!(message.contains("Pickup: MG Road on 2026-09-01 at 09:30."));
        assert!(message.contains("Drop-off: Airport."));
        assert!(message.contains("Fare: Rs 540.5."));
        assert!(message.contains("Driver: Ravi (KA-01-AB-1234)."));
    }

    #[test]
    fn booking_message_accepts_numeric_booking_id() {
        let details: BookingDetails = serde_json::from_value(serde_json::json!({
            "bookingId": 1007,
            "pickup": "  MG   Road  "
        }))
        .unwrap();

        let message = build_booking_message(&details);
        assert!(message.contains("booking 1007"));
        // internal whitespace collapsed
        assert!(message.contains("Pickup: MG Road on"));
    }

    #[test]
    fn rejection_prefers_status_and_message_from_body() {
        let err = rejection_from(
            StatusCode::BAD_REQUEST,
            r#"{"code": 60200, "message": "Invalid parameter `To`", "status": 400}"#,
        );
        match err {
            TwilioError::Rejected { status, message } => {
                assert_eq!(status, "400");
                assert_eq!(message, "Invalid parameter `To`");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejection_falls_back_to_wrapped_body() {
        let err = rejection_from(StatusCode::SERVICE_UNAVAILABLE, "upstream melted");
        match err {
            TwilioError::Rejected { status, message } => {
                assert_eq!(status, "503");
                assert!(message.contains("upstream melted"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
