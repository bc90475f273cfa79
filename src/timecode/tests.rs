// Unit tests for timestamp parsing

#[cfg(test)]
mod tests {
    use crate::domain::errors::CutError;
    use crate::timecode::*;

    #[test]
    fn parses_whole_seconds() {
        let offset = parse_timestamp("00:00:10").unwrap();
        assert_eq!(offset.seconds, 10.0);
    }

    #[test]
    fn parses_hours_minutes_seconds() {
        let offset = parse_timestamp("01:02:03").unwrap();
        assert_eq!(offset.seconds, 3723.0);
    }

    #[test]
    fn parses_fractional_seconds() {
        let offset = parse_timestamp("00:01:30.5").unwrap();
        assert_eq!(offset.seconds, 90.5);

        let offset = parse_timestamp("00:00:01.250000").unwrap();
        assert_eq!(offset.seconds, 1.25);
    }

    #[test]
    fn microsecond_precision_is_exact() {
        let offset = parse_timestamp("00:00:00.000001").unwrap();
        assert_eq!(offset.seconds, 1e-6);
    }

    #[test]
    fn trims_surrounding_whitespace() {
        let offset = parse_timestamp("  00:00:05  ").unwrap();
        assert_eq!(offset.seconds, 5.0);
    }

    #[test]
    fn ordering_is_preserved() {
        let ten = parse_timestamp("00:00:10").unwrap();
        let twenty = parse_timestamp("00:00:20").unwrap();
        assert!(ten < twenty);
    }

    #[test]
    fn rejects_out_of_range_components() {
        // The clock parse bounds each field; nothing is normalized
        assert!(matches!(
            parse_timestamp("25:61:61"),
            Err(CutError::InvalidTimeFormat { .. })
        ));
        assert!(parse_timestamp("00:61:00").is_err());
        assert!(parse_timestamp("24:00:00").is_err());
    }

    #[test]
    fn rejects_malformed_input() {
        for input in ["", "ten seconds", "00:10", "00-00-10", "00:00:10,5"] {
            assert!(parse_timestamp(input).is_err(), "accepted {input:?}");
        }
    }

    #[test]
    fn format_error_carries_the_expected_message() {
        let err = parse_timestamp("bogus").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Time must be in HH:MM:SS or HH:MM:SS.mmm format."
        );
    }

    #[test]
    fn formats_offsets_for_display() {
        assert_eq!(format_timestamp(3723.456), "01:02:03.456");
        assert_eq!(format_timestamp(0.0), "00:00:00.000");
        assert_eq!(format_timestamp(59.999), "00:00:59.999");
    }
}
