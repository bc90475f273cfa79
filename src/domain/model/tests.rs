// Unit tests for domain models

#[cfg(test)]
mod tests {
    use crate::domain::errors::CutError;
    use crate::domain::model::*;
    use crate::timecode;

    #[test]
    fn time_offset_from_seconds() {
        let offset = TimeOffset::from_seconds(3661.5);
        assert_eq!(offset.seconds, 3661.5);
    }

    #[test]
    fn time_offset_display_is_wall_clock() {
        let offset = TimeOffset::from_seconds(3723.5);
        assert_eq!(offset.to_string(), "01:02:03.500");
    }

    #[test]
    fn time_offset_to_duration() {
        let offset = TimeOffset::from_seconds(1.25);
        assert_eq!(offset.to_duration().as_millis(), 1250);
    }

    #[test]
    fn cut_range_accepts_ordered_offsets() {
        let range = CutRange::new(
            TimeOffset::from_seconds(5.0),
            TimeOffset::from_seconds(10.0),
        )
        .unwrap();
        assert_eq!(range.start().seconds, 5.0);
        assert_eq!(range.end().seconds, 10.0);
        assert_eq!(range.duration(), 5.0);
    }

    #[test]
    fn cut_range_rejects_reversed_offsets() {
        let result = CutRange::new(TimeOffset::from_seconds(5.0), TimeOffset::from_seconds(2.0));
        assert!(matches!(result, Err(CutError::InvalidTimeRange { .. })));
    }

    #[test]
    fn cut_range_rejects_equal_offsets() {
        let result = CutRange::new(TimeOffset::from_seconds(5.0), TimeOffset::from_seconds(5.0));
        assert!(matches!(result, Err(CutError::InvalidTimeRange { .. })));
    }

    #[test]
    fn cut_range_from_parsed_timestamps() {
        let start = timecode::parse_timestamp("00:00:05").unwrap();
        let end = timecode::parse_timestamp("00:00:02").unwrap();
        assert!(CutRange::new(start, end).is_err());
    }

    #[test]
    fn trim_request_rejects_empty_source() {
        let range = CutRange::new(TimeOffset::from_seconds(0.0), TimeOffset::from_seconds(1.0))
            .unwrap();
        assert!(TrimRequest::new("", range).is_err());
    }

    #[test]
    fn trim_request_exposes_source_and_range() {
        let range = CutRange::new(TimeOffset::from_seconds(1.0), TimeOffset::from_seconds(4.0))
            .unwrap();
        let request = TrimRequest::new("movie.mp4", range).unwrap();
        assert_eq!(request.source(), std::path::Path::new("movie.mp4"));
        assert_eq!(request.range().duration(), 3.0);
    }
}
