//! Per-parameter trend insight: one human-readable sentence about the
//! latest change in a series, with its reference-range context.

use super::series::TimeSeriesPoint;

/// Describes the move between the last two points of a series.
///
/// Returns `None` for fewer than two points. A zero diff short-circuits to
/// a "held steady" sentence; otherwise the sentence combines direction,
/// percentage magnitude (0% when the previous value is zero), the old and
/// new values, and a clause describing the reference-range transition.
pub fn trend_insight(name: &str, points: &[TimeSeriesPoint]) -> Option<String> {
    let [.., prev, last] = points else {
        return None;
    };

    let diff = last.value - prev.value;
    if diff == 0.0 {
        return Some(format!(
            "{name} held steady at {} across the last two exams.",
            last.value
        ));
    }

    let pct = if prev.value != 0.0 {
        ((diff / prev.value) * 100.0).abs()
    } else {
        0.0
    };
    let direction = if diff > 0.0 { "rose" } else { "fell" };

    let last_normal = last.status.is_normal();
    let prev_normal = prev.status.is_normal();
    let context = if last_normal && !prev_normal {
        "returning to the reference range"
    } else if !last_normal && prev_normal {
        "leaving the reference range. Monitor"
    } else if !last_normal {
        "still outside the reference range"
    } else {
        "within the normal range"
    };

    Some(format!(
        "{name} {direction} {pct:.1}% (from {} to {}), {context}.",
        prev.value, last.value
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ReadingStatus;

    fn point(value: f64, status: ReadingStatus) -> TimeSeriesPoint {
        TimeSeriesPoint {
            date: None,
            value,
            status,
        }
    }

    #[test]
    fn fewer_than_two_points_yields_nothing() {
        assert!(trend_insight("Creatinina", &[]).is_none());
        assert!(trend_insight("Creatinina", &[point(1.2, ReadingStatus::Normal)]).is_none());
    }

    #[test]
    fn zero_diff_short_circuits_to_stable_sentence() {
        let points = [
            point(7.0, ReadingStatus::Normal),
            point(7.0, ReadingStatus::Normal),
        ];
        assert_eq!(
            trend_insight("pH", &points).unwrap(),
            "pH held steady at 7 across the last two exams."
        );
    }

    #[test]
    fn rise_out_of_range_warns() {
        let points = [
            point(1.2, ReadingStatus::Normal),
            point(2.5, ReadingStatus::High),
        ];
        let sentence = trend_insight("CREATININA", &points).unwrap();
        assert_eq!(
            sentence,
            "CREATININA rose 108.3% (from 1.2 to 2.5), leaving the reference range. Monitor."
        );
    }

    #[test]
    fn fall_back_into_range() {
        let points = [
            point(2.5, ReadingStatus::High),
            point(1.2, ReadingStatus::Normal),
        ];
        let sentence = trend_insight("Creatinina", &points).unwrap();
        assert!(sentence.contains("fell 52.0%"));
        assert!(sentence.ends_with("returning to the reference range."));
    }

    #[test]
    fn persistently_abnormal_is_flagged() {
        let points = [
            point(2.0, ReadingStatus::High),
            point(2.2, ReadingStatus::High),
        ];
        let sentence = trend_insight("Ureia", &points).unwrap();
        assert!(sentence.ends_with("still outside the reference range."));
    }

    #[test]
    fn both_normal_reads_calmly() {
        let points = [
            point(90.0, ReadingStatus::Normal),
            point(95.0, ReadingStatus::Normal),
        ];
        let sentence = trend_insight("Glicose", &points).unwrap();
        assert!(sentence.ends_with("within the normal range."));
    }

    #[test]
    fn zero_previous_value_reports_zero_percent() {
        let points = [
            point(0.0, ReadingStatus::Normal),
            point(1.5, ReadingStatus::High),
        ];
        let sentence = trend_insight("Bilirrubina", &points).unwrap();
        assert!(sentence.contains("rose 0.0%"));
    }

    #[test]
    fn uses_only_the_last_two_points() {
        let points = [
            point(5.0, ReadingStatus::High),
            point(1.2, ReadingStatus::Normal),
            point(2.5, ReadingStatus::High),
        ];
        let sentence = trend_insight("Creatinina", &points).unwrap();
        assert!(sentence.contains("from 1.2 to 2.5"));
    }
}
