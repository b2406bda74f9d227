//! SMS body construction.

use crate::trend::TrendPair;

/// At most this many trend pairs go into one message (the newest ones).
pub const MESSAGE_ITEMS: usize = 2;

const SEPARATOR: &str = "------";

/// Render the summary text: six labeled lines per trend pair, each pair
/// closed with a separator line. The text stays free of quotation marks;
/// some carriers mangle them.
pub fn build_message(pairs: &[TrendPair]) -> String {
    let mut msg = String::new();
    for pair in pairs.iter().take(MESSAGE_ITEMS) {
        let block = format!(
            "curdate: {}\nstate: {}\ntime_remaining: {}\npercentage_remaining: {}\nlost_time: {}\nlost_percent: {}\n{SEPARATOR}\n",
            pair.curdate.format("%Y-%m-%d %H:%M:%S"),
            pair.state,
            pair.time_remaining,
            pair.percentage_remaining,
            pair.lost_time,
            pair.lost_percent,
        );
        msg.push_str(&block);
    }
    msg
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn pair(day: u32, lost_time: i64, lost_percent: f64) -> TrendPair {
        TrendPair {
            curdate: NaiveDate::from_ymd_opt(2025, 11, day)
                .unwrap()
                .and_hms_opt(15, 40, 1)
                .unwrap(),
            state: "discharging".to_owned(),
            time_remaining: "5.8 hours".to_owned(),
            percentage_remaining: "70%".to_owned(),
            lost_time,
            lost_percent,
        }
    }

    #[test]
    fn block_lines_are_labeled_in_order() {
        let msg = build_message(&[pair(12, -6, -1.0)]);
        let lines: Vec<&str> = msg.lines().collect();
        assert_eq!(
            lines,
            vec![
                "curdate: 2025-11-12 15:40:01",
                "state: discharging",
                "time_remaining: 5.8 hours",
                "percentage_remaining: 70%",
                "lost_time: -6",
                "lost_percent: -1",
                "------",
            ]
        );
    }

    #[test]
    fn one_block_per_pair_capped_at_two() {
        let pairs = vec![pair(12, -6, -1.0), pair(11, -7, -1.0), pair(10, -5, -2.0)];
        let msg = build_message(&pairs);
        assert_eq!(msg.matches(SEPARATOR).count(), 2);
        assert_eq!(msg.matches("curdate: ").count(), 2);
        // The newest two pairs survive, in order.
        assert!(msg.contains("lost_time: -6"));
        assert!(msg.contains("lost_time: -7"));
        assert!(!msg.contains("lost_time: -5"));
    }

    #[test]
    fn fractional_percent_loss_keeps_its_fraction() {
        let msg = build_message(&[pair(12, -6, -1.5)]);
        assert!(msg.contains("lost_percent: -1.5"));
    }

    #[test]
    fn empty_pair_list_builds_empty_message() {
        assert_eq!(build_message(&[]), "");
    }

    #[test]
    fn message_contains_no_quotation_marks() {
        let msg = build_message(&[pair(12, -6, -1.0), pair(11, 540, 30.0)]);
        assert!(!msg.contains('"'));
        assert!(!msg.contains('\''));
    }
}
