//! Aggregate statistics over a consumer listing.

use crate::types::{Consumer, ConsumerStatistics};
use std::collections::HashSet;

/// Count consumers, distinct developer emails and distinct app names.
///
/// Single pass; the result does not depend on the order of `consumers`.
pub fn compute_statistics(consumers: &[Consumer]) -> ConsumerStatistics {
    let mut emails: HashSet<&str> = HashSet::new();
    let mut names: HashSet<&str> = HashSet::new();

    for consumer in consumers {
        emails.insert(&consumer.developer_email);
        names.insert(&consumer.app_name);
    }

    ConsumerStatistics {
        consumers_num: consumers.len(),
        unique_developer_email_num: emails.len(),
        unique_name_num: names.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn consumer(email: &str, name: &str) -> Consumer {
        Consumer {
            consumer_id: format!("{}-{}", email, name),
            app_name: name.to_string(),
            app_type: "Web".to_string(),
            description: String::new(),
            developer_email: email.to_string(),
            redirect_url: String::new(),
            created_by_user_id: String::new(),
            enabled: true,
            created: NaiveDate::from_ymd_opt(2020, 1, 1)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap(),
        }
    }

    #[test]
    fn test_compute_statistics() {
        let consumers = vec![
            consumer("a", "x"),
            consumer("a", "y"),
            consumer("b", "x"),
        ];

        let stats = compute_statistics(&consumers);

        assert_eq!(
            stats,
            ConsumerStatistics {
                consumers_num: 3,
                unique_developer_email_num: 2,
                unique_name_num: 2,
            }
        );
    }

    #[test]
    fn test_compute_statistics_empty() {
        assert_eq!(compute_statistics(&[]), ConsumerStatistics::default());
    }
}
