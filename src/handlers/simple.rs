//! Handler that returns a fixed record of derived values.

use std::time::Duration;

use futures::Stream;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

use crate::core::models::{RuntimeVersion, SyntaxDemoRecord};

pub use self::function_handler as handler;

const NAME: &str = "Fred";
const PRIMES: [i64; 4] = [2, 3, 5, 7];
const ONE_THOUSAND: i64 = 1_000;
const ONE_MILLION: i64 = 1_000_000;

pub const DEMO_SEQUENCE_LEN: u32 = 5;
pub const DEMO_SEQUENCE_PAUSE: Duration = Duration::from_millis(10);

/// Lambda handler for the simple entrypoint.
///
/// # Errors
///
/// Only if the record cannot be serialised.
#[tracing::instrument(level = "info", skip(event))]
pub async fn function_handler(event: LambdaEvent<Value>) -> Result<Value, Error> {
    let (payload, context) = event.into_parts();
    info!(request_id = %context.request_id, "Building demo record");

    let record = build_record(payload);
    Ok(serde_json::to_value(record)?)
}

#[must_use]
pub fn build_record(event: Value) -> SyntaxDemoRecord {
    let version = RuntimeVersion::current();

    SyntaxDemoRecord {
        event,
        formatted: format!("He said his name is {NAME}."),
        primes: PRIMES.to_vec(),
        one_thousand: ONE_THOUSAND,
        one_million_underscore: group_digits(ONE_MILLION, '_'),
        sys_version: version.describe(),
        sys_version_info: version,
    }
}

/// Renders `n` with `separator` between each group of three digits.
#[must_use]
pub fn group_digits(n: i64, separator: char) -> String {
    let digits = n.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    if n < 0 {
        grouped.push('-');
    }
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    grouped
}

/// Lazily yields `0..limit`, sleeping for `pause` each time it is resumed after an element.
///
/// Not used by [`function_handler`].
pub fn count_up(limit: u32, pause: Duration) -> impl Stream<Item = u32> {
    futures::stream::unfold(0, move |i| async move {
        if i > 0 {
            tokio::time::sleep(pause).await;
        }
        if i >= limit {
            return None;
        }
        Some((i, i + 1))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::StreamExt;

    #[test]
    fn test_group_digits() {
        assert_eq!(group_digits(0, '_'), "0");
        assert_eq!(group_digits(999, '_'), "999");
        assert_eq!(group_digits(1_000, '_'), "1_000");
        assert_eq!(group_digits(12_345, ','), "12,345");
        assert_eq!(group_digits(1_000_000, '_'), "1_000_000");
        assert_eq!(group_digits(-1_234_567, '_'), "-1_234_567");
        assert_eq!(group_digits(i64::MIN, '_'), "-9_223_372_036_854_775_808");
    }

    #[tokio::test]
    async fn test_count_up_yields_demo_sequence() {
        let values: Vec<u32> = count_up(DEMO_SEQUENCE_LEN, DEMO_SEQUENCE_PAUSE)
            .collect()
            .await;
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
    }

    #[tokio::test]
    async fn test_count_up_empty() {
        let values: Vec<u32> = count_up(0, Duration::ZERO).collect().await;
        assert!(values.is_empty());
    }
}
