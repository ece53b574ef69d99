use datapoint_status::StatusCode;
use serde::{Deserialize, Serialize};

use crate::Datapoint;

/// How datapoint statuses are interpreted when reading.
///
/// The defaults match the datapoints API: bad datapoints are dropped,
/// uncertain ones count as bad, and statuses are not reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RetrieveOptions {
    pub include_status: bool,
    #[serde(rename = "ignoreBadDataPoints")]
    pub ignore_bad_datapoints: bool,
    pub treat_uncertain_as_bad: bool,
}

impl Default for RetrieveOptions {
    fn default() -> Self {
        RetrieveOptions {
            include_status: false,
            ignore_bad_datapoints: true,
            treat_uncertain_as_bad: true,
        }
    }
}

impl RetrieveOptions {
    /// All datapoints, with their statuses.
    pub fn raw() -> Self {
        RetrieveOptions {
            include_status: true,
            ignore_bad_datapoints: false,
            treat_uncertain_as_bad: false,
        }
    }

    fn counts_as_bad(&self, status: StatusCode) -> bool {
        if status.is_good() {
            return false;
        }
        // Unchecked words with the invalid severity count as bad.
        !status.is_uncertain() || self.treat_uncertain_as_bad
    }

    pub fn is_usable(&self, datapoint: &Datapoint) -> bool {
        !(self.ignore_bad_datapoints && self.counts_as_bad(datapoint.status))
    }

    /// Drops unusable datapoints in place, keeping the order of the rest.
    pub fn apply(&self, datapoints: &mut Vec<Datapoint>) {
        let before = datapoints.len();
        datapoints.retain(|dp| self.is_usable(dp));
        let dropped = before - datapoints.len();
        if dropped > 0 {
            tracing::trace!(dropped, kept = datapoints.len(), "discarded datapoints by status");
        }
        if !self.include_status {
            for dp in datapoints.iter_mut() {
                dp.status = StatusCode::GOOD;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datapoint_status::Category;
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use serde_json::json;

    fn series() -> Vec<Datapoint> {
        vec![
            Datapoint::new(1, 1.0),
            Datapoint::new(2, 2.0).with_status(StatusCode::from(Category::UncertainSubstituteValue)),
            Datapoint::new(3, 3.0).with_status(StatusCode::from(Category::BadSensorFailure)),
            Datapoint::new(4, 4.0).with_status(StatusCode::parse("Good, Calculated").unwrap()),
            Datapoint::new(5, 5.0).with_status(StatusCode::from_raw_unchecked(0xC000_0000)),
        ]
    }

    fn timestamps(datapoints: &[Datapoint]) -> Vec<i64> {
        datapoints.iter().map(|dp| dp.timestamp).collect()
    }

    #[rstest]
    #[case::defaults(RetrieveOptions::default(), vec![1, 4])]
    #[case::raw(RetrieveOptions::raw(), vec![1, 2, 3, 4, 5])]
    #[case::keep_uncertain(
        RetrieveOptions { treat_uncertain_as_bad: false, ..Default::default() },
        vec![1, 2, 4]
    )]
    #[case::keep_everything(
        RetrieveOptions { ignore_bad_datapoints: false, ..Default::default() },
        vec![1, 2, 3, 4, 5]
    )]
    #[test_log::test]
    fn filters(#[case] options: RetrieveOptions, #[case] expected: Vec<i64>) {
        let mut datapoints = series();
        options.apply(&mut datapoints);
        assert_eq!(timestamps(&datapoints), expected);
    }

    #[test]
    fn statuses_are_reset_unless_requested() {
        let mut datapoints = series();
        RetrieveOptions {
            ignore_bad_datapoints: false,
            ..Default::default()
        }
        .apply(&mut datapoints);
        assert!(datapoints.iter().all(|dp| dp.status == StatusCode::GOOD));

        let mut datapoints = series();
        RetrieveOptions::raw().apply(&mut datapoints);
        assert_eq!(
            datapoints.iter().map(|dp| dp.status).collect::<Vec<_>>(),
            series().iter().map(|dp| dp.status).collect::<Vec<_>>()
        );
    }

    #[test]
    fn wire_names() {
        assert_eq!(
            serde_json::to_value(RetrieveOptions::default()).unwrap(),
            json!({
                "includeStatus": false,
                "ignoreBadDataPoints": true,
                "treatUncertainAsBad": true,
            })
        );
        let options: RetrieveOptions =
            serde_json::from_value(json!({"includeStatus": true})).unwrap();
        assert_eq!(
            options,
            RetrieveOptions {
                include_status: true,
                ..Default::default()
            }
        );
    }
}
