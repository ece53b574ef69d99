use datapoint_status::StatusCode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DatapointValue {
    Numeric(f64),
    String(String),
}

/// A single timestamped value.
///
/// Bad datapoints may come without a value. A missing or `null` status is
/// `Good`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Datapoint {
    /// Milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<DatapointValue>,
    #[serde(default)]
    pub status: StatusCode,
}

impl Datapoint {
    pub fn new(timestamp: i64, value: impl Into<DatapointValue>) -> Datapoint {
        Datapoint {
            timestamp,
            value: Some(value.into()),
            status: StatusCode::GOOD,
        }
    }

    pub fn with_status(mut self, status: StatusCode) -> Datapoint {
        self.status = status;
        self
    }
}

impl From<f64> for DatapointValue {
    fn from(value: f64) -> DatapointValue {
        DatapointValue::Numeric(value)
    }
}

impl From<String> for DatapointValue {
    fn from(value: String) -> DatapointValue {
        DatapointValue::String(value)
    }
}

impl From<&str> for DatapointValue {
    fn from(value: &str) -> DatapointValue {
        DatapointValue::String(value.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatapointsInsertion {
    pub external_id: String,
    pub datapoints: Vec<Datapoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatapointsResponse {
    pub external_id: String,
    #[serde(default)]
    pub datapoints: Vec<Datapoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use datapoint_status::{Category, Limit};
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn missing_status_is_good() {
        let dp: Datapoint = serde_json::from_value(json!({"timestamp": 10, "value": 1.5})).unwrap();
        assert_eq!(dp, Datapoint::new(10, 1.5));
    }

    #[test]
    fn status_forms() {
        let response: DatapointsResponse = serde_json::from_value(json!({
            "externalId": "pump-7",
            "datapoints": [
                {"timestamp": 1, "value": 3.0, "status": {"code": 0x808C_0000u32}},
                {"timestamp": 2, "value": "open", "status": {"symbol": "Uncertain, High"}},
                {"timestamp": 3, "status": {"code": 12345}},
                {"timestamp": 4, "value": 4.0, "status": null},
            ]
        }))
        .unwrap();
        let statuses = response
            .datapoints
            .iter()
            .map(|dp| dp.status)
            .collect::<Vec<_>>();
        assert_eq!(statuses[0].category(), Some(Category::BadSensorFailure));
        assert_eq!(statuses[1].limit(), Limit::High);
        assert_eq!(statuses[2].code(), 12345);
        assert_eq!(statuses[3], StatusCode::GOOD);
        assert_eq!(response.datapoints[1].value, Some(DatapointValue::from("open")));
        assert_eq!(response.datapoints[2].value, None);
    }

    #[test]
    fn unknown_codes_survive_re_encoding() {
        let input = json!({
            "externalId": "pump-7",
            "datapoints": [{"timestamp": 3, "value": 0.0, "status": {"code": 12345}}]
        });
        let insertion: DatapointsInsertion = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(serde_json::to_value(&insertion).unwrap(), input);
    }

    #[test]
    fn symbol_is_written_back_as_code() {
        let dp: Datapoint = serde_json::from_value(json!({
            "timestamp": 5,
            "value": 1.0,
            "status": {"symbol": "Bad, Low"},
        }))
        .unwrap();
        assert_eq!(
            serde_json::to_value(&dp).unwrap(),
            json!({"timestamp": 5, "value": 1.0, "status": {"code": 0x8000_0500u32}})
        );
    }

    #[test]
    fn invalid_symbol_rejects_the_datapoint() {
        let result = serde_json::from_value::<Datapoint>(json!({
            "timestamp": 5,
            "status": {"symbol": "Good, Calculated, Interpolated"},
        }));
        assert!(result.is_err());
    }
}
