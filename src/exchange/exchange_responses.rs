use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct RestingOrder {
    pub oid: u64,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FilledOrder {
    pub total_sz: String,
    pub avg_px: String,
    pub oid: u64,
}

/// Outcome of one line item, reported at the same index as the item in the request.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub enum ExchangeDataStatus {
    Success,
    WaitingForFill,
    WaitingForTrigger,
    Error(String),
    Resting(RestingOrder),
    Filled(FilledOrder),
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ExchangeDataStatuses {
    pub statuses: Vec<ExchangeDataStatus>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct ExchangeResponse {
    #[serde(rename = "type")]
    pub response_type: String,
    pub data: Option<ExchangeDataStatuses>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
#[serde(tag = "status", content = "response")]
pub enum ExchangeResponseStatus {
    Ok(ExchangeResponse),
    Err(String),
}

impl ExchangeResponseStatus {
    /// Per-item statuses of a successful response, in request order.
    pub fn statuses(&self) -> &[ExchangeDataStatus] {
        match self {
            ExchangeResponseStatus::Ok(ExchangeResponse {
                data: Some(data), ..
            }) => &data.statuses,
            _ => &[],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_order_response() {
        let text = r#"{"status":"ok","response":{"type":"order","data":{"statuses":[
            {"resting":{"oid":77738308}},
            {"filled":{"totalSz":"0.02","avgPx":"1891.4","oid":77747314}},
            {"error":"Order must have minimum value of $10."}
        ]}}}"#;
        let status: ExchangeResponseStatus = serde_json::from_str(text).unwrap();
        assert_eq!(
            status.statuses(),
            &[
                ExchangeDataStatus::Resting(RestingOrder { oid: 77738308 }),
                ExchangeDataStatus::Filled(FilledOrder {
                    total_sz: "0.02".to_string(),
                    avg_px: "1891.4".to_string(),
                    oid: 77747314,
                }),
                ExchangeDataStatus::Error("Order must have minimum value of $10.".to_string()),
            ]
        );
    }

    #[test]
    fn test_parse_cancel_and_error_responses() {
        let text = r#"{"status":"ok","response":{"type":"cancel","data":{"statuses":["success"]}}}"#;
        let status: ExchangeResponseStatus = serde_json::from_str(text).unwrap();
        assert_eq!(status.statuses(), &[ExchangeDataStatus::Success]);

        let text = r#"{"status":"ok","response":{"type":"default"}}"#;
        let status: ExchangeResponseStatus = serde_json::from_str(text).unwrap();
        assert!(status.statuses().is_empty());

        let text = r#"{"status":"err","response":"User or API Wallet does not exist."}"#;
        let status: ExchangeResponseStatus = serde_json::from_str(text).unwrap();
        assert_eq!(
            status,
            ExchangeResponseStatus::Err("User or API Wallet does not exist.".to_string())
        );
    }
}
