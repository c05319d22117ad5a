//! Request types for account endpoints.

use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::types::AccountType;

/// Filters for account assets.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountAssetsRequest {
    /// Coin to filter by.
    pub coin: Option<String>,
    /// `hold_only` (default) or `all`.
    pub asset_type: Option<String>,
}

/// Paging for sub-account assets.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubaccountAssetsRequest {
    /// Return entries older than this cursor.
    pub id_less_than: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
}

/// Filters for account bills.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BillsRequest {
    /// Coin to filter by.
    pub coin: Option<String>,
    /// Bill group (`deposit`, `withdraw`, `transaction`, `transfer`, ...).
    pub group_type: Option<String>,
    /// Business type (`ORDER_DEALT_IN`, `WITHDRAW`, ...).
    pub business_type: Option<String>,
    /// Start time in milliseconds.
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    pub end_time: Option<u64>,
    /// Page size.
    pub limit: Option<u32>,
    /// Return bills older than this bill ID.
    pub id_less_than: Option<String>,
}

/// Filters for main/sub-account transfer records.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubMainTransRecordRequest {
    /// Coin to filter by.
    pub coin: Option<String>,
    /// `initiator` or `receiver`.
    pub role: Option<String>,
    /// Sub-account UID.
    pub sub_uid: Option<String>,
    /// Start time in milliseconds.
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    pub end_time: Option<u64>,
    /// Client order ID of the transfer.
    pub client_oid: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
    /// Return records older than this ID.
    pub id_less_than: Option<String>,
}

/// Filters for transfer records.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRecordsRequest {
    /// Coin to filter by.
    pub coin: String,
    /// Source account type.
    pub from_type: AccountType,
    /// Start time in milliseconds.
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    pub end_time: Option<u64>,
    /// Client order ID of the transfer.
    pub client_oid: Option<String>,
    /// Page number.
    pub page_num: Option<u32>,
    /// Page size.
    pub limit: Option<u32>,
    /// Return records older than this ID.
    pub id_less_than: Option<String>,
}

impl TransferRecordsRequest {
    /// Create a new request.
    pub fn new(coin: impl Into<String>, from_type: AccountType) -> Self {
        Self {
            coin: coin.into(),
            from_type,
            start_time: None,
            end_time: None,
            client_oid: None,
            page_num: None,
            limit: None,
            id_less_than: None,
        }
    }

    /// Select a page.
    pub fn page(mut self, page_num: u32, limit: u32) -> Self {
        self.page_num = Some(page_num);
        self.limit = Some(limit);
        self
    }
}

/// Request to switch BGB fee deduction.
#[derive(Debug, Clone, Serialize)]
pub struct SwitchDeductRequest {
    /// `on` or `off`.
    pub deduct: String,
}

impl SwitchDeductRequest {
    /// Turn deduction on or off.
    pub fn new(enabled: bool) -> Self {
        Self {
            deduct: if enabled { "on" } else { "off" }.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_transfer_records_wire_format() {
        let request = TransferRecordsRequest::new("USDT", AccountType::Spot).page(2, 50);
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"coin": "USDT", "fromType": "spot", "pageNum": 2, "limit": 50})
        );
    }

    #[test]
    fn test_sub_main_trans_record_uses_sub_uid() {
        let request = SubMainTransRecordRequest {
            sub_uid: Some("12345".into()),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({"subUid": "12345"})
        );
    }

    #[test]
    fn test_switch_deduct() {
        assert_eq!(SwitchDeductRequest::new(true).deduct, "on");
        assert_eq!(SwitchDeductRequest::new(false).deduct, "off");
    }
}
