//! Account endpoints (authentication required).

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::BitgetError;
use crate::spot::rest::BitgetRestClient;
use crate::spot::rest::endpoints::account;

impl BitgetRestClient {
    /// Get account information (user ID, permissions, IP whitelist).
    pub async fn get_account_info(&self) -> Result<Value, BitgetError> {
        self.private_get(account::INFO, &()).await
    }

    /// Get spot account balances.
    pub async fn get_account_assets(
        &self,
        request: Option<&AccountAssetsRequest>,
    ) -> Result<Value, BitgetError> {
        self.private_get(account::ASSETS, &request).await
    }

    /// Get balances of sub-accounts holding assets.
    pub async fn get_subaccount_assets(
        &self,
        request: Option<&SubaccountAssetsRequest>,
    ) -> Result<Value, BitgetError> {
        self.private_get(account::SUBACCOUNT_ASSETS, &request).await
    }

    /// Get account bills.
    pub async fn get_account_bills(
        &self,
        request: Option<&BillsRequest>,
    ) -> Result<Value, BitgetError> {
        self.private_get(account::BILLS, &request).await
    }

    /// Get transfer records between the main account and sub-accounts.
    pub async fn get_sub_main_trans_record(
        &self,
        request: Option<&SubMainTransRecordRequest>,
    ) -> Result<Value, BitgetError> {
        self.private_get(account::SUB_MAIN_TRANS_RECORD, &request)
            .await
    }

    /// Get transfer records between account types.
    pub async fn get_transfer_records(
        &self,
        request: &TransferRecordsRequest,
    ) -> Result<Value, BitgetError> {
        self.private_get(account::TRANSFER_RECORDS, request).await
    }

    /// Enable or disable BGB fee deduction.
    pub async fn switch_deduct(&self, request: &SwitchDeductRequest) -> Result<Value, BitgetError> {
        self.private_post(account::SWITCH_DEDUCT, request).await
    }

    /// Get the BGB fee deduction setting.
    pub async fn get_deduct_info(&self) -> Result<Value, BitgetError> {
        self.private_get(account::DEDUCT_INFO, &()).await
    }
}
