//! Wallet endpoints: transfers, deposits and withdrawals (authentication required).

mod types;

pub use types::*;

use serde_json::Value;

use crate::error::BitgetError;
use crate::spot::rest::BitgetRestClient;
use crate::spot::rest::endpoints::wallet;

impl BitgetRestClient {
    /// Change the account that receives deposits of a coin.
    pub async fn modify_deposit_account(
        &self,
        request: &ModifyDepositAccountRequest,
    ) -> Result<Value, BitgetError> {
        self.private_post(wallet::MODIFY_DEPOSIT_ACCOUNT, request)
            .await
    }

    /// Move funds between account types.
    pub async fn transfer(&self, request: &TransferRequest) -> Result<Value, BitgetError> {
        self.private_post(wallet::TRANSFER, request).await
    }

    /// Get the coins that can be moved between two account types.
    pub async fn get_transfer_coin_info(
        &self,
        request: &TransferCoinInfoRequest,
    ) -> Result<Value, BitgetError> {
        self.private_get(wallet::TRANSFER_COIN_INFO, request).await
    }

    /// Move funds between a main account and its sub-accounts.
    pub async fn subaccount_transfer(
        &self,
        request: &SubaccountTransferRequest,
    ) -> Result<Value, BitgetError> {
        self.private_post(wallet::SUBACCOUNT_TRANSFER, request).await
    }

    /// Withdraw a coin.
    pub async fn withdrawal(&self, request: &WithdrawalRequest) -> Result<Value, BitgetError> {
        self.private_post(wallet::WITHDRAWAL, request).await
    }

    /// Cancel a pending withdrawal.
    pub async fn cancel_withdrawal(
        &self,
        request: &CancelWithdrawalRequest,
    ) -> Result<Value, BitgetError> {
        self.private_post(wallet::CANCEL_WITHDRAWAL, request).await
    }

    /// Get a deposit address.
    pub async fn get_deposit_address(
        &self,
        request: &DepositAddressRequest,
    ) -> Result<Value, BitgetError> {
        self.private_get(wallet::DEPOSIT_ADDRESS, request).await
    }

    /// Get a sub-account's deposit address.
    pub async fn get_subaccount_deposit_address(
        &self,
        request: &SubaccountDepositAddressRequest,
    ) -> Result<Value, BitgetError> {
        self.private_get(wallet::SUBACCOUNT_DEPOSIT_ADDRESS, request)
            .await
    }

    /// Get a sub-account's deposit records.
    pub async fn get_subaccount_deposit_records(
        &self,
        request: &SubaccountDepositRecordsRequest,
    ) -> Result<Value, BitgetError> {
        self.private_get(wallet::SUBACCOUNT_DEPOSIT_RECORDS, request)
            .await
    }

    /// Get withdrawal records.
    pub async fn get_withdrawal_records(
        &self,
        request: &WithdrawalRecordsRequest,
    ) -> Result<Value, BitgetError> {
        self.private_get(wallet::WITHDRAWAL_RECORDS, request).await
    }

    /// Get deposit records.
    pub async fn get_deposit_records(
        &self,
        request: &DepositRecordsRequest,
    ) -> Result<Value, BitgetError> {
        self.private_get(wallet::DEPOSIT_RECORDS, request).await
    }
}
