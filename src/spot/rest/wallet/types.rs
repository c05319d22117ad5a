//! Request types for wallet endpoints.

use rust_decimal::Decimal;
use serde::Serialize;
use serde_with::skip_serializing_none;

use crate::types::{AccountType, TransferType};

/// Request to change which account receives deposits of a coin.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModifyDepositAccountRequest {
    /// Target account (`spot`, `funding`, `coin-futures`, `mix_usdt`, `usdc-futures`).
    pub account_type: String,
    /// Coin.
    pub coin: String,
}

/// Request to move funds between the account types of one user.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Source account.
    pub from_type: AccountType,
    /// Destination account.
    pub to_type: AccountType,
    /// Amount to move.
    pub amount: Decimal,
    /// Coin.
    pub coin: String,
    /// Trading pair, required for isolated margin accounts.
    pub symbol: Option<String>,
    /// Client order ID.
    pub client_oid: Option<String>,
}

impl TransferRequest {
    /// Create a new transfer.
    pub fn new(
        from_type: AccountType,
        to_type: AccountType,
        coin: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            from_type,
            to_type,
            amount,
            coin: coin.into(),
            symbol: None,
            client_oid: None,
        }
    }

    /// Set the isolated margin symbol.
    pub fn symbol(mut self, symbol: impl Into<String>) -> Self {
        self.symbol = Some(symbol.into());
        self
    }

    /// Set the client order ID.
    pub fn client_oid(mut self, client_oid: impl Into<String>) -> Self {
        self.client_oid = Some(client_oid.into());
        self
    }
}

/// Request for the coins transferable between two account types.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferCoinInfoRequest {
    /// Source account.
    pub from_type: AccountType,
    /// Destination account.
    pub to_type: AccountType,
}

/// Request to move funds between a main account and its sub-accounts.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubaccountTransferRequest {
    /// Source account.
    pub from_type: AccountType,
    /// Destination account.
    pub to_type: AccountType,
    /// Amount to move.
    pub amount: Decimal,
    /// Coin.
    pub coin: String,
    /// Trading pair, required for isolated margin accounts.
    pub symbol: Option<String>,
    /// Client order ID.
    pub client_oid: Option<String>,
    /// Sending user ID.
    pub from_user_id: Option<String>,
    /// Receiving user ID.
    pub to_user_id: Option<String>,
}

impl SubaccountTransferRequest {
    /// Create a new transfer between two users.
    pub fn new(
        from_type: AccountType,
        to_type: AccountType,
        coin: impl Into<String>,
        amount: Decimal,
        from_user_id: impl Into<String>,
        to_user_id: impl Into<String>,
    ) -> Self {
        Self {
            from_type,
            to_type,
            amount,
            coin: coin.into(),
            symbol: None,
            client_oid: None,
            from_user_id: Some(from_user_id.into()),
            to_user_id: Some(to_user_id.into()),
        }
    }
}

/// Request to withdraw a coin.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRequest {
    /// Coin.
    pub coin: String,
    /// On-chain or internal transfer.
    pub transfer_type: TransferType,
    /// Destination address, or user identifier for internal transfers.
    pub address: String,
    /// Chain (on-chain only).
    pub chain: Option<String>,
    /// Kind of `address` for internal transfers (`email`, `mobile`, `uid`).
    pub inner_to_type: Option<String>,
    /// Phone area code (mobile internal transfers).
    pub area_code: Option<String>,
    /// Address tag or memo.
    pub tag: Option<String>,
    /// Amount to withdraw.
    pub size: Decimal,
    /// Note.
    pub remark: Option<String>,
    /// Client order ID.
    pub client_oid: Option<String>,
    /// Travel rule: member code of the receiving exchange.
    pub member_code: Option<String>,
    /// Travel rule: `company` or `user`.
    pub identity_type: Option<String>,
    /// Travel rule: company name.
    pub company_name: Option<String>,
    /// Travel rule: recipient first name.
    pub first_name: Option<String>,
    /// Travel rule: recipient last name.
    pub last_name: Option<String>,
}

impl WithdrawalRequest {
    /// Withdraw to an external address on the given chain.
    pub fn on_chain(
        coin: impl Into<String>,
        chain: impl Into<String>,
        address: impl Into<String>,
        size: Decimal,
    ) -> Self {
        Self {
            chain: Some(chain.into()),
            ..Self::empty(coin.into(), TransferType::OnChain, address.into(), size)
        }
    }

    /// Transfer to another Bitget user.
    pub fn internal(
        coin: impl Into<String>,
        inner_to_type: impl Into<String>,
        address: impl Into<String>,
        size: Decimal,
    ) -> Self {
        Self {
            inner_to_type: Some(inner_to_type.into()),
            ..Self::empty(coin.into(), TransferType::InternalTransfer, address.into(), size)
        }
    }

    fn empty(coin: String, transfer_type: TransferType, address: String, size: Decimal) -> Self {
        Self {
            coin,
            transfer_type,
            address,
            chain: None,
            inner_to_type: None,
            area_code: None,
            tag: None,
            size,
            remark: None,
            client_oid: None,
            member_code: None,
            identity_type: None,
            company_name: None,
            first_name: None,
            last_name: None,
        }
    }

    /// Set the address tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Set the client order ID.
    pub fn client_oid(mut self, client_oid: impl Into<String>) -> Self {
        self.client_oid = Some(client_oid.into());
        self
    }
}

/// Request to cancel a pending withdrawal.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CancelWithdrawalRequest {
    /// Withdrawal order ID.
    pub order_id: String,
}

/// Request for a deposit address.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
pub struct DepositAddressRequest {
    /// Coin.
    pub coin: String,
    /// Chain.
    pub chain: Option<String>,
    /// Lightning network invoice amount.
    pub size: Option<Decimal>,
}

impl DepositAddressRequest {
    /// Request the default address of a coin.
    pub fn new(coin: impl Into<String>) -> Self {
        Self {
            coin: coin.into(),
            chain: None,
            size: None,
        }
    }

    /// Select the chain.
    pub fn chain(mut self, chain: impl Into<String>) -> Self {
        self.chain = Some(chain.into());
        self
    }
}

/// Request for a sub-account's deposit address.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubaccountDepositAddressRequest {
    /// Sub-account UID.
    pub sub_uid: String,
    /// Coin.
    pub coin: String,
    /// Chain.
    pub chain: Option<String>,
    /// Lightning network invoice amount.
    pub size: Option<Decimal>,
}

/// Filters for a sub-account's deposit records.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubaccountDepositRecordsRequest {
    /// Sub-account UID.
    pub sub_uid: String,
    /// Coin.
    pub coin: Option<String>,
    /// Start time in milliseconds.
    pub start_time: Option<u64>,
    /// End time in milliseconds.
    pub end_time: Option<u64>,
    /// Return records older than this ID.
    pub id_less_than: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
}

impl SubaccountDepositRecordsRequest {
    /// Create a new request for the given sub-account.
    pub fn new(sub_uid: impl Into<String>) -> Self {
        Self {
            sub_uid: sub_uid.into(),
            coin: None,
            start_time: None,
            end_time: None,
            id_less_than: None,
            limit: None,
        }
    }
}

/// Filters for withdrawal records.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WithdrawalRecordsRequest {
    /// Coin.
    pub coin: Option<String>,
    /// Client order ID.
    pub client_oid: Option<String>,
    /// Start time in milliseconds.
    pub start_time: u64,
    /// End time in milliseconds.
    pub end_time: u64,
    /// Return records older than this ID.
    pub id_less_than: Option<String>,
    /// Withdrawal order ID.
    pub order_id: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
}

impl WithdrawalRecordsRequest {
    /// Create a new request for a time range in milliseconds.
    pub fn new(start_time: u64, end_time: u64) -> Self {
        Self {
            coin: None,
            client_oid: None,
            start_time,
            end_time,
            id_less_than: None,
            order_id: None,
            limit: None,
        }
    }
}

/// Filters for deposit records.
#[skip_serializing_none]
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositRecordsRequest {
    /// Coin.
    pub coin: Option<String>,
    /// Deposit order ID.
    pub order_id: Option<String>,
    /// Start time in milliseconds.
    pub start_time: u64,
    /// End time in milliseconds.
    pub end_time: u64,
    /// Return records older than this ID.
    pub id_less_than: Option<String>,
    /// Page size.
    pub limit: Option<u32>,
}

impl DepositRecordsRequest {
    /// Create a new request for a time range in milliseconds.
    pub fn new(start_time: u64, end_time: u64) -> Self {
        Self {
            coin: None,
            order_id: None,
            start_time,
            end_time,
            id_less_than: None,
            limit: None,
        }
    }
}
