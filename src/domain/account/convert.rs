//! Conversion: Horizon account wire types → `AccountInfo`.

use super::wire::{AccountResponse, BalanceResponse};
use super::{AccountInfo, Balance, Flags, Thresholds};
use crate::domain::ledger::convert::asset_from_parts;
use crate::shared::AccountId;
use rust_decimal::Decimal;

fn balance_label(b: &BalanceResponse) -> Result<String, String> {
    if let Some(pool) = &b.liquidity_pool_id {
        return Ok(format!("pool:{}", pool));
    }
    asset_from_parts(
        &b.asset_type,
        b.asset_code.as_deref(),
        b.asset_issuer.as_deref(),
    )
    .map(|asset| asset.label())
}

impl TryFrom<AccountResponse> for AccountInfo {
    type Error = String;

    fn try_from(source: AccountResponse) -> Result<Self, Self::Error> {
        let public_key = AccountId::parse(&source.account_id)?;
        let sequence = source
            .sequence
            .parse::<i64>()
            .map_err(|e| format!("Invalid sequence {}: {}", source.sequence, e))?;

        let balances = source
            .balances
            .into_iter()
            .map(|b| {
                Ok(Balance {
                    asset: balance_label(&b)?,
                    balance: b.balance,
                    limit: b.limit,
                    buying_liabilities: b.buying_liabilities,
                    selling_liabilities: b.selling_liabilities,
                })
            })
            .collect::<Result<Vec<_>, String>>()?;

        let native = balances
            .iter()
            .find(|b| b.is_native())
            .map(|b| b.balance)
            .unwrap_or(Decimal::ZERO);

        Ok(AccountInfo {
            public_key,
            balance: native,
            sequence,
            subentry_count: source.subentry_count,
            thresholds: Thresholds {
                low: source.thresholds.low_threshold,
                med: source.thresholds.med_threshold,
                high: source.thresholds.high_threshold,
            },
            flags: Flags {
                auth_required: source.flags.auth_required,
                auth_revocable: source.flags.auth_revocable,
                auth_immutable: source.flags.auth_immutable,
            },
            balances,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    const ACCOUNT: &str = "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN";
    const ISSUER: &str = "GCQTGZQQ5G4PTM2GL7CDIFKUBIPEC52BROAQIAPW53XBRJVN6ZJVTG6V";

    fn account_json() -> String {
        format!(
            r#"{{
                "id": "{0}",
                "account_id": "{0}",
                "sequence": "4660039994869",
                "subentry_count": 2,
                "thresholds": {{"low_threshold": 0, "med_threshold": 1, "high_threshold": 2}},
                "flags": {{"auth_required": false, "auth_revocable": true, "auth_immutable": false, "auth_clawback_enabled": false}},
                "balances": [
                    {{"balance": "250.5000000", "limit": "922337203685.4775807", "buying_liabilities": "0.0000000", "selling_liabilities": "0.0000000", "asset_type": "credit_alphanum4", "asset_code": "USDT", "asset_issuer": "{1}"}},
                    {{"balance": "12.0000000", "liquidity_pool_id": "abcd", "limit": "100.0000000", "asset_type": "liquidity_pool_shares"}},
                    {{"balance": "9999.9999900", "buying_liabilities": "0.0000000", "selling_liabilities": "1.0000000", "asset_type": "native"}}
                ]
            }}"#,
            ACCOUNT, ISSUER
        )
    }

    #[test]
    fn test_account_from_wire() {
        let resp: AccountResponse = serde_json::from_str(&account_json()).unwrap();
        let info = AccountInfo::try_from(resp).unwrap();

        assert_eq!(info.public_key.as_str(), ACCOUNT);
        assert_eq!(info.sequence, 4660039994869);
        assert_eq!(info.balance, Decimal::from_str("9999.99999").unwrap());
        assert_eq!(info.thresholds, Thresholds { low: 0, med: 1, high: 2 });
        assert!(info.flags.auth_revocable);
        assert_eq!(info.balances.len(), 3);
        assert_eq!(info.balances[0].asset, format!("USDT:{}", ISSUER));
        assert_eq!(info.balances[1].asset, "pool:abcd");
        assert_eq!(info.balances[2].asset, "XLM");
        assert!(info.balances[2].limit.is_none());
    }

    #[test]
    fn test_invalid_sequence_rejected() {
        let json = account_json().replace("4660039994869", "not-a-number");
        let resp: AccountResponse = serde_json::from_str(&json).unwrap();
        assert!(AccountInfo::try_from(resp).is_err());
    }
}
