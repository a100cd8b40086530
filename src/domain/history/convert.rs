//! Conversion: aggregator history items → `TransactionRecord`.

use super::wire::HistoryItemResponse;
use super::{TransactionRecord, TxKind, TxStatus};
use crate::domain::token::{Token, EVM_NATIVE_ADDRESS};
use crate::shared::{from_raw_amount, ChainId, ScalingError};

use rust_decimal::Decimal;

/// Every aggregator chain uses 18-decimal gas tokens.
const GAS_TOKEN_DECIMALS: u8 = 18;

/// Gas token of an aggregator chain.
pub(crate) fn gas_token(chain: ChainId) -> Token {
    let (symbol, name) = match chain {
        ChainId::BSC => ("BNB", "BNB"),
        ChainId::POLYGON => ("POL", "Polygon Ecosystem Token"),
        ChainId::GNOSIS => ("xDAI", "xDAI"),
        ChainId::AVALANCHE => ("AVAX", "Avalanche"),
        ChainId::FANTOM => ("FTM", "Fantom"),
        ChainId::KLAYTN => ("KLAY", "Klaytn"),
        _ => ("ETH", "Ethereum"),
    };
    Token::new(EVM_NATIVE_ADDRESS, symbol, name, GAS_TOKEN_DECIMALS, chain).native()
}

impl TransactionRecord {
    /// Convert a history item on `chain`.
    ///
    /// Items carrying an input token are swaps of that token; plain
    /// transfers of the gas token are recorded as swaps of the gas token.
    pub fn from_history_item(
        source: HistoryItemResponse,
        chain: ChainId,
    ) -> Result<Self, ScalingError> {
        let (token, amount) = match (source.token_in, source.amount_in.as_deref()) {
            (Some(token_in), Some(raw)) => {
                let token = Token::from_wire(token_in, chain);
                let amount = from_raw_amount(raw, token.decimals)?;
                (token, amount)
            }
            _ => {
                let token = gas_token(chain);
                let amount = from_raw_amount(&source.value, GAS_TOKEN_DECIMALS)?;
                (token, amount)
            }
        };

        let gas_price = from_raw_amount(&source.gas_price, GAS_TOKEN_DECIMALS)?;
        let fee = Decimal::from(source.gas_used)
            .checked_mul(gas_price)
            .ok_or_else(|| ScalingError::Overflow {
                context: format!("{} gas × {}", source.gas_used, gas_price),
            })?
            .normalize();

        Ok(TransactionRecord {
            id: source.id,
            kind: TxKind::Swap,
            hash: source.hash,
            from: source.from,
            to: source.to,
            amount,
            token,
            timestamp: source.timestamp,
            status: TxStatus::parse_lenient(&source.status),
            fee,
            gas_used: Some(source.gas_used),
        })
    }
}
