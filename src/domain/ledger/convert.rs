//! Conversion: Horizon wire types → ledger domain types.

use super::wire;
use super::{Asset, NetworkInfo, Orderbook, PaymentPath, PriceLevel};

impl TryFrom<&wire::AssetResponse> for Asset {
    type Error = String;

    fn try_from(value: &wire::AssetResponse) -> Result<Self, Self::Error> {
        asset_from_parts(
            &value.asset_type,
            value.asset_code.as_deref(),
            value.asset_issuer.as_deref(),
        )
    }
}

pub(crate) fn asset_from_parts(
    asset_type: &str,
    code: Option<&str>,
    issuer: Option<&str>,
) -> Result<Asset, String> {
    match (asset_type, code, issuer) {
        ("native", _, _) => Ok(Asset::Native),
        (_, Some(code), Some(issuer)) => Ok(Asset::credit(code, issuer)),
        _ => Err(format!("Incomplete asset of type {}", asset_type)),
    }
}

impl Asset {
    /// Fill the `selling_*` half of an orderbook query.
    pub(crate) fn query_parts(&self) -> (String, Option<String>, Option<String>) {
        (
            self.asset_type().to_string(),
            match self {
                Asset::Native => None,
                Asset::Credit { code, .. } => Some(code.clone()),
            },
            self.issuer().map(str::to_string),
        )
    }
}

impl wire::OrderbookQuery {
    pub fn new(selling: &Asset, buying: &Asset, limit: Option<u32>) -> Self {
        let (selling_asset_type, selling_asset_code, selling_asset_issuer) = selling.query_parts();
        let (buying_asset_type, buying_asset_code, buying_asset_issuer) = buying.query_parts();
        Self {
            selling_asset_type,
            selling_asset_code,
            selling_asset_issuer,
            buying_asset_type,
            buying_asset_code,
            buying_asset_issuer,
            limit,
        }
    }
}

impl wire::StrictSendPathsQuery {
    pub fn new(source: &Asset, source_amount: &str, destinations: &[Asset]) -> Self {
        let (source_asset_type, source_asset_code, source_asset_issuer) = source.query_parts();
        Self {
            source_asset_type,
            source_asset_code,
            source_asset_issuer,
            source_amount: source_amount.to_string(),
            destination_assets: destinations
                .iter()
                .map(Asset::canonical)
                .collect::<Vec<_>>()
                .join(","),
        }
    }
}

impl TryFrom<wire::OrderbookResponse> for Orderbook {
    type Error = String;

    fn try_from(source: wire::OrderbookResponse) -> Result<Self, Self::Error> {
        let level = |l: wire::OrderbookLevelResponse| PriceLevel {
            price: l.price,
            amount: l.amount,
        };
        Ok(Orderbook {
            base: Asset::try_from(&source.base)?,
            counter: Asset::try_from(&source.counter)?,
            bids: source.bids.into_iter().map(level).collect(),
            asks: source.asks.into_iter().map(level).collect(),
        })
    }
}

impl TryFrom<wire::PathRecord> for PaymentPath {
    type Error = String;

    fn try_from(source: wire::PathRecord) -> Result<Self, Self::Error> {
        let destination = asset_from_parts(
            &source.destination_asset_type,
            source.destination_asset_code.as_deref(),
            source.destination_asset_issuer.as_deref(),
        )?;
        let hops = source
            .path
            .iter()
            .map(Asset::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(PaymentPath {
            source_amount: source.source_amount,
            destination,
            destination_amount: source.destination_amount,
            hops,
        })
    }
}

impl NetworkInfo {
    pub(crate) fn from_ledger(record: wire::LedgerRecord, passphrase: &str) -> Self {
        NetworkInfo {
            latest_ledger: record.sequence,
            protocol_version: record.protocol_version,
            base_fee_stroops: record.base_fee_in_stroops,
            base_reserve_stroops: record.base_reserve_in_stroops,
            closed_at: record.closed_at,
            network_passphrase: passphrase.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    const ISSUER: &str = "GA5ZSEJYB37JRC5AVCIA5MOP4RHTM335X2KGX3IHOJAPP5RE34K4KZVN";

    #[test]
    fn test_orderbook_query_native_to_credit() {
        let q = wire::OrderbookQuery::new(&Asset::Native, &Asset::credit("USDC", ISSUER), Some(20));
        let encoded = serde_urlencoded::to_string(&q).unwrap();
        assert_eq!(
            encoded,
            format!(
                "selling_asset_type=native&buying_asset_type=credit_alphanum4&buying_asset_code=USDC&buying_asset_issuer={}&limit=20",
                ISSUER
            )
        );
    }

    #[test]
    fn test_strict_send_query_destination_list() {
        let q = wire::StrictSendPathsQuery::new(
            &Asset::Native,
            "10",
            &[Asset::credit("USDC", ISSUER), Asset::Native],
        );
        assert_eq!(q.destination_assets, format!("USDC:{},native", ISSUER));
        assert_eq!(q.source_asset_type, "native");
        assert!(q.source_asset_code.is_none());
    }

    #[test]
    fn test_orderbook_from_wire() {
        let json = format!(
            r#"{{
                "bids": [{{"price": "0.1100000", "amount": "250.0000000"}}],
                "asks": [{{"price": "0.1200000", "amount": "100.0000000"}}],
                "base": {{"asset_type": "native"}},
                "counter": {{"asset_type": "credit_alphanum4", "asset_code": "USDC", "asset_issuer": "{}"}}
            }}"#,
            ISSUER
        );
        let resp: wire::OrderbookResponse = serde_json::from_str(&json).unwrap();
        let book = Orderbook::try_from(resp).unwrap();
        assert_eq!(book.base, Asset::Native);
        assert_eq!(book.counter, Asset::credit("USDC", ISSUER));
        assert_eq!(book.best_bid(), Some(Decimal::from_str("0.11").unwrap()));
    }

    #[test]
    fn test_path_record_from_wire() {
        let json = format!(
            r#"{{
                "source_asset_type": "native",
                "source_amount": "10.0000000",
                "destination_asset_type": "credit_alphanum4",
                "destination_asset_code": "USDC",
                "destination_asset_issuer": "{0}",
                "destination_amount": "1.1523000",
                "path": [{{"asset_type": "credit_alphanum4", "asset_code": "AQUA", "asset_issuer": "{0}"}}]
            }}"#,
            ISSUER
        );
        let record: wire::PathRecord = serde_json::from_str(&json).unwrap();
        let path = PaymentPath::try_from(record).unwrap();
        assert_eq!(path.destination_amount, Decimal::from_str("1.1523").unwrap());
        assert_eq!(path.hops.len(), 1);
        assert_eq!(path.hops[0].code(), "AQUA");
    }

    #[test]
    fn test_incomplete_credit_asset_rejected() {
        let resp = wire::AssetResponse {
            asset_type: "credit_alphanum4".to_string(),
            asset_code: Some("USDC".to_string()),
            asset_issuer: None,
        };
        assert!(Asset::try_from(&resp).is_err());
    }
}
