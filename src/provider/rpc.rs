use std::time::Duration;

use async_trait::async_trait;
use bigdecimal::{
    num_bigint::{BigInt, Sign},
    BigDecimal,
};
use reqwest::Client;
use serde_json::json;
use tracing::warn;
use url::Url;

use crate::{
    configuration::Config,
    error::{self, Error},
    types::{CallResult, RpcResponse},
};

use super::ChainReader;

const TOTAL_SUPPLY: &str = "0x18160ddd";
const UNDERLYING: &str = "0x6f307dc3";
const NAME: &str = "0x06fdde03";
const SYMBOL: &str = "0x95d89b41";
const DECIMALS: &str = "0x313ce567";
const EXCHANGE_RATE_STORED: &str = "0x182df0f5";
const TOTAL_BORROWS: &str = "0x47bd3718";
const SUPPLY_RATE_PER_BLOCK: &str = "0xae9d70b0";
const BORROW_RATE_PER_BLOCK: &str = "0xf8f9da28";
const RESERVE_FACTOR_MANTISSA: &str = "0x173b9904";
const GET_UNDERLYING_PRICE: &str = "0xfc57d4df";
const LIQUIDATION_INCENTIVE_MANTISSA: &str = "0x4ada90af";

const WORD: usize = 64;
const WORD_BYTES: usize = 32;
const ADDRESS_BYTES: usize = 20;

/// [`ChainReader`] over an EVM JSON-RPC endpoint using `eth_call`.
#[derive(Debug)]
pub struct RpcReader {
    host: Url,
    pub http: Client,
}

impl RpcReader {
    pub fn new(config: &Config) -> Result<RpcReader, Error> {
        let host = Url::parse(&config.rpc_host)?;
        let http = match Client::builder()
            .timeout(Duration::from_secs(config.timeout))
            .build()
        {
            Ok(c) => c,
            Err(e) => {
                return Err(error::Error::ReqwestError(e));
            },
        };

        Ok(RpcReader { host, http })
    }

    async fn eth_call(
        &self,
        to: &str,
        data: String,
        block_number: i64,
    ) -> Result<String, Error> {
        let body = json!({
            "jsonrpc": "2.0",
            "id": 1,
            "method": "eth_call",
            "params": [
                { "to": to, "data": data },
                format!("0x{:x}", block_number)
            ]
        });

        let response = self
            .http
            .post(self.host.clone())
            .json(&body)
            .send()
            .await?
            .json::<RpcResponse>()
            .await?;

        if let Some(e) = response.error {
            return Err(Error::RpcError(format!("{} ({})", e.message, e.code)));
        }

        match response.result {
            Some(result) if result.len() > 2 => Ok(result),
            _ => Err(Error::RpcError(String::from("empty result"))),
        }
    }

    async fn call<T>(
        &self,
        to: &str,
        selector: &str,
        args: &str,
        block_number: i64,
        decode: fn(&str) -> Result<T, Error>,
    ) -> CallResult<T> {
        let data = format!("{}{}", selector, args);
        let result = self
            .eth_call(to, data, block_number)
            .await
            .and_then(|raw| decode(&raw));

        match result {
            Ok(value) => CallResult::Value(value),
            Err(e) => {
                warn!(
                    "[RpcReader] call {} on {} at block {} reverted: {}",
                    selector, to, block_number, e
                );
                CallResult::Reverted
            },
        }
    }
}

#[async_trait]
impl ChainReader for RpcReader {
    async fn underlying(
        &self,
        market: &str,
        block_number: i64,
    ) -> CallResult<String> {
        self.call(market, UNDERLYING, "", block_number, decode_address)
            .await
    }

    async fn name(&self, token: &str, block_number: i64) -> CallResult<String> {
        self.call(token, NAME, "", block_number, decode_string).await
    }

    async fn symbol(
        &self,
        token: &str,
        block_number: i64,
    ) -> CallResult<String> {
        self.call(token, SYMBOL, "", block_number, decode_string).await
    }

    async fn decimals(&self, token: &str, block_number: i64) -> CallResult<u32> {
        self.call(token, DECIMALS, "", block_number, decode_u32).await
    }

    async fn total_supply(
        &self,
        market: &str,
        block_number: i64,
    ) -> CallResult<BigDecimal> {
        self.call(market, TOTAL_SUPPLY, "", block_number, decode_uint)
            .await
    }

    async fn exchange_rate_stored(
        &self,
        market: &str,
        block_number: i64,
    ) -> CallResult<BigDecimal> {
        self.call(market, EXCHANGE_RATE_STORED, "", block_number, decode_uint)
            .await
    }

    async fn total_borrows(
        &self,
        market: &str,
        block_number: i64,
    ) -> CallResult<BigDecimal> {
        self.call(market, TOTAL_BORROWS, "", block_number, decode_uint)
            .await
    }

    async fn supply_rate_per_period(
        &self,
        market: &str,
        block_number: i64,
    ) -> CallResult<BigDecimal> {
        self.call(market, SUPPLY_RATE_PER_BLOCK, "", block_number, decode_uint)
            .await
    }

    async fn borrow_rate_per_period(
        &self,
        market: &str,
        block_number: i64,
    ) -> CallResult<BigDecimal> {
        self.call(market, BORROW_RATE_PER_BLOCK, "", block_number, decode_uint)
            .await
    }

    async fn reserve_factor_mantissa(
        &self,
        market: &str,
        block_number: i64,
    ) -> CallResult<BigDecimal> {
        self.call(
            market,
            RESERVE_FACTOR_MANTISSA,
            "",
            block_number,
            decode_uint,
        )
        .await
    }

    async fn underlying_price(
        &self,
        oracle: &str,
        market: &str,
        block_number: i64,
    ) -> CallResult<BigDecimal> {
        let args = encode_address(market);
        self.call(
            oracle,
            GET_UNDERLYING_PRICE,
            &args,
            block_number,
            decode_uint,
        )
        .await
    }

    async fn liquidation_incentive_mantissa(
        &self,
        controller: &str,
        block_number: i64,
    ) -> CallResult<BigDecimal> {
        self.call(
            controller,
            LIQUIDATION_INCENTIVE_MANTISSA,
            "",
            block_number,
            decode_uint,
        )
        .await
    }
}

fn strip_prefix(raw: &str) -> &str {
    raw.strip_prefix("0x").unwrap_or(raw)
}

fn word(raw: &str, index: usize) -> Result<&str, Error> {
    let digits = strip_prefix(raw);
    let start = index * WORD;

    digits.get(start..start + WORD).ok_or_else(|| {
        Error::RpcError(format!("abi word {} out of range", index))
    })
}

/// Left pads an address into a single abi word.
fn encode_address(address: &str) -> String {
    format!("{:0>64}", strip_prefix(address).to_lowercase())
}

fn word_bytes(raw: &str, index: usize) -> Result<Vec<u8>, Error> {
    Ok(hex::decode(word(raw, index)?)?)
}

fn decode_uint(raw: &str) -> Result<BigDecimal, Error> {
    let bytes = word_bytes(raw, 0)?;
    Ok(BigDecimal::from(BigInt::from_bytes_be(Sign::Plus, &bytes)))
}

fn decode_u32(raw: &str) -> Result<u32, Error> {
    let bytes = word_bytes(raw, 0)?;
    let (high, low) = bytes.split_at(WORD_BYTES - 4);

    if high.iter().any(|b| *b != 0) {
        return Err(Error::RpcError(format!(
            "value 0x{} exceeds u32",
            hex::encode(&bytes)
        )));
    }

    let mut value = [0u8; 4];
    value.copy_from_slice(low);
    Ok(u32::from_be_bytes(value))
}

fn decode_address(raw: &str) -> Result<String, Error> {
    let bytes = word_bytes(raw, 0)?;
    Ok(format!("0x{}", hex::encode(&bytes[WORD_BYTES - ADDRESS_BYTES..])))
}

/// Dynamic abi `string`, falling back to a zero padded `bytes32` for
/// tokens that return one.
fn decode_string(raw: &str) -> Result<String, Error> {
    let digits = strip_prefix(raw);

    let bytes = if digits.len() > WORD * 2 {
        let length = usize::from_str_radix(word(raw, 1)?, 16)?;
        let start = WORD * 2;
        let data = length
            .checked_mul(2)
            .and_then(|len| start.checked_add(len))
            .and_then(|end| digits.get(start..end))
            .ok_or_else(|| {
                Error::RpcError(String::from("abi string out of range"))
            })?;
        hex::decode(data)?
    } else {
        let mut bytes = word_bytes(raw, 0)?;
        while bytes.last() == Some(&0) {
            bytes.pop();
        }
        bytes
    };

    String::from_utf8(bytes)
        .map_err(|e| Error::RpcError(format!("abi string: {}", e)))
}
