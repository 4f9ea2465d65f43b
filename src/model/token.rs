use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::dao::Entity;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Token {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub decimals: u32,
    pub last_price_usd: Option<BigDecimal>,
    pub last_price_block_number: Option<i64>,
}

impl Entity for Token {
    const KIND: &'static str = "Token";

    fn id(&self) -> &str {
        &self.id
    }
}
