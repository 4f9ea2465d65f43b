use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};

use crate::{
    dao::Entity,
    helpers::enums::{InterestRateSide, InterestRateType},
};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Interest_Rate {
    pub id: String,
    pub side: InterestRateSide,
    pub r#type: InterestRateType,
    /// APY in percent.
    pub rate: BigDecimal,
}

impl Interest_Rate {
    pub fn make_id(
        side: InterestRateSide,
        r#type: InterestRateType,
        market_id: &str,
    ) -> String {
        format!("{}-{}-{}", side, r#type, market_id)
    }
}

impl Entity for Interest_Rate {
    const KIND: &'static str = "InterestRate";

    fn id(&self) -> &str {
        &self.id
    }
}
