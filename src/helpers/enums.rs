use std::{fmt, io, str::FromStr};

use serde::{Deserialize, Serialize};

/// User actions tracked by the usage and market snapshots.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventType {
    Deposit,
    Withdraw,
    Borrow,
    Repay,
    Liquidate,
}

impl EventType {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Deposit => "deposit",
            EventType::Withdraw => "withdraw",
            EventType::Borrow => "borrow",
            EventType::Repay => "repay",
            EventType::Liquidate => "liquidate",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterestRateSide {
    Lender,
    Borrower,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum InterestRateType {
    Stable,
    Variable,
    Fixed,
}

impl fmt::Display for InterestRateSide {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InterestRateSide::Lender => write!(f, "LENDER"),
            InterestRateSide::Borrower => write!(f, "BORROWER"),
        }
    }
}

impl fmt::Display for InterestRateType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            InterestRateType::Stable => write!(f, "STABLE"),
            InterestRateType::Variable => write!(f, "VARIABLE"),
            InterestRateType::Fixed => write!(f, "FIXED"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProtocolType {
    Exchange,
    Lending,
    Yield,
    Bridge,
    Generic,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LendingType {
    Cdp,
    Pooled,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RiskType {
    Global,
    Isolated,
}

/// Coingecko style network slugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Network {
    #[serde(rename = "ARBITRUM_ONE")]
    Arbitrum,
    #[serde(rename = "AVALANCHE")]
    Avalanche,
    #[serde(rename = "AURORA")]
    Aurora,
    #[serde(rename = "BINANCE_SMART_CHAIN")]
    Bsc,
    #[serde(rename = "CELO")]
    Celo,
    #[serde(rename = "CRONOS")]
    Cronos,
    #[serde(rename = "ETHEREUM")]
    Ethereum,
    #[serde(rename = "FANTOM")]
    Fantom,
    #[serde(rename = "HARMONY_SHARD_0")]
    Harmony,
    #[serde(rename = "MOONBEAM")]
    Moonbeam,
    #[serde(rename = "MOONRIVER")]
    Moonriver,
    #[serde(rename = "OPTIMISTIC_ETHEREUM")]
    Optimism,
    #[serde(rename = "POLYGON_POS")]
    Polygon,
    #[serde(rename = "XDAI")]
    Xdai,
}

impl FromStr for Network {
    type Err = io::Error;

    fn from_str(value: &str) -> Result<Network, Self::Err> {
        match value {
            "ARBITRUM_ONE" => Ok(Network::Arbitrum),
            "AVALANCHE" => Ok(Network::Avalanche),
            "AURORA" => Ok(Network::Aurora),
            "BINANCE_SMART_CHAIN" => Ok(Network::Bsc),
            "CELO" => Ok(Network::Celo),
            "CRONOS" => Ok(Network::Cronos),
            "ETHEREUM" => Ok(Network::Ethereum),
            "FANTOM" => Ok(Network::Fantom),
            "HARMONY_SHARD_0" => Ok(Network::Harmony),
            "MOONBEAM" => Ok(Network::Moonbeam),
            "MOONRIVER" => Ok(Network::Moonriver),
            "OPTIMISTIC_ETHEREUM" => Ok(Network::Optimism),
            "POLYGON_POS" => Ok(Network::Polygon),
            "XDAI" => Ok(Network::Xdai),
            _ => Err(io::Error::other("Network not supported")),
        }
    }
}
