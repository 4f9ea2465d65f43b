use bigdecimal::{BigDecimal, One};

/// Fixed-point scale used by every controller and market mantissa.
pub const MANTISSA_FACTOR: u32 = 18;

/// Decimals of every market share token.
pub const CTOKEN_DECIMALS: u32 = 8;

pub const SECONDS_PER_HOUR: i64 = 60 * 60;
pub const SECONDS_PER_DAY: i64 = 60 * 60 * 24;
pub const SECONDS_PER_YEAR: i64 = SECONDS_PER_DAY * 365;

/// `10^decimals`, built by repeated multiplication so the result keeps an
/// exact integer representation.
pub fn exponent_to_big_decimal(decimals: u32) -> BigDecimal {
    let ten = BigDecimal::from(10);
    let mut value = BigDecimal::one();

    for _ in 0..decimals {
        value = value * &ten;
    }

    value
}

pub fn hundred() -> BigDecimal {
    BigDecimal::from(100)
}

/// Raw integer token units into a human readable amount.
pub fn amount_to_decimal(raw: &BigDecimal, decimals: u32) -> BigDecimal {
    raw / &exponent_to_big_decimal(decimals)
}

/// `raw / 10^18`
pub fn mantissa_to_decimal(raw: &BigDecimal) -> BigDecimal {
    amount_to_decimal(raw, MANTISSA_FACTOR)
}

/// `raw / 10^18 * 100`
pub fn mantissa_to_percentage(raw: &BigDecimal) -> BigDecimal {
    mantissa_to_decimal(raw) * hundred()
}

/// Linear annualisation of a per-period rate mantissa, in percent.
pub fn rate_per_period_to_apy(
    rate_per_period: &BigDecimal,
    periods_per_year: i64,
) -> BigDecimal {
    let periods = BigDecimal::from(periods_per_year);
    mantissa_to_percentage(&(rate_per_period * &periods))
}

/// Scale of the oracle answer for an underlying token: prices are quoted
/// with `36 - decimals` fractional digits.
pub fn oracle_price_to_decimal(
    raw: &BigDecimal,
    underlying_decimals: u32,
) -> BigDecimal {
    let factor =
        (MANTISSA_FACTOR * 2).saturating_sub(underlying_decimals);
    amount_to_decimal(raw, factor)
}

/// Share-to-underlying exchange rate from its raw mantissa.
pub fn exchange_rate_to_decimal(
    raw: &BigDecimal,
    underlying_decimals: u32,
    share_decimals: u32,
) -> BigDecimal {
    let factor = (MANTISSA_FACTOR + underlying_decimals)
        .saturating_sub(share_decimals);
    amount_to_decimal(raw, factor)
}
