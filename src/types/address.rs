use serde::{Deserialize, Deserializer};

/// Addresses are stored and compared lowercase whatever the log source emits.
pub fn lowercase<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let address = String::deserialize(deserializer)?;
    Ok(address.to_lowercase())
}
