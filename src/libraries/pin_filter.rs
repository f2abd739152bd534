use serde::Deserialize;

use crate::models::SampledPin;

/// Case-insensitive substring filter over pin names and addresses.
/// An empty field matches every pin.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PinFilter {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

impl PinFilter {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.name.is_empty() && self.address.is_empty()
    }

    pub fn matches(&self, pin: &SampledPin) -> bool {
        pin.info.name.to_lowercase().contains(&self.name.to_lowercase())
            && pin.info.address.to_lowercase().contains(&self.address.to_lowercase())
    }

    /// Keep matching pins in their original order
    pub fn apply(&self, pins: &[SampledPin]) -> Vec<SampledPin> {
        pins.iter().filter(|pin| self.matches(pin)).cloned().collect()
    }
}
