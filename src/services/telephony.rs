//! Telephony information passthrough.

/// Source of the current carrier name.
pub trait CarrierInfo: Send + Sync {
    /// Name of the current carrier, empty when there is none.
    fn current_carrier_name(&self) -> String;
}

/// Carrier info with a fixed name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCarrier {
    name: String,
}

impl StaticCarrier {
    /// Creates carrier info that always reports `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

impl CarrierInfo for StaticCarrier {
    fn current_carrier_name(&self) -> String {
        self.name.clone()
    }
}
