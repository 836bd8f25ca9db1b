//! Application Configuration

/// Marketplace configuration
#[derive(Debug, Clone, PartialEq)]
pub struct MarketplaceConfig {
    /// Tax applied on top of an accepted offer
    pub tax_rate: f64,
}

impl Default for MarketplaceConfig {
    fn default() -> Self {
        Self { tax_rate: 0.12 }
    }
}

impl MarketplaceConfig {
    pub fn with_tax_rate(tax_rate: f64) -> Self {
        Self { tax_rate }
    }
}
