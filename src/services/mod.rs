// Service exports
pub mod marketplace;

pub use marketplace::{MarketplaceClient, MarketplaceError};
