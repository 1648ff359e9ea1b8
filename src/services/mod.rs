// Service exports
pub mod marketplace;

pub use marketplace::{MarketplaceError, MarketplaceStore};
