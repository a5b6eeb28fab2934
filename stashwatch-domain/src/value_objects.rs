// Domain value objects
pub mod bounds;
pub mod currency;
pub mod links;
pub mod rarity;
pub mod tri_state;

pub use bounds::*;
pub use currency::CurrencyRates;
pub use links::*;
pub use rarity::*;
pub use tri_state::*;
