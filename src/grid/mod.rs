//! The letter grid.
//!
//! - [`Grid`]: fixed-shape cell store with bounds-checked access
//! - [`Tile`]: a letter at a position, shared by board tiles and snake segments
//! - [`STOCK_LAYOUT`]: the default board

mod layout;
mod store;
mod tile;

pub use layout::STOCK_LAYOUT;
pub use store::Grid;
pub use tile::Tile;
