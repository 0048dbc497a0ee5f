//! The three playing zones and their legality rules.
//!
//! ## Key Types
//!
//! - `Tableau`: seven columns, each a hidden pile under an exposed run
//! - `Foundation`: four ascending suit stacks, the win condition
//! - `StockWaste`: draw pile and discard pile with unlimited recycling
//! - `Column`: in-range tableau column index
//!
//! Zone operations return `Result<_, MoveError>` and leave the zone
//! untouched on failure.

pub mod foundation;
pub mod stock_waste;
pub mod tableau;

pub use foundation::{Foundation, FoundationTop};
pub use stock_waste::StockWaste;
pub use tableau::{Column, Tableau, TableauColumn, COLUMN_COUNT};
