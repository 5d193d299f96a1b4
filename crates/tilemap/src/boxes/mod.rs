//! Rectangle-based map authoring.
pub mod manager;
pub mod region;

pub use manager::BoxManager;
pub use region::TileBox;
