//! Per-section point rules. Each module exposes plain scoring functions; the housing-type
//! branching lives in [`super::scorer`].

pub mod energy;
pub mod kitchen;
pub mod outdoor;
pub mod sanitary;
pub mod surface;
pub mod woz;

pub use energy::EnergyPoints;
pub use kitchen::KitchenPoints;
pub use outdoor::OutdoorPoints;
pub use sanitary::SanitaryPoints;
pub use surface::{SharerSource, SurfacePoints};
pub use woz::WozPoints;
