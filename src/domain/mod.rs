pub mod line;
pub mod substation;
pub mod units;

pub use line::*;
pub use substation::*;
pub use units::*;
