pub use self::{grid::*, hole::*, obstacle::*, terrain::*};

pub(crate) mod grid;
pub(crate) mod hole;
pub(crate) mod obstacle;
pub(crate) mod terrain;
