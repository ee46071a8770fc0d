mod dispersion;
mod velocity;

pub use dispersion::*;
pub use velocity::*;
