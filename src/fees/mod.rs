pub mod household;
pub mod poverty;
pub mod waiver;

pub use household::*;
pub use poverty::*;
pub use waiver::*;
