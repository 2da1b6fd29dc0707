pub mod bank;
pub mod matcher;
pub mod question;

pub use bank::*;
pub use matcher::*;
pub use question::*;
