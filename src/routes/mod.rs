pub mod contact;
pub mod health_check;

pub use contact::*;
pub use health_check::*;
