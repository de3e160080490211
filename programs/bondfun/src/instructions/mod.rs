pub mod configure;
pub mod launch;
pub mod swap;
pub mod quote;
pub mod migrate;

pub use configure::*;
pub use launch::*;
pub use swap::*;
pub use quote::*;
pub use migrate::*;
