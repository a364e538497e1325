pub mod bag;
pub mod money;
pub mod outcome;

pub use bag::*;
pub use money::*;
pub use outcome::*;
