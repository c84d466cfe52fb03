pub mod dividend;
pub mod price;
pub mod range;

pub use dividend::*;
pub use price::*;
pub use range::*;
