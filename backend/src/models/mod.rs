pub mod lamp;
pub mod time;

pub use lamp::*;
pub use time::*;
