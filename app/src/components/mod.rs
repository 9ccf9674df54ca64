mod counter;

pub use counter::*;
