mod use_counter;

pub use use_counter::use_counter;
