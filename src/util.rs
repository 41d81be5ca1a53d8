pub mod clock;
pub mod path;
