pub mod feather;
pub mod field;
