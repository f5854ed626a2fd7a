pub mod scroll;
pub mod shine;
