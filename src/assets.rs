pub mod color;
pub mod decode;
pub mod text;
