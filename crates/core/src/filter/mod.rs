pub mod color;
pub mod convolution;
pub mod kernel;
pub mod neighborhood;
