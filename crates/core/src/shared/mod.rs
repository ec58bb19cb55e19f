pub mod constants;
pub mod error;
pub mod face_box;
pub mod landmarks;
pub mod pixel_buffer;
