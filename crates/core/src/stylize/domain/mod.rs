pub mod style_transform;
