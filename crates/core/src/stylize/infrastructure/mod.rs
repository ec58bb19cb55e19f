pub mod anime;
pub mod comic;
pub mod enhancement;
pub mod grain;
pub mod oil;
pub mod style_factory;
