// Option record types

pub mod image;

pub use image::ImageOptions;
