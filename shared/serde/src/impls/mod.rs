mod scalars;
mod string;

#[cfg(feature = "glam_support")]
mod vector;
