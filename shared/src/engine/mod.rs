mod copier;
mod element_ext;
mod interpolator;
mod navigate;
mod serializer;
mod stringify;

pub use copier::{clone_element, copy_to, equal_to, merge_to, predicted_equal_to, reset, zero};
pub use element_ext::ElementExt;
pub use interpolator::interpolate_into;
pub use navigate::{
    navigate, navigate_mut, navigate_zipped, navigate_zipped3_mut, navigate_zipped_mut,
    Navigation,
};
pub use serializer::{byte_length, deserialize, serialize};
pub use stringify::stringify;
