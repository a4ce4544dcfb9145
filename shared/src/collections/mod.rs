mod cyclic_array;
mod dual_map;
mod duration_average;
mod error;
mod pool;

pub use cyclic_array::CyclicArray;
pub use dual_map::DualMap;
pub use duration_average::DurationAverage;
pub use error::CollectionError;
pub use pool::{Pool, PoolKey};
