pub mod bed;
pub mod compression;
mod traits;

pub use traits::ReadRecord;
