mod algorithm;
mod config;
mod stream;

pub use algorithm::Algorithm;
pub use config::Config;
pub use stream::Stream;
