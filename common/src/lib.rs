pub mod error;
pub mod sensor;
pub mod weather;

#[cfg(test)]
pub(crate) mod testing;

pub use error::StationError;
pub use sensor::Measurement;

/// Sink every display writes its rendered text into.
pub type OutputPointer = Box<dyn std::io::Write>;
