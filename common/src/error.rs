use thiserror::Error;

/// Errors raised by the weather station while notifying observers or rendering displays.
#[derive(Error, Debug)]
pub enum StationError {
    /// A display was asked to render before it received its first measurement.
    #[error("{display} has no data to display yet")]
    NoData { display: &'static str },

    /// Observers are registered but no measurement has been recorded.
    #[error("no measurement has been recorded yet")]
    NoMeasurements,

    /// The observer is already borrowed, e.g. it is being notified re-entrantly.
    #[error("observer is busy: {0}")]
    ObserverBusy(#[from] std::cell::BorrowMutError),

    /// Writing to the display output failed.
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    /// The bundled measurement scenario could not be parsed.
    #[error("scenario error: {0}")]
    Scenario(#[from] serde_json::Error),
}
