pub mod csv_output;

use postal_model::{CleanRecord, RejectedRecord};

pub use csv_output::{write_accepted, write_outputs, write_rejected};

/// Borrowed view over the two routed streams, as handed to the writers.
#[derive(Debug, Clone, Copy)]
pub struct CleanedStreams<'a> {
    pub accepted: &'a [CleanRecord],
    pub rejected: &'a [RejectedRecord],
}
