//! Driving (input) ports - implemented by application services.

use crate::domain::ValidationError;
use crate::error::LinkListResult;

/// Bridge between a flat form and a domain entity.
///
/// `get_data` loads the current state of the form; `set_data` validates a
/// submission and persists it. Validation problems are returned as data
/// (`Ok` with a non-empty list); only infrastructure failures are `Err`.
pub trait FormDataProvider {
    /// What `get_data` returns.
    type Data;
    /// What `set_data` accepts.
    type Submission;

    fn get_data(&self) -> LinkListResult<Self::Data>;

    fn set_data(&mut self, data: Self::Submission) -> LinkListResult<Vec<ValidationError>>;
}
