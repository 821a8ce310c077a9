//! Domain types for the weather station browser.
//!
//! These are the validated values handed between the remote feed, the
//! local store and the presentation layer. Stations enforce their
//! invariants at construction time; observations are always renderable.

mod error;
mod observation;
mod states;
mod station;

pub use error::DomainError;
pub use observation::{CurrentObservation, CurrentObservationBuilder, NOT_PROVIDED};
pub use states::StateSet;
pub use station::Station;
