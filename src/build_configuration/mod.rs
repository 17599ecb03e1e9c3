/// Build configuration domain - models, services and policies
///
/// Pure, synchronous logic with no infrastructure dependencies.
pub mod domain;
pub mod policies;
pub mod services;
