/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod build_request;
mod build_response;
mod output_format;

pub use build_request::{BuildRequest, BuildRequestBuilder};
pub use build_response::{BuildResponse, CompatibilityResponse, ComponentSuggestions};
pub use output_format::OutputFormat;
