/// Use cases module containing application business logic orchestration
mod configure_build;

pub use configure_build::ConfigureBuildUseCase;
