//! Application Layer
//!
//! Use cases and application services.

pub mod bootstrap;
pub mod config;
pub mod register;
pub mod sign_in;
pub mod sign_out;
pub mod sign_up;
pub mod update_profile;
pub mod update_user;

// Re-exports
pub use bootstrap::BootstrapUseCase;
pub use config::AuthConfig;
pub use register::RegisterUseCase;
pub use sign_in::SignInUseCase;
pub use sign_out::SignOutUseCase;
pub use sign_up::SignUpUseCase;
pub use update_profile::UpdateProfileUseCase;
pub use update_user::UpdateUserUseCase;
