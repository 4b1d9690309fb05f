//! Clients for the external services the site talks to.

mod assistant;
mod audio;
mod error;
mod projects;

pub use assistant::Assistant;
pub use audio::AudioBuffer;
pub use error::IntegrationError;
pub use projects::ProjectClient;
