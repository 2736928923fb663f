//! Remote answer generation
//!
//! Builds the request for the external text-generation endpoint and surfaces
//! the answer text. The [`GenerationProvider`] trait is the seam: production
//! code talks to the real endpoint through [`RemoteGenerationProvider`],
//! tests substitute a scripted provider.

mod provider;
mod types;

pub use provider::{GenerationProvider, RemoteGenerationProvider};
pub use types::GenerationError;

#[cfg(test)]
pub use provider::MockProvider;
