//! # brandcraft-genai - Generation Service Client
//!
//! Talks to the Gemini `generateContent` REST endpoint to turn a
//! [`BrandBrief`](brandcraft_core::BrandBrief) into a
//! [`BrandIdentity`](brandcraft_core::BrandIdentity).
//!
//! Depends on [`brandcraft_core`] for domain types and error handling.
//!
//! ## Public API
//!
//! ### Request Building
//! - [`build_prompt()`] - Natural-language prompt embedding the brief verbatim
//! - [`response_schema()`] - Strict JSON schema for the identity object
//!
//! ### Wire Protocol
//! - [`GenerateContentRequest`], [`GenerateContentResponse`] - REST payloads
//! - [`parse_identity()`] - Parse the returned JSON text into an identity
//!
//! ### Client
//! - [`IdentityGenerator`] - Async trait implemented by every generator
//! - [`GeminiClient`] - reqwest-backed implementation
//! - [`ClientConfig`] - Endpoint, model, credential and validation options
//! - [`resolve_api_key()`] - Read the credential from the environment

pub mod client;
pub mod prompt;
pub mod protocol;
pub mod schema;
#[cfg(any(test, feature = "test-helpers"))]
pub mod test_utils;

// Public API re-exports
pub use client::{
    resolve_api_key, ClientConfig, GeminiClient, IdentityGenerator, LocalIdentityGenerator,
    DEFAULT_API_BASE, DEFAULT_API_KEY_ENV, DEFAULT_MODEL, FALLBACK_API_KEY_ENV,
};
pub use prompt::build_prompt;
pub use protocol::{
    parse_identity, ApiErrorBody, ApiErrorEnvelope, Candidate, Content, GenerateContentRequest,
    GenerateContentResponse, GenerationConfig, Part,
};
pub use schema::response_schema;
