//! Herald Dispatch
//!
//! Forwards an analysis to the external automation webhook and types its
//! response.
//!
//! # Overview
//!
//! The dispatcher is the third stage of the pipeline. It serializes the
//! [`herald_domain::AutomationPayload`] (document text, question, structured
//! insight, recipient email), POSTs it to the configured webhook URL in a
//! single call with no retry, and validates the response shape immediately:
//! either all three expected keys are present and a typed
//! [`herald_domain::AutomationOutcome`] comes back, or the caller gets a
//! typed, recoverable error that carries the raw body for debugging.
//!
//! The automation's internal behavior (email sending, conditional logic) is
//! outside this crate's control and is not validated.

#![warn(missing_docs)]

mod dispatcher;
mod error;
mod validate;

pub use dispatcher::{WebhookDispatcher, DEFAULT_TIMEOUT_SECS};
pub use error::DispatchError;
pub use validate::outcome_from_value;
