//! Webhook server for the commerce chatbot
//!
//! Receives inbound WhatsApp messages via a Twilio-style webhook,
//! resolves the sender's session, runs the agent pipeline, and answers
//! with TwiML. The messaging platform always gets a 200 with a reply
//! body; errors degrade to an apology message, never a 5xx.

pub mod http;
pub mod metrics;
pub mod session;
pub mod state;

pub use http::create_router;
pub use session::{Session, SessionManager};
pub use state::AppState;

use thiserror::Error;

/// Server errors
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Session error: {0}")]
    Session(String),

    #[error("Startup error: {0}")]
    Startup(String),
}
