//! Multi-turn chat sessions.
//!
//! A session pins a model and a persona instruction at creation and carries
//! the conversation history in memory for the lifetime of the value. Every
//! `send` replays the full history, so the external service needs no
//! session affinity. History is never serialized.

use crate::client::GenAiClient;
use crate::error::GenAiError;
use crate::types::{Content, GenerateRequest, Part};

/// A stateful conversation handle.
pub struct ChatSession {
    client: GenAiClient,
    model: String,
    system_instruction: String,
    history: Vec<Content>,
}

impl ChatSession {
    #[must_use]
    pub fn new(client: GenAiClient, model: &str, system_instruction: &str) -> Self {
        Self {
            client,
            model: model.to_owned(),
            system_instruction: system_instruction.to_owned(),
            history: Vec::new(),
        }
    }

    /// Appends the user message, requests one assistant reply, appends it to
    /// the history, and returns it.
    ///
    /// On error the user turn is rolled back so a failed send can be retried
    /// without duplicating the message.
    ///
    /// # Errors
    ///
    /// Propagates [`GenAiError`] from the underlying call, including
    /// [`GenAiError::EmptyResponse`] when the model returns no text.
    pub async fn send(&mut self, message: &str) -> Result<String, GenAiError> {
        self.history.push(Content::user(vec![Part::text(message)]));

        let request = GenerateRequest::conversation(self.history.clone())
            .with_system_instruction(self.system_instruction.clone());

        let reply = match self.client.generate_text(&self.model, &request).await {
            Ok(text) => text,
            Err(e) => {
                self.history.pop();
                return Err(e);
            }
        };

        self.history.push(Content::model(vec![Part::text(reply.clone())]));
        Ok(reply)
    }

    /// Number of turns (user + model) exchanged so far.
    #[must_use]
    pub fn turn_count(&self) -> usize {
        self.history.len()
    }
}
