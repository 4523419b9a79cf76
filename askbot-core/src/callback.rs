//! Callback tokens attached to inline buttons.
//!
//! Format is `<action>:<conversation id>`; a bare `<action>` is accepted too, in which case the
//! conversation has to come from the message that carried the button.

use std::fmt;

use crate::types::ConversationId;

/// Action name of the "Ask LLM" button.
pub const ASK_LLM_ACTION: &str = "ask_llm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallbackToken {
    pub action: String,
    pub conversation: Option<ConversationId>,
}

impl CallbackToken {
    /// Token for the "Ask LLM" button of `conversation`.
    pub fn ask(conversation: ConversationId) -> Self {
        Self {
            action: ASK_LLM_ACTION.to_string(),
            conversation: Some(conversation),
        }
    }

    /// Parses callback data. Returns None for empty data or a non-numeric conversation part.
    pub fn parse(data: &str) -> Option<Self> {
        let (action, conversation) = match data.split_once(':') {
            Some((action, id)) => (action, Some(ConversationId(id.parse().ok()?))),
            None => (data, None),
        };
        if action.is_empty() {
            return None;
        }
        Some(Self {
            action: action.to_string(),
            conversation,
        })
    }

    pub fn is_ask(&self) -> bool {
        self.action == ASK_LLM_ACTION
    }
}

impl fmt::Display for CallbackToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.conversation {
            Some(id) => write!(f, "{}:{}", self.action, id),
            None => f.write_str(&self.action),
        }
    }
}
