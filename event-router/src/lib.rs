//! # Event router
//!
//! Registration table from [`EventKind`] to an ordered list of handlers. Each event is offered to
//! the handlers registered for its kind, in registration order, until one returns Stop.

use std::collections::HashMap;
use std::sync::Arc;

use askbot_core::{Event, EventHandler, EventKind, HandlerResponse, Result};
use tracing::{debug, info, instrument};

/// Routes events by kind. Cloning is cheap; clones share the registered handlers.
#[derive(Clone, Default)]
pub struct EventRouter {
    routes: HashMap<EventKind, Vec<Arc<dyn EventHandler>>>,
}

impl EventRouter {
    /// Creates a router with no routes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `handler` for events of `kind`, after any handlers already registered for it.
    pub fn add_handler(mut self, kind: EventKind, handler: Arc<dyn EventHandler>) -> Self {
        self.routes.entry(kind).or_default().push(handler);
        self
    }

    /// Number of handlers registered for `kind`.
    pub fn handler_count(&self, kind: EventKind) -> usize {
        self.routes.get(&kind).map_or(0, Vec::len)
    }

    /// Dispatches `event` to the handlers of its kind.
    ///
    /// Returns Stop if a handler stopped dispatching, Continue if at least one handler handled
    /// the event, and Ignore if no handler took it (or none is registered).
    #[instrument(skip(self, event), fields(kind = %event.kind()))]
    pub async fn dispatch(&self, event: &Event) -> Result<HandlerResponse> {
        let kind = event.kind();
        let chat_id = event.conversation().map(|c| c.0);

        let Some(handlers) = self.routes.get(&kind) else {
            debug!(chat_id = ?chat_id, "step: no handler registered, event ignored");
            return Ok(HandlerResponse::Ignore);
        };

        info!(chat_id = ?chat_id, handlers = handlers.len(), "step: dispatch started");

        let mut final_response = HandlerResponse::Ignore;
        for handler in handlers {
            let handler_name = std::any::type_name_of_val(handler.as_ref());
            let response = handler.handle(event).await?;
            debug!(
                handler = %handler_name,
                response = ?response,
                "Handler processed"
            );

            match response {
                HandlerResponse::Stop => {
                    info!(chat_id = ?chat_id, handler = %handler_name, "step: dispatch stopped by handler");
                    return Ok(HandlerResponse::Stop);
                }
                HandlerResponse::Continue => final_response = HandlerResponse::Continue,
                HandlerResponse::Ignore => continue,
            }
        }

        info!(chat_id = ?chat_id, response = ?final_response, "step: dispatch finished");
        Ok(final_response)
    }
}

// Tests live in tests/event_router_test.rs
