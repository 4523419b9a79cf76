//! Dispatcher runner: converts teloxide messages and callback queries into core events and passes
//! them to the [`EventRouter`]. Runs until Ctrl-C.
//!
//! teloxide's Dispatcher handles updates of one chat sequentially in arrival order, so the
//! handlers of a conversation never race each other.

use anyhow::Result;
use askbot_core::{Event, HandlerResponse, ToCoreEvent};
use event_router::EventRouter;
use teloxide::dptree;
use teloxide::prelude::*;
use teloxide::types::Me;
use tracing::{debug, error, info, instrument};

use super::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};

/// Starts long polling with the given teloxide Bot and router; returns after shutdown.
/// Calls get_me() first so a bad token is reported before polling starts.
#[instrument(skip(bot, router))]
pub async fn run_dispatcher(bot: teloxide::Bot, router: EventRouter) -> Result<()> {
    let me = bot
        .get_me()
        .await
        .map_err(|e| anyhow::anyhow!("Telegram rejected the bot token: {}", e))?;
    info!(
        username = ?me.user.username,
        bot_id = me.user.id.0,
        "Bot authenticated, starting dispatcher"
    );

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback_query));

    Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![router, me])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Dispatcher stopped");
    Ok(())
}

async fn on_message(msg: Message, router: EventRouter, me: Me) -> ResponseResult<()> {
    match TelegramMessageWrapper::for_bot(&msg, me.user.username.as_deref()).to_event() {
        Some(event) => {
            info!(
                chat_id = msg.chat.id.0,
                kind = %event.kind(),
                "Received message"
            );
            route(&router, event).await;
        }
        None => {
            info!(chat_id = msg.chat.id.0, "Received message not routable to this bot, ignored");
        }
    }
    Ok(())
}

async fn on_callback_query(query: CallbackQuery, router: EventRouter) -> ResponseResult<()> {
    if let Some(event) = TelegramCallbackWrapper(&query).to_event() {
        info!(
            user_id = query.from.id.0,
            data = ?query.data,
            "Received callback query"
        );
        route(&router, event).await;
    }
    Ok(())
}

/// Handler failures are logged here and never stop the dispatcher; None means the event failed.
pub(crate) async fn route(router: &EventRouter, event: Event) -> Option<HandlerResponse> {
    match router.dispatch(&event).await {
        Ok(response) => {
            debug!(response = ?response, "Event dispatched");
            Some(response)
        }
        Err(e) => {
            error!(
                error = %e,
                chat_id = ?event.conversation().map(|c| c.0),
                kind = %event.kind(),
                "Event handling failed"
            );
            None
        }
    }
}
