//! End-to-end conversations through an [`EventRouter`] wired like the askbot binary.

mod common;

use std::sync::Arc;

use askbot_core::{ConversationId, EventKind, HandlerResponse, InMemorySessionStore, SessionStore};
use askbot_handlers::replies::NO_QUESTION_REPLY;
use askbot_handlers::{AnswerHandler, AskQuestionHandler, CommandHandler};
use common::mock_bot::{drain, MockBot, Sent};
use common::{callback_event, command_event, text_event};
use event_router::EventRouter;
use tokio::sync::mpsc::UnboundedReceiver;

fn setup() -> (EventRouter, InMemorySessionStore, UnboundedReceiver<Sent>) {
    let store = InMemorySessionStore::new();
    let (bot, rx) = MockBot::with_receiver();
    let shared_store: Arc<dyn SessionStore> = Arc::new(store.clone());

    let router = EventRouter::new()
        .add_handler(EventKind::Command, Arc::new(CommandHandler::new(bot.clone())))
        .add_handler(
            EventKind::Text,
            Arc::new(AskQuestionHandler::new(shared_store.clone(), bot.clone())),
        )
        .add_handler(
            EventKind::Callback,
            Arc::new(AnswerHandler::new(shared_store, bot)),
        );
    (router, store, rx)
}

fn messages(sent: Vec<Sent>) -> Vec<(ConversationId, String)> {
    sent.into_iter()
        .filter_map(|s| match s {
            Sent::Message { conversation, text } => Some((conversation, text)),
            _ => None,
        })
        .collect()
}

/// **Test: Question for 42 is stored and the reply carries the "Ask LLM" button; pressing it
/// sends the question back to 42.**
#[tokio::test]
async fn test_question_then_press_echoes_question() {
    let (router, store, mut rx) = setup();

    let response = router
        .dispatch(&text_event(42, "What is the capital of France?"))
        .await
        .unwrap();
    assert_eq!(response, HandlerResponse::Stop);
    assert_eq!(
        store.get(ConversationId(42)).await.unwrap().unwrap().text,
        "What is the capital of France?"
    );
    match drain(&mut rx).as_slice() {
        [Sent::WithButton {
            conversation,
            button,
            ..
        }] => {
            assert_eq!(*conversation, ConversationId(42));
            assert_eq!(button.label, "Ask LLM");
        }
        other => panic!("expected one message with a button, got {other:?}"),
    }

    router
        .dispatch(&callback_event(Some(42), Some("ask_llm:42")))
        .await
        .unwrap();
    assert_eq!(
        messages(drain(&mut rx)),
        vec![(
            ConversationId(42),
            "What is the capital of France?".to_string()
        )]
    );
}

/// **Test: Press for 99 without any earlier message gets the fallback reply.**
#[tokio::test]
async fn test_press_for_unknown_conversation() {
    let (router, _store, mut rx) = setup();

    router
        .dispatch(&callback_event(Some(99), Some("ask_llm:99")))
        .await
        .unwrap();

    assert_eq!(
        messages(drain(&mut rx)),
        vec![(ConversationId(99), NO_QUESTION_REPLY.to_string())]
    );
}

/// **Test: "A" then "B" for 7, then a press, replies "B".**
#[tokio::test]
async fn test_last_write_wins() {
    let (router, _store, mut rx) = setup();

    router.dispatch(&text_event(7, "A")).await.unwrap();
    router.dispatch(&text_event(7, "B")).await.unwrap();
    drain(&mut rx);

    router
        .dispatch(&callback_event(Some(7), Some("ask_llm:7")))
        .await
        .unwrap();

    assert_eq!(
        messages(drain(&mut rx)),
        vec![(ConversationId(7), "B".to_string())]
    );
}

/// **Test: Questions of different conversations do not leak into each other.**
#[tokio::test]
async fn test_conversations_are_independent() {
    let (router, _store, mut rx) = setup();

    router.dispatch(&text_event(1, "first chat")).await.unwrap();
    router.dispatch(&text_event(2, "second chat")).await.unwrap();
    drain(&mut rx);

    router
        .dispatch(&callback_event(Some(2), Some("ask_llm:2")))
        .await
        .unwrap();
    router
        .dispatch(&callback_event(Some(1), Some("ask_llm:1")))
        .await
        .unwrap();

    assert_eq!(
        messages(drain(&mut rx)),
        vec![
            (ConversationId(2), "second chat".to_string()),
            (ConversationId(1), "first chat".to_string()),
        ]
    );
}

/// **Test: /start does not overwrite the stored question.**
#[tokio::test]
async fn test_command_does_not_replace_question() {
    let (router, store, mut rx) = setup();

    router.dispatch(&text_event(5, "keep me")).await.unwrap();
    router
        .dispatch(&command_event(5, "start", Some("Ann")))
        .await
        .unwrap();
    drain(&mut rx);

    assert_eq!(
        store.get(ConversationId(5)).await.unwrap().unwrap().text,
        "keep me"
    );
}
