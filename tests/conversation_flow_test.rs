//! Conversation flow integration tests
//!
//! Drives complete user journeys through `flow::process` and the in-memory
//! session store, without a live Telegram transport.

use assert_matches::assert_matches;
use SiriHomesBot::flow::{
    self, EntryKind, FlowState, InMemorySessionStore, Keyboard, SessionStore, TextEvent,
    Transition,
};

fn turn(store: &InMemorySessionStore, user_id: i64, text: &str) -> Transition {
    flow::process(store, &TextEvent::new(user_id, "Gopi", text))
}

#[test]
fn test_complete_expense_journey() {
    let store = InMemorySessionStore::new();

    let t = turn(&store, 1, "expense");
    assert_eq!(t.state, FlowState::AwaitingExpenseDescription);
    assert!(t.reply.text.contains("What is your expense description?"));
    assert_matches!(
        &t.reply.keyboard,
        Keyboard::Suggestions { options, .. }
            if options == &["Security Salary", "Phone Recharge", "Other"]
    );

    let t = turn(&store, 1, "Security Salary");
    assert_eq!(t.state, FlowState::AwaitingExpenseAmount);
    assert_eq!(t.reply.text, "Okay! Please provide the amount.");

    // Malformed amount re-prompts in place.
    let t = turn(&store, 1, "abc");
    assert_eq!(t.state, FlowState::AwaitingExpenseAmount);
    assert!(t.entry.is_none());
    assert_eq!(t.reply.text, "Please enter a valid amount in numbers only.");

    let t = turn(&store, 1, "1500");
    assert_eq!(t.state, FlowState::Idle);
    let entry = t.entry.expect("completed flow should record an entry");
    assert_eq!(entry.kind, EntryKind::Expense);
    assert_eq!(entry.description.as_deref(), Some("Security Salary"));
    assert_eq!(entry.amount.as_deref(), Some("1500"));

    // Session released: the store hands back a fresh idle session.
    assert!(store.load(1).is_idle());
}

#[test]
fn test_complete_tanker_journey() {
    let store = InMemorySessionStore::new();

    let t = turn(&store, 2, "/tanker");
    assert_eq!(t.state, FlowState::AwaitingTankerDescription);
    assert_matches!(
        &t.reply.keyboard,
        Keyboard::Suggestions { options, .. }
            if options == &["Tanker 1", "Tanker 2", "Tanker 3"]
    );

    let t = turn(&store, 2, "Tanker 2");
    assert_eq!(t.state, FlowState::AwaitingTankerAmount);

    let t = turn(&store, 2, "700");
    assert_eq!(t.state, FlowState::Idle);
    let entry = t.entry.expect("completed flow should record an entry");
    assert_eq!(entry.kind, EntryKind::Tanker);
    assert_eq!(entry.description.as_deref(), Some("Tanker 2"));
    assert_eq!(entry.amount.as_deref(), Some("700"));
}

#[test]
fn test_complete_payment_journey() {
    let store = InMemorySessionStore::new();

    let t = turn(&store, 3, "payment");
    assert_eq!(t.state, FlowState::AwaitingPaymentFlat);

    let t = turn(&store, 3, "G01");
    assert_eq!(t.state, FlowState::AwaitingPaymentStatus);
    assert!(t.reply.text.contains("payment status"));
    assert_matches!(
        &t.reply.keyboard,
        Keyboard::Suggestions { options, .. } if options == &["Paid", "Pending"]
    );

    let t = turn(&store, 3, "Paid");
    assert_eq!(t.state, FlowState::Idle);
    let entry = t.entry.expect("completed flow should record an entry");
    assert_eq!(entry.kind, EntryKind::Payment);
    assert_eq!(entry.flat.as_deref(), Some("G01"));
    assert_eq!(entry.status.as_deref(), Some("Paid"));
}

#[test]
fn test_cancel_abandons_flow_and_releases_pending() {
    let store = InMemorySessionStore::new();

    turn(&store, 4, "payment");
    turn(&store, 4, "202");

    let t = turn(&store, 4, "cancel");
    assert_eq!(t.state, FlowState::Idle);
    assert!(t.entry.is_none());
    assert!(t.reply.text.contains("Bye"));
    assert!(store.load(4).is_idle());

    // A fresh flow starts clean; the abandoned flat id must not leak in.
    turn(&store, 4, "expense");
    turn(&store, 4, "Phone Recharge");
    let t = turn(&store, 4, "300");
    let entry = t.entry.expect("completed flow should record an entry");
    assert_eq!(entry.description.as_deref(), Some("Phone Recharge"));
    assert_eq!(entry.flat, None);
}

#[test]
fn test_repeated_invalid_amounts_never_advance() {
    let store = InMemorySessionStore::new();

    turn(&store, 5, "expense");
    turn(&store, 5, "Other");

    for _ in 0..5 {
        let t = turn(&store, 5, "not a number");
        assert_eq!(t.state, FlowState::AwaitingExpenseAmount);
        assert!(t.entry.is_none());
    }

    let session = store.load(5);
    assert_eq!(session.state, FlowState::AwaitingExpenseAmount);
    assert_eq!(session.pending_field.as_deref(), Some("Other"));
}

#[test]
fn test_unrecognized_idle_text_gets_default_reply() {
    let store = InMemorySessionStore::new();

    let t = turn(&store, 6, "good morning");
    assert_eq!(t.state, FlowState::Idle);
    assert!(t.reply.text.contains("didn't understand"));
    assert_eq!(t.reply.keyboard, Keyboard::Remove);
}

#[test]
fn test_sessions_do_not_interfere_across_users() {
    let store = InMemorySessionStore::new();

    turn(&store, 10, "expense");
    turn(&store, 11, "payment");
    turn(&store, 10, "Security Salary");
    turn(&store, 11, "401");

    let t = turn(&store, 10, "900");
    assert_eq!(
        t.entry.expect("user 10 flow should complete").kind,
        EntryKind::Expense
    );

    let t = turn(&store, 11, "Pending");
    let entry = t.entry.expect("user 11 flow should complete");
    assert_eq!(entry.kind, EntryKind::Payment);
    assert_eq!(entry.flat.as_deref(), Some("401"));
}

#[test]
fn test_start_greeting_lists_commands() {
    let store = InMemorySessionStore::new();

    let t = turn(&store, 7, "/start");
    assert_eq!(t.state, FlowState::Idle);
    assert!(t.reply.text.contains("Hello Gopi!"));
    assert!(t.reply.text.contains("/expense"));
    assert!(t.reply.text.contains("/tanker"));
    assert!(t.reply.text.contains("/payment"));
}
