//! Conversation flow module
//!
//! The pure state machine (`engine`), per-user session storage (`session`)
//! and the fixed reply texts (`prompts`). `process` ties them together for
//! the transport adapters.

pub mod engine;
pub mod prompts;
pub mod session;

pub use engine::{
    advance, EntryKind, EntryRecord, FlowState, Keyboard, Reply, TextEvent, Transition,
};
pub use session::{InMemorySessionStore, Session, SessionStore};

use tracing::debug;

use crate::utils::logging;

/// Process one inbound text event against the session store
///
/// Loads the user's session, advances the state machine, commits the new
/// state (an idle session is removed rather than kept around) and logs the
/// raw input plus any completed entry. The caller sends the reply.
pub fn process(store: &dyn SessionStore, event: &TextEvent) -> Transition {
    logging::log_user_message(event.user_id, &event.display_name, &event.text);

    let mut session = store.load(event.user_id);
    let transition = advance(session.state, session.pending_field.as_deref(), event);
    debug!(
        user_id = event.user_id,
        from = ?session.state,
        to = ?transition.state,
        "State transition"
    );

    if let Some(entry) = &transition.entry {
        logging::log_entry_recorded(event.user_id, entry);
    }

    session.apply(&transition);
    if session.is_idle() {
        store.delete(event.user_id);
    } else {
        store.save(session);
    }

    transition
}
