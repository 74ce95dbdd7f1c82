//! Conversation flow engine
//!
//! This module implements the data-entry conversation as a pure state machine:
//! given the current state, the value captured on the previous turn and the
//! incoming text, it produces the next state, the reply to send and, when a
//! flow completes, the recorded entry. No Telegram types appear here; the
//! transport adapters in `handlers` perform all I/O.

use serde::{Deserialize, Serialize};

use super::prompts;

/// Conversation state for a single user session
///
/// Each entry flow is a short linear sequence of states; `Idle` is both the
/// initial and the terminal state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum FlowState {
    #[default]
    Idle,
    AwaitingTankerDescription,
    AwaitingTankerAmount,
    AwaitingExpenseDescription,
    AwaitingExpenseAmount,
    AwaitingPaymentFlat,
    AwaitingPaymentStatus,
}

/// One inbound text turn from a user
#[derive(Debug, Clone)]
pub struct TextEvent {
    pub user_id: i64,
    pub display_name: String,
    pub text: String,
}

impl TextEvent {
    pub fn new(user_id: i64, display_name: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            user_id,
            display_name: display_name.into(),
            text: text.into(),
        }
    }
}

/// Keyboard instruction attached to a reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Keyboard {
    /// Show a one-time suggestion menu with an input field placeholder
    Suggestions {
        options: Vec<String>,
        placeholder: String,
    },
    /// Clear any previously shown menu
    Remove,
}

/// Outgoing reply for one turn
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub text: String,
    pub keyboard: Keyboard,
}

impl Reply {
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            keyboard: Keyboard::Remove,
        }
    }

    pub fn with_menu(
        text: impl Into<String>,
        options: &[&str],
        placeholder: impl Into<String>,
    ) -> Self {
        Self {
            text: text.into(),
            keyboard: Keyboard::Suggestions {
                options: options.iter().map(|s| s.to_string()).collect(),
                placeholder: placeholder.into(),
            },
        }
    }
}

/// Kind of a completed entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Tanker,
    Expense,
    Payment,
}

/// A completed data-entry flow
///
/// Entries are logged, not persisted; amounts stay lexical because validation
/// is purely a digit check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryRecord {
    pub kind: EntryKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flat: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

/// Result of advancing the state machine by one turn
#[derive(Debug, Clone)]
pub struct Transition {
    /// State after this turn
    pub state: FlowState,
    /// Value carried over to the next turn, if any
    pub pending: Option<String>,
    /// Reply to send back to the user
    pub reply: Reply,
    /// Entry produced when a flow reached its terminal state
    pub entry: Option<EntryRecord>,
}

impl Transition {
    fn stay(state: FlowState, pending: Option<String>, reply: Reply) -> Self {
        Self {
            state,
            pending,
            reply,
            entry: None,
        }
    }

    fn idle(reply: Reply) -> Self {
        Self {
            state: FlowState::Idle,
            pending: None,
            reply,
            entry: None,
        }
    }

    fn complete(reply: Reply, entry: EntryRecord) -> Self {
        Self {
            state: FlowState::Idle,
            pending: None,
            reply,
            entry: Some(entry),
        }
    }
}

/// Commands recognized from `Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Start,
    Tanker,
    Expense,
    Payment,
    Cancel,
}

/// Parse a command word, with or without the leading slash
///
/// A trailing `@botname` suffix is stripped so group-style commands keep
/// working; `tankers` and `payments` are accepted as aliases of the original
/// command names.
fn parse_command(text: &str) -> Option<Command> {
    let trimmed = text.trim();
    let word = trimmed.strip_prefix('/').unwrap_or(trimmed);
    let word = word.split('@').next().unwrap_or(word);
    match word.to_ascii_lowercase().as_str() {
        "start" => Some(Command::Start),
        "tanker" | "tankers" => Some(Command::Tanker),
        "expense" => Some(Command::Expense),
        "payment" | "payments" => Some(Command::Payment),
        "cancel" => Some(Command::Cancel),
        _ => None,
    }
}

fn is_cancel(text: &str) -> bool {
    matches!(parse_command(text), Some(Command::Cancel))
}

fn is_slash_command(text: &str) -> bool {
    text.trim().starts_with('/')
}

/// Amount fields must consist solely of decimal digits
fn is_valid_amount(text: &str) -> bool {
    let trimmed = text.trim();
    !trimmed.is_empty() && trimmed.chars().all(|c| c.is_ascii_digit())
}

/// Advance the conversation by one turn
///
/// `pending` is the scalar captured on the previous turn of the active flow
/// (description text or flat identifier).
pub fn advance(state: FlowState, pending: Option<&str>, event: &TextEvent) -> Transition {
    let text = event.text.trim();

    // Cancel wins from any active flow, regardless of pending data.
    if state != FlowState::Idle {
        if is_cancel(text) {
            return Transition::idle(prompts::farewell());
        }
        // Any other command aborts the conversation rather than being
        // swallowed as flow input.
        if is_slash_command(text) {
            return Transition::idle(prompts::not_understood());
        }
    }

    match state {
        FlowState::Idle => match parse_command(text) {
            Some(Command::Start) => Transition::idle(prompts::greeting(&event.display_name)),
            Some(Command::Tanker) => Transition::stay(
                FlowState::AwaitingTankerDescription,
                None,
                prompts::tanker_intro(),
            ),
            Some(Command::Expense) => Transition::stay(
                FlowState::AwaitingExpenseDescription,
                None,
                prompts::expense_intro(),
            ),
            Some(Command::Payment) => Transition::stay(
                FlowState::AwaitingPaymentFlat,
                None,
                prompts::payment_intro(),
            ),
            Some(Command::Cancel) => Transition::idle(prompts::farewell()),
            None => Transition::idle(prompts::not_understood()),
        },

        FlowState::AwaitingTankerDescription => Transition::stay(
            FlowState::AwaitingTankerAmount,
            Some(text.to_string()),
            prompts::amount_prompt(),
        ),

        FlowState::AwaitingTankerAmount => {
            if is_valid_amount(text) {
                Transition::complete(
                    prompts::entry_confirmed(),
                    EntryRecord {
                        kind: EntryKind::Tanker,
                        description: pending.map(str::to_string),
                        amount: Some(text.to_string()),
                        flat: None,
                        status: None,
                    },
                )
            } else {
                // Retry in place, pending value untouched.
                Transition::stay(
                    FlowState::AwaitingTankerAmount,
                    pending.map(str::to_string),
                    prompts::invalid_amount(),
                )
            }
        }

        FlowState::AwaitingExpenseDescription => Transition::stay(
            FlowState::AwaitingExpenseAmount,
            Some(text.to_string()),
            prompts::amount_prompt(),
        ),

        FlowState::AwaitingExpenseAmount => {
            if is_valid_amount(text) {
                Transition::complete(
                    prompts::entry_confirmed(),
                    EntryRecord {
                        kind: EntryKind::Expense,
                        description: pending.map(str::to_string),
                        amount: Some(text.to_string()),
                        flat: None,
                        status: None,
                    },
                )
            } else {
                Transition::stay(
                    FlowState::AwaitingExpenseAmount,
                    pending.map(str::to_string),
                    prompts::invalid_amount(),
                )
            }
        }

        FlowState::AwaitingPaymentFlat => Transition::stay(
            FlowState::AwaitingPaymentStatus,
            Some(text.to_string()),
            prompts::payment_status_prompt(),
        ),

        FlowState::AwaitingPaymentStatus => Transition::complete(
            prompts::payment_confirmed(),
            EntryRecord {
                kind: EntryKind::Payment,
                description: None,
                amount: None,
                flat: pending.map(str::to_string),
                status: Some(text.to_string()),
            },
        ),
    }
}
