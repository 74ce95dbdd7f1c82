//! Reply texts and suggestion menus
//!
//! All user-facing strings for the data-entry flows live here, together with
//! the fixed suggestion menus offered alongside each prompt.

use super::engine::Reply;

/// Suggestions shown when a tanker flow starts
pub const TANKER_MENU: [&str; 3] = ["Tanker 1", "Tanker 2", "Tanker 3"];

/// Suggestions shown when an expense flow starts
pub const EXPENSE_MENU: [&str; 3] = ["Security Salary", "Phone Recharge", "Other"];

/// Flat identifiers suggested when a payment flow starts
pub const PAYMENT_FLAT_MENU: [&str; 3] = ["G01", "202", "401"];

/// Payment status suggestions
pub const PAYMENT_STATUS_MENU: [&str; 2] = ["Paid", "Pending"];

/// Greeting for /start, addressed to the user's display name
pub fn greeting(display_name: &str) -> Reply {
    Reply::plain(format!(
        "Hello {display_name}!\n\
         I am Maintenance Bot, I track Siri Homes monthly maintenance expenses and update payment statuses.\n\
         /expense for logging association expenses.\n\
         /tanker for tankers tracking.\n\
         /payment for updating maintenance amount payment status of any flat.\n\
         /cancel for aborting chat anytime."
    ))
}

pub fn tanker_intro() -> Reply {
    Reply::with_menu(
        "Hi! My name is Maintenance Bot. I will track tankers count for you. \
         Send /cancel to stop talking to me.\n\n\
         Provide description:",
        &TANKER_MENU,
        "Tanker 1 or Tanker 2?",
    )
}

pub fn expense_intro() -> Reply {
    Reply::with_menu(
        "Hi! I will note down expense for you. \
         Send /cancel to stop talking to me.\n\n\
         What is your expense description?",
        &EXPENSE_MENU,
        "Security Salary or Phone Recharge?",
    )
}

pub fn payment_intro() -> Reply {
    Reply::with_menu(
        "Hi, I will update the payment status for you. \
         Send /cancel to stop talking to me.\n\n\
         Which flat's payment status do you want to update?",
        &PAYMENT_FLAT_MENU,
        "Flat Number?",
    )
}

pub fn amount_prompt() -> Reply {
    Reply::plain("Okay! Please provide the amount.")
}

pub fn invalid_amount() -> Reply {
    Reply::plain("Please enter a valid amount in numbers only.")
}

pub fn entry_confirmed() -> Reply {
    Reply::plain("Okay! I have noted down your expense.")
}

pub fn payment_status_prompt() -> Reply {
    Reply::with_menu(
        "Okay! Please provide the payment status (Paid/Pending).",
        &PAYMENT_STATUS_MENU,
        "Paid or Pending?",
    )
}

pub fn payment_confirmed() -> Reply {
    Reply::plain("Okay! I have noted down the payment status.")
}

pub fn farewell() -> Reply {
    Reply::plain("Bye! I hope we can talk again some day.")
}

pub fn not_understood() -> Reply {
    Reply::plain(
        "I didn't understand that. Use /expense, /tanker or /payment to make an entry, \
         or /start for help.",
    )
}
