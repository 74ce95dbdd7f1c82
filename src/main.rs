//! Siri Homes Telegram Bot
//!
//! Main application entry point

use std::sync::Arc;

use teloxide::dispatching::UpdateHandler;
use teloxide::types::Update;
use teloxide::utils::command::BotCommands as TeloxideBotCommands;
use teloxide::prelude::*;
use tracing::{error, info, warn};

use SiriHomesBot::{
    config::Settings,
    flow::{InMemorySessionStore, SessionStore},
    handlers::{commands, messages},
    utils::logging,
};

type HandlerResult = Result<(), Box<dyn std::error::Error + Send + Sync>>;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // Load configuration
    let settings = Settings::new()?;
    settings.validate()?;

    // Initialize logging; the guard keeps the file writer alive
    let _guard = logging::init_logging(&settings.logging)?;

    info!("Starting {}...", SiriHomesBot::info());

    // Session storage is in-memory only; entries are logged, never persisted
    let store: Arc<dyn SessionStore> = Arc::new(InMemorySessionStore::new());

    let bot = Bot::new(&settings.bot.token);

    let handler = create_handler();
    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![store])
        .default_handler(|upd| async move {
            warn!("Unhandled update: {:?}", upd);
        })
        .enable_ctrlc_handler()
        .build();

    if let Some(webhook_url) = &settings.bot.webhook_url {
        info!("Webhook URL configured: {}", webhook_url);
        info!("Note: webhook mode is not implemented, falling back to polling");
    }

    info!("Maintenance bot is ready, starting polling...");
    dispatcher.dispatch().await;

    info!("Maintenance bot has been shut down.");
    Ok(())
}

/// Create the main update handler
fn create_handler() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use teloxide::dispatching::UpdateFilterExt;

    dptree::entry().branch(
        Update::filter_message()
            .branch(
                // Handle commands
                dptree::entry()
                    .filter_command::<BotCommands>()
                    .endpoint(handle_commands),
            )
            .branch(
                // Handle regular messages
                dptree::endpoint(handle_messages),
            ),
    )
}

#[derive(TeloxideBotCommands, Clone)]
#[command(rename_rule = "lowercase", description = "Siri Homes Maintenance Bot commands")]
enum BotCommands {
    #[command(description = "Greeting and command overview")]
    Start,
    #[command(description = "Track a tanker delivery")]
    Tanker,
    #[command(description = "Log an association expense")]
    Expense,
    #[command(description = "Update a flat's payment status")]
    Payment,
    #[command(description = "Abort the current conversation")]
    Cancel,
}

/// Handle bot commands
async fn handle_commands(
    bot: Bot,
    msg: Message,
    cmd: BotCommands,
    store: Arc<dyn SessionStore>,
) -> HandlerResult {
    let result = match cmd {
        BotCommands::Start => commands::handle_start(bot, msg, store).await,
        BotCommands::Tanker => commands::handle_tanker(bot, msg, store).await,
        BotCommands::Expense => commands::handle_expense(bot, msg, store).await,
        BotCommands::Payment => commands::handle_payment(bot, msg, store).await,
        BotCommands::Cancel => commands::handle_cancel(bot, msg, store).await,
    };

    if let Err(e) = result {
        error!(error = %e, "Error handling command");
        return Err(e.into());
    }

    Ok(())
}

/// Handle regular messages
async fn handle_messages(bot: Bot, msg: Message, store: Arc<dyn SessionStore>) -> HandlerResult {
    if let Err(e) = messages::handle_message(bot, msg, store).await {
        error!(error = %e, "Error handling message");
        return Err(e.into());
    }

    Ok(())
}
