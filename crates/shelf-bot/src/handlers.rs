//! Update routing and delivery.
//!
//! Only private chats are served; the chat id doubles as the user id.

use std::sync::Arc;

use shelf_application::{Command, Screen, ShelfUseCase};
use teloxide::dispatching::UpdateHandler;
use teloxide::prelude::*;
use teloxide::types::{CallbackQuery, ChatId, Message, MessageId, ParseMode, Update};
use teloxide::utils::command::BotCommands;
use teloxide::{ApiError, RequestError};

use crate::keyboard::markup;

type HandlerError = Box<dyn std::error::Error + Send + Sync>;
type HandlerResult = Result<(), HandlerError>;

#[derive(BotCommands, Clone, Copy, Debug)]
#[command(rename_rule = "lowercase", description = "Shelfbot commands:")]
pub enum BotCommand {
    #[command(description = "show the main menu")]
    Start,
    #[command(description = "forget all sections")]
    Reset,
}

impl From<BotCommand> for Command {
    fn from(command: BotCommand) -> Self {
        match command {
            BotCommand::Start => Command::Start,
            BotCommand::Reset => Command::Reset,
        }
    }
}

pub fn schema() -> UpdateHandler<HandlerError> {
    let messages = Update::filter_message()
        .filter(|msg: Message| msg.chat.is_private())
        .branch(
            dptree::entry()
                .filter_command::<BotCommand>()
                .endpoint(on_command),
        )
        .branch(dptree::endpoint(on_text));

    let callbacks = Update::filter_callback_query().endpoint(on_callback);

    dptree::entry().branch(messages).branch(callbacks)
}

async fn on_command(
    bot: Bot,
    msg: Message,
    command: BotCommand,
    usecase: Arc<ShelfUseCase>,
) -> HandlerResult {
    let user_id = msg.chat.id.0.to_string();
    let screen = usecase.handle_command(&user_id, command.into()).await?;
    send(&bot, msg.chat.id, &screen).await
}

async fn on_text(bot: Bot, msg: Message, usecase: Arc<ShelfUseCase>) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    let user_id = msg.chat.id.0.to_string();
    let screen = usecase.handle_text(&user_id, text).await?;
    send(&bot, msg.chat.id, &screen).await
}

async fn on_callback(bot: Bot, q: CallbackQuery, usecase: Arc<ShelfUseCase>) -> HandlerResult {
    bot.answer_callback_query(q.id.clone()).await?;

    let Some(token) = q.data.as_deref() else {
        return Ok(());
    };
    let origin = q.regular_message().map(|m| (m.chat.id, m.id, m.chat.is_private()));
    if matches!(origin, Some((_, _, false))) {
        return Ok(());
    }

    let user_id = q.from.id.0.to_string();
    let screen = usecase.handle_action(&user_id, token).await?;

    match origin {
        Some((chat_id, message_id, _)) => edit(&bot, chat_id, message_id, &screen).await,
        // The originating message is too old to edit.
        None => send(&bot, ChatId::from(q.from.id), &screen).await,
    }
}

async fn send(bot: &Bot, chat_id: ChatId, screen: &Screen) -> HandlerResult {
    let request = bot
        .send_message(chat_id, &screen.text)
        .parse_mode(ParseMode::Html);
    match markup(&screen.keyboard) {
        Some(keyboard) => request.reply_markup(keyboard).await?,
        None => request.await?,
    };
    Ok(())
}

/// Edits the message in place. Re-rendering an identical screen is not an
/// error.
async fn edit(bot: &Bot, chat_id: ChatId, message_id: MessageId, screen: &Screen) -> HandlerResult {
    let request = bot
        .edit_message_text(chat_id, message_id, &screen.text)
        .parse_mode(ParseMode::Html);
    let result = match markup(&screen.keyboard) {
        Some(keyboard) => request.reply_markup(keyboard).await,
        None => request.await,
    };
    ignore_not_modified(result.map(|_| ()))?;
    Ok(())
}

fn ignore_not_modified(result: Result<(), RequestError>) -> Result<(), RequestError> {
    match result {
        Err(RequestError::Api(ApiError::MessageNotModified)) => {
            tracing::debug!("message not modified");
            Ok(())
        }
        other => other,
    }
}
