use teloxide::prelude::*;
use teloxide::types::ParseMode;

use super::commands::{self, Reply};

/// Entry point: start the Telegram bot with long polling.
///
/// Runs until the process is stopped. Polling-layer errors are logged by
/// teloxide's default error handler and do not end the loop.
pub async fn run_bot(token: &str) {
    let bot = Bot::new(token);

    // Register the command menu for autocomplete and the "Menu" button
    if let Err(e) = bot.set_my_commands(commands::bot_commands()).await {
        println!("  ⚠ Failed to set bot commands: {e}");
    }

    println!("  ✓ Bot connected — Listening for messages");

    teloxide::repl(bot, |bot: Bot, msg: Message| async move {
        handle_message(bot, msg).await
    })
    .await;
}

/// Route one incoming message: match it against the command table and send
/// the static reply. Messages that match nothing are dropped without a
/// response; that includes all free-text chat.
async fn handle_message(bot: Bot, msg: Message) -> ResponseResult<()> {
    let chat_id = msg.chat.id;

    let Some(text) = msg.text() else {
        return Ok(());
    };

    let Some(command) = commands::dispatch(text) else {
        return Ok(());
    };

    let timestamp = chrono::Local::now().format("%H:%M:%S");
    println!("  [{timestamp}] ◀ [{chat_id}] {}", command.trigger);

    // One failed delivery must never take down the polling loop; the user
    // simply re-sends the command.
    if let Err(e) = send_reply(&bot, chat_id, command.reply()).await {
        println!("  [{timestamp}] ✗ [{chat_id}] Delivery failed: {e}");
    } else {
        println!("  [{timestamp}] ▶ [{chat_id}] Reply sent");
    }

    Ok(())
}

async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> ResponseResult<()> {
    let mut request = bot.send_message(chat_id, reply.text);
    if reply.markdown {
        request = request.parse_mode(ParseMode::Markdown);
    }
    if let Some(markup) = reply.markup {
        request = request.reply_markup(markup);
    }
    request.await?;
    Ok(())
}
