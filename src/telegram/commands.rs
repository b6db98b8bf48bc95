use teloxide::types::{BotCommand, InlineKeyboardMarkup};

use crate::i18n;

use super::menu;

/// Static reply payload for one command.
pub struct Reply {
    pub text: &'static str,
    /// Render `text` with Telegram's legacy Markdown parse mode.
    pub markdown: bool,
    pub markup: Option<InlineKeyboardMarkup>,
}

/// One entry of the dispatch table: a command trigger, the description
/// registered in Telegram's command menu, and the reply constructor.
pub struct CommandSpec {
    pub trigger: &'static str,
    pub description: &'static str,
    reply: fn() -> Reply,
}

impl CommandSpec {
    pub fn reply(&self) -> Reply {
        (self.reply)()
    }
}

/// Dispatch table, evaluated in order; triggers are unique.
static COMMANDS: [CommandSpec; 4] = [
    CommandSpec {
        trigger: "/start",
        description: i18n::DESC_START,
        reply: start_reply,
    },
    CommandSpec {
        trigger: "/ajuda",
        description: i18n::DESC_AJUDA,
        reply: ajuda_reply,
    },
    CommandSpec {
        trigger: "/regras",
        description: i18n::DESC_REGRAS,
        reply: regras_reply,
    },
    CommandSpec {
        trigger: "/webapp",
        description: i18n::DESC_WEBAPP,
        reply: webapp_reply,
    },
];

fn start_reply() -> Reply {
    Reply {
        text: i18n::MSG_WELCOME,
        markdown: true,
        markup: Some(menu::main_menu()),
    }
}

fn ajuda_reply() -> Reply {
    Reply {
        text: i18n::MSG_AJUDA,
        markdown: false,
        markup: Some(menu::support_menu()),
    }
}

fn regras_reply() -> Reply {
    Reply {
        text: i18n::MSG_REGRAS,
        markdown: false,
        markup: Some(menu::rules_menu()),
    }
}

fn webapp_reply() -> Reply {
    Reply {
        text: i18n::MSG_WEBAPP,
        markdown: false,
        markup: Some(menu::webapp_menu()),
    }
}

/// Match a message against the command table.
///
/// The command token is the first whitespace-separated word, with any
/// `@botname` suffix stripped (e.g. `/start@brainskill_bot` in group
/// chats). The token must equal a trigger exactly, so `/start extra text`
/// matches `/start` while `/startx` matches nothing. Free-text messages
/// dispatch to `None` and get no reply.
pub fn dispatch(text: &str) -> Option<&'static CommandSpec> {
    let token = text.split_whitespace().next()?;
    let token = token.split('@').next().unwrap_or(token);
    COMMANDS.iter().find(|command| command.trigger == token)
}

/// Command menu registered with Telegram at startup.
pub fn bot_commands() -> Vec<BotCommand> {
    COMMANDS
        .iter()
        .map(|command| {
            // set_my_commands takes the bare name, without the leading slash
            let name = command.trigger.trim_start_matches('/');
            BotCommand::new(name, command.description)
        })
        .collect()
}
