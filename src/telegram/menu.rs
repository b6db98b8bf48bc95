use teloxide::types::{InlineKeyboardButton, InlineKeyboardMarkup, WebAppInfo};
use url::Url;

use crate::i18n;

pub const WEB_APP_URL: &str = "https://brainskill.site";
pub const SUPPORT_URL: &str = "https://brainskill.site/support";
pub const HOW_TO_PLAY_URL: &str = "https://brainskill.site/how-to-play";
pub const TERMS_URL: &str = "https://brainskill.site/terms";
pub const PRIVACY_URL: &str = "https://brainskill.site/privacy";
pub const RESPONSIBLE_GAMING_URL: &str = "https://brainskill.site/responsible-gaming";

// The targets above are hard-coded absolute URLs; parsing them cannot fail.
#[allow(clippy::expect_used)]
fn parse(url: &str) -> Url {
    Url::parse(url).expect("hard-coded URL")
}

fn link(label: &str, url: &str) -> InlineKeyboardButton {
    InlineKeyboardButton::url(label, parse(url))
}

fn launch(label: &str, url: &str) -> InlineKeyboardButton {
    InlineKeyboardButton::web_app(label, WebAppInfo { url: parse(url) })
}

/// Full navigation menu attached to the welcome message.
pub fn main_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![launch(i18n::BTN_OPEN_PLATFORM, WEB_APP_URL)],
        vec![link(i18n::BTN_SUPPORT, SUPPORT_URL)],
        vec![link(i18n::BTN_HOW_TO_PLAY, HOW_TO_PLAY_URL)],
        vec![
            link(i18n::BTN_TERMS, TERMS_URL),
            link(i18n::BTN_PRIVACY, PRIVACY_URL),
        ],
        vec![link(i18n::BTN_RESPONSIBLE_GAMING, RESPONSIBLE_GAMING_URL)],
    ])
}

pub fn support_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![link(i18n::BTN_SUPPORT, SUPPORT_URL)]])
}

pub fn rules_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![
        vec![link(i18n::BTN_HOW_TO_PLAY, HOW_TO_PLAY_URL)],
        vec![
            link(i18n::BTN_TERMS, TERMS_URL),
            link(i18n::BTN_PRIVACY, PRIVACY_URL),
        ],
    ])
}

pub fn webapp_menu() -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![launch(i18n::BTN_OPEN_PLATFORM, WEB_APP_URL)]])
}
