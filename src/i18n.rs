pub const MSG_WELCOME: &str = "\
Olá! 👋 Bem-vindo ao Bot de Suporte do *BrainSkill*.

Use os botões abaixo para navegar rapidamente ou use o *Menu de Comandos* para aceder às funções.

Estou aqui para ajudar!";

pub const MSG_AJUDA: &str =
    "Precisa de ajuda? Clique no botão abaixo para ir para a nossa página de suporte.";
pub const MSG_REGRAS: &str = "Consulte as nossas regras e políticas nos links abaixo:";
pub const MSG_WEBAPP: &str =
    "Clique no botão abaixo para abrir a plataforma BrainSkill diretamente no Telegram!";

/// Fixed body served by the liveness endpoint.
pub const MSG_ALIVE: &str = "Bot está ativo e a funcionar.";

// Command menu descriptions (shown in Telegram's "Menu" button)
pub const DESC_START: &str = "🚀 Iniciar o bot e ver o menu principal";
pub const DESC_AJUDA: &str = "📞 Obter ajuda e links de suporte";
pub const DESC_REGRAS: &str = "📜 Ver como jogar e políticas";
pub const DESC_WEBAPP: &str = "🎮 Abrir a plataforma BrainSkill";

// Inline button labels
pub const BTN_OPEN_PLATFORM: &str = "🎮 Abrir a Plataforma BrainSkill";
pub const BTN_SUPPORT: &str = "📞 Ajuda & Suporte";
pub const BTN_HOW_TO_PLAY: &str = "♟️ Como Jogar";
pub const BTN_TERMS: &str = "📜 Termos e Condições";
pub const BTN_PRIVACY: &str = "🔒 Privacidade";
pub const BTN_RESPONSIBLE_GAMING: &str = "❤️ Jogo Responsável";
