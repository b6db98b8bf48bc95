mod health;
mod i18n;
mod telegram;

use std::env;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Deserialize;

#[derive(Parser, Debug)]
#[command(version, about = "Telegram support bot for the BrainSkill platform")]
struct Cli {
    /// Telegram Bot token (overrides TELEGRAM_BOT_TOKEN)
    #[arg(long)]
    token: Option<String>,

    /// Liveness endpoint port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
}

/// Port used when neither --port nor PORT is set.
const DEFAULT_PORT: u16 = 3001;

fn resolve_token(cli_token: Option<String>) -> Result<String> {
    if let Some(token) = cli_token {
        if !token.trim().is_empty() {
            return Ok(token);
        }
    }

    if let Ok(token) = env::var("TELEGRAM_BOT_TOKEN") {
        if !token.trim().is_empty() {
            return Ok(token);
        }
    }

    anyhow::bail!(
        "Telegram token not found. Use one of:\n  1) {} --token <TOKEN>\n  2) export TELEGRAM_BOT_TOKEN=<TOKEN>",
        env!("CARGO_BIN_NAME"),
    );
}

fn parse_port(raw: &str) -> Result<u16> {
    raw.trim()
        .parse::<u16>()
        .with_context(|| format!("Invalid PORT value: {raw}"))
}

fn resolve_port(cli_port: Option<u16>) -> Result<u16> {
    if let Some(port) = cli_port {
        return Ok(port);
    }

    match env::var("PORT") {
        Ok(raw) => parse_port(&raw),
        Err(_) => Ok(DEFAULT_PORT),
    }
}

#[derive(Debug, Deserialize)]
struct GetMeResponse {
    ok: bool,
    result: Option<BotIdentity>,
}

/// Subset of the Telegram `User` object returned by `getMe`.
#[derive(Debug, Deserialize)]
struct BotIdentity {
    username: String,
}

async fn validate_telegram_token(token: &str) -> Result<BotIdentity> {
    let url = format!("https://api.telegram.org/bot{token}/getMe");
    let resp = reqwest::get(&url)
        .await
        .context("Failed to call Telegram getMe API")?;
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();

    if !status.is_success() {
        anyhow::bail!("Telegram token validation failed (HTTP {status}): {body}");
    }

    let parsed: GetMeResponse =
        serde_json::from_str(&body).context("Unexpected getMe response")?;
    match parsed.result {
        Some(identity) if parsed.ok => Ok(identity),
        _ => anyhow::bail!("Telegram token validation failed: {body}"),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let token = resolve_token(cli.token)?;
    let port = resolve_port(cli.port)?;

    let identity = validate_telegram_token(&token).await?;
    let listener = health::bind(port).await?;

    println!("{} {}", env!("CARGO_BIN_NAME"), env!("CARGO_PKG_VERSION"));
    println!("bot: @{}", identity.username);
    println!("liveness: http://0.0.0.0:{port}/");
    println!("status: connecting Telegram bot...");

    tokio::spawn(async move {
        if let Err(e) = health::serve(listener).await {
            println!("  ✗ Liveness endpoint stopped: {e}");
        }
    });

    telegram::run_bot(&token).await;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_token_prefers_cli() {
        let token = resolve_token(Some("123:abc".to_string()));
        assert_eq!(token.unwrap_or_default(), "123:abc");
    }

    #[test]
    fn test_resolve_token_rejects_blank_cli_without_env() {
        env::remove_var("TELEGRAM_BOT_TOKEN");
        assert!(resolve_token(Some("   ".to_string())).is_err());
        assert!(resolve_token(None).is_err());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("3001").unwrap_or_default(), 3001);
        assert_eq!(parse_port(" 8080 ").unwrap_or_default(), 8080);
        assert!(parse_port("not-a-port").is_err());
        assert!(parse_port("99999").is_err());
    }

    #[test]
    fn test_resolve_port_prefers_cli() {
        assert_eq!(resolve_port(Some(4000)).unwrap_or_default(), 4000);
    }

    #[test]
    fn test_default_port() {
        assert_eq!(DEFAULT_PORT, 3001);
    }

    #[test]
    fn test_getme_response_parses() {
        let body = r#"{"ok":true,"result":{"id":1,"is_bot":true,"first_name":"BrainSkill","username":"brainskill_bot"}}"#;
        let parsed: GetMeResponse = serde_json::from_str(body).unwrap_or_else(|e| panic!("{e}"));
        assert!(parsed.ok);
        assert_eq!(
            parsed.result.map(|r| r.username),
            Some("brainskill_bot".to_string())
        );
    }

    #[test]
    fn test_getme_error_response_parses() {
        let body = r#"{"ok":false,"error_code":401,"description":"Unauthorized"}"#;
        let parsed: Result<GetMeResponse, _> = serde_json::from_str(body);
        let parsed = parsed.unwrap_or_else(|e| panic!("{e}"));
        assert!(!parsed.ok);
        assert!(parsed.result.is_none());
    }
}
