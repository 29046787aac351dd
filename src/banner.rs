//! Startup banner and session summary display.

use crate::collaborator::TokenUsage;
use crate::consts::{QUICK_ACTIONS, format_number};
use crate::session::{Role, Session};

/// Session configuration for display in the startup banner.
pub struct BannerInfo<'a> {
    pub mode: &'a str,
    pub model: &'a str,
    pub api_status: &'a str,
}

const FEATURES: &[&str] = &[
    "🧠 AI-Powered Responses",
    "📦 Order Tracking",
    "🔄 Returns & Refunds",
    "💳 Payment Support",
    "🚚 Shipping Information",
    "👤 Account Help",
    "🛍️ Product Queries",
];

/// Banner text. Features that need the hosted model are hidden offline.
pub fn banner_text(info: &BannerInfo) -> String {
    let features = FEATURES
        .iter()
        .filter(|f| info.mode != "offline" || !f.contains("AI-Powered"))
        .map(|f| format!("   - {f}"))
        .collect::<Vec<_>>()
        .join("\n");

    let actions = QUICK_ACTIONS
        .iter()
        .map(|(name, label, _)| format!("{label} {name}"))
        .collect::<Vec<_>>()
        .join("  ");

    format!(
        r#"
   ╔═══════════════════════════════════════╗
   ║     🤖 Customer Support Chatbot       ║
   ║  24/7 support for your e-commerce     ║
   ╚═══════════════════════════════════════╝

   version   {}
   mode      {}
   model     {}
   api key   {}

{features}

   quick actions: {actions}
   type /help for commands, /quit to leave
"#,
        env!("CARGO_PKG_VERSION"),
        info.mode,
        info.model,
        info.api_status,
    )
}

/// Print the startup banner with session info.
pub fn print_banner(info: &BannerInfo) {
    println!("{}", banner_text(info));
}

/// Print message counts, token usage, and a farewell.
pub fn print_session_summary(session: &Session, usage: TokenUsage) {
    println!(
        "session: {} messages, {} bot responses",
        session.transcript().len(),
        session.count(Role::Bot),
    );
    if usage.total() > 0 {
        println!(
            "tokens:  {:>6} prompt + {:>6} completion = {:>6}",
            format_number(usage.input_tokens),
            format_number(usage.output_tokens),
            format_number(usage.total()),
        );
    }
    println!("goodbye.");
}
