//! Compiled-in knowledge base: the response rule table and the fallback pool.
//!
//! Table order is significant. Categories are scanned top to bottom and the
//! first pattern found as a substring of the input wins, so overlapping
//! patterns resolve in favour of the earlier category.

pub mod orders;

/// A named group of patterns sharing a pool of candidate responses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    /// Lowercase literal substrings.
    pub patterns: Vec<&'static str>,
    pub responses: Vec<&'static str>,
}

/// Ordered rule table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleTable {
    categories: Vec<Category>,
}

impl RuleTable {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    /// Look up a category by name.
    pub fn category(&self, name: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.name == name)
    }
}

impl Default for RuleTable {
    fn default() -> Self {
        default_rules()
    }
}

/// Returned when neither an order number nor any pattern matches.
pub const FALLBACK_RESPONSES: &[&str] = &[
    "🤔 I'm not sure I understood that. Could you rephrase? I can help with orders, returns, payments, shipping, and your account.",
    "I didn't quite catch that. Try asking about order tracking, returns, refunds, or payment methods!",
    "Sorry, I don't have an answer for that yet. Type **contact** to reach our human support team (24/7).",
];

/// The storefront's rule table.
pub fn default_rules() -> RuleTable {
    RuleTable::new(vec![
        Category {
            name: "greeting",
            patterns: vec![
                "hello",
                "hey",
                "hi ",
                "hi,",
                "hi!",
                "howdy",
                "good morning",
                "good afternoon",
                "good evening",
                "greetings",
            ],
            responses: vec![
                "👋 Hello! Welcome to our store. How can I help you today?",
                "Hi there! 😊 I can help with orders, returns, payments, and more. What do you need?",
                "Hey! Thanks for reaching out. What can I do for you today?",
            ],
        },
        Category {
            name: "order_tracking",
            patterns: vec![
                "track",
                "where is my order",
                "order status",
                "my package",
                "delivery status",
                "hasn't arrived",
                "not arrived",
            ],
            responses: vec![
                "📦 I can help you track your order! Please share your order number (e.g. **#12345**).",
                "Sure! What's your order number? It starts with **#** and you'll find it in your confirmation email.",
            ],
        },
        Category {
            name: "returns",
            patterns: vec!["return", "send back", "exchange", "wrong item", "damaged"],
            responses: vec![
                "🔄 **Return Policy:** You can return items within **30 days** of delivery. Items must be unused and in their original packaging.",
                "Returns are easy! Start one from **My Orders → Return Item** within 30 days. Unused items in original packaging only.",
                "We accept returns within 30 days 📅. Make sure the item is unused and in its original packaging, then request a pickup from your orders page.",
            ],
        },
        Category {
            name: "refunds",
            patterns: vec!["refund", "money back", "reimburse"],
            responses: vec![
                "💰 Refunds are processed within **5-7 business days** after we receive your return.",
                "Once your return is inspected, the refund goes back to your original payment method in 5-7 business days.",
            ],
        },
        Category {
            name: "cancellation",
            patterns: vec!["cancel", "cancellation", "changed my mind"],
            responses: vec![
                "❌ You can cancel an order from **My Orders** as long as it hasn't shipped yet.",
                "To cancel, open the order in **My Orders** and choose **Cancel**. Already shipped? Refuse the delivery or start a return.",
            ],
        },
        Category {
            name: "payment",
            patterns: vec![
                "payment",
                "pay",
                "credit card",
                "debit card",
                "upi",
                "net banking",
                "wallet",
            ],
            responses: vec![
                "💳 **We accept:**\n• Credit Cards\n• Debit Cards\n• UPI\n• Net Banking\n• Wallets",
                "You can pay with credit or debit cards, UPI, net banking, or popular wallets 💳. All payments are secured.",
            ],
        },
        Category {
            name: "shipping",
            patterns: vec![
                "shipping",
                "delivery time",
                "how long",
                "express",
                "free delivery",
            ],
            responses: vec![
                "🚚 **Shipping Options:**\n• Standard: 5-7 days\n• Express: 2-3 days\n\nFree shipping on orders above $50!",
                "Standard delivery takes 5-7 days and Express 2-3 days 🚚. Orders above $50 ship free.",
            ],
        },
        Category {
            name: "contact",
            patterns: vec![
                "contact",
                "support",
                "human",
                "agent",
                "speak to",
                "phone",
                "email",
            ],
            responses: vec![
                "📞 **Contact Us:**\n• Email: support@shop.com\n• Phone: 1-800-SUPPORT (24/7)",
                "You can reach our team 24/7 at **1-800-SUPPORT** or **support@shop.com** 📧.",
            ],
        },
        Category {
            name: "account",
            patterns: vec!["account", "password", "login", "log in", "sign in", "profile"],
            responses: vec![
                "👤 For account help, go to **Settings → Account**. Forgot your password? Use **Forgot Password** on the sign-in page.",
                "You can update your profile and password under **Settings → Account**. Still locked out? Contact support@shop.com.",
            ],
        },
        Category {
            name: "product",
            patterns: vec!["product", "stock", "size", "available", "warranty"],
            responses: vec![
                "🛍️ Product details, sizes, and stock levels are on each product page. Anything specific you're looking for?",
                "Tell me which product you're interested in and I'll point you to availability and warranty details.",
            ],
        },
        Category {
            name: "thanks",
            patterns: vec!["thank", "thanks", "appreciate"],
            responses: vec![
                "You're welcome! 😊 Anything else I can help with?",
                "Happy to help! Let me know if you need anything else.",
            ],
        },
        Category {
            name: "goodbye",
            patterns: vec!["bye", "goodbye", "see you"],
            responses: vec![
                "👋 Goodbye! Have a great day!",
                "Thanks for chatting with us. Take care! 👋",
            ],
        },
    ])
}
