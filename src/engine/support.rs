use async_trait::async_trait;
use rand::rngs::StdRng;
use rand::{RngExt, SeedableRng};
use tracing::{debug, warn};

use super::{Engine, Mode};
use crate::collaborator::{Collaborator, TokenUsage};
use crate::consts::DEFAULT_HISTORY_WINDOW;
use crate::error::diagnostic;
use crate::knowledge::orders::{OrderTable, lookup};
use crate::knowledge::{RuleTable, default_rules};
use crate::prompts::support::build_support_system_prompt;
use crate::responder::{answering_category, fallback, match_rules};
use crate::session::{Session, Turn};

pub struct SupportConfig {
    pub mode: Mode,
    /// Prior turns replayed to the collaborator.
    pub history_window: usize,
    /// Fixed seed for response selection; random when `None`.
    pub seed: Option<u64>,
}

impl Default for SupportConfig {
    fn default() -> Self {
        Self {
            mode: Mode::Hybrid,
            history_window: DEFAULT_HISTORY_WINDOW,
            seed: None,
        }
    }
}

/// Where a reply came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Order,
    Rule,
    Collaborator,
    /// The collaborator failed; the reply explains why.
    Diagnostic,
    Fallback,
}

/// Order lookup, rule table, collaborator, fallback: in that order,
/// subject to [`Mode`].
pub struct SupportEngine {
    rules: RuleTable,
    orders: OrderTable,
    collaborator: Option<Box<dyn Collaborator>>,
    rng: StdRng,
    config: SupportConfig,
    system_prompt: String,
    usage: TokenUsage,
}

impl SupportEngine {
    pub fn new(
        rules: RuleTable,
        orders: OrderTable,
        collaborator: Option<Box<dyn Collaborator>>,
        config: SupportConfig,
    ) -> Self {
        let seed = config.seed.unwrap_or_else(|| rand::rng().random());
        Self {
            rules,
            orders,
            collaborator,
            rng: StdRng::seed_from_u64(seed),
            config,
            system_prompt: build_support_system_prompt(),
            usage: TokenUsage::default(),
        }
    }

    /// Engine over the compiled-in rule and order tables.
    pub fn with_defaults(collaborator: Option<Box<dyn Collaborator>>, config: SupportConfig) -> Self {
        Self::new(default_rules(), OrderTable::default(), collaborator, config)
    }

    pub fn mode(&self) -> Mode {
        self.config.mode
    }

    pub fn collaborator(&self) -> Option<&dyn Collaborator> {
        self.collaborator.as_deref()
    }

    /// Tokens spent on collaborator calls this session.
    pub fn session_usage(&self) -> TokenUsage {
        self.usage
    }

    /// Whether `input` would be sent to the collaborator.
    pub fn will_escalate(&self, input: &str) -> bool {
        self.config.mode.escalates()
            && self.collaborator.is_some()
            && self.orders.find(input).is_none()
            && !(self.config.mode.uses_rules()
                && answering_category(input, &self.rules).is_some())
    }

    /// Produce a reply for `input` given the turns before it.
    pub async fn answer(&mut self, history: &[Turn], input: &str) -> (String, Source) {
        if let Some(summary) = lookup(input, &self.orders) {
            return (summary, Source::Order);
        }

        if self.config.mode.uses_rules()
            && let Some(response) = match_rules(input, &self.rules, &mut self.rng)
        {
            return (response.to_string(), Source::Rule);
        }

        if self.config.mode.escalates()
            && let Some(collaborator) = self.collaborator.as_deref()
        {
            return match collaborator
                .generate(&self.system_prompt, history, input)
                .await
            {
                Ok(reply) => {
                    if let Some(usage) = reply.usage {
                        self.usage.add(usage);
                    }
                    (reply.text, Source::Collaborator)
                }
                Err(e) => {
                    warn!(error = %e, "collaborator call failed");
                    (diagnostic(&e), Source::Diagnostic)
                }
            };
        }

        (fallback(&mut self.rng).to_string(), Source::Fallback)
    }
}

#[async_trait]
impl Engine for SupportEngine {
    async fn handle_turn(&mut self, mut session: Session, input: &str) -> (Session, String) {
        let history = session.recent(self.config.history_window).to_vec();
        session.push(Turn::user(input));

        let (reply, source) = self.answer(&history, input).await;
        debug!(?source, mode = self.config.mode.label(), "turn answered");

        session.push(Turn::bot(reply.clone()));
        (session, reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collaborator::mock::MockCollaborator;
    use crate::consts::GREETING;
    use crate::knowledge::Category;
    use std::sync::Arc;

    fn engine(mode: Mode, collaborator: Option<Arc<MockCollaborator>>) -> SupportEngine {
        SupportEngine::with_defaults(
            collaborator.map(|c| Box::new(c) as Box<dyn Collaborator>),
            SupportConfig {
                mode,
                seed: Some(1),
                ..SupportConfig::default()
            },
        )
    }

    #[tokio::test]
    async fn order_wins_over_rules() {
        let mut engine = engine(Mode::Offline, None);
        let (_, source) = engine.answer(&[], "track order #67890").await;
        assert_eq!(source, Source::Order);
    }

    #[tokio::test]
    async fn hybrid_without_collaborator_falls_back() {
        let mut engine = engine(Mode::Hybrid, None);
        let (_, source) = engine.answer(&[], "qwerty").await;
        assert_eq!(source, Source::Fallback);
    }

    #[tokio::test]
    async fn failure_becomes_diagnostic() {
        let mock = Arc::new(MockCollaborator::new(vec![]));
        let mut engine = engine(Mode::Assisted, Some(mock));
        let (reply, source) = engine.answer(&[], "hello").await;
        assert_eq!(source, Source::Diagnostic);
        assert!(reply.starts_with("⚠️ **Error:**"));
    }

    #[test]
    fn will_escalate_by_mode() {
        let mock = Arc::new(MockCollaborator::replying(&[]));
        let hybrid = engine(Mode::Hybrid, Some(mock.clone()));
        assert!(hybrid.will_escalate("qwerty"));
        assert!(!hybrid.will_escalate("payment methods"));
        assert!(!hybrid.will_escalate("#12345"));

        let assisted = engine(Mode::Assisted, Some(mock.clone()));
        assert!(assisted.will_escalate("payment methods"));

        let offline = engine(Mode::Offline, Some(mock));
        assert!(!offline.will_escalate("qwerty"));
    }

    #[tokio::test]
    async fn empty_category_escalates_consistently() {
        let rules = RuleTable::new(vec![Category {
            name: "silent",
            patterns: vec!["quiet"],
            responses: vec![],
        }]);
        let mock = Arc::new(MockCollaborator::replying(&["from the model"]));
        let mut engine = SupportEngine::new(
            rules,
            OrderTable::default(),
            Some(Box::new(mock.clone())),
            SupportConfig {
                seed: Some(1),
                ..SupportConfig::default()
            },
        );

        assert!(engine.will_escalate("quiet please"));
        let (reply, source) = engine.answer(&[], "quiet please").await;
        assert_eq!(source, Source::Collaborator);
        assert_eq!(reply, "from the model");
        assert_eq!(mock.calls().len(), 1);
    }

    #[test]
    fn exposes_mode_and_collaborator() {
        let mock = Arc::new(MockCollaborator::replying(&[]));
        let hybrid = engine(Mode::Hybrid, Some(mock));
        assert_eq!(hybrid.mode(), Mode::Hybrid);
        let collaborator = hybrid.collaborator().unwrap();
        assert!(collaborator.is_configured());

        let offline = engine(Mode::Offline, None);
        assert_eq!(offline.mode(), Mode::Offline);
        assert!(offline.collaborator().is_none());
    }

    #[tokio::test]
    async fn handle_turn_appends_two_turns() {
        let mut engine = engine(Mode::Offline, None);
        let (session, reply) = engine.handle_turn(Session::new(GREETING), "refund").await;
        assert_eq!(session.transcript().len(), 3);
        assert_eq!(session.transcript()[1], Turn::user("refund"));
        assert_eq!(session.last_reply(), Some(reply.as_str()));
    }
}
