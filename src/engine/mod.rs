pub mod support;

use async_trait::async_trait;

use crate::session::Session;

/// Which strategies run after order lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum Mode {
    /// Rule table, then a canned fallback. Never calls the collaborator.
    Offline,
    /// Rule table, then the collaborator.
    Hybrid,
    /// Straight to the collaborator.
    Assisted,
}

impl Mode {
    /// Whether unmatched input goes to the collaborator.
    pub fn escalates(self) -> bool {
        !matches!(self, Mode::Offline)
    }

    /// Whether the local rule table is consulted.
    pub fn uses_rules(self) -> bool {
        !matches!(self, Mode::Assisted)
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Offline => "offline",
            Mode::Hybrid => "hybrid",
            Mode::Assisted => "assisted",
        }
    }
}

/// The outermost boundary. main.rs only knows this trait.
///
/// A turn takes the session by value and hands it back with the user's
/// message and the reply appended. Turns never fail: every problem is
/// rendered into the reply text.
#[async_trait]
pub trait Engine: Send {
    async fn handle_turn(&mut self, session: Session, input: &str) -> (Session, String);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mode_flags() {
        assert!(!Mode::Offline.escalates());
        assert!(Mode::Hybrid.escalates());
        assert!(Mode::Assisted.escalates());
        assert!(Mode::Offline.uses_rules());
        assert!(Mode::Hybrid.uses_rules());
        assert!(!Mode::Assisted.uses_rules());
    }

    #[test]
    fn mode_labels() {
        assert_eq!(Mode::Offline.label(), "offline");
        assert_eq!(Mode::Hybrid.label(), "hybrid");
        assert_eq!(Mode::Assisted.label(), "assisted");
    }
}
