use thiserror::Error;

/// Violation of a core data-model invariant (see `spec` §3, §7.4).
///
/// These never leave the crate as a public `Result::Err`: `search::run` is
/// the sole place that catches them, logs a diagnostic, and downgrades the
/// run to an empty (rejecting) trace rather than risk producing an
/// illegitimate accepting computation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Invariant {
    /// A transition's trigger symbol did not match the top of the leaf's
    /// stack at the moment it was applied.
    #[error("pop mismatch: expected '{expected}' on top of stack, found '{found}'")]
    PopMismatch { expected: char, found: char },

    /// A transition (ordinary or conjunctive) was applied to a leaf whose
    /// stack was already emptied (`['e']`); there is nothing left to pop.
    #[error("attempted to apply a transition to a leaf with an already-emptied stack")]
    EmptyStackTransition,

    /// A transition was applied whose expected input letter did not match
    /// the leaf's next remaining-input symbol.
    #[error("transition letter '{expected}' does not match next input '{found}'")]
    LetterMismatch { expected: char, found: char },

    /// A rewrite targeted a leaf key that no longer exists in the
    /// structure (the dictionary and the structure have drifted apart).
    #[error("no leaf matching key found during rewrite")]
    LeafNotFound,
}

/// Error building an [`crate::automaton::Automaton`] from caller-supplied
/// components (used by `fixtures`, and by any future external loader).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AutomatonError {
    /// The reserved epsilon marker `'e'` was included in an alphabet.
    #[error("the reserved symbol 'e' may not appear in the {0} alphabet")]
    ReservedSymbol(&'static str),

    /// The initial state is not a member of the declared state set.
    #[error("initial state '{0}' is not among the declared states")]
    UnknownInitialState(String),

    /// The initial stack symbol is not a member of the declared stack
    /// alphabet.
    #[error("initial stack symbol '{0}' is not among the declared stack alphabet")]
    UnknownInitialStackSymbol(char),
}
