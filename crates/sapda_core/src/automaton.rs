//! Immutable SAPDA description: states, alphabets, transition table, initial
//! state/stack symbol (`spec` §3, §4.1).

use std::rc::Rc;

use indexmap::{IndexMap, IndexSet};

use crate::errors::AutomatonError;

/// Reserved epsilon / empty-stack marker. Never a member of `Σ` or `Γ`.
pub const EPSILON: char = 'e';

/// An automaton state. `Rc<str>` so every `Leaf` can carry one cheaply.
pub type State = Rc<str>;

/// A label on a transition: either the empty word or a single symbol.
///
/// Mirrors the reference crate's `EdgeLabel` (`Eps` | `Sym(char)`) — the
/// same two-case shape, because a SAPDA transition is likewise keyed by
/// either `e` or one letter of `Σ`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Letter {
    Epsilon,
    Symbol(char),
}

impl Letter {
    #[must_use]
    pub fn from_char(c: char) -> Self {
        if c == EPSILON { Letter::Epsilon } else { Letter::Symbol(c) }
    }

    #[must_use]
    pub fn is_epsilon(self) -> bool {
        matches!(self, Letter::Epsilon)
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Letter::Epsilon => write!(f, "e"),
            Letter::Symbol(c) => write!(f, "{c}"),
        }
    }
}

/// One conjunct of a (possibly conjunctive) transition right-hand side:
/// the next state and the string to push (empty means "push nothing").
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Conjunct {
    pub next_state: State,
    pub push: Vec<char>,
}

impl Conjunct {
    #[must_use]
    pub fn new(next_state: impl Into<Rc<str>>, push: impl Into<Vec<char>>) -> Self {
        Self { next_state: next_state.into(), push: push.into() }
    }
}

/// A full right-hand side of one alternative in `δ`: a conjunction of one
/// or more conjuncts. Length 1 is an ordinary transition; length ≥2 is
/// conjunctive and splits a leaf into a `Tree` (`spec` §4.2).
pub type Conjunction = Vec<Conjunct>;

type LetterTable = IndexMap<Letter, Vec<Conjunction>>;
type StackTable = IndexMap<char, LetterTable>;
type StateTable = IndexMap<State, StackTable>;

/// Immutable SAPDA description `(Q, Σ, Γ, δ, q₀, Z₀)` (`spec` §3, §4.1).
#[derive(Debug, Clone)]
pub struct Automaton {
    /// Optional display name, e.g. for fixtures and trace headers.
    pub name: Option<String>,
    states: IndexSet<State>,
    input_alphabet: IndexSet<char>,
    stack_alphabet: IndexSet<char>,
    transitions: StateTable,
    initial_state: State,
    initial_stack_symbol: char,
}

impl Automaton {
    #[must_use]
    pub fn initial_state(&self) -> &State {
        &self.initial_state
    }

    #[must_use]
    pub fn initial_stack_symbol(&self) -> char {
        self.initial_stack_symbol
    }

    #[must_use]
    pub fn states(&self) -> &IndexSet<State> {
        &self.states
    }

    #[must_use]
    pub fn input_alphabet(&self) -> &IndexSet<char> {
        &self.input_alphabet
    }

    /// Rejects (per `spec` §4.1/§7.1) if `input` contains any letter
    /// outside `Σ`. The literal string `"e"` is treated as the empty
    /// word, not as a one-letter input containing the reserved marker.
    #[must_use]
    pub fn validate_input(&self, input: &str) -> bool {
        if input == "e" {
            return true;
        }
        input.chars().all(|c| self.input_alphabet.contains(&c))
    }

    /// `transitions[state][stack_top][letter]` (`spec` §4.1). Absence of
    /// any key at any level means "no transition".
    #[must_use]
    pub fn transitions_for(&self, state: &State, stack_top: char, letter: Letter) -> Option<&[Conjunction]> {
        self.transitions
            .get(state)
            .and_then(|by_top| by_top.get(&stack_top))
            .and_then(|by_letter| by_letter.get(&letter))
            .map(Vec::as_slice)
    }
}

/// Builder for [`Automaton`], mirroring the plain-struct-with-constructor
/// idiom the reference crate uses for `Nfa`/`Dfa` (built up field by
/// field, then frozen).
#[derive(Debug, Default)]
pub struct AutomatonBuilder {
    name: Option<String>,
    states: IndexSet<State>,
    input_alphabet: IndexSet<char>,
    stack_alphabet: IndexSet<char>,
    transitions: StateTable,
    initial_state: Option<State>,
    initial_stack_symbol: Option<char>,
}

impl AutomatonBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn state(mut self, state: impl Into<Rc<str>>) -> Self {
        self.states.insert(state.into());
        self
    }

    #[must_use]
    pub fn states(mut self, states: impl IntoIterator<Item = &'static str>) -> Self {
        for s in states {
            self.states.insert(Rc::from(s));
        }
        self
    }

    #[must_use]
    pub fn input_alphabet(mut self, symbols: impl IntoIterator<Item = char>) -> Self {
        self.input_alphabet.extend(symbols);
        self
    }

    #[must_use]
    pub fn stack_alphabet(mut self, symbols: impl IntoIterator<Item = char>) -> Self {
        self.stack_alphabet.extend(symbols);
        self
    }

    #[must_use]
    pub fn initial(mut self, state: impl Into<Rc<str>>, stack_symbol: char) -> Self {
        self.initial_state = Some(state.into());
        self.initial_stack_symbol = Some(stack_symbol);
        self
    }

    /// Registers one alternative `(state, stack_top, letter) -> conjuncts`.
    /// Calling this more than once for the same `(state, stack_top,
    /// letter)` appends another alternative rather than replacing.
    #[must_use]
    pub fn transition(
        mut self,
        state: impl Into<Rc<str>>,
        stack_top: char,
        letter: char,
        conjuncts: impl IntoIterator<Item = Conjunct>,
    ) -> Self {
        let state = state.into();
        self.states.insert(state.clone());
        self.stack_alphabet.insert(stack_top);
        let conjunction: Conjunction = conjuncts.into_iter().collect();
        for conjunct in &conjunction {
            self.states.insert(conjunct.next_state.clone());
            for &c in &conjunct.push {
                if c != EPSILON {
                    self.stack_alphabet.insert(c);
                }
            }
        }
        self.transitions
            .entry(state)
            .or_default()
            .entry(stack_top)
            .or_default()
            .entry(Letter::from_char(letter))
            .or_default()
            .push(conjunction);
        self
    }

    pub fn build(self) -> Result<Automaton, AutomatonError> {
        if self.input_alphabet.contains(&EPSILON) {
            return Err(AutomatonError::ReservedSymbol("input"));
        }
        if self.stack_alphabet.contains(&EPSILON) {
            return Err(AutomatonError::ReservedSymbol("stack"));
        }
        let initial_state = self
            .initial_state
            .ok_or_else(|| AutomatonError::UnknownInitialState(String::new()))?;
        if !self.states.contains(&initial_state) {
            return Err(AutomatonError::UnknownInitialState(initial_state.to_string()));
        }
        let initial_stack_symbol = self
            .initial_stack_symbol
            .ok_or(AutomatonError::UnknownInitialStackSymbol(EPSILON))?;
        if !self.stack_alphabet.contains(&initial_stack_symbol) {
            return Err(AutomatonError::UnknownInitialStackSymbol(initial_stack_symbol));
        }

        Ok(Automaton {
            name: self.name,
            states: self.states,
            input_alphabet: self.input_alphabet,
            stack_alphabet: self.stack_alphabet,
            transitions: self.transitions,
            initial_state,
            initial_stack_symbol,
        })
    }
}
