//! Reference automata used by the integration tests and `sapda_cli`
//! (`spec` §8 "Concrete scenarios").

use crate::automaton::{Automaton, AutomatonBuilder, Conjunct};

fn push(s: &str) -> Vec<char> {
    if s == "e" { Vec::new() } else { s.chars().collect() }
}

fn c(state: &str, push_str: &str) -> Conjunct {
    Conjunct::new(state, push(push_str))
}

/// `L₁ = { aⁿbⁿcⁿ | n > 0 }`: forks into an independent `a`/`b` counter and
/// `b`/`c` counter that must each empty their stack on the same input.
#[must_use]
pub fn blocks_of_equal_length() -> Automaton {
    AutomatonBuilder::new()
        .name("Blocks of a's, b's and c's of equal length")
        .states(["q0", "qbc+", "qbc-", "qac+", "qac-", "qb"])
        .input_alphabet(['a', 'b', 'c'])
        .stack_alphabet(['Z', 'A'])
        .initial("q0", 'Z')
        .transition("q0", 'Z', 'e', [c("qbc+", "Z"), c("qac+", "Z")])
        .transition("qbc+", 'Z', 'a', [c("qbc+", "Z")])
        .transition("qbc+", 'Z', 'b', [c("qbc+", "AZ")])
        .transition("qbc+", 'A', 'b', [c("qbc+", "AA")])
        .transition("qbc+", 'A', 'c', [c("qbc-", "e")])
        .transition("qbc-", 'A', 'c', [c("qbc-", "e")])
        .transition("qbc-", 'Z', 'e', [c("q0", "e")])
        .transition("qac+", 'Z', 'a', [c("qac+", "AZ")])
        .transition("qac+", 'A', 'a', [c("qac+", "AA")])
        .transition("qac+", 'A', 'b', [c("qb", "A")])
        .transition("qb", 'A', 'b', [c("qb", "A")])
        .transition("qb", 'A', 'c', [c("qac-", "e")])
        .transition("qac-", 'A', 'c', [c("qac-", "e")])
        .transition("qac-", 'Z', 'e', [c("q0", "e")])
        .build()
        .unwrap()
}

/// `L₂ = { w | |w|_a = |w|_b = |w|_c }`: one branch tallies `a` against `b`
/// (pushing the majority letter), the other tallies `b` against `c`.
#[must_use]
pub fn equal_letter_counts() -> Automaton {
    AutomatonBuilder::new()
        .name("Equal number of a's, b's and c's")
        .states(["q0", "q1", "q2"])
        .input_alphabet(['a', 'b', 'c'])
        .stack_alphabet(['Z', 'a', 'b', 'c'])
        .initial("q0", 'Z')
        .transition("q0", 'Z', 'e', [c("q1", "Z"), c("q2", "Z")])
        .transition("q1", 'Z', 'a', [c("q1", "aZ")])
        .transition("q1", 'Z', 'b', [c("q1", "bZ")])
        .transition("q1", 'Z', 'c', [c("q1", "Z")])
        .transition("q1", 'Z', 'e', [c("q0", "e")])
        .transition("q1", 'a', 'a', [c("q1", "aa")])
        .transition("q1", 'a', 'b', [c("q1", "e")])
        .transition("q1", 'a', 'c', [c("q1", "a")])
        .transition("q1", 'b', 'a', [c("q1", "e")])
        .transition("q1", 'b', 'b', [c("q1", "bb")])
        .transition("q1", 'b', 'c', [c("q1", "b")])
        .transition("q2", 'Z', 'a', [c("q2", "Z")])
        .transition("q2", 'Z', 'b', [c("q2", "bZ")])
        .transition("q2", 'Z', 'c', [c("q2", "cZ")])
        .transition("q2", 'Z', 'e', [c("q0", "e")])
        .transition("q2", 'b', 'a', [c("q2", "b")])
        .transition("q2", 'b', 'b', [c("q2", "bb")])
        .transition("q2", 'b', 'c', [c("q2", "e")])
        .transition("q2", 'c', 'a', [c("q2", "c")])
        .transition("q2", 'c', 'b', [c("q2", "e")])
        .transition("q2", 'c', 'c', [c("q2", "cc")])
        .build()
        .unwrap()
}

/// `L₃ = { w$w | w ∈ {a,b}* }`: guesses the split point, forks one branch
/// per letter of the first `w` to match it against the corresponding
/// letter of the second `w`, and a watcher branch that just counts length.
#[must_use]
pub fn reduplication_with_marker() -> Automaton {
    AutomatonBuilder::new()
        .name("Reduplication with centre marker: w$w")
        .states(["q0", "ql", "q", "qw", "qe", "qa1", "qa2", "qb1", "qb2"])
        .input_alphabet(['a', 'b', '$'])
        .stack_alphabet(['Z', '#'])
        .initial("q0", 'Z')
        .transition("q0", 'Z', 'e', [c("ql", "Z"), c("q", "Z")])
        .transition("ql", 'Z', 'a', [c("ql", "#Z")])
        .transition("ql", 'Z', 'b', [c("ql", "#Z")])
        .transition("ql", 'Z', '$', [c("qe", "Z")])
        .transition("ql", '#', 'a', [c("ql", "##")])
        .transition("ql", '#', 'b', [c("ql", "##")])
        .transition("ql", '#', '$', [c("qe", "#")])
        .transition("q", 'Z', 'a', [c("qa1", "Z"), c("q", "Z")])
        .transition("q", 'Z', 'b', [c("qb1", "Z"), c("q", "Z")])
        .transition("q", 'Z', '$', [c("qw", "Z")])
        .transition("qa1", 'Z', 'a', [c("qa1", "#Z")])
        .transition("qa1", 'Z', 'b', [c("qa1", "#Z")])
        .transition("qa1", 'Z', '$', [c("qa2", "Z")])
        .transition("qa1", '#', 'a', [c("qa1", "##")])
        .transition("qa1", '#', 'b', [c("qa1", "##")])
        .transition("qa1", '#', '$', [c("qa2", "#")])
        .transition("qb1", 'Z', 'a', [c("qb1", "#Z")])
        .transition("qb1", 'Z', 'b', [c("qb1", "#Z")])
        .transition("qb1", 'Z', '$', [c("qb2", "Z")])
        .transition("qb1", '#', 'a', [c("qb1", "##")])
        .transition("qb1", '#', 'b', [c("qb1", "##")])
        .transition("qb1", '#', '$', [c("qb2", "#")])
        .transition("qa2", 'Z', 'a', [c("qa2", "Z")])
        .transition("qa2", 'Z', 'a', [c("qe", "Z")])
        .transition("qa2", 'Z', 'b', [c("qa2", "Z")])
        .transition("qa2", '#', 'a', [c("qa2", "#")])
        .transition("qa2", '#', 'a', [c("qe", "#")])
        .transition("qa2", '#', 'b', [c("qa2", "#")])
        .transition("qb2", 'Z', 'b', [c("qb2", "Z")])
        .transition("qb2", 'Z', 'b', [c("qe", "Z")])
        .transition("qb2", 'Z', 'a', [c("qb2", "Z")])
        .transition("qb2", '#', 'b', [c("qb2", "#")])
        .transition("qb2", '#', 'b', [c("qe", "#")])
        .transition("qb2", '#', 'a', [c("qb2", "#")])
        .transition("qw", 'Z', 'a', [c("qw", "Z")])
        .transition("qw", 'Z', 'a', [c("qe", "e")])
        .transition("qw", 'Z', 'b', [c("qw", "Z")])
        .transition("qw", 'Z', 'b', [c("qe", "e")])
        .transition("qe", 'Z', 'e', [c("qe", "e")])
        .transition("qe", '#', 'a', [c("qe", "e")])
        .transition("qe", '#', 'b', [c("qe", "e")])
        .build()
        .unwrap()
}

/// Dead branch from the source material: reduplication *without* a centre
/// marker (`w$uw`). Kept only as a fixture, never wired into `run`/`run_bfs`
/// (`spec` §9 Open Question).
#[must_use]
pub fn reduplication_no_marker() -> Automaton {
    AutomatonBuilder::new()
        .name("Unwired: w$uw without a centre marker")
        .states(["q0", "qw", "qe", "qa1", "qa2", "qb1", "qb2"])
        .input_alphabet(['a', 'b', '$'])
        .stack_alphabet(['Z', '#'])
        .initial("q0", 'Z')
        .transition("q0", 'Z', 'a', [c("qa1", "Z"), c("q0", "Z")])
        .transition("q0", 'Z', 'b', [c("qb1", "Z"), c("q0", "Z")])
        .transition("q0", 'Z', '$', [c("qw", "Z")])
        .transition("qa1", 'Z', 'a', [c("qa1", "#Z")])
        .transition("qa1", 'Z', 'b', [c("qa1", "#Z")])
        .transition("qa1", 'Z', '$', [c("qa2", "Z")])
        .transition("qa1", '#', 'a', [c("qa1", "##")])
        .transition("qa1", '#', 'b', [c("qa1", "##")])
        .transition("qa1", '#', '$', [c("qa2", "#")])
        .transition("qb1", 'Z', 'a', [c("qb1", "#Z")])
        .transition("qb1", 'Z', 'b', [c("qb1", "#Z")])
        .transition("qb1", 'Z', '$', [c("qb2", "Z")])
        .transition("qb1", '#', 'a', [c("qb1", "##")])
        .transition("qb1", '#', 'b', [c("qb1", "##")])
        .transition("qb1", '#', '$', [c("qb2", "#")])
        .transition("qa2", 'Z', 'a', [c("qa2", "Z")])
        .transition("qa2", 'Z', 'a', [c("qe", "Z")])
        .transition("qa2", 'Z', 'b', [c("qa2", "Z")])
        .transition("qa2", '#', 'a', [c("qa2", "#")])
        .transition("qa2", '#', 'a', [c("qe", "#")])
        .transition("qa2", '#', 'b', [c("qa2", "#")])
        .transition("qb2", 'Z', 'b', [c("qb2", "Z")])
        .transition("qb2", 'Z', 'b', [c("qe", "Z")])
        .transition("qb2", 'Z', 'a', [c("qb2", "Z")])
        .transition("qb2", '#', 'b', [c("qb2", "#")])
        .transition("qb2", '#', 'b', [c("qe", "#")])
        .transition("qb2", '#', 'a', [c("qb2", "#")])
        .transition("qw", 'Z', 'a', [c("qw", "Z")])
        .transition("qw", 'Z', 'a', [c("qe", "e")])
        .transition("qw", 'Z', 'b', [c("qw", "Z")])
        .transition("qw", 'Z', 'b', [c("qe", "e")])
        .transition("qe", 'Z', 'e', [c("qe", "e")])
        .transition("qe", '#', 'a', [c("qe", "e")])
        .transition("qe", '#', 'b', [c("qe", "e")])
        .build()
        .unwrap()
}

/// `L₄ = { 0^(4ⁿ) | n ≥ 0 }`: each stack symbol `A`/`B`/`C`/`D` either
/// quarters again (conjunctive split) or terminates by pushing its
/// literal run of zeros.
#[must_use]
pub fn powers_of_four() -> Automaton {
    AutomatonBuilder::new()
        .name("0^(4^n)")
        .states(["q"])
        .input_alphabet(['0'])
        .stack_alphabet(['A', 'B', 'C', 'D', '0'])
        .initial("q", 'A')
        .transition("q", 'A', 'e', [c("q", "AC"), c("q", "BB")])
        .transition("q", 'A', 'e', [c("q", "0")])
        .transition("q", 'B', 'e', [c("q", "AA"), c("q", "BD")])
        .transition("q", 'B', 'e', [c("q", "00")])
        .transition("q", 'C', 'e', [c("q", "AB"), c("q", "DD")])
        .transition("q", 'C', 'e', [c("q", "000")])
        .transition("q", 'D', 'e', [c("q", "AB"), c("q", "CC")])
        .transition("q", '0', '0', [c("q", "e")])
        .build()
        .unwrap()
}

/// From the source material's `sapda5`: at `(q, S)` on `e`, the same
/// `(state, stack_top, letter)` key offers a mix of single-conjunct
/// alternatives (replace `S` with one terminal symbol, `a` or `b`) and
/// two-conjunct alternatives (replace `S` with two independently-recursing
/// copies of itself, `aaS`/`aSa` or `bbS`/`bSb`) — exercising a dictionary
/// entry whose alternatives have mixed conjunct arity, unlike every other
/// fixture here where a given key's alternatives are uniformly ordinary or
/// uniformly conjunctive.
#[must_use]
pub fn recursive_mixed_arity() -> Automaton {
    AutomatonBuilder::new()
        .name("Mixed-arity recursive S-grammar (sapda5)")
        .states(["q"])
        .input_alphabet(['a', 'b'])
        .stack_alphabet(['S', 'a', 'b'])
        .initial("q", 'S')
        .transition("q", 'S', 'e', [c("q", "aaS"), c("q", "aSa")])
        .transition("q", 'S', 'e', [c("q", "bbS"), c("q", "bSb")])
        .transition("q", 'S', 'e', [c("q", "a")])
        .transition("q", 'S', 'e', [c("q", "b")])
        .transition("q", 'a', 'a', [c("q", "e")])
        .transition("q", 'b', 'b', [c("q", "e")])
        .build()
        .unwrap()
}

/// Simple non-conjunctive PDA for `aⁿbⁿ` — a baseline with no branching at
/// all, exercising the ordinary-transition path in isolation.
#[must_use]
pub fn simple_pda() -> Automaton {
    AutomatonBuilder::new()
        .name("a^n b^n (no conjunctive transitions)")
        .states(["q0", "q1", "q2", "q3"])
        .input_alphabet(['a', 'b'])
        .stack_alphabet(['Z', 'A'])
        .initial("q0", 'Z')
        .transition("q0", 'Z', 'a', [c("q1", "AZ")])
        .transition("q0", 'Z', 'e', [c("q0", "e")])
        .transition("q1", 'A', 'a', [c("q1", "AA")])
        .transition("q1", 'A', 'b', [c("q2", "e")])
        .transition("q2", 'A', 'b', [c("q2", "e")])
        .transition("q2", 'Z', 'e', [c("q3", "e")])
        .build()
        .unwrap()
}
