use std::env;

use sapda_core::automaton::Automaton;
use sapda_core::fixtures;

fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .compact()
        .try_init()
        .ok();
}

fn fixture_by_name(name: &str) -> Option<Automaton> {
    match name {
        "sapda1" | "abc" => Some(fixtures::blocks_of_equal_length()),
        "sapda2" | "equal-counts" => Some(fixtures::equal_letter_counts()),
        "sapda3" | "reduplication" => Some(fixtures::reduplication_with_marker()),
        "sapda4" | "powers-of-four" => Some(fixtures::powers_of_four()),
        "sapda5" | "mixed-arity" => Some(fixtures::recursive_mixed_arity()),
        "pda" => Some(fixtures::simple_pda()),
        _ => None,
    }
}

fn main() {
    init_tracing();

    let mut args = env::args().skip(1);
    let fixture_name = match args.next() {
        Some(s) => s,
        None => {
            eprintln!("Usage: sapda_cli <fixture> <input-string>");
            eprintln!("Fixtures: sapda1, sapda2, sapda3, sapda4, sapda5, pda");
            return;
        }
    };

    let Some(automaton) = fixture_by_name(&fixture_name) else {
        eprintln!("Unknown fixture: {fixture_name}");
        return;
    };

    let input = args.next().unwrap_or_default();
    println!("Automaton: {}", automaton.name.as_deref().unwrap_or(&fixture_name));
    println!("Input: {input:?}");

    match sapda_core::run(&automaton, &input).as_slice() {
        [] => println!("Rejected."),
        [only] if only == "timeout" => println!("Timed out."),
        trace => {
            for step in trace {
                println!("{step}");
            }
        }
    }
}
