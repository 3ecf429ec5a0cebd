//! # Intcode
//!
//! Command line front end for the Intcode machine.
//!

mod term;

fn main() {
    term::main()
}
