//! Branching walkthrough: an if/else-if chain and a guarded `match`.

use std::io::{self, Write};

/// Value the CLI uses when no number is given.
pub const DEFAULT_NUM: i64 = 0;

pub fn is_many(num: i64) -> bool {
    num > 3
}

/// If/else-if chain.
pub fn describe_if(num: i64) -> &'static str {
    if num == 1 {
        "One"
    } else if num == 2 {
        "Two"
    } else {
        "Neither 1 nor 2"
    }
}

/// First matching arm wins; `_` catches everything below 1.
pub fn describe_switch(num: i64) -> &'static str {
    match num {
        1 => "One",
        2 => "Two",
        n if n > 2 => "Many",
        _ => "Thrown over boat",
    }
}

pub fn run(num: i64, out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "num= {num}")?;
    if is_many(num) {
        writeln!(out, "Many")?;
    }
    writeln!(out, "{}", describe_if(num))?;
    writeln!(out, "{}", describe_switch(num))?;
    Ok(())
}
