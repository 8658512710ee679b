//! Growable sequence walkthrough: append, length, indexing, sub-ranges and
//! membership.

use std::fmt::Display;
use std::io::{self, Write};

/// Appends `extra` after the existing elements and hands the vector back.
///
/// Prior elements keep their order; new ones land at the end.
pub fn append<T>(mut items: Vec<T>, extra: impl IntoIterator<Item = T>) -> Vec<T> {
    items.extend(extra);
    items
}

/// Linear membership test.
pub fn elem_exists<T, Q>(needle: &Q, haystack: &[T]) -> bool
where
    T: PartialEq<Q>,
    Q: ?Sized,
{
    haystack.iter().any(|item| item == needle)
}

/// Renders items space-separated inside brackets, e.g. `[abc def]`.
pub fn format_list<T: Display>(items: &[T]) -> String {
    let joined = items
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ");
    format!("[{joined}]")
}

/// Prints the walkthrough.
pub fn run(out: &mut impl Write) -> io::Result<()> {
    let numbers = append(Vec::new(), [123]);
    let numbers = append(numbers, [456]);
    writeln!(out, "{}", format_list(&numbers))?;

    let alphas: Vec<String> = ["abc", "def", "ghi", "jkl"]
        .into_iter()
        .map(String::from)
        .collect();
    let alphas = append(alphas, ["pqr".to_string(), "stu".to_string()]);
    writeln!(out, "{}", format_list(&alphas))?;

    writeln!(out, "Length: {}", alphas.len())?;

    if let Some(second) = alphas.get(1) {
        writeln!(out, "{second}")?;
    }

    // Half-open: index 1 included, index 3 excluded.
    if let Some(window) = alphas.get(1..3) {
        writeln!(out, "{}", format_list(window))?;
    }

    if elem_exists("def", &alphas) {
        writeln!(out, "Exists!")?;
    }

    Ok(())
}
