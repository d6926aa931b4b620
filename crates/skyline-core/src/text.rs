//! English-language list formatting for validation messages.

/// Join items as an English list ending with the given word.
///
/// ```
/// use skyline_core::text::join_text;
///
/// assert_eq!(join_text(["foo", "bar", "baz"], "and"), "foo, bar and baz");
/// assert_eq!(join_text(["foo", "bar"], "or"), "foo or bar");
/// assert_eq!(join_text(["foo"], "or"), "foo");
/// assert_eq!(join_text(Vec::<String>::new(), "or"), "");
/// ```
pub fn join_text<I, S>(items: I, separator: &str) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let items: Vec<S> = items.into_iter().collect();
    match items.split_last() {
        None => String::new(),
        Some((last, [])) => last.as_ref().to_string(),
        Some((last, rest)) => {
            let left: Vec<&str> = rest.iter().map(AsRef::as_ref).collect();
            format!("{} {separator} {}", left.join(", "), last.as_ref())
        }
    }
}

/// Join items as "a, b and c".
pub fn join_and<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_text(items, "and")
}

/// Join items as "a, b or c".
pub fn join_or<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    join_text(items, "or")
}

/// Wrap a value in single quotes.
#[must_use]
pub fn quoted(value: &str) -> String {
    format!("'{value}'")
}
