//! Where the delegated handler gets its greeting from.

/// Default text served by [`FixedGreeting`]
pub const DEFAULT_GREETING: &str = "Hello from the data layer!\n";

/// A data-access capability that produces greeting text.
///
/// Plain closures implement it too, so a lookup can be swapped in at
/// bootstrap without a dedicated type.
///
/// ```
/// use greeting::{greet_from, GreetingSource};
///
/// let source = || String::from("hi there\n");
/// assert_eq!(source.greeting(), "hi there\n");
/// assert_eq!(greet_from(&source).body(), "hi there\n");
/// ```
pub trait GreetingSource {
    /// Return the greeting to serve for the current invocation
    fn greeting(&self) -> String;
}

impl<F> GreetingSource for F
where
    F: Fn() -> String,
{
    fn greeting(&self) -> String {
        self()
    }
}

/// A greeting source that always returns the same text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedGreeting {
    text: String,
}

impl FixedGreeting {
    /// Serve `text` for every invocation
    pub fn new(text: impl Into<String>) -> Self {
        FixedGreeting { text: text.into() }
    }
}

impl Default for FixedGreeting {
    fn default() -> Self {
        FixedGreeting::new(DEFAULT_GREETING)
    }
}

impl GreetingSource for FixedGreeting {
    fn greeting(&self) -> String {
        self.text.clone()
    }
}
