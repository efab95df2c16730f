//! Style-token composition.
//!
//! Tokens are opaque utility-class strings. Composition joins the tokens that
//! are present with a single space, in the order they were given. Absent
//! tokens (`None`) and empty tokens are skipped; nothing is ever deduplicated
//! or reordered, so caller-supplied tokens placed last always come last.

/// Join the present, non-empty tokens with single spaces, preserving order.
///
/// ```
/// use uk_core::classes::compose;
///
/// let hover = true;
/// let class = compose([Some("card"), hover.then_some("shadow"), None, Some("")]);
/// assert_eq!(class, "card shadow");
/// ```
pub fn compose<'a, I>(tokens: I) -> String
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let mut list = ClassList::new();
    for token in tokens {
        list.push_opt(token);
    }
    list.build()
}

/// Ordered builder for a composed class string.
///
/// Components push their base tokens first, conditional tokens next and the
/// caller's tokens last.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a token string. A string holding several space-separated tokens
    /// is split so that blank runs never produce double spaces.
    pub fn push(&mut self, token: &str) -> &mut Self {
        self.tokens.extend(token.split_whitespace().map(str::to_owned));
        self
    }

    pub fn push_if(&mut self, condition: bool, token: &str) -> &mut Self {
        if condition {
            self.push(token);
        }
        self
    }

    pub fn push_opt(&mut self, token: Option<&str>) -> &mut Self {
        if let Some(token) = token {
            self.push(token);
        }
        self
    }

    /// Append caller-supplied tokens. Identical to [`push`](Self::push); kept
    /// separate so call sites read base → conditional → caller.
    pub fn extend(&mut self, caller: &str) -> &mut Self {
        self.push(caller)
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    pub fn build(&self) -> String {
        self.tokens.join(" ")
    }
}

impl std::fmt::Display for ClassList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compose_skips_absent_and_empty() {
        assert_eq!(compose([None, Some(""), Some("  "), Some("a")]), "a");
        assert_eq!(compose(std::iter::empty()), "");
    }

    #[test]
    fn compose_preserves_order() {
        assert_eq!(compose([Some("z"), Some("a"), Some("m")]), "z a m");
    }

    #[test]
    fn builder_normalises_whitespace() {
        let mut list = ClassList::new();
        list.push("  px-6   py-4 ").push_if(false, "hidden").extend("");
        assert_eq!(list.build(), "px-6 py-4");
        assert_eq!(list.len(), 2);
    }
}
