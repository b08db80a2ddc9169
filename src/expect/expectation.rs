//! The expectation context
//!
//! An `Expectation` holds the actual value for the duration of one
//! assertion chain, plus the negation flag and the article used by the
//! type matchers for wording. Failed matchers panic with a descriptive
//! message; passing matchers hand the expectation back for chaining.

/// Start an assertion chain over a value under test.
///
/// ```rust-example
/// expect(&wrapper).to_have_class("btn").to_have_prop("disabled");
/// expect(&wrapper).not().to_contain("Spinner");
/// ```
pub fn expect<A>(actual: A) -> Expectation<A> {
    Expectation {
        actual,
        negated: false,
        article: "a",
    }
}

/// One assertion chain: the actual value plus wording state.
#[derive(Debug, Clone)]
pub struct Expectation<A> {
    pub(crate) actual: A,
    pub(crate) negated: bool,
    pub(crate) article: &'static str,
}

impl<A> Expectation<A> {
    /// Invert the pass/fail result of every subsequent matcher in this
    /// chain.
    pub fn not(mut self) -> Self {
        self.negated = true;
        self
    }

    pub fn actual(&self) -> &A {
        &self.actual
    }

    /// Wording fragment for the current polarity: `""` or `"not "`.
    pub(crate) fn polarity(&self) -> &'static str {
        if self.negated {
            "not "
        } else {
            ""
        }
    }

    /// Panic with `message` unless `pass` agrees with the polarity.
    pub(crate) fn verify(&self, pass: bool, message: impl FnOnce() -> String) {
        if pass == self.negated {
            panic!("{}", message());
        }
    }
}
