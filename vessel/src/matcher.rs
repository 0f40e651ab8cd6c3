/// A pattern a subject value can be matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pattern<T> {
    /// Matches when the subject compares equal to the literal.
    Literal(T),
    /// Matches any subject.
    Any,
}

impl<T: PartialEq> Pattern<T> {
    /// Returns `true` if the pattern accepts the subject.
    pub fn matches(&self, subject: &T) -> bool {
        match self {
            Self::Literal(literal) => literal == subject,
            Self::Any => true,
        }
    }
}

/// A pointer to the handler function of a [match arm](MatchArm).
pub type HandlerFn<T, R> = fn(T) -> R;

/// A pattern paired with the handler invoked when it matches.
pub type MatchArm<T, R> = (Pattern<T>, HandlerFn<T, R>);

/// Returns the result of the first handler whose pattern matches the
/// subject.
///
/// Arms are tried in order; a [`Pattern::Any`] arm matches unconditionally,
/// so any arm placed after one is unreachable.
///
/// # Panics
///
/// Panics if the arms are exhausted before any pattern matches. The panic
/// marks a missing case at the call site, follows the same
/// propagate-to-the-top policy as the container unwrap failures, and is not
/// meant to be caught; close the arm list with a [`Pattern::Any`] arm when a
/// fallback exists.
#[track_caller]
pub fn match_equal<T, R, I>(subject: T, arms: I) -> R
where
    T: PartialEq,
    I: IntoIterator<Item = MatchArm<T, R>>,
{
    for (pattern, handler) in arms {
        if pattern.matches(&subject) {
            return handler(subject);
        }
    }

    panic!("unexhaustive match: no pattern matched the subject")
}

#[cfg(test)]
mod tests {
    use super::{match_equal, MatchArm, Pattern};

    #[test]
    fn the_first_matching_arm_wins() {
        let arms: Vec<MatchArm<&str, &str>> = vec![
            (Pattern::Literal("/"), |_| "index"),
            (Pattern::Any, |_| "not found"),
        ];

        assert_eq!(match_equal("/", arms), "index");
    }

    #[test]
    fn the_wildcard_matches_anything() {
        let arms: Vec<MatchArm<&str, &str>> = vec![(Pattern::Any, |path| path)];

        assert_eq!(match_equal("/missing", arms), "/missing");
    }

    #[test]
    fn later_literals_are_reached_in_order() {
        let arms: Vec<MatchArm<u32, &str>> = vec![
            (Pattern::Literal(1), |_| "one"),
            (Pattern::Literal(2), |_| "two"),
            (Pattern::Any, |_| "many"),
        ];

        assert_eq!(match_equal(2, arms), "two");
    }

    #[test]
    fn the_handler_receives_the_subject() {
        let arms: Vec<MatchArm<u32, u32>> = vec![(Pattern::Literal(21), |n| n * 2)];

        assert_eq!(match_equal(21, arms), 42);
    }

    #[test]
    #[should_panic(expected = "unexhaustive match")]
    fn exhausting_the_arms_aborts() {
        match_equal::<u32, (), _>(3, Vec::new());
    }

    #[test]
    #[should_panic(expected = "unexhaustive match")]
    fn a_missing_case_aborts() {
        let arms: Vec<MatchArm<&str, &str>> = vec![(Pattern::Literal("/"), |_| "index")];

        match_equal("/missing", arms);
    }
}
