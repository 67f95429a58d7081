//! Persistent names for faces and edges.
//!
//! Names are the family word followed by a zero-padded sequence number
//! (`Face000`, `Edge014`). Each family draws from its own counter, owned by a
//! single tracker. Derived names append a lowercase suffix (`Edge002a`,
//! `Edge002b`, ..., `Edge002z`, `Edge002aa`).

use std::fmt;

/// Family word for face names.
pub const FACE_PREFIX: &str = "Face";

/// Family word for edge names.
pub const EDGE_PREFIX: &str = "Edge";

/// Minimum number of digits in a sequence number.
pub const NAME_WIDTH: usize = 3;

macro_rules! persistent_name {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(String);

        impl $name {
            /// Wraps an existing name string.
            #[must_use]
            pub fn new(name: impl Into<String>) -> Self {
                Self(name.into())
            }

            /// Returns the name as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns the next derived name in this name's suffix sequence.
            #[must_use]
            pub fn sub_name(&self) -> Self {
                Self(sub_name(&self.0))
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl PartialEq<&str> for $name {
            fn eq(&self, other: &&str) -> bool {
                self.0 == *other
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

persistent_name! {
    /// The persistent name of a tracked face.
    FaceName
}

persistent_name! {
    /// The persistent name of a tracked edge.
    EdgeName
}

/// Issues fresh face and edge names.
///
/// Both counters only ever increase, so a name is never issued twice by the
/// same counter.
#[derive(Debug, Default)]
pub struct NameCounter {
    faces: usize,
    edges: usize,
}

impl NameCounter {
    /// Creates a counter starting at zero for both families.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues the next face name.
    pub fn next_face_name(&mut self) -> FaceName {
        let name = FaceName(format_name(FACE_PREFIX, self.faces));
        self.faces += 1;
        name
    }

    /// Returns the name the next call to [`Self::next_face_name`] will issue.
    #[must_use]
    pub fn peek_face_name(&self) -> FaceName {
        FaceName(format_name(FACE_PREFIX, self.faces))
    }

    /// Issues the next edge name.
    pub fn next_edge_name(&mut self) -> EdgeName {
        let name = EdgeName(format_name(EDGE_PREFIX, self.edges));
        self.edges += 1;
        name
    }

    /// Number of face names issued so far.
    #[must_use]
    pub fn faces_issued(&self) -> usize {
        self.faces
    }

    /// Number of edge names issued so far.
    #[must_use]
    pub fn edges_issued(&self) -> usize {
        self.edges
    }
}

fn format_name(prefix: &str, index: usize) -> String {
    format!("{prefix}{index:0width$}", width = NAME_WIDTH)
}

/// Returns the next derived name after `base`.
///
/// A name ending in a digit gets `a` appended. A trailing `z` becomes `aa`.
/// Any other trailing lowercase letter is replaced by its successor. A
/// trailing character outside `[0-9a-z]` is treated like a digit.
#[must_use]
pub fn sub_name(base: &str) -> String {
    let mut name = base.to_owned();
    match name.chars().last() {
        Some('z') => {
            name.pop();
            name.push_str("aa");
        }
        Some(c @ 'a'..='y') => {
            name.pop();
            name.extend((c..='z').nth(1));
        }
        _ => name.push('a'),
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counters_are_independent() {
        let mut counter = NameCounter::new();
        assert_eq!(counter.next_face_name(), "Face000");
        assert_eq!(counter.next_edge_name(), "Edge000");
        assert_eq!(counter.next_edge_name(), "Edge001");
        assert_eq!(counter.next_face_name(), "Face001");
        assert_eq!(counter.peek_face_name(), "Face002");
        assert_eq!(counter.faces_issued(), 2);
        assert_eq!(counter.edges_issued(), 2);
    }

    #[test]
    fn names_widen_past_three_digits() {
        let mut counter = NameCounter::new();
        let last = (0..=1000).map(|_| counter.next_edge_name()).last();
        assert_eq!(last, Some(EdgeName::new("Edge1000")));
    }

    #[test]
    fn zero_padding() {
        let mut counter = NameCounter::new();
        for _ in 0..14 {
            counter.next_edge_name();
        }
        assert_eq!(counter.next_edge_name().as_str(), "Edge014");
    }

    #[test]
    fn sub_name_sequence() {
        assert_eq!(sub_name("Face001"), "Face001a");
        assert_eq!(sub_name("Edge002bb"), "Edge002bc");
        assert_eq!(sub_name("Face001az"), "Face001aaa");
        assert_eq!(sub_name("Edge002z"), "Edge002aa");
        assert_eq!(sub_name("Edge002y"), "Edge002z");
    }

    #[test]
    fn sub_name_outside_grammar() {
        assert_eq!(sub_name(""), "a");
        assert_eq!(sub_name("Edge002Q"), "Edge002Qa");
    }

    #[test]
    fn typed_sub_names() {
        let edge = EdgeName::new("Edge007");
        let first = edge.sub_name();
        assert_eq!(first, "Edge007a");
        assert_eq!(first.sub_name(), "Edge007b");
        assert_eq!(FaceName::new("Face000").sub_name().to_string(), "Face000a");
    }

    #[test]
    fn sub_names_are_strictly_increasing_and_distinct() {
        let mut seen = std::collections::HashSet::new();
        let mut name = EdgeName::new("Edge000");
        for _ in 0..60 {
            name = name.sub_name();
            assert!(seen.insert(name.clone()), "repeated {name}");
        }
        assert!(seen.contains(&EdgeName::new("Edge000aa")));
    }
}
