//! Context directions.
//!
//! A direction orders the three context groups a trigger scans. Directions are
//! plain data: any triple can be built, and triggers reject the ones that are
//! not among the six permutations.

use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ds::error::Error;
use crate::ds::object::ObjectRef;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContextGroup {
    /// Caller-supplied contexts, in the order supplied.
    Inner,
    /// The closure's defining scope.
    Outer,
    /// The kernel fallback.
    Kernel,
}
impl ContextGroup {
    pub fn letter(self) -> char {
        match self {
            ContextGroup::Inner => 'I',
            ContextGroup::Outer => 'O',
            ContextGroup::Kernel => 'K',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'I' => Some(ContextGroup::Inner),
            'O' => Some(ContextGroup::Outer),
            'K' => Some(ContextGroup::Kernel),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Direction([ContextGroup; 3]);

impl Direction {
    /// inner => outer => kernel
    pub const IOK: Direction = Direction([
        ContextGroup::Inner,
        ContextGroup::Outer,
        ContextGroup::Kernel,
    ]);
    /// outer => inner => kernel
    pub const OIK: Direction = Direction([
        ContextGroup::Outer,
        ContextGroup::Inner,
        ContextGroup::Kernel,
    ]);
    /// outer => kernel => inner
    pub const OKI: Direction = Direction([
        ContextGroup::Outer,
        ContextGroup::Kernel,
        ContextGroup::Inner,
    ]);
    /// inner => kernel => outer
    pub const IKO: Direction = Direction([
        ContextGroup::Inner,
        ContextGroup::Kernel,
        ContextGroup::Outer,
    ]);
    /// kernel => outer => inner
    pub const KOI: Direction = Direction([
        ContextGroup::Kernel,
        ContextGroup::Outer,
        ContextGroup::Inner,
    ]);
    /// kernel => inner => outer
    pub const KIO: Direction = Direction([
        ContextGroup::Kernel,
        ContextGroup::Inner,
        ContextGroup::Outer,
    ]);

    pub const ALL: [Direction; 6] = [
        Direction::IOK,
        Direction::OIK,
        Direction::OKI,
        Direction::IKO,
        Direction::KOI,
        Direction::KIO,
    ];

    pub const fn new(groups: [ContextGroup; 3]) -> Self {
        Direction(groups)
    }

    pub fn groups(&self) -> [ContextGroup; 3] {
        self.0
    }

    /// Is this one of the six permutations of inner, outer and kernel?
    pub fn is_valid(&self) -> bool {
        Direction::ALL.contains(self)
    }

    /// Concatenate the context groups in direction order. Inner contexts keep
    /// their supplied order; outer and kernel contribute one entry each.
    pub fn flatten(
        &self,
        inner: &[ObjectRef],
        outer: &ObjectRef,
        kernel: &ObjectRef,
    ) -> Vec<ObjectRef> {
        let mut contexts = Vec::with_capacity(inner.len() + 2);
        for group in self.0.iter() {
            match group {
                ContextGroup::Inner => contexts.extend(inner.iter().cloned()),
                ContextGroup::Outer => contexts.push(outer.clone()),
                ContextGroup::Kernel => contexts.push(kernel.clone()),
            }
        }
        contexts
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::IOK
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for group in self.0.iter() {
            write!(f, "{}", group.letter())?;
        }
        Ok(())
    }
}

/// Parses the three-letter notation. Only the letters and the length are
/// checked here; `"IIO"` parses and is rejected later by the trigger.
impl FromStr for Direction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let groups: Option<Vec<ContextGroup>> =
            s.trim().chars().map(ContextGroup::from_letter).collect();
        match groups {
            Some(groups) if groups.len() == 3 => Ok(Direction([groups[0], groups[1], groups[2]])),
            _ => Err(Error::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Direction> for String {
    fn from(direction: Direction) -> Self {
        direction.to_string()
    }
}
