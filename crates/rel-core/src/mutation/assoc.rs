use super::Mutation;

use std::fmt;

/// Changes of an association: one related record or an ordered collection.
#[derive(Debug, Clone, PartialEq)]
pub enum AssocMutation {
    One(Mutation),
    Many(Vec<Mutation>),
}

impl AssocMutation {
    pub fn as_one(&self) -> Option<&Mutation> {
        match self {
            Self::One(mutation) => Some(mutation),
            Self::Many(_) => None,
        }
    }

    pub fn as_many(&self) -> Option<&[Mutation]> {
        match self {
            Self::Many(mutations) => Some(mutations),
            Self::One(_) => None,
        }
    }

    /// The related mutations in order; a single one for `One`.
    pub fn mutations(&self) -> &[Mutation] {
        match self {
            Self::One(mutation) => std::slice::from_ref(mutation),
            Self::Many(mutations) => mutations,
        }
    }

    pub fn mutations_mut(&mut self) -> &mut [Mutation] {
        match self {
            Self::One(mutation) => std::slice::from_mut(mutation),
            Self::Many(mutations) => mutations,
        }
    }
}

impl From<Mutation> for AssocMutation {
    fn from(value: Mutation) -> Self {
        Self::One(value)
    }
}

impl From<Vec<Mutation>> for AssocMutation {
    fn from(value: Vec<Mutation>) -> Self {
        Self::Many(value)
    }
}

impl fmt::Display for AssocMutation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One(mutation) => fmt::Display::fmt(mutation, f),
            Self::Many(mutations) => {
                f.write_str("[")?;
                for (i, mutation) in mutations.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(mutation, f)?;
                }
                f.write_str("]")
            }
        }
    }
}
