//! One or two distinct types on a creature

use crate::types::PokemonType;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A type list that is not one or two types long
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypingError {
    #[error("a typing needs at least one type")]
    Empty,

    #[error("a typing holds at most two types, got {0}")]
    TooMany(usize),
}

/// A creature's typing: a primary type and an optional distinct secondary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<PokemonType>", into = "Vec<PokemonType>")]
pub struct Typing {
    types: [PokemonType; 2],
    len: usize,
}

impl Typing {
    pub fn single(primary: PokemonType) -> Self {
        Typing {
            types: [primary, primary],
            len: 1,
        }
    }

    /// Two types. A repeated type collapses to a single typing.
    pub fn dual(primary: PokemonType, secondary: PokemonType) -> Self {
        if primary == secondary {
            Typing::single(primary)
        } else {
            Typing {
                types: [primary, secondary],
                len: 2,
            }
        }
    }

    /// Build from a primary and an optional secondary
    pub fn new(primary: PokemonType, secondary: Option<PokemonType>) -> Self {
        match secondary {
            Some(secondary) => Typing::dual(primary, secondary),
            None => Typing::single(primary),
        }
    }

    pub fn primary(&self) -> PokemonType {
        self.types[0]
    }

    pub fn secondary(&self) -> Option<PokemonType> {
        (self.len == 2).then_some(self.types[1])
    }

    pub fn types(&self) -> &[PokemonType] {
        &self.types[..self.len]
    }

    pub fn contains(&self, t: PokemonType) -> bool {
        self.types().contains(&t)
    }
}

impl TryFrom<Vec<PokemonType>> for Typing {
    type Error = TypingError;

    fn try_from(types: Vec<PokemonType>) -> Result<Self, Self::Error> {
        match types.as_slice() {
            [] => Err(TypingError::Empty),
            [primary] => Ok(Typing::single(*primary)),
            [primary, secondary] => Ok(Typing::dual(*primary, *secondary)),
            more => Err(TypingError::TooMany(more.len())),
        }
    }
}

impl From<Typing> for Vec<PokemonType> {
    fn from(typing: Typing) -> Self {
        typing.types().to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use PokemonType::*;

    #[test]
    fn test_single() {
        let t = Typing::single(Fire);
        assert_eq!(t.types(), &[Fire]);
        assert_eq!(t.secondary(), None);
        assert!(t.contains(Fire));
        assert!(!t.contains(Water));
    }

    #[test]
    fn test_dual() {
        let t = Typing::dual(Ground, Fire);
        assert_eq!(t.types(), &[Ground, Fire]);
        assert_eq!(t.primary(), Ground);
        assert_eq!(t.secondary(), Some(Fire));
    }

    #[test]
    fn test_duplicate_collapses() {
        assert_eq!(Typing::dual(Water, Water), Typing::single(Water));
        assert_eq!(Typing::new(Bug, Some(Bug)).types().len(), 1);
    }

    #[test]
    fn test_serializes_as_list() {
        let json = serde_json::to_string(&Typing::dual(Water, Ground)).unwrap();
        assert_eq!(json, "[\"water\",\"ground\"]");
        let back: Typing = serde_json::from_str("[\"ice\"]").unwrap();
        assert_eq!(back, Typing::single(Ice));
        let repeated: Typing = serde_json::from_str("[\"fire\",\"fire\"]").unwrap();
        assert_eq!(repeated, Typing::single(Fire));
    }

    #[test]
    fn test_rejects_empty_list() {
        assert_eq!(Typing::try_from(Vec::<PokemonType>::new()), Err(TypingError::Empty));
        let err = serde_json::from_str::<Typing>("[]").unwrap_err();
        assert!(err.to_string().contains("at least one type"));
    }

    #[test]
    fn test_rejects_three_types() {
        assert_eq!(
            Typing::try_from(vec![Fire, Water, Ice]),
            Err(TypingError::TooMany(3))
        );
        let err = serde_json::from_str::<Typing>("[\"fire\",\"water\",\"ice\"]").unwrap_err();
        assert!(err.to_string().contains("at most two types, got 3"));
    }
}
