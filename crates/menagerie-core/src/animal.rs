//! The record sum type and its variant tag.
//!
//! Every per-variant table (wire tag, sound, constructor) is a `match` over
//! [`AnimalKind`], so a new variant does not compile until each one is filled in.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::CoreError;

/// A record held in the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Animal {
    Dog { name: String },
    Cat { name: String },
}

/// Field-less tag naming which [`Animal`] variant a record is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnimalKind {
    Dog,
    Cat,
}

impl Animal {
    pub fn dog(name: impl Into<String>) -> Self {
        Animal::Dog { name: name.into() }
    }

    pub fn cat(name: impl Into<String>) -> Self {
        Animal::Cat { name: name.into() }
    }

    pub fn name(&self) -> &str {
        match self {
            Animal::Dog { name } | Animal::Cat { name } => name,
        }
    }

    pub fn kind(&self) -> AnimalKind {
        match self {
            Animal::Dog { .. } => AnimalKind::Dog,
            Animal::Cat { .. } => AnimalKind::Cat,
        }
    }

    /// Returns `"{name}: {sound}"`, e.g. `"Rey: woof"`.
    pub fn speak(&self) -> String {
        format!("{}: {}", self.name(), self.kind().sound())
    }
}

impl AnimalKind {
    /// The lowercase tag used on the wire.
    pub fn as_str(self) -> &'static str {
        match self {
            AnimalKind::Dog => "dog",
            AnimalKind::Cat => "cat",
        }
    }

    pub fn sound(self) -> &'static str {
        match self {
            AnimalKind::Dog => "woof",
            AnimalKind::Cat => "meow",
        }
    }

    /// Builds the variant this tag names.
    pub fn with_name(self, name: impl Into<String>) -> Animal {
        match self {
            AnimalKind::Dog => Animal::dog(name),
            AnimalKind::Cat => Animal::cat(name),
        }
    }
}

impl fmt::Display for AnimalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Case-sensitive: "Dog" and "DOG" are rejected.
impl FromStr for AnimalKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dog" => Ok(AnimalKind::Dog),
            "cat" => Ok(AnimalKind::Cat),
            other => Err(CoreError::UnknownKind {
                kind: other.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn speak_uses_variant_sound() {
        assert_eq!(Animal::dog("Rey").speak(), "Rey: woof");
        assert_eq!(Animal::cat("Mitzi").speak(), "Mitzi: meow");
    }

    #[test]
    fn speak_with_empty_name() {
        assert_eq!(Animal::dog("").speak(), ": woof");
    }

    #[test]
    fn parse_known_kinds() {
        assert_eq!("dog".parse::<AnimalKind>(), Ok(AnimalKind::Dog));
        assert_eq!("cat".parse::<AnimalKind>(), Ok(AnimalKind::Cat));
    }

    #[test]
    fn parse_is_case_sensitive() {
        for input in ["Dog", "CAT", " dog", "fish", ""] {
            let err = input.parse::<AnimalKind>().unwrap_err();
            assert_eq!(
                err,
                CoreError::UnknownKind {
                    kind: input.to_string()
                }
            );
        }
    }

    #[test]
    fn with_name_builds_matching_variant() {
        let cat = AnimalKind::Cat.with_name("Mutzi");
        assert_eq!(cat, Animal::cat("Mutzi"));
        assert_eq!(cat.kind(), AnimalKind::Cat);
        assert_eq!(cat.name(), "Mutzi");
    }

    #[test]
    fn kind_serializes_as_wire_tag() {
        assert_eq!(serde_json::to_string(&AnimalKind::Dog).unwrap(), "\"dog\"");
        assert_eq!(serde_json::to_string(&AnimalKind::Cat).unwrap(), "\"cat\"");
        assert_eq!(AnimalKind::Cat.to_string(), "cat");
    }

    proptest! {
        #[test]
        fn dog_speak_is_name_then_woof(name in ".*") {
            prop_assert_eq!(Animal::dog(name.clone()).speak(), format!("{name}: woof"));
        }

        #[test]
        fn cat_speak_is_name_then_meow(name in ".*") {
            prop_assert_eq!(Animal::cat(name.clone()).speak(), format!("{name}: meow"));
        }

        #[test]
        fn tag_round_trips_through_parse(is_dog in any::<bool>()) {
            let kind = if is_dog { AnimalKind::Dog } else { AnimalKind::Cat };
            prop_assert_eq!(kind.as_str().parse::<AnimalKind>(), Ok(kind));
        }
    }
}
