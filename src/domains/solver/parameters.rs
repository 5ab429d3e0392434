//! Static parameter catalog for the solver application.
//!
//! The catalog is a process-wide, read-only table describing every query
//! parameter the solver page understands. Each entry carries a
//! [`ParameterKind`] so that bounds only exist where they make sense:
//! integers have a range, strings have a maximum length.

use serde::Serialize;
use std::fmt;

// ============================================================================
// Types
// ============================================================================

/// Semantic type tag of a parameter value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueType {
    Integer,
    String,
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer => f.write_str("integer"),
            Self::String => f.write_str("string"),
        }
    }
}

/// Shape and bounds of a parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ParameterKind {
    /// Integer with an inclusive range. `default: None` means the key is
    /// omitted from generated URLs.
    BoundedInt {
        min: i64,
        max: i64,
        default: Option<i64>,
    },

    /// String with an inclusive maximum length, counted in characters.
    BoundedString {
        max_length: usize,
        default: &'static str,
    },
}

/// Descriptor of a single solver parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ParameterSpec {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(flatten)]
    pub kind: ParameterKind,
}

impl ParameterSpec {
    /// The declared value type.
    pub fn value_type(&self) -> ValueType {
        match self.kind {
            ParameterKind::BoundedInt { .. } => ValueType::Integer,
            ParameterKind::BoundedString { .. } => ValueType::String,
        }
    }

    /// Inclusive range for integer parameters.
    pub fn range(&self) -> Option<(i64, i64)> {
        match self.kind {
            ParameterKind::BoundedInt { min, max, .. } => Some((min, max)),
            ParameterKind::BoundedString { .. } => None,
        }
    }

    /// Maximum length for string parameters.
    pub fn max_length(&self) -> Option<usize> {
        match self.kind {
            ParameterKind::BoundedInt { .. } => None,
            ParameterKind::BoundedString { max_length, .. } => Some(max_length),
        }
    }

    /// Whether an integer lies inside this parameter's range.
    ///
    /// String parameters never accept integers.
    pub fn accepts_int(&self, value: i64) -> bool {
        self.range()
            .is_some_and(|(min, max)| (min..=max).contains(&value))
    }

    /// Whether a string fits this parameter's length bound.
    ///
    /// Integer parameters never accept strings.
    pub fn accepts_str(&self, value: &str) -> bool {
        self.max_length()
            .is_some_and(|max| value.chars().count() <= max)
    }

    /// Human-readable default value.
    pub fn default_display(&self) -> String {
        match self.kind {
            ParameterKind::BoundedInt { default: Some(v), .. } => v.to_string(),
            ParameterKind::BoundedInt { default: None, .. } => "none (omitted from URL)".to_string(),
            ParameterKind::BoundedString { default, .. } if default.is_empty() => {
                "\"\" (empty)".to_string()
            }
            ParameterKind::BoundedString { default, .. } => format!("\"{}\"", default),
        }
    }
}

// ============================================================================
// Catalog
// ============================================================================

/// Animation speed factor.
pub const SPEED: ParameterSpec = ParameterSpec {
    name: "speed",
    description: "Animation speed factor. Controls how fast the cube animation runs. \
                  1 is slow, 2 is moderate, 3 is fast, 4 is very fast and 5 turns off the animation",
    kind: ParameterKind::BoundedInt {
        min: 1,
        max: 5,
        default: None,
    },
};

/// Initial move sequence applied before the page hands control to the user.
pub const MOVES: ParameterSpec = ParameterSpec {
    name: "moves",
    description: "A list of initial moves to be applied to the cube, mainly for scrambling it \
                  with a predefined sequence. The standard notation accepts cube sides: \
                  F(ront), B(ack), R(ight), L(eft), U(p), D(own). The default is a clockwise \
                  turn, an apostrophe makes it counterclockwise and a 2 doubles the move. \
                  Example sequence: D F R' 2U. The special code S is a random move, \
                  so S S S S means 4 random moves.",
    kind: ParameterKind::BoundedString {
        max_length: 200,
        default: "",
    },
};

/// Auto-solve flag.
pub const SOLVE: ParameterSpec = ParameterSpec {
    name: "solve",
    description: "Tells the application if solving should start automatically",
    kind: ParameterKind::BoundedInt {
        min: 0,
        max: 1,
        default: None,
    },
};

/// All parameters in declaration order.
pub static PARAMETERS: [ParameterSpec; 3] = [SPEED, MOVES, SOLVE];

/// Look up a parameter by name.
pub fn find(name: &str) -> Option<&'static ParameterSpec> {
    PARAMETERS.iter().find(|p| p.name == name)
}

/// Names of all parameters in declaration order.
pub fn names() -> Vec<&'static str> {
    PARAMETERS.iter().map(|p| p.name).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_order() {
        assert_eq!(names(), vec!["speed", "moves", "solve"]);
    }

    #[test]
    fn test_kinds_match_types() {
        assert_eq!(SPEED.value_type(), ValueType::Integer);
        assert_eq!(MOVES.value_type(), ValueType::String);
        assert_eq!(SOLVE.value_type(), ValueType::Integer);

        assert_eq!(SPEED.range(), Some((1, 5)));
        assert_eq!(SOLVE.range(), Some((0, 1)));
        assert_eq!(MOVES.range(), None);
        assert_eq!(MOVES.max_length(), Some(200));
        assert_eq!(SPEED.max_length(), None);
    }

    #[test]
    fn test_accepts_int() {
        assert!(SPEED.accepts_int(1));
        assert!(SPEED.accepts_int(5));
        assert!(!SPEED.accepts_int(0));
        assert!(!SPEED.accepts_int(6));
        assert!(SOLVE.accepts_int(0));
        assert!(!SOLVE.accepts_int(2));
        assert!(!MOVES.accepts_int(1));
    }

    #[test]
    fn test_accepts_str_counts_chars() {
        assert!(MOVES.accepts_str(""));
        assert!(MOVES.accepts_str(&"R".repeat(200)));
        assert!(!MOVES.accepts_str(&"R".repeat(201)));
        // multi-byte characters count once each
        assert!(MOVES.accepts_str(&"é".repeat(200)));
        assert!(!SPEED.accepts_str("3"));
    }

    #[test]
    fn test_find() {
        assert_eq!(find("moves"), Some(&MOVES));
        assert!(find("zoom").is_none());
    }

    #[test]
    fn test_serialize_flattens_kind() {
        let json = serde_json::to_value(SPEED).unwrap();
        assert_eq!(json["name"], "speed");
        assert_eq!(json["kind"], "bounded_int");
        assert_eq!(json["min"], 1);
        assert_eq!(json["max"], 5);
        assert!(json["default"].is_null());
    }
}
