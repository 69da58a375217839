use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Value {
    #[default]
    Unbound,
    True,
    False,
}

impl Value {
    pub fn from_bool(b: bool) -> Self {
        if b { Value::True } else { Value::False }
    }

    pub fn as_bool(self) -> Option<bool> {
        match self {
            Value::Unbound => None,
            Value::True => Some(true),
            Value::False => Some(false),
        }
    }
}

/// A total assignment over the atoms of a solved formula, in ascending name
/// order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
    atoms: Vec<String>,
    values: Vec<bool>,
}

impl Assignment {
    pub(crate) fn new(atoms: Vec<String>, values: Vec<bool>) -> Self {
        debug_assert_eq!(atoms.len(), values.len(), "one value per atom");
        Self { atoms, values }
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn get(&self, atom: &str) -> Option<bool> {
        self.atoms
            .binary_search_by(|a| a.as_str().cmp(atom))
            .ok()
            .map(|idx| self.values[idx])
    }

    /// Values indexed by interned var.
    pub fn model(&self) -> &[bool] {
        &self.values
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, bool)> {
        self.atoms
            .iter()
            .map(String::as_str)
            .zip(self.values.iter().copied())
    }
}

impl fmt::Display for Assignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (atom, value) in self.iter() {
            writeln!(f, "{atom}={value}")?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SatResult {
    Sat(Assignment),
    Unsat,
}

pub const UNSAT_TEXT: &str = "NO VALID ASSIGNMENT";

impl SatResult {
    pub fn is_sat(&self) -> bool {
        matches!(self, SatResult::Sat(_))
    }

    pub fn assignment(&self) -> Option<&Assignment> {
        match self {
            SatResult::Sat(a) => Some(a),
            SatResult::Unsat => None,
        }
    }
}

impl fmt::Display for SatResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SatResult::Sat(a) => write!(f, "{a}"),
            SatResult::Unsat => writeln!(f, "{UNSAT_TEXT}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Assignment, SatResult, Value};

    #[test]
    fn renders_one_line_per_atom() {
        let a = Assignment::new(vec!["P".into(), "Q".into()], vec![false, true]);
        assert_eq!(a.to_string(), "P=false\nQ=true\n");
        assert_eq!(a.get("Q"), Some(true));
        assert_eq!(a.get("R"), None);
        assert_eq!(SatResult::Unsat.to_string(), "NO VALID ASSIGNMENT\n");
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "one value per atom")]
    fn mismatched_lengths_caught_in_debug_builds() {
        let _ = Assignment::new(vec!["P".into()], vec![false, true]);
    }

    #[test]
    fn value_conversions() {
        assert_eq!(Value::default(), Value::Unbound);
        assert_eq!(Value::from_bool(true).as_bool(), Some(true));
        assert_eq!(Value::Unbound.as_bool(), None);
    }
}
