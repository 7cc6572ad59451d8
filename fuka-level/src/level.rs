//! In-memory representation of a level file

use std::collections::HashMap;

use crate::error::{Error, Result};

/// One named array stored in a level file.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Variable {
    /// Variable name, unique within its level file.
    pub name: String,
    /// Array contents, in stored order.
    pub values: Vec<f64>,
}

/// An ordered collection of named f64 arrays.
///
/// Variables keep their insertion order for writing, while name lookup
/// goes through a separate index and stays O(1). Both views are fed by
/// [`LevelFile::insert`], so they cannot diverge; inserting a name twice
/// is rejected.
///
/// # Examples
///
/// ```
/// use fuka_level::LevelFile;
///
/// let mut level = LevelFile::new();
/// level.insert("alpha", vec![1.0, 2.5])?;
/// level.insert("beta", vec![])?;
///
/// assert_eq!(level.len(), 2);
/// assert_eq!(level.get("alpha"), Some(&[1.0, 2.5][..]));
/// assert_eq!(level.names(), vec!["alpha", "beta"]);
/// # Ok::<(), fuka_level::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "Vec<Variable>", into = "Vec<Variable>")
)]
pub struct LevelFile {
    /// All variables in insertion order
    variables: Vec<Variable>,
    /// Map from variable name to position for fast lookup
    index: HashMap<String, usize>,
}

impl LevelFile {
    /// Create an empty level file.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a variable.
    ///
    /// Returns [`Error::DuplicateVariable`] if a variable with the same
    /// name is already present.
    pub fn insert(&mut self, name: impl Into<String>, values: Vec<f64>) -> Result<()> {
        let name = name.into();
        if self.index.contains_key(&name) {
            return Err(Error::DuplicateVariable { name });
        }

        self.index.insert(name.clone(), self.variables.len());
        self.variables.push(Variable { name, values });

        Ok(())
    }

    /// Look up a variable's values by name.
    pub fn get(&self, name: &str) -> Option<&[f64]> {
        self.index
            .get(name)
            .map(|&pos| self.variables[pos].values.as_slice())
    }

    /// Check whether a variable exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// All variables in insertion order.
    pub fn variables(&self) -> &[Variable] {
        &self.variables
    }

    /// Variable names in insertion order.
    pub fn names(&self) -> Vec<&str> {
        self.variables.iter().map(|v| v.name.as_str()).collect()
    }

    /// Number of variables.
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Check whether the level file holds no variables.
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Iterate over variables in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Variable> {
        self.variables.iter()
    }
}

impl PartialEq for LevelFile {
    fn eq(&self, other: &Self) -> bool {
        // The index is derived from the variable list
        self.variables == other.variables
    }
}

impl TryFrom<Vec<Variable>> for LevelFile {
    type Error = Error;

    fn try_from(variables: Vec<Variable>) -> Result<Self> {
        let mut level = Self::new();
        for variable in variables {
            level.insert(variable.name, variable.values)?;
        }
        Ok(level)
    }
}

impl From<LevelFile> for Vec<Variable> {
    fn from(level: LevelFile) -> Self {
        level.variables
    }
}

impl<'a> IntoIterator for &'a LevelFile {
    type Item = &'a Variable;
    type IntoIter = std::slice::Iter<'a, Variable>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
