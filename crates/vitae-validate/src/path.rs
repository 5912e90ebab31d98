//! Field paths
//!
//! A path is rendered with `.` between object keys and `[i]` for sequence
//! indices: `projects[0].technologies[1]`.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Key(String),
    Index(usize),
}

/// Location of a value inside the resume document
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldPath {
    segments: Vec<Segment>,
}

impl FieldPath {
    /// The document root
    pub fn root() -> Self {
        Self::default()
    }

    /// Path to an object member below this one
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Key(key.to_string()));
        Self { segments }
    }

    /// Path to a sequence element below this one
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.segments.clone();
        segments.push(Segment::Index(index));
        Self { segments }
    }

    /// Check if this is the document root
    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            return f.write_str("(root)");
        }

        for (i, segment) in self.segments.iter().enumerate() {
            match segment {
                Segment::Key(key) if i == 0 => f.write_str(key)?,
                Segment::Key(key) => write!(f, ".{}", key)?,
                Segment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root() {
        assert_eq!(FieldPath::root().to_string(), "(root)");
    }

    #[test]
    fn test_nested_keys() {
        let path = FieldPath::root().key("contact").key("github");
        assert_eq!(path.to_string(), "contact.github");
    }

    #[test]
    fn test_indices() {
        let path = FieldPath::root()
            .key("projects")
            .index(0)
            .key("technologies")
            .index(1);
        assert_eq!(path.to_string(), "projects[0].technologies[1]");
    }

    #[test]
    fn test_child_does_not_mutate_parent() {
        let parent = FieldPath::root().key("experience");
        let _child = parent.index(3);
        assert_eq!(parent.to_string(), "experience");
    }
}
