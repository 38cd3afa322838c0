use std::fmt;

/// The accepted version bump shapes under the sequential-bump policy.
///
/// Exactly one component may advance per pull request, with all
/// lower-significance components reset to zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BumpKind {
    Major,
    Minor,
    Patch,
}

impl fmt::Display for BumpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BumpKind::Major => write!(f, "major"),
            BumpKind::Minor => write!(f, "minor"),
            BumpKind::Patch => write!(f, "patch"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bump_kind_display() {
        assert_eq!(BumpKind::Major.to_string(), "major");
        assert_eq!(BumpKind::Minor.to_string(), "minor");
        assert_eq!(BumpKind::Patch.to_string(), "patch");
    }
}
