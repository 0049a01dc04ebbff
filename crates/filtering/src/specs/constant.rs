//! Specifications with a fixed answer.

use crate::traits::Specification;

/// Matches every item.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysTrue;

/// Matches no item.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysFalse;

impl<T> Specification<T> for AlwaysTrue {
    fn name(&self) -> &str {
        "AlwaysTrue"
    }

    fn is_satisfied(&self, _item: &T) -> bool {
        true
    }
}

impl<T> Specification<T> for AlwaysFalse {
    fn name(&self) -> &str {
        "AlwaysFalse"
    }

    fn is_satisfied(&self, _item: &T) -> bool {
        false
    }
}
