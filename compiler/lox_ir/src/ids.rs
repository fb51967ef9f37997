//! Arena indices and list ranges for the flat AST.

use std::fmt;

/// Index of an expression in an `ExprArena`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct ExprId(u32);

impl ExprId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        ExprId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for ExprId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ExprId({})", self.0)
    }
}

/// Index of a statement in an `ExprArena`.
#[derive(Copy, Clone, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct StmtId(u32);

impl StmtId {
    #[inline]
    pub const fn new(index: u32) -> Self {
        StmtId(index)
    }

    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StmtId({})", self.0)
    }
}

macro_rules! list_range {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
        pub struct $name {
            pub start: u32,
            pub len: u32,
        }

        impl $name {
            pub const EMPTY: $name = $name { start: 0, len: 0 };

            #[inline]
            pub const fn new(start: u32, len: u32) -> Self {
                $name { start, len }
            }

            #[inline]
            pub const fn len(&self) -> usize {
                self.len as usize
            }

            #[inline]
            pub const fn is_empty(&self) -> bool {
                self.len == 0
            }

            #[inline]
            pub(crate) fn to_range(self) -> std::ops::Range<usize> {
                let start = self.start as usize;
                start..start + self.len as usize
            }
        }
    };
}

list_range!(
    /// Call arguments, as a slice of the arena's expression list table.
    ExprRange
);
list_range!(
    /// Block and function bodies, as a slice of the arena's statement list table.
    StmtRange
);
list_range!(
    /// Function parameters, as a slice of the arena's parameter table.
    ParamRange
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranges_report_length() {
        let range = StmtRange::new(3, 4);
        assert_eq!(range.len(), 4);
        assert_eq!(range.to_range(), 3..7);
        assert!(ExprRange::EMPTY.is_empty());
    }

    #[test]
    fn ids_expose_index() {
        assert_eq!(ExprId::new(9).index(), 9);
        assert_eq!(format!("{:?}", StmtId::new(2)), "StmtId(2)");
    }
}
