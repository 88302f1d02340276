//! Stock interpretations for small arithmetic structures.

use super::structure::{Function, Relation};

/// The constant 0.
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl Function for Zero {
    fn arity(&self) -> usize {
        0
    }

    fn apply(&self, _args: &[u32]) -> u32 {
        0
    }
}

/// The constant 1.
#[derive(Debug, Clone, Copy, Default)]
pub struct One;

impl Function for One {
    fn arity(&self) -> usize {
        0
    }

    fn apply(&self, _args: &[u32]) -> u32 {
        1
    }
}

/// Addition modulo `modulus`.
#[derive(Debug, Clone, Copy)]
pub struct Plus {
    modulus: u32,
}

impl Plus {
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    pub fn modulo(modulus: u32) -> Self {
        assert!(modulus > 0, "plus needs a positive modulus");
        Plus { modulus }
    }
}

impl Function for Plus {
    fn arity(&self) -> usize {
        2
    }

    fn apply(&self, args: &[u32]) -> u32 {
        ((u64::from(args[0]) + u64::from(args[1])) % u64::from(self.modulus)) as u32
    }
}

/// Multiplication modulo `modulus`.
#[derive(Debug, Clone, Copy)]
pub struct Times {
    modulus: u32,
}

impl Times {
    /// # Panics
    ///
    /// Panics if `modulus` is zero.
    pub fn modulo(modulus: u32) -> Self {
        assert!(modulus > 0, "times needs a positive modulus");
        Times { modulus }
    }
}

impl Function for Times {
    fn arity(&self) -> usize {
        2
    }

    fn apply(&self, args: &[u32]) -> u32 {
        ((u64::from(args[0]) * u64::from(args[1])) % u64::from(self.modulus)) as u32
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Even;

impl Relation for Even {
    fn arity(&self) -> usize {
        1
    }

    fn holds(&self, args: &[u32]) -> bool {
        args[0] % 2 == 0
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Odd;

impl Relation for Odd {
    fn arity(&self) -> usize {
        1
    }

    fn holds(&self, args: &[u32]) -> bool {
        args[0] % 2 == 1
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Equal;

impl Relation for Equal {
    fn arity(&self) -> usize {
        2
    }

    fn holds(&self, args: &[u32]) -> bool {
        args[0] == args[1]
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LowerOrEqual;

impl Relation for LowerOrEqual {
    fn arity(&self) -> usize {
        2
    }

    fn holds(&self, args: &[u32]) -> bool {
        args[0] <= args[1]
    }
}
