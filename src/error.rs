//! Error types shared by every stage of the pipeline.

use std::fmt;

use thiserror::Error;

use crate::syntax::Var;

/// Result type for logic operations.
pub type LogicResult<T> = Result<T, LogicError>;

/// Which symbol table a symbol lives in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    Function,
    Predicate,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Function => write!(f, "function"),
            SymbolKind::Predicate => write!(f, "predicate"),
        }
    }
}

/// Fatal errors. An exhausted Gilmore search is not one of these; it is
/// reported as [`crate::gilmore::ProofOutcome::NotFound`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LogicError {
    /// A symbol was applied to the wrong number of operands.
    #[error("arity mismatch for `{symbol}`: expected {expected}, found {found}")]
    ArityMismatch {
        symbol: String,
        expected: usize,
        found: usize,
    },

    /// A symbol is not registered in the signature or structure.
    #[error("unknown {kind} symbol `{symbol}`")]
    UnknownSymbol { symbol: String, kind: SymbolKind },

    /// A valuation was asked for a variable it never assigned.
    #[error("unbound variable `{var}`")]
    UnboundVariable { var: Var },

    /// A valuation was given a value outside its domain.
    #[error("value {value} assigned to `{var}` is not in the domain")]
    ValueOutOfDomain { var: Var, value: u32 },

    /// A pipeline stage was called on input violating its precondition.
    #[error("{stage}: unexpected {found}")]
    StageMisuse { stage: &'static str, found: String },

    /// Every pre-generated unique constant has been handed out.
    #[error("unique constant pool exhausted after {capacity} constants")]
    ConstantPoolExhausted { capacity: usize },
}

impl LogicError {
    pub fn arity(symbol: impl Into<String>, expected: usize, found: usize) -> Self {
        LogicError::ArityMismatch {
            symbol: symbol.into(),
            expected,
            found,
        }
    }

    pub fn unknown_function(symbol: impl Into<String>) -> Self {
        LogicError::UnknownSymbol {
            symbol: symbol.into(),
            kind: SymbolKind::Function,
        }
    }

    pub fn unknown_predicate(symbol: impl Into<String>) -> Self {
        LogicError::UnknownSymbol {
            symbol: symbol.into(),
            kind: SymbolKind::Predicate,
        }
    }

    pub fn misuse(stage: &'static str, found: impl Into<String>) -> Self {
        LogicError::StageMisuse {
            stage,
            found: found.into(),
        }
    }

    /// True for contract violations of the normalization stages.
    pub fn is_stage_misuse(&self) -> bool {
        matches!(self, LogicError::StageMisuse { .. })
    }
}
