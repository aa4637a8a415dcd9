//! *A keypad driven calculator engine, evaluating strictly left to right*.
//!
//! Symbols (digits, the decimal point, operators, equals and clear) are
//! delivered one at a time to a [`Calculator`], which buffers operands and
//! the pending operator, reduces partial expressions to running results,
//! and reports every change of its display text.
//!
//! ```
//! use keycalc::prelude::*;
//!
//! let mut calc = Calculator::new();
//! for symbol in tokenize("2 + 3 + 4 =")? {
//!     calc.deliver(symbol);
//! }
//! assert_eq!(calc.display(), "9");
//! # Ok::<(), keycalc::Error>(())
//! ```
//!
//! The engine never talks to a user interface directly: anything able to
//! render a string is a [`Screen`], and a [`Session`] glues the two together.

mod buffer;
mod engine;
mod operand;
mod reduction;
mod screen;
mod settings;
mod symbol;

#[cfg(target_arch = "wasm32")]
mod web;

pub use buffer::Buffer;
pub use buffer::Queue;
pub use buffer::Stack;
pub use engine::Calculator;
pub use operand::format_value;
pub use operand::Fixed;
pub use operand::Operand;
pub use reduction::reduce;
pub use screen::Screen;
pub use screen::Session;
pub use screen::Tape;
pub use settings::RepeatEquals;
pub use settings::Settings;
pub use symbol::tokenize;
pub use symbol::Operator;
pub use symbol::Symbol;
pub use symbol::SymbolKind;
pub use symbol::KEYPAD;

#[cfg(target_arch = "wasm32")]
pub use web::Keypad;

/// The bread-and-butter, shrink-wrapped and ready to use
pub mod prelude {
    pub use crate::tokenize;
    pub use crate::Calculator;
    pub use crate::Error;
    pub use crate::Operator;
    pub use crate::Screen;
    pub use crate::Session;
    pub use crate::Settings;
    pub use crate::Symbol;
    pub use crate::Tape;
}

/// Preamble for user provided buffers and screens
pub mod authoring {
    pub use crate::prelude::*;

    pub use crate::format_value;
    pub use crate::reduce;
    pub use crate::Buffer;
    pub use crate::Fixed;
    pub use crate::Operand;
    pub use crate::Queue;
    pub use crate::RepeatEquals;
    pub use crate::Stack;
    pub use crate::SymbolKind;
}

/// Preamble for crate-internal modules
pub(crate) mod internal {
    pub use log::debug;
    pub use log::trace;
    pub use log::warn;

    pub use crate::authoring::*;
}

use thiserror::Error;

/// The single error type of the crate. Running out of elements in a
/// [`Queue`] or [`Stack`] is not an error: it is signalled by `None`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("division by zero")]
    DivisionByZero,

    #[error("malformed display value: {0:?}")]
    MalformedDisplay(String),

    #[error("no numeric result under {0}")]
    Undefined(Operator),

    #[error("reduction needs at least two operands, found {0}")]
    Underflow(usize),

    #[error("unknown symbol: {0:?}")]
    UnknownSymbol(String),

    #[error("malformed value for parameter {0}: {1}")]
    BadParam(String, String),
}
