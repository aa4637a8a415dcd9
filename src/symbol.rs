use crate::Error;
use std::fmt;
use std::str::FromStr;

// ----- O P E R A T O R S -------------------------------------------------------------

/// The four arithmetic operators of the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Multiply,
    Divide,
    Add,
    Subtract,
}

impl Operator {
    /// Plain floating point application of the operator. No zero check.
    pub fn apply(self, left: f64, right: f64) -> f64 {
        match self {
            Operator::Multiply => left * right,
            Operator::Divide => left / right,
            Operator::Add => left + right,
            Operator::Subtract => left - right,
        }
    }

    pub fn glyph(self) -> char {
        match self {
            Operator::Multiply => 'x',
            Operator::Divide => '/',
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.glyph())
    }
}

// ----- S Y M B O L S -----------------------------------------------------------------

/// One key press, as delivered to the [`Calculator`](crate::Calculator)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// A decimal digit, 0..=9
    Digit(u8),
    Decimal,
    Operator(Operator),
    Equals,
    Clear,
}

/// The category of a symbol, as remembered by the engine between presses.
/// The decimal point counts as a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SymbolKind {
    Digit,
    Operator,
    Equals,
    Clear,
}

impl Symbol {
    /// The digit symbol for `d`, if `d` is a decimal digit
    pub fn digit(d: u8) -> Option<Symbol> {
        (d <= 9).then_some(Symbol::Digit(d))
    }

    pub fn kind(&self) -> SymbolKind {
        match self {
            Symbol::Digit(_) | Symbol::Decimal => SymbolKind::Digit,
            Symbol::Operator(_) => SymbolKind::Operator,
            Symbol::Equals => SymbolKind::Equals,
            Symbol::Clear => SymbolKind::Clear,
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Digit(d) => write!(f, "{d}"),
            Symbol::Decimal => write!(f, "."),
            Symbol::Operator(op) => write!(f, "{op}"),
            Symbol::Equals => write!(f, "="),
            Symbol::Clear => write!(f, "C"),
        }
    }
}

// ----- K E Y P A D   L A B E L S -----------------------------------------------------

use Operator::*;

// The word labels are the data actions of the original button grid
#[rustfmt::skip]
pub const KEYPAD: [(&str, Symbol); 31] = [
    ("0",         Symbol::Digit(0)),
    ("1",         Symbol::Digit(1)),
    ("2",         Symbol::Digit(2)),
    ("3",         Symbol::Digit(3)),
    ("4",         Symbol::Digit(4)),
    ("5",         Symbol::Digit(5)),
    ("6",         Symbol::Digit(6)),
    ("7",         Symbol::Digit(7)),
    ("8",         Symbol::Digit(8)),
    ("9",         Symbol::Digit(9)),
    (".",         Symbol::Decimal),
    (",",         Symbol::Decimal),
    ("x",         Symbol::Operator(Multiply)),
    ("*",         Symbol::Operator(Multiply)),
    ("×",         Symbol::Operator(Multiply)),
    ("/",         Symbol::Operator(Divide)),
    ("÷",         Symbol::Operator(Divide)),
    ("+",         Symbol::Operator(Add)),
    ("-",         Symbol::Operator(Subtract)),
    ("−",         Symbol::Operator(Subtract)),
    ("=",         Symbol::Equals),
    ("c",         Symbol::Clear),
    ("ac",        Symbol::Clear),

    ("multiply",  Symbol::Operator(Multiply)),
    ("divide",    Symbol::Operator(Divide)),
    ("add",       Symbol::Operator(Add)),
    ("subtract",  Symbol::Operator(Subtract)),
    ("calculate", Symbol::Equals),
    ("equals",    Symbol::Equals),
    ("decimal",   Symbol::Decimal),
    ("clear",     Symbol::Clear),
];

impl FromStr for Symbol {
    type Err = Error;

    /// Look up a single keypad label. Case insensitive.
    fn from_str(label: &str) -> Result<Symbol, Error> {
        let label = label.trim();
        KEYPAD
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(label))
            .map(|(_, symbol)| *symbol)
            .ok_or_else(|| Error::UnknownSymbol(label.to_string()))
    }
}

/// Read a key sequence like `"12.5 x 2 ="` (or `"12.5x2="`) as symbols.
/// Runs of letters are read as word labels ("clear", "AC", "x"), everything
/// else one character at a time. Whitespace separates, but is not needed.
pub fn tokenize(keys: &str) -> Result<Vec<Symbol>, Error> {
    let mut symbols = Vec::new();
    let mut chars = keys.char_indices().peekable();

    while let Some((start, c)) = chars.next() {
        if c.is_whitespace() {
            continue;
        }

        let mut end = start + c.len_utf8();
        if c.is_ascii_alphabetic() {
            while let Some(&(i, next)) = chars.peek() {
                if !next.is_ascii_alphabetic() {
                    break;
                }
                end = i + next.len_utf8();
                chars.next();
            }
        }

        symbols.push(keys[start..end].parse()?);
    }
    Ok(symbols)
}

// ----- T E S T S ---------------------------------------------------------------------
