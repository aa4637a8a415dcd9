use crate::internal::*;

// ----- T H E   S C R E E N   T R A I T -----------------------------------------------

/// The `Screen` trait is the outbound half of the boundary between the
/// [`Calculator`] and its user interface: whatever renders the display text.
/// `show` is called once for every delivered symbol that changes the text.
pub trait Screen {
    fn show(&mut self, text: &str);
}

/// Any `FnMut(&str)` closure is a screen
impl<F: FnMut(&str)> Screen for F {
    fn show(&mut self, text: &str) {
        self(text)
    }
}

/// A screen recording everything it was asked to show, like the paper tape
/// of a printing calculator
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Tape {
    pub lines: Vec<String>,
}

impl Tape {
    pub fn new() -> Tape {
        Tape::default()
    }

    /// The most recently shown text
    pub fn last(&self) -> Option<&str> {
        self.lines.last().map(String::as_str)
    }
}

impl Screen for Tape {
    fn show(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }
}

// ----- S E S S I O N S ---------------------------------------------------------------

/// A calculator wired to a screen: the whole I/O adapter, minus the buttons
pub struct Session<S: Screen, B: Buffer<Operand> = Queue<Operand>> {
    pub calculator: Calculator<B>,
    pub screen: S,
}

impl<S: Screen> Session<S> {
    pub fn new(screen: S) -> Self {
        Session {
            calculator: Calculator::new(),
            screen,
        }
    }
}

impl<S: Screen, B: Buffer<Operand>> Session<S, B> {
    pub fn with_calculator(calculator: Calculator<B>, screen: S) -> Self {
        Session { calculator, screen }
    }

    /// Deliver one symbol, and show the display if it changed
    pub fn press(&mut self, symbol: Symbol) {
        if let Some(text) = self.calculator.deliver(symbol) {
            self.screen.show(text);
        }
    }

    /// Deliver a whole key sequence, e.g. `"2 + 3 ="`. Nothing is delivered
    /// if any of the keys is unknown
    pub fn press_keys(&mut self, keys: &str) -> Result<(), Error> {
        for symbol in tokenize(keys)? {
            self.press(symbol);
        }
        Ok(())
    }

    pub fn display(&self) -> &str {
        self.calculator.display()
    }
}

// ----- T E S T S ---------------------------------------------------------------------
