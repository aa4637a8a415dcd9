use crate::internal::*;

// ----- T H E   C A L C U L A T O R ---------------------------------------------------

/// The evaluation engine. Symbols are delivered one at a time, each handled
/// to completion, and expressions are evaluated strictly left to right:
/// `2 + 3 x 4 =` is `(2 + 3) x 4 = 20`.
///
/// The operand buffer `B` is a [`Queue`] by default, but any [`Buffer`] will
/// do, e.g. a [`Stack`].
pub struct Calculator<B: Buffer<Operand> = Queue<Operand>> {
    settings: Settings,
    display: String,
    operands: B,
    /// The pending operator. Never more than one
    operators: Queue<Operator>,
    last: Option<SymbolKind>,
    /// The operand behind the display, when the display shows a result
    result: Option<Operand>,
    /// Operator and right hand operand of the latest equals, for repeat-equals
    repeat: Option<(Operator, Operand)>,
    error: bool,
}

impl Calculator {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self::with_buffer(Queue::new(), settings)
    }
}

impl Default for Calculator {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: Buffer<Operand>> Calculator<B> {
    /// A calculator using `operands` as its operand buffer. Any content
    /// already in the buffer is dropped
    pub fn with_buffer(mut operands: B, settings: Settings) -> Self {
        operands.clear();
        Calculator {
            settings,
            display: "0".to_string(),
            operands,
            operators: Queue::new(),
            last: None,
            result: None,
            repeat: None,
            error: false,
        }
    }

    /// Handle one symbol. Returns the display text if it changed
    pub fn deliver(&mut self, symbol: Symbol) -> Option<&str> {
        trace!("deliver: {symbol}");
        if self.error && matches!(symbol.kind(), SymbolKind::Operator | SymbolKind::Equals) {
            trace!("deliver: {symbol} ignored while showing the error");
            return None;
        }
        let before = self.display.clone();

        match symbol {
            Symbol::Digit(d) => self.on_digit(d),
            Symbol::Decimal => self.on_decimal(),
            Symbol::Operator(op) => self.on_operator(op),
            Symbol::Equals => self.on_equals(),
            Symbol::Clear => self.on_clear(),
        }

        (self.display != before).then_some(self.display.as_str())
    }

    pub fn display(&self) -> &str {
        &self.display
    }

    /// The operator waiting for its right hand operand
    pub fn pending(&self) -> Option<Operator> {
        self.operators.peek().copied()
    }

    pub fn operand_count(&self) -> usize {
        self.operands.len()
    }

    pub fn last_symbol(&self) -> Option<SymbolKind> {
        self.last
    }

    /// Is the display showing the error text?
    pub fn is_error(&self) -> bool {
        self.error
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    // ----- Symbol handlers -----

    pub fn on_digit(&mut self, d: u8) {
        let Some(Symbol::Digit(d)) = Symbol::digit(d) else {
            warn!("on_digit: {d} is not a decimal digit");
            return;
        };
        let digit = char::from(b'0' + d);
        self.begin_input();

        if self.display == "0" || self.result.is_some() || self.last_was(SymbolKind::Operator) {
            self.display = digit.to_string();
        } else {
            self.display.push(digit);
        }
        self.result = None;
        self.last = Some(SymbolKind::Digit);
    }

    pub fn on_decimal(&mut self) {
        self.begin_input();

        if self.result.is_some() || self.last_was(SymbolKind::Operator) {
            self.display = "0.".to_string();
        } else if !self.display.contains('.') {
            self.display.push('.');
        }
        self.result = None;
        self.last = Some(SymbolKind::Digit);
    }

    pub fn on_operator(&mut self, op: Operator) {
        if self.error {
            return;
        }

        match self.last {
            // Operator-switch
            Some(SymbolKind::Operator) if self.pending() != Some(op) => {
                debug!("on_operator: switching to {op}");
                self.arm(op);
            }

            // Same operator twice: finalize, then re-arm
            Some(SymbolKind::Operator) => {
                self.on_equals();
                if self.error {
                    return;
                }
                self.arm(op);
            }

            // The result of equals is already the running value
            Some(SymbolKind::Equals) if !self.operands.is_empty() => self.arm(op),

            _ => {
                if !self.commit() {
                    return;
                }
                if self.operands.len() >= 2 {
                    match self.pending() {
                        Some(pending) => {
                            if !self.reduce(pending) {
                                return;
                            }
                        }
                        None => self.keep_latest(),
                    }
                }
                self.arm(op);
            }
        }

        self.repeat = None;
        self.last = Some(SymbolKind::Operator);
    }

    pub fn on_equals(&mut self) {
        if self.error {
            return;
        }

        if self.last_was(SymbolKind::Equals) {
            self.repeat_equals();
            return;
        }

        let right = match self.current() {
            Ok(operand) => operand,
            Err(e) => {
                self.fail(e);
                return;
            }
        };
        self.operands.put(right);

        match self.pending() {
            Some(op) if self.operands.len() >= 2 => {
                if self.reduce(op) {
                    self.repeat = Some((op, right));
                }
            }
            _ => {
                self.keep_latest();
                self.result = Some(right);
                self.repeat = None;
            }
        }
        self.operators.clear();
        if !self.error {
            self.last = Some(SymbolKind::Equals);
        }
    }

    pub fn on_clear(&mut self) {
        self.operands.clear();
        self.operators.clear();
        self.display = "0".to_string();
        self.last = None;
        self.result = None;
        self.repeat = None;
        self.error = false;
    }

    // ----- Internals -----

    fn last_was(&self, kind: SymbolKind) -> bool {
        self.last == Some(kind)
    }

    // Digits and decimals after an error, or after equals, start afresh
    fn begin_input(&mut self) {
        if self.error {
            self.on_clear();
        }
        if self.last_was(SymbolKind::Equals) {
            self.operands.clear();
            self.operators.clear();
            self.repeat = None;
        }
    }

    fn arm(&mut self, op: Operator) {
        self.operators.clear();
        self.operators.enqueue(op);
    }

    // The operand behind the display: the result shown, or the text keyed in
    fn current(&self) -> Result<Operand, Error> {
        match self.result {
            Some(operand) => Ok(operand),
            None => Operand::parse(&self.display),
        }
    }

    // Commit the display to the operand buffer. False if that failed
    fn commit(&mut self) -> bool {
        match self.current() {
            Ok(operand) => {
                self.operands.put(operand);
                true
            }
            Err(e) => {
                self.fail(e);
                false
            }
        }
    }

    // Without a pending operator, only the latest operand counts
    fn keep_latest(&mut self) {
        let mut latest = None;
        self.operands.restore_order();
        while let Some(operand) = self.operands.take() {
            latest = Some(operand);
        }
        if let Some(operand) = latest {
            self.operands.put(operand);
        }
    }

    // Reduce the operand buffer, show the result and keep it as the running
    // value. False if the reduction failed
    fn reduce(&mut self, op: Operator) -> bool {
        match reduce(op, &mut self.operands) {
            Ok(result) => {
                self.display = result.to_display();
                self.operands.put(result);
                self.operators.clear();
                self.result = Some(result);
                true
            }
            Err(e) => {
                self.fail(e);
                false
            }
        }
    }

    fn repeat_equals(&mut self) {
        if self.settings.repeat_equals == RepeatEquals::Ignore {
            return;
        }
        let Some((op, right)) = self.repeat else {
            return;
        };
        if self.operands.is_empty() {
            if let Ok(operand) = self.current() {
                self.operands.put(operand);
            }
        }
        self.operands.put(right);
        self.reduce(op);
    }

    fn fail(&mut self, e: Error) {
        warn!("{e}");
        self.operands.clear();
        self.operators.clear();
        self.display = self.settings.error_text.clone();
        self.result = None;
        self.repeat = None;
        self.error = true;
        self.last = None;
    }
}

// ----- T E S T S ---------------------------------------------------------------------
