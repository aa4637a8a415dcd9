use keycalc::authoring::*;
use std::collections::VecDeque;

// ----- U S E R   P R O V I D E D   B U F F E R -----------------------------------

/// An operand buffer built outside of the crate, on top of a `VecDeque`,
/// and used in exactly the same way as the builtin `Queue` and `Stack`.
#[derive(Debug, Default)]
pub struct Deque {
    items: VecDeque<Operand>,
}

impl Buffer<Operand> for Deque {
    fn put(&mut self, value: Operand) {
        self.items.push_back(value);
    }

    fn take(&mut self) -> Option<Operand> {
        self.items.pop_front()
    }

    fn peek(&self) -> Option<&Operand> {
        self.items.front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn clear(&mut self) {
        self.items.clear();
    }
}

// ----- U S E R   P R O V I D E D   S C R E E N -----------------------------------

/// A seven segment display with room for `width` characters, showing "E"
/// when the text does not fit
#[derive(Debug)]
pub struct Segments {
    width: usize,
    shown: String,
    refreshes: usize,
}

impl Screen for Segments {
    fn show(&mut self, text: &str) {
        self.refreshes += 1;
        self.shown = if text.chars().count() > self.width {
            "E".to_string()
        } else {
            format!("{text:>width$}", width = self.width)
        };
    }
}

fn session() -> Session<Segments, Deque> {
    let calculator = Calculator::with_buffer(Deque::default(), Settings::default());
    let screen = Segments {
        width: 8,
        shown: String::new(),
        refreshes: 0,
    };
    Session::with_calculator(calculator, screen)
}

#[test]
fn user_provided_buffer_and_screen() -> Result<(), Error> {
    let mut session = session();

    session.press_keys("2 + 3 + 4 =")?;
    assert_eq!(session.screen.shown, "       9");

    session.press_keys("C 10 x 2 x 5 =")?;
    assert_eq!(session.screen.shown, "     100");

    session.press_keys("C 4 + x 2 =")?;
    assert_eq!(session.screen.shown, "       8");

    session.press_keys("C 99999 x 99999 =")?;
    assert_eq!(session.display(), "9999800001");
    assert_eq!(session.screen.shown, "E");
    Ok(())
}

#[test]
fn one_refresh_per_change() -> Result<(), Error> {
    let mut session = session();
    // 1, 12, (+ commits silently), 3, 15
    session.press_keys("12 + 3 =")?;
    assert_eq!(session.screen.refreshes, 4);

    // Repeat equals changes the display, the second clear does not
    session.press_keys("= C C")?;
    assert_eq!(session.screen.refreshes, 6);
    assert_eq!(session.screen.shown, "       0");
    Ok(())
}

#[test]
fn division_by_zero_is_recoverable() -> Result<(), Error> {
    let mut session = session();
    session.press_keys("5 / 0 =")?;
    assert!(session.calculator.is_error());
    assert_eq!(session.screen.shown, "     NaN");
    assert_eq!(session.calculator.operand_count(), 0);

    session.press(Symbol::Clear);
    assert_eq!(session.display(), "0");
    assert!(!session.calculator.is_error());
    Ok(())
}

#[test]
fn same_answers_from_all_buffers() -> Result<(), Error> {
    let cases = [
        ("2 + 3 + 4 =", "9"),
        ("20 - 5 - 3 =", "12"),
        ("100 / 5 / 2 =", "10"),
        ("0.1 + 0.2 =", "0.3"),
        ("1.1 x 1.1 =", "1.21"),
        ("2 + 3 x 4 =", "20"),
        ("9 - 2 = =", "5"),
        ("7 / 0 =", "NaN"),
    ];

    for (keys, expected) in cases {
        let mut queue = Session::new(Tape::new());
        let mut stack = Session::with_calculator(
            Calculator::with_buffer(Stack::new(), Settings::default()),
            Tape::new(),
        );
        let mut deque = session();

        queue.press_keys(keys)?;
        stack.press_keys(keys)?;
        deque.press_keys(keys)?;
        assert_eq!(queue.display(), expected, "queue: {keys}");
        assert_eq!(stack.display(), expected, "stack: {keys}");
        assert_eq!(deque.display(), expected, "deque: {keys}");
        assert_eq!(queue.screen, stack.screen);
    }
    Ok(())
}

#[test]
fn reduce_directly() -> Result<(), Error> {
    let mut operands = Deque::default();
    for text in ["1", "0.5", "0.25"] {
        operands.put(Operand::parse(text)?);
    }
    let result = reduce(Operator::Subtract, &mut operands)?;
    assert_eq!(format_value(result.value()), "0.25");
    assert_eq!(result.fixed(), Some(Fixed::new(25, 2)));
    assert!(operands.is_empty());
    Ok(())
}
