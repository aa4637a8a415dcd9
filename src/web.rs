//! Browser entry point. The page owns the button grid and the output
//! element; it hands every clicked label to `Keypad::press`, and renders
//! the returned text, if any.

use crate::internal::*;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct Keypad {
    calculator: Calculator,
}

#[wasm_bindgen]
impl Keypad {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Keypad {
        Keypad {
            calculator: Calculator::new(),
        }
    }

    /// Deliver the key labelled `label` (a digit, "+", "clear", "calculate"...).
    /// Returns the new display text, or nothing if the display did not change
    /// or the label is unknown
    pub fn press(&mut self, label: &str) -> Option<String> {
        let symbol = match label.parse::<Symbol>() {
            Ok(symbol) => symbol,
            Err(e) => {
                warn!("Keypad: {e}");
                return None;
            }
        };
        self.calculator.deliver(symbol).map(str::to_string)
    }

    pub fn display(&self) -> String {
        self.calculator.display().to_string()
    }
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

// ----- T E S T S ---------------------------------------------------------------------
