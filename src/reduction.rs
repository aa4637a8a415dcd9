use crate::internal::*;

// ----- R E D U C T I O N -------------------------------------------------------------

/// Collapse all operands in `operands` into one, by applying `operator`
/// strictly left to right, in the order the operands were encountered:
/// `v1 - v2 - v3 ...`. The buffer is left empty.
///
/// Add, subtract and multiply are exact when both sides carry a [`Fixed`]
/// form, and the fixed point computation does not overflow. Otherwise, and
/// always for division, the computation is done in `f64`.
///
/// A zero divisor abandons the reduction, clears `operands`, and returns
/// [`Error::DivisionByZero`]. Likewise, a step without a numeric result
/// (`Infinity x 0`, `Infinity - Infinity`) returns [`Error::Undefined`].
/// Fewer than two operands is an
/// [`Error::Underflow`], leaving the buffer untouched.
pub fn reduce<B: Buffer<Operand> + ?Sized>(
    operator: Operator,
    operands: &mut B,
) -> Result<Operand, Error> {
    let n = operands.len();
    if n < 2 {
        return Err(Error::Underflow(n));
    }

    operands.restore_order();
    let Some(mut result) = operands.take() else {
        return Err(Error::Underflow(0));
    };

    while let Some(next) = operands.take() {
        if operator == Operator::Divide && next.value() == 0. {
            operands.clear();
            return Err(Error::DivisionByZero);
        }
        result = apply(operator, result, next);
        if result.value().is_nan() {
            operands.clear();
            return Err(Error::Undefined(operator));
        }
    }

    debug!("reduce: {n} operands under {operator} -> {}", result.value());
    Ok(result)
}

fn apply(operator: Operator, left: Operand, right: Operand) -> Operand {
    if let (Some(a), Some(b)) = (left.fixed(), right.fixed()) {
        let exact = match operator {
            Operator::Add => a.checked_add(b),
            Operator::Subtract => a.checked_sub(b),
            Operator::Multiply => a.checked_mul(b),
            Operator::Divide => None,
        };
        if let Some(exact) = exact {
            return Operand::from(exact);
        }
    }
    Operand::from(operator.apply(left.value(), right.value()))
}

// ----- T E S T S ---------------------------------------------------------------------
