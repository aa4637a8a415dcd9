mod queue;
mod stack;
pub use queue::Queue;
pub use stack::Stack;

// ----- T H E   B U F F E R   T R A I T -----------------------------------------------

/// The `Buffer` trait is the contract between the [`Calculator`](crate::Calculator)
/// and the container holding its operands. It is implemented by the FIFO [`Queue`]
/// and by the LIFO [`Stack`], and may be implemented by user provided containers.
///
/// Taking from an empty buffer is not an error: it returns `None`.
pub trait Buffer<T> {
    /// Add `value` to the buffer. Always succeeds
    fn put(&mut self, value: T);

    /// Remove and return the next element, `None` if the buffer is empty
    fn take(&mut self) -> Option<T>;

    /// Look at the element `take` would return, without removing it
    fn peek(&self) -> Option<&T>;

    /// The number of elements in the buffer
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop all elements
    fn clear(&mut self);

    /// Rearrange the buffer so that `take` returns the elements in the order
    /// they were `put`. FIFO containers need not do anything.
    fn restore_order(&mut self) {}
}

impl<T> Buffer<T> for Queue<T> {
    fn put(&mut self, value: T) {
        self.enqueue(value);
    }

    fn take(&mut self) -> Option<T> {
        self.dequeue()
    }

    fn peek(&self) -> Option<&T> {
        Queue::peek(self)
    }

    fn len(&self) -> usize {
        Queue::len(self)
    }

    fn clear(&mut self) {
        Queue::clear(self);
    }
}

impl<T> Buffer<T> for Stack<T> {
    fn put(&mut self, value: T) {
        self.push(value);
    }

    fn take(&mut self) -> Option<T> {
        self.pop()
    }

    fn peek(&self) -> Option<&T> {
        Stack::peek(self)
    }

    fn len(&self) -> usize {
        Stack::len(self)
    }

    fn clear(&mut self) {
        Stack::clear(self);
    }

    // Pushed in encounter order, so the first encountered is at the bottom
    fn restore_order(&mut self) {
        self.reverse();
    }
}

// ----- T E S T S ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn drain<B: Buffer<i32>>(mut buffer: B) -> Vec<i32> {
        for i in 1..=4 {
            buffer.put(i);
        }
        assert_eq!(buffer.len(), 4);
        buffer.restore_order();
        let mut out = Vec::new();
        while let Some(i) = buffer.take() {
            out.push(i);
        }
        assert!(buffer.is_empty());
        out
    }

    #[test]
    fn encounter_order() {
        // Whatever the container, restore_order makes `take` FIFO
        assert_eq!(drain(Queue::new()), [1, 2, 3, 4]);
        assert_eq!(drain(Stack::new()), [1, 2, 3, 4]);
    }

    #[test]
    fn peek_follows_take() {
        let mut stack = Stack::new();
        stack.put('a');
        stack.put('b');
        assert_eq!(Buffer::peek(&stack), Some(&'b'));
        stack.restore_order();
        assert_eq!(Buffer::peek(&stack), Some(&'a'));
        Buffer::clear(&mut stack);
        assert_eq!(Buffer::peek(&stack), None);
        assert_eq!(stack.take(), None);
    }
}
