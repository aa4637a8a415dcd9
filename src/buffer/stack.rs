use std::fmt;

// ----- T H E   L I N K E D   S T A C K -----------------------------------------------

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// A LIFO stack of linked nodes. Used as operand buffer, the stack yields the
/// operands last-encountered first, so non-commutative reductions must
/// [`reverse`](Stack::reverse) it before popping.
pub struct Stack<T> {
    top: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { top: None, len: 0 }
    }

    pub fn push(&mut self, data: T) {
        let next = self.top.take();
        self.top = Some(Box::new(Node { data, next }));
        self.len += 1;
    }

    /// Remove and return the top element, `None` if the stack is empty
    pub fn pop(&mut self) -> Option<T> {
        let node = *self.top.take()?;
        self.top = node.next;
        self.len -= 1;
        Some(node.data)
    }

    pub fn peek(&self) -> Option<&T> {
        self.top.as_ref().map(|node| &node.data)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn clear(&mut self) {
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.len = 0;
    }

    /// Reverse the stack in place, by relinking the nodes: the bottom
    /// element becomes the top
    pub fn reverse(&mut self) {
        let mut reversed = None;
        let mut link = self.top.take();
        while let Some(mut node) = link {
            link = node.next.take();
            node.next = reversed;
            reversed = Some(node);
        }
        self.top = reversed;
    }

    /// Top-to-bottom iteration
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.top.as_deref(),
        }
    }
}

impl<T> Drop for Stack<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut stack = Stack::new();
        for item in iter {
            stack.push(item);
        }
        stack
    }
}

pub struct Iter<'a, T> {
    next: Option<&'a Node<T>>,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.next.map(|node| {
            self.next = node.next.as_deref();
            &node.data
        })
    }
}

// ----- T E S T S ---------------------------------------------------------------------
