use std::fmt;
use std::ptr::NonNull;

// ----- T H E   L I N K E D   Q U E U E -----------------------------------------------

struct Node<T> {
    data: T,
    next: Option<Box<Node<T>>>,
}

/// A FIFO queue, built as a singly linked chain of owned nodes. The front
/// node is owned by the queue, every other node by its predecessor, and a
/// non-owning reference to the back node makes `enqueue` O(1).
pub struct Queue<T> {
    front: Option<Box<Node<T>>>,
    back: Option<NonNull<Node<T>>>,
    len: usize,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            front: None,
            back: None,
            len: 0,
        }
    }

    /// Append `data` at the back of the queue
    pub fn enqueue(&mut self, data: T) {
        let mut node = Box::new(Node { data, next: None });
        let raw = NonNull::from(node.as_mut());
        match self.back {
            // SAFETY: `back` is only `Some` while the queue is non-empty, and then
            // points to the last node of the chain owned through `front`. We hold
            // `&mut self`, so no other reference into the chain is alive.
            Some(mut back) => unsafe { back.as_mut().next = Some(node) },
            None => self.front = Some(node),
        }
        self.back = Some(raw);
        self.len += 1;
    }

    /// Remove and return the element at the front, `None` if the queue is empty
    pub fn dequeue(&mut self) -> Option<T> {
        let node = *self.front.take()?;
        self.front = node.next;
        if self.front.is_none() {
            self.back = None;
        }
        self.len -= 1;
        Some(node.data)
    }

    /// The element at the front, `None` if the queue is empty
    pub fn peek(&self) -> Option<&T> {
        self.front.as_ref().map(|node| &node.data)
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Drop all elements. Iterative, so long chains do not blow the call stack
    pub fn clear(&mut self) {
        let mut link = self.front.take();
        while let Some(mut node) = link {
            link = node.next.take();
        }
        self.back = None;
        self.len = 0;
    }

    /// Front-to-back iteration
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            next: self.front.as_deref(),
        }
    }
}

impl<T> Drop for Queue<T> {
    fn drop(&mut self) {
        self.clear();
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Extend<T> for Queue<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.enqueue(item);
        }
    }
}

impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut queue = Queue::new();
        queue.extend(iter);
        queue
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
