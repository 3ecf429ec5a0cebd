use super::Word;
use std::collections::VecDeque;

/// Callback consulted when the queue runs dry. `None` means it has
/// nothing to give and the `READ` fails.
pub type InputSource = Box<dyn FnMut() -> Option<Word>>;

/// ## Input queue
///
/// Values appended by the caller are consumed in order by `READ`.
/// An optional source supplies values on demand once the queue is empty.

#[derive(Default)]
pub struct Input {
    queue: VecDeque<Word>,
    source: Option<InputSource>,
}

impl std::fmt::Debug for Input {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Input")
            .field("queue", &self.queue)
            .field("source", &self.source.is_some())
            .finish()
    }
}

impl Input {
    pub fn new() -> Input {
        Input::default()
    }

    /// Replace queued values. The source, if any, is kept.
    pub fn reset<I: IntoIterator<Item = Word>>(&mut self, values: I) {
        self.queue.clear();
        self.queue.extend(values);
    }

    pub fn push(&mut self, value: Word) {
        self.queue.push_back(value)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn set_source(&mut self, source: Option<InputSource>) {
        self.source = source;
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn pop(&mut self) -> Option<Word> {
        match self.queue.pop_front() {
            Some(value) => Some(value),
            None => self.source.as_mut().and_then(|source| source()),
        }
    }
}
