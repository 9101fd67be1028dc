//! Connect components to their host.
use crate::event;

/// A connection to the state of a host application.
///
/// A component leverages a [`Shell`] while processing one event: it
/// publishes messages for the host, marks the event as captured so it
/// stops propagating, and requests side effects like scrolling the
/// highlighted row into view.
#[derive(Debug)]
pub struct Shell<'a, Message> {
    messages: &'a mut Vec<Message>,
    event_status: event::Status,
    scroll_request: Option<usize>,
}

impl<'a, Message> Shell<'a, Message> {
    /// Creates a new [`Shell`] with the provided buffer of messages.
    pub fn new(messages: &'a mut Vec<Message>) -> Self {
        Self {
            messages,
            event_status: event::Status::Ignored,
            scroll_request: None,
        }
    }

    /// Returns true if the [`Shell`] contains no published messages.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// Publish the given `Message` for an application to process it.
    pub fn publish(&mut self, message: Message) {
        self.messages.push(message);
    }

    /// Marks the current event as captured. Prevents "event bubbling".
    ///
    /// A component should capture an event when no ancestor should
    /// handle it.
    pub fn capture_event(&mut self) {
        self.event_status = event::Status::Captured;
    }

    /// Returns the current [`event::Status`] of the [`Shell`].
    #[must_use]
    pub fn event_status(&self) -> event::Status {
        self.event_status
    }

    /// Returns whether the current event has been captured.
    #[must_use]
    pub fn is_event_captured(&self) -> bool {
        self.event_status == event::Status::Captured
    }

    /// Resets the event status to [`event::Status::Ignored`].
    ///
    /// This is useful when simulating multiple events in sequence so
    /// that each event is processed independently.
    pub fn uncapture_event(&mut self) {
        self.event_status = event::Status::Ignored;
    }

    /// Requests that the row at the given navigable index is scrolled
    /// into view with nearest alignment.
    ///
    /// This is a plain request slot, not a synthesized pointer event:
    /// honoring it never re-enters hover handling.
    pub fn request_scroll(&mut self, index: usize) {
        self.scroll_request = Some(index);
    }

    /// Returns the pending scroll request, if any, without taking it.
    #[must_use]
    pub fn scroll_request(&self) -> Option<usize> {
        self.scroll_request
    }

    /// Takes the pending scroll request, if any.
    pub fn take_scroll_request(&mut self) -> Option<usize> {
        self.scroll_request.take()
    }

    /// Merges the current [`Shell`] with another one by applying the
    /// given function to the messages of the latter.
    ///
    /// This method is useful for composition.
    pub fn merge<B>(&mut self, other: Shell<'_, B>, f: impl Fn(B) -> Message) {
        self.messages.extend(other.messages.drain(..).map(f));

        self.event_status = self.event_status.merge(other.event_status);

        // Last scroll request wins.
        if other.scroll_request.is_some() {
            self.scroll_request = other.scroll_request;
        }
    }
}
