//! Event and message system for the dashboard framework
//!
//! This module provides the messaging infrastructure used for communication
//! between tabs and the application coordinator.

use crossterm::event::{KeyEvent, MouseEvent};
use tokio::sync::broadcast;

use crate::error::CoreError;
use crate::tab::TabId;

/// Messages that can be sent through the dashboard framework
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Message {
    // === Navigation ===
    /// Switch to a specific tab by ID
    SwitchTab(TabId),
    /// Close a specific tab by ID
    CloseTab(TabId),
    /// Switch to the next tab
    NextTab,
    /// Switch to the previous tab
    PrevTab,

    // === Session ===
    /// Make the named repository the active one for the session
    SelectRepository(String),

    // === Global ===
    /// Quit the application
    Quit,

    // === Input ===
    /// Keyboard input event
    Key(KeyEvent),
    /// Mouse input event
    Mouse(MouseEvent),
    /// Terminal resize event
    Resize(u16, u16),

    // === Custom ===
    /// Custom message for tabs
    Custom {
        /// Message type identifier
        kind: String,
        /// JSON payload
        payload: serde_json::Value,
    },

    // === Batch ===
    /// Multiple messages to process in sequence
    Batch(Vec<Message>),

    // === No-op ===
    /// No operation (used for optional returns)
    #[default]
    None,
}

impl Message {
    /// Creates a custom message with the given kind and payload
    ///
    /// # Example
    ///
    /// ```
    /// use gitdeck_core::event::Message;
    /// use serde_json::json;
    ///
    /// let msg = Message::custom("notification", json!({"text": "Hello"}));
    /// ```
    pub fn custom<S: Into<String>>(kind: S, payload: serde_json::Value) -> Self {
        Message::Custom {
            kind: kind.into(),
            payload,
        }
    }

    /// Creates a batch of messages
    ///
    /// # Example
    ///
    /// ```
    /// use gitdeck_core::event::Message;
    ///
    /// let batch = Message::batch(vec![Message::NextTab, Message::Quit]);
    /// ```
    pub fn batch(messages: Vec<Message>) -> Self {
        Message::Batch(messages)
    }

    /// Returns true if this is a no-op message
    ///
    /// # Example
    ///
    /// ```
    /// use gitdeck_core::event::Message;
    ///
    /// assert!(Message::None.is_none());
    /// assert!(!Message::Quit.is_none());
    /// ```
    pub fn is_none(&self) -> bool {
        matches!(self, Message::None)
    }

    /// Flattens nested batch messages into a single level
    ///
    /// Recursively flattens any nested `Message::Batch` variants and
    /// removes `Message::None` entries.
    ///
    /// # Example
    ///
    /// ```
    /// use gitdeck_core::event::Message;
    ///
    /// let nested = Message::Batch(vec![
    ///     Message::Quit,
    ///     Message::Batch(vec![Message::NextTab, Message::PrevTab]),
    /// ]);
    /// let flat = nested.flatten();
    /// assert_eq!(flat.len(), 3);
    /// ```
    pub fn flatten(self) -> Vec<Message> {
        match self {
            Message::Batch(msgs) => msgs.into_iter().flat_map(|m| m.flatten()).collect(),
            Message::None => vec![],
            other => vec![other],
        }
    }
}

/// Input events from the terminal
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// Keyboard input
    Key(KeyEvent),
    /// Mouse input
    Mouse(MouseEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}

impl From<crossterm::event::Event> for InputEvent {
    fn from(event: crossterm::event::Event) -> Self {
        match event {
            crossterm::event::Event::Key(key) => InputEvent::Key(key),
            crossterm::event::Event::Mouse(mouse) => InputEvent::Mouse(mouse),
            crossterm::event::Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Tick, // Map other events to tick
        }
    }
}

/// Message bus for broadcasting messages to multiple subscribers
///
/// The `MessageBus` provides a publish-subscribe mechanism for distributing
/// messages throughout the dashboard. It uses tokio's broadcast channel
/// internally for efficient multi-consumer message delivery.
///
/// # Example
///
/// ```
/// use gitdeck_core::event::{Message, MessageBus};
///
/// let bus = MessageBus::new(100);
/// let mut rx = bus.subscribe();
///
/// // Messages can be sent to all subscribers
/// // bus.send(Message::Quit).expect("send should succeed");
/// ```
#[derive(Debug)]
pub struct MessageBus {
    sender: broadcast::Sender<Message>,
}

impl MessageBus {
    /// Creates a new message bus with the specified capacity
    ///
    /// # Arguments
    ///
    /// * `capacity` - Maximum number of messages to buffer before older
    ///   messages are dropped for slow receivers
    pub fn new(capacity: usize) -> Self {
        let (sender, _) = broadcast::channel(capacity);
        MessageBus { sender }
    }

    /// Subscribe to receive messages from this bus
    ///
    /// Returns a receiver that will receive all messages sent after
    /// the subscription is created.
    pub fn subscribe(&self) -> broadcast::Receiver<Message> {
        self.sender.subscribe()
    }

    /// Send a message to all subscribers
    ///
    /// Returns the number of receivers that received the message.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::EventError` if there are no active subscribers.
    pub fn send(&self, msg: Message) -> Result<usize, CoreError> {
        self.sender
            .send(msg)
            .map_err(|e| CoreError::EventError(format!("failed to send message: {}", e)))
    }

    /// Returns the number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for MessageBus {
    fn default() -> Self {
        MessageBus::new(256)
    }
}

impl Clone for MessageBus {
    fn clone(&self) -> Self {
        MessageBus {
            sender: self.sender.clone(),
        }
    }
}
