//! Modal messages

/// Modal messages
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalMessage {
    /// Close the open modal
    Close,
}
