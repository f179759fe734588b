//! Host Application Boundary
//!
//! The embedding host offers a small control surface: a primary action
//! button, a back affordance, and a one-way data channel. Everything the
//! core needs from it sits behind [`HostBridge`], so the state model never
//! touches host specifics.

pub mod recording;

// Re-export commonly used types for convenience
pub use recording::{BridgeCommand, RecordingBridge};

/// The messaging host's button/visibility/data-channel contract.
///
/// All calls are fire-and-forget; the host offers no acknowledgment path
/// back to the page.
pub trait HostBridge {
    /// Replaces the primary action's label.
    fn set_main_button_label(&self, label: &str);

    fn show_main_button(&self);

    fn hide_main_button(&self);

    fn show_back_button(&self);

    fn hide_back_button(&self);

    /// Hands the serialized order payload to the host. One-way; the page
    /// never learns whether delivery succeeded.
    fn send_data(&self, payload: &str);
}
