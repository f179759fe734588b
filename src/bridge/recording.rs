//! Recording bridge used by the test suites.

use super::HostBridge;
use std::sync::Mutex;

/// One host call, as a session issued it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BridgeCommand {
    SetMainButtonLabel(String),
    ShowMainButton,
    HideMainButton,
    ShowBackButton,
    HideBackButton,
    SendData(String),
}

/// A [`HostBridge`] that records the exact command stream instead of
/// talking to a host. Exported so integration tests can assert on the
/// observable side-effect order.
#[derive(Debug, Default)]
pub struct RecordingBridge {
    commands: Mutex<Vec<BridgeCommand>>,
}

impl RecordingBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything recorded so far, in issue order.
    pub fn commands(&self) -> Vec<BridgeCommand> {
        self.commands.lock().map(|guard| guard.clone()).unwrap_or_default()
    }

    /// Payloads passed through the data channel, in send order.
    pub fn sent_payloads(&self) -> Vec<String> {
        self.commands()
            .into_iter()
            .filter_map(|command| match command {
                BridgeCommand::SendData(payload) => Some(payload),
                _ => None,
            })
            .collect()
    }

    fn record(&self, command: BridgeCommand) {
        if let Ok(mut guard) = self.commands.lock() {
            guard.push(command);
        }
    }
}

impl HostBridge for RecordingBridge {
    fn set_main_button_label(&self, label: &str) {
        self.record(BridgeCommand::SetMainButtonLabel(label.to_string()));
    }

    fn show_main_button(&self) {
        self.record(BridgeCommand::ShowMainButton);
    }

    fn hide_main_button(&self) {
        self.record(BridgeCommand::HideMainButton);
    }

    fn show_back_button(&self) {
        self.record(BridgeCommand::ShowBackButton);
    }

    fn hide_back_button(&self) {
        self.record(BridgeCommand::HideBackButton);
    }

    fn send_data(&self, payload: &str) {
        self.record(BridgeCommand::SendData(payload.to_string()));
    }
}
