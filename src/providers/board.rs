//! Board identity provider

use crate::snapshot::BoardImage;
use cfg_if::cfg_if;

#[cfg(test)]
use mockall::automock;

/// Fallback when the platform exposes no board identity.
const UNKNOWN_BOARD: &str = "Unknown board";

/// Source of the board's human-readable identity. Pure and synchronous;
/// has no failure contract beyond returning a default value.
#[cfg_attr(test, automock)]
pub trait BoardInfoProvider: Send + Sync {
    /// The board's marketing/model name.
    fn board_name(&self) -> String;

    /// Opaque reference to the board's image asset.
    fn board_image(&self) -> BoardImage;
}

/// Reads the board identity from the platform.
///
/// On Linux the firmware-provided device-tree model string is the
/// authoritative name on single-board computers; elsewhere the provider
/// degrades to the static fallback.
#[derive(Debug, Default)]
pub struct DetectedBoard;

impl DetectedBoard {
    pub fn new() -> Self {
        Self
    }

    fn read_model_string() -> Option<String> {
        cfg_if! {
            if #[cfg(target_os = "linux")] {
                let raw = std::fs::read("/proc/device-tree/model").ok()?;
                // The device-tree string is NUL-terminated.
                let text = String::from_utf8_lossy(&raw);
                let trimmed = text.trim_matches(['\0', '\n', ' ']).to_string();
                if trimmed.is_empty() { None } else { Some(trimmed) }
            } else {
                None
            }
        }
    }
}

impl BoardInfoProvider for DetectedBoard {
    fn board_name(&self) -> String {
        Self::read_model_string().unwrap_or_else(|| UNKNOWN_BOARD.to_string())
    }

    fn board_image(&self) -> BoardImage {
        image_for_board(&self.board_name())
    }
}

/// Map a board name onto its image asset. Unrecognized boards get the
/// generic placeholder.
pub fn image_for_board(board_name: &str) -> BoardImage {
    let name = board_name.to_lowercase();
    if name.contains("raspberry pi") {
        BoardImage("raspberry-pi".to_string())
    } else if name.contains("minnowboard") {
        BoardImage("minnowboard-max".to_string())
    } else if name.contains("dragonboard") {
        BoardImage("dragonboard-410c".to_string())
    } else {
        BoardImage::placeholder()
    }
}
