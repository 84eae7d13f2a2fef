//! Keyboard input handling
//!
//! Pure key-to-direction mapping; the event listeners live in the host page
//! and call into these through the wasm bindings. The held direction is the
//! single field the callbacks write, and the simulation only reads the
//! per-frame snapshot taken from it.

/// Handle key down event
pub fn handle_key_down(key: &str, current_dir: i8) -> i8 {
    match key {
        "ArrowUp" | "w" | "W" => -1,
        "ArrowDown" | "s" | "S" => 1,
        _ => current_dir,
    }
}

/// Handle key up event
pub fn handle_key_up(key: &str, current_dir: i8) -> i8 {
    match key {
        "ArrowUp" | "w" | "W" | "ArrowDown" | "s" | "S" => 0,
        _ => current_dir,
    }
}

/// Space toggles pause, matching the original keyboard shortcut.
pub fn is_pause_key(key: &str) -> bool {
    key == " " || key == "Spacebar"
}
