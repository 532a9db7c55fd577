pub fn config_loaded(user: &str, room: &str) -> String {
    format!("Loaded configuration for user {user}, digest room {room}")
}

pub const LOGIN_SUCCESS: &str = "Logged in successfully!";

pub fn setting_display_name(name: &str) -> String {
    format!("Setting display name to: {name}")
}

pub fn set_display_name_fail(err: &str) -> String {
    format!("Failed to set display name: {err}")
}

pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}

pub fn schedule_armed(next: &str) -> String {
    format!("⏰ Next scheduled briefing at {next}")
}

pub const SCHEDULED_RUN: &str = "⏰ Running scheduled task...";
pub const SCHEDULED_RUN_SKIPPED: &str = "Scheduled briefing skipped: a run is already in flight";

pub const MESSAGE_SENT: &str = "✅ Message sent";

pub fn send_failed(err: &str) -> String {
    format!("❌ Failed to send daily message: {err}")
}

pub fn digest_aborted(err: &str) -> String {
    format!("❌ Daily briefing aborted: {err}")
}

pub fn feed_failed(url: &str, err: &str) -> String {
    format!("Failed to fetch {url}: {err}")
}

pub fn snippet_failed(kind: &str, err: &str) -> String {
    format!("{kind} fetch failed: {err}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("💌 Received invite for room {room_id}")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub fn unauthorized_trigger(room_id: &str, sender: &str) -> String {
    format!("Rejected /now from {sender} in unauthorized room {room_id}")
}
