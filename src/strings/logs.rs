//! # Log Messages
//!
//! Templates for log lines emitted during startup and request handling.

pub const STARTING: &str = "Starting Riven...";
pub const SYNC_LOOP_START: &str = "Starting sync loop...";

pub fn store_connected(url: &str) -> String {
    format!("Session store at {url} launched successfully")
}

pub fn logged_in(user: &str) -> String {
    format!("Logged in as {user}")
}

pub fn user_registered(username: &str, id: &str) -> String {
    format!("User: {username} registered with ID: {id}")
}

pub fn weather_requested(username: &str, id: &str) -> String {
    format!("User with username: {username} and ID: {id} requested weather.")
}

pub fn ranking_requested(username: &str, id: &str, genre: &str, code: &str) -> String {
    format!("User with username: {username} and ID: {id} requested top films for '{genre}' (genre {code}).")
}

pub fn dispatching(cmd: &str, sender: &str) -> String {
    format!("Router dispatching cmd='{cmd}' sender='{sender}'")
}

pub fn request_failed(cmd: &str, sender: &str, err: &str) -> String {
    format!("Command {cmd} from {sender} failed: {err}")
}

pub fn send_failed(room: &str, err: &str) -> String {
    format!("Failed to send reply to room {room}: {err}")
}

pub fn invite_received(room_id: &str) -> String {
    format!("💌 Received invite for room {room_id:?}")
}

pub fn join_invite_fail(err: &str) -> String {
    format!("Failed to join room after invite: {err}")
}

pub fn sync_loop_fail(err: &str) -> String {
    format!("Sync loop failed: {err}")
}
