//! Display formatting for table cells.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use crate::net::types::{AuditLogEntry, Client};

pub fn active_label(is_active: bool) -> &'static str {
    if is_active { "Active" } else { "Disabled" }
}

/// Label of the activate/deactivate button for a client row.
pub fn toggle_button_label(client: &Client) -> &'static str {
    if client.is_active { "Disable" } else { "Enable" }
}

/// Render an ISO 8601 timestamp as `YYYY-MM-DD HH:MM:SS`.
///
/// Fractional seconds and offsets are dropped and missing seconds read as
/// `:00`. Input that doesn't look like an ISO timestamp is returned unchanged.
pub fn format_timestamp(raw: &str) -> String {
    let Some((date, time)) = raw.split_once('T') else {
        return raw.to_owned();
    };
    let time: String = time.chars().take_while(|c| c.is_ascii_digit() || *c == ':').collect();
    let parts: Vec<&str> = time.split(':').collect();
    let well_formed = parts.iter().all(|p| p.len() == 2);
    if date.len() != 10 || !well_formed {
        return raw.to_owned();
    }
    match parts.as_slice() {
        [h, m] => format!("{date} {h}:{m}:00"),
        [h, m, s] => format!("{date} {h}:{m}:{s}"),
        _ => raw.to_owned(),
    }
}

/// `login (ID: n)` as shown in the audit table.
pub fn audit_user_cell(entry: &AuditLogEntry) -> String {
    format!("{} (ID: {})", entry.user.login, entry.user_id)
}

/// Two-space indented JSON for the changes column.
pub fn pretty_changes(changes: &serde_json::Value) -> String {
    serde_json::to_string_pretty(changes).unwrap_or_else(|_| changes.to_string())
}

/// Search result line: `name (ID: n, phone: p)`.
pub fn client_search_label(client: &Client) -> String {
    format!("{} (ID: {}, phone: {})", client.full_name, client.id, client.phone)
}
