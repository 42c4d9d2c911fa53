use std::env;

/// Session variables set by display managers, in preference order.
const SESSION_VARS: &[&str] = &["XDG_CURRENT_DESKTOP", "DESKTOP_SESSION", "GDMSESSION"];

/// Desktop-environment name, joined from whichever session variables are
/// set, first-seen values only. None in a console session.
pub fn get() -> Option<String> {
    let names = dedup_names(SESSION_VARS.iter().filter_map(|var| env::var(var).ok()));
    if names.is_empty() {
        None
    } else {
        Some(names.join(" "))
    }
}

fn dedup_names(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for value in values {
        if !value.is_empty() && !names.contains(&value) {
            names.push(value);
        }
    }
    names
}
