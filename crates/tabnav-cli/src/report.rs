//! Error output for the `tabnav` binary.

use tabnav_persistence::StateError;

/// Renders `error` for stderr.
///
/// When a [`StateError`] is in the chain, its explanation and hint follow
/// the error line.
pub fn render_error(error: &anyhow::Error) -> String {
    let mut rendered = format!("error: {error:#}");
    let state_error = error
        .chain()
        .find_map(|cause| cause.downcast_ref::<StateError>());
    if let Some(state_error) = state_error {
        rendered.push_str("\n  ");
        rendered.push_str(&state_error.user_message());
        if let Some(hint) = state_error.suggestion() {
            rendered.push_str("\n  hint: ");
            rendered.push_str(&hint);
        }
    }
    rendered
}
