// src/ui/systems.rs
use bevy::prelude::*;

use crate::projects::events::ProjectOperationFeedback;
use crate::settings::AppSettings;
use crate::tables::events::TableOperationFeedback;
use crate::ui::UiFeedbackState;

pub fn handle_ui_feedback(
    mut project_feedback: EventReader<ProjectOperationFeedback>,
    mut table_feedback: EventReader<TableOperationFeedback>,
    mut ui_feedback_state: ResMut<UiFeedbackState>,
) {
    let mut last_message = None;
    let messages = project_feedback
        .read()
        .map(|e| (e.message.clone(), e.is_error))
        .chain(table_feedback.read().map(|e| (e.message.clone(), e.is_error)));
    for (message, is_error) in messages {
        // Keep the latest message, but never let a success hide an error from the same frame.
        let keep_previous_error = matches!(last_message, Some((_, true))) && !is_error;
        if !keep_previous_error {
            last_message = Some((message, is_error));
        }
    }
    if let Some((msg, is_error)) = last_message {
        ui_feedback_state.last_message = msg;
        ui_feedback_state.is_error = is_error;
        if is_error {
            warn!("UI Feedback (Error): {}", ui_feedback_state.last_message);
        } else {
            info!("UI Feedback: {}", ui_feedback_state.last_message);
        }
    }
}

pub fn log_settings_on_startup(settings: Res<AppSettings>) {
    info!(
        "AppSettings: theme {:?}, currency prefix '{}', root markers {:?}",
        settings.theme,
        settings.currency_prefix,
        settings.root_markers.as_slice()
    );
}
