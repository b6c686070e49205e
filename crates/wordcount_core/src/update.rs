use crate::{is_tex_language, Effect, Msg, StatusState};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: StatusState, msg: Msg) -> (StatusState, Vec<Effect>) {
    let effects = match msg {
        Msg::DocumentActivated { path, language_id } => {
            let countable = is_tex_language(&language_id);
            state.activate(Some((path, countable)));
            if countable {
                request_count(&mut state)
            } else {
                vec![Effect::Hide]
            }
        }
        Msg::DocumentClosed => {
            state.activate(None);
            vec![Effect::Hide]
        }
        Msg::RefreshRequested => request_count(&mut state),
        Msg::TemplateChanged(template) => {
            state.set_template(template);
            Vec::new()
        }
        Msg::CountCompleted { request_id, count } => {
            state.apply_completion(request_id, count);
            Vec::new()
        }
    };

    (state, effects)
}

// The previous count stays on display until the new one lands.
fn request_count(state: &mut StatusState) -> Vec<Effect> {
    let Some(path) = state.countable_path().map(ToOwned::to_owned) else {
        return Vec::new();
    };
    let request_id = state.issue_request();
    vec![Effect::RequestCount { request_id, path }]
}
