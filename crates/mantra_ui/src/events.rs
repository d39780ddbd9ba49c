//! Component events and their DOM `CustomEvent` mirror.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Payload carried by `valueChange` and `filterApplied`.
pub struct ValueDetail {
    /// Field contents at emission time.
    pub value: String,
}

impl ValueDetail {
    /// Wraps a field value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", content = "detail", rename_all = "camelCase")]
/// Events emitted by [`crate::FilterSearch`].
pub enum FilterSearchEvent {
    /// Live edit of the field contents.
    ValueChange(ValueDetail),
    /// Committed filter value (blur or clear).
    FilterApplied(ValueDetail),
}

impl FilterSearchEvent {
    /// DOM event name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::ValueChange(_) => "valueChange",
            Self::FilterApplied(_) => "filterApplied",
        }
    }

    /// Event payload.
    pub fn detail(&self) -> &ValueDetail {
        match self {
            Self::ValueChange(detail) | Self::FilterApplied(detail) => detail,
        }
    }
}

/// Dispatches a bubbling, composed `CustomEvent` named `name` with `detail` as its payload.
///
/// Failures are logged and swallowed so event delivery never breaks the host page.
#[cfg(target_arch = "wasm32")]
pub(crate) fn dispatch_dom_event(target: &web_sys::Element, name: &str, detail: &impl Serialize) {
    use serde_wasm_bindgen::Serializer;

    let detail = match detail.serialize(&Serializer::json_compatible()) {
        Ok(detail) => detail,
        Err(err) => {
            leptos::logging::warn!("{name} detail serialize failed: {err}");
            return;
        }
    };

    let init = web_sys::CustomEventInit::new();
    init.set_bubbles(true);
    init.set_composed(true);
    init.set_detail(&detail);

    match web_sys::CustomEvent::new_with_event_init_dict(name, &init) {
        Ok(event) => {
            if let Err(err) = target.dispatch_event(&event) {
                leptos::logging::warn!("{name} dispatch failed: {err:?}");
            }
        }
        Err(err) => leptos::logging::warn!("{name} event construction failed: {err:?}"),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn dispatch_dom_event(_target: &web_sys::Element, _name: &str, _detail: &impl Serialize) {
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn detail_serializes_as_value_object() {
        let value = serde_json::to_value(ValueDetail::new("")).expect("serialize detail");
        assert_eq!(value, json!({ "value": "" }));
    }

    #[test]
    fn events_carry_dom_names_in_their_tag() {
        let event = FilterSearchEvent::FilterApplied(ValueDetail::new("pizza"));

        assert_eq!(event.name(), "filterApplied");
        assert_eq!(
            serde_json::to_value(&event).expect("serialize event"),
            json!({ "event": "filterApplied", "detail": { "value": "pizza" } })
        );
    }
}
