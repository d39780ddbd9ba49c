//! Renders a component from a markup attribute map.

use leptos::*;
use mantra_ui::attrs::{Attributes, FromAttr};
use mantra_ui::prelude::*;
use serde::Serialize;
use serde_json::Value;

use crate::stories::ComponentKind;

#[derive(Debug, Clone, PartialEq, Serialize)]
/// One entry of the story page action log.
pub struct ActionRecord {
    /// Event name as a DOM listener would see it.
    pub event: String,
    /// Event payload.
    pub detail: Value,
}

impl ActionRecord {
    /// Record for a search field event.
    pub fn from_search_event(event: &FilterSearchEvent) -> Self {
        Self {
            event: event.name().to_string(),
            detail: serde_json::to_value(event.detail()).unwrap_or(Value::Null),
        }
    }

    /// Record for a button click.
    pub fn click() -> Self {
        Self {
            event: "click".to_string(),
            detail: Value::Object(Default::default()),
        }
    }

    /// Single-line JSON form used by the log panel.
    pub fn to_log_line(&self) -> String {
        match serde_json::to_string(self) {
            Ok(line) => line,
            Err(err) => {
                logging::warn!("action record serialize failed: {err}");
                self.event.clone()
            }
        }
    }
}

fn text(attrs: Signal<Attributes>, name: &'static str) -> Signal<Option<String>> {
    Signal::derive(move || attrs.with(|attrs| attrs.text(name)))
}

fn flag(attrs: Signal<Attributes>, name: &'static str) -> Signal<bool> {
    Signal::derive(move || attrs.with(|attrs| attrs.flag(name)))
}

fn token<T: FromAttr + 'static>(attrs: Signal<Attributes>, name: &'static str) -> Signal<Option<T>> {
    Signal::derive(move || attrs.with(|attrs| attrs.token(name)))
}

fn token_or<T: FromAttr + Copy + 'static>(
    attrs: Signal<Attributes>,
    name: &'static str,
    default: T,
) -> Signal<Option<T>> {
    Signal::derive(move || attrs.with(|attrs| attrs.token_or(name, default)))
}

/// Builds `kind` from `attrs`, forwarding emitted events to `on_action`.
///
/// Attribute edits flow through signals, so the component instance is kept and only its
/// derived state recomputes.
pub fn render_story(
    kind: ComponentKind,
    attrs: Signal<Attributes>,
    on_action: Callback<ActionRecord>,
) -> View {
    let size = token_or(attrs, "size", Size::Medium);
    let label = text(attrs, "label");
    let icon_left = token::<IconName>(attrs, "icon-left");
    let icon_right = token::<IconName>(attrs, "icon-right");
    let disabled = flag(attrs, "disabled");
    let full_width = flag(attrs, "full-width");
    let name = Signal::derive(move || attrs.with(|attrs| attrs.text("name").unwrap_or_default()));
    let color = text(attrs, "color");
    let height = Signal::derive(move || attrs.with(|attrs| attrs.number("height")));
    let tip = Signal::derive(move || attrs.with(|attrs| attrs.text("text").unwrap_or_default()));
    let trigger = text(attrs, "trigger");
    let content = text(attrs, "content");
    let on_click = Callback::new(move |_: ev::MouseEvent| on_action.call(ActionRecord::click()));

    match kind {
        ComponentKind::Brand => view! {
            <Brand name color height title=text(attrs, "name") />
        }
        .into_view(),
        ComponentKind::YooIllustration => view! {
            <YooIllustration name color height />
        }
        .into_view(),
        ComponentKind::Button => view! {
            <Button
                size
                variant=token_or(attrs, "variant", ButtonVariant::Filled)
                color=token_or(attrs, "color", ButtonColor::Primary)
                disabled
                full_width
                label
                icon_left
                icon_right
                on_click
            >
                {move || content.get()}
            </Button>
        }
        .into_view(),
        ComponentKind::YooButton => view! {
            <YooButton
                size
                variant=token_or(attrs, "variant", YooButtonVariant::Primary)
                disabled
                full_width
                label
                icon_left
                icon_right
                on_click
            >
                {move || content.get()}
            </YooButton>
        }
        .into_view(),
        ComponentKind::FilterSearch => view! {
            <FilterSearch
                value=Signal::derive(move || {
                    attrs.with(|attrs| attrs.get("value").unwrap_or_default().to_string())
                })
                placeholder=text(attrs, "placeholder")
                size
                disabled
                on_value_change=Callback::new(move |detail: ValueDetail| {
                    on_action.call(ActionRecord::from_search_event(
                        &FilterSearchEvent::ValueChange(detail),
                    ));
                })
                on_filter_applied=Callback::new(move |detail: ValueDetail| {
                    on_action.call(ActionRecord::from_search_event(
                        &FilterSearchEvent::FilterApplied(detail),
                    ));
                })
            />
        }
        .into_view(),
        ComponentKind::InputGroup => {
            let placeholder = text(attrs, "placeholder");
            let value = text(attrs, "value");
            view! {
                <InputGroup
                    size
                    label
                    helper_text=text(attrs, "helper-text")
                    icon_left
                    icon_right
                    disabled
                    invalid=flag(attrs, "invalid")
                    input_id="docs-input-group-field"
                >
                    <input
                        class="mnt-input-group-input"
                        id="docs-input-group-field"
                        placeholder=move || placeholder.get()
                        prop:value=move || value.get().unwrap_or_default()
                        disabled=move || disabled.get()
                    />
                </InputGroup>
            }
            .into_view()
        }
        ComponentKind::Tooltip => view! {
            <Tooltip text=tip position=token_or(attrs, "position", TooltipPosition::Top)>
                <span class="docs-tooltip-trigger" tabindex="0">
                    {move || trigger.get().unwrap_or_else(|| "Trigger".to_string())}
                </span>
            </Tooltip>
        }
        .into_view(),
        ComponentKind::YooTooltip => view! {
            <YooTooltip text=tip position=token_or(attrs, "position", TooltipPosition::Top)>
                <span class="docs-tooltip-trigger" tabindex="0">
                    {move || trigger.get().unwrap_or_else(|| "Trigger".to_string())}
                </span>
            </YooTooltip>
        }
        .into_view(),
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn search_events_log_with_dom_names_and_value_detail() {
        let record = ActionRecord::from_search_event(&FilterSearchEvent::ValueChange(
            ValueDetail::new(""),
        ));

        assert_eq!(record.event, "valueChange");
        assert_eq!(record.detail, json!({ "value": "" }));
        assert_eq!(
            record.to_log_line(),
            r#"{"event":"valueChange","detail":{"value":""}}"#
        );
    }

    #[test]
    fn clicks_log_an_empty_detail() {
        assert_eq!(
            ActionRecord::click().to_log_line(),
            r#"{"event":"click","detail":{}}"#
        );
    }
}
