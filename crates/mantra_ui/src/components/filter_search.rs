use leptos::html;

use super::*;
use crate::events::{dispatch_dom_event, FilterSearchEvent, ValueDetail};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
/// Transient state of one [`FilterSearch`] instance.
pub struct FilterSearchState {
    /// Live field contents.
    pub value: String,
    /// Whether the clear icon is offered. Recomputed from `value` on every interaction.
    pub show_clear_button: bool,
}

impl FilterSearchState {
    /// State for a field seeded with `value`.
    pub fn new(value: impl Into<String>) -> Self {
        let mut state = Self {
            value: value.into(),
            show_clear_button: false,
        };
        state.refresh_clear_button();
        state
    }

    fn refresh_clear_button(&mut self) {
        self.show_clear_button = !self.value.is_empty();
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Interactions accepted by [`reduce_filter_search`].
pub enum FilterSearchAction {
    /// The user edited the field.
    Input(String),
    /// The field gained focus.
    Focus,
    /// The field lost focus; commits the filter.
    Blur,
    /// The clear icon was activated.
    Clear,
    /// The host changed the `value` attribute. Emptying a non-empty field counts as a clear.
    ExternalValue(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Side effects requested by [`reduce_filter_search`].
pub enum FilterSearchEffect {
    /// Deliver an event to listeners.
    Emit(FilterSearchEvent),
    /// Move focus back into the text field.
    FocusField,
}

/// Applies a [`FilterSearchAction`] and returns the effects to run, in order.
///
/// A disabled field emits no events. Host-driven value changes are silent unless they empty a
/// non-empty field, which runs the clear sequence.
pub fn reduce_filter_search(
    state: &mut FilterSearchState,
    action: FilterSearchAction,
    disabled: bool,
) -> Vec<FilterSearchEffect> {
    let mut effects = Vec::new();
    match action {
        FilterSearchAction::Input(value) => {
            if disabled {
                return effects;
            }
            state.value = value;
            state.refresh_clear_button();
            effects.push(FilterSearchEffect::Emit(FilterSearchEvent::ValueChange(
                ValueDetail::new(state.value.clone()),
            )));
        }
        FilterSearchAction::Focus => state.refresh_clear_button(),
        FilterSearchAction::Blur => {
            state.refresh_clear_button();
            if !disabled {
                effects.push(FilterSearchEffect::Emit(FilterSearchEvent::FilterApplied(
                    ValueDetail::new(state.value.clone()),
                )));
            }
        }
        FilterSearchAction::Clear => {
            if disabled {
                return effects;
            }
            state.value.clear();
            state.refresh_clear_button();
            effects.push(FilterSearchEffect::FocusField);
            effects.push(FilterSearchEffect::Emit(FilterSearchEvent::ValueChange(
                ValueDetail::default(),
            )));
            effects.push(FilterSearchEffect::Emit(FilterSearchEvent::FilterApplied(
                ValueDetail::default(),
            )));
        }
        FilterSearchAction::ExternalValue(value) => {
            if value.is_empty() && !state.value.is_empty() && !disabled {
                return reduce_filter_search(state, FilterSearchAction::Clear, disabled);
            }
            state.value = value;
            state.refresh_clear_button();
        }
    }
    effects
}

/// Forwards host `value` changes to `dispatch`. Host updates that leave the value as it was are
/// dropped by the memo.
fn sync_external_value(value: Signal<String>, dispatch: Callback<FilterSearchAction>) {
    let value = create_memo(move |_| value.get());
    create_effect(move |_| {
        let next = value.get();
        dispatch.call(FilterSearchAction::ExternalValue(next));
    });
}

/// Runs the clear sequence each time `clear` is notified.
fn sync_clear_trigger(clear: Trigger, dispatch: Callback<FilterSearchAction>) {
    create_effect(move |seen: Option<()>| {
        clear.track();
        if seen.is_some() {
            dispatch.call(FilterSearchAction::Clear);
        }
    });
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Class-string inputs for [`FilterSearch`].
pub struct FilterSearchClasses {
    /// Size fragment.
    pub size: Option<Size>,
    /// Adds `mnt-filter-search-disabled`.
    pub disabled: bool,
}

impl FilterSearchClasses {
    /// Composed class string.
    pub fn compose(&self) -> String {
        const BASE: &str = "mnt-filter-search";
        ClassList::new(BASE)
            .modifier(BASE, self.size.map(Size::token))
            .flag(BASE, "disabled", self.disabled)
            .build()
    }
}

#[component]
/// Search field that filters a list.
///
/// Emits `valueChange` on every edit and `filterApplied` when the value is committed by blur or
/// by the clear icon. Events go to the callbacks and, as bubbling `CustomEvent`s, to DOM
/// listeners on the component root. The host clears the field by setting `value` to `""` or by
/// notifying `clear`.
pub fn FilterSearch(
    /// Host-controlled value. Changes replace the live field contents.
    #[prop(optional, into)]
    value: MaybeSignal<String>,
    #[prop(optional, into)] placeholder: MaybeProp<String>,
    #[prop(into, default = Size::Medium.into())] size: MaybeProp<Size>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] aria_label: MaybeProp<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_value_change: Option<Callback<ValueDetail>>,
    #[prop(optional)] on_filter_applied: Option<Callback<ValueDetail>>,
    /// Programmatic clear, same sequence as the clear icon.
    #[prop(optional)]
    clear: Option<Trigger>,
) -> impl IntoView {
    let size = Signal::derive(move || size.get());
    let placeholder = Signal::derive(move || placeholder.get());
    let aria_label = Signal::derive(move || aria_label.get().or_else(|| placeholder.get()));
    let state = create_rw_signal(FilterSearchState::new(value.get_untracked()));
    let root_ref = create_node_ref::<html::Div>();
    let input_ref = create_node_ref::<html::Input>();

    let deliver = move |event: FilterSearchEvent| {
        if let Some(root) = root_ref.get_untracked() {
            dispatch_dom_event(&root, event.name(), event.detail());
        }
        let callback = match &event {
            FilterSearchEvent::ValueChange(_) => on_value_change,
            FilterSearchEvent::FilterApplied(_) => on_filter_applied,
        };
        if let Some(callback) = callback {
            callback.call(event.detail().clone());
        }
    };

    let dispatch = Callback::new(move |action: FilterSearchAction| {
        let mut next = state.get_untracked();
        let effects = reduce_filter_search(&mut next, action, disabled.get_untracked());
        if state.with_untracked(|current| *current != next) {
            state.set(next);
        }
        for effect in effects {
            match effect {
                FilterSearchEffect::FocusField => {
                    if let Some(input) = input_ref.get_untracked() {
                        if let Err(err) = input.focus() {
                            logging::warn!("filter search focus failed: {err:?}");
                        }
                    }
                }
                FilterSearchEffect::Emit(event) => deliver(event),
            }
        }
    });

    sync_external_value(Signal::derive(move || value.get()), dispatch);
    if let Some(clear) = clear {
        sync_clear_trigger(clear, dispatch);
    }

    let classes = create_memo(move |_| {
        let composed = FilterSearchClasses {
            size: size.get(),
            disabled: disabled.get(),
        }
        .compose();
        ClassList::new(&composed).extra(layout_class).build()
    });
    let icon_size = create_memo(move |_| size.get().unwrap_or_default().icon_size());
    let show_clear = create_memo(move |_| {
        state.with(|state| state.show_clear_button) && !disabled.get()
    });

    view! {
        <div
            class=move || classes.get()
            node_ref=root_ref
            data-mnt-kind="filter-search"
            data-mnt-disabled=move || bool_token(disabled.get())
        >
            <span class="mnt-filter-search-icon" aria-hidden="true">
                {move || view! { <Icon icon=IconName::Search size=icon_size.get() /> }}
            </span>
            <input
                class="mnt-filter-search-input"
                type="search"
                id=id
                node_ref=input_ref
                placeholder=move || placeholder.get()
                aria-label=move || aria_label.get()
                autocomplete="off"
                disabled=move || disabled.get()
                prop:value=move || state.with(|state| state.value.clone())
                on:input=move |ev| dispatch.call(FilterSearchAction::Input(event_target_value(&ev)))
                on:focus=move |_| dispatch.call(FilterSearchAction::Focus)
                on:blur=move |_| dispatch.call(FilterSearchAction::Blur)
            />
            <Show when=move || show_clear.get()>
                <button
                    type="button"
                    class="mnt-filter-search-clear"
                    aria-label="Clear search"
                    on:mousedown=move |ev| ev.prevent_default()
                    on:click=move |_| dispatch.call(FilterSearchAction::Clear)
                >
                    {move || view! { <Icon icon=IconName::Dismiss size=icon_size.get() /> }}
                </button>
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn emitted(effects: &[FilterSearchEffect]) -> Vec<FilterSearchEvent> {
        effects
            .iter()
            .filter_map(|effect| match effect {
                FilterSearchEffect::Emit(event) => Some(event.clone()),
                FilterSearchEffect::FocusField => None,
            })
            .collect()
    }

    #[test]
    fn input_updates_value_flag_and_emits_value_change() {
        let mut state = FilterSearchState::default();

        let effects = reduce_filter_search(
            &mut state,
            FilterSearchAction::Input("piz".to_string()),
            false,
        );

        assert_eq!(state.value, "piz");
        assert!(state.show_clear_button);
        assert_eq!(
            effects,
            vec![FilterSearchEffect::Emit(FilterSearchEvent::ValueChange(
                ValueDetail::new("piz")
            ))]
        );
    }

    #[test]
    fn blur_commits_the_current_value() {
        let mut state = FilterSearchState::new("pizza");

        let effects = reduce_filter_search(&mut state, FilterSearchAction::Blur, false);

        assert_eq!(
            emitted(&effects),
            vec![FilterSearchEvent::FilterApplied(ValueDetail::new("pizza"))]
        );
    }

    #[test]
    fn typing_then_clearing_emits_empty_change_and_commit_and_refocuses() {
        let mut state = FilterSearchState::default();
        reduce_filter_search(
            &mut state,
            FilterSearchAction::Input("sushi".to_string()),
            false,
        );

        let effects = reduce_filter_search(&mut state, FilterSearchAction::Clear, false);

        assert_eq!(state, FilterSearchState::default());
        assert!(effects.contains(&FilterSearchEffect::FocusField));
        assert_eq!(
            emitted(&effects),
            vec![
                FilterSearchEvent::ValueChange(ValueDetail::new("")),
                FilterSearchEvent::FilterApplied(ValueDetail::new("")),
            ]
        );
    }

    #[test]
    fn disabled_field_emits_nothing() {
        let mut state = FilterSearchState::new("burger");
        let mut effects = Vec::new();

        for action in [
            FilterSearchAction::Input("burgers".to_string()),
            FilterSearchAction::Focus,
            FilterSearchAction::Blur,
            FilterSearchAction::Clear,
        ] {
            effects.extend(reduce_filter_search(&mut state, action, true));
        }

        assert!(effects.is_empty());
        assert_eq!(state.value, "burger");
    }

    #[test]
    fn external_value_replaces_contents_silently() {
        let mut state = FilterSearchState::new("old");

        let effects = reduce_filter_search(
            &mut state,
            FilterSearchAction::ExternalValue("new".to_string()),
            false,
        );

        assert!(effects.is_empty());
        assert_eq!(state.value, "new");
        assert!(state.show_clear_button);
    }

    #[test]
    fn typing_then_host_clearing_runs_the_clear_sequence() {
        let mut state = FilterSearchState::default();
        reduce_filter_search(
            &mut state,
            FilterSearchAction::Input("sushi".to_string()),
            false,
        );

        let effects = reduce_filter_search(
            &mut state,
            FilterSearchAction::ExternalValue(String::new()),
            false,
        );

        assert_eq!(state, FilterSearchState::default());
        assert!(effects.contains(&FilterSearchEffect::FocusField));
        assert_eq!(
            emitted(&effects),
            vec![
                FilterSearchEvent::ValueChange(ValueDetail::new("")),
                FilterSearchEvent::FilterApplied(ValueDetail::new("")),
            ]
        );
    }

    #[test]
    fn host_emptying_an_empty_or_disabled_field_stays_silent() {
        let mut empty = FilterSearchState::default();
        assert!(reduce_filter_search(
            &mut empty,
            FilterSearchAction::ExternalValue(String::new()),
            false
        )
        .is_empty());

        let mut disabled = FilterSearchState::new("burger");
        let effects = reduce_filter_search(
            &mut disabled,
            FilterSearchAction::ExternalValue(String::new()),
            true,
        );
        assert!(effects.is_empty());
        assert_eq!(disabled.value, "");
    }

    fn reducing_dispatch(
        state: RwSignal<FilterSearchState>,
        seen: RwSignal<Vec<FilterSearchAction>>,
    ) -> Callback<FilterSearchAction> {
        Callback::new(move |action: FilterSearchAction| {
            seen.update(|seen| seen.push(action.clone()));
            state.update(|state| {
                reduce_filter_search(state, action, false);
            });
        })
    }

    #[test]
    fn unrelated_host_updates_keep_the_typed_value() {
        let runtime = create_runtime();
        let host = create_rw_signal(("pizza".to_string(), "Buscar".to_string()));
        let state = create_rw_signal(FilterSearchState::new("pizza"));
        let seen = create_rw_signal(Vec::new());
        let dispatch = reducing_dispatch(state, seen);

        sync_external_value(
            Signal::derive(move || host.with(|(value, _)| value.clone())),
            dispatch,
        );
        dispatch.call(FilterSearchAction::Input("pizza margherita".to_string()));
        host.update(|(_, placeholder)| *placeholder = "Filtrar".to_string());

        assert_eq!(state.with_untracked(|state| state.value.clone()), "pizza margherita");

        host.update(|(value, _)| *value = "sushi".to_string());

        assert_eq!(state.with_untracked(|state| state.value.clone()), "sushi");
        assert_eq!(
            seen.get_untracked(),
            vec![
                FilterSearchAction::ExternalValue("pizza".to_string()),
                FilterSearchAction::Input("pizza margherita".to_string()),
                FilterSearchAction::ExternalValue("sushi".to_string()),
            ]
        );
        runtime.dispose();
    }

    #[test]
    fn clear_trigger_dispatches_clear_per_notification() {
        let runtime = create_runtime();
        let state = create_rw_signal(FilterSearchState::new("tacos"));
        let seen = create_rw_signal(Vec::new());
        let clear = create_trigger();

        sync_clear_trigger(clear, reducing_dispatch(state, seen));
        assert!(seen.with_untracked(Vec::is_empty));

        clear.notify();

        assert_eq!(seen.get_untracked(), vec![FilterSearchAction::Clear]);
        assert_eq!(state.get_untracked(), FilterSearchState::default());
        runtime.dispose();
    }

    #[test]
    fn focus_recomputes_clear_button_flag() {
        let mut state = FilterSearchState {
            value: "tacos".to_string(),
            show_clear_button: false,
        };

        let effects = reduce_filter_search(&mut state, FilterSearchAction::Focus, false);

        assert!(effects.is_empty());
        assert!(state.show_clear_button);
    }

    #[test]
    fn class_contract_uses_mnt_prefix() {
        assert_eq!(
            FilterSearchClasses {
                size: Some(Size::Medium),
                disabled: false,
            }
            .compose(),
            "mnt-filter-search mnt-filter-search-medium"
        );
        assert_eq!(
            FilterSearchClasses {
                size: Some(Size::Small),
                disabled: true,
            }
            .compose(),
            "mnt-filter-search mnt-filter-search-small mnt-filter-search-disabled"
        );
    }
}
