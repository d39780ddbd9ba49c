use super::*;
use crate::TooltipPosition;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Transient visibility of a tooltip bubble. Starts hidden.
pub struct TooltipState {
    /// Whether the bubble is shown.
    pub visible: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Interaction events that drive [`TooltipState`].
pub enum TooltipAction {
    /// Pointer entered the trigger.
    PointerEnter,
    /// Pointer left the trigger.
    PointerLeave,
    /// Focus moved into the trigger.
    FocusIn,
    /// Focus moved out of the trigger.
    FocusOut,
}

/// Applies a [`TooltipAction`]. Returns whether visibility changed.
pub fn reduce_tooltip(state: &mut TooltipState, action: TooltipAction) -> bool {
    let visible = matches!(action, TooltipAction::PointerEnter | TooltipAction::FocusIn);
    let changed = state.visible != visible;
    state.visible = visible;
    changed
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Class-string inputs for the tooltip family.
pub struct TooltipClasses<'a> {
    /// Base class and fragment prefix.
    pub prefix: &'a str,
    /// Placement fragment.
    pub position: Option<TooltipPosition>,
    /// Adds `<prefix>-visible`.
    pub visible: bool,
}

impl TooltipClasses<'_> {
    /// Composed class string.
    pub fn compose(&self) -> String {
        ClassList::new(self.prefix)
            .modifier(self.prefix, self.position.map(TooltipPosition::token))
            .flag(self.prefix, "visible", self.visible)
            .build()
    }
}

#[component]
/// mantra tooltip. Wraps its trigger children and shows `text` on hover or focus.
pub fn Tooltip(
    #[prop(into)] text: MaybeSignal<String>,
    #[prop(into, default = TooltipPosition::Top.into())] position: MaybeProp<TooltipPosition>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <TooltipFrame
            prefix="mnt-tooltip"
            text
            position=Signal::derive(move || position.get())
            layout_class
            trigger=children
        />
    }
}

/// Markup shared by [`Tooltip`] and [`crate::YooTooltip`].
#[component]
pub(crate) fn TooltipFrame(
    prefix: &'static str,
    text: MaybeSignal<String>,
    position: Signal<Option<TooltipPosition>>,
    layout_class: Option<&'static str>,
    trigger: Children,
) -> impl IntoView {
    let state = create_rw_signal(TooltipState::default());
    let dispatch = Callback::new(move |action: TooltipAction| {
        let mut next = state.get_untracked();
        if reduce_tooltip(&mut next, action) {
            state.set(next);
        }
    });
    let classes = create_memo(move |_| {
        let composed = TooltipClasses {
            prefix,
            position: position.get(),
            visible: state.with(|state| state.visible),
        }
        .compose();
        ClassList::new(&composed).extra(layout_class).build()
    });

    view! {
        <div
            class=move || classes.get()
            data-mnt-kind=prefix
            data-mnt-visible=move || bool_token(state.with(|state| state.visible))
            on:pointerenter=move |_| dispatch.call(TooltipAction::PointerEnter)
            on:pointerleave=move |_| dispatch.call(TooltipAction::PointerLeave)
            on:focusin=move |_| dispatch.call(TooltipAction::FocusIn)
            on:focusout=move |_| dispatch.call(TooltipAction::FocusOut)
        >
            <span class=format!("{prefix}-trigger")>{trigger()}</span>
            <span
                class=format!("{prefix}-bubble")
                role="tooltip"
                aria-hidden=move || bool_token(!state.with(|state| state.visible))
            >
                {move || text.get()}
            </span>
        </div>
    }
}
