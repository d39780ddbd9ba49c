use super::*;
use crate::{ButtonColor, ButtonVariant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Class-string inputs for the button family.
///
/// `None` tokens come from unrecognized attribute values and produce no fragment.
pub struct ButtonClasses<'a> {
    /// Base class, also the prefix of every fragment.
    pub prefix: &'a str,
    /// Size fragment.
    pub size: Option<Size>,
    /// Variant fragment.
    pub variant: Option<&'a str>,
    /// Color fragment.
    pub color: Option<&'a str>,
    /// Adds `<prefix>-disabled`.
    pub disabled: bool,
    /// Adds `<prefix>-full-width`.
    pub full_width: bool,
}

impl ButtonClasses<'_> {
    /// Composed class string, fragments in size, variant, color, disabled, full-width order.
    pub fn compose(&self) -> String {
        ClassList::new(self.prefix)
            .modifier(self.prefix, self.size.map(Size::token))
            .modifier(self.prefix, self.variant)
            .modifier(self.prefix, self.color)
            .flag(self.prefix, "disabled", self.disabled)
            .flag(self.prefix, "full-width", self.full_width)
            .build()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Which children a button renders.
pub enum ButtonContent {
    /// Icon-left, label, and icon-right slots, each only when supplied.
    Composed,
    /// The nested children passed by the caller.
    Nested,
}

impl ButtonContent {
    /// Nested children are the fallback when no label and no icon is supplied.
    pub fn resolve(has_label: bool, has_icon_left: bool, has_icon_right: bool) -> Self {
        if has_label || has_icon_left || has_icon_right {
            Self::Composed
        } else {
            Self::Nested
        }
    }
}

#[component]
/// mantra action button.
pub fn Button(
    #[prop(into, default = Size::Medium.into())] size: MaybeProp<Size>,
    #[prop(into, default = ButtonVariant::Filled.into())] variant: MaybeProp<ButtonVariant>,
    #[prop(into, default = ButtonColor::Primary.into())] color: MaybeProp<ButtonColor>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] full_width: MaybeSignal<bool>,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(optional, into)] icon_left: MaybeProp<IconName>,
    #[prop(optional, into)] icon_right: MaybeProp<IconName>,
    #[prop(optional, into)] aria_label: MaybeProp<String>,
    /// Native `type` attribute. Defaults to `button`.
    #[prop(optional)]
    button_type: Option<&'static str>,
    /// Extra class appended after the composed fragments.
    #[prop(optional)]
    layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let size = Signal::derive(move || size.get());
    let classes = Signal::derive(move || {
        let composed = ButtonClasses {
            prefix: "button",
            size: size.get(),
            variant: variant.get().map(ButtonVariant::token),
            color: color.get().map(ButtonColor::token),
            disabled: disabled.get(),
            full_width: full_width.get(),
        }
        .compose();
        ClassList::new(&composed).extra(layout_class).build()
    });

    view! {
        <ButtonFrame
            kind="button"
            prefix="button"
            classes
            size
            disabled
            label=Signal::derive(move || label.get())
            icon_left=Signal::derive(move || icon_left.get())
            icon_right=Signal::derive(move || icon_right.get())
            aria_label=Signal::derive(move || aria_label.get())
            button_type=button_type.unwrap_or("button")
            on_click
            nested=children
        />
    }
}

/// Markup shared by [`Button`] and [`crate::YooButton`].
#[component]
pub(crate) fn ButtonFrame(
    kind: &'static str,
    prefix: &'static str,
    classes: Signal<String>,
    size: Signal<Option<Size>>,
    disabled: MaybeSignal<bool>,
    label: Signal<Option<String>>,
    icon_left: Signal<Option<IconName>>,
    icon_right: Signal<Option<IconName>>,
    aria_label: Signal<Option<String>>,
    button_type: &'static str,
    on_click: Option<Callback<MouseEvent>>,
    nested: Option<ChildrenFn>,
) -> impl IntoView {
    let classes = create_memo(move |_| classes.get());
    let content = create_memo(move |_| {
        ButtonContent::resolve(
            label.with(|label| label.is_some()),
            icon_left.with(|icon| icon.is_some()),
            icon_right.with(|icon| icon.is_some()),
        )
    });
    let icon_size = create_memo(move |_| size.get().unwrap_or_default().icon_size());

    view! {
        <button
            type=button_type
            class=move || classes.get()
            aria-label=move || aria_label.get()
            disabled=move || disabled.get()
            aria-disabled=move || bool_token(disabled.get())
            data-mnt-kind=kind
            on:click=move |ev| {
                if disabled.get_untracked() {
                    return;
                }
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {move || match content.get() {
                ButtonContent::Composed => view! {
                    {icon_left.get().map(|icon| view! {
                        <span class=format!("{prefix}-icon {prefix}-icon-left")>
                            <Icon icon size=icon_size.get() />
                        </span>
                    })}
                    {label.get().map(|label| view! {
                        <span class=format!("{prefix}-label")>{label}</span>
                    })}
                    {icon_right.get().map(|icon| view! {
                        <span class=format!("{prefix}-icon {prefix}-icon-right")>
                            <Icon icon size=icon_size.get() />
                        </span>
                    })}
                }
                .into_view(),
                ButtonContent::Nested => render_nested(nested.as_ref()),
            }}
        </button>
    }
}

/// Fresh nodes for the nested slot on every switch back to [`ButtonContent::Nested`].
fn render_nested(nested: Option<&ChildrenFn>) -> View {
    match nested {
        Some(children) => children().into_view(),
        None => ().into_view(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;

    fn classes(size: Option<Size>) -> ButtonClasses<'static> {
        ButtonClasses {
            prefix: "button",
            size,
            variant: Some(ButtonVariant::Filled.token()),
            color: Some(ButtonColor::Primary.token()),
            disabled: false,
            full_width: false,
        }
    }

    #[test]
    fn composes_size_variant_and_color_fragments() {
        assert_eq!(
            classes(Some(Size::Large)).compose(),
            "button button-large button-filled button-primary"
        );
    }

    #[test]
    fn disabled_and_full_width_append_in_order() {
        let composed = ButtonClasses {
            disabled: true,
            full_width: true,
            variant: Some(ButtonVariant::Outline.token()),
            color: Some(ButtonColor::Danger.token()),
            ..classes(Some(Size::Small))
        }
        .compose();

        assert_eq!(
            composed,
            "button button-small button-outline button-danger button-disabled button-full-width"
        );
    }

    #[test]
    fn unrecognized_tokens_drop_their_fragment() {
        let composed = ButtonClasses {
            variant: None,
            ..classes(None)
        }
        .compose();

        assert_eq!(composed, "button button-primary");
    }

    #[test]
    fn nested_children_are_the_fallback_only_without_label_or_icons() {
        assert_eq!(ButtonContent::resolve(false, false, false), ButtonContent::Nested);
        assert_eq!(ButtonContent::resolve(true, false, false), ButtonContent::Composed);
        assert_eq!(ButtonContent::resolve(false, true, false), ButtonContent::Composed);
        assert_eq!(ButtonContent::resolve(false, false, true), ButtonContent::Composed);
    }

    #[test]
    fn nested_children_render_anew_each_time() {
        let runtime = create_runtime();
        let renders = Rc::new(Cell::new(0));
        let counter = Rc::clone(&renders);
        let nested: ChildrenFn = Rc::new(move || {
            counter.set(counter.get() + 1);
            Fragment::new(Vec::new())
        });

        render_nested(Some(&nested));
        render_nested(Some(&nested));
        render_nested(None);

        assert_eq!(renders.get(), 2);
        runtime.dispose();
    }
}
