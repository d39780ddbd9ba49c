use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Class-string inputs for [`InputGroup`].
pub struct InputGroupClasses {
    /// Size fragment.
    pub size: Option<Size>,
    /// Adds `mnt-input-group-disabled`.
    pub disabled: bool,
    /// Adds `mnt-input-group-invalid`.
    pub invalid: bool,
    /// Adds `mnt-input-group-with-icon-left`.
    pub icon_left: bool,
    /// Adds `mnt-input-group-with-icon-right`.
    pub icon_right: bool,
}

impl InputGroupClasses {
    /// Composed class string.
    pub fn compose(&self) -> String {
        const BASE: &str = "mnt-input-group";
        ClassList::new(BASE)
            .modifier(BASE, self.size.map(Size::token))
            .flag(BASE, "disabled", self.disabled)
            .flag(BASE, "invalid", self.invalid)
            .flag(BASE, "with-icon-left", self.icon_left)
            .flag(BASE, "with-icon-right", self.icon_right)
            .build()
    }
}

#[component]
/// Labeled frame around a caller-supplied input, with optional icons and helper text.
pub fn InputGroup(
    #[prop(into, default = Size::Medium.into())] size: MaybeProp<Size>,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(optional, into)] helper_text: MaybeProp<String>,
    #[prop(optional, into)] icon_left: MaybeProp<IconName>,
    #[prop(optional, into)] icon_right: MaybeProp<IconName>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] invalid: MaybeSignal<bool>,
    /// `id` of the wrapped input, used for the label's `for` attribute.
    #[prop(optional, into)]
    input_id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let size = Signal::derive(move || size.get());
    let icon_left = Signal::derive(move || icon_left.get());
    let icon_right = Signal::derive(move || icon_right.get());
    let classes = create_memo(move |_| {
        let composed = InputGroupClasses {
            size: size.get(),
            disabled: disabled.get(),
            invalid: invalid.get(),
            icon_left: icon_left.with(Option::is_some),
            icon_right: icon_right.with(Option::is_some),
        }
        .compose();
        ClassList::new(&composed).extra(layout_class).build()
    });
    let icon_size = create_memo(move |_| size.get().unwrap_or_default().icon_size());

    view! {
        <div
            class=move || classes.get()
            data-mnt-kind="input-group"
            data-mnt-invalid=move || bool_token(invalid.get())
        >
            {move || label.get().map(|label| view! {
                <label class="mnt-input-group-label" for=input_id.clone()>{label}</label>
            })}
            <div class="mnt-input-group-field">
                {move || icon_left.get().map(|icon| view! {
                    <span class="mnt-input-group-icon mnt-input-group-icon-left" aria-hidden="true">
                        <Icon icon size=icon_size.get() />
                    </span>
                })}
                {children()}
                {move || icon_right.get().map(|icon| view! {
                    <span class="mnt-input-group-icon mnt-input-group-icon-right" aria-hidden="true">
                        <Icon icon size=icon_size.get() />
                    </span>
                })}
            </div>
            {move || helper_text.get().map(|text| view! {
                <span class="mnt-input-group-helper" role=move || invalid.get().then_some("alert")>
                    {text}
                </span>
            })}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn plain_group_carries_only_size() {
        let classes = InputGroupClasses {
            size: Some(Size::Large),
            disabled: false,
            invalid: false,
            icon_left: false,
            icon_right: false,
        };

        assert_eq!(classes.compose(), "mnt-input-group mnt-input-group-large");
    }

    #[test]
    fn state_and_icon_fragments_follow_size() {
        let classes = InputGroupClasses {
            size: Some(Size::Small),
            disabled: true,
            invalid: true,
            icon_left: true,
            icon_right: false,
        };

        assert_eq!(
            classes.compose(),
            "mnt-input-group mnt-input-group-small mnt-input-group-disabled \
             mnt-input-group-invalid mnt-input-group-with-icon-left"
        );
    }
}
