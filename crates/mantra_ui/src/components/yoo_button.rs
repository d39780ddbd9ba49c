use super::button::{ButtonClasses, ButtonFrame};
use super::*;
use crate::YooButtonVariant;

#[component]
/// Yooga-branded action button. Same content rules as [`crate::Button`], with the `yoo-button`
/// class family and no color axis.
pub fn YooButton(
    #[prop(into, default = Size::Medium.into())] size: MaybeProp<Size>,
    #[prop(into, default = YooButtonVariant::Primary.into())] variant: MaybeProp<YooButtonVariant>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] full_width: MaybeSignal<bool>,
    #[prop(optional, into)] label: MaybeProp<String>,
    #[prop(optional, into)] icon_left: MaybeProp<IconName>,
    #[prop(optional, into)] icon_right: MaybeProp<IconName>,
    #[prop(optional, into)] aria_label: MaybeProp<String>,
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] children: Option<ChildrenFn>,
) -> impl IntoView {
    let size = Signal::derive(move || size.get());
    let classes = Signal::derive(move || {
        let composed = yoo_button_classes(
            size.get(),
            variant.get(),
            disabled.get(),
            full_width.get(),
        );
        ClassList::new(&composed).extra(layout_class).build()
    });

    view! {
        <ButtonFrame
            kind="yoo-button"
            prefix="yoo-button"
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

fn yoo_button_classes(
    size: Option<Size>,
    variant: Option<YooButtonVariant>,
    disabled: bool,
    full_width: bool,
) -> String {
    ButtonClasses {
        prefix: "yoo-button",
        size,
        variant: variant.map(YooButtonVariant::token),
        color: None,
        disabled,
        full_width,
    }
    .compose()
}
