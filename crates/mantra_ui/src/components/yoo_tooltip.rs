use super::tooltip::TooltipFrame;
use super::*;
use crate::TooltipPosition;

#[component]
/// Yooga-branded tooltip with the `yoo-tooltip` class family.
pub fn YooTooltip(
    #[prop(into)] text: MaybeSignal<String>,
    #[prop(into, default = TooltipPosition::Top.into())] position: MaybeProp<TooltipPosition>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <TooltipFrame
            prefix="yoo-tooltip"
            text
            position=Signal::derive(move || position.get())
            layout_class
            trigger=children
        />
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use crate::TooltipClasses;
    use super::*;

    #[test]
    fn shares_the_tooltip_class_contract_under_its_own_prefix() {
        let classes = TooltipClasses {
            prefix: "yoo-tooltip",
            position: Some(TooltipPosition::Right),
            visible: true,
        };

        assert_eq!(
            classes.compose(),
            "yoo-tooltip yoo-tooltip-right yoo-tooltip-visible"
        );
    }
}
