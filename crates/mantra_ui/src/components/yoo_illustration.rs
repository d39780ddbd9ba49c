use super::graphic::AssetGraphic;
use super::*;
use crate::assets::ILLUSTRATIONS;

#[component]
/// Yooga spot illustration looked up by `name`.
pub fn YooIllustration(
    #[prop(into)] name: MaybeSignal<String>,
    #[prop(optional, into)] color: MaybeProp<String>,
    #[prop(optional, into)] height: MaybeProp<u32>,
    #[prop(optional, into)] title: MaybeProp<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <AssetGraphic
            table=&ILLUSTRATIONS
            prefix="yoo-illustration"
            name
            color=Signal::derive(move || color.get())
            height=Signal::derive(move || height.get())
            title=Signal::derive(move || title.get())
            layout_class
        />
    }
}
