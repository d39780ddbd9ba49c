use super::graphic::AssetGraphic;
use super::*;
use crate::assets::BRANDS;

#[component]
/// Partner or product logo looked up by `name`.
///
/// `color` replaces the logo's default fill and `height` rescales it keeping its aspect ratio.
/// Unknown names log a diagnostic and render an empty graphic.
pub fn Brand(
    #[prop(into)] name: MaybeSignal<String>,
    #[prop(optional, into)] color: MaybeProp<String>,
    #[prop(optional, into)] height: MaybeProp<u32>,
    /// Accessible name. The logo is decorative when unset.
    #[prop(optional, into)]
    title: MaybeProp<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <AssetGraphic
            table=&BRANDS
            prefix="mnt-brand"
            name
            color=Signal::derive(move || color.get())
            height=Signal::derive(move || height.get())
            title=Signal::derive(move || title.get())
            layout_class
        />
    }
}
