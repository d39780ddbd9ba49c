use leptos::svg;

use super::*;
use crate::assets::{log_lookup_failure, Asset, AssetError, AssetTable, ResolvedGraphic};

/// Name-keyed table lookup. The name is memoized first so host updates that leave it unchanged
/// never reach `report`.
fn create_asset_lookup(
    table: &'static AssetTable,
    name: Signal<String>,
    report: impl Fn(&AssetError) + 'static,
) -> Memo<Option<&'static Asset>> {
    let name = create_memo(move |_| name.get());
    create_memo(move |_| name.with(|name| table.lookup_reported(name, &report)))
}

/// Table-backed SVG shared by [`crate::Brand`] and [`crate::YooIllustration`].
///
/// The lookup reruns only when `name` changes, so an unknown name is reported once per
/// resolution. Overrides are applied on top of the looked-up row in a second memo. The raw
/// markup is not part of the view tree; it is injected into the `<svg>` after each render pass
/// that changes it.
#[component]
pub(crate) fn AssetGraphic(
    table: &'static AssetTable,
    prefix: &'static str,
    name: MaybeSignal<String>,
    color: Signal<Option<String>>,
    height: Signal<Option<u32>>,
    title: Signal<Option<String>>,
    layout_class: Option<&'static str>,
) -> impl IntoView {
    let name = Signal::derive(move || name.get());
    let asset = create_asset_lookup(table, name, log_lookup_failure);
    let graphic = create_memo(move |_| {
        let color = color.get();
        ResolvedGraphic::build(asset.get(), color.as_deref(), height.get())
    });
    let classes = create_memo(move |_| {
        ClassList::new(prefix)
            .flag(prefix, "empty", graphic.with(ResolvedGraphic::is_empty))
            .extra(layout_class)
            .build()
    });
    let svg_ref = create_node_ref::<svg::Svg>();

    create_effect(move |_| {
        let markup = graphic.with(|graphic| graphic.markup);
        if let Some(svg) = svg_ref.get() {
            svg.set_inner_html(markup);
        }
    });

    view! {
        <svg
            node_ref=svg_ref
            class=move || classes.get()
            data-mnt-kind=prefix
            data-mnt-name=move || name.get()
            xmlns="http://www.w3.org/2000/svg"
            viewBox=move || graphic.with(|graphic| graphic.view_box.clone())
            width=move || graphic.with(|graphic| graphic.width)
            height=move || graphic.with(|graphic| graphic.height)
            fill=move || graphic.with(|graphic| graphic.fill.clone())
            role="img"
            aria-label=move || title.get()
            aria-hidden=move || title.with(Option::is_none).then_some("true")
        ></svg>
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use pretty_assertions::assert_eq;

    use super::*;
    use crate::assets::BRANDS;

    #[test]
    fn override_edits_do_not_repeat_the_unknown_name_report() {
        let runtime = create_runtime();
        let host = create_rw_signal(("acme".to_string(), None::<String>));
        let reports = Rc::new(Cell::new(0));
        let counter = Rc::clone(&reports);

        let asset = create_asset_lookup(
            &BRANDS,
            Signal::derive(move || host.with(|(name, _)| name.clone())),
            move |_| counter.set(counter.get() + 1),
        );
        let graphic = create_memo(move |_| {
            let color = host.with(|(_, color)| color.clone());
            ResolvedGraphic::build(asset.get(), color.as_deref(), None)
        });

        assert!(graphic.with_untracked(ResolvedGraphic::is_empty));
        host.update(|(_, color)| *color = Some("#ff0000".to_string()));
        assert_eq!(graphic.with_untracked(|graphic| graphic.fill.clone()), "#ff0000");
        assert_eq!(reports.get(), 1);

        host.update(|(name, _)| *name = "ifood".to_string());
        assert!(!graphic.with_untracked(ResolvedGraphic::is_empty));
        host.update(|(name, _)| *name = "globex".to_string());
        assert!(graphic.with_untracked(ResolvedGraphic::is_empty));
        assert_eq!(reports.get(), 2);
        runtime.dispose();
    }
}
