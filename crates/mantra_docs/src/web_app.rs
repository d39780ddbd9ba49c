use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use mantra_ui::attrs::Attributes;
use mantra_ui::{Button, ButtonColor, ButtonVariant, Size};

use crate::preview::{render_story, ActionRecord};
use crate::stories::{ComponentKind, Story};

#[component]
pub fn DocsApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="mantra components" />
        <Meta name="description" content="Interactive previews of the mantra component library." />

        <Router>
            <main class="docs-root">
                <Routes>
                    <Route path="" view=StoryIndex />
                    <Route path="/:component/:story" view=StoryPage />
                    <Route path="/*any" view=UnknownRoute />
                </Routes>
            </main>
        </Router>
    }
}

/// Component list with a link per story.
#[component]
pub fn StoryIndex() -> impl IntoView {
    view! {
        <nav class="docs-index" aria-label="Components">
            <h1>"mantra"</h1>
            {ComponentKind::ALL
                .into_iter()
                .map(|kind| {
                    view! {
                        <section class="docs-index-group">
                            <h2>{kind.title()}</h2>
                            <ul>
                                {kind
                                    .stories()
                                    .map(|story| {
                                        view! {
                                            <li>
                                                <A href=story.path()>{story.title}</A>
                                            </li>
                                        }
                                    })
                                    .collect_view()}
                            </ul>
                        </section>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// Seeds a story's attributes, letting query parameters override the presets.
fn seed_attributes<'a>(
    story: &Story,
    overrides: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> Attributes {
    let mut attrs = story.attributes();
    for (name, value) in overrides {
        attrs.set(name, value);
    }
    attrs
}

/// Reseeds `attrs` and clears the action log whenever the story or its query changes.
fn seed_on_navigation(
    story: Signal<Option<&'static Story>>,
    query: Signal<ParamsMap>,
    attrs: RwSignal<Attributes>,
    actions: RwSignal<Vec<ActionRecord>>,
) {
    create_effect(move |_| {
        let Some(story) = story.get() else {
            return;
        };
        let seeded = query.with(|query| {
            seed_attributes(
                story,
                query.0.iter().map(|(name, value)| (name.as_str(), value.as_str())),
            )
        });
        attrs.set(seeded);
        actions.set(Vec::new());
    });
}

/// Live preview, attribute controls, and action log for one story.
#[component]
pub fn StoryPage() -> impl IntoView {
    let params = use_params_map();
    let query = use_query_map();
    let story = create_memo(move |_| {
        params.with(|map| {
            let component = map.get("component").cloned().unwrap_or_default();
            let slug = map.get("story").cloned().unwrap_or_default();
            Story::find(&component, &slug)
        })
    });

    let attrs = create_rw_signal(Attributes::new());
    let actions = create_rw_signal(Vec::<ActionRecord>::new());

    seed_on_navigation(story.into(), query.into(), attrs, actions);

    let on_action = Callback::new(move |record: ActionRecord| {
        let line = record.to_log_line();
        logging::log!("{line}");
        actions.update(|actions| actions.push(record));
    });

    view! {
        {move || match story.get() {
            None => view! { <UnknownRoute /> }.into_view(),
            Some(story) => view! {
                <Title text=format!("{} / {}", story.component.title(), story.title) />
                <article class="docs-story" data-docs-story=story.path()>
                    <header class="docs-story-header">
                        <A href="/">"All components"</A>
                        <h1>{story.component.title()} " / " {story.title}</h1>
                    </header>
                    <section class="docs-story-preview" aria-label="Preview">
                        {render_story(story.component, attrs.into(), on_action)}
                    </section>
                    <AttributeControls story attrs />
                    <ActionLog actions />
                </article>
            }
            .into_view(),
        }}
    }
}

#[component]
fn AttributeControls(story: &'static Story, attrs: RwSignal<Attributes>) -> impl IntoView {
    let names = create_memo(move |_| {
        attrs.with(|attrs| attrs.iter().map(|(name, _)| name.to_string()).collect::<Vec<_>>())
    });
    let draft_name = create_rw_signal(String::new());
    let draft_value = create_rw_signal(String::new());

    let add_attribute = move |_: ev::MouseEvent| {
        let name = draft_name.get_untracked();
        let name = name.trim();
        if name.is_empty() {
            return;
        }
        attrs.update(|attrs| attrs.set(name, draft_value.get_untracked()));
        draft_name.set(String::new());
        draft_value.set(String::new());
    };

    view! {
        <section class="docs-controls" aria-label="Attributes">
            <h2>"Attributes"</h2>
            <table class="docs-controls-table">
                <tbody>
                    <For
                        each=move || names.get()
                        key=|name| name.clone()
                        children=move |name| {
                            let value_name = name.clone();
                            let input_name = name.clone();
                            let remove_name = name.clone();
                            view! {
                                <tr>
                                    <th scope="row">{name}</th>
                                    <td>
                                        <input
                                            class="docs-controls-value"
                                            prop:value=move || {
                                                attrs.with(|attrs| {
                                                    attrs.get(&value_name).unwrap_or_default().to_string()
                                                })
                                            }
                                            on:input=move |ev| {
                                                let value = event_target_value(&ev);
                                                attrs.update(|attrs| attrs.set(&input_name, value));
                                            }
                                        />
                                    </td>
                                    <td>
                                        <Button
                                            label="Remove"
                                            size=Size::Small
                                            variant=ButtonVariant::Text
                                            color=ButtonColor::Danger
                                            on_click=Callback::new(move |_: ev::MouseEvent| {
                                                attrs.update(|attrs| {
                                                    attrs.remove(&remove_name);
                                                });
                                            })
                                        />
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
            <div class="docs-controls-add">
                <input
                    placeholder="attribute"
                    aria-label="New attribute name"
                    prop:value=move || draft_name.get()
                    on:input=move |ev| draft_name.set(event_target_value(&ev))
                />
                <input
                    placeholder="value"
                    aria-label="New attribute value"
                    prop:value=move || draft_value.get()
                    on:input=move |ev| draft_value.set(event_target_value(&ev))
                />
                <Button
                    label="Add"
                    size=Size::Small
                    variant=ButtonVariant::Outline
                    on_click=Callback::new(add_attribute)
                />
                <Button
                    label="Reset"
                    size=Size::Small
                    variant=ButtonVariant::Text
                    color=ButtonColor::Neutral
                    on_click=Callback::new(move |_: ev::MouseEvent| attrs.set(story.attributes()))
                />
            </div>
        </section>
    }
}

#[component]
fn ActionLog(actions: RwSignal<Vec<ActionRecord>>) -> impl IntoView {
    view! {
        <section class="docs-actions" aria-label="Actions" aria-live="polite">
            <h2>"Actions"</h2>
            <ol class="docs-actions-list">
                {move || {
                    actions
                        .get()
                        .iter()
                        .map(|record| view! { <li><code>{record.to_log_line()}</code></li> })
                        .collect_view()
                }}
            </ol>
            <Button
                label="Clear log"
                size=Size::Small
                variant=ButtonVariant::Text
                color=ButtonColor::Neutral
                on_click=Callback::new(move |_: ev::MouseEvent| actions.set(Vec::new()))
            />
        </section>
    }
}

#[component]
fn UnknownRoute() -> impl IntoView {
    view! {
        <section class="docs-missing">
            <h1>"Story not found"</h1>
            <A href="/">"Back to all components"</A>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn query_overrides_replace_story_presets() {
        let story = Story::find("brand", "ifood").expect("ifood story");

        let attrs = seed_attributes(story, [("name", "yooga"), ("Height", "24")]);

        assert_eq!(attrs.get("name"), Some("yooga"));
        assert_eq!(attrs.number("height"), Some(24));
    }

    #[test]
    fn seeding_without_overrides_matches_the_presets() {
        let story = Story::find("button", "icons").expect("icons story");

        assert_eq!(seed_attributes(story, Vec::new()), story.attributes());
    }

    #[test]
    fn query_changes_on_the_same_story_reseed_attributes() {
        let runtime = create_runtime();
        let story = Story::find("brand", "ifood");
        let query = create_rw_signal(ParamsMap::new());
        let attrs = create_rw_signal(Attributes::new());
        let actions = create_rw_signal(vec![ActionRecord::click()]);

        seed_on_navigation(Signal::derive(move || story), query.into(), attrs, actions);

        assert_eq!(attrs.with_untracked(|attrs| attrs.text("name")), Some("ifood".to_string()));
        assert!(actions.with_untracked(Vec::is_empty));

        actions.update(|actions| actions.push(ActionRecord::click()));
        query.update(|query| {
            query.insert("name".to_string(), "yooga".to_string());
        });

        assert_eq!(attrs.with_untracked(|attrs| attrs.text("name")), Some("yooga".to_string()));
        assert!(actions.with_untracked(Vec::is_empty));
        runtime.dispose();
    }
}
