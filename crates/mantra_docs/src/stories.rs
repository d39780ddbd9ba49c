//! Static story catalog.

use mantra_ui::attrs::Attributes;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Components with a preview page.
pub enum ComponentKind {
    /// [`mantra_ui::Brand`].
    Brand,
    /// [`mantra_ui::Button`].
    Button,
    /// [`mantra_ui::FilterSearch`].
    FilterSearch,
    /// [`mantra_ui::InputGroup`].
    InputGroup,
    /// [`mantra_ui::Tooltip`].
    Tooltip,
    /// [`mantra_ui::YooButton`].
    YooButton,
    /// [`mantra_ui::YooIllustration`].
    YooIllustration,
    /// [`mantra_ui::YooTooltip`].
    YooTooltip,
}

impl ComponentKind {
    /// Every component in index order.
    pub const ALL: [ComponentKind; 8] = [
        Self::Brand,
        Self::Button,
        Self::FilterSearch,
        Self::InputGroup,
        Self::Tooltip,
        Self::YooButton,
        Self::YooIllustration,
        Self::YooTooltip,
    ];

    /// Route segment.
    pub const fn slug(self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::Button => "button",
            Self::FilterSearch => "filter-search",
            Self::InputGroup => "input-group",
            Self::Tooltip => "tooltip",
            Self::YooButton => "yoo-button",
            Self::YooIllustration => "yoo-illustration",
            Self::YooTooltip => "yoo-tooltip",
        }
    }

    /// Display name.
    pub const fn title(self) -> &'static str {
        match self {
            Self::Brand => "Brand",
            Self::Button => "Button",
            Self::FilterSearch => "FilterSearch",
            Self::InputGroup => "InputGroup",
            Self::Tooltip => "Tooltip",
            Self::YooButton => "YooButton",
            Self::YooIllustration => "YooIllustration",
            Self::YooTooltip => "YooTooltip",
        }
    }

    /// Resolves a route segment.
    pub fn from_slug(slug: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.slug() == slug)
    }

    /// Stories for this component in catalog order.
    pub fn stories(self) -> impl Iterator<Item = &'static Story> {
        STORIES.iter().filter(move |story| story.component == self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One attribute preset for a component.
pub struct Story {
    /// Component rendered.
    pub component: ComponentKind,
    /// Route segment, unique per component.
    pub slug: &'static str,
    /// Display name.
    pub title: &'static str,
    /// Default attributes.
    pub attributes: &'static [(&'static str, &'static str)],
}

impl Story {
    /// Default attributes as an editable map.
    pub fn attributes(&self) -> Attributes {
        Attributes::from_pairs(self.attributes.iter().copied())
    }

    /// Route path of the story page.
    pub fn path(&self) -> String {
        format!("/{}/{}", self.component.slug(), self.slug)
    }

    /// Looks up a story by route segments.
    pub fn find(component: &str, slug: &str) -> Option<&'static Story> {
        let component = ComponentKind::from_slug(component)?;
        component.stories().find(|story| story.slug == slug)
    }
}

/// Catalog of every story, grouped by component.
pub static STORIES: &[Story] = &[
    Story {
        component: ComponentKind::Brand,
        slug: "ifood",
        title: "iFood",
        attributes: &[("name", "ifood")],
    },
    Story {
        component: ComponentKind::Brand,
        slug: "color-override",
        title: "Color override",
        attributes: &[("name", "yooga"), ("color", "#ff0000")],
    },
    Story {
        component: ComponentKind::Brand,
        slug: "scaled",
        title: "Scaled by height",
        attributes: &[("name", "rappi"), ("height", "24")],
    },
    Story {
        component: ComponentKind::Brand,
        slug: "unknown",
        title: "Unknown name",
        attributes: &[("name", "not-a-brand")],
    },
    Story {
        component: ComponentKind::Button,
        slug: "primary",
        title: "Primary",
        attributes: &[("label", "Confirmar")],
    },
    Story {
        component: ComponentKind::Button,
        slug: "large-outline",
        title: "Large outline",
        attributes: &[("label", "Ver cardápio"), ("size", "large"), ("variant", "outline")],
    },
    Story {
        component: ComponentKind::Button,
        slug: "icons",
        title: "With icons",
        attributes: &[
            ("label", "Adicionar"),
            ("icon-left", "add"),
            ("icon-right", "chevron-down"),
        ],
    },
    Story {
        component: ComponentKind::Button,
        slug: "disabled",
        title: "Disabled",
        attributes: &[("label", "Indisponível"), ("color", "neutral"), ("disabled", "")],
    },
    Story {
        component: ComponentKind::Button,
        slug: "full-width",
        title: "Full width",
        attributes: &[("label", "Finalizar pedido"), ("color", "success"), ("full-width", "")],
    },
    Story {
        component: ComponentKind::Button,
        slug: "nested-content",
        title: "Nested content",
        attributes: &[("content", "Conteúdo aninhado"), ("variant", "text")],
    },
    Story {
        component: ComponentKind::FilterSearch,
        slug: "default",
        title: "Default",
        attributes: &[("placeholder", "Buscar produto")],
    },
    Story {
        component: ComponentKind::FilterSearch,
        slug: "prefilled",
        title: "Prefilled",
        attributes: &[("placeholder", "Buscar produto"), ("value", "pizza")],
    },
    Story {
        component: ComponentKind::FilterSearch,
        slug: "small",
        title: "Small",
        attributes: &[("placeholder", "Filtrar"), ("size", "small")],
    },
    Story {
        component: ComponentKind::FilterSearch,
        slug: "disabled",
        title: "Disabled",
        attributes: &[("value", "bloqueado"), ("disabled", "")],
    },
    Story {
        component: ComponentKind::InputGroup,
        slug: "default",
        title: "Default",
        attributes: &[
            ("label", "E-mail"),
            ("placeholder", "nome@empresa.com"),
            ("helper-text", "Usado para o envio das notas fiscais"),
        ],
    },
    Story {
        component: ComponentKind::InputGroup,
        slug: "with-icons",
        title: "With icons",
        attributes: &[
            ("label", "Pesquisar"),
            ("icon-left", "search"),
            ("icon-right", "filter"),
            ("size", "large"),
        ],
    },
    Story {
        component: ComponentKind::InputGroup,
        slug: "invalid",
        title: "Invalid",
        attributes: &[
            ("label", "CNPJ"),
            ("value", "12.345"),
            ("invalid", ""),
            ("icon-right", "warning"),
            ("helper-text", "CNPJ incompleto"),
        ],
    },
    Story {
        component: ComponentKind::Tooltip,
        slug: "top",
        title: "Top",
        attributes: &[("text", "Pedidos dos últimos 30 dias"), ("trigger", "Passe o mouse")],
    },
    Story {
        component: ComponentKind::Tooltip,
        slug: "bottom",
        title: "Bottom",
        attributes: &[
            ("text", "Abaixo"),
            ("position", "bottom"),
            ("trigger", "Passe o mouse"),
        ],
    },
    Story {
        component: ComponentKind::Tooltip,
        slug: "left",
        title: "Left",
        attributes: &[("text", "À esquerda"), ("position", "left"), ("trigger", "Foco")],
    },
    Story {
        component: ComponentKind::Tooltip,
        slug: "right",
        title: "Right",
        attributes: &[("text", "À direita"), ("position", "right"), ("trigger", "Foco")],
    },
    Story {
        component: ComponentKind::YooButton,
        slug: "primary",
        title: "Primary",
        attributes: &[("label", "Começar agora")],
    },
    Story {
        component: ComponentKind::YooButton,
        slug: "secondary",
        title: "Secondary",
        attributes: &[("label", "Saiba mais"), ("variant", "secondary")],
    },
    Story {
        component: ComponentKind::YooButton,
        slug: "tertiary",
        title: "Tertiary",
        attributes: &[
            ("label", "Próximo"),
            ("variant", "tertiary"),
            ("icon-right", "arrow-right"),
        ],
    },
    Story {
        component: ComponentKind::YooButton,
        slug: "link",
        title: "Link",
        attributes: &[("label", "Termos de uso"), ("variant", "link"), ("size", "small")],
    },
    Story {
        component: ComponentKind::YooIllustration,
        slug: "empty-box",
        title: "Empty box",
        attributes: &[("name", "empty-box")],
    },
    Story {
        component: ComponentKind::YooIllustration,
        slug: "search-not-found",
        title: "Search not found",
        attributes: &[("name", "search-not-found"), ("height", "100")],
    },
    Story {
        component: ComponentKind::YooIllustration,
        slug: "connection-error",
        title: "Connection error",
        attributes: &[("name", "connection-error")],
    },
    Story {
        component: ComponentKind::YooIllustration,
        slug: "success",
        title: "Success",
        attributes: &[("name", "success"), ("color", "#0A7C3E")],
    },
    Story {
        component: ComponentKind::YooIllustration,
        slug: "maintenance",
        title: "Maintenance",
        attributes: &[("name", "maintenance")],
    },
    Story {
        component: ComponentKind::YooIllustration,
        slug: "unknown",
        title: "Unknown name",
        attributes: &[("name", "not-an-illustration")],
    },
    Story {
        component: ComponentKind::YooTooltip,
        slug: "default",
        title: "Default",
        attributes: &[("text", "Sincronizado há 2 minutos"), ("trigger", "Status")],
    },
];

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use mantra_ui::assets::{BRANDS, ILLUSTRATIONS};
    use mantra_ui::{ButtonColor, ButtonVariant, IconName, Size, TooltipPosition, YooButtonVariant};
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn every_component_has_a_story_and_paths_are_unique() {
        for kind in ComponentKind::ALL {
            assert!(kind.stories().next().is_some(), "{} has no story", kind.title());
        }

        let paths: HashSet<String> = STORIES.iter().map(Story::path).collect();
        assert_eq!(paths.len(), STORIES.len());
    }

    #[test]
    fn stories_resolve_from_their_route_segments() {
        for story in STORIES {
            let found = Story::find(story.component.slug(), story.slug).expect("story by path");
            assert_eq!(found, story);
        }
        assert_eq!(Story::find("brand", "missing"), None);
        assert_eq!(Story::find("carousel", "ifood"), None);
    }

    #[test]
    fn enumerated_story_attributes_are_recognized_tokens() {
        for story in STORIES {
            let attrs = story.attributes();
            if attrs.get("size").is_some() {
                assert!(attrs.token::<Size>("size").is_some(), "{}", story.path());
            }
            if attrs.get("position").is_some() {
                assert!(attrs.token::<TooltipPosition>("position").is_some());
            }
            for icon in ["icon-left", "icon-right"] {
                if attrs.get(icon).is_some() {
                    assert!(attrs.token::<IconName>(icon).is_some(), "{}", story.path());
                }
            }
            match story.component {
                ComponentKind::Button => {
                    assert!(attrs.token_or("variant", ButtonVariant::Filled).is_some());
                    assert!(attrs.token_or("color", ButtonColor::Primary).is_some());
                }
                ComponentKind::YooButton => {
                    assert!(attrs.token_or("variant", YooButtonVariant::Primary).is_some());
                }
                _ => {}
            }
        }
    }

    #[test]
    fn asset_stories_name_real_rows_except_the_unknown_ones() {
        for story in STORIES {
            let table = match story.component {
                ComponentKind::Brand => &BRANDS,
                ComponentKind::YooIllustration => &ILLUSTRATIONS,
                _ => continue,
            };
            let name = story.attributes().text("name").expect("asset story name");
            assert_eq!(
                table.lookup(&name).is_ok(),
                story.slug != "unknown",
                "{}",
                story.path()
            );
        }
    }
}
