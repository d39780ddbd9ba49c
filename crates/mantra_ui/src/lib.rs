//! mantra branded UI component library.
//!
//! The crate owns the Leptos components shared by mantra and Yooga surfaces: brand logos,
//! buttons, search and input chrome, tooltips, and illustrations. Each component keeps three
//! layers apart:
//!
//! - configuration props, typed through the token enums in this crate (or parsed from markup
//!   attributes with [`attrs::Attributes`]),
//! - derived display state (class strings, resolved graphics, icon sizes), always recomputed
//!   from configuration and never stored on its own,
//! - transient interaction state, mutated only by the `reduce_*` functions.
//!
//! The class names rendered by components are a public contract consumed by external
//! stylesheets.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod assets;
pub mod attrs;
mod components;
pub mod events;
mod icon;
mod tokens;

pub use components::{
    reduce_filter_search, reduce_tooltip, Brand, Button, ButtonClasses, ButtonContent,
    FilterSearch, FilterSearchAction, FilterSearchClasses, FilterSearchEffect, FilterSearchState,
    InputGroup, InputGroupClasses, Tooltip, TooltipAction, TooltipClasses, TooltipState,
    YooButton, YooIllustration, YooTooltip,
};
pub use events::{FilterSearchEvent, ValueDetail};
pub use icon::{Icon, IconName, IconSize};
pub use tokens::{
    ButtonColor, ButtonVariant, ClassList, Size, TooltipPosition, YooButtonVariant,
};

/// Convenience imports for crates rendering mantra components.
pub mod prelude {
    pub use crate::attrs::{Attributes, FromAttr};
    pub use crate::{
        Brand, Button, ButtonColor, ButtonVariant, FilterSearch, FilterSearchEvent, Icon, IconName,
        IconSize, InputGroup, Size, Tooltip, TooltipPosition, ValueDetail, YooButton,
        YooButtonVariant, YooIllustration, YooTooltip,
    };
}
