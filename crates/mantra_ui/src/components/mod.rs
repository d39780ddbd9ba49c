//! Branded components built on the shared tokens, icon catalog, and asset tables.

use leptos::ev::MouseEvent;
use leptos::*;

use crate::tokens::{bool_token, ClassList};
use crate::{Icon, IconName, Size};

mod brand;
mod button;
mod filter_search;
mod graphic;
mod input_group;
mod tooltip;
mod yoo_button;
mod yoo_illustration;
mod yoo_tooltip;

pub use brand::Brand;
pub use button::{Button, ButtonClasses, ButtonContent};
pub use filter_search::{
    reduce_filter_search, FilterSearch, FilterSearchAction, FilterSearchClasses,
    FilterSearchEffect, FilterSearchState,
};
pub use input_group::{InputGroup, InputGroupClasses};
pub use tooltip::{reduce_tooltip, Tooltip, TooltipAction, TooltipClasses, TooltipState};
pub use yoo_button::YooButton;
pub use yoo_illustration::YooIllustration;
pub use yoo_tooltip::YooTooltip;
