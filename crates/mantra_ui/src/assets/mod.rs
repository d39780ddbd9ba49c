//! Static name-to-asset tables and graphic resolution.
//!
//! Brand logos and illustrations ship as raw SVG body markup keyed by a symbolic name. Tables
//! are immutable; per-instance overrides (color, height) are applied on the resolved copy.

use std::fmt;

use thiserror::Error;

mod brands;
mod illustrations;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// One table row.
pub struct Asset {
    /// Lookup key.
    pub name: &'static str,
    /// SVG body markup, without the outer `<svg>` element.
    pub markup: &'static str,
    /// Default fill color.
    pub color: &'static str,
    /// Intrinsic width in viewBox units.
    pub width: u32,
    /// Intrinsic height in viewBox units.
    pub height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Kind of asset a table holds. Used in diagnostics.
pub enum AssetKind {
    /// Partner and product logos.
    Brand,
    /// Spot illustrations.
    Illustration,
}

impl fmt::Display for AssetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Brand => "brand",
            Self::Illustration => "illustration",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
/// Asset lookup failures.
pub enum AssetError {
    /// No table row matches the requested name.
    #[error("{kind} with name {name} does not exist")]
    UnknownName {
        /// Table that was searched.
        kind: AssetKind,
        /// Requested name.
        name: String,
    },
}

#[derive(Debug, Clone, Copy)]
/// Immutable name-to-asset table.
pub struct AssetTable {
    kind: AssetKind,
    entries: &'static [Asset],
}

/// Brand logo table.
pub static BRANDS: AssetTable = AssetTable::new(AssetKind::Brand, brands::ENTRIES);

/// Illustration table.
pub static ILLUSTRATIONS: AssetTable =
    AssetTable::new(AssetKind::Illustration, illustrations::ENTRIES);

impl AssetTable {
    /// Wraps a static row slice.
    pub const fn new(kind: AssetKind, entries: &'static [Asset]) -> Self {
        Self { kind, entries }
    }

    /// Kind of asset held.
    pub const fn kind(&self) -> AssetKind {
        self.kind
    }

    /// All rows in declaration order.
    pub const fn entries(&self) -> &'static [Asset] {
        self.entries
    }

    /// All lookup keys in declaration order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> {
        self.entries.iter().map(|asset| asset.name)
    }

    /// Finds the row for `name`.
    ///
    /// # Errors
    ///
    /// Returns [`AssetError::UnknownName`] when no row matches.
    pub fn lookup(&self, name: &str) -> Result<&'static Asset, AssetError> {
        self.entries
            .iter()
            .find(|asset| asset.name == name)
            .ok_or_else(|| AssetError::UnknownName {
                kind: self.kind,
                name: name.to_string(),
            })
    }

    /// Finds the row for `name`, handing a failed lookup to `report` exactly once.
    pub fn lookup_reported(
        &self,
        name: &str,
        mut report: impl FnMut(&AssetError),
    ) -> Option<&'static Asset> {
        match self.lookup(name.trim()) {
            Ok(asset) => Some(asset),
            Err(err) => {
                report(&err);
                None
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Display-ready graphic derived from a table row and per-instance overrides.
pub struct ResolvedGraphic {
    /// `viewBox` attribute value.
    pub view_box: String,
    /// Effective fill color.
    pub fill: String,
    /// Rendered width in px.
    pub width: u32,
    /// Rendered height in px.
    pub height: u32,
    /// Raw SVG body to inject.
    pub markup: &'static str,
}

impl ResolvedGraphic {
    /// Builds the graphic for an optional row. Blank color overrides are ignored so an empty
    /// `color=""` attribute falls back to the table default.
    pub fn build(asset: Option<&Asset>, color: Option<&str>, height: Option<u32>) -> Self {
        let color = color.map(str::trim).filter(|color| !color.is_empty());
        match asset {
            Some(asset) => Self::from_asset(asset, color, height),
            None => Self::empty(color, height),
        }
    }

    /// Degraded graphic rendered for unknown names.
    pub fn empty(color: Option<&str>, height: Option<u32>) -> Self {
        Self {
            view_box: "0 0 0 0".to_string(),
            fill: color.unwrap_or("currentColor").to_string(),
            width: 0,
            height: height.unwrap_or(0),
            markup: "",
        }
    }

    /// Applies overrides to a table row. The row itself is left untouched.
    pub fn from_asset(asset: &Asset, color: Option<&str>, height: Option<u32>) -> Self {
        let (width, height) = match height {
            Some(height) if asset.height > 0 => {
                let scaled = (u64::from(asset.width) * u64::from(height) * 2
                    + u64::from(asset.height))
                    / (u64::from(asset.height) * 2);
                (u32::try_from(scaled).unwrap_or(u32::MAX), height)
            }
            Some(height) => (asset.width, height),
            None => (asset.width, asset.height),
        };

        Self {
            view_box: format!("0 0 {} {}", asset.width, asset.height),
            fill: color.unwrap_or(asset.color).to_string(),
            width,
            height,
            markup: asset.markup,
        }
    }

    /// Whether the lookup produced any markup.
    pub fn is_empty(&self) -> bool {
        self.markup.is_empty()
    }
}

/// One-shot lookup plus override resolution.
pub fn resolve_graphic(
    table: &AssetTable,
    name: &str,
    color: Option<&str>,
    height: Option<u32>,
    report: impl FnMut(&AssetError),
) -> ResolvedGraphic {
    ResolvedGraphic::build(table.lookup_reported(name, report), color, height)
}

/// Diagnostic sink used by rendered components.
pub(crate) fn log_lookup_failure(err: &AssetError) {
    leptos::logging::warn!("{err}");
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn ifood_resolves_to_table_color_and_view_box() {
        let graphic = resolve_graphic(&BRANDS, "ifood", None, None, |_| {});

        assert_eq!(graphic.fill, "#E8222A");
        assert_eq!(graphic.view_box, "0 0 96 48");
        assert_eq!((graphic.width, graphic.height), (96, 48));
        assert!(!graphic.is_empty());
    }

    #[test]
    fn color_override_wins_without_mutating_the_table() {
        let graphic = resolve_graphic(&BRANDS, "yooga", Some("#ff0000"), None, |_| {});
        assert_eq!(graphic.fill, "#ff0000");

        let untouched = BRANDS.lookup("yooga").expect("yooga row");
        assert_ne!(untouched.color, "#ff0000");
        let again = resolve_graphic(&BRANDS, "yooga", None, None, |_| {});
        assert_eq!(again.fill, untouched.color);
    }

    #[test]
    fn blank_color_override_falls_back_to_table_default() {
        let graphic = resolve_graphic(&BRANDS, "ifood", Some("  "), None, |_| {});
        assert_eq!(graphic.fill, "#E8222A");
    }

    #[test]
    fn height_override_keeps_aspect_ratio() {
        let graphic = resolve_graphic(&BRANDS, "ifood", None, Some(24), |_| {});

        assert_eq!((graphic.width, graphic.height), (48, 24));
        assert_eq!(graphic.view_box, "0 0 96 48");
    }

    #[test]
    fn every_table_row_matches_its_recorded_size_and_color() {
        for table in [&BRANDS, &ILLUSTRATIONS] {
            for asset in table.entries() {
                let graphic = resolve_graphic(table, asset.name, None, None, |err| {
                    panic!("unexpected lookup failure: {err}")
                });
                assert_eq!(graphic.fill, asset.color);
                assert_eq!(
                    graphic.view_box,
                    format!("0 0 {} {}", asset.width, asset.height)
                );
                assert!(asset.markup.starts_with('<'), "{} markup", asset.name);
            }
        }
    }

    #[test]
    fn table_names_are_unique() {
        for table in [&BRANDS, &ILLUSTRATIONS] {
            let mut names: Vec<_> = table.names().collect();
            let total = names.len();
            names.sort_unstable();
            names.dedup();
            assert_eq!(names.len(), total, "duplicate {} name", table.kind());
        }
    }

    #[test]
    fn unknown_name_reports_once_and_renders_empty() {
        let mut reported = Vec::new();
        let graphic = resolve_graphic(&ILLUSTRATIONS, "unicorn", None, Some(120), |err| {
            reported.push(err.to_string())
        });

        assert_eq!(
            reported,
            vec!["illustration with name unicorn does not exist".to_string()]
        );
        assert!(graphic.is_empty());
        assert_eq!(graphic.view_box, "0 0 0 0");
        assert_eq!(graphic.height, 120);
    }

    #[test]
    fn known_name_never_reports() {
        let mut calls = 0;
        let asset = BRANDS.lookup_reported(" rappi ", |_| calls += 1);

        assert_eq!(asset.map(|asset| asset.name), Some("rappi"));
        assert_eq!(calls, 0);
    }

    #[test]
    fn brand_lookup_errors_name_the_brand_table() {
        let err = BRANDS.lookup("acme").expect_err("acme is not a brand");
        assert_eq!(err.to_string(), "brand with name acme does not exist");
    }
}
