//! Collapsible layout regions and a lockstep collapse toggle for [`iced`].
//!
//! This crate is split into two layers:
//! - model helpers ([`Marker`], [`Region`], [`Document`], [`SidebarToggle`],
//!   [`CollapsibleLayout`], [`CollapseRules`]) that are UI-agnostic;
//! - a view helper ([`LayoutView`]) that renders the three regions in `iced`.
//!
//! The sidebar, top bar and main content each carry a `collapsed` marker. A
//! toggle flips the marker on all three; [`CollapseRules`] turns the markers
//! into geometry.
//!
//! # Quick Example
//!
//! ```
//! use panefold_ui_regions::{
//!     CollapsedState, Document, Element, SidebarToggle,
//! };
//!
//! let mut page: Document = ["sidebar", "topbar", "main-content"]
//!     .into_iter()
//!     .map(Element::new)
//!     .collect();
//!
//! let toggle = SidebarToggle::default();
//! assert_eq!(toggle.toggle(&mut page), Ok(CollapsedState::Collapsed));
//! assert_eq!(toggle.toggle(&mut page), Ok(CollapsedState::Expanded));
//! ```

mod document;
mod errors;
mod layout;
mod marker;
mod region;
mod rules;
mod toggle;
mod view;

pub use document::{Document, RegionSource};
pub use errors::{MarkerError, RegionIdsError, RulesError, ToggleError};
pub use layout::CollapsibleLayout;
pub use marker::{Marker, MarkerSet};
pub use region::{Element, Region, RegionIds, RegionRole};
pub use rules::{CollapseRules, LayoutGeometry, RegionRule};
pub use toggle::{CollapsedState, SidebarToggle, ToggleMode};
pub use view::LayoutView;
