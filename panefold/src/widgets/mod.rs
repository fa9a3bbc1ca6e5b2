pub(crate) mod layout;

/// Container for all widget instances.
pub(crate) struct Widgets {
    pub(crate) layout: layout::LayoutWidget,
}
