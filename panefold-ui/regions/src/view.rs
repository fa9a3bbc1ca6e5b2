use iced::widget::{Stack, column, container};
use iced::{Element, Length, Padding, Theme};

use crate::rules::LayoutGeometry;

const DEFAULT_TOPBAR_HEIGHT: f32 = 48.0;

type RegionStyle<'a> = dyn Fn(&Theme) -> container::Style + 'a;

/// Composes sidebar, top bar and main content into one layout.
///
/// The sidebar is pinned to the leading edge above the other regions; the top
/// bar and main content are pushed right by their resolved offsets. A sidebar
/// width of `0` removes the sidebar layer entirely.
pub struct LayoutView<'a, Message> {
    sidebar: Element<'a, Message>,
    topbar: Element<'a, Message>,
    main_content: Element<'a, Message>,
    geometry: LayoutGeometry,
    topbar_height: f32,
    sidebar_style: Option<Box<RegionStyle<'a>>>,
    topbar_style: Option<Box<RegionStyle<'a>>>,
}

impl<'a, Message: 'a> LayoutView<'a, Message> {
    pub fn new(
        geometry: LayoutGeometry,
        sidebar: impl Into<Element<'a, Message>>,
        topbar: impl Into<Element<'a, Message>>,
        main_content: impl Into<Element<'a, Message>>,
    ) -> Self {
        Self {
            sidebar: sidebar.into(),
            topbar: topbar.into(),
            main_content: main_content.into(),
            geometry,
            topbar_height: DEFAULT_TOPBAR_HEIGHT,
            sidebar_style: None,
            topbar_style: None,
        }
    }

    pub fn topbar_height(mut self, height: f32) -> Self {
        self.topbar_height = height;
        self
    }

    /// Provide the container style of the sidebar layer.
    pub fn sidebar_style(
        mut self,
        style: impl Fn(&Theme) -> container::Style + 'a,
    ) -> Self {
        self.sidebar_style = Some(Box::new(style));
        self
    }

    /// Provide the container style of the top bar.
    pub fn topbar_style(
        mut self,
        style: impl Fn(&Theme) -> container::Style + 'a,
    ) -> Self {
        self.topbar_style = Some(Box::new(style));
        self
    }

    pub fn view(self) -> Element<'a, Message> {
        let geometry = self.geometry;

        let mut topbar = container(self.topbar)
            .width(Length::Fill)
            .height(Length::Fixed(self.topbar_height))
            .padding(Padding::ZERO.left(geometry.topbar_offset));
        if let Some(style) = self.topbar_style {
            topbar = topbar.style(move |theme| style(theme));
        }

        let main_content = container(self.main_content)
            .width(Length::Fill)
            .height(Length::Fill)
            .padding(Padding::ZERO.left(geometry.main_content_offset));

        let body = column![topbar, main_content]
            .width(Length::Fill)
            .height(Length::Fill);

        let mut layers = Stack::new()
            .width(Length::Fill)
            .height(Length::Fill)
            .push(body);

        if geometry.sidebar_width > 0.0 {
            let mut sidebar = container(self.sidebar)
                .width(Length::Fixed(geometry.sidebar_width))
                .height(Length::Fill);
            if let Some(style) = self.sidebar_style {
                sidebar = sidebar.style(move |theme| style(theme));
            }
            layers = layers.push(sidebar);
        }

        layers.into()
    }
}
