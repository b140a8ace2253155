// SPDX-License-Identifier: MPL-2.0
//! Navigation bar pinned over the top of the page.
//!
//! Shows the page title and one link per labelled section. In compact
//! windows the links collapse behind a toggle button and open as a
//! dropdown under the bar.

use crate::config::defaults::MOBILE_BREAKPOINT;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Vertical,
    widget::{button, Column, Container, Row, Space, Text},
    Element, Length,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub title: &'a str,
    /// `(section id, label)` pairs in page order.
    pub links: Vec<(&'a str, &'a str)>,
    pub menu_open: bool,
    pub window_width: f32,
    pub colors: &'a ColorScheme,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    ToggleMenu,
    LinkPressed(String),
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    /// Scroll the page to the section with this id.
    ScrollTo(String),
}

/// Links collapse behind the toggle at or below the mobile breakpoint.
#[must_use]
pub fn is_compact(window_width: f32) -> bool {
    window_width <= MOBILE_BREAKPOINT
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, menu_open: &mut bool) -> Event {
    match message {
        Message::ToggleMenu => {
            *menu_open = !*menu_open;
            Event::None
        }
        Message::LinkPressed(id) => {
            *menu_open = false;
            Event::ScrollTo(id)
        }
    }
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let compact = is_compact(ctx.window_width);

    let mut content = Column::new().width(Length::Fill);
    content = content.push(build_top_bar(&ctx, compact));

    if compact && ctx.menu_open {
        content = content.push(build_dropdown(&ctx));
    }

    content.into()
}

fn build_top_bar<'a>(ctx: &ViewContext<'a>, compact: bool) -> Element<'a, Message> {
    let title = Text::new(ctx.title.to_owned())
        .size(typography::TITLE_MD)
        .color(ctx.colors.text_primary);

    let mut row = Row::new()
        .spacing(spacing::LG)
        .padding([0.0, sizing::PAGE_PADDING])
        .height(Length::Fixed(sizing::NAV_HEIGHT))
        .align_y(Vertical::Center)
        .push(title)
        .push(Space::new().width(Length::Fill));

    if compact {
        let label = if ctx.menu_open {
            ctx.i18n.tr("nav-menu-close")
        } else {
            ctx.i18n.tr("nav-menu-toggle")
        };
        row = row.push(
            button(Text::new(label))
                .on_press(Message::ToggleMenu)
                .padding(spacing::XS)
                .style(styles::button::nav_link(
                    ctx.colors.text_primary,
                    ctx.colors.brand_primary,
                )),
        );
    } else {
        for (id, label) in &ctx.links {
            row = row.push(link(ctx, id, label));
        }
    }

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::nav_bar(ctx.colors.surface_nav))
        .into()
}

fn build_dropdown<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let menu = ctx
        .links
        .iter()
        .fold(Column::new().spacing(spacing::XXS), |column, (id, label)| {
            column.push(link(ctx, id, label).width(Length::Fill))
        });

    Container::new(menu)
        .width(Length::Fill)
        .padding([spacing::XS, sizing::PAGE_PADDING])
        .style(styles::container::nav_bar(ctx.colors.surface_nav))
        .into()
}

fn link<'a>(ctx: &ViewContext<'a>, id: &str, label: &str) -> button::Button<'a, Message> {
    button(Text::new(label.to_owned()).size(typography::BODY))
        .on_press(Message::LinkPressed(id.to_owned()))
        .height(Length::Fixed(sizing::NAV_MENU_ITEM_HEIGHT))
        .padding([spacing::SM, spacing::XS])
        .style(styles::button::nav_link(
            ctx.colors.text_primary,
            ctx.colors.brand_primary,
        ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::fluent::I18n;

    fn render(menu_open: bool, window_width: f32) {
        let i18n = I18n::default();
        let colors = ColorScheme::light();
        let ctx = ViewContext {
            i18n: &i18n,
            title: "Studio",
            links: vec![("about", "About"), ("work", "Work")],
            menu_open,
            window_width,
            colors: &colors,
        };
        let _element = view(ctx);
    }

    #[test]
    fn navbar_view_renders_wide_and_compact() {
        render(false, 1280.0);
        render(false, 600.0);
        render(true, 600.0);
    }

    #[test]
    fn compact_below_mobile_breakpoint() {
        assert!(is_compact(MOBILE_BREAKPOINT));
        assert!(is_compact(320.0));
        assert!(!is_compact(MOBILE_BREAKPOINT + 1.0));
    }

    #[test]
    fn toggle_menu_changes_state() {
        let mut menu_open = false;
        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(menu_open);
        assert_eq!(event, Event::None);

        let event = update(Message::ToggleMenu, &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::None);
    }

    #[test]
    fn link_closes_menu_and_requests_scroll() {
        let mut menu_open = true;
        let event = update(Message::LinkPressed("work".into()), &mut menu_open);
        assert!(!menu_open);
        assert_eq!(event, Event::ScrollTo("work".into()));
    }
}
