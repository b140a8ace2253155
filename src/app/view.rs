// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The window is a stack of layers: the scrolling page, the navigation bar
//! pinned on top of it, an optional notice and, while open, the lightbox.
//! Section sizes come from the computed [`PageLayout`](crate::page::layout::PageLayout)
//! so navigation offsets match what is drawn.

use super::{page_scrollable_id, App, Message};
use crate::page::layout::SectionLayout;
use crate::page::{GalleryId, Page, Section};
use crate::ui::carousel::{self, ViewContext as CarouselViewContext};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::lightbox::{self, ViewContext as LightboxViewContext};
use crate::ui::navbar::{self, ViewContext as NavbarViewContext};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::scroll_lock;
use iced::widget::text::LineHeight;
use iced::widget::{button, opaque, Column, Container, Row, Scrollable, Stack, Text};
use iced::{alignment, Element, Length, Padding};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let colors = &app.theme.colors;

    let page = Scrollable::new(page_content(app, colors))
        .id(page_scrollable_id())
        .width(Length::Fill)
        .height(Length::Fill);

    let navbar = navbar::view(NavbarViewContext {
        i18n: &app.i18n,
        title: &app.page.title,
        links: app.page.nav_links().collect(),
        menu_open: app.menu_open,
        window_width: app.window_size.width,
        colors,
    })
    .map(Message::Navbar);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(scroll_lock(page).locked(app.lightbox.is_open()))
        .push(navbar);

    if let Some(notice) = &app.notice {
        layers = layers.push(notice_toast(notice));
    }

    if app.lightbox.is_open() {
        let lightbox = lightbox::view(LightboxViewContext {
            i18n: &app.i18n,
            colors,
            lightbox: &app.lightbox,
        })
        .map(Message::Lightbox);
        layers = layers.push(opaque(lightbox));
    }

    layers.into()
}

fn page_content<'a>(app: &'a App, colors: &'a ColorScheme) -> Element<'a, Message> {
    let mut column = Column::new().width(Length::Fill).push(hero(&app.page, colors));

    let mut gallery_index = 0;
    for (index, (section, layout)) in app
        .page
        .sections
        .iter()
        .zip(&app.layout.sections)
        .enumerate()
    {
        let gallery = section.gallery.as_ref().map(|_| {
            let id = GalleryId(gallery_index);
            gallery_index += 1;
            id
        });
        let background = if index % 2 == 0 {
            colors.surface_primary
        } else {
            colors.surface_secondary
        };

        column = column.push(
            Container::new(section_body(app, colors, section, layout, gallery))
                .width(Length::Fill)
                .height(Length::Fixed(layout.height))
                .padding([sizing::SECTION_PADDING, 0.0])
                .align_x(alignment::Horizontal::Center)
                .style(styles::container::surface(background)),
        );
    }

    column.into()
}

fn hero<'a>(page: &'a Page, colors: &ColorScheme) -> Element<'a, Message> {
    let mut content = Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(
            Text::new(page.title.as_str())
                .size(typography::DISPLAY)
                .color(colors.text_primary),
        );

    if let Some(tagline) = &page.tagline {
        content = content.push(
            Text::new(tagline.as_str())
                .size(typography::BODY_LG)
                .color(colors.text_secondary),
        );
    }

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::HERO_HEIGHT))
        .padding([sizing::NAV_HEIGHT, sizing::PAGE_PADDING])
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(styles::container::surface(colors.surface_secondary))
        .into()
}

fn section_body<'a>(
    app: &'a App,
    colors: &'a ColorScheme,
    section: &'a Section,
    layout: &SectionLayout,
    gallery: Option<GalleryId>,
) -> Element<'a, Message> {
    let mut body = Column::new()
        .width(Length::Fixed(app.layout.content_width))
        .push(
            Container::new(
                Text::new(section.heading.as_str())
                    .size(typography::TITLE_LG)
                    .color(colors.text_primary),
            )
            .height(Length::Fixed(sizing::HEADING_HEIGHT))
            .align_y(alignment::Vertical::Center),
        );

    for (paragraph, height) in section.paragraphs.iter().zip(&layout.paragraph_heights) {
        body = body.push(
            Container::new(
                Text::new(paragraph.as_str())
                    .size(typography::BODY)
                    .line_height(LineHeight::Absolute(typography::BODY_LINE_HEIGHT.into()))
                    .color(colors.text_secondary),
            )
            .padding(top_padding(sizing::PARAGRAPH_SPACING))
            .height(Length::Fixed(sizing::PARAGRAPH_SPACING + height)),
        );
    }

    if let Some(carousel_view) = gallery.and_then(|id| gallery_view(app, colors, id)) {
        body = body.push(
            Container::new(carousel_view).padding(top_padding(sizing::GALLERY_MARGIN)),
        );
    }

    body.into()
}

fn top_padding(top: f32) -> Padding {
    Padding {
        top,
        ..Padding::ZERO
    }
}

fn gallery_view<'a>(
    app: &'a App,
    colors: &'a ColorScheme,
    id: GalleryId,
) -> Option<Element<'a, Message>> {
    let gallery = app.page.gallery(id)?;
    let carousel = app
        .carousels
        .iter()
        .find(|carousel| carousel.gallery() == id)?;

    Some(
        carousel::view(CarouselViewContext {
            i18n: &app.i18n,
            colors,
            carousel,
            gallery,
        })
        .map(move |message| Message::Carousel(id, message)),
    )
}

fn notice_toast(notice: &str) -> Element<'_, Message> {
    let toast = Container::new(
        Row::new()
            .spacing(spacing::SM)
            .align_y(alignment::Vertical::Center)
            .push(Text::new(notice).size(typography::BODY))
            .push(
                button(Text::new("×").size(typography::BODY_LG))
                    .on_press(Message::DismissNotice)
                    .padding([0.0, spacing::XS])
                    .style(button::text),
            ),
    )
    .padding(spacing::SM)
    .max_width(sizing::MAX_CONTENT_WIDTH / 2.0)
    .style(styles::container::notice);

    Container::new(toast)
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(spacing::LG)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_page_renders_with_every_layer() {
        let mut app = App::default();
        app.notice = Some("Settings could not be read".into());
        let _ = view(&app);

        let key = crate::page::ItemKey::new(GalleryId(0), 0);
        assert!(app.lightbox.open(&app.page, key));
        let _ = view(&app);
    }
}
