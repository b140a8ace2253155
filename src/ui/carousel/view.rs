// SPDX-License-Identifier: MPL-2.0
//! Carousel rendering: arrows on both sides of a locked horizontal track.

use super::{Carousel, Message};
use crate::config::defaults::CAROUSEL_GAP;
use crate::i18n::fluent::I18n;
use crate::page::{layout, Gallery, GalleryItem, ItemSource};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::scroll_lock;
use iced::widget::scrollable::{Direction, Scrollbar};
use iced::widget::{
    button, container, image, mouse_area, svg, tooltip, Container, Row, Scrollable, Text,
};
use iced::{alignment, mouse, ContentFit, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub carousel: &'a Carousel,
    pub gallery: &'a Gallery,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let carousel = ctx.carousel;
    let height = layout::gallery_height(carousel.item_count(), carousel.item_width());

    let track: Element<'a, Message> = if carousel.is_empty() {
        Container::new(Text::new(ctx.i18n.tr("carousel-empty")).size(typography::BODY))
            .width(Length::Fill)
            .height(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .align_y(alignment::Vertical::Center)
            .style(styles::container::empty_gallery)
            .into()
    } else {
        build_track(&ctx)
    };

    let prev = arrow("‹", ctx.i18n.tr("carousel-prev"), carousel.can_prev(), Message::Prev);
    let next = arrow("›", ctx.i18n.tr("carousel-next"), carousel.can_next(), Message::Next);

    Row::new()
        .spacing(spacing::XS)
        .height(Length::Fixed(height))
        .align_y(alignment::Vertical::Center)
        .push(prev)
        .push(Container::new(track).width(Length::Fill).height(Length::Fill))
        .push(next)
        .into()
}

fn build_track<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let carousel = ctx.carousel;
    let width = carousel.item_width();
    let height = layout::item_height(width);

    let items = ctx
        .gallery
        .items
        .iter()
        .enumerate()
        .fold(Row::new().spacing(CAROUSEL_GAP), |row, (index, item)| {
            row.push(thumbnail(ctx.colors, item, index, width, height))
        });

    let track = Scrollable::new(items)
        .id(carousel.track_id().clone())
        .direction(Direction::Horizontal(Scrollbar::hidden()))
        .width(Length::Fill)
        .height(Length::Fixed(height));

    container(scroll_lock(track))
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn thumbnail<'a>(
    colors: &ColorScheme,
    item: &'a GalleryItem,
    index: usize,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match &item.source {
        ItemSource::Image { handle, .. } => image(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        ItemSource::Placeholder { handle, .. } => svg(handle.clone())
            .content_fit(ContentFit::Cover)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
    };

    let framed = Container::new(picture)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .clip(true)
        .style(styles::container::thumbnail(colors.placeholder_background));

    mouse_area(framed)
        .on_press(Message::ItemPressed(index))
        .interaction(mouse::Interaction::Pointer)
        .into()
}

fn arrow<'a>(glyph: &'a str, label: String, enabled: bool, message: Message) -> Element<'a, Message> {
    let content = Text::new(glyph)
        .size(typography::TITLE_LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let arrow = button(content)
        .on_press_maybe(enabled.then_some(message))
        .padding(0)
        .width(Length::Fixed(sizing::CAROUSEL_ARROW_SIZE))
        .height(Length::Fixed(sizing::CAROUSEL_ARROW_SIZE))
        .style(styles::button::carousel_arrow);

    tooltip(arrow, Text::new(label), tooltip::Position::Top)
        .gap(spacing::XXS)
        .into()
}
