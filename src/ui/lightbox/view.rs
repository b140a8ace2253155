// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay: backdrop, image canvas and the controls around it.

use super::{ImageCanvas, Lightbox, Message};
use crate::i18n::fluent::I18n;
use crate::page::ImageEntry;
use crate::ui::design_tokens::{opacity, sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{button, canvas, tooltip, Column, Container, Row, Space, Stack, Text};
use iced::{alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub colors: &'a ColorScheme,
    pub lightbox: &'a Lightbox,
}

/// Renders the open lightbox; nothing when it is closed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let lightbox = ctx.lightbox;
    let (Some(index), Some(entry)) = (lightbox.current_index(), lightbox.current()) else {
        return Space::new().into();
    };

    let image = canvas(ImageCanvas {
        source: &entry.item.source,
        transform: lightbox.transform(),
        pressed: lightbox.is_pressed(),
        dragging: lightbox.is_dragging(),
    })
    .width(Length::Fill)
    .height(Length::Fill);

    let backdrop = Container::new(image)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(styles::container::backdrop(ctx.colors.overlay_background));

    Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(backdrop)
        .push(chrome(&ctx, index, entry))
        .into()
}

fn chrome<'a>(ctx: &ViewContext<'a>, index: usize, entry: &'a ImageEntry) -> Element<'a, Message> {
    let lightbox = ctx.lightbox;
    let text_color = ctx.colors.overlay_text;

    let position = ctx.i18n.tr_with_args(
        "lightbox-position",
        &[
            ("current", (index + 1).into()),
            ("total", lightbox.len().into()),
        ],
    );

    let top = Row::new()
        .padding(spacing::MD)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(position).size(typography::BODY).color(text_color))
        .push(Space::new().width(Length::Fill))
        .push(control(
            ctx,
            "×",
            ctx.i18n.tr("lightbox-close"),
            Some(Message::Close),
        ));

    let middle = Row::new()
        .padding([0.0, spacing::MD])
        .height(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .push(control(
            ctx,
            "‹",
            ctx.i18n.tr("lightbox-prev"),
            lightbox.can_prev().then_some(Message::Prev),
        ))
        .push(Space::new().width(Length::Fill))
        .push(control(
            ctx,
            "›",
            ctx.i18n.tr("lightbox-next"),
            lightbox.can_next().then_some(Message::Next),
        ));

    let caption = Container::new(
        Text::new(label(ctx.i18n, entry))
            .size(typography::BODY_LG)
            .color(text_color),
    )
    .width(Length::Fill)
    .height(Length::Fixed(sizing::LIGHTBOX_CAPTION_HEIGHT))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center);

    Column::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(top)
        .push(middle)
        .push(caption)
        .into()
}

/// Caption under the image: the placeholder caption, else the alt text,
/// else a generic label.
#[must_use]
pub fn label(i18n: &I18n, entry: &ImageEntry) -> String {
    entry
        .item
        .caption()
        .or(entry.item.alt.as_deref())
        .map_or_else(|| i18n.tr("lightbox-default-alt"), str::to_owned)
}

fn control<'a>(
    ctx: &ViewContext<'a>,
    glyph: &'a str,
    tip: String,
    message: Option<Message>,
) -> Element<'a, Message> {
    let content = Text::new(glyph)
        .size(typography::TITLE_LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    let control = button(content)
        .on_press_maybe(message)
        .padding(0)
        .width(Length::Fixed(sizing::LIGHTBOX_BUTTON_SIZE))
        .height(Length::Fixed(sizing::LIGHTBOX_BUTTON_SIZE))
        .style(styles::button::overlay(
            ctx.colors.overlay_text,
            opacity::OVERLAY_SUBTLE,
            opacity::OVERLAY_HOVER,
        ));

    tooltip(control, Text::new(tip), tooltip::Position::Bottom)
        .gap(spacing::XXS)
        .into()
}
