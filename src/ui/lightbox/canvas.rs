// SPDX-License-Identifier: MPL-2.0
//! Canvas program that draws the lightbox image and reports pointer input.

use super::{Message, PointerEvent};
use crate::page::ItemSource;
use crate::ui::state::{fit_rect, ImageTransform, Pointer};
use iced::widget::canvas::{Frame, Geometry, Program};
use iced::advanced;
use iced::widget::Action;
use iced::{mouse, touch, Event, Point, Rectangle, Renderer, Theme};

/// Draws one image fitted into the canvas bounds, then transformed.
///
/// Presses outside the drawn image close the lightbox; presses on it start a
/// gesture that the lightbox turns into a zoom toggle or a pan.
pub struct ImageCanvas<'a> {
    pub source: &'a ItemSource,
    pub transform: ImageTransform,
    /// A gesture is in progress, so moves and releases are reported.
    pub pressed: bool,
    pub dragging: bool,
}

impl ImageCanvas<'_> {
    fn fitted(&self, bounds: Rectangle) -> Rectangle {
        fit_rect(
            self.source.natural_size(),
            Rectangle::with_size(bounds.size()),
        )
    }

    fn drawn(&self, bounds: Rectangle) -> Rectangle {
        self.transform.apply(self.fitted(bounds))
    }

    /// What a press at `position` asks for. Presses while a gesture is
    /// already running yield nothing, so a second finger neither closes the
    /// lightbox nor takes over the pan.
    fn press_message(
        &self,
        pointer: Pointer,
        position: Point,
        bounds: Rectangle,
    ) -> Option<Message> {
        if self.pressed {
            return None;
        }
        Some(if self.drawn(bounds).contains(position) {
            Message::Pointer(PointerEvent::Pressed { pointer, position })
        } else {
            Message::Close
        })
    }

    fn press(&self, pointer: Pointer, position: Point, bounds: Rectangle) -> Action<Message> {
        match self.press_message(pointer, position, bounds) {
            Some(message) => Action::publish(message).and_capture(),
            None => Action::capture(),
        }
    }

    fn moved(&self, pointer: Pointer, position: Point) -> Option<Action<Message>> {
        self.pressed.then(|| {
            Action::publish(Message::Pointer(PointerEvent::Moved { pointer, position }))
                .and_capture()
        })
    }

    fn released(&self, pointer: Pointer, bounds: Rectangle) -> Option<Action<Message>> {
        self.pressed.then(|| {
            Action::publish(Message::Pointer(PointerEvent::Released {
                pointer,
                image_box: self.fitted(bounds),
            }))
            .and_capture()
        })
    }

    fn lost(&self, pointer: Pointer) -> Option<Action<Message>> {
        self.pressed
            .then(|| Action::publish(Message::Pointer(PointerEvent::Lost { pointer })))
    }
}

/// Converts a window position into canvas coordinates.
fn relative(position: Point, bounds: Rectangle) -> Point {
    Point::new(position.x - bounds.x, position.y - bounds.y)
}

impl Program<Message> for ImageCanvas<'_> {
    type State = ();

    fn update(
        &self,
        _state: &mut Self::State,
        event: &Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        match event {
            Event::Mouse(mouse::Event::ButtonPressed(mouse::Button::Left)) => cursor
                .position_in(bounds)
                .map(|position| self.press(Pointer::Mouse, position, bounds)),
            Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                let position = cursor.position_in(bounds)?;
                self.moved(Pointer::Mouse, position)
            }
            Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left)) => {
                self.released(Pointer::Mouse, bounds)
            }
            Event::Mouse(mouse::Event::CursorLeft) => self.lost(Pointer::Mouse),
            Event::Touch(touch::Event::FingerPressed { id, position })
                if bounds.contains(*position) =>
            {
                Some(self.press(Pointer::Touch(*id), relative(*position, bounds), bounds))
            }
            Event::Touch(touch::Event::FingerMoved { id, position }) => {
                self.moved(Pointer::Touch(*id), relative(*position, bounds))
            }
            Event::Touch(touch::Event::FingerLifted { id, .. }) => {
                self.released(Pointer::Touch(*id), bounds)
            }
            Event::Touch(touch::Event::FingerLost { id, .. }) => self.lost(Pointer::Touch(*id)),
            _ => None,
        }
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let target = self.drawn(bounds);

        match self.source {
            ItemSource::Image { handle, .. } => {
                frame.draw_image(target, advanced::image::Image::new(handle.clone()));
            }
            ItemSource::Placeholder { handle, .. } => {
                frame.draw_svg(target, advanced::svg::Svg::new(handle.clone()));
            }
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        _state: &Self::State,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        let over_image = cursor
            .position_in(bounds)
            .is_some_and(|position| self.drawn(bounds).contains(position));

        match (over_image, self.transform.is_identity(), self.dragging) {
            (_, false, true) => mouse::Interaction::Grabbing,
            (true, false, false) => mouse::Interaction::Grab,
            (true, true, _) => mouse::Interaction::Pointer,
            (false, _, _) => mouse::Interaction::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::GalleryItem;
    use crate::ui::state::TransformOrigin;
    use iced::{Size, Vector};

    fn bounds() -> Rectangle {
        Rectangle::new(Point::new(0.0, 0.0), Size::new(1000.0, 800.0))
    }

    fn canvas(source: &ItemSource, transform: ImageTransform, pressed: bool) -> ImageCanvas<'_> {
        ImageCanvas {
            source,
            transform,
            pressed,
            dragging: false,
        }
    }

    #[test]
    fn fitted_image_sits_in_the_middle() {
        let item = GalleryItem::placeholder("p");
        let canvas = canvas(&item.source, ImageTransform::IDENTITY, false);
        let center = bounds().center();

        let fitted = canvas.fitted(bounds());
        assert!(fitted.contains(center));
        assert!(!fitted.contains(Point::new(5.0, 5.0)));
    }

    #[test]
    fn zoomed_image_covers_more_of_the_canvas() {
        let item = GalleryItem::placeholder("p");
        let zoomed = ImageTransform {
            scale: 2.0,
            origin: TransformOrigin::CENTER,
            translation: Vector::new(0.0, 0.0),
        };
        let canvas = canvas(&item.source, zoomed, false);
        let fitted = canvas.fitted(bounds());
        let drawn = canvas.drawn(bounds());
        assert!(drawn.width > fitted.width);
        assert!(drawn.contains(Point::new(fitted.x - 10.0, fitted.y - 10.0)));
    }

    #[test]
    fn moves_are_reported_only_during_a_gesture() {
        let item = GalleryItem::placeholder("p");
        let idle = canvas(&item.source, ImageTransform::IDENTITY, false);
        assert!(idle.moved(Pointer::Mouse, Point::ORIGIN).is_none());
        assert!(idle.released(Pointer::Mouse, bounds()).is_none());

        let active = canvas(&item.source, ImageTransform::IDENTITY, true);
        assert!(active.moved(Pointer::Mouse, Point::ORIGIN).is_some());
        assert!(active.released(Pointer::Mouse, bounds()).is_some());
    }

    #[test]
    fn presses_on_and_off_the_image() {
        let item = GalleryItem::placeholder("p");
        let idle = canvas(&item.source, ImageTransform::IDENTITY, false);

        assert!(matches!(
            idle.press_message(Pointer::Mouse, bounds().center(), bounds()),
            Some(Message::Pointer(PointerEvent::Pressed { .. }))
        ));
        assert!(matches!(
            idle.press_message(Pointer::Mouse, Point::new(5.0, 5.0), bounds()),
            Some(Message::Close)
        ));
    }

    #[test]
    fn second_finger_during_a_gesture_is_ignored() {
        let item = GalleryItem::placeholder("p");
        let panning = canvas(&item.source, ImageTransform::IDENTITY, true);
        let second = Pointer::Touch(touch::Finger(2));

        assert!(panning
            .press_message(second, Point::new(5.0, 5.0), bounds())
            .is_none());
        assert!(panning
            .press_message(second, bounds().center(), bounds())
            .is_none());
    }

    #[test]
    fn touch_positions_are_made_relative() {
        let area = Rectangle::new(Point::new(10.0, 20.0), Size::new(100.0, 100.0));
        assert_eq!(relative(Point::new(15.0, 30.0), area), Point::new(5.0, 10.0));
    }
}
