// SPDX-License-Identifier: MPL-2.0
#![doc = r#"
# Design Tokens

Centralized visual constants.

## Organization

- **Palette**: Base colors
- **Opacity**: Standardized opacity levels
- **Spacing**: Spacing scale (8px grid)
- **Sizing**: Component and page-layout sizes
- **Typography**: Font size scale and line metrics
- **Radius**: Border radii
- **Shadow**: Drop shadows

## Examples

```
use iced_folio::ui::design_tokens::{palette, spacing, opacity};
use iced::Color;

let backdrop = Color {
    a: opacity::OVERLAY_BACKDROP,
    ..palette::BLACK
};
let padding = spacing::MD; // 16px
```

Page layout (`page::layout`) computes section offsets from the sizing and
typography tokens, so the view must build blocks with exactly these values.
"#]

use iced::Color;

// ============================================================================
// Color Palette
// ============================================================================

pub mod palette {
    use super::Color;

    pub const BLACK: Color = Color::BLACK;
    pub const WHITE: Color = Color::WHITE;
    pub const GRAY_900: Color = Color::from_rgb(0.1, 0.1, 0.1);
    pub const GRAY_700: Color = Color::from_rgb(0.3, 0.3, 0.3);
    pub const GRAY_200: Color = Color::from_rgb(0.75, 0.75, 0.75);
    pub const GRAY_100: Color = Color::from_rgb(0.85, 0.85, 0.85);

    pub const PRIMARY_400: Color = Color::from_rgb(0.4, 0.7, 1.0);
    pub const PRIMARY_500: Color = Color::from_rgb(0.3, 0.6, 0.9);
    pub const PRIMARY_600: Color = Color::from_rgb(0.2, 0.5, 0.8);
}

// ============================================================================
// Opacity Scale
// ============================================================================

pub mod opacity {
    pub const TRANSPARENT: f32 = 0.0;
    pub const OVERLAY_SUBTLE: f32 = 0.2;
    pub const OVERLAY_HOVER: f32 = 0.35;
    pub const OVERLAY_PRESSED: f32 = 0.5;
    /// Lightbox backdrop
    pub const OVERLAY_BACKDROP: f32 = 0.92;
    pub const DISABLED: f32 = 0.3;
}

// ============================================================================
// Spacing Scale (8px baseline grid)
// ============================================================================

pub mod spacing {
    pub const XXS: f32 = 4.0;
    pub const XS: f32 = 8.0;
    pub const SM: f32 = 12.0;
    pub const MD: f32 = 16.0;
    pub const LG: f32 = 24.0;
    pub const XL: f32 = 32.0;
    pub const XXL: f32 = 48.0;
}

// ============================================================================
// Sizing Scale
// ============================================================================

pub mod sizing {
    use super::spacing;

    // Navigation bar (drawn over the page)
    pub const NAV_HEIGHT: f32 = 60.0;
    pub const NAV_MENU_ITEM_HEIGHT: f32 = 44.0;

    // Page frame
    pub const MAX_CONTENT_WIDTH: f32 = 1200.0;
    pub const PAGE_PADDING: f32 = 20.0;
    pub const HERO_HEIGHT: f32 = 320.0;
    pub const SECTION_PADDING: f32 = spacing::XXL;
    pub const HEADING_HEIGHT: f32 = 44.0;
    pub const PARAGRAPH_SPACING: f32 = spacing::SM;
    pub const GALLERY_MARGIN: f32 = spacing::LG;
    pub const EMPTY_GALLERY_HEIGHT: f32 = 80.0;

    // Carousel
    pub const CAROUSEL_ARROW_SIZE: f32 = 40.0;
    /// Arrow plus the space between arrow and track, on each side.
    pub const CAROUSEL_ARROW_GUTTER: f32 = CAROUSEL_ARROW_SIZE + spacing::XS;
    /// Item height as a fraction of its width (4:3 thumbnails).
    pub const CAROUSEL_ITEM_ASPECT: f32 = 0.75;

    // Lightbox chrome
    pub const LIGHTBOX_BUTTON_SIZE: f32 = 48.0;
    pub const LIGHTBOX_CAPTION_HEIGHT: f32 = 56.0;
}

// ============================================================================
// Typography Scale
// ============================================================================

pub mod typography {
    pub const DISPLAY: f32 = 44.0;
    pub const TITLE_LG: f32 = 30.0;
    pub const TITLE_MD: f32 = 20.0;
    pub const BODY_LG: f32 = 18.0;
    pub const BODY: f32 = 16.0;

    /// Line height used to reserve space for wrapped body text.
    pub const BODY_LINE_HEIGHT: f32 = 24.0;
    /// Conservative average glyph advance for body text, so reserved space
    /// errs on the tall side.
    pub const BODY_AVG_GLYPH_WIDTH: f32 = BODY * 0.6;
}

// ============================================================================
// Border Radius Scale
// ============================================================================

pub mod radius {
    pub const NONE: f32 = 0.0;
    pub const SM: f32 = 4.0;
    pub const MD: f32 = 8.0;
    pub const FULL: f32 = 9999.0;
}

// ============================================================================
// Shadows
// ============================================================================

pub mod shadow {
    use super::palette;
    use iced::{Color, Shadow, Vector};

    pub const NONE: Shadow = Shadow {
        color: palette::BLACK,
        offset: Vector::ZERO,
        blur_radius: 0.0,
    };

    pub const SM: Shadow = Shadow {
        color: Color {
            a: 0.2,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 4.0,
    };

    /// Under the fixed navigation bar.
    pub const NAV: Shadow = Shadow {
        color: Color {
            a: 0.15,
            ..palette::BLACK
        },
        offset: Vector { x: 0.0, y: 2.0 },
        blur_radius: 10.0,
    };
}

// ============================================================================
// Compile-time Validation
// ============================================================================

const _: () = {
    assert!(spacing::XS > 0.0);
    assert!(spacing::SM > spacing::XS);
    assert!(spacing::MD > spacing::SM);
    assert!(spacing::LG > spacing::MD);

    assert!(opacity::TRANSPARENT == 0.0);
    assert!(opacity::OVERLAY_BACKDROP > opacity::OVERLAY_PRESSED);
    assert!(opacity::OVERLAY_PRESSED > opacity::OVERLAY_HOVER);

    assert!(sizing::CAROUSEL_ARROW_GUTTER > sizing::CAROUSEL_ARROW_SIZE);
    assert!(sizing::CAROUSEL_ITEM_ASPECT > 0.0);

    assert!(typography::TITLE_LG > typography::TITLE_MD);
    assert!(typography::BODY_LG > typography::BODY);
    assert!(typography::BODY_LINE_HEIGHT > typography::BODY);
};
