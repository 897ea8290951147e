//! Tests for leaf coloring, patterns and decorations

#[cfg(test)]
mod tests {
    use algosketch::art::leaf::{Decorations, LeafPainter};
    use algosketch::art::subdivider::Leaf;
    use algosketch::io::image::ImageSample;
    use algosketch::math::noise::ValueNoise;
    use algosketch::render::canvas::Canvas;
    use algosketch::render::palette::Palette;
    use algosketch::render::pattern::Pattern;
    use algosketch::spatial::rect::Rect;
    use algosketch::spatial::view::ViewTransform;
    use image::{Rgba, RgbaImage};

    fn root() -> Rect {
        Rect::new(0.0, 0.0, 100.0, 100.0)
    }

    fn leaf() -> Leaf {
        Leaf {
            rect: Rect::new(10.0, 10.0, 40.0, 30.0),
            level: 3,
        }
    }

    fn decorations() -> Decorations {
        Decorations {
            patterns: true,
            outline: false,
            labels: false,
            image_colors: false,
        }
    }

    // Tests the palette position stays in range and tracks depth
    // Verified by normalizing depth against the level instead of the budget
    #[test]
    fn test_palette_position() {
        let noise = ValueNoise::new(4);
        let palette = Palette::by_index(0);
        let painter = LeafPainter::new(&noise, palette, root(), 6, 0.0, decorations());

        let shallow = painter.palette_position(&Leaf { level: 0, ..leaf() });
        let deep = painter.palette_position(&Leaf { level: 6, ..leaf() });
        assert!((0.0..=1.0).contains(&shallow) && (0.0..=1.0).contains(&deep));
        assert!(deep > shallow);
        let expected = palette.interpolate(painter.palette_position(&leaf()));
        assert_eq!(painter.fill_color(&leaf()), expected);
    }

    // Tests image colors fall back to the palette without a sample
    // Verified by returning black when no sample is loaded
    #[test]
    fn test_image_colors_fallback() {
        let noise = ValueNoise::new(4);
        let palette = Palette::by_index(1);
        let image_mode = Decorations {
            image_colors: true,
            ..decorations()
        };
        let painter = LeafPainter::new(&noise, palette, root(), 6, 0.0, image_mode);
        let expected = palette.interpolate(painter.palette_position(&leaf()));
        assert_eq!(painter.fill_color(&leaf()), expected);
    }

    // Tests image colors average the sample under the leaf
    // Verified by sampling the whole image regardless of the leaf
    #[test]
    fn test_image_colors_from_sample() {
        let noise = ValueNoise::new(4);
        let mut bitmap = RgbaImage::from_pixel(20, 20, Rgba([0, 0, 255, 255]));
        for y in 0..10 {
            for x in 0..10 {
                bitmap.put_pixel(x, y, Rgba([255, 0, 0, 255]));
            }
        }
        let sample = ImageSample::from_image(bitmap);
        let image_mode = Decorations {
            image_colors: true,
            ..decorations()
        };
        let painter = LeafPainter::new(&noise, Palette::by_index(0), root(), 6, 0.0, image_mode)
            .with_sample(Some(&sample));

        let top_left = Leaf {
            rect: Rect::new(0.0, 0.0, 40.0, 40.0),
            level: 2,
        };
        assert_eq!(painter.fill_color(&top_left), [255, 0, 0, 255]);
        let bottom_right = Leaf {
            rect: Rect::new(60.0, 60.0, 40.0, 40.0),
            level: 2,
        };
        assert_eq!(painter.fill_color(&bottom_right), [0, 0, 255, 255]);
    }

    // Tests patterns can be switched off
    // Verified by ignoring the patterns flag
    #[test]
    fn test_patterns_off() {
        let noise = ValueNoise::new(4);
        let plain = Decorations {
            patterns: false,
            ..decorations()
        };
        let painter = LeafPainter::new(&noise, Palette::by_index(0), root(), 6, 0.0, plain);
        assert_eq!(painter.pattern(&leaf()), Pattern::None);
        assert_eq!(painter.style(&leaf()).pattern, Pattern::None);
    }

    // Tests outlines are drawn on the leaf border
    // Verified by drawing the outline before the fill
    #[test]
    fn test_outline_drawn() {
        let noise = ValueNoise::new(4);
        let outlined = Decorations {
            outline: true,
            ..decorations()
        };
        let painter = LeafPainter::new(&noise, Palette::by_index(0), root(), 6, 0.0, outlined);
        let mut canvas = Canvas::new(100, 100);
        painter.paint(&mut canvas, &leaf(), &ViewTransform::new());

        assert_eq!(canvas.pixel(10, 10), Some([14, 14, 18, 255]));
        assert_eq!(canvas.pixel(49, 39), Some([14, 14, 18, 255]));
        assert_eq!(canvas.pixel(5, 5), Some([0, 0, 0, 0]));
    }

    // Tests painting honors the view transform
    // Verified by painting in world coordinates
    #[test]
    fn test_paint_through_view() {
        let noise = ValueNoise::new(4);
        let plain = Decorations {
            patterns: false,
            ..decorations()
        };
        let painter = LeafPainter::new(&noise, Palette::by_index(0), root(), 6, 0.0, plain);
        let mut view = ViewTransform::new();
        view.pan_by(30.0, 0.0);

        let mut canvas = Canvas::new(100, 100);
        painter.paint(&mut canvas, &leaf(), &view);
        let fill = painter.fill_color(&leaf());
        assert_eq!(canvas.pixel(45, 20), Some(fill));
        assert_eq!(canvas.pixel(15, 20), Some([0, 0, 0, 0]));
    }

    // Tests labels only change the image when the level fits
    // Verified by drawing labels into tiny leaves
    #[test]
    fn test_labels() {
        let noise = ValueNoise::new(4);
        let plain = Decorations {
            patterns: false,
            ..decorations()
        };
        let labelled = Decorations {
            labels: true,
            ..plain
        };
        let view = ViewTransform::new();
        let palette = Palette::by_index(0);

        let render = |decorations: Decorations, leaf: &Leaf| {
            let painter = LeafPainter::new(&noise, palette, root(), 6, 0.0, decorations);
            let mut canvas = Canvas::new(100, 100);
            painter.paint(&mut canvas, leaf, &view);
            canvas.image().clone()
        };

        assert_ne!(render(plain, &leaf()), render(labelled, &leaf()));

        let tiny = Leaf {
            rect: Rect::new(10.0, 10.0, 4.0, 4.0),
            level: 3,
        };
        assert_eq!(render(plain, &tiny), render(labelled, &tiny));
    }

    // Tests depth is normalized against the budget and clamped past it
    // Verified by dividing by the level instead of the budget
    #[test]
    fn test_depth_fraction() {
        let noise = ValueNoise::new(4);
        let painter = LeafPainter::new(&noise, Palette::by_index(0), root(), 8, 0.0, decorations());
        assert!(painter.depth_fraction(&Leaf { level: 0, ..leaf() }).abs() < 1e-12);
        assert!((painter.depth_fraction(&Leaf { level: 4, ..leaf() }) - 0.5).abs() < 1e-12);
        assert!((painter.depth_fraction(&Leaf { level: 20, ..leaf() }) - 1.0).abs() < 1e-12);
    }

    // Tests the noise offset moves the palette position by at most a fifth
    // Verified by restoring the wider noise amplitude
    #[test]
    fn test_palette_noise_amplitude() {
        let palette = Palette::by_index(0);
        for seed in 0..16 {
            let noise = ValueNoise::new(seed);
            let painter = LeafPainter::new(&noise, palette, root(), 8, 0.0, decorations());
            for level in 2..=6 {
                let cell = Leaf { level, ..leaf() };
                let offset = painter.palette_position(&cell) - painter.depth_fraction(&cell);
                assert!(offset.abs() <= 0.2 + 1e-9, "offset {offset} at level {level}");
            }
        }
    }
}
