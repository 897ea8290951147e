//! Tests for Conway's Game of Life

#[cfg(test)]
mod tests {
    use algosketch::host::input::PointerButton;
    use algosketch::io::configuration::{
        BACKGROUND, LIFE_AGE_DECAY, LIFE_CELL_SIZE, LIFE_MAX_BRUSH, LIFE_MAX_SPEED,
        LIFE_STEP_FRAMES,
    };
    use algosketch::modes::life::{LifeMode, cell_color};
    use algosketch::modes::{FrameContext, Visualization};
    use algosketch::spatial::grid::GridLayout;

    fn context() -> FrameContext<'static> {
        FrameContext {
            frame: 0,
            elapsed: 0.0,
            delta: 1.0 / 60.0,
            width: 100,
            height: 100,
            image: None,
        }
    }

    fn empty(width: u32, height: u32) -> LifeMode {
        let mut mode = LifeMode::new(1, width, height);
        mode.clear();
        mode
    }

    fn live_cells(mode: &LifeMode) -> Vec<(usize, usize)> {
        let mut cells = Vec::new();
        for row in 0..mode.rows() {
            for col in 0..mode.cols() {
                if mode.alive(row, col) {
                    cells.push((row, col));
                }
            }
        }
        cells
    }

    // Tests the grid covers the surface with fixed-size cells
    // Verified by using the surface size as the cell count
    #[test]
    fn test_grid_size() {
        let mode = LifeMode::new(1, 100, 100);
        assert_eq!((mode.rows(), mode.cols()), (10, 10));
        assert!(mode.live_count() > 0);
        assert_eq!(mode.generation(), 0);
    }

    // Tests a blinker oscillates with period two
    // Verified by updating cells in place
    #[test]
    fn test_blinker() {
        let mut mode = empty(100, 100);
        for col in 3..=5 {
            mode.set_cell(4, col, true);
        }
        let horizontal = live_cells(&mode);

        mode.step();
        assert_eq!(live_cells(&mode), vec![(3, 4), (4, 4), (5, 4)]);
        mode.step();
        assert_eq!(live_cells(&mode), horizontal);
        assert_eq!(mode.generation(), 2);
    }

    // Tests neighbours wrap around every edge
    // Verified by clamping instead of wrapping
    #[test]
    fn test_toroidal_neighbors() {
        let mut mode = empty(100, 100);
        mode.set_cell(9, 9, true);
        mode.set_cell(0, 9, true);
        mode.set_cell(9, 0, true);
        assert_eq!(mode.neighbors(0, 0), 3);

        // A block split across all four corners is a still life
        mode.set_cell(0, 0, true);
        let before = live_cells(&mode);
        mode.step();
        assert_eq!(live_cells(&mode), before);
    }

    // Tests out-of-range cells are ignored
    // Verified by panicking on out-of-range writes
    #[test]
    fn test_out_of_range_cells() {
        let mut mode = empty(100, 100);
        mode.set_cell(50, 50, true);
        assert_eq!(mode.live_count(), 0);
        assert!(!mode.alive(50, 50));
    }

    // Tests resizing keeps the overlapping cells and their ages
    // Verified by reseeding on resize
    #[test]
    fn test_resize_keeps_content() {
        let mut mode = empty(100, 100);
        mode.set_cell(2, 3, true);

        mode.on_resize(200, 100);
        assert_eq!((mode.rows(), mode.cols()), (10, 20));
        assert_eq!(live_cells(&mode), vec![(2, 3)]);

        mode.on_resize(50, 50);
        assert_eq!((mode.rows(), mode.cols()), (5, 5));
        assert!(mode.alive(2, 3));
        assert!((mode.age(2, 3) - 0.6).abs() < 1e-6);
    }

    // Tests generations advance on the frame cadence unless paused
    // Verified by stepping on every update
    #[test]
    fn test_update_cadence_and_pause() {
        let mut mode = LifeMode::new(1, 100, 100);
        for _ in 0..LIFE_STEP_FRAMES {
            mode.update(&context());
        }
        assert_eq!(mode.generation(), 1);

        assert!(mode.on_key('p'));
        assert!(mode.is_paused());
        for _ in 0..LIFE_STEP_FRAMES * 3 {
            mode.update(&context());
        }
        assert_eq!(mode.generation(), 1);

        // Single steps still work while paused
        assert!(mode.on_key('n'));
        assert_eq!(mode.generation(), 2);
        assert!(mode.on_key(' '));
        assert!(!mode.is_paused());
    }

    // Tests pressing and dragging paint cells until release
    // Verified by painting on drag without a press
    #[test]
    fn test_painting() {
        let mut mode = empty(100, 100);
        let layout = GridLayout::cover(100, 100, LIFE_CELL_SIZE);
        let center = |row, col| layout.cell_rect(row, col).center();

        let (x, y) = center(1, 1);
        mode.on_pointer_pressed(x, y, PointerButton::Primary);
        let (x, y) = center(1, 2);
        mode.on_pointer_dragged(x, y, PointerButton::Primary);
        mode.on_pointer_released(x, y);
        let (x, y) = center(1, 4);
        mode.on_pointer_dragged(x, y, PointerButton::Primary);

        assert_eq!(live_cells(&mode), vec![(1, 1), (1, 2)]);
        assert!((mode.age(1, 1) - 0.6).abs() < 1e-6);
    }

    // Tests the secondary button erases and clears the trail
    // Verified by painting with every button
    #[test]
    fn test_secondary_button_erases() {
        let mut mode = empty(100, 100);
        let layout = GridLayout::cover(100, 100, LIFE_CELL_SIZE);
        for col in 0..4 {
            mode.set_cell(5, col, true);
        }

        let (x, y) = layout.cell_rect(5, 1).center();
        mode.on_pointer_pressed(x, y, PointerButton::Secondary);
        let (x, y) = layout.cell_rect(5, 2).center();
        mode.on_pointer_dragged(x, y, PointerButton::Secondary);
        mode.on_pointer_released(x, y);

        assert_eq!(live_cells(&mode), vec![(5, 0), (5, 3)]);
        assert!(mode.age(5, 1).abs() < f32::EPSILON);
    }

    // Tests the brush covers a disc of its radius and stays within bounds
    // Verified by testing the square instead of the disc
    #[test]
    fn test_brush_radius() {
        let mut mode = empty(100, 100);
        assert_eq!(mode.brush(), 0);
        assert!(mode.on_key(']'));
        assert!(mode.on_key(']'));
        assert_eq!(mode.brush(), 2);

        let layout = GridLayout::cover(100, 100, LIFE_CELL_SIZE);
        let (x, y) = layout.cell_rect(5, 5).center();
        mode.brush_at(x, y, true);
        // A radius two disc covers 13 cells
        assert_eq!(mode.live_count(), 13);
        assert!(mode.alive(3, 5) && mode.alive(5, 7) && mode.alive(4, 4));
        assert!(!mode.alive(3, 3) && !mode.alive(7, 7));

        mode.clear();
        let (x, y) = layout.cell_rect(0, 0).center();
        mode.brush_at(x, y, true);
        assert_eq!(mode.live_count(), 6);

        for _ in 0..LIFE_MAX_BRUSH + 5 {
            mode.on_key(']');
        }
        assert_eq!(mode.brush(), LIFE_MAX_BRUSH);
        for _ in 0..LIFE_MAX_BRUSH + 5 {
            mode.on_key('[');
        }
        assert_eq!(mode.brush(), 0);
    }

    // Tests a glider lands at the pointer cell, or the center before any pointer input
    // Verified by wrapping glider cells around the edge
    #[test]
    fn test_glider() {
        let mut mode = empty(100, 100);
        assert!(mode.on_key('g'));
        assert_eq!(live_cells(&mode), vec![(5, 6), (6, 7), (7, 5), (7, 6), (7, 7)]);

        mode.clear();
        let layout = GridLayout::cover(100, 100, LIFE_CELL_SIZE);
        let (x, y) = layout.cell_rect(8, 8).center();
        mode.on_pointer_released(x, y);
        mode.place_glider();
        // Only the top row of the glider fits before the edge
        assert_eq!(live_cells(&mode), vec![(8, 9)]);

        // Four generations move the glider one cell down and right
        mode.clear();
        let (x, y) = layout.cell_rect(1, 1).center();
        mode.on_pointer_released(x, y);
        mode.place_glider();
        let start = live_cells(&mode);
        for _ in 0..4 {
            mode.step();
        }
        let moved: Vec<(usize, usize)> = start.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
        assert_eq!(live_cells(&mode), moved);
    }

    // Tests speed multiplies the generations per tick within its bounds
    // Verified by ignoring the speed in update
    #[test]
    fn test_speed() {
        let mut mode = LifeMode::new(1, 100, 100);
        assert_eq!(mode.speed(), 1);
        assert!(mode.on_key('>'));
        assert!(mode.on_key('.'));
        assert_eq!(mode.speed(), 3);
        for _ in 0..LIFE_STEP_FRAMES {
            mode.update(&context());
        }
        assert_eq!(mode.generation(), 3);

        for _ in 0..LIFE_MAX_SPEED + 5 {
            mode.on_key('>');
        }
        assert_eq!(mode.speed(), LIFE_MAX_SPEED);
        for _ in 0..LIFE_MAX_SPEED + 5 {
            mode.on_key('<');
        }
        assert_eq!(mode.speed(), 1);
        assert!(mode.on_key(','));
        assert_eq!(mode.speed(), 1);
    }

    // Tests ages grow while alive and decay into a trail after death
    // Verified by resetting the age when a cell dies
    #[test]
    fn test_ages_and_trail() {
        let mut mode = empty(100, 100);
        for col in 3..=5 {
            mode.set_cell(4, col, true);
        }
        mode.step();
        // The middle survives and ages, the ends die and start to fade
        assert!((mode.age(4, 4) - 0.64).abs() < 1e-6);
        assert!((mode.age(4, 3) - 0.6 * LIFE_AGE_DECAY).abs() < 1e-6);
        assert!(!mode.alive(4, 3));
        assert!(mode.age(2, 2).abs() < f32::EPSILON);

        for _ in 0..20 {
            mode.step();
        }
        assert!(mode.age(4, 4) <= 1.0);
    }

    // Tests live cells are colored by age and faded trails disappear
    // Verified by coloring dead cells like live ones
    #[test]
    fn test_cell_color() {
        assert_eq!(cell_color(true, 0.0), Some([255, 0, 0, 255]));
        assert_ne!(cell_color(true, 0.3), cell_color(true, 0.6));
        assert_eq!(cell_color(false, 0.0), None);
        assert_eq!(cell_color(false, 1e-6), None);

        let trail = cell_color(false, 0.5).expect("visible trail");
        assert!(trail[0] > BACKGROUND[0]);
        let older = cell_color(false, 0.2).expect("visible trail");
        assert!(older[0] < trail[0]);
    }

    // Tests the clear key and a fresh soup
    // Verified by leaving the generation count after clear
    #[test]
    fn test_clear_and_randomize_keys() {
        let mut mode = LifeMode::new(1, 100, 100);
        mode.step();
        assert!(mode.on_key('c'));
        assert_eq!(mode.live_count(), 0);
        assert_eq!(mode.generation(), 0);

        mode.randomize();
        assert!(mode.live_count() > 0);
        assert!((0..mode.rows()).all(|row| (0..mode.cols()).all(|col| {
            let age = mode.age(row, col);
            if mode.alive(row, col) { (0.3..0.8).contains(&age) } else { age.abs() < f32::EPSILON }
        })));
        assert!(!mode.on_key('r'));
        assert!(!mode.on_key('b'));
        assert_eq!(mode.name(), "game of life");
    }
}
