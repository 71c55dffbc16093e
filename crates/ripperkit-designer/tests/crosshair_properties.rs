//! Property checks for the crosshair controller.

use proptest::prelude::*;
use ripperkit_designer::{CrosshairController, HitTarget, Panel, Point, QuadrantLine};

fn line_strategy() -> impl Strategy<Value = QuadrantLine> {
    prop::sample::select(QuadrantLine::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_double_toggle_restores_selection(
        setup in prop::collection::vec(line_strategy(), 0..8),
        line in line_strategy(),
    ) {
        let mut ctrl = CrosshairController::new(Panel::default());
        for l in setup {
            ctrl.toggle_quad(l);
        }
        let mut before = ctrl.quads();
        ctrl.toggle_quad(line);
        ctrl.toggle_quad(line);
        let mut after = ctrl.quads();
        before.sort_unstable();
        after.sort_unstable();
        prop_assert_eq!(before, after);
    }

    #[test]
    fn prop_hit_test_total_for_any_crosshair(
        x in -50.0f64..150.0,
        y in -50.0f64..100.0,
        px in -500.0f64..1500.0,
        py in -500.0f64..1000.0,
        container in 100.0f64..2000.0,
    ) {
        let mut ctrl = CrosshairController::new(Panel::new(96.0, 48.0));
        ctrl.resize(container);
        ctrl.set_position(x, y);
        let target = ctrl.hit_test(Point::new(px, py));
        prop_assert!(target.id() <= 5);
    }

    #[test]
    fn prop_click_near_handle_never_toggles(
        dx in -13.0f64..13.0,
        dy in -13.0f64..13.0,
    ) {
        let mut ctrl = CrosshairController::new(Panel::new(96.0, 48.0));
        ctrl.resize(980.0);
        let c = ctrl.crosshair_pixel();
        let pointer = Point::new(c.x + dx, c.y + dy);
        prop_assert_eq!(ctrl.hit_test(pointer), HitTarget::Center);

        ctrl.on_pointer_down(pointer);
        prop_assert!(ctrl.is_dragging());
        prop_assert!(ctrl.selection().is_empty());
        ctrl.on_pointer_up();
        prop_assert!(!ctrl.is_dragging());
    }

    #[test]
    fn prop_drag_release_emits_exactly_one_settle(
        moves in prop::collection::vec((0.0f64..960.0, 0.0f64..480.0), 0..10),
    ) {
        use std::cell::RefCell;
        use std::rc::Rc;

        let mut ctrl = CrosshairController::new(Panel::new(96.0, 48.0));
        ctrl.resize(980.0);
        let count = Rc::new(RefCell::new(0usize));
        let c = count.clone();
        ctrl.on_change(move |_| *c.borrow_mut() += 1);

        ctrl.on_pointer_down(ctrl.crosshair_pixel());
        for (x, y) in &moves {
            ctrl.on_pointer_move(Point::new(*x, *y), true);
        }
        ctrl.on_pointer_up();

        prop_assert_eq!(*count.borrow(), moves.len() + 2);
    }
}
