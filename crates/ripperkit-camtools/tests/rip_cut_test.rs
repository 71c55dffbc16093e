use proptest::prelude::*;
use ripperkit_camtools::rip_cut::{CutKind, RipCutGenerator, RipCutParameters};
use ripperkit_core::{ChangeEvent, Panel, Point, SelectionSet};

fn generate(quads: &[u8]) -> String {
    let params = RipCutParameters {
        quads: SelectionSet::from_ids(quads).unwrap(),
        ..RipCutParameters::default()
    };
    RipCutGenerator::new(params).generate().unwrap()
}

const SETUP: &str = "' Created by THE RIPPER\n\
                     \n\
                     ' Select Tool\n\
                     &Tool = 1\n\
                     C9\n\
                     \n\
                     JZ,2.00000\n\
                     ' Spindle on\n\
                     C6\n\n";

const TEARDOWN: &str = "\n' Spindle off\nC7\n\nEND";

#[test]
fn test_empty_selection_is_setup_and_teardown() {
    let program = generate(&[]);

    assert_eq!(program, format!("{}{}", SETUP, TEARDOWN));
    assert!(!program.contains("M2"));
    assert!(!program.contains("MZ"));
}

#[test]
fn test_opposite_vertical_lines_merge() {
    let program = generate(&[1, 3]);

    let expected = format!(
        "{}' Rip Y\nJZ,2.00000\nJ2,48.00000,48.00000\nMZ,0.00000\nM2,48.00000,0.00000\nJZ,2.00000\n\n{}",
        SETUP, TEARDOWN
    );
    assert_eq!(program, expected);
    assert!(!program.contains("Rip segment"));
    assert!(!program.contains("Rip quadrant"));
}

#[test]
fn test_opposite_horizontal_lines_merge() {
    let program = generate(&[4, 2]);

    assert!(program.contains("' Rip X\nJZ,2.00000\nJ2,0.00000,24.00000\nMZ,0.00000\nM2,96.00000,24.00000\nJZ,2.00000\n"));
    assert_eq!(program.matches("MZ,").count(), 1);
}

#[test]
fn test_single_line_is_radial_segment() {
    let program = generate(&[1]);

    assert!(program.contains(
        "' Rip segment\nJZ,2.00000\nJ2,48.00000,48.00000\nMZ,0.00000\nM2,48.00000,24.00000\nJZ,2.00000\n\n' Spindle off"
    ));
    assert!(!program.contains("Rip Y"));
}

#[test]
fn test_adjacent_lines_follow_insertion_order() {
    let first = generate(&[1, 2]);
    assert!(first.contains(
        "J2,48.00000,48.00000\nMZ,0.00000\nM2,48.00000,24.00000\nM2,0.00000,24.00000\n"
    ));

    let second = generate(&[2, 1]);
    assert!(second.contains(
        "J2,0.00000,24.00000\nMZ,0.00000\nM2,48.00000,24.00000\nM2,48.00000,48.00000\n"
    ));
}

#[test]
fn test_all_four_lines_are_two_rips() {
    let program = generate(&[3, 2, 4, 1]);

    let rip_y = program.find("' Rip Y").unwrap();
    let rip_x = program.find("' Rip X").unwrap();
    assert!(rip_y < rip_x);
    assert_eq!(program.matches("MZ,0.00000").count(), 2);
    assert_eq!(program.matches("M2,").count(), 2);
}

#[test]
fn test_safe_z_zero_falls_back() {
    let params = RipCutParameters {
        safe_z: 0.0,
        quads: SelectionSet::from_ids(&[4]).unwrap(),
        ..RipCutParameters::default()
    };
    let program = RipCutGenerator::new(params).generate().unwrap();

    assert!(!program.contains("JZ,0.00000"));
    assert_eq!(program.matches("JZ,2.00000").count(), 3);
}

#[test]
fn test_custom_panel_and_safe_height() {
    let params = RipCutParameters {
        width: 48.0,
        height: 96.0,
        x: 12.5,
        y: 30.25,
        quads: SelectionSet::from_ids(&[3, 4]).unwrap(),
        safe_z: 0.5,
        ..RipCutParameters::default()
    };
    let program = RipCutGenerator::new(params).generate().unwrap();

    assert!(program.contains("JZ,0.50000\n' Spindle on"));
    assert!(program.contains(
        "' Rip quadrant\nJZ,0.50000\nJ2,12.50000,0.00000\nMZ,0.00000\nM2,12.50000,30.25000\nM2,48.00000,30.25000\nJZ,0.50000"
    ));
}

#[test]
fn test_from_snapshot_uses_change_event() {
    let change = ChangeEvent {
        x: 10.0,
        y: 5.0,
        quads: vec![2, 4],
    };
    let params = RipCutParameters::from_snapshot(&Panel::new(40.0, 20.0), &change, 1.0).unwrap();
    let plan = RipCutGenerator::new(params).plan();

    assert_eq!(plan.len(), 1);
    assert_eq!(plan[0].kind, CutKind::RipX);
    assert_eq!(plan[0].path, vec![Point::new(0.0, 5.0), Point::new(40.0, 5.0)]);
}

#[test]
fn test_from_snapshot_rejects_unknown_line() {
    let change = ChangeEvent {
        x: 10.0,
        y: 5.0,
        quads: vec![9],
    };
    assert!(RipCutParameters::from_snapshot(&Panel::default(), &change, 2.0).is_err());
}

fn selection_strategy() -> impl Strategy<Value = Vec<u8>> {
    Just(vec![1u8, 2, 3, 4])
        .prop_shuffle()
        .prop_flat_map(|ids| (0..=4usize).prop_map(move |n| ids[..n].to_vec()))
}

proptest! {
    #[test]
    fn prop_every_cut_is_bracketed_by_safe_height(
        quads in selection_strategy(),
        x in 0.0f64..96.0,
        y in 0.0f64..48.0,
        safe_z in 0.1f64..5.0,
    ) {
        let params = RipCutParameters {
            x,
            y,
            quads: SelectionSet::from_ids(&quads).unwrap(),
            safe_z,
            ..RipCutParameters::default()
        };
        let generator = RipCutGenerator::new(params);
        let commands = generator.commands();
        let lines: Vec<String> = commands.iter().map(|c| c.to_string()).collect();
        let jz = format!("JZ,{}", ripperkit_camtools::sbp::format_coord(safe_z));

        let mut raised = true;
        for line in &lines {
            if line.starts_with("J2,") {
                prop_assert!(raised, "rapid XY move while plunged");
            } else if line.starts_with("MZ,") {
                raised = false;
            } else if line.starts_with("JZ,") {
                prop_assert_eq!(line, &jz);
                raised = true;
            }
        }
        prop_assert!(raised, "program ends plunged");
    }

    #[test]
    fn prop_group_count_matches_selection(quads in selection_strategy()) {
        let params = RipCutParameters {
            quads: SelectionSet::from_ids(&quads).unwrap(),
            ..RipCutParameters::default()
        };
        let generator = RipCutGenerator::new(params);
        let plan = generator.plan();

        let vertical = quads.contains(&1) && quads.contains(&3);
        let horizontal = quads.contains(&2) && quads.contains(&4);
        let merged = usize::from(vertical) * 2 + usize::from(horizontal) * 2;
        let leftover = usize::from(quads.len() > merged);

        prop_assert_eq!(plan.len(), usize::from(vertical) + usize::from(horizontal) + leftover);

        let program = generator.generate().unwrap();
        prop_assert!(program.starts_with("' Created by THE RIPPER\n"));
        prop_assert!(program.ends_with("\n' Spindle off\nC7\n\nEND"));
        prop_assert_eq!(program.matches("MZ,").count(), plan.len());
    }
}
