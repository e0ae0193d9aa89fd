//! End-to-end tests: SVG markup through extraction, conversion, and
//! G-code generation.

use mugkit_camtools::{convert, extract_document, GcodeParams, GcodeWriter, FLATTEN_STEPS};
use mugkit_core::{ConversionError, ConversionParams, MotionCommand, ProjectionParams};

fn default_params() -> ConversionParams {
    ConversionParams::default()
}

#[test]
fn test_single_line_produces_travel_then_draws() {
    let svg = r#"<svg viewBox="0 0 280 80"><path d="M 0 0 L 10 0"/></svg>"#;
    let document = extract_document(svg).expect("extraction failed");
    let commands = convert(&document, &default_params()).expect("conversion failed");

    // One travel to the path start, then one draw per flattened step.
    assert_eq!(commands.len(), 1 + FLATTEN_STEPS + 1);
    assert!(!commands[0].is_draw());
    assert!(commands[1..].iter().all(|c| c.is_draw()));
}

#[test]
fn test_draw_extrusion_matches_chord_length() {
    let svg = r#"<svg viewBox="0 0 280 80"><path d="M 0 0 L 10 0"/></svg>"#;
    let document = extract_document(svg).expect("extraction failed");
    let commands = convert(&document, &default_params()).expect("conversion failed");

    let mut previous = *commands[0].target();
    let mut total = 0.0;
    for command in &commands[1..] {
        match command {
            MotionCommand::Draw { target, extrusion } => {
                let chord = previous.chord_to(target);
                assert!(
                    (extrusion - chord).abs() < 1e-9,
                    "extrusion {} != chord {}",
                    extrusion,
                    chord
                );
                total += extrusion;
                previous = *target;
            }
            MotionCommand::Travel { .. } => panic!("unexpected travel inside a path"),
        }
    }

    // With extrusion_rate = 1.0 the total deposit equals the traced length.
    let start = commands[0].target();
    let end = commands[commands.len() - 1].target();
    assert!(total >= start.chord_to(end) - 1e-9);
}

#[test]
fn test_multiple_paths_get_separating_travels() {
    let svg = r#"<svg viewBox="0 0 280 80">
        <path d="M 0 0 L 10 0"/>
        <line x1="20" y1="20" x2="30" y2="20"/>
    </svg>"#;
    let document = extract_document(svg).expect("extraction failed");
    let commands = convert(&document, &default_params()).expect("conversion failed");

    let travels = commands.iter().filter(|c| !c.is_draw()).count();
    assert_eq!(travels, 2);
    // The stream must start each path with its travel.
    assert!(!commands[0].is_draw());
    let second_travel = commands.iter().skip(1).position(|c| !c.is_draw()).unwrap() + 1;
    assert_eq!(second_travel, 1 + FLATTEN_STEPS + 1);
}

#[test]
fn test_non_positive_circumference_is_configuration_error() {
    let svg = r#"<svg viewBox="0 0 280 80"><path d="M 0 0 L 10 0"/></svg>"#;
    let document = extract_document(svg).expect("extraction failed");
    let params = ConversionParams {
        projection: ProjectionParams {
            circumference_mm: -1.0,
            ..Default::default()
        },
        ..Default::default()
    };
    let result = convert(&document, &params);
    assert!(matches!(
        result,
        Err(ConversionError::InvalidParameter {
            name: "circumference_mm",
            ..
        })
    ));
}

#[test]
fn test_svg_with_only_unsupported_content_is_empty() {
    // Arc-only path data parses to nothing drawable.
    let svg = r#"<svg viewBox="0 0 280 80"><path d="a 5,5 0 1,0 10,0"/></svg>"#;
    let document = extract_document(svg).expect("extraction failed");
    let result = convert(&document, &default_params());
    assert_eq!(result, Err(ConversionError::EmptyDocument));
}

#[test]
fn test_rerun_yields_identical_commands() {
    let svg = r#"<svg viewBox="0 0 280 80">
        <rect x="10" y="10" width="40" height="20"/>
        <circle cx="100" cy="40" r="15"/>
        <path d="M 0 0 C 10 20 30 40 50 60" transform="matrix(1,0,0,1,5,5)"/>
    </svg>"#;
    let document = extract_document(svg).expect("extraction failed");
    let params = default_params();
    let first = convert(&document, &params).expect("conversion failed");
    let second = convert(&document, &params).expect("conversion failed");
    assert_eq!(first, second);
}

#[test]
fn test_gcode_program_structure() {
    let svg = r#"<svg viewBox="0 0 280 80"><path d="M 0 0 L 10 0 L 10 10"/></svg>"#;
    let document = extract_document(svg).expect("extraction failed");
    let params = default_params();
    let commands = convert(&document, &params).expect("conversion failed");
    let gcode = GcodeWriter::new(GcodeParams::default()).write(&commands, &params.projection);

    let lines: Vec<&str> = gcode.lines().collect();
    assert!(lines.iter().any(|l| l.starts_with("G21")));
    assert!(lines.iter().any(|l| l.starts_with("M83")));

    let travel_lines = lines.iter().filter(|l| l.starts_with("G0 X")).count();
    let draw_lines = lines.iter().filter(|l| l.starts_with("G1 X")).count();
    assert_eq!(travel_lines, 1);
    assert_eq!(draw_lines, 2 * (FLATTEN_STEPS + 1));
    // Every drawing line meters extrusion; no travel line does.
    assert!(lines
        .iter()
        .filter(|l| l.starts_with("G1 X"))
        .all(|l| l.contains(" E")));
    assert!(lines
        .iter()
        .filter(|l| l.starts_with("G0 X"))
        .all(|l| !l.contains(" E")));
}

#[test]
fn test_inkscape_style_document() {
    // Attribute order, single quotes, and a group transform on the path
    // element itself, the way Inkscape tends to write files.
    let svg = r#"<?xml version='1.0' encoding='UTF-8'?>
<svg xmlns='http://www.w3.org/2000/svg' width='280mm' height='80mm' viewBox='0 0 280 80'>
  <g>
    <path style='fill:none;stroke:#000000' transform='translate(10,0)' d='m 10,40 h 50 v -20 z' id='path1'/>
  </g>
</svg>"#;
    let document = extract_document(svg).expect("extraction failed");
    assert_eq!(document.paths.len(), 1);
    let commands = convert(&document, &default_params()).expect("conversion failed");
    // h, v, and the close each flatten to a full subdivision.
    assert_eq!(commands.len(), 1 + 3 * (FLATTEN_STEPS + 1));
}
