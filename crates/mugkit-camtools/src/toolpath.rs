//! Toolpath synthesis.
//!
//! Flattens the per-path surface point sequences into one ordered motion
//! command stream: travel to the start of each path, then draw point to
//! point with extrusion metered by chord length. Paths never bleed into
//! each other; every path boundary is crossed by a travel move.

use mugkit_core::{MotionCommand, SurfacePoint};
use tracing::debug;

/// Synthesizes the motion command stream for an ordered set of paths.
///
/// Paths with fewer than two points produce no draw commands; an empty
/// path produces nothing at all.
pub fn synthesize(paths: &[Vec<SurfacePoint>], extrusion_rate: f64) -> Vec<MotionCommand> {
    let mut commands = Vec::new();

    for path in paths {
        let Some(first) = path.first() else {
            continue;
        };
        commands.push(MotionCommand::Travel { target: *first });

        for pair in path.windows(2) {
            let chord = pair[0].chord_to(&pair[1]);
            commands.push(MotionCommand::Draw {
                target: pair[1],
                extrusion: chord * extrusion_rate,
            });
        }
    }

    debug!(
        paths = paths.len(),
        commands = commands.len(),
        "synthesized toolpath"
    );
    commands
}

#[cfg(test)]
mod tests {
    use super::*;
    use nalgebra::Point3;

    fn surface(x: f64, y: f64, z: f64) -> SurfacePoint {
        SurfacePoint {
            angle: 0.0,
            height: y,
            cartesian: Point3::new(x, y, z),
        }
    }

    #[test]
    fn test_single_path_travel_then_draws() {
        let path = vec![surface(0.0, 0.0, 0.0), surface(3.0, 4.0, 0.0)];
        let commands = synthesize(&[path], 1.0);
        assert_eq!(commands.len(), 2);
        assert!(!commands[0].is_draw());
        match commands[1] {
            MotionCommand::Draw { extrusion, .. } => {
                assert!((extrusion - 5.0).abs() < 1e-12);
            }
            _ => panic!("expected a draw command"),
        }
    }

    #[test]
    fn test_extrusion_scaled_by_rate() {
        let path = vec![surface(0.0, 0.0, 0.0), surface(0.0, 2.0, 0.0)];
        let commands = synthesize(&[path], 0.25);
        match commands[1] {
            MotionCommand::Draw { extrusion, .. } => {
                assert!((extrusion - 0.5).abs() < 1e-12);
            }
            _ => panic!("expected a draw command"),
        }
    }

    #[test]
    fn test_travel_between_paths() {
        let a = vec![surface(0.0, 0.0, 0.0), surface(1.0, 0.0, 0.0)];
        let b = vec![surface(5.0, 5.0, 0.0), surface(6.0, 5.0, 0.0)];
        let commands = synthesize(&[a, b], 1.0);
        let kinds: Vec<bool> = commands.iter().map(|c| c.is_draw()).collect();
        assert_eq!(kinds, vec![false, true, false, true]);
    }

    #[test]
    fn test_single_point_path_travels_only() {
        let commands = synthesize(&[vec![surface(1.0, 1.0, 1.0)]], 1.0);
        assert_eq!(commands.len(), 1);
        assert!(!commands[0].is_draw());
    }

    #[test]
    fn test_empty_paths_produce_nothing() {
        let commands = synthesize(&[Vec::new(), Vec::new()], 1.0);
        assert!(commands.is_empty());
    }

    #[test]
    fn test_document_order_preserved() {
        let a = vec![surface(0.0, 0.0, 0.0), surface(1.0, 0.0, 0.0)];
        let b = vec![surface(9.0, 9.0, 9.0), surface(9.0, 8.0, 9.0)];
        let commands = synthesize(&[a.clone(), b.clone()], 1.0);
        assert_eq!(commands[0].target().cartesian, a[0].cartesian);
        assert_eq!(commands[2].target().cartesian, b[0].cartesian);
    }
}
