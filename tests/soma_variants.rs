//! Integration tests for the soma models.
//!
//! Each test builds a soma through the public API from samples as a
//! morphology reader would supply them, and checks the derived geometry.
//!
//! Focus areas:
//! - Classification by format and sample count
//! - Center, radius and area of every soma kind
//! - Diagnostics raised on best-effort three-point somas
//! - Replacing samples and overriding the radius

use approx::assert_relative_eq;
use soma_geometry::prelude::*;
use std::f64::consts::PI;

fn buffer(rows: &[[f64; 4]]) -> SampleBuffer {
    SampleBuffer::from_rows(rows).unwrap()
}

fn swc(rows: &[[f64; 4]]) -> Soma {
    Soma::with_config(SomaFormat::Swc, buffer(rows), SomaConfig::default(), &mut NullSink).unwrap()
}

fn contour(rows: &[[f64; 4]]) -> Soma {
    Soma::with_config(
        SomaFormat::Contour,
        buffer(rows),
        SomaConfig::default(),
        &mut NullSink,
    )
    .unwrap()
}

fn assert_center(soma: &Soma, expected: [f64; 3]) {
    let center = soma.center().unwrap().coords();
    for (actual, expected) in center.iter().zip(expected) {
        assert_relative_eq!(*actual, expected, epsilon = 1e-9);
    }
}

// ============================================================================
// Single point
// ============================================================================

#[test]
fn test_single_point_soma() {
    let soma = swc(&[[11.0, 22.0, 33.0, 44.0]]);

    assert_eq!(soma.kind(), SomaKind::SinglePoint);
    assert_center(&soma, [11.0, 22.0, 33.0]);
    assert_eq!(soma.radius(), Some(44.0));
    assert!(soma.to_string().contains("SomaSinglePoint"));
    assert!(matches!(
        soma.area(),
        Err(SomaError::NotComputable { .. })
    ));
}

#[test]
fn test_single_point_from_diameters() {
    let samples = SampleBuffer::from_diameters(&[[1.0, 2.0, 3.0]], &[8.0]).unwrap();
    let soma = Soma::new(SomaFormat::Swc, samples).unwrap();
    assert_eq!(soma.radius(), Some(4.0));
}

// ============================================================================
// NeuroMorpho three-point
// ============================================================================

#[test]
fn test_three_point_soma() {
    let soma = swc(&[
        [0.0, 0.0, 0.0, 44.0],
        [0.0, -44.0, 0.0, 44.0],
        [0.0, 44.0, 0.0, 44.0],
    ]);

    assert_eq!(soma.kind(), SomaKind::NeuromorphoThreePointCylinders);
    assert_center(&soma, [0.0, 0.0, 0.0]);
    assert_eq!(soma.radius(), Some(44.0));
    assert!(soma.to_string().contains("SomaNeuromorphoThreePointCylinders"));
    assert!(soma.diagnostics().is_empty());
}

#[test]
fn test_three_point_area_equals_sphere_area() {
    let soma = swc(&[
        [0.0, 0.0, 0.0, 10.0],
        [0.0, -10.0, 0.0, 10.0],
        [0.0, 10.0, 0.0, 10.0],
    ]);
    assert_relative_eq!(soma.area().unwrap(), 1256.6370614, epsilon = 1e-6);
    assert_relative_eq!(soma.area().unwrap(), 4.0 * PI * 100.0, epsilon = 1e-9);
}

#[test]
fn test_skewed_three_point_is_kept_with_warning() {
    let mut warnings: Vec<SomaDiagnostic> = Vec::new();
    let soma = Soma::with_config(
        SomaFormat::Swc,
        buffer(&[
            [0.0, 0.0, 0.0, 10.0],
            [-2.0, -6.0, 0.0, 10.0],
            [2.0, 6.0, 0.0, 10.0],
        ]),
        SomaConfig::default(),
        &mut warnings,
    )
    .unwrap();

    assert_eq!(soma.kind(), SomaKind::NeuromorphoThreePointCylinders);
    assert_relative_eq!(soma.area().unwrap(), 794.76706126368811, epsilon = 1e-4);
    assert_eq!(warnings.len(), 1);
    assert!(matches!(
        warnings[0],
        SomaDiagnostic::NonConformingThreePoint { .. }
    ));
    assert!(warnings[0].to_string().contains("three point soma spec"));
    assert_eq!(soma.diagnostics(), warnings.as_slice());
}

#[test]
fn test_tiny_conforming_three_point_warns_zero_radius() {
    let mut warnings: Vec<SomaDiagnostic> = Vec::new();
    let soma = Soma::with_config(
        SomaFormat::Swc,
        buffer(&[
            [0.0, 0.0, 0.0, 1e-8],
            [0.0, -1e-8, 0.0, 1e-8],
            [0.0, 1e-8, 0.0, 1e-8],
        ]),
        SomaConfig::default(),
        &mut warnings,
    )
    .unwrap();

    assert_eq!(soma.kind(), SomaKind::NeuromorphoThreePointCylinders);
    assert_eq!(
        warnings,
        vec![SomaDiagnostic::ZeroRadius {
            kind: SomaKind::NeuromorphoThreePointCylinders
        }]
    );
    assert_eq!(
        warnings[0].to_string(),
        "Zero radius for SomaNeuromorphoThreePointCylinders"
    );
}

#[test]
fn test_three_point_declared_by_reader() {
    let soma = Soma::with_kind(
        SomaKind::NeuromorphoThreePointCylinders,
        buffer(&[
            [1.0, 1.0, 1.0, 3.0],
            [1.0, 1.0, 4.0, 3.0],
            [1.0, 1.0, -2.0, 3.0],
        ]),
    )
    .unwrap();
    assert_eq!(soma.format(), None);
    assert_eq!(soma.radius(), Some(3.0));
    assert_relative_eq!(soma.area().unwrap(), 4.0 * PI * 9.0, epsilon = 1e-9);
}

// ============================================================================
// Cylinders
// ============================================================================

#[test]
fn test_cylinder_stack_equivalent_to_sphere() {
    let soma = swc(&[
        [0.0, 0.0, -10.0, 40.0],
        [0.0, 0.0, 0.0, 40.0],
        [0.0, 0.0, 10.0, 40.0],
    ]);

    assert_eq!(soma.kind(), SomaKind::Cylinders);
    assert!(soma.to_string().contains("SomaCylinders"));
    assert_center(&soma, [0.0, 0.0, 0.0]);
    assert_relative_eq!(soma.radius().unwrap(), 20.0, epsilon = 1e-12);
    assert_relative_eq!(soma.area().unwrap(), 5026.548245743669, epsilon = 1e-9);
}

#[test]
fn test_cylinder_cone_without_base() {
    let rows: Vec<[f64; 4]> = (0..6)
        .map(|k| {
            let v = f64::from(2 * k);
            [0.0, v, 0.0, v]
        })
        .collect();
    let soma = swc(&rows);

    assert_eq!(soma.kind(), SomaKind::Cylinders);
    assert_relative_eq!(soma.area().unwrap(), 444.288293851, epsilon = 1e-6);
    assert_center(&soma, [0.0, 5.0, 0.0]);
}

#[test]
fn test_cylinder_area_ignores_sample_order() {
    let ordered = [
        [0.0, 0.0, 0.0, 1.0],
        [3.0, 0.0, 0.0, 2.0],
        [5.0, 0.0, 0.0, 1.0],
        [9.0, 0.0, 0.0, 0.5],
    ];
    let shuffled = [ordered[2], ordered[0], ordered[3], ordered[1]];
    assert_relative_eq!(
        swc(&ordered).area().unwrap(),
        swc(&shuffled).area().unwrap(),
        epsilon = 1e-12
    );
}

// ============================================================================
// Simple contour
// ============================================================================

#[test]
fn test_degenerate_contour_triangle() {
    let soma = contour(&[
        [0.0, 0.0, 0.0, 44.0],
        [0.0, -44.0, 0.0, 44.0],
        [0.0, 44.0, 0.0, 44.0],
    ]);

    assert_eq!(soma.kind(), SomaKind::SimpleContour);
    assert!(soma.to_string().contains("SomaSimpleContour"));
    assert_center(&soma, [0.0, 0.0, 0.0]);
    assert_relative_eq!(soma.radius().unwrap(), 29.333_333_33, epsilon = 1e-5);
    assert!(soma.area().is_err());
}

#[test]
fn test_contour_circle() {
    let rows: Vec<[f64; 4]> = (0..16)
        .map(|k| {
            let angle = 2.0 * PI * f64::from(k) / 16.0;
            [5.0 + 3.0 * angle.cos(), -1.0 + 3.0 * angle.sin(), 7.0, 0.5]
        })
        .collect();
    let soma = contour(&rows);
    assert_center(&soma, [5.0, -1.0, 7.0]);
    assert_relative_eq!(soma.radius().unwrap(), 3.0, epsilon = 1e-12);
}

// ============================================================================
// Empty
// ============================================================================

#[test]
fn test_empty_soma_for_every_format() {
    for format in [SomaFormat::Swc, SomaFormat::Contour] {
        let soma = Soma::new(format, SampleBuffer::default()).unwrap();
        assert_eq!(soma.kind(), SomaKind::Empty);
        assert_eq!(soma.center(), None);
        assert_eq!(soma.radius(), None);
        assert_eq!(soma.points().shape(), (0, 4));
        assert_eq!(soma.iter().count(), 0);
    }
}

// ============================================================================
// Accessors and mutation
// ============================================================================

#[test]
fn test_iteration_yields_stored_rows() {
    let rows = [
        [0.0, 0.0, 0.0, 44.0],
        [0.0, -44.0, 0.0, 44.0],
        [0.0, 44.0, 0.0, 44.0],
    ];
    let soma = contour(&rows);

    let first: Vec<[f64; 4]> = soma.iter().collect();
    let second: Vec<[f64; 4]> = (&soma).into_iter().collect();
    assert_eq!(first, rows.to_vec());
    assert_eq!(first, second);
    assert_eq!(soma.points().to_rows(), rows.to_vec());
}

#[test]
fn test_set_points_reclassifies() {
    let mut soma = swc(&[[11.0, 22.0, 33.0, 44.0]]);
    soma.set_points_with_sink(
        buffer(&[
            [0.0, 0.0, 0.0, 10.0],
            [0.0, -10.0, 0.0, 10.0],
            [0.0, 10.0, 0.0, 10.0],
        ]),
        &mut NullSink,
    )
    .unwrap();

    assert_eq!(soma.kind(), SomaKind::NeuromorphoThreePointCylinders);
    assert_eq!(soma.format(), Some(SomaFormat::Swc));
    assert_relative_eq!(soma.area().unwrap(), 4.0 * PI * 100.0, epsilon = 1e-9);
}

#[test]
fn test_set_points_clears_diagnostics() {
    let mut soma = swc(&[
        [0.0, 0.0, 0.0, 10.0],
        [-2.0, -6.0, 0.0, 10.0],
        [2.0, 6.0, 0.0, 10.0],
    ]);
    assert_eq!(soma.diagnostics().len(), 1);

    soma.set_points_with_sink(buffer(&[[0.0, 0.0, 0.0, 1.0]]), &mut NullSink)
        .unwrap();
    assert!(soma.diagnostics().is_empty());
}

#[test]
fn test_radius_override_and_volume() {
    let mut soma = swc(&[[0.0, 0.0, 0.0, 1.0]]);
    soma.set_radius(3.0).unwrap();
    assert_eq!(soma.radius(), Some(3.0));
    assert_relative_eq!(soma.volume().unwrap(), 36.0 * PI, epsilon = 1e-9);
    assert_eq!(
        soma.to_string(),
        "SomaSinglePoint(samples: 1) <center: [0, 0, 0], radius: 3>"
    );
}

#[test]
fn test_kind_tags_accepted_by_reader_path() {
    let kind: SomaKind = "SOMA_SIMPLE_CONTOUR".parse().unwrap();
    let soma = Soma::with_kind(
        kind,
        buffer(&[
            [1.0, 0.0, 0.0, 1.0],
            [0.0, 1.0, 0.0, 1.0],
            [-1.0, 0.0, 0.0, 1.0],
            [0.0, -1.0, 0.0, 1.0],
        ]),
    )
    .unwrap();
    assert_eq!(soma.kind(), SomaKind::SimpleContour);
    assert_relative_eq!(soma.radius().unwrap(), 1.0, epsilon = 1e-12);
}
