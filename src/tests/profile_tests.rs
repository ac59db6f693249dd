//! # Pipeline Test Suite
//!
//! End-to-end checks of the sampling pipeline: cloud construction, nearest
//! neighbor evaluation, line discretization and profile building, plus the
//! demo setup the driver runs.

use cloud_profile_lib::renderer::{AsciiPlot, PlotSink};
use cloud_profile_lib::{
    config::Config, demo, line_sampler, profile, DiscreteFunction, GeometryError, Line, Point,
    PointCloud,
};

use crate::config_path;

fn line(x0: f64, y0: f64, x1: f64, y1: f64) -> Line {
    Line::new(Point::new(x0, y0), Point::new(x1, y1)).expect("Should build a proper line")
}

/// Evaluating just off a cloud point returns that point's value.
#[test]
fn nearest_value_near_origin() {
    let cloud = PointCloud::new(vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(0.0, 1.0),
    ])
    .expect("Should build the cloud");
    let function =
        DiscreteFunction::new(&cloud, vec![10.0, 20.0, 30.0]).expect("Should bind the values");

    assert_eq!(function.evaluate(&Point::new(0.1, 0.1)), 10.0);
}

/// Every precondition violation surfaces as `InvalidArgument`.
#[test]
fn invalid_inputs_are_rejected_eagerly() {
    assert!(matches!(
        PointCloud::new(vec![]),
        Err(GeometryError::InvalidArgument { .. })
    ));

    let cloud = PointCloud::new(vec![Point::new(0.0, 0.0)]).expect("Should build the cloud");
    assert!(matches!(
        DiscreteFunction::new(&cloud, vec![]),
        Err(GeometryError::InvalidArgument { .. })
    ));

    assert!(matches!(
        line_sampler::discretize(&line(0.0, 0.0, 1.0, 1.0), 1),
        Err(GeometryError::InvalidArgument { .. })
    ));

    assert!(matches!(
        Line::new(Point::new(2.0, 2.0), Point::new(2.0, 2.0)),
        Err(GeometryError::InvalidArgument { .. })
    ));
}

/// A cloud made of the sample points of a line reproduces its own values.
///
/// Each sample's nearest neighbor is itself, at distance zero.
#[test]
fn line_cloud_round_trip() {
    let l = line(-2.0, 1.0, 3.0, -0.5);
    let n = 57;
    let points = line_sampler::discretize(&l, n).expect("Should discretize");
    let cloud = PointCloud::new(points.clone()).expect("Should build the line cloud");
    let values: Vec<f64> = (0..n).map(|i| i as f64 * 1.5 - 7.0).collect();
    let function = DiscreteFunction::new(&cloud, values.clone()).expect("Should bind the values");

    for (point, expected) in points.iter().zip(&values) {
        assert_eq!(
            function.evaluate(point),
            *expected,
            "Sample at ({}, {}) should map to its own value",
            point.x(),
            point.y()
        );
    }

    let result = profile::build(&function, &l, n).expect("Should build the profile");
    assert_eq!(result.values(), values);
}

/// Two-point profile: distances are the endpoints, values the endpoint values.
#[test]
fn two_point_profile() {
    let cloud = PointCloud::new(vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)])
        .expect("Should build the cloud");
    let function = DiscreteFunction::new(&cloud, vec![5.0, 50.0]).expect("Should bind the values");

    let result = profile::build(&function, &line(0.0, 0.0, 10.0, 0.0), 2)
        .expect("Should build the profile");
    assert_eq!(result.distances(), vec![0.0, 10.0]);
    assert_eq!(result.values(), vec![5.0, 50.0]);
}

/// The demo profile has the requested length, starts at zero, increases in
/// distance and ends at the diagonal's length.
#[test]
fn demo_profile_is_well_formed() {
    let config = Config::default();
    let cloud = demo::grid_cloud(1.0, 1.0, 20, 20).expect("Should build the grid");
    let values = demo::sample_values(&cloud, demo::test_function);
    let function = DiscreteFunction::new(&cloud, values).expect("Should bind the values");
    let diagonal = line(
        config.line.source_x,
        config.line.source_y,
        config.line.target_x,
        config.line.target_y,
    );

    let n = 400;
    let result = profile::build(&function, &diagonal, n).expect("Should build the profile");

    assert_eq!(result.len(), n);
    assert_eq!(result.samples[0].distance, 0.0);
    for pair in result.samples.windows(2) {
        assert!(
            pair[0].distance < pair[1].distance,
            "Distances should increase: {} then {}",
            pair[0].distance,
            pair[1].distance
        );
    }
    let last = result.samples[n - 1].distance;
    assert!(
        (last - std::f64::consts::SQRT_2).abs() < 1e-12,
        "Profile should end at the diagonal length, got {last}"
    );

    // Every value is one of the cloud's values, so within the test function's range
    let (min, max) = result.value_bounds().expect("Profile should not be empty");
    assert!(min >= -1.0 && max <= 1.0);
}

/// Values along the profile are exactly those of the nearest cloud points.
#[test]
fn profile_values_match_brute_force_lookup() {
    let cloud = demo::grid_cloud(1.0, 1.0, 7, 5).expect("Should build the grid");
    let values = demo::sample_values(&cloud, |p| p.x() * 3.0 - p.y());
    let function = DiscreteFunction::new(&cloud, values.clone()).expect("Should bind the values");
    let l = line(0.05, 0.9, 0.95, 0.1);

    let samples = line_sampler::discretize(&l, 64).expect("Should discretize");
    let result = profile::build(&function, &l, 64).expect("Should build the profile");

    for (point, sample) in samples.iter().zip(&result.samples) {
        let nearest = cloud.nearest_index(point);
        assert_eq!(sample.value, values[nearest]);
        assert_eq!(sample.distance, line_sampler::arc_length(&l, point));
    }
}

/// The driver's pipeline end to end, plotted into a buffer.
#[test]
fn plot_over_line_renders_demo() {
    let cloud = demo::grid_cloud(1.0, 1.0, 10, 10).expect("Should build the grid");
    let values = demo::sample_values(&cloud, demo::test_function);
    let function = DiscreteFunction::new(&cloud, values).expect("Should bind the values");

    let mut sink = AsciiPlot::new(Vec::new(), 12, 40);
    let result = profile::plot_over_line(&function, &line(0.0, 0.0, 1.0, 1.0), 200, &mut sink)
        .expect("Should sample and plot");
    assert_eq!(result.len(), 200);

    let output = String::from_utf8(sink.into_inner()).expect("Plot should be UTF-8");
    assert!(output.contains('•'), "Plot should contain data points");
    assert_eq!(output.lines().count(), 12 + 2);
}

/// A sink rejects mismatched columns before writing anything.
#[test]
fn sink_rejects_mismatched_columns() {
    let mut sink = AsciiPlot::new(Vec::new(), 5, 10);
    assert!(sink.plot(&[0.0, 1.0], &[1.0]).is_err());
}

/// `--config` picks up the following argument.
#[test]
fn config_flag_parsing() {
    let args: Vec<String> = ["cloud-profile", "--json", "--config", "custom.toml"]
        .iter()
        .map(|s| s.to_string())
        .collect();
    assert_eq!(config_path(&args), Some("custom.toml"));

    let args: Vec<String> = vec!["cloud-profile".to_string(), "--config".to_string()];
    assert_eq!(config_path(&args), None);

    let args: Vec<String> = vec![
        "cloud-profile".to_string(),
        "--config".to_string(),
        "--json".to_string(),
    ];
    assert_eq!(config_path(&args), None, "A following flag is not a path");

    let args: Vec<String> = vec!["cloud-profile".to_string(), "--json".to_string()];
    assert_eq!(config_path(&args), None);
}

/// Values far from zero with a tiny spread still plot and return.
#[test]
fn plot_over_line_far_offset_values() {
    let cloud = PointCloud::new(vec![Point::new(0.0, 0.0), Point::new(1.0, 0.0)])
        .expect("Should build the cloud");
    let function =
        DiscreteFunction::new(&cloud, vec![1e17, 1e17 + 16.0]).expect("Should bind the values");

    let mut sink = AsciiPlot::new(Vec::new(), 10, 20);
    let result = profile::plot_over_line(&function, &line(0.0, 0.0, 1.0, 0.0), 5, &mut sink)
        .expect("Should sample and plot");
    assert_eq!(result.len(), 5);

    let output = String::from_utf8(sink.into_inner()).expect("Plot should be UTF-8");
    assert_eq!(output.lines().count(), 10 + 2);
    assert!(output.contains("e17"), "Axis labels should be in exponent form");
}
