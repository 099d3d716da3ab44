use mlzoo_boundaries::boundary::factory;
use mlzoo_boundaries::config::{ModelKind, SolverSpec};
use mlzoo_boundaries::data::Domain;
use mlzoo_boundaries::scene::{self, BoundaryRepr, Scene};

#[test]
fn every_preset_scene_builds_and_stays_in_its_domain() {
    let kinds = [
        ModelKind::Lda,
        ModelKind::Qda,
        ModelKind::Logistic,
        ModelKind::Multinomial,
        ModelKind::Perceptron,
        ModelKind::Ridge,
    ];

    for kind in kinds {
        let scene = Scene::build(kind).expect("preset scene must build");
        assert!(!scene.points.is_empty());
        let d = &scene.config.domain;
        for p in &scene.points {
            assert!(
                d.contains(p.x, p.y),
                "{:?}: point ({}, {}) outside domain",
                kind,
                p.x,
                p.y
            );
        }
    }
}

#[test]
fn perceptron_scene_at_epoch_nine_classifies_the_midpoint_as_class_one() {
    // Converged boundary w0 = -7.5, w1 = 0.82, w2 = 0.72 gives the domain
    // midpoint a score of -7.5 + 4.1 + 3.6 = 0.2 >= 0.
    let scene = scene::perceptron(9).unwrap();
    assert_eq!(scene.points.len(), 40);
    assert_eq!(scene.classifier.classify(5.0, 5.0), 1);
}

#[test]
fn perceptron_epochs_separate_monotonically_better() {
    let track = scene::perceptron_epochs();
    assert_eq!(track.len(), 10);
    // Past-the-end epochs clamp to the converged snapshot.
    assert_eq!(track.at(9), track.at(100));
    // Cluster centers end up on opposite sides of the converged boundary.
    let last = track.at(9);
    assert!(last.score(3.0, 3.0) < 0.0);
    assert!(last.score(7.0, 7.0) > 0.0);
}

#[test]
fn ridge_table_covers_the_five_alphas_and_falls_back() {
    let table = scene::ridge_table();
    let keys: Vec<&str> = table.keys().collect();
    assert_eq!(keys, ["0.01", "0.1", "1", "10", "100"]);
    assert_eq!(table.get("999"), table.get("1"));
}

#[test]
fn scene_points_match_across_runs_bit_for_bit() {
    let a = scene::multinomial().unwrap();
    let b = scene::multinomial().unwrap();
    for (pa, pb) in a.points.iter().zip(b.points.iter()) {
        assert_eq!(pa.x.to_bits(), pb.x.to_bits());
        assert_eq!(pa.y.to_bits(), pb.y.to_bits());
        assert_eq!(pa.class, pb.class);
    }
}

#[test]
fn qda_and_its_lda_comparison_disagree_somewhere() {
    let scene = scene::qda().unwrap();
    let lda_variant = scene.comparison.as_ref().unwrap();
    let d = Domain::default();
    let mut disagreements = 0;
    let n = 40;
    for j in 0..n {
        for i in 0..n {
            let x = d.x_min + (d.x_max - d.x_min) * i as f64 / (n - 1) as f64;
            let y = d.y_min + (d.y_max - d.y_min) * j as f64 / (n - 1) as f64;
            if scene.classifier.classify(x, y) != lda_variant.classify(x, y) {
                disagreements += 1;
            }
        }
    }
    // The quadratic boundary curves away from the shared-covariance line.
    assert!(disagreements > 0);
}

#[test]
fn factory_builds_a_classifier_from_a_serialized_spec() {
    let json = r#"{
        "solver": "softmax",
        "weights": [[-2.0, -1.5, 1.2], [-2.0, 1.5, 1.2], [2.0, 0.0, -1.8]],
        "center": [5.0, 5.0]
    }"#;
    let spec: SolverSpec = serde_json::from_str(json).expect("spec must deserialize");
    let clf =
        factory::build_classifier(&spec, &[], &Domain::default()).expect("factory must build");
    assert_eq!(clf.classify(2.5, 7.0), 0);
    assert_eq!(clf.classify(7.5, 7.0), 1);
    assert_eq!(clf.classify(5.0, 2.5), 2);
}

#[test]
fn logistic_scene_boundary_steepens_with_c() {
    let weak = scene::logistic(0.1).unwrap();
    let strong = scene::logistic(100.0).unwrap();
    let (wb, sb) = match (&weak.repr, &strong.repr) {
        (BoundaryRepr::Line(a), BoundaryRepr::Line(b)) => (*a, *b),
        other => panic!("expected line boundaries, got {:?}", other),
    };
    assert!(sb.w1.abs() > wb.w1.abs());
    // Both pass through the pivot (5, 5).
    assert!(wb.score(5.0, 5.0).abs() < 1e-9);
    assert!(sb.score(5.0, 5.0).abs() < 1e-9);
}
