use openlaplace::core::InversionEngine;
use openlaplace::engines::{DeHoogEngine, StehfestEngine};
use openlaplace::models::{
    DualPorosity, FiniteRadial, InfiniteRadial, LineSource, OuterBoundary,
};

const EULER_GAMMA: f64 = 0.577_215_664_901_532_9;

#[test]
fn infinite_radial_dehoog_and_stehfest_agree_within_1e3() {
    let model = InfiniteRadial {
        storage: 1000.0,
        skin: 5.0,
    };
    let dehoog = DeHoogEngine::default();
    let stehfest = StehfestEngine::default();

    for &t in &[1e2, 1e4, 1e6] {
        let a = dehoog.invert(&model, t).expect("dehoog");
        let b = stehfest.invert(&model, t).expect("stehfest");
        assert!(
            (a - b).abs() / a.abs() < 1e-3,
            "t={t} dehoog={a} stehfest={b}"
        );
    }
}

#[test]
fn line_source_matches_log_approximation_at_late_time() {
    // storage and skin effects are over by t = 1e6; the drawdown follows
    // p_wD ~ 0.5 (ln 4t - gamma) + S
    let model = LineSource {
        storage: 1000.0,
        skin: 5.0,
    };
    let t = 1e6;
    let got = DeHoogEngine::default().invert(&model, t).expect("dehoog");
    let approx = 0.5 * ((4.0 * t).ln() - EULER_GAMMA) + model.skin;
    assert!(
        (got - approx).abs() / approx < 5e-3,
        "got={got} approx={approx}"
    );
}

#[test]
fn dual_porosity_converges_to_homogeneous_response_at_late_time() {
    // once the matrix has equilibrated the system acts single-porosity
    let dual = DualPorosity {
        storage: 0.0,
        skin: 0.0,
        storativity_ratio: 0.01,
        interporosity: 1e-6,
    };
    let line = LineSource {
        storage: 0.0,
        skin: 0.0,
    };
    let engine = DeHoogEngine::default();
    let t = 1e8;
    let a = engine.invert(&dual, t).expect("dual porosity");
    let b = engine.invert(&line, t).expect("line source");
    assert!((a - b).abs() / b < 1e-6, "dual={a} line={b}");
}

#[test]
fn finite_radial_engines_agree_for_both_boundary_conditions() {
    let dehoog = DeHoogEngine::default();
    let stehfest = StehfestEngine::default();

    for boundary in [OuterBoundary::Closed, OuterBoundary::ConstantPressure] {
        let model = FiniteRadial {
            storage: 1.0,
            skin: 1.0,
            radius: 20.0,
            boundary,
        };
        let t = 50.0;
        let a = dehoog.invert(&model, t).expect("dehoog");
        let b = stehfest.invert(&model, t).expect("stehfest");
        assert!(
            (a - b).abs() / a.abs() < 1e-3,
            "{boundary:?}: dehoog={a} stehfest={b}"
        );
    }
}

#[test]
fn dual_porosity_with_storage_agrees_across_engines() {
    let model = DualPorosity {
        storage: 100.0,
        skin: 2.0,
        storativity_ratio: 0.05,
        interporosity: 1e-4,
    };
    let dehoog = DeHoogEngine::default();
    let stehfest = StehfestEngine::default();

    for &t in &[10.0, 1e3, 1e5] {
        let a = dehoog.invert(&model, t).expect("dehoog");
        let b = stehfest.invert(&model, t).expect("stehfest");
        assert!(
            (a - b).abs() / a.abs() < 1e-3,
            "t={t} dehoog={a} stehfest={b}"
        );
    }
}
