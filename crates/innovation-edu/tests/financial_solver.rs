use innovation_edu::finance::{
    break_even, irr, npv, payback_period, CashFlowSchedule, FinanceError, IrrOptions,
    IrrResolution,
};

#[test]
fn dcf_walkthrough_matches_the_curriculum_figures() {
    let schedule =
        CashFlowSchedule::from_pairs([(0, -1000.0), (1, 500.0), (2, 700.0)]).expect("valid");

    let undiscounted = npv(&schedule, 0.0).expect("rate 0 in domain");
    assert!((undiscounted - 200.0).abs() < 1e-9);

    let discounted = npv(&schedule, 0.12).expect("rate in domain");
    assert!((discounted - 46.94).abs() < 0.01);

    // A scenario delta: the same schedule under a harsher discount rate
    // loses value monotonically.
    let harsher = npv(&schedule, 0.25).expect("rate in domain");
    assert!(harsher < discounted);
}

#[test]
fn irr_and_payback_agree_on_a_recovering_project() {
    let schedule =
        CashFlowSchedule::from_pairs([(0, -1000.0), (1, 600.0), (2, 600.0)]).expect("valid");

    match irr(&schedule, IrrOptions::default()).expect("valid schedule") {
        IrrResolution::Converged { rate } => {
            assert!((rate - 0.1307).abs() < 1e-3);
        }
        other => panic!("expected convergence, got {other:?}"),
    }

    assert_eq!(payback_period(&schedule), Some(2));
}

#[test]
fn validation_failures_surface_before_any_computation() {
    assert_eq!(
        CashFlowSchedule::from_pairs(std::iter::empty()),
        Err(FinanceError::EmptySchedule)
    );

    let schedule = CashFlowSchedule::from_pairs([(0, -100.0), (1, 60.0)]).expect("valid");
    assert!(matches!(
        npv(&schedule, -1.0),
        Err(FinanceError::RateOutOfDomain { .. })
    ));
}

#[test]
fn no_solution_is_a_result_not_an_error() {
    let all_inflows = CashFlowSchedule::from_pairs([(0, 1000.0), (1, 500.0)]).expect("valid");
    assert_eq!(
        irr(&all_inflows, IrrOptions::default()),
        Ok(IrrResolution::NoSolution)
    );
}

#[test]
fn break_even_feeds_the_unit_economics_lesson() {
    let point = break_even(24_000.0, 80.0, 50.0).expect("positive margin");
    assert!((point.units - 800.0).abs() < 1e-9);
    assert!((point.revenue - 64_000.0).abs() < 1e-9);
}
