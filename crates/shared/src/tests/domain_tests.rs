use super::*;

#[test]
fn department_parses_display_names_case_insensitively() {
    for department in Department::ALL {
        assert_eq!(department.as_str().parse::<Department>(), Ok(department));
    }
    assert_eq!("hr".parse::<Department>(), Ok(Department::Hr));
    assert_eq!(" sales ".parse::<Department>(), Ok(Department::Sales));
    assert_eq!(
        "Legal".parse::<Department>(),
        Err(DomainError::UnknownDepartment("Legal".to_string()))
    );
}

#[test]
fn department_serializes_with_display_name() {
    let encoded = serde_json::to_string(&Department::Hr).expect("encode");
    assert_eq!(encoded, "\"HR\"");
    let decoded: Department = serde_json::from_str("\"Operations\"").expect("decode");
    assert_eq!(decoded, Department::Operations);
}

#[test]
fn performance_rejects_out_of_range_ratings() {
    assert_eq!(Performance::new(0), Err(DomainError::PerformanceOutOfRange(0)));
    assert_eq!(Performance::new(6), Err(DomainError::PerformanceOutOfRange(6)));
    assert_eq!(Performance::new(3).map(Performance::get), Ok(3));
    assert!(serde_json::from_str::<Performance>("9").is_err());
}

#[test]
fn performance_promotion_saturates_at_max() {
    let top = Performance::saturating(42);
    assert!(top.is_max());
    assert_eq!(top.promoted(), top);
    assert_eq!(Performance::saturating(0).get(), Performance::MIN);
    assert_eq!(Performance::saturating(2).promoted().get(), 3);
}

#[test]
fn performance_tier_bands() {
    let tiers: Vec<_> = (1..=5)
        .map(|rating| Performance::saturating(rating).tier())
        .collect();
    assert_eq!(
        tiers,
        vec![
            PerformanceTier::AtRisk,
            PerformanceTier::Developing,
            PerformanceTier::Solid,
            PerformanceTier::Strong,
            PerformanceTier::Strong,
        ]
    );
}

#[test]
fn promote_reports_whether_rating_changed() {
    let mut employee = Employee {
        id: EmployeeId(1),
        first_name: "Emily".into(),
        last_name: "Johnson".into(),
        email: "emily.johnson@x.dummyjson.com".into(),
        age: 28,
        department: Department::Engineering,
        performance: Performance::saturating(4),
    };

    assert!(employee.promote());
    assert_eq!(employee.performance.get(), 5);
    assert!(!employee.promote());
    assert_eq!(employee.performance.get(), 5);
    assert_eq!(employee.full_name(), "Emily Johnson");
}
