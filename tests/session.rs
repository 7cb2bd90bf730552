use linecalc::{
    calculate,
    error::{AssignmentError, CalcError, ExpressionError, RuntimeError},
    interpreter::{
        assignment::parse_assignment,
        session::{Outcome, Session, SessionConfig, SharedSession},
        store::VariableStore,
        token::{Operator, Token},
    },
};

fn assert_success(session: &mut Session, line: &str) -> Outcome {
    match session.evaluate_line(line) {
        Ok(Some(outcome)) => outcome,
        Ok(None) => panic!("Line {line:?} produced no outcome"),
        Err(e) => panic!("Line {line:?} failed: {e}"),
    }
}

fn assert_failure(session: &mut Session, line: &str) -> CalcError {
    match session.evaluate_line(line) {
        Ok(outcome) => panic!("Line {line:?} succeeded with {outcome:?} but was expected to fail"),
        Err(e) => e,
    }
}

#[test]
fn expression_lines() {
    let mut session = Session::new();
    assert_eq!(assert_success(&mut session, "12+6"), Outcome::Value(18.0));
    assert_eq!(assert_success(&mut session, "(3+7)/(4-2)"), Outcome::Value(5.0));
    assert_eq!(assert_success(&mut session, "3--1(4)"), Outcome::Value(7.0));
    assert_eq!(assert_success(&mut session, "2^3^2"), Outcome::Value(64.0));
    assert_eq!(assert_success(&mut session, "(3-(6 * 4"), Outcome::Value(-21.0));
    assert_eq!(assert_success(&mut session, "-(3+4)"), Outcome::Value(1.0));
    assert_eq!(assert_success(&mut session, "10-(2*3)"), Outcome::Value(4.0));
}

#[test]
fn blank_lines_produce_nothing() {
    let mut session = Session::new();
    assert_eq!(session.evaluate_line(""), Ok(None));
    assert_eq!(session.evaluate_line("  \t"), Ok(None));
}

#[test]
fn assignment_then_reference() {
    let mut session = Session::new();
    assert_eq!(assert_success(&mut session, "x = 3+4"),
               Outcome::Assigned { name: 'x', value: 7.0 });
    assert_eq!(session.store().get('x'), Some(7.0));
    assert_eq!(assert_success(&mut session, "x*2"), Outcome::Value(14.0));
    assert_eq!(assert_success(&mut session, "2x"), Outcome::Value(14.0));
    assert_eq!(assert_success(&mut session, "-x"), Outcome::Value(-7.0));
}

#[test]
fn reassignment_uses_previous_value() {
    let mut session = Session::new();
    assert_success(&mut session, "a=2");
    assert_success(&mut session, "a = a^3");
    assert_success(&mut session, "b = a(a-6)");
    assert_eq!(session.store().get('a'), Some(8.0));
    assert_eq!(session.store().get('b'), Some(16.0));
    assert_eq!(session.store().entries(), vec![('a', 8.0), ('b', 16.0)]);
}

#[test]
fn failed_lines_leave_variables_unchanged() {
    let mut session = Session::new();
    assert_success(&mut session, "x=5");

    assert!(matches!(assert_failure(&mut session, "x = 1/0"),
                     CalcError::Runtime(RuntimeError::DivisionByZero)));
    assert!(matches!(assert_failure(&mut session, "x = 1++*2"),
                     CalcError::InvalidAssignment(AssignmentError::Expression(ExpressionError::TooManyOperators))));
    assert!(matches!(assert_failure(&mut session, "x = 1 = 2"),
                     CalcError::InvalidAssignment(AssignmentError::MultipleEquals)));
    assert_success(&mut session, "y = 2");
    assert_eq!(session.store().get('x'), Some(5.0));
    assert_eq!(assert_success(&mut session, "x+y"), Outcome::Value(7.0));
}

#[test]
fn assignment_name_is_first_letter() {
    let mut session = Session::new();
    assert_eq!(assert_success(&mut session, "3x = 4"), Outcome::Assigned { name: 'x', value: 4.0 });
    assert_eq!(assert_success(&mut session, "yz = 3"), Outcome::Assigned { name: 'y', value: 3.0 });
    assert_eq!(assert_success(&mut session, "  b+ = 2"), Outcome::Assigned { name: 'b', value: 2.0 });
    assert!(!session.store().has('z'));
    assert_eq!(session.store().len(), 3);
}

#[test]
fn assignments_without_a_name() {
    let mut session = Session::new();
    assert_eq!(assert_failure(&mut session, "= 3"),
               CalcError::InvalidAssignment(AssignmentError::MissingName));
    assert_eq!(assert_failure(&mut session, "3 = 3"),
               CalcError::InvalidAssignment(AssignmentError::MissingName));
    assert_eq!(assert_failure(&mut session, "x ="),
               CalcError::InvalidAssignment(AssignmentError::Expression(ExpressionError::Empty)));
    assert!(session.store().is_empty());
}

#[test]
fn unknown_variables_are_invalid_expressions() {
    let mut session = Session::new();
    assert_eq!(assert_failure(&mut session, "z+1"),
               CalcError::InvalidExpression(ExpressionError::UnsupportedCharacter { ch: 'z' }));
    assert!(matches!(assert_failure(&mut session, "z = z+1"),
                     CalcError::InvalidAssignment(AssignmentError::Expression(_))));
}

#[test]
fn parse_assignment_does_not_store() {
    let store = VariableStore::new();
    let assignment = parse_assignment("q = 2*3", &store).unwrap();
    assert_eq!(assignment.name, 'q');
    assert_eq!(assignment.expression.as_slice(),
               &[Token::Number(2.0), Token::Operator(Operator::Mul), Token::Number(3.0)]);
    assert!(!store.has('q'));
    assert_eq!(parse_assignment("q 2", &store), Err(AssignmentError::MissingEquals));
}

#[test]
fn session_config_limits_nesting() {
    let mut session = Session::with_config(SessionConfig { max_depth: 1 });
    assert_eq!(assert_success(&mut session, "(1+2)*(3)"), Outcome::Value(9.0));
    assert_eq!(assert_failure(&mut session, "((1))"),
               CalcError::Runtime(RuntimeError::NestingTooDeep { limit: 1 }));
}

#[test]
fn outcome_display() {
    assert_eq!(Outcome::Value(18.0).to_string(), "=18");
    assert_eq!(Outcome::Value(10.8).to_string(), "=10.8");
    assert_eq!(Outcome::Assigned { name: 'x', value: 7.0 }.to_string(), "x = 7");
}

#[test]
fn error_display() {
    let mut session = Session::new();
    assert_eq!(assert_failure(&mut session, "12+++6").to_string(),
               "Invalid expression: Too many operators in a row");
    assert_eq!(assert_failure(&mut session, "x=1=2").to_string(),
               "Invalid assignment: Only 1 \"=\" sign allowed");
    assert_eq!(assert_failure(&mut session, "12/0").to_string(), "Division by zero");
}

#[test]
fn shared_session_serialises_lines() {
    let shared = SharedSession::new(Session::new());
    assert_eq!(shared.evaluate_line("k = 10"), Ok(Some(Outcome::Assigned { name: 'k', value: 10.0 })));

    std::thread::scope(|scope| {
        for _ in 0..8 {
            scope.spawn(|| shared.evaluate_line("k = k-1").unwrap());
        }
    });

    assert_eq!(shared.get('k'), Some(2.0));
    assert_eq!(shared.into_inner().store().get('k'), Some(2.0));
}

#[test]
fn calculate_uses_an_empty_store() {
    assert_eq!(calculate("12+-6/5").map(|v| (v * 10.0).round()), Ok(108.0));
    assert_eq!(calculate("x+1"),
               Err(CalcError::InvalidExpression(ExpressionError::UnsupportedCharacter { ch: 'x' })));
}
