use prattle::{
    error::{Error, EvalError},
    get_result,
    interpreter::{
        evaluator::Evaluator,
        lexer::{Token, tokenize},
        value::Value,
    },
};

fn eval(source: &str) -> Value {
    get_result(source).unwrap_or_else(|e| panic!("Script failed: {source}\nError: {e}"))
}

fn assert_int(source: &str, expected: i64) {
    assert_eq!(eval(source), Value::Integer(expected), "source: {source}");
}

fn assert_close(source: &str, expected: f64) {
    let Value::Real(found) = eval(source) else {
        panic!("Expected a real result from: {source}");
    };

    assert!((found - expected).abs() < 1e-9,
            "source: {source}, found: {found}, expected: {expected}");
}

fn assert_failure(source: &str) {
    assert!(get_result(source).is_err(),
            "Script succeeded but was expected to fail: {source}");
}

#[test]
fn integer_arithmetic_and_precedence() {
    assert_int("3", 3);
    assert_int("3 + 4", 7);
    assert_int("3 + 4 * 5 + 6", 29);
    assert_int("3 + -4 * 5 + 6", -11);
    assert_int("2-3*2", -4);
    assert_int("-3 + 4", 1);
    assert_int("- 3", -3);
}

#[test]
fn parenthesization() {
    assert_int("(3)", 3);
    assert_int("(3 + -4) * 5 + 6", 1);
    assert_int("2^(3*2)", 64);
}

#[test]
fn power_is_right_associative_and_exact() {
    assert_int("2^3^2", 512);
    assert_int("2^3*3", 24);
    assert_close("2^-1", 0.5);
    assert_close("2.5^2", 6.25);
}

#[test]
fn factorial_truncates_and_binds_tightly() {
    assert_int("-(3 + 1)!", -24);
    assert_int("0!", 1);
    assert_int("3.7!", 6);
}

#[test]
fn division_is_true_division() {
    assert_close("5/2", 2.5);
    assert_close("1+5/2", 3.5);
    assert_close("100*(100 + 1)/2", 5050.0);
    assert_close("3.3", 3.3);
    assert_close("3.3+4.4", 7.7);
}

#[test]
fn trig_and_constants() {
    assert_close("pi", std::f64::consts::PI);
    assert_close("sin (pi/2)", 1.0);
    assert_close("sin(pi/2)^2 + cos(pi/2)^2", 1.0);
    assert_close("tan(pi/4)", 1.0);
    assert_close("1 + tan(pi/4)", 2.0);
    assert_close("sec 0", 1.0);
    assert_close("cot(pi/4)", 1.0);
}

#[test]
fn identifiers_are_addresses() {
    // A bare identifier allocates a register and yields its address.
    assert_int("alice", 0);
    assert_int("alice ; bob", 1);

    // Reading the stored values takes an explicit dereference.
    assert_int("alice <- 100 ; bob <- 200 ; @alice + @bob", 300);
}

#[test]
fn assignment_chains_right_associatively() {
    assert_int("alice <- bob <- charlie <- 1000; @alice + @bob + @charlie",
               3000);
}

#[test]
fn assignment_is_an_expression() {
    assert_int("x <- 5", 5);
    assert_int("x <- 2 + 3 ; @x * 2", 10);
}

#[test]
fn dereference_is_right_associative() {
    assert_int("alice <- bob; bob <- 1000; @@alice", 1000);
}

#[test]
fn factorial_through_a_register() {
    assert_int("alice <- 10; @alice!", 3628800);
}

#[test]
fn quote_evaluates_to_the_length_tag_address() {
    // The register holds the heap address of the block's length tag, not
    // anything computed from the block's body.
    assert_int("x <- {2} ; @x", 0);
    assert_int("x <- {2 + 3}; y <- {3}; @y", 4);
}

#[test]
fn quote_stores_raw_tokens_with_a_length_prefix() {
    let mut session = Evaluator::new();
    session.evaluate("x <- {2 + 3}").unwrap();

    assert_eq!(session.dump_heap(), vec!["3", "2", "+", "3"]);
}

#[test]
fn call_replays_quoted_code() {
    assert_int("x <- {2 + 3}; call x", 5);
}

#[test]
fn call_spills_over_into_following_input() {
    // Replayed code is not fenced off: its expression keeps consuming the
    // tokens after the call.
    assert_int("x <- {2 + 3}; call x + 1", 6);
}

#[test]
fn called_code_sees_and_mutates_current_registers() {
    assert_int("x <- {2 + 3} ; y <- {foo <- 12 ; 10}; call y; @foo", 12);
}

#[test]
fn call_works_across_session_lines() {
    let mut session = Evaluator::new();
    session.evaluate("x <- {2}").unwrap();

    assert_eq!(session.evaluate("call x").unwrap(), Value::Integer(2));
}

#[test]
fn print_yields_its_operand() {
    assert_int("print 3 + 4", 7);
    assert_int("x <- 5 ; print @x", 5);
}

#[test]
fn registers_persist_across_evaluate_calls() {
    let mut session = Evaluator::new();
    session.evaluate("alice <- 100").unwrap();
    session.evaluate("bob <- 200").unwrap();

    assert_eq!(session.evaluate("@alice + @bob").unwrap(),
               Value::Integer(300));
}

#[test]
fn local_allocation_is_not_idempotent() {
    let mut session = Evaluator::new();
    session.evaluate("local x").unwrap();
    session.evaluate("local x").unwrap();

    assert_eq!(session.dump_registers(),
               vec![("x".to_string(), Value::Integer(0)),
                    ("x".to_string(), Value::Integer(0))]);
}

#[test]
fn resolve_prefers_the_oldest_register() {
    let mut session = Evaluator::new();
    session.evaluate("alice <- 7").unwrap();
    session.evaluate("local alice <- 9").unwrap();

    // Name lookup still finds the original; the shadow is only reachable
    // through its address.
    assert_eq!(session.evaluate("@alice").unwrap(), Value::Integer(7));
    assert_eq!(session.evaluate("@1").unwrap(), Value::Integer(9));
}

#[test]
fn partial_mutations_survive_a_failed_line() {
    let mut session = Evaluator::new();
    assert!(session.evaluate("x <- 5 ; 3 / 0").is_err());

    assert_eq!(session.evaluate("@x").unwrap(), Value::Integer(5));
}

#[test]
fn a_failed_line_does_not_poison_the_next() {
    let mut session = Evaluator::new();
    assert!(session.evaluate("3 4").is_err());

    assert_eq!(session.evaluate("5").unwrap(), Value::Integer(5));
}

#[test]
fn bad_examples_fail() {
    assert_failure("?");
    assert_failure("(3");
    assert_failure("()");
    assert_failure("3/0");
    assert_failure("3 4");
    assert_failure("{2");
    assert_failure("");
    assert_failure("local 3");
    assert_failure("@5");
    assert_failure("call x");
    assert_failure("100!");
}

#[test]
fn error_kinds_are_preserved() {
    assert!(matches!(get_result("?"), Err(Error::Lex(_))));
    assert!(matches!(get_result("(3"),
                     Err(Error::Eval(EvalError::ExpectedClosingParen))));
    assert!(matches!(get_result("()"),
                     Err(Error::Eval(EvalError::InvalidNud { .. }))));
    assert!(matches!(get_result("3/0"),
                     Err(Error::Eval(EvalError::DivisionByZero))));
    assert!(matches!(get_result("csc 0"),
                     Err(Error::Eval(EvalError::DivisionByZero))));
    assert!(matches!(get_result("3 4"),
                     Err(Error::Eval(EvalError::InvalidLed { .. }))));
    assert!(matches!(get_result("{2"),
                     Err(Error::Eval(EvalError::UnterminatedQuote))));
    assert!(matches!(get_result(""),
                     Err(Error::Eval(EvalError::UnexpectedEndOfInput))));
    assert!(matches!(get_result("local 3"),
                     Err(Error::Eval(EvalError::InvalidLocalName { .. }))));
    assert!(matches!(get_result("@5"),
                     Err(Error::Eval(EvalError::AddressOutOfRange { .. }))));
    assert!(matches!(get_result("call x"),
                     Err(Error::Eval(EvalError::HeapOutOfRange { .. }))));
    assert!(matches!(get_result("100!"), Err(Error::Eval(EvalError::Overflow))));
}

#[test]
fn call_validates_the_heap_entry() {
    // Address 2 lands on the '+' inside the stored block, not a length tag.
    assert!(matches!(get_result("x <- {2 + 3}; y <- 2; call y"),
                     Err(Error::Eval(EvalError::BadHeapLength { .. }))));

    // Address 3 lands on an integer whose "length" would run past the heap.
    assert!(matches!(get_result("x <- {2 + 3}; y <- 3; call y"),
                     Err(Error::Eval(EvalError::HeapOutOfRange { .. }))));
}

#[test]
fn unbounded_call_recursion_is_cut_off() {
    assert!(matches!(get_result("x <- {call x}; call x"),
                     Err(Error::Eval(EvalError::RecursionLimitExceeded { .. }))));
}

#[test]
fn tokenizing_is_deterministic() {
    let source = "x <- {2 + 3}; call x # replay";

    assert_eq!(tokenize(source).unwrap(), tokenize(source).unwrap());
}

#[test]
fn keywords_obey_longest_match() {
    assert_eq!(tokenize("pi").unwrap(), vec![Token::Pi]);
    assert_eq!(tokenize("pint").unwrap(),
               vec![Token::Identifier("pint".to_string())]);
}

#[test]
fn comments_are_skipped() {
    assert_int("3 + 4 # plus more commentary", 7);
}

#[test]
fn evaluate_file_runs_scripts() {
    let mut session = Evaluator::new();

    assert_eq!(session.evaluate_file("tests/example.calc").unwrap(),
               Value::Integer(15));
}

#[test]
fn evaluate_file_rejects_bad_paths() {
    let mut session = Evaluator::new();

    assert!(matches!(session.evaluate_file("tests/no_such_file.calc"),
                     Err(Error::FileNotFound(_))));
    assert!(matches!(session.evaluate_file("tests"),
                     Err(Error::IsADirectory(_))));
}
