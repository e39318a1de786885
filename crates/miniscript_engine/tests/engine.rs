use std::cell::RefCell;
use std::rc::Rc;

use miniscript_diagnostic::sources::Cached;
use miniscript_diagnostic::termcolor::NoColor;
use miniscript_diagnostic::{Config, IntoDiagnostic};
use miniscript_engine::{Engine, EngineError, ParseErrorKind, RuntimeErrorKind};

type Calls = Rc<RefCell<Vec<Vec<f64>>>>;

fn register_recorder(engine: &mut Engine, name: &str) -> Calls {
    let calls = Calls::default();
    engine.register_function(name, {
        let calls = calls.clone();
        move |args: &[f64]| calls.borrow_mut().push(args.to_vec())
    });
    calls
}

fn logging_engine() -> (Engine, Rc<RefCell<Vec<String>>>) {
    let log = Rc::new(RefCell::new(vec![]));
    (Engine::with_log_sink(log.clone()), log)
}

fn parse_error_kind(err: EngineError) -> ParseErrorKind {
    match err {
        EngineError::Parse(err) => err.kind,
        other => panic!("expected a parse error, got {other:?}"),
    }
}

fn runtime_error_kind(err: EngineError) -> RuntimeErrorKind {
    match err {
        EngineError::Runtime(err) => err.kind,
        other => panic!("expected a runtime error, got {other:?}"),
    }
}

#[test]
fn assignment_result() {
    let engine = Engine::empty();
    let env = engine.run("function f(){ var x = 2 + 3 * 4; }").unwrap();
    assert_eq!(env.get("x"), Some(14.0));
}

#[test]
fn native_called_once() {
    let mut engine = Engine::empty();
    let calls = register_recorder(&mut engine, "Print");

    engine.execute("function f(){ Print(1); }").unwrap();

    assert_eq!(*calls.borrow(), [vec![1.0]]);
}

#[test]
fn unknown_function() {
    let mut engine = Engine::empty();
    let calls = register_recorder(&mut engine, "Print");

    let err = engine
        .execute("function f(){ Unknown(1); Print(2); }")
        .unwrap_err();

    assert_eq!(
        runtime_error_kind(err),
        RuntimeErrorKind::UnknownFunction("Unknown".to_owned())
    );
    assert!(calls.borrow().is_empty());
}

#[test]
fn unknown_variable() {
    let engine = Engine::empty();
    let err = engine.execute("function f(){ var y = z + 1; }").unwrap_err();

    assert_eq!(
        runtime_error_kind(err),
        RuntimeErrorKind::UnknownVariable("z".to_owned())
    );
}

#[test]
fn earlier_calls_are_not_rolled_back() {
    let mut engine = Engine::empty();
    let calls = register_recorder(&mut engine, "Print");

    let result = engine.execute("function f(){ Print(1); var a = b; Print(2); }");

    assert!(result.is_err());
    assert_eq!(*calls.borrow(), [vec![1.0]]);
}

#[test]
fn parse_errors_name_expected_token() {
    let cases = [
        ("function f(){ var x = 1 }", "`;`"),
        ("function f(){ var x = 1;", "`}`"),
        ("function f({ }", "`)`"),
        ("function f(){ Print(1; }", "`)`"),
    ];

    for (source, expected_token) in cases {
        let err = Engine::empty().execute(source).unwrap_err();
        match parse_error_kind(err) {
            ParseErrorKind::Expected { expected, .. } => assert_eq!(expected, expected_token),
            other => panic!("wrong parse error for {source:?}: {other:?}"),
        }
    }
}

#[test]
fn parse_errors_run_nothing() {
    let mut engine = Engine::empty();
    let calls = register_recorder(&mut engine, "Print");

    assert!(engine.execute("function f(){ Print(1); Print(2) }").is_err());
    assert!(calls.borrow().is_empty());
}

#[test]
fn repeated_execution_is_identical() {
    let mut engine = Engine::empty();
    let calls = register_recorder(&mut engine, "Emit");

    let script = "function f(){ var a = 1; Emit(a); var a = a + 1; Emit(a, a * 3); }";

    engine.execute(script).unwrap();
    let first = calls.borrow_mut().split_off(0);

    engine.execute(script).unwrap();
    let second = calls.borrow_mut().split_off(0);

    assert_eq!(first, [vec![1.0], vec![2.0, 6.0]]);
    assert_eq!(first, second);
}

#[test]
fn environment_is_fresh_per_execution() {
    let engine = Engine::empty();

    engine.execute("function f(){ var x = 1; }").unwrap();
    let err = engine.execute("function g(){ var y = x; }").unwrap_err();

    assert_eq!(
        runtime_error_kind(err),
        RuntimeErrorKind::UnknownVariable("x".to_owned())
    );
}

#[test]
fn function_name_does_not_matter() {
    let engine = Engine::empty();

    let a = engine.run("function main(){ var x = 3; }").unwrap();
    let b = engine.run("function doSomething(){ var x = 3; }").unwrap();

    assert_eq!(a, b);
}

#[test]
fn last_registration_wins() {
    let mut engine = Engine::empty();
    let first = register_recorder(&mut engine, "F");
    let second = register_recorder(&mut engine, "F");

    engine.execute("function f(){ F(1); }").unwrap();

    assert!(first.borrow().is_empty());
    assert_eq!(*second.borrow(), [vec![1.0]]);
}

#[test]
fn print_logs_first_argument() {
    let (engine, log) = logging_engine();

    engine
        .execute("function f(){ print(7); print(1.5, 2); print(); print(1 / 0); }")
        .unwrap();

    assert_eq!(*log.borrow(), ["7", "1.5", "inf"]);
}

#[test]
fn print_can_be_replaced() {
    let (mut engine, log) = logging_engine();
    let calls = register_recorder(&mut engine, "print");

    engine.execute("function f(){ print(1); }").unwrap();

    assert!(log.borrow().is_empty());
    assert_eq!(*calls.borrow(), [vec![1.0]]);
}

#[test]
fn registered_names() {
    let mut engine = Engine::new();
    engine.register_function("Spawn", |_| {});

    let mut names: Vec<_> = engine.function_names().collect();
    names.sort_unstable();

    assert_eq!(names, ["Spawn", "print"]);
    assert!(engine.has_function("print"));
    assert!(!Engine::empty().has_function("print"));
}

#[test]
fn errors_render_as_diagnostics() {
    let source = "function f() {\n  var y = z + 1;\n}";
    let err = Engine::empty().execute(source).unwrap_err();

    let cached = Cached::new(("script".to_owned(), source.to_owned()));
    let mut stream = NoColor::new(vec![]);
    err.into_diagnostic()
        .write_to_stream(&cached, &Config::ascii(), &mut stream)
        .unwrap();

    assert_eq!(
        String::from_utf8(stream.into_inner()).unwrap(),
        "Error: unknown variable `z`\n\
         In script:2:11\n\
         2 |   var y = z + 1;\n  \
           |           ^  not assigned before this point\n\n"
    );
}

#[test]
fn error_display() {
    let err = Engine::empty().execute("function f() { 1 }").unwrap_err();
    assert_eq!(
        err.to_string(),
        "syntax error: expected a statement, found `1`"
    );
    assert_eq!(err.span().start, 15);
}
