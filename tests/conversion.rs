use std::fs;

use pretty_assertions::assert_eq;
use tomcast::{
    convert,
    converter::{
        comments::strip_comments,
        constants::{ConstantsTable, resolve_constants},
        evaluator::evaluate,
        loader::load,
        value::{Number, Value},
    },
    error::{ConvertError, EvalError, RenderError},
};
use walkdir::WalkDir;

fn assert_converts(source: &str, expected: &str) {
    match convert(source) {
        Ok(rendered) => assert_eq!(rendered, expected),
        Err(e) => panic!("Conversion failed: {e}"),
    }
}

fn assert_rejects(source: &str) {
    if let Ok(rendered) = convert(source) {
        panic!("Conversion succeeded but was expected to fail:\n{rendered}");
    }
}

fn no_constants() -> ConstantsTable {
    ConstantsTable::new()
}

#[test]
fn database_document_matches_reference_output() {
    assert_converts("[database]\nserver = \"192.168.1.1\"\nports = [8000, 8001, 8002]\n",
                    "([\n  database : ([\n    server : '192.168.1.1',\n    ports : [8000, 8001, 8002]\n  ])\n])");
}

#[test]
fn document_order_is_preserved() {
    assert_converts("zebra = 1\nalpha = 2\nmiddle = 3\n",
                    "([\n  zebra : 1,\n  alpha : 2,\n  middle : 3\n])");
}

#[test]
fn nesting_depth_drives_indentation() {
    assert_converts("[a]\n[a.b]\nc = 1\n",
                    "([\n  a : ([\n    b : ([\n      c : 1\n    ])\n  ])\n])");
}

#[test]
fn sequences_render_inline() {
    assert_converts("tags = [\"x\", \"y\"]\nempty = []\nmatrix = [[1, 2], [3]]\n",
                    "([\n  tags : ['x', 'y'],\n  empty : [],\n  matrix : [[1, 2], [3]]\n])");
}

#[test]
fn numbers_render_canonically() {
    // Integral floats keep their fractional marker; integers never gain one.
    assert_converts("a = 4.0\nb = 3.14\nc = 8000\nd = -2.5\n",
                    "([\n  a : 4.0,\n  b : 3.14,\n  c : 8000,\n  d : -2.5\n])");
}

#[test]
fn empty_mappings_render() {
    assert_converts("", "([\n])");
    assert_converts("[empty]\n", "([\n  empty : ([\n  ])\n])");
}

#[test]
fn key_names_are_validated() {
    assert_converts("server1 = 1\n", "([\n  server1 : 1\n])");

    for source in ["1server = 1\n", "server_name = 1\n", "\"with space\" = 1\n"] {
        match convert(source) {
            Err(ConvertError::Render(RenderError::InvalidKeyName { .. })) => {},
            other => panic!("Expected an invalid key name for {source:?}, got {other:?}"),
        }
    }
}

#[test]
fn unsupported_types_are_rejected() {
    match convert("flag = true\n") {
        Err(ConvertError::Render(RenderError::UnsupportedType { type_name: "boolean" })) => {},
        other => panic!("Expected a boolean rejection, got {other:?}"),
    }

    match convert("ts = 1979-05-27T07:32:00Z\n") {
        Err(ConvertError::Render(RenderError::UnsupportedType { type_name: "date-time" })) => {},
        other => panic!("Expected a date-time rejection, got {other:?}"),
    }
}

#[test]
fn line_comments_are_stripped() {
    assert_converts("NB. connection settings\nport = 1 NB. default\nhost = \"h\"\n",
                    "([\n  port : 1,\n  host : 'h'\n])");
}

#[test]
fn block_comments_are_stripped() {
    // The commented-out boolean would be rejected by the renderer if it
    // survived stripping.
    assert_converts("a = 1\n/# legacy = true\nb = 2 #/\nd = 3\n",
                    "([\n  a : 1,\n  d : 3\n])");
}

#[test]
fn unterminated_block_comment_runs_to_end_of_input() {
    assert_converts("a = 1\n/# everything below is gone\nb = true\n",
                    "([\n  a : 1\n])");
}

#[test]
fn line_comments_swallow_block_markers_on_their_line() {
    // The line pass runs first, so the open marker never reaches the block
    // pass and nothing below the line is consumed.
    assert_eq!(strip_comments("a = 1 NB. stray /# marker\nb = 2\n"),
               "a = 1 \nb = 2\n");

    assert_converts("a = 1 NB. stray /# marker\nb = 2\n",
                    "([\n  a : 1,\n  b : 2\n])");
}

#[test]
fn comment_markers_inside_strings_are_not_protected() {
    // The line comment eats the closing quote, leaving an unterminated
    // string behind.
    assert_rejects("url = \"x NB. y\"\n");
}

#[test]
fn constants_resolve_in_document_order() {
    let root = load("pi = 3.14\narea = \"!{* pi 2}\"\nname = \"svc\"\n").unwrap();
    let table = resolve_constants(&root).unwrap();

    assert_eq!(table.len(), 3);
    assert!(matches!(table.get("area"),
                     Some(Value::Float(x)) if (x - 6.28).abs() < 0.01));
    assert_eq!(table.get("name"), Some(&Value::Str("svc".to_string())));
}

#[test]
fn constants_can_chain() {
    let root = load("base = 10\ndouble = \"!{* base 2}\"\nquad = \"!{* double 2}\"\n").unwrap();
    let table = resolve_constants(&root).unwrap();

    assert_eq!(table.number("double"), Some(Number::Int(20)));
    assert_eq!(table.number("quad"), Some(Number::Int(40)));
}

#[test]
fn constant_expressions_render_as_literals() {
    // Resolution is a side channel; the rendered tree keeps the original
    // string.
    assert_converts("pi = 3.14\ntau = \"!{* pi 2}\"\n",
                    "([\n  pi : 3.14,\n  tau : '!{* pi 2}'\n])");
}

#[test]
fn nested_expressions_are_not_evaluated() {
    // Only top-level strings declare constants: this division by zero never
    // runs.
    assert_converts("[inner]\nexpr = \"!{/ 1 0}\"\n",
                    "([\n  inner : ([\n    expr : '!{/ 1 0}'\n  ])\n])");
}

#[test]
fn failed_constant_resolution_aborts_conversion() {
    match convert("bad = \"!{+ missing 1}\"\n") {
        Err(ConvertError::Eval(EvalError::UnresolvedOperand { .. })) => {},
        other => panic!("Expected an unresolved operand, got {other:?}"),
    }

    match convert("bad = \"!{/ 1 0}\"\n") {
        Err(ConvertError::Eval(EvalError::DivisionByZero)) => {},
        other => panic!("Expected a division by zero, got {other:?}"),
    }
}

#[test]
fn extra_operands_are_ignored() {
    assert_eq!(evaluate("!{- 10 4 99}", &no_constants()).unwrap(), Number::Int(6));
    assert_eq!(evaluate("!{sqrt 16 99}", &no_constants()).unwrap(), Number::Float(4.0));
}

#[test]
fn missing_operands_are_reported() {
    for expression in ["!{-}", "!{- 10}", "!{/}", "!{sqrt}", "!{+}", "!{print}"] {
        let err = evaluate(expression, &no_constants()).unwrap_err();
        assert!(matches!(err, EvalError::MissingOperand { .. }),
                "Expected a missing operand for {expression:?}, got {err:?}");
    }

    assert!(matches!(evaluate("!{}", &no_constants()).unwrap_err(),
                     EvalError::EmptyExpression));
    assert!(matches!(evaluate("!{% 4 2}", &no_constants()).unwrap_err(),
                     EvalError::UnknownOperator { .. }));
}

#[test]
fn arithmetic_stays_integral_until_promotion_is_needed() {
    assert_eq!(evaluate("!{+ 1 2}", &no_constants()).unwrap(), Number::Int(3));
    assert_eq!(evaluate("!{* 2 3 4}", &no_constants()).unwrap(), Number::Int(24));
    assert_eq!(evaluate("!{+ 5}", &no_constants()).unwrap(), Number::Int(5));

    assert_eq!(evaluate("!{+ 1 2.5}", &no_constants()).unwrap(), Number::Float(3.5));
    assert_eq!(evaluate("!{/ 8 2}", &no_constants()).unwrap(), Number::Float(4.0));
}

#[test]
fn arithmetic_failures_are_reported() {
    assert!(matches!(evaluate("!{* 9223372036854775807 2}", &no_constants()).unwrap_err(),
                     EvalError::Overflow));
    assert!(matches!(evaluate("!{+ 9007199254740992 0.5}", &no_constants()).unwrap_err(),
                     EvalError::PrecisionLoss { .. }));
    assert!(matches!(evaluate("!{sqrt -4}", &no_constants()).unwrap_err(),
                     EvalError::SqrtOfNegative { .. }));
    assert!(matches!(evaluate("!{/ 1 0.0}", &no_constants()).unwrap_err(),
                     EvalError::DivisionByZero));
}

#[test]
fn print_returns_its_first_operand() {
    assert_eq!(evaluate("!{print 3.14 2}", &no_constants()).unwrap(),
               Number::Float(3.14));
}

#[test]
fn whitespace_between_tokens_is_flexible() {
    assert_eq!(evaluate("!{  +   1 \t 2  }", &no_constants()).unwrap(), Number::Int(3));
}

#[test]
fn parse_errors_carry_line_numbers() {
    let err = load("a = 1\nb = 2\nc = =\n").unwrap_err();
    assert_eq!(err.line, Some(3));

    // Duplicate keys are a document error, not a rendering one.
    assert_rejects("a = 1\na = 2\n");
}

#[test]
fn fixture_documents_convert() {
    let mut count = 0;

    for entry in WalkDir::new("tests/fixtures").into_iter()
                                               .filter_map(Result::ok)
                                               .filter(|e| {
                                                   e.path().extension().is_some_and(|ext| ext == "toml")
                                               })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        let expected_path = path.with_extension("out");
        let expected = fs::read_to_string(&expected_path).unwrap_or_else(|e| {
                           panic!("Failed to read {expected_path:?}: {e}")
                       });

        count += 1;
        match convert(&source) {
            Ok(rendered) => {
                assert_eq!(rendered, expected.trim_end_matches('\n'), "mismatch for {path:?}");
            },
            Err(e) => panic!("Fixture {path:?} failed to convert: {e}"),
        }
    }

    assert!(count > 0, "No fixture documents found in tests/fixtures");
}
