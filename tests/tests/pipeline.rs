//! Drives each stage by hand: lexer, parser, analyzer, generator.

use plc_analyzer::{analyze, Analyzer, AnalyzerError, Scope, Type, TypedStmt};
use plc_compiler::{compile, CompileError, Compiler, Generator, GeneratorOptions};
use plc_parser::{parse_source, Lexer, TokenKind};
use plc_registry::{Registry, RegistryBuilder};
use pretty_assertions::assert_eq;

const PROGRAM: &str = "LET i : INTEGER = 0;\nWHILE i != 3 DO\n    PRINT(i);\n    i = i + 1;\nEND\n";

// ========== TEST: stages by hand ==========

#[test_log::test]
fn test_stages_by_hand() {
    // GIVEN the loop program
    let registry = Registry::standard();

    // WHEN each stage runs on its own
    let tokens = Lexer::new(PROGRAM).tokenize().unwrap();
    let source = parse_source(&tokens).unwrap();
    let typed = analyze(&registry, &source).unwrap();
    let text = Generator::new(&registry).generate(&typed);

    // THEN the stages agree with the one-shot compile
    assert_eq!(tokens[0].text, "LET");
    assert_eq!(tokens[0].kind, TokenKind::Identifier);
    assert_eq!(source.stmts.len(), 2);
    assert_eq!(typed.stmts.len(), 2);
    assert_eq!(text, compile(PROGRAM, &registry).unwrap());
    assert_eq!(
        text,
        "public final class Main {\n\n    public static void main(String[] args) {\n        int i = 0;\n        while (i != 3) {\n            System.out.println(i);\n            i = i + 1;\n        }\n    }\n\n}\n"
    );
}

// ========== TEST: declared types ==========

#[test_log::test]
fn test_declared_types_reach_typed_tree() {
    let registry = Registry::standard();
    let typed = Compiler::new(&registry)
        .check("LET a = 1; LET b = a + 0.5; LET c = \"x\" + b;")
        .unwrap();

    let types: Vec<Type> = typed
        .stmts
        .iter()
        .filter_map(|stmt| match stmt {
            TypedStmt::Declaration { ty, .. } => Some(*ty),
            _ => None,
        })
        .collect();

    assert_eq!(types, vec![Type::Integer, Type::Decimal, Type::String]);
}

// ========== TEST: custom registry ==========

#[test_log::test]
fn test_custom_function_registry() {
    // GIVEN a registry with a two-argument function
    let mut builder = RegistryBuilder::standard().unwrap();
    builder
        .add_function("MAX")
        .param(Type::Decimal)
        .param(Type::Decimal)
        .returns(Type::Decimal)
        .target("Math.max")
        .done()
        .unwrap();
    let registry = builder.build();

    // WHEN a program calls it inside a declaration
    let text = compile("LET m = MAX(1, 2.5); PRINT(m);", &registry).unwrap();

    // THEN the call is rewritten to the target name
    assert!(text.contains("double m = Math.max(1, 2.5);"));
    assert!(text.contains("System.out.println(m);"));

    // AND a wrong arity is reported
    let err = compile("PRINT(MAX(1));", &registry).unwrap_err();
    assert!(matches!(
        err,
        CompileError::Analyze(AnalyzerError::UnknownFunction { arity: 1, .. })
    ));
}

// ========== TEST: generator options ==========

#[test_log::test]
fn test_generator_options() {
    let registry = Registry::standard();
    let text = Compiler::new(&registry)
        .with_generator_options(GeneratorOptions {
            class_name: "Program".to_string(),
            indent: 2,
        })
        .compile("PRINT(1);")
        .unwrap();

    assert_eq!(
        text,
        "public final class Program {\n\n  public static void main(String[] args) {\n    System.out.println(1);\n  }\n\n}\n"
    );
}

// ========== TEST: scope carried between analyses ==========

#[test_log::test]
fn test_scope_carries_between_programs() {
    // GIVEN a first program that declares a variable
    let registry = Registry::standard();
    let first = plc_parser::parse("LET total : DECIMAL = 0;").unwrap();
    let mut analyzer = Analyzer::new(&registry);
    analyzer.analyze_source(&first).unwrap();

    // WHEN a second program is analyzed with the resulting scope
    let scope: Scope = analyzer.into_scope();
    let second = plc_parser::parse("total = total + 1;").unwrap();
    let mut analyzer = Analyzer::with_scope(&registry, scope);

    // THEN the earlier declaration is visible
    assert!(analyzer.analyze_source(&second).is_ok());
    assert_eq!(analyzer.scope().lookup("total"), Some(Type::Decimal));
}

// ========== TEST: errors carry offsets ==========

#[test_log::test]
fn test_error_offsets() {
    let registry = Registry::standard();

    let parse_err = compile("LET x : INTEGER = ;", &registry).unwrap_err();
    assert!(matches!(parse_err, CompileError::Parse(_)));
    assert_eq!(parse_err.offset(), 18);

    let analyze_err = compile("LET s : STRING = 1;", &registry).unwrap_err();
    assert_eq!(
        analyze_err,
        CompileError::Analyze(AnalyzerError::NotAssignable {
            actual: Type::Integer,
            expected: Type::String,
            offset: 17,
        })
    );
}
