//! Level 3: analysis and parse errors.

use plc_tests::prelude::*;

mod analysis_errors {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("analysis_errors")
            .programs("level-3/diagnostics.plc")
            .step("undefined_variable", |a| {
                a.error("Variable 'y' is not defined").error_at(6)
            })
            .step("undefined_assignment", |a| {
                a.error("Variable 'y' is not defined").error_at(0)
            })
            .step("duplicate_variable", |a| {
                a.error("already defined").error_at(21)
            })
            .step("unknown_type", |a| a.error("Unknown type 'NUMBER'").error_at(0))
            .step("void_variable", |a| a.error("cannot be Void").error_at(0))
            .step("missing_type", |a| {
                a.error("needs a type or an initial value").error_at(0)
            })
            .step("not_assignable", |a| {
                a.error("Type DECIMAL is not assignable to INTEGER")
                    .error_at(18)
            })
            .step("condition_not_boolean", |a| {
                a.error("Condition must be BOOLEAN, got INTEGER").error_at(3)
            })
            .step("empty_then", |a| a.error("Statements list is empty").error_at(0))
            .step("invalid_operator", |a| {
                a.error("Invalid operator '+' for types BOOLEAN and INTEGER")
                    .error_at(8)
            })
            .step("unknown_arity", |a| {
                a.error("Function PRINT/2 has not been defined").error_at(0)
            })
            .step("not_a_call", |a| {
                a.error("must be a function call").error_at(0)
            })
            .step("integer_too_large", |a| {
                a.error("Integer literal 2147483648 is too large")
                    .error_at(18)
            })
            .step("invalid_string", |a| {
                a.error("Invalid string \"a b\"").error_at(6)
            })
    }

    #[test]
    fn test_analysis_errors() {
        scenario().run().unwrap();
    }
}

mod parse_errors {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("parse_errors")
            .programs("level-3/diagnostics.plc")
            // GIVEN a statement cut off before ';'
            // THEN the error points at the end of input
            .step("missing_semicolon", |a| {
                a.error_matches(r"^Parse error at offset 19: unexpected end of input, expected ';'$")
                    .error_at(19)
            })
            .step("leading_zero", |a| a.error("leading zeros").error_at(8))
            .step("unterminated_while", |a| {
                a.error("expected 'END'").error_at(23)
            })
    }

    #[test]
    fn test_parse_errors() {
        scenario().run().unwrap();
    }
}

mod analysis_messages {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("analysis_messages")
            .programs("level-3/diagnostics.plc")
            .step("undefined_variable", |a| {
                a.error_matches(r"^Analysis error: Variable 'y' is not defined at offset 6$")
            })
    }

    #[test]
    fn test_analysis_messages() {
        scenario().run().unwrap();
    }
}
