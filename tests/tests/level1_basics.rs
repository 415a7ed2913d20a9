//! Level 1: declarations, literals, expressions and PRINT.

use plc_tests::prelude::*;

mod basics {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("basics")
            .programs("level-1/basics.plc")
            // GIVEN a typed declaration
            // THEN it is emitted with the target type name
            .step("declare", |a| a.body(&["int x = 1;"]))
            .step("declare_all_types", |a| {
                a.body(&[
                    "boolean b = true;",
                    "double d = 1.5;",
                    "String s = \"hi\";",
                    "Object a = 1;",
                ])
            })
            .step("declare_without_value", |a| a.body(&["int x;", "x = 2;"]))
            // GIVEN a declaration without a type
            // THEN the type comes from the initializer
            .step("inferred", |a| {
                a.body(&["int n = 1 + 2 * 3;", "double f = 1 / 2.0;"])
            })
            .step("widening", |a| a.body(&["double d = 1;", "d = d * 2;"]))
            .step("grouping", |a| a.body(&["int n = (1 + 2) * 3;"]))
            .step("equality", |a| {
                a.body(&["boolean e = 1 == 2.0;", "boolean s = \"a\" != \"b\";"])
            })
            .step("concat", |a| {
                a.body(&["String s = \"n\" + 1;", "System.out.println(s + true);"])
            })
            .step("print", |a| {
                a.emits("System.out.println(\"hello\");")
                    .emits("System.out.println(1 - 2 - 3);")
                    .not_emits("PRINT(\"hello\");")
            })
            .step("self_reference", |a| a.body(&["int x = x + 1;"]))
    }

    #[test]
    fn test_basics() {
        scenario().run().unwrap();
    }
}

mod wrapper {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("wrapper")
            .programs("level-1/basics.plc")
            .step("declare", |a| {
                a.assert_fn(|out| {
                    out.starts_with("public final class Main {\n")
                        && out.contains("    public static void main(String[] args) {\n")
                        && out.ends_with("    }\n\n}\n")
                })
            })
    }

    #[test]
    fn test_wrapper() {
        scenario().run().unwrap();
    }
}
