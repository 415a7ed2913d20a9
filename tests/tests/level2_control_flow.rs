//! Level 2: IF and WHILE.

use plc_tests::prelude::*;

mod control_flow {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("control_flow")
            .programs("level-2/control_flow.plc")
            .step("if_else", |a| {
                a.body(&[
                    "int x = 1;",
                    "if (x == 1) {",
                    "    System.out.println(\"one\");",
                    "} else {",
                    "    System.out.println(\"other\");",
                    "}",
                ])
            })
            // GIVEN an IF without ELSE
            // THEN no else block is emitted
            .step("if_without_else", |a| {
                a.body(&["if (true) {", "    System.out.println(1);", "}"])
            })
            .step("while_loop", |a| {
                a.body(&[
                    "int i = 0;",
                    "while (i != 3) {",
                    "    System.out.println(i);",
                    "    i = i + 1;",
                    "}",
                ])
            })
            .step("empty_while", |a| a.body(&["while (false) {}"]))
            .step("nested", |a| {
                a.body(&[
                    "int i = 0;",
                    "while (i != 2) {",
                    "    if (i == 0) {",
                    "        System.out.println(\"zero\");",
                    "    }",
                    "    i = i + 1;",
                    "}",
                ])
            })
            // GIVEN a variable declared inside an IF
            // THEN it stays visible after END
            .step("shared_scope", |a| a.emits("System.out.println(y);"))
    }

    #[test]
    fn test_control_flow() {
        scenario().run().unwrap();
    }
}

mod block_scopes {
    use super::*;

    pub fn scenario() -> Scenario {
        Scenario::new("block_scopes")
            .programs("level-2/control_flow.plc")
            .block_scopes()
            // GIVEN block scopes are enabled
            // WHEN a body variable is used after END
            // THEN analysis rejects it
            .step("shared_scope", |a| {
                a.error("Variable 'y' is not defined").error_at(48)
            })
            .step("while_loop", |a| a.emits("i = i + 1;"))
    }

    #[test]
    fn test_block_scopes() {
        scenario().run().unwrap();
    }
}
