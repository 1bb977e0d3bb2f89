use pretty_assertions::assert_eq;
use shoal::Shell;

fn submit_one(unit: &str) -> String {
    Shell::new().submit(unit)
}

fn assert_reports(unit: &str, expected: &str) {
    assert_eq!(submit_one(unit), expected, "unit: {unit}");
}

fn assert_fails_with(unit: &str, fragment: &str) {
    let output = submit_one(unit);
    assert!(output.starts_with("Error"),
            "expected failure for {unit:?}, got: {output}");
    assert!(output.contains(fragment),
            "expected {fragment:?} in error for {unit:?}, got: {output}");
}

#[test]
fn declarations_persist_across_submissions() {
    let mut shell = Shell::new();

    assert_eq!(shell.submit("int x = 5;"), "5");
    assert_eq!(shell.submit("x = x + 1;"), "6");
    assert_eq!(shell.submit("x;"), "6");
}

#[test]
fn functions_persist_across_submissions() {
    let mut shell = Shell::new();

    assert_eq!(shell.submit("int square(int n) { return n * n; }"), "void");
    assert_eq!(shell.submit("square(6);"), "36");
}

#[test]
fn declared_types_are_fixed() {
    assert_fails_with("int x = 5; x = 3.0;", "Type mismatch");
    assert_fails_with("bool b = true; b = 1;", "Type mismatch");
    assert_fails_with("string s = 5;", "Type mismatch");
}

#[test]
fn int_widens_into_double_slots() {
    let mut shell = Shell::new();

    assert_eq!(shell.submit("double y = 5; y = 2;"), "2");
    assert_eq!(shell.submit("y;"), "2");
    assert_eq!(shell.submit("y = 2.5; y;"), "2.5");
    assert_eq!(shell.submit("y + 1;"), "3.5");
}

#[test]
fn arithmetic_follows_operand_types() {
    assert_reports("7 / 2;", "3");
    assert_reports("7.0 / 2;", "3.5");
    assert_reports("1 + 2 * 3;", "7");
    assert_reports("(1 + 2) * 3;", "9");
    assert_reports("5 == 5.0;", "true");
    assert_reports("-5;", "-5");
}

#[test]
fn division_by_zero_is_fatal() {
    assert_fails_with("5 / 0;", "Division by zero");
    assert_fails_with("5.0 / 0.0;", "Division by zero");
    assert_fails_with("5 / 0.0;", "Division by zero");
}

#[test]
fn logical_operators_coerce_operands() {
    assert_reports("true && false;", "false");
    assert_reports("true || false;", "true");
    assert_reports("1 && 2;", "true");
    assert_reports("0 || 0.0;", "false");
    assert_reports("!true;", "false");
}

#[test]
fn logical_not_requires_a_boolean() {
    assert_fails_with("!0;", "unary '!'");
    assert_fails_with("-true;", "unary '-'");
}

#[test]
fn string_operations() {
    assert_reports("\"foo\" + \"bar\";", "foobar");
    assert_reports("\"abc\" < \"abd\";", "true");
    assert_reports("\"a\" == \"a\";", "true");
    assert_fails_with("\"a\" * \"b\";", "not supported for strings");
    assert_fails_with("\"a\" + 1;", "Invalid operand types");
}

#[test]
fn strings_may_contain_raw_newlines() {
    assert_reports("string s = \"a\nb\"; s;", "a\nb");
}

#[test]
fn string_truthiness() {
    assert_reports("if (\"false\") 1; else 2;", "2");
    assert_reports("if (\"\") 1; else 2;", "2");
    assert_reports("if (\"yes\") 1; else 2;", "1");
}

#[test]
fn array_declaration_and_mutation() {
    assert_reports("int a[3] = {1, 2, 3}; a[1] = 9; a[1];", "9");
    assert_reports("int a[3] = {1, 2, 3}; a;", "[1, 2, 3]");
    assert_fails_with("int a[3] = {1, 2, 3}; a[5] = 9;", "out of bounds");
    assert_fails_with("int a[3] = {1, 2, 3}; a[3];", "out of bounds");
}

#[test]
fn arrays_default_fill_with_zero_values() {
    assert_reports("int a[]; a[4];", "0");
    assert_reports("double d[2]; d[0];", "0");
    assert_reports("bool b[2]; b[1];", "false");
    assert_reports("string s[1]; s[0];", "");
}

#[test]
fn array_element_assignment_checks_element_type() {
    assert_fails_with("int a[2]; a[0] = \"x\";", "Type mismatch");
    assert_reports("double d[2]; d[0] = 3; d[0];", "3");
}

#[test]
fn oversized_array_initializer_is_rejected() {
    assert_fails_with("int a[2] = {1, 2, 3};", "exceeds specified size");
}

#[test]
fn arrays_are_copied_by_value() {
    let mut shell = Shell::new();

    shell.submit("int a[2] = {1, 2};");
    shell.submit("int b[2] = {0, 0};");
    shell.submit("b = a;");
    shell.submit("b[0] = 9;");

    assert_eq!(shell.submit("a[0];"), "1");
    assert_eq!(shell.submit("b[0];"), "9");
}

#[test]
fn indexing_a_scalar_fails() {
    assert_fails_with("int x = 1; x[0];", "not an array");
    assert_fails_with("int a[2]; a[1.5];", "index must be an integer");
}

#[test]
fn scalars_default_to_zero_values() {
    assert_reports("int x; x;", "0");
    assert_reports("bool b; b;", "false");
    assert_reports("string s; s;", "");
}

#[test]
fn multi_declarations_share_one_scope() {
    assert_reports("int x = 1, y = 2; x + y;", "3");
    assert_reports("int x = 1, y; y;", "0");
}

#[test]
fn blocks_scope_their_declarations() {
    assert_fails_with("{ int y = 1; } y;", "Unknown variable 'y'");
    assert_reports("int x = 1; { int x = 2; x; }", "2");

    let mut shell = Shell::new();
    shell.submit("int x = 1;");
    shell.submit("{ int x = 2; }");
    assert_eq!(shell.submit("x;"), "1");
}

#[test]
fn redeclaration_in_same_scope_is_fatal() {
    assert_fails_with("int x = 1; int x = 2;", "already declared");
}

#[test]
fn if_without_else_yields_void() {
    assert_reports("if (false) 1;", "void");
    assert_reports("if (true) 1;", "1");
    assert_reports("if (1 < 2) 10; else 20;", "10");
}

#[test]
fn while_loops_coerce_their_condition() {
    assert_reports("int n = 3; while (n) n = n - 1; n;", "0");
    assert_reports("int n = 0; while (n < 4) { n++; } n;", "4");
}

#[test]
fn while_break_and_continue() {
    assert_reports("int n = 0; while (true) { n++; if (n == 3) break; } n;", "3");
    assert_reports("int n = 0; int hits = 0; while (n < 5) { n++; if (n == 2) continue; hits++; } hits;",
                   "4");
}

#[test]
fn for_loop_counts_and_unwinds_its_scope() {
    let mut shell = Shell::new();

    assert_eq!(shell.submit("int sum = 0; for (int i = 0; i < 4; i++) { sum = sum + i; } sum;"),
               "6");
    assert_eq!(shell.submit("for (int i = 0; i < 3; i++) { if (i == 1) continue; }"),
               "void");
    let output = shell.submit("i;");
    assert!(output.contains("Unknown variable 'i'"), "got: {output}");
}

#[test]
fn for_condition_must_be_boolean() {
    assert_fails_with("for (int i = 0; 1; i++) { break; }", "boolean condition");
}

#[test]
fn for_break_skips_the_increment() {
    assert_reports("int i = 0; for (; i < 10; i++) { if (i == 5) break; } i;", "5");
}

#[test]
fn nested_loops_break_independently() {
    assert_reports("int hits = 0;
                    for (int i = 0; i < 3; i++) {
                        for (int j = 0; j < 3; j++) {
                            if (j == 1) break;
                            hits++;
                        }
                    }
                    hits;",
                   "3");
}

#[test]
fn increment_and_decrement() {
    let mut shell = Shell::new();

    shell.submit("int i = 5;");
    assert_eq!(shell.submit("i++;"), "5");
    assert_eq!(shell.submit("i;"), "6");
    assert_eq!(shell.submit("++i;"), "7");
    assert_eq!(shell.submit("--i;"), "6");
    assert_eq!(shell.submit("i--;"), "6");
    assert_eq!(shell.submit("i;"), "5");
    assert_eq!(shell.submit("double d = 1.5; d++;"), "1.5");
    assert_eq!(shell.submit("d;"), "2.5");
}

#[test]
fn increment_requires_a_variable() {
    assert_fails_with("5++;", "variable reference");
    assert_fails_with("bool b = true; b++;", "Invalid operand type");
}

#[test]
fn assignment_is_an_expression() {
    assert_reports("int x = 0; x = 42;", "42");
    assert_reports("int a = 0; int b = 0; a = b = 7; a;", "7");
}

#[test]
fn invalid_assignment_targets_are_rejected() {
    assert_fails_with("1 = 2;", "Invalid assignment target");
    assert_fails_with("int x = 1; (x + 1) = 2;", "Invalid assignment target");
}

#[test]
fn function_calls_check_argument_count() {
    let mut shell = Shell::new();

    shell.submit("int add(int a, int b) { return a + b; }");
    assert_eq!(shell.submit("add(2, 5);"), "7");

    let output = shell.submit("add(2);");
    assert!(output.contains("expects 2 argument(s), got 1"), "got: {output}");

    let output = shell.submit("missing(1);");
    assert!(output.contains("Unknown function 'missing'"), "got: {output}");
}

#[test]
fn function_parameters_are_type_checked() {
    let mut shell = Shell::new();

    shell.submit("int twice(int n) { return n * 2; }");
    let output = shell.submit("twice(\"no\");");
    assert!(output.contains("Type mismatch"), "got: {output}");

    shell.submit("double half(double x) { return x / 2.0; }");
    assert_eq!(shell.submit("half(7);"), "3.5");
}

#[test]
fn function_body_without_return_yields_its_last_value() {
    let mut shell = Shell::new();

    shell.submit("int last() { 1; 2; 42; }");
    assert_eq!(shell.submit("last();"), "42");

    shell.submit("void noop() { return; }");
    assert_eq!(shell.submit("noop();"), "void");
}

#[test]
fn immediate_call_statement_form() {
    let mut shell = Shell::new();

    shell.submit("int add(int a, int b) { return a + b; }");
    assert_eq!(shell.submit("int add(3, 4);"), "7");
}

#[test]
fn recursion_unwinds_one_scope_per_return() {
    let mut shell = Shell::new();

    shell.submit("int fact(int n) { if (n <= 1) return 1; return n * fact(n - 1); }");
    assert_eq!(shell.submit("fact(5);"), "120");
    assert_eq!(shell.environment().depth(), 1);

    shell.submit("int fib(int n) { if (n < 2) return n; return fib(n - 1) + fib(n - 2); }");
    assert_eq!(shell.submit("fib(10);"), "55");
    assert_eq!(shell.environment().depth(), 1);
}

#[test]
fn early_return_still_pops_loop_scopes() {
    let mut shell = Shell::new();

    shell.submit("int first(int limit) {
                      for (int i = 0; i < limit; i++) {
                          if (i * i > 10) return i;
                      }
                      return 0;
                  }");
    assert_eq!(shell.submit("first(100);"), "4");
    assert_eq!(shell.environment().depth(), 1);
}

#[test]
fn control_flow_outside_its_construct_is_an_error() {
    assert_fails_with("break;", "'break' outside of a loop");
    assert_fails_with("continue;", "'continue' outside of a loop");
    assert_fails_with("return 1;", "'return' outside of a function");
}

#[test]
fn lexical_errors_abort_the_whole_unit() {
    let mut shell = Shell::new();

    let output = shell.submit("int ok = 1; @");
    assert!(output.contains("Unexpected character"), "got: {output}");

    let output = shell.submit("ok;");
    assert!(output.contains("Unknown variable 'ok'"), "got: {output}");
}

#[test]
fn unterminated_strings_are_lexical_errors() {
    assert_fails_with("string s = \"abc", "Unterminated string");
}

#[test]
fn lexical_errors_report_line_and_column() {
    assert_reports("int x = $;", "Error on line 1, column 9: Unexpected character '$'.");
    assert_reports("int x = 1;\nint y = $;",
                   "Error on line 2, column 9: Unexpected character '$'.");
}

#[test]
fn parse_recovery_keeps_well_formed_statements() {
    let mut shell = Shell::new();

    // The malformed middle statement is dropped and surfaced; its
    // neighbours still execute.
    let output = shell.submit("int x = 5; int = 3; x = x + 1;");
    assert!(output.starts_with("Error"), "got: {output}");
    assert_eq!(shell.submit("x;"), "6");
}

#[test]
fn failed_submissions_keep_earlier_side_effects() {
    let mut shell = Shell::new();

    let output = shell.submit("int x = 1; x = x / 0; x = 99;");
    assert!(output.contains("Division by zero"), "got: {output}");
    assert_eq!(shell.submit("x;"), "1");
}

#[test]
fn empty_unit_yields_void() {
    assert_reports("", "void");
    assert_reports("// just a comment", "void");
}

#[test]
fn comments_are_skipped() {
    assert_reports("int x = 1; // trailing comment\nx + 1;", "2");
}
