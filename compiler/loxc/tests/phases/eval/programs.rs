use pretty_assertions::assert_eq;

use crate::common::run_output;

#[test]
fn precedence() {
    assert_eq!(run_output("print 1 + 2 * 3; print (1 + 2) * 3;"), "7\n9\n");
}

#[test]
fn scoping() {
    assert_eq!(
        run_output("var a = 1; { var a = 2; print a; } print a;"),
        "2\n1\n"
    );
}

#[test]
fn closure_counter() {
    let source = r#"
        fun makeCounter() {
          var i = 0;
          fun count() {
            i = i + 1;
            return i;
          }
          return count;
        }

        var counter = makeCounter();
        print counter();
        print counter();
    "#;
    assert_eq!(run_output(source), "1\n2\n");
}

#[test]
fn type_discipline_successes() {
    assert_eq!(run_output(r#"print "a" + "b"; print 1 + 1;"#), "ab\n2\n");
}

#[test]
fn fibonacci_loop() {
    let source = "
        var a = 0;
        var b = 1;
        for (var i = 0; i < 10; i = i + 1) {
          print a;
          var next = a + b;
          a = b;
          b = next;
        }
    ";
    assert_eq!(
        run_output(source),
        "0\n1\n1\n2\n3\n5\n8\n13\n21\n34\n"
    );
}

#[test]
fn break_leaves_only_the_inner_loop() {
    let source = "
        for (var i = 0; i < 3; i = i + 1) {
          for (var j = 0; j < 10; j = j + 1) {
            if (j == 1) break;
            print i * 10 + j;
          }
        }
    ";
    assert_eq!(run_output(source), "0\n10\n20\n");
}

#[test]
fn return_from_nested_loop_yields_to_caller() {
    let source = "
        fun find(target) {
          for (var i = 0; i < 100; i = i + 1) {
            while (true) {
              if (i == target) { return i; }
              break;
            }
          }
          return -1;
        }
        print find(7);
        print find(500);
    ";
    assert_eq!(run_output(source), "7\n-1\n");
}

#[test]
fn continue_in_while_loop() {
    let source = "
        var i = 0;
        var sum = 0;
        while (i < 10) {
          i = i + 1;
          if (i == 3 or i == 6) continue;
          sum = sum + i;
        }
        print sum;
    ";
    assert_eq!(run_output(source), "46\n");
}

#[test]
fn higher_order_functions() {
    let source = "
        fun twice(f, x) { return f(f(x)); }
        fun inc(n) { return n + 1; }
        print twice(inc, 5);
        print twice;
    ";
    assert_eq!(run_output(source), "7\n<fn twice>\n");
}

#[test]
fn strings_print_raw() {
    assert_eq!(
        run_output("print \"line\\n\"; print \"\";"),
        "line\\n\n\n"
    );
}

#[test]
fn multi_line_strings_keep_line_counting() {
    let source = "var s = \"a\nb\";\nprint s;";
    assert_eq!(run_output(source), "a\nb\n");
}
