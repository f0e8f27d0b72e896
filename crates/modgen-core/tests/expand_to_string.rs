use modgen_core::template::{expand_text, expand_to_string, LineEnding, Template};
use modgen_core::Error;

const NO_VALUES: &[&str] = &[];

#[test]
fn removes_common_indent() {
    let out = expand_to_string(&["    a\n      b\n    c"], NO_VALUES, "\n").unwrap();
    let lines: Vec<&str> = out.split('\n').collect();
    assert_eq!(lines, vec!["a", "  b", "c"]);
}

#[test]
fn trims_boundary_blank_lines() {
    let out = expand_to_string(&["\n\n  hello\n\n"], NO_VALUES, "\n").unwrap();
    assert_eq!(out, "hello");
}

#[test]
fn all_blank_input_is_empty() {
    for raw in ["", "\n", "   ", " \n\t\n  \r\n", "\r\n\r\n"] {
        let out = expand_to_string(&[raw], NO_VALUES, "\r\n").unwrap();
        assert_eq!(out, "", "input {raw:?}");
    }
}

#[test]
fn already_normalized_text_is_unchanged() {
    let text = "fn main() {\n    run();\n}";
    assert_eq!(expand_text(text, "\n").unwrap(), text);
    let again = expand_text(&expand_text(text, "\n").unwrap(), "\n").unwrap();
    assert_eq!(again, text);
}

#[test]
fn output_uses_requested_separator_only() {
    let lf = "\n  a\n  b\n    c\n";
    let crlf = "\r\n  a\r\n  b\r\n    c\r\n";
    let mixed = "\n  a\r\n  b\n    c\r\n";

    for src in [lf, crlf, mixed] {
        assert_eq!(expand_text(src, "\r\n").unwrap(), "a\r\nb\r\n  c");
        assert_eq!(expand_text(src, "\n").unwrap(), "a\nb\n  c");
        assert_eq!(expand_text(src, "<br>").unwrap(), "a<br>b<br>  c");
    }
}

#[test]
fn values_are_inserted_in_order() {
    let out = expand_to_string(&["a=", ", b=", ""], &["1", "2"], "\n").unwrap();
    assert_eq!(out, "a=1, b=2");
}

#[test]
fn trailing_value_after_last_fragment() {
    let out = expand_to_string(&["a=", ", b="], &["1", "2"], "\n").unwrap();
    assert_eq!(out, "a=1, b=2");

    let out = expand_to_string(&["\n    x = "], &[5], "\n").unwrap();
    assert_eq!(out, "x = 5");
}

#[test]
fn values_are_coerced_with_display() {
    let out = expand_to_string(&["n=", " ok=", ""], &[&42 as &dyn std::fmt::Display, &true], "\n")
        .unwrap();
    assert_eq!(out, "n=42 ok=true");
}

#[test]
fn multiline_values_take_part_in_dedent() {
    let body = "if x {\n        y();\n    }";
    let out = expand_to_string(
        &["\n    fn f() {\n    ", "\n    }\n"],
        &[body],
        "\n",
    )
    .unwrap();
    assert_eq!(out, "fn f() {\nif x {\n    y();\n}\n}");
}

#[test]
fn mismatched_counts_are_rejected() {
    let too_many_values = expand_to_string(&["a="], &["1", "2"], "\n");
    assert!(matches!(too_many_values, Err(Error::InvalidArgument(_))));

    let too_many_fragments = expand_to_string(&["a", "b", "c"], &["1"], "\n");
    assert!(matches!(too_many_fragments, Err(Error::InvalidArgument(_))));

    let values_without_fragments = expand_to_string(&[] as &[&str], &["1"], "\n");
    assert!(matches!(values_without_fragments, Err(Error::InvalidArgument(_))));

    let empty: &[&str] = &[];
    assert!(matches!(
        expand_to_string(empty, NO_VALUES, "\n"),
        Err(Error::InvalidArgument(_))
    ));
}

#[test]
fn empty_separator_is_rejected() {
    assert!(matches!(
        expand_to_string(&["a\nb"], NO_VALUES, ""),
        Err(Error::InvalidArgument(_))
    ));
    assert!(matches!(expand_text("a", ""), Err(Error::InvalidArgument(_))));
}

#[test]
fn tabs_and_spaces_count_the_same() {
    // One tab and one space are both a single unit of indent.
    let out = expand_text("\t\tx\n  y", "\n").unwrap();
    assert_eq!(out, "x\ny");

    // Mixed indentation can dedent unevenly; this is kept as is.
    let out = expand_text("\tx\n    y", "\n").unwrap();
    assert_eq!(out, "x\n   y");
}

#[test]
fn short_interior_blank_lines_become_empty() {
    let out = expand_text("      a\n  \n\n      b", "\n").unwrap();
    assert_eq!(out, "a\n\n\nb");
}

#[test]
fn interior_blank_lines_keep_extra_whitespace() {
    let out = expand_text("  a\n      \n  b", "\n").unwrap();
    assert_eq!(out, "a\n    \nb");
}

#[test]
fn lone_carriage_return_is_kept() {
    let out = expand_text("  a\rb\n  c", "\n").unwrap();
    assert_eq!(out, "a\rb\nc");
}

#[test]
fn builder_matches_function() {
    let tpl = Template::new()
        .text("\n    class ")
        .value("User")
        .text(" {\n        id: ")
        .value(7)
        .text(";\n    }\n");
    assert_eq!(tpl.fragments().len(), tpl.values().len() + 1);

    let direct = expand_to_string(
        &["\n    class ", " {\n        id: ", ";\n    }\n"],
        &["User", "7"],
        "\n",
    )
    .unwrap();
    assert_eq!(tpl.render("\n").unwrap(), direct);
    assert_eq!(direct, "class User {\n    id: 7;\n}");
}

#[test]
fn builder_adjacent_values_get_empty_fragment() {
    let tpl = Template::new().value("a").value("b");
    assert_eq!(tpl.fragments(), &["", "", ""]);
    assert_eq!(tpl.render_with(LineEnding::Lf).unwrap(), "ab");
}

#[test]
fn builder_renders_native_separator() {
    let out = Template::new()
        .text("x\ny")
        .render_with(LineEnding::Native)
        .unwrap();
    assert_eq!(out, format!("x{}y", LineEnding::native()));
}

#[test]
fn expand_macro_interleaves() {
    let name = "Order";
    let fields = 3;
    let out = modgen_core::expand!("\n";
        "
            // ", name, " has ", fields, " fields
            struct ", name, ";
        "
    )
    .unwrap();
    assert_eq!(out, "// Order has 3 fields\nstruct Order;");
}

#[test]
fn line_ending_parses_names() {
    assert_eq!("LF".parse::<LineEnding>().unwrap(), LineEnding::Lf);
    assert_eq!("crlf".parse::<LineEnding>().unwrap(), LineEnding::Crlf);
    assert_eq!("native".parse::<LineEnding>().unwrap(), LineEnding::Native);
    assert!(matches!("cr".parse::<LineEnding>(), Err(Error::InvalidArgument(_))));
    assert_eq!(LineEnding::Crlf.as_str(), "\r\n");
    assert_eq!(LineEnding::Crlf.to_string(), "crlf");
}

#[test]
fn leading_bom_line_is_trimmed() {
    let out = expand_text("\u{feff}\n  a", "\n").unwrap();
    assert_eq!(out, "a");

    let out = expand_text("\u{feff}  a\n    b", "\n").unwrap();
    assert_eq!(out, "a\n b");
}

#[test]
fn next_line_char_is_content() {
    let out = expand_text("\u{85}a\n b", "\n").unwrap();
    assert_eq!(out, "\u{85}a\n b");

    let out = expand_text("\u{85}\n  a", "\n").unwrap();
    assert_eq!(out, "\u{85}\n  a");
}
