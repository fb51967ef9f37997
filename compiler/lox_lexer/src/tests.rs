use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    let interner = StringInterner::new();
    lex(source, &interner)
        .tokens
        .iter()
        .map(|t| t.kind)
        .collect()
}

fn lines(source: &str) -> Vec<u32> {
    let interner = StringInterner::new();
    lex(source, &interner).tokens.iter().map(|t| t.line).collect()
}

#[test]
fn test_empty_source_is_just_eof() {
    assert_eq!(kinds(""), vec![TokenKind::Eof]);
    assert_eq!(kinds("  \t\r\n // only a comment"), vec![TokenKind::Eof]);
}

#[test]
fn test_maximal_munch_operators() {
    assert_eq!(
        kinds("! != = == < <= > >="),
        vec![
            TokenKind::Bang,
            TokenKind::BangEqual,
            TokenKind::Equal,
            TokenKind::EqualEqual,
            TokenKind::Less,
            TokenKind::LessEqual,
            TokenKind::Greater,
            TokenKind::GreaterEqual,
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("!==="),
        vec![TokenKind::BangEqual, TokenKind::EqualEqual, TokenKind::Eof]
    );
}

#[test]
fn test_single_character_tokens() {
    assert_eq!(
        kinds("(){},.-+;/*:?"),
        vec![
            TokenKind::LeftParen,
            TokenKind::RightParen,
            TokenKind::LeftBrace,
            TokenKind::RightBrace,
            TokenKind::Comma,
            TokenKind::Dot,
            TokenKind::Minus,
            TokenKind::Plus,
            TokenKind::Semicolon,
            // `/*` opens a comment, so the tail is one unterminated comment
            TokenKind::Eof,
        ]
    );
    assert_eq!(
        kinds("/ * : ?"),
        vec![
            TokenKind::Slash,
            TokenKind::Star,
            TokenKind::Colon,
            TokenKind::Question,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_keywords_and_identifiers() {
    let interner = StringInterner::new();
    let output = lex("var variable fun _x9 and andy continue", &interner);
    let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind).collect();

    assert!(matches!(kinds[0], TokenKind::Var));
    assert!(matches!(kinds[1], TokenKind::Ident(n) if interner.lookup(n) == "variable"));
    assert!(matches!(kinds[2], TokenKind::Fun));
    assert!(matches!(kinds[3], TokenKind::Ident(n) if interner.lookup(n) == "_x9"));
    assert!(matches!(kinds[4], TokenKind::And));
    assert!(matches!(kinds[5], TokenKind::Ident(n) if interner.lookup(n) == "andy"));
    assert!(matches!(kinds[6], TokenKind::Continue));
    assert!(matches!(kinds[7], TokenKind::Eof));
}

#[test]
fn test_every_keyword() {
    let source = "and class else false for fun if nil or print return super this true var while break continue";
    let kinds = kinds(source);
    assert_eq!(kinds.len(), 19);
    assert!(kinds[..18]
        .iter()
        .all(|k| !matches!(k, TokenKind::Ident(_) | TokenKind::Eof)));
}

#[test]
fn test_numbers() {
    let kinds = kinds("123 45.67 1. .5");
    assert!(matches!(kinds[0], TokenKind::Number(n) if n == 123.0));
    assert!(matches!(kinds[1], TokenKind::Number(n) if (n - 45.67).abs() < f64::EPSILON));
    // `1.` is a number then a dot
    assert!(matches!(kinds[2], TokenKind::Number(n) if n == 1.0));
    assert!(matches!(kinds[3], TokenKind::Dot));
    // no leading-dot numbers
    assert!(matches!(kinds[4], TokenKind::Dot));
    assert!(matches!(kinds[5], TokenKind::Number(n) if n == 5.0));
    assert!(matches!(kinds[6], TokenKind::Eof));
}

#[test]
fn test_method_call_on_number_is_not_fraction() {
    let kinds = kinds("1.x");
    assert!(matches!(kinds[0], TokenKind::Number(n) if n == 1.0));
    assert!(matches!(kinds[1], TokenKind::Dot));
    assert!(matches!(kinds[2], TokenKind::Ident(_)));
}

#[test]
fn test_string_contents_are_raw() {
    let interner = StringInterner::new();
    let output = lex(r#""a\nb" "" "two words""#, &interner);
    assert!(output.errors.is_empty());

    let strings: Vec<&str> = output
        .tokens
        .iter()
        .filter_map(|t| match t.kind {
            TokenKind::String(s) => Some(interner.lookup(s)),
            _ => None,
        })
        .collect();
    assert_eq!(strings, vec![r"a\nb", "", "two words"]);

    // The lexeme keeps the quotes.
    assert_eq!(interner.lookup(output.tokens[0].lexeme), r#""a\nb""#);
}

#[test]
fn test_multiline_string_reports_closing_line() {
    assert_eq!(lines("\"one\ntwo\nthree\" x"), vec![3, 3, 3]);
}

#[test]
fn test_line_counting() {
    assert_eq!(lines("a\nb\n\nc"), vec![1, 2, 4, 4]);
    assert_eq!(lines("a /* x\ny\n */ b // c\nd"), vec![1, 3, 4, 4]);
}

#[test]
fn test_block_comments_do_not_nest() {
    // The first `*/` closes the comment, leaving `*/` as tokens.
    assert_eq!(
        kinds("/* a /* b */ c */"),
        vec![
            TokenKind::Ident(StringInterner::new().intern("c")),
            TokenKind::Star,
            TokenKind::Slash,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn test_unexpected_character_continues() {
    let interner = StringInterner::new();
    let output = lex("a @ b # c", &interner);

    assert_eq!(output.errors.len(), 2);
    assert!(output
        .errors
        .iter()
        .all(|e| e.kind == LexErrorKind::UnexpectedCharacter && e.line == 1));
    assert_eq!(output.errors[0].span, Span::new(2, 3));
    let lexemes: Vec<_> = output.errors.iter().map(|e| e.lexeme.as_str()).collect();
    assert_eq!(lexemes, ["@", "#"]);

    let idents = output
        .tokens
        .iter()
        .filter(|t| matches!(t.kind, TokenKind::Ident(_)))
        .count();
    assert_eq!(idents, 3);
}

#[test]
fn test_non_ascii_character_reported_with_lexeme() {
    let interner = StringInterner::new();
    let output = lex("é print 1;", &interner);

    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].lexeme, "é");
    assert_eq!(
        output.errors[0].to_diagnostic().location.as_deref(),
        Some("at 'é'")
    );
    assert_eq!(kinds("é print 1;")[0], TokenKind::Print);
}

#[test]
fn test_unterminated_string_consumes_rest() {
    let interner = StringInterner::new();
    let output = lex("print \"never closed\nvar x;", &interner);

    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::UnterminatedString);
    assert_eq!(output.errors[0].line, 2);
    assert_eq!(output.errors[0].span, Span::new(6, 26));
    // No partial string token.
    let kinds: Vec<_> = output.tokens.iter().map(|t| t.kind).collect();
    assert_eq!(kinds, vec![TokenKind::Print, TokenKind::Eof]);
}

#[test]
fn test_unterminated_block_comment() {
    let interner = StringInterner::new();
    let output = lex("x /* open\n\n", &interner);

    assert_eq!(output.errors.len(), 1);
    assert_eq!(output.errors[0].kind, LexErrorKind::UnterminatedBlockComment);
    assert_eq!(output.errors[0].kind.message(), "unterminated /**/ comment");
    assert_eq!(output.tokens.len(), 2);
    assert_eq!(output.tokens[1].line, 3);
}

#[test]
fn test_eof_span_is_end_of_source() {
    let interner = StringInterner::new();
    let output = lex("x;", &interner);
    let eof = output.tokens.last().map(|t| (t.kind, t.span, t.lexeme));
    assert_eq!(eof, Some((TokenKind::Eof, Span::point(2), Name::EMPTY)));
}

// === Property tests ===

#[allow(
    clippy::disallowed_types,
    reason = "proptest macros internally use Arc"
)]
mod proptest_totality {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn any_input_ends_in_exactly_one_eof(source in any::<String>()) {
            let interner = StringInterner::new();
            let output = lex(&source, &interner);
            let eofs = output
                .tokens
                .iter()
                .filter(|t| matches!(t.kind, TokenKind::Eof))
                .count();
            prop_assert_eq!(eofs, 1);
            prop_assert!(matches!(output.tokens.last().map(|t| t.kind), Some(TokenKind::Eof)));
        }

        #[test]
        fn lox_like_input_is_covered(source in r#"[a-z0-9 ;(){}+\-*/=!<>".\n@]{0,64}"#) {
            let interner = StringInterner::new();
            let output = lex(&source, &interner);
            // Tokens and errors appear in source order without overlapping.
            let mut last_end = 0;
            let mut spans: Vec<Span> = output.tokens.iter().map(|t| t.span).collect();
            spans.extend(output.errors.iter().map(|e| e.span));
            spans.sort_by_key(|s| s.start);
            for span in spans {
                prop_assert!(span.start >= last_end);
                last_end = span.end;
            }
            prop_assert!(last_end as usize <= source.len());
        }
    }
}
