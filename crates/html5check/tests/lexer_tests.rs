//! Integration tests for the HTML lexer.

use html5check::lexer::AttributeValue;
use html5check::{LexError, Lexer, Position, Token, TokenKind, tokenize};

/// Helper to lex a string that must tokenize cleanly
fn lex(input: &str) -> Vec<Token> {
    tokenize(input).unwrap()
}

/// Helper to lex a string that must fail
fn lex_error(input: &str) -> LexError {
    tokenize(input).unwrap_err()
}

#[test]
fn test_plain_text() {
    let tokens = lex("Hello");
    assert_eq!(tokens.len(), 1);
    match &tokens[0].kind {
        TokenKind::Text { content } => assert_eq!(content, "Hello"),
        _ => panic!("Expected Text token"),
    }
    assert_eq!(tokens[0].position, Position::START);
}

#[test]
fn test_doctype() {
    let tokens = lex("<!DOCTYPE html>");
    assert_eq!(tokens.len(), 1);
    match &tokens[0].kind {
        TokenKind::Doctype {
            name,
            public_id,
            system_id,
        } => {
            assert_eq!(name.as_deref(), Some("html"));
            assert!(public_id.is_none());
            assert!(system_id.is_none());
        }
        _ => panic!("Expected Doctype token"),
    }
}

#[test]
fn test_doctype_lowercase_keyword() {
    let tokens = lex("<!doctype html>");
    assert!(matches!(&tokens[0].kind, TokenKind::Doctype { name: Some(n), .. } if n == "html"));
}

#[test]
fn test_doctype_public_and_system_ids() {
    let tokens = lex(
        r#"<!DOCTYPE html PUBLIC "-//W3C//DTD XHTML 1.0 Strict//EN" "http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd">"#,
    );
    match &tokens[0].kind {
        TokenKind::Doctype {
            public_id,
            system_id,
            ..
        } => {
            assert_eq!(public_id.as_deref(), Some("-//W3C//DTD XHTML 1.0 Strict//EN"));
            assert_eq!(
                system_id.as_deref(),
                Some("http://www.w3.org/TR/xhtml1/DTD/xhtml1-strict.dtd")
            );
        }
        _ => panic!("Expected Doctype token"),
    }

    let tokens = lex(r#"<!DOCTYPE html SYSTEM "about:legacy-compat">"#);
    match &tokens[0].kind {
        TokenKind::Doctype {
            public_id,
            system_id,
            ..
        } => {
            assert!(public_id.is_none());
            assert_eq!(system_id.as_deref(), Some("about:legacy-compat"));
        }
        _ => panic!("Expected Doctype token"),
    }
}

#[test]
fn test_start_and_end_tag() {
    let tokens = lex("<div></div>");
    assert_eq!(tokens.len(), 2);
    match &tokens[0].kind {
        TokenKind::StartTag {
            name,
            attributes,
            self_closing,
        } => {
            assert_eq!(name, "div");
            assert!(attributes.is_empty());
            assert!(!self_closing);
        }
        _ => panic!("Expected StartTag token"),
    }
    match &tokens[1].kind {
        TokenKind::EndTag { name } => assert_eq!(name, "div"),
        _ => panic!("Expected EndTag token"),
    }
    assert_eq!(tokens[1].position, Position::new(1, 6));
}

#[test]
fn test_tag_name_case_is_preserved() {
    let tokens = lex("<linearGradient>");
    assert!(tokens[0].is_start_tag_named("lineargradient"));
    match &tokens[0].kind {
        TokenKind::StartTag { name, .. } => assert_eq!(name, "linearGradient"),
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_self_closing_tag() {
    let tokens = lex("<br/><img src=a.png />");
    assert!(matches!(
        &tokens[0].kind,
        TokenKind::StartTag { name, self_closing: true, .. } if name == "br"
    ));
    match &tokens[1].kind {
        TokenKind::StartTag {
            attributes,
            self_closing,
            ..
        } => {
            assert!(self_closing);
            assert_eq!(
                attributes.get("src"),
                Some(&AttributeValue::Text("a.png".to_string()))
            );
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_attribute_forms() {
    let tokens = lex(r#"<input type="text" name='q' value=plain disabled>"#);
    match &tokens[0].kind {
        TokenKind::StartTag { attributes, .. } => {
            assert_eq!(attributes.len(), 4);
            assert_eq!(attributes.get("type").map(AttributeValue::as_str), Some("text"));
            assert_eq!(attributes.get("name").map(AttributeValue::as_str), Some("q"));
            assert_eq!(attributes.get("value").map(AttributeValue::as_str), Some("plain"));
            assert_eq!(attributes.get("disabled"), Some(&AttributeValue::Present));
            let order: Vec<_> = attributes.iter().map(|a| a.name.as_str()).collect();
            assert_eq!(order, ["type", "name", "value", "disabled"]);
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_attribute_whitespace_around_equals() {
    let tokens = lex(r#"<a href = "/x" >"#);
    match &tokens[0].kind {
        TokenKind::StartTag { attributes, .. } => {
            assert_eq!(attributes.get("href").map(AttributeValue::as_str), Some("/x"));
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_unquoted_value_with_slash() {
    let tokens = lex("<a href=/a/b>");
    match &tokens[0].kind {
        TokenKind::StartTag {
            attributes,
            self_closing,
            ..
        } => {
            assert_eq!(attributes.get("href").map(AttributeValue::as_str), Some("/a/b"));
            assert!(!self_closing);
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_backslash_protects_quote() {
    let tokens = lex(r#"<p title="say \"hi\"">"#);
    match &tokens[0].kind {
        TokenKind::StartTag { attributes, .. } => {
            assert_eq!(
                attributes.get("title").map(AttributeValue::as_str),
                Some(r#"say \"hi\""#)
            );
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_repeated_style_is_merged() {
    let tokens = lex(r#"<p style="color: red" style="margin: 0">"#);
    match &tokens[0].kind {
        TokenKind::StartTag { attributes, .. } => {
            assert_eq!(attributes.len(), 1);
            assert_eq!(
                attributes.get("style").map(AttributeValue::as_str),
                Some("color: red;margin: 0")
            );
            assert!(attributes.duplicates().is_empty());
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_repeated_attribute_is_recorded() {
    let tokens = lex(r#"<p id="a" id="b">"#);
    match &tokens[0].kind {
        TokenKind::StartTag { attributes, .. } => {
            assert_eq!(attributes.get("id").map(AttributeValue::as_str), Some("a"));
            assert_eq!(attributes.duplicates(), ["id".to_string()]);
        }
        _ => panic!("Expected StartTag token"),
    }
}

#[test]
fn test_text_positions() {
    let tokens = lex("<p>\n  hello\n</p>");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].position, Position::new(1, 4));
    assert_eq!(tokens[2].position, Position::new(3, 1));
    match &tokens[1].kind {
        TokenKind::Text { content } => assert_eq!(content, "\n  hello\n"),
        _ => panic!("Expected Text token"),
    }
}

#[test]
fn test_less_than_followed_by_space_is_text() {
    let tokens = lex("<p>a < b</p>");
    assert_eq!(tokens.len(), 3);
    match &tokens[1].kind {
        TokenKind::Text { content } => assert_eq!(content, "a < b"),
        _ => panic!("Expected Text token"),
    }
}

#[test]
fn test_trailing_less_than_is_text() {
    let tokens = lex("a <");
    assert_eq!(tokens.len(), 1);
    assert!(matches!(&tokens[0].kind, TokenKind::Text { content } if content == "a <"));
}

#[test]
fn test_comment() {
    let tokens = lex("<!-- a <b> comment -->x");
    assert_eq!(tokens.len(), 2);
    match &tokens[0].kind {
        TokenKind::Comment { content } => assert_eq!(content, " a <b> comment "),
        _ => panic!("Expected Comment token"),
    }
    assert_eq!(tokens[1].position, Position::new(1, 23));
}

#[test]
fn test_cdata() {
    let tokens = lex("<![CDATA[x < y]]>");
    match &tokens[0].kind {
        TokenKind::CData { content } => assert_eq!(content, "x < y"),
        _ => panic!("Expected CData token"),
    }
}

#[test]
fn test_bogus_declaration_is_comment() {
    let tokens = lex("<!ELEMENT br EMPTY>");
    match &tokens[0].kind {
        TokenKind::Comment { content } => assert_eq!(content, "ELEMENT br EMPTY"),
        _ => panic!("Expected Comment token"),
    }
}

#[test]
fn test_processing_instruction() {
    let tokens = lex(r#"<?xml version="1.0"?><p>"#);
    assert_eq!(tokens.len(), 2);
    match &tokens[0].kind {
        TokenKind::ProcessingInstruction { name } => assert_eq!(name, "xml"),
        _ => panic!("Expected ProcessingInstruction token"),
    }
    assert!(tokens[1].is_start_tag_named("p"));
}

#[test]
fn test_processing_instruction_ends_at_question_mark() {
    let tokens = lex("<?php if (a > b) ?><p>x</p>");
    assert_eq!(tokens.len(), 4);
    match &tokens[0].kind {
        TokenKind::ProcessingInstruction { name } => assert_eq!(name, "php"),
        _ => panic!("Expected ProcessingInstruction token"),
    }
    assert!(tokens[1].is_start_tag_named("p"));
    assert_eq!(tokens[1].position, Position::new(1, 20));
}

#[test]
fn test_processing_instruction_without_body() {
    let tokens = lex("<?page?>x");
    assert_eq!(tokens.len(), 2);
    assert!(matches!(
        &tokens[0].kind,
        TokenKind::ProcessingInstruction { name } if name == "page"
    ));
    assert!(matches!(&tokens[1].kind, TokenKind::Text { content } if content == "x"));
}

#[test]
fn test_unterminated_processing_instruction() {
    assert!(matches!(
        lex_error("<?php echo 1; >"),
        LexError::UnexpectedEof { .. }
    ));
}

#[test]
fn test_script_is_raw_text() {
    let tokens = lex("<script>if (a < b && c > d) { x = '</p>'; }</script>");
    assert_eq!(tokens.len(), 3);
    match &tokens[1].kind {
        TokenKind::Text { content } => {
            assert_eq!(content, "if (a < b && c > d) { x = '</p>'; }");
        }
        _ => panic!("Expected Text token"),
    }
    assert!(matches!(&tokens[2].kind, TokenKind::EndTag { name } if name == "script"));
}

#[test]
fn test_style_is_raw_text_case_insensitive() {
    let tokens = lex("<STYLE>p > a { color: red }</Style>");
    assert_eq!(tokens.len(), 3);
    assert!(matches!(&tokens[1].kind, TokenKind::Text { content } if content == "p > a { color: red }"));
    assert!(matches!(&tokens[2].kind, TokenKind::EndTag { name } if name == "Style"));
}

#[test]
fn test_raw_text_end_tag_needs_whole_name() {
    let tokens = lex("<script>a = '</scripts>';</script >");
    assert_eq!(tokens.len(), 3);
    match &tokens[1].kind {
        TokenKind::Text { content } => assert_eq!(content, "a = '</scripts>';"),
        _ => panic!("Expected Text token"),
    }
    assert_eq!(tokens[2].position, Position::new(1, 26));
    assert!(matches!(&tokens[2].kind, TokenKind::EndTag { name } if name == "script"));

    assert!(matches!(
        lex_error("<style>p {}</styles>"),
        LexError::UnterminatedRawText { name, .. } if name == "style"
    ));
}

#[test]
fn test_positions_after_multibyte_text() {
    let tokens = lex("<p>héllo\n wörld</p>");
    assert_eq!(tokens.len(), 3);
    assert_eq!(tokens[1].position, Position::new(1, 4));
    assert_eq!(tokens[2].position, Position::new(2, 7));
}

#[test]
fn test_empty_script() {
    let tokens = lex("<script src=x.js></script>");
    assert_eq!(tokens.len(), 2);
    assert!(matches!(&tokens[1].kind, TokenKind::EndTag { name } if name == "script"));
}

#[test]
fn test_lexer_is_lazy_iterator() {
    let mut lexer = Lexer::new("<p>one</p><p>two</p>");
    let first = lexer.next().unwrap().unwrap();
    assert!(first.is_start_tag_named("p"));
    assert_eq!(lexer.count(), 5);
}

#[test]
fn test_unterminated_quote() {
    let error = lex_error(r#"<p class="open>text"#);
    assert!(matches!(error, LexError::UnterminatedQuote { .. }));
    assert_eq!(error.position(), Position::new(1, 10));
}

#[test]
fn test_unexpected_eof_in_tag() {
    assert!(matches!(
        lex_error("<div class=a"),
        LexError::UnexpectedEof { .. }
    ));
    assert!(matches!(lex_error("<div"), LexError::UnexpectedEof { .. }));
}

#[test]
fn test_missing_attribute_name() {
    assert!(matches!(
        lex_error(r#"<h1 ="x">"#),
        LexError::MalformedTag { name, .. } if name == "h1"
    ));
}

#[test]
fn test_stray_slash_in_tag() {
    assert!(matches!(
        lex_error("<div / class=a>"),
        LexError::MalformedTag { .. }
    ));
}

#[test]
fn test_missing_tag_name() {
    assert!(matches!(lex_error("<>"), LexError::MissingTagName { .. }));
    assert!(matches!(lex_error("</>"), LexError::MissingTagName { .. }));
}

#[test]
fn test_unterminated_sections() {
    assert!(matches!(
        lex_error("<!-- never closed"),
        LexError::UnterminatedComment { .. }
    ));
    assert!(matches!(
        lex_error("<![CDATA[ never closed"),
        LexError::UnterminatedCData { .. }
    ));
    assert!(matches!(
        lex_error("<script>var a;"),
        LexError::UnterminatedRawText { name, .. } if name == "script"
    ));
}

#[test]
fn test_lexer_stops_after_error() {
    let mut lexer = Lexer::new("<p>ok</p><!-- broken");
    assert_eq!(lexer.by_ref().filter(Result::is_ok).count(), 3);
    assert!(lexer.next().is_none());
}

#[test]
fn test_token_display() {
    let tokens = lex(r#"<a href="/x" hidden>"#);
    assert_eq!(tokens[0].to_string(), r#"1:1 <a href="/x" hidden>"#);
}
