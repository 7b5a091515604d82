//! Integration tests for whole-document validation.

use std::collections::HashSet;

use html5check::{
    Config, Error, ErrorKind, Mode, Options, Position, Report, RuleOverrides, RuleTables,
    WarningKind, validate, validate_with,
};
use strum::IntoEnumIterator;

/// Helper to validate in fail-fast mode
fn check(html: &str) -> Result<Report, Error> {
    validate(html, Options::default())
}

/// Helper to validate in accumulate mode, which only fails on lexical errors
fn check_all(html: &str) -> Report {
    validate(html, Options::accumulate()).unwrap()
}

/// Helper to get the kind of the first violation in fail-fast mode
fn first_error(html: &str) -> ErrorKind {
    match check(html) {
        Err(Error::Invalid(violation)) => violation.kind,
        Err(Error::Lex(error)) => panic!("Expected a violation, got lexical error {error}"),
        Ok(report) => panic!("Expected a violation, got {report:?}"),
    }
}

const FULL_DOCUMENT: &str = "<!DOCTYPE html>
<html lang=\"en\">
  <head>
    <meta charset=\"utf-8\">
    <title>Test page</title>
    <link rel=\"stylesheet\" href=\"style.css\">
  </head>
  <body>
    <h1 class=\"title\">Hello</h1>
    <p>Some <em>text</em> and a <a href=\"/x\">link</a>.</p>
    <img src=\"a.png\" alt=\"A\">
  </body>
</html>
";

#[test]
fn test_empty_page() {
    assert_eq!(first_error(""), ErrorKind::EmptyPage);
    assert_eq!(first_error("   \n\t"), ErrorKind::EmptyPage);

    let report = check_all("  ");
    assert!(!report.is_valid());
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].kind, ErrorKind::EmptyPage);
}

#[test]
fn test_full_document() {
    let report = check(FULL_DOCUMENT).unwrap();
    assert!(report.is_valid());
    assert!(report.doctype_seen);
    assert!(report.errors.is_empty());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_omitted_head_and_body() {
    let html = "<!DOCTYPE html><html><title>t</title><p>x</p></html>";
    assert!(check(html).unwrap().is_valid());
}

#[test]
fn test_text_directly_in_html_opens_body() {
    assert!(check("<html>hello</html>").unwrap().is_valid());
}

#[test]
fn test_implied_list_item_close() {
    assert!(check("<ul><li>a<li>b</ul>").unwrap().is_valid());
}

#[test]
fn test_implied_table_closes() {
    let html = "<table><tr><td>a<td>b<tr><td>c</table>";
    assert!(check(html).unwrap().is_valid());

    let html = "<table><thead><tr><th>h</thead><tbody><tr><td>d</tbody></table>";
    assert!(check(html).unwrap().is_valid());
}

#[test]
fn test_paragraph_closed_by_block() {
    assert!(check("<div><p>one<p>two<div>three</div></div>").unwrap().is_valid());
}

#[test]
fn test_paragraph_closed_by_body() {
    let html = "<!DOCTYPE html><html><body><p>text</body></html>";
    assert!(check(html).unwrap().is_valid());
}

#[test]
fn test_svg_case_sensitivity() {
    let html = "<svg><linearGradient><stop/></linearGradient></svg>";
    assert!(check(html).unwrap().is_valid());

    let html = "<svg><lineargradient><stop/></lineargradient></svg>";
    assert_eq!(first_error(html), ErrorKind::InvalidTag);
}

#[test]
fn test_html_names_are_case_insensitive() {
    assert!(check("<DIV CLASS=\"x\">hi</Div>").unwrap().is_valid());
}

#[test]
fn test_attribute_allow_list() {
    assert!(check("<body><a href=\"/x\">hi</a></body>").unwrap().is_valid());
    assert_eq!(
        first_error("<body><a frobnicate=\"1\">hi</a></body>"),
        ErrorKind::InvalidAttribute
    );
}

#[test]
fn test_missing_equals_sign() {
    assert_eq!(first_error("<h1 class\"NO\">x</h1>"), ErrorKind::InvalidAttribute);
}

#[test]
fn test_misplaced_element_in_head() {
    let html = "<!doctype html><html><head><div>hi</div></head></html>";
    assert_eq!(first_error(html), ErrorKind::MisplacedEndTag);
}

#[test]
fn test_unclosed_heading() {
    let html = "<!doctype html><html><body><h1>hi</body></html>";
    assert_eq!(first_error(html), ErrorKind::MisplacedEndTag);
}

#[test]
fn test_end_tag_when_not_inside() {
    match check("<div></span></div>") {
        Err(Error::Invalid(violation)) => {
            assert_eq!(violation.kind, ErrorKind::MisplacedEndTag);
            assert_eq!(violation.message, "End tag for span when not inside");
            assert_eq!(violation.location.to_string(), "1:6:div");
        }
        other => panic!("Expected MisplacedEndTag, got {other:?}"),
    }
}

#[test]
fn test_end_tag_with_elements_still_open() {
    match check("<div><span>x</div>") {
        Err(Error::Invalid(violation)) => {
            assert_eq!(violation.kind, ErrorKind::MisplacedEndTag);
            assert_eq!(
                violation.message,
                "End tag for 'div' while other elements (span) still open"
            );
        }
        other => panic!("Expected MisplacedEndTag, got {other:?}"),
    }
}

#[test]
fn test_unknown_tag() {
    assert_eq!(first_error("<blink>x</blink>"), ErrorKind::InvalidTag);
}

#[test]
fn test_void_end_tag() {
    assert_eq!(first_error("<p>a<br>b</br></p>"), ErrorKind::InvalidTag);
    assert!(check("<p>a<br>b<br/>c</p>").unwrap().is_valid());
}

#[test]
fn test_non_recursable() {
    assert_eq!(
        first_error("<a href=\"/\"><a href=\"/\">x</a></a>"),
        ErrorKind::MisplacedElement
    );
    assert!(check("<div><div>x</div></div>").unwrap().is_valid());
}

#[test]
fn test_fragment_rules() {
    assert!(check("<p>x</p>").unwrap().is_valid());
    assert_eq!(first_error("<li>x</li>"), ErrorKind::MisplacedElement);
    assert_eq!(first_error("<td>x</td>"), ErrorKind::MisplacedElement);
}

#[test]
fn test_unclosed_tags() {
    assert_eq!(first_error("<div><span>x</span>"), ErrorKind::UnclosedTags);

    let report = check_all("<div>\n<section>");
    assert_eq!(report.errors.len(), 1);
    let error = &report.errors[0];
    assert_eq!(error.kind, ErrorKind::UnclosedTags);
    assert_eq!(error.location.position, Position::new(2, 1));
    assert_eq!(error.location.ancestors, ["div", "section"]);
}

#[test]
fn test_accumulate_reports_every_error() {
    let html = "<div>\n  <p foo=\"1\">a</p>\n  <span bar>b</span>\n</div>";

    assert_eq!(first_error(html), ErrorKind::InvalidAttribute);

    let report = check_all(html);
    assert!(!report.is_valid());
    assert_eq!(report.errors.len(), 2);
    assert_eq!(report.errors[0].kind, ErrorKind::InvalidAttribute);
    assert_eq!(report.errors[0].location.position, Position::new(2, 3));
    assert_eq!(report.errors[0].location.to_string(), "2:3:div");
    assert_eq!(report.errors[1].kind, ErrorKind::InvalidAttribute);
    assert_eq!(report.errors[1].location.position, Position::new(3, 3));
    assert_eq!(
        report.errors[1].message,
        "\"bar\" is not a valid attribute for span"
    );
}

#[test]
fn test_accumulate_recovers_after_misplaced_end_tag() {
    let html = "<div><span>x</div><p>y</p>";
    let report = check_all(html);
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].kind, ErrorKind::MisplacedEndTag);
}

#[test]
fn test_accumulate_unknown_tag_reported_once() {
    let report = check_all("<blink>x</blink>");
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].kind, ErrorKind::InvalidTag);
}

#[test]
fn test_data_attribute_warning() {
    let report = check("<div data-id=\"7\">x</div>").unwrap();
    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].kind, WarningKind::DataAttribute);
}

#[test]
fn test_deprecated_attribute_warning() {
    let report = check("<img src=\"a.png\" border=\"0\">").unwrap();
    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].kind, WarningKind::DeprecatedAttribute);
    assert_eq!(
        report.warnings[0].message,
        "img should NOT have border=\"0\" in HTML5."
    );
}

#[test]
fn test_svg_attribute_warning() {
    let html = "<svg viewBox=\"0 0 1 1\"><rect fill=\"red\"/></svg>";
    let report = check(html).unwrap();
    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].kind, WarningKind::SvgAttribute);
}

#[test]
fn test_aria_attributes_are_global() {
    let report = check("<div aria-hidden=\"true\" role=\"note\">x</div>").unwrap();
    assert!(report.is_valid());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_repeated_attribute() {
    assert_eq!(
        first_error("<p id=\"a\" ID=\"b\">x</p>"),
        ErrorKind::InvalidAttribute
    );
    let report = check("<p style=\"a: b\" STYLE=\"c: d\">x</p>").unwrap();
    assert!(report.is_valid());
}

#[test]
fn test_self_closing_non_void() {
    let report = check("<div/>x</div>").unwrap();
    assert!(report.is_valid());
    assert_eq!(report.warnings.len(), 1);
    assert_eq!(report.warnings[0].kind, WarningKind::SelfClosingNonVoid);
}

#[test]
fn test_require_doctype() {
    let options = Options::default().with_require_doctype(true);
    match validate("<p>x</p>", options) {
        Err(Error::Invalid(violation)) => assert_eq!(violation.kind, ErrorKind::MissingDoctype),
        other => panic!("Expected MissingDoctype, got {other:?}"),
    }
    assert!(validate(FULL_DOCUMENT, options).unwrap().is_valid());
}

#[test]
fn test_lexical_error_is_fatal_in_both_modes() {
    let html = "<p class=\"x>y</p>";
    assert!(matches!(check(html), Err(Error::Lex(_))));
    assert!(matches!(
        validate(html, Options::accumulate()),
        Err(Error::Lex(_))
    ));
}

#[test]
fn test_rule_overrides() {
    let html = "<div ng-model=\"x\" hx-get=\"/y\">x</div>";
    assert_eq!(first_error(html), ErrorKind::InvalidAttribute);

    let overrides = RuleOverrides {
        global_attributes: vec!["hx-get".to_string()],
        attribute_prefixes: vec!["ng-".to_string()],
        ..RuleOverrides::default()
    };
    let rules = RuleTables::with_overrides(&overrides);
    let report = validate_with(html, &rules, Options::default()).unwrap();
    assert!(report.is_valid());
    assert!(report.warnings.is_empty());
}

#[test]
fn test_config_from_json() {
    let config: Config = serde_json::from_str(
        r#"{ "mode": "accumulate", "require_doctype": true, "rules": { "attribute_prefixes": ["v-"] } }"#,
    )
    .unwrap();
    let options = config.options();
    assert_eq!(options.mode, Mode::Accumulate);
    assert!(options.require_doctype);

    let rules = config.rule_tables();
    let report = validate_with("<div v-if=\"ok\">x</div>", &rules, options).unwrap();
    assert_eq!(report.errors.len(), 1);
    assert_eq!(report.errors[0].kind, ErrorKind::MissingDoctype);

    assert!(serde_json::from_str::<Config>(r#"{ "mode": "lenient" }"#).is_err());
    assert!(serde_json::from_str::<Config>(r#"{ "colour": true }"#).is_err());
}

#[test]
fn test_report_serializes() {
    let report = check_all("<div><p foo=1>x</p></div>");
    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"][0]["kind"], "InvalidAttribute");
    assert_eq!(json["errors"][0]["location"]["line"], 1);
    assert_eq!(json["errors"][0]["location"]["ancestors"][0], "div");
}

#[test]
fn test_error_kind_names() {
    let names: HashSet<&'static str> = ErrorKind::iter().map(Into::into).collect();
    assert_eq!(names.len(), 8);
    assert!(names.contains("MisplacedEndTag"));
    assert_eq!(ErrorKind::UnclosedTags.to_string(), "UnclosedTags");
}

#[test]
fn test_processing_instruction_in_head() {
    let html = "<!DOCTYPE html><html><head><?php if (a > b) ?><title>t</title></head>\
                <body></body></html>";
    let report = check(html).unwrap();
    assert!(report.is_valid());
}
