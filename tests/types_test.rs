use email_unquote::*;

// --- UnquoteOptions ---

#[test]
fn test_options_defaults() {
    let options = UnquoteOptions::default();

    assert_eq!(options.mode, Mode::Remove);
    assert!(!options.ignore_first_forward);
    assert_eq!(options.depth, Depth::Infinite);
    assert_eq!(options.label, "Show embedded message");
}

#[test]
fn test_options_builders() {
    let options = UnquoteOptions::default()
        .with_mode(Mode::Wrap)
        .with_depth(Depth::Levels(2))
        .with_ignore_first_forward(true)
        .with_label("Quoted");

    assert_eq!(options.mode, Mode::Wrap);
    assert_eq!(options.depth, Depth::Levels(2));
    assert!(options.ignore_first_forward);
    assert_eq!(options.label, "Quoted");
}

#[test]
fn test_options_from_partial_json() {
    let options = UnquoteOptions::from_json(r#"{"mode": "wrap", "depth": 1}"#).unwrap();

    assert_eq!(options.mode, Mode::Wrap);
    assert_eq!(options.depth, Depth::Levels(1));
    assert!(!options.ignore_first_forward);
    assert_eq!(options.label, DEFAULT_LABEL);
}

#[test]
fn test_options_infinite_depth_json() {
    let options = UnquoteOptions::from_json(r#"{"depth": "infinite"}"#).unwrap();
    assert_eq!(options.depth, Depth::Infinite);

    let json = serde_json::to_string(&UnquoteOptions::default()).unwrap();
    assert!(json.contains(r#""depth":"infinite""#));
    assert!(json.contains(r#""mode":"remove""#));
}

#[test]
fn test_options_invalid_json() {
    let err = UnquoteOptions::from_json(r#"{"depth": "deep"}"#).unwrap_err();
    assert!(matches!(err, UnquoteError::Options(_)));

    let err = UnquoteOptions::from_json(r#"{"mode": "shred"}"#).unwrap_err();
    assert!(err.to_string().starts_with("Invalid options"));
}

// --- Depth ---

#[test]
fn test_depth_allows() {
    assert!(Depth::Levels(0).allows(0));
    assert!(!Depth::Levels(0).allows(1));
    assert!(Depth::Levels(2).allows(2));
    assert!(!Depth::Levels(2).allows(3));
    assert!(Depth::Infinite.allows(usize::MAX));
}

#[test]
fn test_depth_display() {
    assert_eq!(Depth::Levels(3).to_string(), "3");
    assert_eq!(Depth::Infinite.to_string(), "infinite");
}

// --- UnquoteResult ---

#[test]
fn test_result_constructors_keep_invariant() {
    let empty = UnquoteResult::empty();
    assert_eq!(empty.content, "");
    assert!(!empty.had_quotes);
    assert!(empty.detection_method.is_none());

    let unchanged = UnquoteResult::unchanged("text");
    assert!(!unchanged.had_quotes);
    assert!(unchanged.detection_method.is_none());

    let quoted = UnquoteResult::quoted("text", DetectionMethod::Pattern);
    assert!(quoted.had_quotes);
    assert_eq!(quoted.detection_method, Some(DetectionMethod::Pattern));
}

#[test]
fn test_detection_method_serialization() {
    let result = UnquoteResult::quoted("<p>Hi</p>", DetectionMethod::Handlers);
    let json = serde_json::to_string(&result).unwrap();

    assert!(json.contains(r#""detection_method":"handlers""#));
    assert_eq!(DetectionMethod::Pattern.to_string(), "pattern");
}

// --- Handlers and patterns ---

#[test]
fn test_builtin_selectors_compile() {
    let document = Document::parse("<div></div>");

    for handler in builtin_handlers() {
        assert!(
            document.select(&handler.selector).is_some(),
            "selector of {} does not compile",
            handler.name
        );
    }
}

#[test]
fn test_builtin_handler_names() {
    let names: Vec<&str> = builtin_handlers().iter().map(|h| h.name.as_ref()).collect();

    for expected in ["gmail", "outlook_desktop", "outlook_web", "thunderbird", "apple_mail", "yahoo"] {
        assert!(names.contains(&expected), "missing handler {expected}");
    }
}

#[test]
fn test_forward_patterns() {
    assert!(patterns::is_forward("---------- Forwarded message ---------"));
    assert!(patterns::is_forward("Début du message transféré :"));
    assert!(patterns::is_forward("-------- Weitergeleitete Nachricht --------"));
    assert!(!patterns::is_forward("On Monday, Alice wrote:"));
}

#[test]
fn test_starts_with_header() {
    assert!(patterns::starts_with_header("  On Monday, Alice wrote:\nHi"));
    assert!(patterns::starts_with_header("Begin forwarded message:"));
    assert!(!patterns::starts_with_header("Hi\nOn Monday, Alice wrote:"));
}

#[test]
fn test_earliest_match_language() {
    let (index, pattern) =
        patterns::earliest_match("Hallo\nAm 15.01.2024 um 10:00 schrieb Hans:\n> x").unwrap();

    assert_eq!(index, 6);
    assert_eq!(pattern.lang, "de");
    assert_eq!(pattern.kind, patterns::PatternKind::Reply);
}
