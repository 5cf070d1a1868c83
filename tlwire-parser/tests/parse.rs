use tlwire_parser::{
    errors::{ParamParseError, ParseError},
    parse_tl_file,
    tl::{Category, Definition, ParameterType},
};

fn parse_all(src: &str) -> Vec<Definition> {
    parse_tl_file(src).collect::<Result<_, _>>().unwrap()
}

#[test]
fn parses_simple_constructor() {
    let defs = parse_all("chatInviteAlready#5a686d7c chat:Chat = ChatInvite;");
    assert_eq!(defs.len(), 1);
    assert_eq!(defs[0].name, "chatInviteAlready");
    assert_eq!(defs[0].id, 0x5a686d7c);
    assert_eq!(defs[0].ty.name, "ChatInvite");
    assert_eq!(defs[0].params.len(), 1);
    assert!(!defs[0].has_flags());
}

#[test]
fn parses_namespaces_and_functions() {
    let defs = parse_all(
        "
auth.sentCodeTypeApp#3dbb5986 length:int = auth.SentCodeType;
---functions---
help.getConfig#c4f9186b = Config;
",
    );
    assert_eq!(defs[0].namespace, vec!["auth"]);
    assert_eq!(defs[0].full_name(), "auth.sentCodeTypeApp");
    assert_eq!(defs[0].ty.full_name(), "auth.SentCodeType");
    assert_eq!(defs[0].category, Category::Types);
    assert_eq!(defs[1].category, Category::Functions);
    assert_eq!(defs[1].full_name(), "help.getConfig");
}

#[test]
fn flag_bits_follow_the_schema() {
    let defs = parse_all(
        "auth.sentCodeTypeEmailCode#f450f59b flags:# apple_signin_allowed:flags.0?true \
         google_signin_allowed:flags.1?true email_pattern:string length:int \
         reset_available_period:flags.3?int reset_pending_date:flags.4?int = auth.SentCodeType;",
    );
    let def = &defs[0];
    assert!(def.has_flags());

    let bits: Vec<(&str, u32)> = def
        .flagged_by("flags")
        .map(|p| (p.name.as_str(), p.flag().unwrap().index))
        .collect();
    assert_eq!(
        bits,
        vec![
            ("apple_signin_allowed", 0),
            ("google_signin_allowed", 1),
            ("reset_available_period", 3),
            ("reset_pending_date", 4),
        ]
    );
    assert!(def.params[1].is_presence_flag());
    assert!(!def.params[5].is_presence_flag());
}

#[test]
fn multi_line_definitions_and_comments() {
    let defs = parse_all(
        "
// LAYER 158
resPQ#05162463 nonce:int128 server_nonce:int128 // trailing comment
    pq:bytes server_public_key_fingerprints:Vector<long> = ResPQ;

boolTrue#997275b5 = Bool;
",
    );
    assert_eq!(defs.len(), 2);
    assert_eq!(defs[0].params.len(), 4);
    match &defs[0].params[3].ty {
        ParameterType::Normal { ty, flag: None } => {
            assert!(ty.is_vector());
            assert_eq!(ty.generic_arg.as_ref().unwrap().name, "long");
        }
        other => panic!("unexpected parameter type {other:?}"),
    }
}

#[test]
fn derived_id_when_missing() {
    let defs = parse_all("boolFalse = Bool;");
    assert_eq!(defs[0].id, 0xbc799737);
}

#[test]
fn generic_definitions() {
    let defs = parse_all("---functions---\ninvokeWithLayer#da9b0d0d {X:Type} layer:int query:!X = X;");
    assert_eq!(defs[0].params.len(), 2);
    assert!(defs[0].ty.generic_ref);
    let line = defs[0].to_string();
    assert_eq!(line, "invokeWithLayer#da9b0d0d {X:Type} layer:int query:!X = X");

    let reparsed: Definition = line.parse().unwrap();
    assert_eq!(reparsed.ty, defs[0].ty);
    assert_eq!(reparsed.params, defs[0].params);
}

#[test]
fn rejects_undeclared_flags_word() {
    let err = parse_tl_file("geoPoint#b2a2f663 accuracy_radius:flags.0?int = GeoPoint;")
        .next()
        .unwrap()
        .unwrap_err();
    assert_eq!(err, ParseError::InvalidParam(ParamParseError::MissingDef));
}

#[test]
fn rejects_out_of_range_flag_bit() {
    let err = parse_tl_file("x#1 flags:# a:flags.32?int = X;").next().unwrap().unwrap_err();
    assert_eq!(err, ParseError::InvalidParam(ParamParseError::InvalidFlag));
}

#[test]
fn rejects_missing_type_and_bad_id() {
    assert_eq!(
        parse_tl_file("chatEmpty#29562865 id:long;").next().unwrap().unwrap_err(),
        ParseError::MissingType
    );
    assert!(matches!(
        parse_tl_file("chatEmpty#zz id:long = Chat;").next().unwrap().unwrap_err(),
        ParseError::InvalidId(_)
    ));
}
