use tlwire::{Cursor, Serializable};
use tlwire_dynamic::{DecodeError, EncodeError, MAX_DEPTH, Object, Schema, Value};

const SCHEMA: &str = r#"
// LAYER 158
boolFalse#bc799737 = Bool;
boolTrue#997275b5 = Bool;
vector#1cb5c415 {t:Type} # [ t ] = Vector t;

chatEmpty#29562865 id:long = Chat;
chatTest#04030201 = Chat;
channelForbidden#17d493d5 flags:# broadcast:flags.5?true megagroup:flags.8?true
    id:long access_hash:long title:string until_date:flags.16?int = Chat;
userEmpty#d3bc4b7a id:long = User;

chatInviteAlready#5a686d7c chat:Chat = ChatInvite;

auth.sentCodeTypeEmailCode#f450f59b flags:# apple_signin_allowed:flags.0?true
    google_signin_allowed:flags.1?true email_pattern:string length:int
    reset_available_period:flags.3?int reset_pending_date:flags.4?int = auth.SentCodeType;

channels.chats#15af9d1b chats:Vector<Chat> users:Vector<User> = channels.Chats;

ipPort#d433ad73 ipv4:int port:int = IpPort;
help.configSimple#5a592a6c date:int expires:int rules:vector<ipPort> = help.ConfigSimple;

resPQ#05162463 nonce:int128 server_nonce:int128 pq:bytes server_public_key_fingerprints:Vector<long> = ResPQ;
p_q_inner_data#83c95aec pq:bytes p:bytes q:bytes nonce:int128 server_nonce:int128 new_nonce:int256 = P_Q_inner_data;
geoPoint#b2a2f663 flags:# long:double lat:double access_hash:long accuracy_radius:flags.0?int = GeoPoint;
channelAdminLogEventActionToggleInvites#1b7907ae new_value:Bool = ChannelAdminLogEventAction;

---functions---

invokeWithLayer#da9b0d0d {X:Type} layer:int query:!X = X;
"#;

fn schema() -> Schema {
    Schema::parse(SCHEMA).unwrap()
}

fn email_code() -> Object {
    Object::new(0xf450f59b)
        .with("apple_signin_allowed", Value::True)
        .with("email_pattern", "a@b")
        .with("length", 6)
        .with("reset_available_period", 60)
}

#[test]
fn chat_invite_already_wraps_nested_boxed_object() {
    let schema = schema();
    let invite = Object::new(0x5a686d7c).with("chat", Object::new(0x04030201));

    let bytes = schema.to_bytes(&invite).unwrap();
    assert_eq!(bytes, [0x7c, 0x6d, 0x68, 0x5a, 0x01, 0x02, 0x03, 0x04]);
    assert_eq!(schema.from_bytes(&bytes).unwrap(), invite);
}

#[test]
fn flags_word_and_optional_fields() {
    let schema = schema();
    let bytes = schema.to_bytes(&email_code()).unwrap();
    assert_eq!(
        bytes,
        [
            0x9b, 0xf5, 0x50, 0xf4, // auth.sentCodeTypeEmailCode
            0x09, 0x00, 0x00, 0x00, // flags: bits 0 and 3
            0x03, b'a', b'@', b'b', // email_pattern
            0x06, 0x00, 0x00, 0x00, // length
            0x3c, 0x00, 0x00, 0x00, // reset_available_period
        ]
    );

    let back = schema.from_bytes(&bytes).unwrap();
    assert_eq!(back, email_code());
    assert_eq!(back.get("google_signin_allowed"), None);
    assert_eq!(back.get("reset_pending_date"), None);
}

#[test]
fn presence_flags_set_only_their_bit() {
    let schema = schema();
    let channel = Object::new(0x17d493d5)
        .with("megagroup", Value::True)
        .with("id", 1i64)
        .with("access_hash", 2i64)
        .with("title", "t")
        .with("until_date", 3);
    let bytes = schema.to_bytes(&channel).unwrap();
    assert_eq!(&bytes[4..8], &((1u32 << 8) | (1 << 16)).to_le_bytes());
    assert_eq!(bytes.len(), 4 + 4 + 8 + 8 + 4 + 4);
    assert_eq!(schema.from_bytes(&bytes).unwrap(), channel);
}

#[test]
fn same_bytes_as_static_types() {
    use tlwire_types::{enums, types};

    let schema = schema();
    let typed = enums::auth::SentCodeType::EmailCode(types::auth::SentCodeTypeEmailCode {
        apple_signin_allowed: true,
        google_signin_allowed: false,
        email_pattern: "a@b".into(),
        length: 6,
        reset_available_period: Some(60),
        reset_pending_date: None,
    });
    assert_eq!(schema.to_bytes(&email_code()).unwrap(), typed.to_bytes());

    let invite = enums::ChatInvite::Already(types::ChatInviteAlready {
        chat: enums::Chat::ChannelForbidden(types::ChannelForbidden {
            broadcast: true,
            megagroup: false,
            id: 10,
            access_hash: -10,
            title: "news".into(),
            until_date: None,
        }),
    });
    let decoded = schema.from_bytes(&invite.to_bytes()).unwrap();
    let chat = decoded.get("chat").and_then(Value::as_object).unwrap();
    assert_eq!(chat.id, 0x17d493d5);
    assert_eq!(chat.get("broadcast"), Some(&Value::True));
    assert_eq!(chat.get("title"), Some(&Value::String("news".into())));
    assert_eq!(schema.to_bytes(&decoded).unwrap(), invite.to_bytes());
}

#[test]
fn boxed_vector_exact_bytes() {
    let schema = Schema::parse("test.ints#0badf00d values:Vector<int> = test.Ints;").unwrap();
    let obj = Object::new(0x0badf00d).with("values", vec![Value::Int(7), Value::Int(9)]);
    let bytes = schema.to_bytes(&obj).unwrap();
    assert_eq!(
        &bytes[4..],
        &[
            0x15, 0xc4, 0xb5, 0x1c, 0x02, 0x00, 0x00, 0x00, //
            0x07, 0x00, 0x00, 0x00, 0x09, 0x00, 0x00, 0x00,
        ]
    );
    assert_eq!(schema.from_bytes(&bytes).unwrap(), obj);
}

#[test]
fn vectors_of_boxed_objects() {
    let schema = schema();
    let chats = Object::new(0x15af9d1b)
        .with(
            "chats",
            vec![
                Value::from(Object::new(0x29562865).with("id", 1i64)),
                Value::from(Object::new(0x04030201)),
            ],
        )
        .with("users", Vec::<Value>::new());
    let bytes = schema.to_bytes(&chats).unwrap();
    assert_eq!(schema.from_bytes(&bytes).unwrap(), chats);
}

#[test]
fn bare_vector_of_bare_constructors() {
    let schema = schema();
    let rule = |ipv4: i32, port: i32| Value::from(Object::new(0xd433ad73).with("ipv4", ipv4).with("port", port));
    let config = Object::new(0x5a592a6c)
        .with("date", 1)
        .with("expires", 2)
        .with("rules", vec![rule(0x7f000001, 443), rule(0x0a000001, 80)]);

    let bytes = schema.to_bytes(&config).unwrap();
    // id, date, expires, count, then two 8-byte bodies with no IDs
    assert_eq!(bytes.len(), 4 + 4 + 4 + 4 + 2 * 8);
    assert_eq!(&bytes[12..16], &2u32.to_le_bytes());
    assert_eq!(&bytes[16..20], &0x7f000001i32.to_le_bytes());
    assert_eq!(schema.from_bytes(&bytes).unwrap(), config);
}

#[test]
fn wide_integers_bytes_and_doubles() {
    let schema = schema();
    let res_pq = Object::new(0x05162463)
        .with("nonce", Value::Int128([0x11; 16]))
        .with("server_nonce", Value::Int128([0x22; 16]))
        .with("pq", vec![0x17u8, 0xed, 0x48, 0x94, 0x1a, 0x08, 0xf9, 0x81])
        .with("server_public_key_fingerprints", vec![Value::Long(-4344800451088585951)]);
    let bytes = schema.to_bytes(&res_pq).unwrap();
    assert_eq!(bytes.len() % 4, 0);
    assert_eq!(schema.from_bytes(&bytes).unwrap(), res_pq);

    let inner = Object::new(0x83c95aec)
        .with("pq", vec![1u8])
        .with("p", vec![2u8])
        .with("q", vec![3u8])
        .with("nonce", Value::Int128([4; 16]))
        .with("server_nonce", Value::Int128([5; 16]))
        .with("new_nonce", Value::Int256(core::array::from_fn(|i| i as u8)));
    assert_eq!(schema.from_bytes(&schema.to_bytes(&inner).unwrap()).unwrap(), inner);

    let point = Object::new(0xb2a2f663)
        .with("long", 12.4924)
        .with("lat", -41.8902)
        .with("access_hash", 9i64);
    let bytes = schema.to_bytes(&point).unwrap();
    assert_eq!(&bytes[4..8], &[0, 0, 0, 0]);
    assert_eq!(&bytes[8..16], &12.4924f64.to_le_bytes());
    assert_eq!(schema.from_bytes(&bytes).unwrap(), point);
}

#[test]
fn bool_is_boxed() {
    let schema = schema();
    let action = Object::new(0x1b7907ae).with("new_value", false);
    let bytes = schema.to_bytes(&action).unwrap();
    assert_eq!(&bytes[4..], &0xbc799737u32.to_le_bytes());
    assert_eq!(schema.from_bytes(&bytes).unwrap(), action);
}

#[test]
fn generic_query_holds_any_object() {
    let schema = schema();
    let call = Object::new(0xda9b0d0d)
        .with("layer", 158)
        .with("query", Object::new(0xd3bc4b7a).with("id", 5i64));
    let bytes = schema.to_bytes(&call).unwrap();
    assert_eq!(&bytes[8..12], &0xd3bc4b7au32.to_le_bytes());
    assert_eq!(schema.from_bytes(&bytes).unwrap(), call);
}

#[test]
fn unknown_constructor_consumes_only_the_id() {
    let schema = schema();
    let mut wire = 0xdeadbeefu32.to_bytes();
    wire.extend(7i64.to_bytes());

    let mut cur = Cursor::from_slice(&wire);
    assert_eq!(
        schema.read(&mut cur),
        Err(DecodeError::Wire(tlwire::Error::UnknownConstructor { id: 0xdeadbeef }))
    );
    assert_eq!(cur.pos(), 4);
}

#[test]
fn nested_object_of_the_wrong_type() {
    let schema = schema();
    let mut wire = 0x5a686d7cu32.to_bytes();
    wire.extend(0xd3bc4b7au32.to_bytes());
    wire.extend(1i64.to_bytes());

    assert_eq!(
        schema.from_bytes(&wire),
        Err(DecodeError::WrongType { expected: "Chat".into(), id: 0xd3bc4b7a, found: "userEmpty".into() })
    );

    let invite = Object::new(0x5a686d7c).with("chat", Object::new(0xd3bc4b7a).with("id", 1i64));
    assert_eq!(
        schema.to_bytes(&invite),
        Err(EncodeError::WrongType { expected: "Chat".into(), id: 0xd3bc4b7a, found: "userEmpty".into() })
    );
}

#[test]
fn truncated_input() {
    let schema = schema();
    let bytes = schema.to_bytes(&email_code()).unwrap();
    for cut in [2, 6, 10, bytes.len() - 1] {
        assert!(
            matches!(
                schema.from_bytes(&bytes[..cut]),
                Err(DecodeError::Wire(tlwire::Error::Truncated { .. }))
            ),
            "cut at {cut}"
        );
    }
}

#[test]
fn vector_shorter_than_declared() {
    let schema = schema();
    let mut wire = 0x5a592a6cu32.to_bytes();
    wire.extend(1i32.to_bytes());
    wire.extend(2i32.to_bytes());
    wire.extend(2u32.to_bytes());
    wire.extend(0x7f000001i32.to_bytes());
    wire.extend(443i32.to_bytes());

    assert_eq!(
        schema.from_bytes(&wire),
        Err(DecodeError::Wire(tlwire::Error::VectorCountMismatch { declared: 2, decoded: 1 }))
    );
}

#[test]
fn objects_are_validated_before_writing() {
    let schema = schema();
    let mut buf = vec![0xaa];

    let missing = Object::new(0xd3bc4b7a);
    assert_eq!(
        schema.write(&missing, &mut buf),
        Err(EncodeError::MissingField { constructor: "userEmpty".into(), field: "id".into() })
    );

    let wrong_kind = Object::new(0xd3bc4b7a).with("id", 1);
    assert_eq!(
        schema.write(&wrong_kind, &mut buf),
        Err(EncodeError::KindMismatch {
            constructor: "userEmpty".into(),
            field: "id".into(),
            expected: "long".into(),
            found: "int",
        })
    );

    let extra = Object::new(0xd3bc4b7a).with("id", 1i64).with("name", "x");
    assert_eq!(
        schema.write(&extra, &mut buf),
        Err(EncodeError::ExtraField { constructor: "userEmpty".into(), field: "name".into() })
    );

    let twice = Object::new(0xd3bc4b7a).with("id", 1i64).with("id", 2i64);
    assert!(matches!(schema.write(&twice, &mut buf), Err(EncodeError::ExtraField { .. })));

    // the flags word is derived, never supplied
    let flags = email_code().with("flags", 9);
    assert!(matches!(schema.write(&flags, &mut buf), Err(EncodeError::ExtraField { .. })));

    assert_eq!(
        schema.write(&Object::new(0x12345678), &mut buf),
        Err(EncodeError::UnknownConstructor { id: 0x12345678 })
    );

    // a failure deep inside leaves the buffer alone
    let nested = Object::new(0x5a686d7c).with("chat", Object::new(0x29562865));
    assert!(schema.write(&nested, &mut buf).is_err());

    assert_eq!(buf, [0xaa]);
}

#[test]
fn write_appends_to_existing_buffer() {
    let schema = schema();
    let mut buf = vec![0xaa];
    schema.write(&Object::new(0x04030201), &mut buf).unwrap();
    assert_eq!(buf, [0xaa, 0x01, 0x02, 0x03, 0x04]);
}

#[test]
fn fields_must_follow_declared_order() {
    let schema = Schema::parse("chatForbidden#6592a1a7 id:long title:string = Chat;").unwrap();

    let swapped = Object::new(0x6592a1a7).with("title", "t").with("id", 1i64);
    assert_eq!(
        schema.to_bytes(&swapped),
        Err(EncodeError::OutOfOrder { constructor: "chatForbidden".into(), field: "id".into() })
    );

    let ordered = Object::new(0x6592a1a7).with("id", 1i64).with("title", "t");
    let bytes = schema.to_bytes(&ordered).unwrap();
    assert_eq!(schema.from_bytes(&bytes).unwrap(), ordered);
}

#[test]
fn optional_fields_out_of_order() {
    let schema = schema();
    let code = Object::new(0xf450f59b)
        .with("email_pattern", "a@b")
        .with("length", 6)
        .with("apple_signin_allowed", Value::True);
    assert!(matches!(schema.to_bytes(&code), Err(EncodeError::OutOfOrder { .. })));
}

#[test]
fn oversized_bytes_are_rejected() {
    let schema = schema();
    let res_pq = Object::new(0x05162463)
        .with("nonce", Value::Int128([0; 16]))
        .with("server_nonce", Value::Int128([0; 16]))
        .with("pq", vec![0u8; 1 << 24])
        .with("server_public_key_fingerprints", Vec::<Value>::new());
    let mut buf = Vec::new();
    assert_eq!(
        schema.write(&res_pq, &mut buf),
        Err(EncodeError::TooLong { constructor: "resPQ".into(), field: "pq".into(), len: 1 << 24 })
    );
    assert!(buf.is_empty());
}

/// `invokeWithLayer` wrapped `wrappers` times around `chatEmpty`.
fn nested_call(wrappers: usize) -> Object {
    (0..wrappers).fold(Object::new(0x29562865).with("id", 1i64), |inner, _| {
        Object::new(0xda9b0d0d).with("layer", 158).with("query", inner)
    })
}

#[test]
fn nesting_up_to_the_limit_round_trips() {
    let schema = schema();
    let call = nested_call(MAX_DEPTH);
    let bytes = schema.to_bytes(&call).unwrap();
    assert_eq!(schema.from_bytes(&bytes).unwrap(), call);
}

#[test]
fn nesting_past_the_limit_fails() {
    let schema = schema();
    assert_eq!(
        schema.to_bytes(&nested_call(MAX_DEPTH + 1)),
        Err(EncodeError::TooDeep { limit: MAX_DEPTH })
    );

    // Far deeper than any stack could recurse.
    let mut wire = Vec::new();
    for _ in 0..200_000 {
        wire.extend(0xda9b0d0du32.to_bytes());
        wire.extend(158i32.to_bytes());
    }
    assert_eq!(schema.from_bytes(&wire), Err(DecodeError::TooDeep { limit: MAX_DEPTH }));
}
