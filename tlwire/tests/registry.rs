use std::sync::Arc;
use std::thread;

use tlwire::{Cursor, Deserializable, Error, Identifiable, Registry, Serializable};

#[derive(Clone, Debug, PartialEq)]
struct Ping {
    ping_id: i64,
}

impl Identifiable for Ping {
    const CONSTRUCTOR_ID: u32 = 0x7abe77ec;
    const NAME: &'static str = "ping";
}

impl Serializable for Ping {
    fn serialize(&self, buf: &mut impl Extend<u8>) {
        self.ping_id.serialize(buf);
    }
}

impl Deserializable for Ping {
    fn deserialize(buf: tlwire::deserialize::Buffer) -> tlwire::deserialize::Result<Self> {
        Ok(Self { ping_id: i64::deserialize(buf)? })
    }
}

#[derive(Clone, Debug, PartialEq)]
enum Message {
    Ping(Ping),
    Text(String),
}

impl From<Ping> for Message {
    fn from(p: Ping) -> Self { Self::Ping(p) }
}

fn registry() -> Registry<Message> {
    let mut reg = Registry::new(158);
    reg.register::<Ping>();
    reg.insert(0x00c0ffee, "text", |buf| Ok(Message::Text(String::deserialize(buf)?)));
    reg
}

#[test]
fn dispatches_on_leading_id() {
    use tlwire::Boxed;

    let reg = registry();
    assert_eq!(reg.layer(), 158);
    assert_eq!(reg.len(), 2);
    assert_eq!(reg.name_for_id(0x7abe77ec), Some("ping"));

    let ping = Ping { ping_id: -5 };
    assert_eq!(reg.from_bytes(&ping.to_boxed_bytes()).unwrap(), Message::Ping(ping));

    let mut wire = 0x00c0ffeeu32.to_bytes();
    wire.extend("hi".to_owned().to_bytes());
    assert_eq!(reg.from_bytes(&wire).unwrap(), Message::Text("hi".into()));
}

#[test]
fn unknown_id_consumes_only_the_id() {
    let reg = registry();
    let mut wire = 0xdeadbeefu32.to_bytes();
    wire.extend([1, 2, 3, 4, 5, 6, 7, 8]);

    let mut cur = Cursor::from_slice(&wire);
    assert_eq!(reg.read(&mut cur), Err(Error::UnknownConstructor { id: 0xdeadbeef }));
    assert_eq!(cur.pos(), 4);
}

#[test]
fn truncated_body_fails() {
    let reg = registry();
    let mut wire = Ping::CONSTRUCTOR_ID.to_bytes();
    wire.extend([0, 0, 0]);
    assert!(matches!(reg.from_bytes(&wire), Err(Error::Truncated { needed: 8, .. })));
}

#[test]
fn reregistering_reports_the_replaced_entry() {
    let mut reg = registry();
    let old = reg.insert(Ping::CONSTRUCTOR_ID, "ping2", |buf| {
        Ok(Message::Ping(Ping { ping_id: i64::deserialize(buf)? + 1 }))
    });
    assert_eq!(old, Some("ping"));
    assert_eq!(reg.len(), 2);
}

#[test]
fn boxed_read_checks_the_id() {
    use tlwire::Boxed;

    let bytes = Ping { ping_id: 1 }.to_boxed_bytes();
    assert_eq!(Ping::deserialize_boxed(&mut Cursor::from_slice(&bytes)).unwrap().ping_id, 1);

    let mut other = 0x11111111u32.to_bytes();
    other.extend(1i64.to_bytes());
    assert_eq!(
        Ping::deserialize_boxed(&mut Cursor::from_slice(&other)),
        Err(Error::UnknownConstructor { id: 0x11111111 })
    );
}

#[test]
fn shared_across_threads() {
    use tlwire::Boxed;

    let reg = Arc::new(registry());
    let handles: Vec<_> = (0..4i64)
        .map(|n| {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                let bytes = Ping { ping_id: n }.to_boxed_bytes();
                reg.from_bytes(&bytes).unwrap()
            })
        })
        .collect();

    for (n, h) in handles.into_iter().enumerate() {
        assert_eq!(h.join().unwrap(), Message::Ping(Ping { ping_id: n as i64 }));
    }
}
