//! End-to-end runs of the translator over in-memory event streams.

use keymouse::event::{BTN_LEFT, KEY_PRESS, KEY_RELEASE, KEY_REPEAT, REL_X, REL_Y};
use keymouse::remap::{self, RunStats};
use keymouse::{Event, Keymap, Result, Timestamp, Translator};

const KEY_A: u16 = 30;
const KEY_W: u16 = 17;
const KEY_J: u16 = 36;
const KEY_RIGHTMETA: u16 = 126;

fn run(input: &[Event]) -> (Vec<Event>, RunStats) {
    let mut source = input.to_vec().into_iter();
    let mut written = Vec::new();
    let mut sink = |event: &Event| -> Result<()> {
        written.push(*event);
        Ok(())
    };
    let mut translator = Translator::new(Keymap::default(), 10);
    let stats = remap::run(&mut source, &mut sink, &mut translator).unwrap();
    (written, stats)
}

fn report(scan: i32, code: u16, value: i32) -> Vec<Event> {
    vec![Event::scan(scan), Event::key(code, value), Event::sync()]
}

fn motion(dx: i32, dy: i32) -> Vec<Event> {
    vec![
        Event::relative(REL_X, dx),
        Event::relative(REL_Y, dy),
        Event::sync(),
    ]
}

#[test]
fn test_plain_key_unchanged() {
    let input = report(30, KEY_A, KEY_PRESS);
    let (output, stats) = run(&input);
    assert_eq!(output, input);
    assert_eq!(stats, RunStats { read: 3, written: 3 });
}

#[test]
fn test_modifier_movement_sequence() {
    let modifier = report(0xe7, KEY_RIGHTMETA, KEY_PRESS);
    let mut input = modifier.clone();
    input.extend(report(17, KEY_W, KEY_PRESS));
    input.extend(report(17, KEY_W, KEY_REPEAT));
    input.extend(report(17, KEY_W, KEY_RELEASE));
    input.extend(report(17, KEY_W, KEY_PRESS));

    let mut expected = modifier;
    expected.extend(motion(-10, -10));
    expected.extend(motion(-11, -11));
    // release: nothing
    expected.extend(motion(-10, -10));

    let (output, stats) = run(&input);
    assert_eq!(output, expected);
    assert_eq!(stats.read, 15);
    assert_eq!(stats.written, 12);
}

#[test]
fn test_modifier_button_click() {
    let mut input = report(0xe7, KEY_RIGHTMETA, KEY_PRESS);
    input.extend(report(36, KEY_J, KEY_PRESS));
    input.extend(report(36, KEY_J, KEY_RELEASE));

    let (output, _) = run(&input);
    let clicks = &output[3..];
    let sync = Event::sync();
    assert_eq!(
        clicks,
        &[
            Event::key(KEY_RIGHTMETA, KEY_RELEASE),
            sync,
            Event::key(BTN_LEFT, KEY_PRESS),
            sync,
            Event::key(KEY_RIGHTMETA, KEY_PRESS),
            sync,
            Event::key(KEY_RIGHTMETA, KEY_RELEASE),
            sync,
            Event::key(BTN_LEFT, KEY_RELEASE),
            sync,
            Event::key(KEY_RIGHTMETA, KEY_PRESS),
            sync,
        ]
    );
    assert!(!clicks.iter().any(|event| event.is_key() && event.code == KEY_J));
}

#[test]
fn test_mixed_stream_accounts_for_every_event() {
    let mut input = Vec::new();
    input.extend(report(30, KEY_A, KEY_PRESS));
    // A keyboard that omits scan codes
    input.extend([Event::key(KEY_A, KEY_RELEASE), Event::sync()]);
    input.extend(report(0xe7, KEY_RIGHTMETA, KEY_PRESS));
    input.extend([Event::key(KEY_W, KEY_PRESS), Event::sync()]);
    input.extend([Event::key(KEY_W, KEY_RELEASE), Event::sync()]);
    input.extend(report(0xe7, KEY_RIGHTMETA, KEY_RELEASE));
    input.extend(report(17, KEY_W, KEY_PRESS));

    let (output, stats) = run(&input);

    let mut expected = Vec::new();
    expected.extend(report(30, KEY_A, KEY_PRESS));
    expected.extend([Event::key(KEY_A, KEY_RELEASE), Event::sync()]);
    expected.extend(report(0xe7, KEY_RIGHTMETA, KEY_PRESS));
    expected.extend(motion(-10, -10));
    expected.extend(report(0xe7, KEY_RIGHTMETA, KEY_RELEASE));
    expected.extend(report(17, KEY_W, KEY_PRESS));

    assert_eq!(output, expected);
    assert_eq!(stats.read, 18);
    assert_eq!(stats.written, 17);
}

#[test]
fn test_timestamps_preserved_on_passthrough() {
    let input: Vec<Event> = report(30, KEY_A, KEY_PRESS)
        .into_iter()
        .enumerate()
        .map(|(i, event)| event.at(Timestamp::new(50, i as i64)))
        .collect();
    let (output, _) = run(&input);
    assert_eq!(output, input);
}
