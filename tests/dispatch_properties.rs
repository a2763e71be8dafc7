// Properties of capability dispatch and the composite.

use oop_intro::interfaces::{Car, CdPlayer, Media, NiceCar};
use proptest::prelude::*;
use std::io::{self, Write};

#[derive(Debug, Clone, Copy)]
enum Call {
    Start,
    Stop,
}

fn call_strategy() -> impl Strategy<Value = Call> {
    prop_oneof![Just(Call::Start), Just(Call::Stop)]
}

fn invoke(media: &dyn Media, call: Call, out: &mut dyn Write) -> io::Result<()> {
    match call {
        Call::Start => media.start(out),
        Call::Stop => media.stop(out),
    }
}

fn expected_car(call: Call) -> &'static str {
    match call {
        Call::Start => "I start the Car.\n",
        Call::Stop => "I stop the Car.\n",
    }
}

fn expected_player(call: Call) -> &'static str {
    match call {
        Call::Start => "Music startsssss\n",
        Call::Stop => "Music stopsssss\n",
    }
}

proptest! {
    // Any call sequence through a &dyn Media prints only the bound variant's lines
    #[test]
    fn test_dispatch_follows_bound_variant(calls in prop::collection::vec(call_strategy(), 0..20)) {
        let car: &dyn Media = &Car;
        let player: &dyn Media = &CdPlayer;
        let mut car_out = Vec::new();
        let mut player_out = Vec::new();

        for &call in &calls {
            invoke(car, call, &mut car_out).unwrap();
            invoke(player, call, &mut player_out).unwrap();
        }

        let car_expected: String = calls.iter().map(|&c| expected_car(c)).collect();
        let player_expected: String = calls.iter().map(|&c| expected_player(c)).collect();
        prop_assert_eq!(String::from_utf8(car_out).unwrap(), car_expected);
        prop_assert_eq!(String::from_utf8(player_out).unwrap(), player_expected);
    }

    #[test]
    fn test_nice_car_matches_its_player(calls in prop::collection::vec(call_strategy(), 0..20)) {
        let nice = NiceCar::new();
        let mut out = Vec::new();

        for &call in &calls {
            match call {
                Call::Start => nice.start_music(&mut out).unwrap(),
                Call::Stop => nice.stop_music(&mut out).unwrap(),
            }
        }

        let expected: String = calls.iter().map(|&c| expected_player(c)).collect();
        prop_assert_eq!(String::from_utf8(out).unwrap(), expected);
    }
}

struct BrokenPipe;

impl Write for BrokenPipe {
    fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
        Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[test]
fn test_write_failure_surfaces_as_io_error() {
    let err = oop_intro::interfaces::run(&mut BrokenPipe).unwrap_err();
    assert!(matches!(err, oop_intro::DemoError::Io(_)));
}
